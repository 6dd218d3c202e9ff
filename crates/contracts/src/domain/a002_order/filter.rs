use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Тип фильтра на странице фильтрации заказов
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderFilterKind {
    #[default]
    Customer,
    Date,
}

impl OrderFilterKind {
    pub fn code(&self) -> &'static str {
        match self {
            OrderFilterKind::Customer => "customer",
            OrderFilterKind::Date => "date",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "customer" => Some(OrderFilterKind::Customer),
            "date" => Some(OrderFilterKind::Date),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OrderFilterKind::Customer => "По имени клиента",
            OrderFilterKind::Date => "По дате",
        }
    }
}

/// Проверенный фильтр, готовый к отправке
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderFilter {
    ByCustomerName(String),
    ByDate(NaiveDate),
}

/// Query string of `/api/orders/filter/{customer|date}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OrderFilterQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
}

impl OrderFilter {
    pub fn path(&self) -> &'static str {
        match self {
            OrderFilter::ByCustomerName(_) => "/api/orders/filter/customer",
            OrderFilter::ByDate(_) => "/api/orders/filter/date",
        }
    }

    pub fn query(&self) -> OrderFilterQuery {
        match self {
            OrderFilter::ByCustomerName(name) => OrderFilterQuery {
                name: Some(name.clone()),
                date: None,
            },
            OrderFilter::ByDate(date) => OrderFilterQuery {
                name: None,
                date: Some(*date),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum OrderFilterError {
    #[error("Введите имя пользователя для фильтрации")]
    CustomerNameRequired,
    #[error("Выберите дату для фильтрации")]
    DateRequired,
    #[error("Дата должна быть в формате ГГГГ-ММ-ДД")]
    DateFormat,
}

/// Значения полей страницы фильтрации, как их ввёл пользователь
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderFilterForm {
    pub kind: OrderFilterKind,
    pub customer_name: String,
    pub date: String,
}

impl OrderFilterForm {
    /// Checks only the input of the active filter kind.
    pub fn build(&self) -> Result<OrderFilter, OrderFilterError> {
        match self.kind {
            OrderFilterKind::Customer => {
                let name = self.customer_name.trim();
                if name.is_empty() {
                    return Err(OrderFilterError::CustomerNameRequired);
                }
                Ok(OrderFilter::ByCustomerName(name.to_string()))
            }
            OrderFilterKind::Date => {
                let raw = self.date.trim();
                if raw.is_empty() {
                    return Err(OrderFilterError::DateRequired);
                }
                NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                    .map(OrderFilter::ByDate)
                    .map_err(|_| OrderFilterError::DateFormat)
            }
        }
    }

    pub fn clear(&mut self) {
        self.customer_name.clear();
        self.date.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn customer_filter_requires_a_name() {
        let mut form = OrderFilterForm::default();
        assert_eq!(form.build(), Err(OrderFilterError::CustomerNameRequired));
        form.customer_name = "  ".into();
        assert_eq!(form.build(), Err(OrderFilterError::CustomerNameRequired));
        form.customer_name = " ivanov ".into();
        assert_eq!(form.build(), Ok(OrderFilter::ByCustomerName("ivanov".into())));
    }

    #[test]
    fn date_filter_requires_a_valid_date() {
        let mut form = OrderFilterForm {
            kind: OrderFilterKind::Date,
            customer_name: "ignored".into(),
            ..Default::default()
        };
        assert_eq!(form.build(), Err(OrderFilterError::DateRequired));
        form.date = "02.06.2024".into();
        assert_eq!(form.build(), Err(OrderFilterError::DateFormat));
        form.date = "2024-06-02".into();
        assert_eq!(
            form.build(),
            Ok(OrderFilter::ByDate(NaiveDate::from_ymd_opt(2024, 6, 2).unwrap()))
        );
    }

    #[test]
    fn query_carries_only_the_active_parameter() {
        let by_name = OrderFilter::ByCustomerName("ivanov".into());
        assert_eq!(by_name.path(), "/api/orders/filter/customer");
        assert_eq!(
            serde_json::to_value(by_name.query()).unwrap(),
            serde_json::json!({ "name": "ivanov" })
        );

        let by_date = OrderFilter::ByDate(NaiveDate::from_ymd_opt(2024, 6, 2).unwrap());
        assert_eq!(by_date.path(), "/api/orders/filter/date");
        assert_eq!(
            serde_json::to_value(by_date.query()).unwrap(),
            serde_json::json!({ "date": "2024-06-02" })
        );
    }

    #[test]
    fn kind_codes_round_trip() {
        for kind in [OrderFilterKind::Customer, OrderFilterKind::Date] {
            assert_eq!(OrderFilterKind::from_code(kind.code()), Some(kind));
        }
        assert_eq!(OrderFilterKind::from_code("other"), None);
    }

    #[test]
    fn clear_keeps_the_selected_kind() {
        let mut form = OrderFilterForm {
            kind: OrderFilterKind::Date,
            customer_name: "a".into(),
            date: "2024-01-01".into(),
        };
        form.clear();
        assert_eq!(form.kind, OrderFilterKind::Date);
        assert!(form.customer_name.is_empty() && form.date.is_empty());
    }
}
