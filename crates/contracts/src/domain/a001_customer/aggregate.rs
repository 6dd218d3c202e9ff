use crate::domain::common::EntityMetadata;
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================
crate::numeric_id!(
    /// Идентификатор клиента (`Long` на стороне backend)
    CustomerId
);

// ============================================================================
// Server record
// ============================================================================

/// Клиент в том виде, в котором его возвращает `GET /api/customers[/{id}]`.
///
/// Пароль backend никогда не отдаёт; в записи, вложенной в заказ, он может
/// присутствовать в виде хеша и просто игнорируется.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(rename = "companyName", default)]
    pub company_name: Option<String>,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl Customer {
    pub fn display_name(&self) -> String {
        match self.company_name.as_deref().filter(|c| !c.trim().is_empty()) {
            Some(company) => format!("{} ({})", self.username, company),
            None => self.username.clone(),
        }
    }
}

// ============================================================================
// DTO
// ============================================================================

/// Черновик клиента: тело `POST /api/customers`, элемент массива
/// `POST /api/customers/bulk` и тело `PUT /api/customers/{id}`.
///
/// Все поля хранятся строками, как их вводит пользователь; пустые
/// необязательные поля отправляются пустыми строками.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerDto {
    pub username: String,
    pub password: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(rename = "companyName", default)]
    pub company_name: String,
}

impl CustomerDto {
    /// Значение поля формы
    pub fn get(&self, field: CustomerField) -> &str {
        match field {
            CustomerField::Username => &self.username,
            CustomerField::Password => &self.password,
            CustomerField::Email => &self.email,
            CustomerField::Phone => &self.phone,
            CustomerField::Address => &self.address,
            CustomerField::CompanyName => &self.company_name,
        }
    }

    /// Установить значение поля формы
    pub fn set(&mut self, field: CustomerField, value: String) {
        let slot = match field {
            CustomerField::Username => &mut self.username,
            CustomerField::Password => &mut self.password,
            CustomerField::Email => &mut self.email,
            CustomerField::Phone => &mut self.phone,
            CustomerField::Address => &mut self.address,
            CustomerField::CompanyName => &mut self.company_name,
        };
        *slot = value;
    }
}

/// Черновик для редактирования: поля копируются из записи, пароль
/// никогда не подставляется.
impl From<&Customer> for CustomerDto {
    fn from(c: &Customer) -> Self {
        Self {
            username: c.username.clone(),
            password: String::new(),
            email: c.email.clone(),
            phone: c.phone.clone().unwrap_or_default(),
            address: c.address.clone().unwrap_or_default(),
            company_name: c.company_name.clone().unwrap_or_default(),
        }
    }
}

// ============================================================================
// Field set
// ============================================================================

/// Поля формы клиента в порядке отображения
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CustomerField {
    Username,
    Password,
    Email,
    Phone,
    Address,
    CompanyName,
}

impl CustomerField {
    pub const ALL: [CustomerField; 6] = [
        CustomerField::Username,
        CustomerField::Password,
        CustomerField::Email,
        CustomerField::Phone,
        CustomerField::Address,
        CustomerField::CompanyName,
    ];

    /// Имя поля на проводе (совпадает с ключом JSON)
    pub fn name(&self) -> &'static str {
        match self {
            CustomerField::Username => "username",
            CustomerField::Password => "password",
            CustomerField::Email => "email",
            CustomerField::Phone => "phone",
            CustomerField::Address => "address",
            CustomerField::CompanyName => "companyName",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CustomerField::Username => "Имя пользователя",
            CustomerField::Password => "Пароль",
            CustomerField::Email => "Email",
            CustomerField::Phone => "Телефон",
            CustomerField::Address => "Адрес",
            CustomerField::CompanyName => "Название компании",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            CustomerField::Username => "Введите имя пользователя",
            CustomerField::Password => "Введите пароль",
            CustomerField::Email => "Введите email",
            CustomerField::Phone => "Введите телефон (опционально)",
            CustomerField::Address => "Введите адрес (опционально)",
            CustomerField::CompanyName => "Введите название компании (опционально)",
        }
    }

    /// HTML-тип input'а
    pub fn input_type(&self) -> &'static str {
        match self {
            CustomerField::Password => "password",
            CustomerField::Email => "email",
            _ => "text",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn customer_deserializes_from_backend_json() {
        let json = r#"{
            "id": 17,
            "username": "ivanov",
            "email": "ivanov@example.com",
            "phone": null,
            "address": "Минск",
            "companyName": "ООО Ромашка",
            "createdAt": "2024-03-15T14:02:26",
            "updatedAt": "2024-03-16T09:00:00.123"
        }"#;
        let c: Customer = serde_json::from_str(json).unwrap();
        assert_eq!(c.id, CustomerId(17));
        assert_eq!(c.phone, None);
        assert_eq!(c.company_name.as_deref(), Some("ООО Ромашка"));
        let created = NaiveDate::from_ymd_opt(2024, 3, 15)
            .unwrap()
            .and_hms_opt(14, 2, 26)
            .unwrap();
        assert_eq!(c.metadata.created_at, Some(created));
        assert!(c.metadata.updated_at.is_some());
        assert_eq!(c.display_name(), "ivanov (ООО Ромашка)");
    }

    #[test]
    fn customer_tolerates_missing_optional_fields() {
        let c: Customer = serde_json::from_str(r#"{"id": 3, "username": "u", "email": "e@x.io"}"#).unwrap();
        assert_eq!(c.metadata, EntityMetadata::default());
        assert_eq!(c.display_name(), "u");
    }

    #[test]
    fn dto_uses_camel_case_on_the_wire() {
        let dto = CustomerDto {
            username: "petrov".into(),
            password: "secret1".into(),
            email: "p@x.io".into(),
            company_name: "ACME".into(),
            ..Default::default()
        };
        let value = serde_json::to_value(&dto).unwrap();
        assert_eq!(value["companyName"], "ACME");
        assert_eq!(value["phone"], "");
        assert!(value.get("company_name").is_none());
    }

    #[test]
    fn dto_from_customer_never_copies_a_password() {
        let c = Customer {
            id: CustomerId(1),
            username: "a".into(),
            email: "a@b.co".into(),
            phone: Some("+375".into()),
            address: None,
            company_name: None,
            metadata: EntityMetadata::default(),
        };
        let dto = CustomerDto::from(&c);
        assert_eq!(dto.password, "");
        assert_eq!(dto.phone, "+375");
        assert_eq!(dto.address, "");
    }

    #[test]
    fn field_get_set_and_names() {
        let mut dto = CustomerDto::default();
        for field in CustomerField::ALL {
            dto.set(field, field.name().to_string());
            assert_eq!(dto.get(field), field.name());
        }
    }
}
