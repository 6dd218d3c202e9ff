use crate::domain::a001_customer::aggregate::{Customer, CustomerId};
use crate::domain::common::EntityMetadata;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

pub const DESCRIPTION_MAX_LEN: usize = 255;

// ============================================================================
// ID Type
// ============================================================================
crate::numeric_id!(
    /// Идентификатор заказа
    OrderId
);

// ============================================================================
// Server record
// ============================================================================

/// Заказ. Эндпоинты заказов клиента отдают `customerId`/`customerName`,
/// эндпоинты фильтрации отдают вложенного `customer`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "orderDate", default)]
    pub order_date: Option<NaiveDateTime>,
    #[serde(rename = "customerId", default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<CustomerId>,
    #[serde(rename = "customerName", default, skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer: Option<Customer>,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl Order {
    /// Имя клиента из того источника, который прислал backend
    pub fn customer_label(&self) -> Option<String> {
        self.customer_name
            .clone()
            .or_else(|| self.customer.as_ref().map(|c| c.username.clone()))
    }
}

// ============================================================================
// DTO
// ============================================================================

/// Тело `POST`/`PUT /api/customers/{id}/orders[/{orderId}]`.
/// Если `orderDate` не задан, backend подставляет текущее время.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderDto {
    pub description: String,
    #[serde(rename = "orderDate", default, skip_serializing_if = "Option::is_none")]
    pub order_date: Option<NaiveDateTime>,
}

impl From<&Order> for OrderDto {
    fn from(o: &Order) -> Self {
        Self {
            description: o.description.clone(),
            order_date: o.order_date,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum OrderFormError {
    #[error("Описание заказа обязательно")]
    DescriptionRequired,
    #[error("Описание заказа не должно превышать 255 символов")]
    DescriptionTooLong,
}

impl OrderDto {
    pub fn validate(&self) -> Result<(), OrderFormError> {
        let description = self.description.trim();
        if description.is_empty() {
            return Err(OrderFormError::DescriptionRequired);
        }
        if description.chars().count() > DESCRIPTION_MAX_LEN {
            return Err(OrderFormError::DescriptionTooLong);
        }
        Ok(())
    }
}
