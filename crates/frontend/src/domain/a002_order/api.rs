//! REST calls for orders: per-customer CRUD and the two filter endpoints.

use crate::shared::api_utils::{api_url, api_url_with_query};
use crate::shared::http;
use contracts::domain::a001_customer::aggregate::CustomerId;
use contracts::domain::a002_order::aggregate::{Order, OrderDto, OrderId};
use contracts::domain::a002_order::filter::OrderFilter;
use contracts::shared::api_error::ApiError;

fn orders_path(customer_id: CustomerId) -> String {
    format!("/api/customers/{}/orders", customer_id)
}

fn order_path(customer_id: CustomerId, order_id: OrderId) -> String {
    format!("/api/customers/{}/orders/{}", customer_id, order_id)
}

/// 204 comes back as [`ApiError::NoContent`], an unknown customer as
/// [`ApiError::BadRequest`].
pub async fn fetch_orders(customer_id: CustomerId) -> Result<Vec<Order>, ApiError> {
    http::get_json(&api_url(&orders_path(customer_id))).await
}

pub async fn fetch_order(customer_id: CustomerId, order_id: OrderId) -> Result<Order, ApiError> {
    http::get_json(&api_url(&order_path(customer_id, order_id))).await
}

pub async fn create_order(customer_id: CustomerId, dto: &OrderDto) -> Result<Order, ApiError> {
    http::post_json(&api_url(&orders_path(customer_id)), dto).await
}

pub async fn update_order(
    customer_id: CustomerId,
    order_id: OrderId,
    dto: &OrderDto,
) -> Result<Order, ApiError> {
    http::put_json(&api_url(&order_path(customer_id, order_id)), dto).await
}

pub async fn delete_order(customer_id: CustomerId, order_id: OrderId) -> Result<(), ApiError> {
    http::delete(&api_url(&order_path(customer_id, order_id))).await
}

pub async fn filter_orders(filter: &OrderFilter) -> Result<Vec<Order>, ApiError> {
    let url = api_url_with_query(filter.path(), &filter.query()).map_err(ApiError::decode)?;
    http::get_json(&url).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_paths() {
        assert_eq!(orders_path(CustomerId(4)), "/api/customers/4/orders");
        assert_eq!(order_path(CustomerId(4), OrderId(9)), "/api/customers/4/orders/9");
    }
}
