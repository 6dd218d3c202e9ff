//! REST calls for customers (`/api/customers`).

use crate::shared::api_utils::api_url;
use crate::shared::http;
use contracts::domain::a001_customer::aggregate::{Customer, CustomerDto, CustomerId};
use contracts::domain::a001_customer::bulk_form::SubmissionPayload;
use contracts::shared::api_error::ApiError;

const CUSTOMERS_PATH: &str = "/api/customers";
const BULK_PATH: &str = "/api/customers/bulk";

fn customer_path(id: CustomerId) -> String {
    format!("{}/{}", CUSTOMERS_PATH, id)
}

pub async fn fetch_customers() -> Result<Vec<Customer>, ApiError> {
    http::get_json(&api_url(CUSTOMERS_PATH)).await
}

pub async fn fetch_customer(id: CustomerId) -> Result<Customer, ApiError> {
    http::get_json(&api_url(&customer_path(id))).await
}

/// `POST /api/customers` with a single draft
pub async fn create_customer(dto: &CustomerDto) -> Result<Customer, ApiError> {
    http::post_json(&api_url(CUSTOMERS_PATH), dto).await
}

pub async fn create_customers_bulk(records: &[CustomerDto]) -> Result<Vec<Customer>, ApiError> {
    http::post_json(&api_url(BULK_PATH), &records).await
}

pub async fn update_customer(id: CustomerId, dto: &CustomerDto) -> Result<Customer, ApiError> {
    http::put_json(&api_url(&customer_path(id)), dto).await
}

pub async fn delete_customer(id: CustomerId) -> Result<(), ApiError> {
    http::delete(&api_url(&customer_path(id))).await
}

/// Sends what the bulk form produced; returns the number of saved customers.
pub async fn submit(payload: &SubmissionPayload) -> Result<usize, ApiError> {
    match payload {
        SubmissionPayload::Update { id, dto } => {
            let saved = update_customer(*id, dto).await?;
            log::info!("Customer {} updated", saved.id);
            Ok(1)
        }
        SubmissionPayload::CreateBatch(records) => {
            let saved = create_customers_bulk(records).await?;
            log::info!("{} customers created", saved.len());
            Ok(saved.len())
        }
    }
}
