//! Client API calls for customer and product lookups.

use common::records::{CustomerHit, CustomerRecord, ProductRecord};
use dioxus::prelude::*;

#[server]
pub async fn search_customers(text: String) -> Result<Vec<CustomerHit>, ServerFnError> {
    let x = backend::api::customers::search_customers(text).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn list_customers() -> Result<Vec<CustomerRecord>, ServerFnError> {
    let x = backend::api::customers::list_customers().await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn list_products() -> Result<Vec<ProductRecord>, ServerFnError> {
    let x = backend::api::products::list_products().await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}
