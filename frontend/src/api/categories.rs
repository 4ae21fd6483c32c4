use common::model::category::Category;
use gloo_net::http::Request;

use super::{status_error, ApiError};
use crate::config::endpoint;

/// `GET /categories`, public.
pub async fn list() -> Result<Vec<Category>, ApiError> {
    let response = Request::get(&endpoint("/categories")).send().await?;
    if !response.ok() {
        return Err(status_error(&response, "failed to fetch categories").await);
    }
    Ok(response.json::<Vec<Category>>().await?)
}
