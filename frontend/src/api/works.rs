use common::model::work::Work;
use gloo_net::http::Request;
use web_sys::{File, FormData};

use super::{bearer, status_error, ApiError};
use crate::config::endpoint;

/// `GET /works`, public.
pub async fn list() -> Result<Vec<Work>, ApiError> {
    let response = Request::get(&endpoint("/works")).send().await?;
    if !response.ok() {
        return Err(status_error(&response, "failed to fetch works").await);
    }
    Ok(response.json::<Vec<Work>>().await?)
}

/// `POST /works` as `multipart/form-data`. The browser sets the content type
/// and boundary from the `FormData` body.
pub async fn create(payload: FormData) -> Result<Work, ApiError> {
    let authorization = bearer("add a project")?;
    let response = Request::post(&endpoint("/works"))
        .header("Authorization", &authorization)
        .body(payload)?
        .send()
        .await?;
    if !response.ok() {
        return Err(status_error(&response, "failed to add project").await);
    }
    Ok(response.json::<Work>().await?)
}

/// `DELETE /works/{id}`. A 204 carries no body, so none is read.
pub async fn delete(id: u32) -> Result<(), ApiError> {
    let authorization = bearer("delete a project")?;
    let response = Request::delete(&endpoint(&format!("/works/{}", id)))
        .header("Authorization", &authorization)
        .send()
        .await?;
    if !response.ok() {
        return Err(status_error(&response, &format!("failed to delete project {}", id)).await);
    }
    Ok(())
}

/// Builds the three-field payload expected by `POST /works`.
pub fn multipart(title: &str, category: &str, image: &File) -> Result<FormData, ApiError> {
    let payload = FormData::new().map_err(|err| ApiError::Payload(format!("{:?}", err)))?;
    payload
        .append_with_str("title", title)
        .and_then(|_| payload.append_with_str("category", category))
        .and_then(|_| payload.append_with_blob("image", image))
        .map_err(|err| ApiError::Payload(format!("{:?}", err)))?;
    Ok(payload)
}
