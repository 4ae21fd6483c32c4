use common::login::LoginRequest;
use gloo_net::http::Request;

use super::ApiError;
use crate::config::endpoint;

/// Status and body of a login attempt, left undecoded: interpreting them is
/// `common::login::resolve_login`'s job.
pub struct LoginReply {
    pub status: u16,
    pub body: String,
}

/// `POST /users/login` with a JSON body.
pub async fn login(request: &LoginRequest) -> Result<LoginReply, ApiError> {
    let response = Request::post(&endpoint("/users/login"))
        .json(request)?
        .send()
        .await?;
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Ok(LoginReply { status, body })
}
