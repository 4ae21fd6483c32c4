//! Build-time configuration of the frontend.
//!
//! The API location can be overridden when building, e.g.
//! `PORTFOLIO_API_URL=https://api.example.org/api trunk build`.

/// Used when `PORTFOLIO_API_URL` is not set at build time.
pub const DEFAULT_API_URL: &str = "http://localhost:5678/api";

pub const HOME_PAGE: &str = common::login::HOME_PAGE;
pub const LOGIN_PAGE: &str = "login.html";

/// Ids of the host-page elements the components are mounted into.
pub const AUTH_NAV_ROOT: &str = "auth-nav";
pub const PORTFOLIO_ROOT: &str = "portfolio";
pub const LOGIN_ROOT: &str = "login";

pub fn api_base_url() -> &'static str {
    option_env!("PORTFOLIO_API_URL").unwrap_or(DEFAULT_API_URL)
}

/// Joins `path` (starting with `/`) onto the API base URL.
pub fn endpoint(path: &str) -> String {
    format!("{}{}", api_base_url().trim_end_matches('/'), path)
}
