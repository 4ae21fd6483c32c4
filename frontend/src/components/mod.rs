pub mod auth_link;
pub mod gallery;
pub mod login;
pub mod modal;
