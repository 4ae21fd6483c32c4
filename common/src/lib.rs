//! Browser-independent core of the portfolio gallery.
//!
//! Everything here is plain Rust over `serde` models so it can be unit tested
//! on the host: the frontend crate only adds the DOM, network and storage
//! bindings around these types.

pub mod gallery;
pub mod login;
pub mod modal;
pub mod model;
pub mod session;
pub mod validation;
