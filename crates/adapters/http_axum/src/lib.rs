//! # barzmap-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the JSON routes: `/equipment/…`, `/user/…`, `/park/…`, `/validate/`
//! - Map HTTP requests into application service calls (driving adapter)
//! - Parse identifiers at the boundary so malformed ids never reach the store
//! - Map application results and errors into HTTP responses
//!
//! ## Dependency rule
//! Depends on `barzmap-app` (for port traits and services) and `barzmap-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;

#[cfg(test)]
mod test_support;
