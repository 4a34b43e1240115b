//! # barzmap-domain
//!
//! Pure domain model for the barzmap backend.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers and error conventions
//! - Define **Equipment** records and their create/patch payloads
//! - Define **Users** and their create/patch payloads
//! - Define decoded token **Claims**
//! - Enforce the input invariants the remote store would otherwise reject
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod claims;
pub mod equipment;
pub mod user;
