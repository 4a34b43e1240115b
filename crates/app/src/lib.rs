//! # barzmap-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `EquipmentRepository` — CRUD against the remote `equipment` table
//!   - `UserRepository` — CRUD against the remote `users` table
//!   - `TokenDecoder` — turn a bearer token into claims
//! - Define **driving/inbound ports** as use-case structs:
//!   - `EquipmentService` — get, create, update, delete
//!   - `UserService` — get, create, update, delete
//!   - `AuthService` — bearer extraction and token validation
//! - Validate every payload before it crosses a port
//!
//! ## Dependency rule
//! Depends on `barzmap-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
