//! # barzmap-adapter-storage-postgrest
//!
//! Remote-store adapter for a hosted Supabase project, spoken to through its
//! PostgREST table API with [reqwest](https://docs.rs/reqwest).
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `barzmap-app::ports::storage`
//! - Own the shared HTTP client handle and its lifetime
//! - Map between domain payloads and PostgREST requests (`?id=eq.<uuid>` filters,
//!   `Prefer: return=representation` on writes)
//! - Pass remote failures through as `StoreError`s without translating them
//!
//! ## Dependency rule
//! Depends on `barzmap-app` (for port traits) and `barzmap-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

pub mod client;
pub mod equipment_repo;
pub mod error;
pub mod user_repo;

pub use client::{Config, PostgrestClient};
pub use equipment_repo::PostgrestEquipmentRepository;
pub use user_repo::PostgrestUserRepository;
