//! Storage port — repository traits for the remote tables.
//!
//! Every mutating call returns the rows the store reports as affected, so a
//! caller can echo them back without a second round-trip.

use std::future::Future;

use barzmap_domain::equipment::{Equipment, EquipmentPatch, NewEquipment};
use barzmap_domain::error::BarzError;
use barzmap_domain::id::{EquipmentId, UserId};
use barzmap_domain::user::{NewUser, User, UserPatch};

/// Repository for the `equipment` table.
pub trait EquipmentRepository {
    /// Get the row with `id`, if any.
    fn get_by_id(
        &self,
        id: EquipmentId,
    ) -> impl Future<Output = Result<Option<Equipment>, BarzError>> + Send;

    /// Get every row of the table.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Equipment>, BarzError>> + Send;

    /// Insert a new row; the store assigns the identifier.
    fn create(
        &self,
        equipment: NewEquipment,
    ) -> impl Future<Output = Result<Vec<Equipment>, BarzError>> + Send;

    /// Write the fields present in `patch` to the row matching `patch.id`.
    fn update(
        &self,
        patch: EquipmentPatch,
    ) -> impl Future<Output = Result<Vec<Equipment>, BarzError>> + Send;

    /// Remove the row with `id`.
    fn delete(
        &self,
        id: EquipmentId,
    ) -> impl Future<Output = Result<Vec<Equipment>, BarzError>> + Send;
}

/// Repository for the `users` table.
pub trait UserRepository {
    /// Get the row with `id`, if any.
    fn get_by_id(&self, id: UserId) -> impl Future<Output = Result<Option<User>, BarzError>> + Send;

    /// Get every row of the table.
    fn get_all(&self) -> impl Future<Output = Result<Vec<User>, BarzError>> + Send;

    /// Insert a new row; the store assigns the identifier.
    fn create(&self, user: NewUser) -> impl Future<Output = Result<Vec<User>, BarzError>> + Send;

    /// Write the fields present in `patch` to the row matching `patch.id`.
    fn update(&self, patch: UserPatch) -> impl Future<Output = Result<Vec<User>, BarzError>> + Send;

    /// Remove the row with `id`.
    fn delete(&self, id: UserId) -> impl Future<Output = Result<Vec<User>, BarzError>> + Send;
}
