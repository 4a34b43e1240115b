//! PostgREST implementation of [`EquipmentRepository`].

use std::future::Future;

use barzmap_app::ports::EquipmentRepository;
use barzmap_domain::equipment::{Equipment, EquipmentPatch, NewEquipment};
use barzmap_domain::error::BarzError;
use barzmap_domain::id::EquipmentId;

use crate::client::{Filter, PostgrestClient};

const TABLE: &str = "equipment";

/// Remote-store-backed equipment repository.
pub struct PostgrestEquipmentRepository {
    client: PostgrestClient,
}

impl PostgrestEquipmentRepository {
    /// Create a new repository sharing the given client.
    #[must_use]
    pub fn new(client: PostgrestClient) -> Self {
        Self { client }
    }
}

impl EquipmentRepository for PostgrestEquipmentRepository {
    fn get_by_id(
        &self,
        id: EquipmentId,
    ) -> impl Future<Output = Result<Option<Equipment>, BarzError>> + Send {
        let client = self.client.clone();
        async move {
            let rows: Vec<Equipment> = client.select(TABLE, Some(&Filter::eq("id", id))).await?;
            Ok(rows.into_iter().next())
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Equipment>, BarzError>> + Send {
        let client = self.client.clone();
        async move { Ok(client.select(TABLE, None).await?) }
    }

    fn create(
        &self,
        equipment: NewEquipment,
    ) -> impl Future<Output = Result<Vec<Equipment>, BarzError>> + Send {
        let client = self.client.clone();
        async move { Ok(client.insert(TABLE, &equipment).await?) }
    }

    fn update(
        &self,
        patch: EquipmentPatch,
    ) -> impl Future<Output = Result<Vec<Equipment>, BarzError>> + Send {
        let client = self.client.clone();
        async move {
            Ok(client
                .update(TABLE, &Filter::eq("id", patch.id), &patch)
                .await?)
        }
    }

    fn delete(
        &self,
        id: EquipmentId,
    ) -> impl Future<Output = Result<Vec<Equipment>, BarzError>> + Send {
        let client = self.client.clone();
        async move { Ok(client.delete(TABLE, &Filter::eq("id", id)).await?) }
    }
}
