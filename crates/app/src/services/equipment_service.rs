//! Equipment service — use-cases for the equipment catalogue.

use barzmap_domain::equipment::{Equipment, EquipmentPatch, NewEquipment};
use barzmap_domain::error::BarzError;
use barzmap_domain::id::EquipmentId;

use crate::ports::EquipmentRepository;

/// Application service for equipment CRUD operations.
pub struct EquipmentService<R> {
    repo: R,
}

impl<R: EquipmentRepository> EquipmentService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Fetch one row wrapped in a list when `id` is given, the whole table
    /// otherwise.
    ///
    /// # Errors
    ///
    /// Returns a store error propagated from the repository.
    pub async fn get_equipment(
        &self,
        id: Option<EquipmentId>,
    ) -> Result<Vec<Equipment>, BarzError> {
        match id {
            Some(id) => Ok(self.repo.get_by_id(id).await?.into_iter().collect()),
            None => self.repo.get_all().await,
        }
    }

    /// Insert a new equipment row after validating it.
    ///
    /// # Errors
    ///
    /// Returns [`BarzError::Validation`] if invariants fail, or a store
    /// error propagated from the repository.
    pub async fn create_equipment(
        &self,
        equipment: NewEquipment,
    ) -> Result<Vec<Equipment>, BarzError> {
        equipment.validate()?;
        self.repo.create(equipment).await
    }

    /// Apply a partial update.
    ///
    /// # Errors
    ///
    /// Returns [`BarzError::Validation`] if the patch is empty or invalid,
    /// or a store error from the repository.
    pub async fn update_equipment(
        &self,
        patch: EquipmentPatch,
    ) -> Result<Vec<Equipment>, BarzError> {
        patch.validate()?;
        tracing::debug!(id = %patch.id, "updating equipment");
        self.repo.update(patch).await
    }

    /// Delete the row with `id`, returning what was removed.
    ///
    /// # Errors
    ///
    /// Returns a store error propagated from the repository.
    pub async fn delete_equipment(&self, id: EquipmentId) -> Result<Vec<Equipment>, BarzError> {
        tracing::debug!(%id, "deleting equipment");
        self.repo.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use barzmap_domain::error::ValidationError;
    use serde_json::Map;
    use std::collections::HashMap;
    use std::future::Future;
    use std::sync::Mutex;

    #[derive(Default)]
    struct InMemoryEquipmentRepo {
        store: Mutex<HashMap<EquipmentId, Equipment>>,
    }

    impl EquipmentRepository for InMemoryEquipmentRepo {
        fn get_by_id(
            &self,
            id: EquipmentId,
        ) -> impl Future<Output = Result<Option<Equipment>, BarzError>> + Send {
            let result = self.store.lock().unwrap().get(&id).cloned();
            async move { Ok(result) }
        }

        fn get_all(&self) -> impl Future<Output = Result<Vec<Equipment>, BarzError>> + Send {
            let result: Vec<Equipment> = self.store.lock().unwrap().values().cloned().collect();
            async move { Ok(result) }
        }

        fn create(
            &self,
            equipment: NewEquipment,
        ) -> impl Future<Output = Result<Vec<Equipment>, BarzError>> + Send {
            let row = Equipment {
                id: EquipmentId::from_uuid(uuid::Uuid::new_v4()),
                name: Some(equipment.name),
                description: Some(equipment.description),
                icon_name: Some(equipment.icon_name),
                extra: Map::new(),
            };
            self.store.lock().unwrap().insert(row.id, row.clone());
            async move { Ok(vec![row]) }
        }

        fn update(
            &self,
            patch: EquipmentPatch,
        ) -> impl Future<Output = Result<Vec<Equipment>, BarzError>> + Send {
            let mut store = self.store.lock().unwrap();
            let result: Vec<Equipment> = store
                .get_mut(&patch.id)
                .map(|row| {
                    if patch.name.is_some() {
                        row.name = patch.name;
                    }
                    if let Some(description) = patch.description {
                        row.description = Some(description);
                    }
                    if let Some(icon_name) = patch.icon_name {
                        row.icon_name = Some(icon_name);
                    }
                    row.clone()
                })
                .into_iter()
                .collect();
            async move { Ok(result) }
        }

        fn delete(
            &self,
            id: EquipmentId,
        ) -> impl Future<Output = Result<Vec<Equipment>, BarzError>> + Send {
            let result: Vec<Equipment> = self.store.lock().unwrap().remove(&id).into_iter().collect();
            async move { Ok(result) }
        }
    }

    fn make_service() -> EquipmentService<InMemoryEquipmentRepo> {
        EquipmentService::new(InMemoryEquipmentRepo::default())
    }

    fn drill() -> NewEquipment {
        NewEquipment {
            name: "Drill".to_string(),
            description: "Cordless".to_string(),
            icon_name: "drill.svg".to_string(),
        }
    }

    #[tokio::test]
    async fn should_return_created_fields_when_fetching_by_returned_id() {
        let svc = make_service();
        let created = svc.create_equipment(drill()).await.unwrap();
        assert_eq!(created.len(), 1);

        let fetched = svc.get_equipment(Some(created[0].id)).await.unwrap();
        assert_eq!(fetched.len(), 1);
        assert_eq!(fetched[0].name.as_deref(), Some("Drill"));
        assert_eq!(fetched[0].description.as_deref(), Some("Cordless"));
        assert_eq!(fetched[0].icon_name.as_deref(), Some("drill.svg"));
    }

    #[tokio::test]
    async fn should_return_empty_list_when_id_unknown() {
        let svc = make_service();
        svc.create_equipment(drill()).await.unwrap();

        let unknown = EquipmentId::from_uuid(uuid::Uuid::new_v4());
        let fetched = svc.get_equipment(Some(unknown)).await.unwrap();
        assert!(fetched.is_empty());
    }

    #[tokio::test]
    async fn should_return_whole_table_when_id_omitted() {
        let svc = make_service();
        svc.create_equipment(drill()).await.unwrap();
        let mut bar = drill();
        bar.name = "Pull-up bar".to_string();
        svc.create_equipment(bar).await.unwrap();

        let all = svc.get_equipment(None).await.unwrap();
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn should_reject_create_when_name_is_blank() {
        let svc = make_service();
        let mut eq = drill();
        eq.name = String::new();

        let result = svc.create_equipment(eq).await;
        assert!(matches!(
            result,
            Err(BarzError::Validation(ValidationError::EmptyField("name")))
        ));
        assert!(svc.get_equipment(None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_change_only_description_when_patch_has_only_description() {
        let svc = make_service();
        let id = svc.create_equipment(drill()).await.unwrap()[0].id;

        svc.update_equipment(EquipmentPatch::new(id).description("Brushless"))
            .await
            .unwrap();

        let row = &svc.get_equipment(Some(id)).await.unwrap()[0];
        assert_eq!(row.description.as_deref(), Some("Brushless"));
        assert_eq!(row.name.as_deref(), Some("Drill"));
        assert_eq!(row.icon_name.as_deref(), Some("drill.svg"));
    }

    #[tokio::test]
    async fn should_reject_empty_patch() {
        let svc = make_service();
        let id = svc.create_equipment(drill()).await.unwrap()[0].id;

        let result = svc.update_equipment(EquipmentPatch::new(id)).await;
        assert!(matches!(
            result,
            Err(BarzError::Validation(ValidationError::EmptyPatch))
        ));
    }

    #[tokio::test]
    async fn should_return_empty_list_when_fetching_after_delete() {
        let svc = make_service();
        let id = svc.create_equipment(drill()).await.unwrap()[0].id;

        let deleted = svc.delete_equipment(id).await.unwrap();
        assert_eq!(deleted.len(), 1);
        assert!(svc.get_equipment(Some(id)).await.unwrap().is_empty());
    }
}
