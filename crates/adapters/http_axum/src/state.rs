//! Shared application state for axum handlers.

use std::sync::Arc;

use barzmap_app::ports::{EquipmentRepository, TokenDecoder, UserRepository};
use barzmap_app::services::auth_service::AuthService;
use barzmap_app::services::equipment_service::EquipmentService;
use barzmap_app::services::user_service::UserService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository and decoder types to avoid dynamic dispatch.
/// `Clone` is implemented manually so the underlying types themselves do not
/// need to be `Clone` — only the `Arc` wrappers are cloned.
pub struct AppState<ER, UR, TD> {
    /// Equipment CRUD service.
    pub equipment_service: Arc<EquipmentService<ER>>,
    /// User CRUD service.
    pub user_service: Arc<UserService<UR>>,
    /// Token validation service.
    pub auth_service: Arc<AuthService<TD>>,
}

impl<ER, UR, TD> Clone for AppState<ER, UR, TD> {
    fn clone(&self) -> Self {
        Self {
            equipment_service: Arc::clone(&self.equipment_service),
            user_service: Arc::clone(&self.user_service),
            auth_service: Arc::clone(&self.auth_service),
        }
    }
}

impl<ER, UR, TD> AppState<ER, UR, TD>
where
    ER: EquipmentRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    TD: TokenDecoder + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(
        equipment_service: EquipmentService<ER>,
        user_service: UserService<UR>,
        auth_service: AuthService<TD>,
    ) -> Self {
        Self {
            equipment_service: Arc::new(equipment_service),
            user_service: Arc::new(user_service),
            auth_service: Arc::new(auth_service),
        }
    }
}
