//! In-memory ports and request helpers for handler tests.

use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use http_body_util::BodyExt;
use serde_json::{Map, Value};
use tower::ServiceExt;

use barzmap_app::ports::{EquipmentRepository, TokenDecoder, UserRepository};
use barzmap_app::services::auth_service::AuthService;
use barzmap_app::services::equipment_service::EquipmentService;
use barzmap_app::services::user_service::UserService;
use barzmap_domain::claims::Claims;
use barzmap_domain::equipment::{Equipment, EquipmentPatch, NewEquipment};
use barzmap_domain::error::BarzError;
use barzmap_domain::id::{EquipmentId, UserId};
use barzmap_domain::user::{NewUser, User, UserPatch};

use crate::router;
use crate::state::AppState;

/// Shared view on the rows behind the in-memory repositories.
#[derive(Clone, Default)]
pub struct Repos {
    equipment: Arc<Mutex<Vec<Equipment>>>,
    users: Arc<Mutex<Vec<User>>>,
    equipment_calls: Arc<AtomicUsize>,
}

impl Repos {
    pub fn seed_equipment(&self, name: &str) -> EquipmentId {
        let id = EquipmentId::from_uuid(uuid::Uuid::new_v4());
        self.equipment.lock().unwrap().push(Equipment {
            id,
            name: Some(name.to_string()),
            description: None,
            icon_name: None,
            extra: Map::new(),
        });
        id
    }

    pub fn seed_user(&self, auth0_id: &str) -> UserId {
        let id = UserId::from_uuid(uuid::Uuid::new_v4());
        self.users.lock().unwrap().push(User {
            id,
            auth0_id: Some(auth0_id.to_string()),
            email: Some(format!("{auth0_id}@example.com").replace('|', ".")),
            name: Some("Seeded".to_string()),
            role: Some("member".to_string()),
            extra: Map::new(),
        });
        id
    }

    pub fn equipment_len(&self) -> usize {
        self.equipment.lock().unwrap().len()
    }

    pub fn users_len(&self) -> usize {
        self.users.lock().unwrap().len()
    }

    pub fn equipment_calls(&self) -> usize {
        self.equipment_calls.load(Ordering::SeqCst)
    }
}

pub struct MemoryEquipmentRepo(Repos);

impl MemoryEquipmentRepo {
    fn rows(&self) -> std::sync::MutexGuard<'_, Vec<Equipment>> {
        self.0.equipment_calls.fetch_add(1, Ordering::SeqCst);
        self.0.equipment.lock().unwrap()
    }
}

impl EquipmentRepository for MemoryEquipmentRepo {
    fn get_by_id(
        &self,
        id: EquipmentId,
    ) -> impl Future<Output = Result<Option<Equipment>, BarzError>> + Send {
        let result = self.rows().iter().find(|e| e.id == id).cloned();
        async move { Ok(result) }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Equipment>, BarzError>> + Send {
        let result = self.rows().clone();
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
        self.rows().push(row.clone());
        async move { Ok(vec![row]) }
    }

    fn update(
        &self,
        patch: EquipmentPatch,
    ) -> impl Future<Output = Result<Vec<Equipment>, BarzError>> + Send {
        let mut rows = self.rows();
        let mut result = Vec::new();
        if let Some(row) = rows.iter_mut().find(|e| e.id == patch.id) {
            if patch.name.is_some() {
                row.name = patch.name;
            }
            if let Some(description) = patch.description {
                row.description = Some(description);
            }
            if let Some(icon_name) = patch.icon_name {
                row.icon_name = Some(icon_name);
            }
            result.push(row.clone());
        }
        async move { Ok(result) }
    }

    fn delete(
        &self,
        id: EquipmentId,
    ) -> impl Future<Output = Result<Vec<Equipment>, BarzError>> + Send {
        let mut rows = self.rows();
        let (removed, kept): (Vec<_>, Vec<_>) = rows.drain(..).partition(|e| e.id == id);
        *rows = kept;
        async move { Ok(removed) }
    }
}

pub struct MemoryUserRepo(Repos);

impl UserRepository for MemoryUserRepo {
    fn get_by_id(&self, id: UserId) -> impl Future<Output = Result<Option<User>, BarzError>> + Send {
        let result = self.0.users.lock().unwrap().iter().find(|u| u.id == id).cloned();
        async move { Ok(result) }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<User>, BarzError>> + Send {
        let result = self.0.users.lock().unwrap().clone();
        async move { Ok(result) }
    }

    fn create(&self, user: NewUser) -> impl Future<Output = Result<Vec<User>, BarzError>> + Send {
        let row = User {
            id: UserId::from_uuid(uuid::Uuid::new_v4()),
            auth0_id: Some(user.auth0_id),
            email: Some(user.email),
            name: Some(user.name),
            role: Some(user.role),
            extra: Map::new(),
        };
        self.0.users.lock().unwrap().push(row.clone());
        async move { Ok(vec![row]) }
    }

    fn update(&self, patch: UserPatch) -> impl Future<Output = Result<Vec<User>, BarzError>> + Send {
        let mut rows = self.0.users.lock().unwrap();
        let mut result = Vec::new();
        if let Some(row) = rows.iter_mut().find(|u| u.id == patch.id) {
            if patch.auth0_id.is_some() {
                row.auth0_id = patch.auth0_id;
            }
            if patch.email.is_some() {
                row.email = patch.email;
            }
            if patch.name.is_some() {
                row.name = patch.name;
            }
            if let Some(role) = patch.role {
                row.role = Some(role);
            }
            result.push(row.clone());
        }
        async move { Ok(result) }
    }

    fn delete(&self, id: UserId) -> impl Future<Output = Result<Vec<User>, BarzError>> + Send {
        let mut rows = self.0.users.lock().unwrap();
        let (removed, kept): (Vec<_>, Vec<_>) = rows.drain(..).partition(|u| u.id == id);
        *rows = kept;
        async move { Ok(removed) }
    }
}

#[derive(Debug)]
pub struct Undecodable;

impl std::fmt::Display for Undecodable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("token does not decode")
    }
}

impl std::error::Error for Undecodable {}

/// Decodes exactly the token `good`.
pub struct StubDecoder;

impl TokenDecoder for StubDecoder {
    type Error = Undecodable;

    fn decode(&self, token: &str) -> Result<Claims, Self::Error> {
        if token == "good" {
            Ok(Claims::default())
        } else {
            Err(Undecodable)
        }
    }
}

pub fn test_app() -> (Router, Repos) {
    let repos = Repos::default();
    let state = AppState::new(
        EquipmentService::new(MemoryEquipmentRepo(repos.clone())),
        UserService::new(MemoryUserRepo(repos.clone())),
        AuthService::new(StubDecoder),
    );
    (router::build(state), repos)
}

pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> Response {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.clone().oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    }
}

pub async fn call(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let response = send(app, method, uri, body).await;
    let status = response.status();
    (status, body_json(response).await)
}
