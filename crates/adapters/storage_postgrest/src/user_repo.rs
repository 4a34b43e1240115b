//! PostgREST implementation of [`UserRepository`].

use std::future::Future;

use barzmap_app::ports::UserRepository;
use barzmap_domain::error::BarzError;
use barzmap_domain::id::UserId;
use barzmap_domain::user::{NewUser, User, UserPatch};

use crate::client::{Filter, PostgrestClient};

const TABLE: &str = "users";

/// Remote-store-backed user repository.
pub struct PostgrestUserRepository {
    client: PostgrestClient,
}

impl PostgrestUserRepository {
    /// Create a new repository sharing the given client.
    #[must_use]
    pub fn new(client: PostgrestClient) -> Self {
        Self { client }
    }
}

impl UserRepository for PostgrestUserRepository {
    fn get_by_id(&self, id: UserId) -> impl Future<Output = Result<Option<User>, BarzError>> + Send {
        let client = self.client.clone();
        async move {
            let rows: Vec<User> = client.select(TABLE, Some(&Filter::eq("id", id))).await?;
            Ok(rows.into_iter().next())
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<User>, BarzError>> + Send {
        let client = self.client.clone();
        async move { Ok(client.select(TABLE, None).await?) }
    }

    fn create(&self, user: NewUser) -> impl Future<Output = Result<Vec<User>, BarzError>> + Send {
        let client = self.client.clone();
        async move { Ok(client.insert(TABLE, &user).await?) }
    }

    fn update(&self, patch: UserPatch) -> impl Future<Output = Result<Vec<User>, BarzError>> + Send {
        let client = self.client.clone();
        async move {
            Ok(client
                .update(TABLE, &Filter::eq("id", patch.id), &patch)
                .await?)
        }
    }

    fn delete(&self, id: UserId) -> impl Future<Output = Result<Vec<User>, BarzError>> + Send {
        let client = self.client.clone();
        async move { Ok(client.delete(TABLE, &Filter::eq("id", id)).await?) }
    }
}
