//! PostgREST client setup and the four table operations.

use std::time::Duration;

use reqwest::{Method, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::RestError;

/// Configuration for the remote-store adapter.
pub struct Config {
    /// Project URL (e.g. `https://xyzcompany.supabase.co`).
    pub url: String,
    /// Service key sent as `apikey` and as the bearer credential.
    pub secret_key: String,
    /// Per-request timeout. `None` leaves requests unbounded.
    pub timeout: Option<Duration>,
}

impl Config {
    /// Build a [`PostgrestClient`] from this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Config`] if the url or key is empty, or
    /// [`RestError::Transport`] if the HTTP client cannot be created.
    pub fn build(self) -> Result<PostgrestClient, RestError> {
        let base_url = self.url.trim().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(RestError::Config("url must not be empty"));
        }
        if self.secret_key.is_empty() {
            return Err(RestError::Config("secret key must not be empty"));
        }

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(PostgrestClient {
            http: builder.build()?,
            base_url,
            secret_key: self.secret_key,
        })
    }
}

/// An `id = value` style row filter, sent as `column=eq.value`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    column: &'static str,
    value: String,
}

impl Filter {
    #[must_use]
    pub fn eq(column: &'static str, value: impl ToString) -> Self {
        Self {
            column,
            value: value.to_string(),
        }
    }

    fn as_query(&self) -> (&'static str, String) {
        (self.column, format!("eq.{}", self.value))
    }
}

/// Shared handle on the remote store.
///
/// Cloning is cheap: the underlying connection pool is reference-counted and
/// shared by every clone.
#[derive(Clone)]
pub struct PostgrestClient {
    http: reqwest::Client,
    base_url: String,
    secret_key: String,
}

impl PostgrestClient {
    /// Rows of `table`, optionally restricted by `filter`.
    ///
    /// # Errors
    ///
    /// Returns [`RestError`] on transport failure or a non-success status.
    pub async fn select<T: DeserializeOwned>(
        &self,
        table: &str,
        filter: Option<&Filter>,
    ) -> Result<Vec<T>, RestError> {
        let mut request = self.request(Method::GET, table).query(&[("select", "*")]);
        if let Some(filter) = filter {
            request = request.query(&[filter.as_query()]);
        }
        self.send(Method::GET, table, request).await
    }

    /// Insert `body` into `table` and return the inserted rows.
    ///
    /// # Errors
    ///
    /// Returns [`RestError`] on transport failure or a non-success status.
    pub async fn insert<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        table: &str,
        body: &B,
    ) -> Result<Vec<T>, RestError> {
        let request = self
            .request(Method::POST, table)
            .header("Prefer", "return=representation")
            .json(body);
        self.send(Method::POST, table, request).await
    }

    /// Write the columns of `body` onto the rows matching `filter`.
    ///
    /// # Errors
    ///
    /// Returns [`RestError`] on transport failure or a non-success status.
    pub async fn update<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        table: &str,
        filter: &Filter,
        body: &B,
    ) -> Result<Vec<T>, RestError> {
        let request = self
            .request(Method::PATCH, table)
            .query(&[filter.as_query()])
            .header("Prefer", "return=representation")
            .json(body);
        self.send(Method::PATCH, table, request).await
    }

    /// Delete the rows matching `filter` and return them.
    ///
    /// # Errors
    ///
    /// Returns [`RestError`] on transport failure or a non-success status.
    pub async fn delete<T: DeserializeOwned>(
        &self,
        table: &str,
        filter: &Filter,
    ) -> Result<Vec<T>, RestError> {
        let request = self
            .request(Method::DELETE, table)
            .query(&[filter.as_query()])
            .header("Prefer", "return=representation");
        self.send(Method::DELETE, table, request).await
    }

    fn request(&self, method: Method, table: &str) -> RequestBuilder {
        self.http
            .request(method, format!("{}/rest/v1/{table}", self.base_url))
            .header("apikey", &self.secret_key)
            .bearer_auth(&self.secret_key)
    }

    async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        table: &str,
        request: RequestBuilder,
    ) -> Result<Vec<T>, RestError> {
        tracing::debug!(%method, table, "remote store request");
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = match response.text().await {
                Ok(body) => body,
                Err(err) => {
                    tracing::debug!(%method, table, error = %err, "failed to read rejection body");
                    String::new()
                }
            };
            tracing::debug!(%method, table, status = status.as_u16(), "remote store rejected request");
            return Err(RestError::rejected(status.as_u16(), &body));
        }
        Ok(response.json().await?)
    }
}
