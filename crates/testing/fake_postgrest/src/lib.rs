//! # barzmap-fake-postgrest
//!
//! A small in-memory stand-in for the PostgREST table API served under
//! `/rest/v1/{table}`. It understands just what the storage adapter sends:
//!
//! - `GET` with `select=*` and `column=eq.value` filters
//! - `POST` of one object or an array of objects (assigns `id` and `created_at`)
//! - `PATCH` of one object onto every row matching the filters
//! - `DELETE` of every row matching the filters
//!
//! Requests must carry the configured `apikey` header. Filters on `id` must
//! be UUIDs, and columns can be declared unique, so error paths behave like
//! the real service (`22P02` and `23505` codes).

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use axum::Json;
use axum::Router;
use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use serde_json::{Map, Value, json};
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

const CREATED_AT: &str = "2024-01-01T00:00:00+00:00";

#[derive(Default)]
struct Table {
    rows: Vec<Map<String, Value>>,
    unique: Vec<String>,
}

struct Inner {
    api_key: String,
    tables: Mutex<HashMap<String, Table>>,
    requests: AtomicUsize,
}

/// Handle on the fake store. Cloning shares the same tables.
#[derive(Clone)]
pub struct FakePostgrest {
    inner: Arc<Inner>,
}

impl FakePostgrest {
    /// A store with no tables, accepting `api_key`.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(Inner {
                api_key: api_key.into(),
                tables: Mutex::new(HashMap::new()),
                requests: AtomicUsize::new(0),
            }),
        }
    }

    /// Declare an empty table.
    #[must_use]
    pub fn with_table(self, name: &str) -> Self {
        self.tables().entry(name.to_string()).or_default();
        self
    }

    /// Declare `column` of `table` unique.
    #[must_use]
    pub fn with_unique(self, table: &str, column: &str) -> Self {
        self.tables()
            .entry(table.to_string())
            .or_default()
            .unique
            .push(column.to_string());
        self
    }

    /// Seed a row verbatim. `row` must be a JSON object.
    pub fn seed(&self, table: &str, row: Value) {
        if let Value::Object(map) = row {
            self.tables()
                .entry(table.to_string())
                .or_default()
                .rows
                .push(map);
        }
    }

    /// Snapshot of the rows of `table`.
    #[must_use]
    pub fn rows(&self, table: &str) -> Vec<Value> {
        self.tables()
            .get(table)
            .map(|t| t.rows.iter().cloned().map(Value::Object).collect())
            .unwrap_or_default()
    }

    /// Number of requests that reached the fake, authorized or not.
    #[must_use]
    pub fn request_count(&self) -> usize {
        self.inner.requests.load(Ordering::SeqCst)
    }

    /// The axum app serving `/rest/v1/{table}`.
    pub fn router(&self) -> Router {
        Router::new()
            .route(
                "/rest/v1/{table}",
                get(select).post(insert).patch(update).delete(remove),
            )
            .with_state(self.clone())
    }

    /// Serve on an ephemeral localhost port until the returned handle drops.
    ///
    /// # Errors
    ///
    /// Returns an error if the listener cannot bind.
    pub async fn spawn(&self) -> std::io::Result<RunningFake> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let router = self.router();
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        let handle = tokio::spawn(async move {
            let _ = axum::serve(listener, router)
                .with_graceful_shutdown(async move {
                    let _ = shutdown_rx.await;
                })
                .await;
        });
        Ok(RunningFake {
            addr,
            shutdown: Some(shutdown_tx),
            handle,
        })
    }

    fn tables(&self) -> std::sync::MutexGuard<'_, HashMap<String, Table>> {
        self.inner
            .tables
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn authorize(&self, headers: &HeaderMap) -> Result<(), Response> {
        self.inner.requests.fetch_add(1, Ordering::SeqCst);
        match headers.get("apikey").and_then(|v| v.to_str().ok()) {
            Some(key) if key == self.inner.api_key => Ok(()),
            _ => Err(error(StatusCode::UNAUTHORIZED, None, "Invalid API key")),
        }
    }
}

/// A fake bound to a local port. Stops serving when dropped.
pub struct RunningFake {
    addr: SocketAddr,
    shutdown: Option<oneshot::Sender<()>>,
    handle: JoinHandle<()>,
}

impl RunningFake {
    /// Base URL to hand to the storage adapter (no trailing slash).
    #[must_use]
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }
}

impl Drop for RunningFake {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        self.handle.abort();
    }
}

type Params = Query<Vec<(String, String)>>;

async fn select(
    State(fake): State<FakePostgrest>,
    Path(table): Path<String>,
    headers: HeaderMap,
    Query(params): Params,
) -> Response {
    if let Err(resp) = fake.authorize(&headers) {
        return resp;
    }
    let filters = match parse_filters(&params) {
        Ok(filters) => filters,
        Err(resp) => return resp,
    };
    let tables = fake.tables();
    let Some(table) = tables.get(&table) else {
        return missing_relation(&table);
    };
    let rows: Vec<Value> = table
        .rows
        .iter()
        .filter(|row| matches(row, &filters))
        .cloned()
        .map(Value::Object)
        .collect();
    Json(rows).into_response()
}

async fn insert(
    State(fake): State<FakePostgrest>,
    Path(table): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    if let Err(resp) = fake.authorize(&headers) {
        return resp;
    }
    let objects = match body {
        Value::Object(map) => vec![map],
        Value::Array(items) => {
            let mut objects = Vec::with_capacity(items.len());
            for item in items {
                match item {
                    Value::Object(map) => objects.push(map),
                    _ => return error(StatusCode::BAD_REQUEST, Some("PGRST102"), "All object keys must match"),
                }
            }
            objects
        }
        _ => return error(StatusCode::BAD_REQUEST, Some("PGRST102"), "Empty or invalid json"),
    };

    let mut tables = fake.tables();
    let Some(table) = tables.get_mut(&table) else {
        return missing_relation(&table);
    };

    let mut inserted = Vec::with_capacity(objects.len());
    for mut row in objects {
        row.entry("id".to_string())
            .or_insert_with(|| Value::from(uuid::Uuid::new_v4().to_string()));
        row.entry("created_at".to_string())
            .or_insert_with(|| Value::from(CREATED_AT));
        if violates_unique(table, &row, None) {
            return duplicate_key();
        }
        table.rows.push(row.clone());
        inserted.push(Value::Object(row));
    }
    represent(&headers, StatusCode::CREATED, inserted)
}

async fn update(
    State(fake): State<FakePostgrest>,
    Path(table): Path<String>,
    headers: HeaderMap,
    Query(params): Params,
    Json(body): Json<Value>,
) -> Response {
    if let Err(resp) = fake.authorize(&headers) {
        return resp;
    }
    let filters = match parse_filters(&params) {
        Ok(filters) => filters,
        Err(resp) => return resp,
    };
    let Value::Object(changes) = body else {
        return error(StatusCode::BAD_REQUEST, Some("PGRST102"), "Empty or invalid json");
    };

    let mut tables = fake.tables();
    let Some(table) = tables.get_mut(&table) else {
        return missing_relation(&table);
    };

    let targets: Vec<usize> = (0..table.rows.len())
        .filter(|&i| matches(&table.rows[i], &filters))
        .collect();
    for &i in &targets {
        let mut candidate = table.rows[i].clone();
        candidate.extend(changes.clone());
        if violates_unique(table, &candidate, Some(i)) {
            return duplicate_key();
        }
    }
    let mut updated = Vec::with_capacity(targets.len());
    for i in targets {
        table.rows[i].extend(changes.clone());
        updated.push(Value::Object(table.rows[i].clone()));
    }
    represent(&headers, StatusCode::OK, updated)
}

async fn remove(
    State(fake): State<FakePostgrest>,
    Path(table): Path<String>,
    headers: HeaderMap,
    Query(params): Params,
) -> Response {
    if let Err(resp) = fake.authorize(&headers) {
        return resp;
    }
    let filters = match parse_filters(&params) {
        Ok(filters) => filters,
        Err(resp) => return resp,
    };
    let mut tables = fake.tables();
    let Some(table) = tables.get_mut(&table) else {
        return missing_relation(&table);
    };
    let (removed, kept): (Vec<_>, Vec<_>) = table
        .rows
        .drain(..)
        .partition(|row| matches(row, &filters));
    table.rows = kept;
    represent(
        &headers,
        StatusCode::OK,
        removed.into_iter().map(Value::Object).collect(),
    )
}

fn parse_filters(params: &[(String, String)]) -> Result<Vec<(String, String)>, Response> {
    let mut filters = Vec::new();
    for (column, expr) in params {
        if column == "select" {
            continue;
        }
        let Some(value) = expr.strip_prefix("eq.") else {
            return Err(error(
                StatusCode::BAD_REQUEST,
                Some("PGRST100"),
                "unsupported filter operator",
            ));
        };
        if column == "id" && uuid::Uuid::parse_str(value).is_err() {
            return Err(error(
                StatusCode::BAD_REQUEST,
                Some("22P02"),
                &format!("invalid input syntax for type uuid: \"{value}\""),
            ));
        }
        filters.push((column.clone(), value.to_string()));
    }
    Ok(filters)
}

fn matches(row: &Map<String, Value>, filters: &[(String, String)]) -> bool {
    filters.iter().all(|(column, expected)| match row.get(column) {
        Some(Value::String(s)) => s == expected,
        Some(Value::Null) | None => false,
        Some(other) => other.to_string() == *expected,
    })
}

fn violates_unique(table: &Table, row: &Map<String, Value>, skip: Option<usize>) -> bool {
    table.unique.iter().any(|column| {
        let Some(value) = row.get(column) else {
            return false;
        };
        table
            .rows
            .iter()
            .enumerate()
            .any(|(i, other)| Some(i) != skip && other.get(column) == Some(value))
    })
}

fn represent(headers: &HeaderMap, status: StatusCode, rows: Vec<Value>) -> Response {
    let wants_rows = headers
        .get("prefer")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.contains("return=representation"));
    if wants_rows {
        (status, Json(rows)).into_response()
    } else {
        StatusCode::NO_CONTENT.into_response()
    }
}

fn missing_relation(table: &str) -> Response {
    error(
        StatusCode::NOT_FOUND,
        Some("42P01"),
        &format!("relation \"public.{table}\" does not exist"),
    )
}

fn duplicate_key() -> Response {
    error(
        StatusCode::CONFLICT,
        Some("23505"),
        "duplicate key value violates unique constraint",
    )
}

fn error(status: StatusCode, code: Option<&str>, message: &str) -> Response {
    (
        status,
        Json(json!({
            "code": code,
            "message": message,
            "details": null,
            "hint": null,
        })),
    )
        .into_response()
}
