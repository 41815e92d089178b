// system-tests/src/stub.rs
// ============================================================================
// Module: Stub Backend
// Description: In-process Skolyn API stub for system tests.
// Purpose: Serve the documented contract surface without a deployed backend.
// Dependencies: axum, serde_json, tokio
// ============================================================================

//! ## Overview
//! The stub implements the Skolyn API surface the harness probes: health,
//! contact intake with validation, contact listing, and blog listing and
//! publishing. Contacts and posts are held in memory, newest first, matching
//! the deployed backend's creation-time-descending listings.
//!
//! Invariants:
//! - Intake rejects missing required fields and malformed emails with 400
//!   and never assigns an identifier to a rejected submission.
//! - Listings report `total` for the returned page, as the backend does.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;
use std::time::SystemTime;
use std::time::UNIX_EPOCH;

use axum::Json;
use axum::Router;
use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::routing::post;
use serde_json::Value;
use serde_json::json;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

// ============================================================================
// SECTION: Stub Options
// ============================================================================

/// Configurable stub behavior for exercising failure paths.
#[derive(Debug, Clone)]
pub struct StubOptions {
    /// Service name reported by the health endpoint.
    pub health_service: String,
    /// Health status literal reported by the health endpoint.
    pub health_status: String,
    /// Whether the blog store starts with a seeded post.
    pub seed_posts: bool,
}

impl Default for StubOptions {
    fn default() -> Self {
        Self {
            health_service: "Skolyn API".to_string(),
            health_status: "healthy".to_string(),
            seed_posts: true,
        }
    }
}

// ============================================================================
// SECTION: Stub State
// ============================================================================

/// Shared in-memory store behind the stub routes.
#[derive(Clone)]
struct StubState {
    /// Configured stub behavior.
    options: StubOptions,
    /// Stored contacts, newest first.
    contacts: Arc<Mutex<Vec<Value>>>,
    /// Stored blog posts, newest first.
    posts: Arc<Mutex<Vec<Value>>>,
    /// Monotonic identifier counter.
    next_id: Arc<AtomicU64>,
}

impl StubState {
    /// Allocates the next opaque identifier in object-id-like hex form.
    fn allocate_id(&self) -> String {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        format!("{id:024x}")
    }
}

/// Handle for a spawned stub backend.
pub struct StubBackendHandle {
    /// Base URL of the stub, without the `/api` suffix.
    base_url: String,
    /// Graceful shutdown trigger.
    shutdown: oneshot::Sender<()>,
    /// Server task handle.
    join: JoinHandle<()>,
    /// Stored contacts, shared with the server task.
    contacts: Arc<Mutex<Vec<Value>>>,
}

impl StubBackendHandle {
    /// Returns the stub base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the number of stored contacts.
    #[must_use]
    pub fn contact_count(&self) -> usize {
        self.contacts.lock().map_or(0, |contacts| contacts.len())
    }

    /// Shuts down the stub server task.
    pub async fn shutdown(self) {
        let _ = self.shutdown.send(());
        let _ = self.join.await;
    }
}

// ============================================================================
// SECTION: Spawning
// ============================================================================

/// Spawns a conformant stub backend on a loopback port.
///
/// # Errors
///
/// Returns an error when the loopback listener cannot be bound.
pub async fn spawn_stub() -> Result<StubBackendHandle, String> {
    spawn_stub_with_options(StubOptions::default()).await
}

/// Spawns a stub backend with custom behavior.
///
/// # Errors
///
/// Returns an error when the loopback listener cannot be bound.
pub async fn spawn_stub_with_options(options: StubOptions) -> Result<StubBackendHandle, String> {
    let contacts = Arc::new(Mutex::new(Vec::new()));
    let posts = Arc::new(Mutex::new(if options.seed_posts {
        vec![seeded_post()]
    } else {
        Vec::new()
    }));
    let state = StubState {
        options,
        contacts: Arc::clone(&contacts),
        posts,
        next_id: Arc::new(AtomicU64::new(1)),
    };
    let router = Router::new()
        .route("/api/health", get(get_health))
        .route("/api/contact", post(post_contact).get(get_contacts))
        .route("/api/blog", get(get_blog).post(post_blog))
        .with_state(state);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .map_err(|err| format!("failed to bind loopback: {err}"))?;
    let addr =
        listener.local_addr().map_err(|err| format!("failed to read listener address: {err}"))?;
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
    let join = tokio::spawn(async move {
        let serve = axum::serve(listener, router).with_graceful_shutdown(async {
            let _ = shutdown_rx.await;
        });
        let _ = serve.await;
    });
    Ok(StubBackendHandle {
        base_url: format!("http://{addr}"),
        shutdown: shutdown_tx,
        join,
        contacts,
    })
}

/// Returns the seeded blog post present at stub start.
fn seeded_post() -> Value {
    json!({
        "_id": "000000000000000000000000",
        "title": "The Future of Explainable AI in Medical Imaging",
        "excerpt": "Exploring how transparent AI systems are revolutionizing diagnostic \
                    confidence and patient outcomes in radiology departments worldwide.",
        "content": "<p>The healthcare industry is experiencing a paradigm shift with the \
                    introduction of Explainable AI in medical imaging.</p>",
        "author": "Dr. Sarah Chen",
        "authorRole": "Chief Medical Officer",
        "publishedAt": "2024-12-15T00:00:00.000Z",
        "category": "AI Technology",
        "tags": ["XAI", "Medical Imaging", "Deep Learning"],
        "featured": true,
        "slug": "future-explainable-ai-medical-imaging",
        "readTime": "8 min read",
    })
}

// ============================================================================
// SECTION: Handlers
// ============================================================================

/// Serves `GET /api/health`.
async fn get_health(State(state): State<StubState>) -> impl IntoResponse {
    let timestamp =
        SystemTime::now().duration_since(UNIX_EPOCH).map_or(0, |elapsed| elapsed.as_secs());
    Json(json!({
        "status": state.options.health_status,
        "timestamp": timestamp,
        "service": state.options.health_service,
    }))
}

/// Serves `POST /api/contact` with required-field and email validation.
async fn post_contact(
    State(state): State<StubState>,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    for field in ["firstName", "lastName", "email", "organization"] {
        if nonempty_string(&body, field).is_none() {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "error": "Required fields missing: firstName, lastName, email, organization",
                })),
            );
        }
    }
    let email = nonempty_string(&body, "email").unwrap_or_default();
    if !email_is_valid(&email) {
        return (StatusCode::BAD_REQUEST, Json(json!({"error": "Invalid email format"})));
    }
    let id = state.allocate_id();
    let mut record = body;
    if let Value::Object(object) = &mut record {
        object.insert("_id".to_string(), Value::String(id.clone()));
        object.insert("status".to_string(), Value::String("new".to_string()));
    }
    if let Ok(mut contacts) = state.contacts.lock() {
        contacts.insert(0, record);
    }
    (
        StatusCode::OK,
        Json(json!({
            "message": "Contact form submitted successfully",
            "id": id,
            "status": "received",
        })),
    )
}

/// Serves `GET /api/contact?limit=N`.
async fn get_contacts(
    State(state): State<StubState>,
    Query(params): Query<HashMap<String, String>>,
) -> impl IntoResponse {
    let limit = params.get("limit").and_then(|raw| raw.parse::<usize>().ok()).unwrap_or(50);
    let page: Vec<Value> = state
        .contacts
        .lock()
        .map_or_else(|_| Vec::new(), |contacts| contacts.iter().take(limit).cloned().collect());
    let total = page.len();
    Json(json!({"contacts": page, "total": total}))
}

/// Serves `GET /api/blog`.
async fn get_blog(State(state): State<StubState>) -> impl IntoResponse {
    let posts: Vec<Value> =
        state.posts.lock().map_or_else(|_| Vec::new(), |posts| posts.clone());
    Json(json!({"posts": posts}))
}

/// Serves `POST /api/blog`.
async fn post_blog(State(state): State<StubState>, Json(body): Json<Value>) -> impl IntoResponse {
    let id = state.allocate_id();
    let mut record = body;
    if let Value::Object(object) = &mut record {
        object.insert("_id".to_string(), Value::String(id.clone()));
        object.insert("publishedAt".to_string(), Value::String("2026-01-01T00:00:00.000Z".to_string()));
    }
    if let Ok(mut posts) = state.posts.lock() {
        posts.insert(0, record);
    }
    (
        StatusCode::OK,
        Json(json!({"message": "Blog post created successfully", "id": id})),
    )
}

// ============================================================================
// SECTION: Validation Helpers
// ============================================================================

/// Returns a non-empty string field from a JSON object.
fn nonempty_string(body: &Value, field: &str) -> Option<String> {
    body.get(field)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(ToString::to_string)
}

/// Mirrors the backend's email shape check: local part, `@`, dotted domain.
fn email_is_valid(email: &str) -> bool {
    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() || local.contains(char::is_whitespace) {
        return false;
    }
    if domain.contains(char::is_whitespace) {
        return false;
    }
    let mut segments = domain.split('.');
    let has_dot = domain.contains('.');
    has_dot && segments.all(|segment| !segment.is_empty())
}
