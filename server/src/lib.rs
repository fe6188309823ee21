//! Axum HTTP surface for the todos service.
//!
//! # Overview
//! CRUD endpoints over an in-memory [`TodoStore`], plus a `/tasks` →
//! `/todos` path rewrite and start/finish request logging.
//!
//! # Design
//! - Handlers share state through `Db` (`Arc<RwLock<TodoStore>>`); each
//!   request holds the lock for one store operation.
//! - The middleware stack wraps the router from the outside: rewrite first,
//!   so routing sees the rewritten URI, then logging, so log lines show the
//!   path that was actually routed.
//! - [`app`] returns the concrete wrapped service rather than a bare
//!   `Router`; tests drive it with `tower::ServiceExt` exactly like the
//!   binary does.

pub mod middleware;

use std::sync::Arc;

use axum::extract::{Path, Request, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router, ServiceExt};
use chrono::Utc;
use todos_core::{validate_new_todo, Todo, TodoStore};
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tower::Layer;

use crate::middleware::{
    RequestLogLayer, RequestLogService, RequestLogger, RewriteLayer, RewriteService, TracingLogger,
};

pub type Db = Arc<RwLock<TodoStore>>;

/// The full middleware stack around the routed application.
pub type App = RewriteService<RequestLogService<Router>>;

/// Builds the service with the default tracing-backed request logger.
pub fn app() -> App {
    app_with_logger(Arc::new(TracingLogger))
}

/// Builds the service with an injected request logger.
pub fn app_with_logger(logger: Arc<dyn RequestLogger>) -> App {
    let db = Db::default();
    let router = Router::new()
        .route("/", get(root))
        .route("/todos", get(list_todos).post(create_todo))
        .route("/todos/", get(list_todos))
        .route("/todos/{id}", get(get_todo).delete(delete_todo))
        .fallback(not_found)
        .with_state(db);
    let logged = RequestLogLayer::new(logger).layer(router);
    RewriteLayer::new("/tasks", "/todos").layer(logged)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    let app = ServiceExt::<Request>::into_make_service(app());
    axum::serve(listener, app).await
}

async fn root() -> &'static str {
    "Hello World!"
}

async fn list_todos(State(db): State<Db>) -> Json<Vec<Todo>> {
    let store = db.read().await;
    Json(store.list().to_vec())
}

async fn get_todo(State(db): State<Db>, Path(id): Path<i64>) -> Result<Json<Todo>, StatusCode> {
    let store = db.read().await;
    store.find(id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn create_todo(State(db): State<Db>, Json(todo): Json<Todo>) -> Response {
    if let Err(errors) = validate_new_todo(&todo, Utc::now()) {
        return (StatusCode::BAD_REQUEST, Json(errors)).into_response();
    }
    let location = format!("/todos/{}", todo.id);
    db.write().await.append(todo.clone());
    (
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(todo),
    )
        .into_response()
}

/// 204 whether or not anything matched.
async fn delete_todo(State(db): State<Db>, Path(id): Path<i64>) -> StatusCode {
    db.write().await.remove_by_id(id);
    StatusCode::NO_CONTENT
}

// Explicit fallback so the logging middleware demonstrably wraps unmatched
// routes as well.
async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}
