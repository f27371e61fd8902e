use std::path::Path;
use std::sync::Arc;

use axum::{
    response::Redirect,
    routing::{get, post},
    Router,
};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::database::ActivityRegistry;
use crate::web::error::ApiError;
use crate::web::routes::{activities, activity};

pub const INDEX_PATH: &str = "/static/index.html";

pub fn build_router(registry: Arc<ActivityRegistry>, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/", get(|| async { Redirect::temporary(INDEX_PATH) }))
        .route("/activities", get(activities::activities_handler))
        .route(
            "/activities/:activity_name/signup",
            post(activity::activity_signup_handler),
        )
        .route(
            "/activities/:activity_name/unregister",
            post(activity::activity_unregister_handler)
                .delete(activity::activity_unregister_handler),
        )
        .nest_service("/static", ServeDir::new(static_dir.as_ref()))
        .fallback(|| async { ApiError::route_not_found() })
        // Rosters change on every signup; never let a browser reuse a stale copy.
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .layer(CatchPanicLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(registry)
}
