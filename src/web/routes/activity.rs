use std::sync::Arc;

use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};

use crate::database::ActivityRegistry;
use crate::models::MessageResponse;
use crate::services::activities_service;
use crate::web::error::ApiError;

// Raw query pairs, so a repeated parameter resolves to its last value instead
// of failing deserialization.
type QueryPairs = Vec<(String, String)>;

fn activity_name(path: Result<Path<String>, PathRejection>) -> Result<String, ApiError> {
    let Path(name) = path?;
    Ok(name)
}

fn require_email(query: Result<Query<QueryPairs>, QueryRejection>) -> Result<String, ApiError> {
    let Query(pairs) = query?;
    pairs
        .into_iter()
        .rev()
        .find(|(key, _)| key == "email")
        .map(|(_, value)| value)
        .ok_or_else(|| ApiError::missing_query_param("email"))
}

pub async fn activity_signup_handler(
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<QueryPairs>, QueryRejection>,
    State(registry): State<Arc<ActivityRegistry>>,
) -> Result<Json<MessageResponse>, ApiError> {
    let activity_name = activity_name(path)?;
    let email = require_email(query)?;
    let message = activities_service::signup(&registry, &activity_name, &email)?;
    Ok(Json(MessageResponse { message }))
}

pub async fn activity_unregister_handler(
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<QueryPairs>, QueryRejection>,
    State(registry): State<Arc<ActivityRegistry>>,
) -> Result<Json<MessageResponse>, ApiError> {
    let activity_name = activity_name(path)?;
    let email = require_email(query)?;
    let message = activities_service::unregister(&registry, &activity_name, &email)?;
    Ok(Json(MessageResponse { message }))
}
