use std::convert::Infallible;
use serde::Serialize;
use warp::http::StatusCode;
use warp::reply::{Json, WithStatus};
use warp::{Rejection, Reply};
use crate::config::constants::HISTORY_LIMIT;
use crate::errors::{StoreError, StoreResult};
use crate::server::app_context::AppContext;
use crate::structs::analyze_request::AnalyzeRequest;
use crate::structs::analyze_response::AnalyzeResponse;
use crate::structs::api_response::{ErrorResponse, HealthResponse, MessageResponse};

fn json_reply<T: Serialize>(value: &T, status: StatusCode) -> WithStatus<Json> {
    warp::reply::with_status(warp::reply::json(value), status)
}

fn error_reply(status: StatusCode, detail: impl Into<String>) -> WithStatus<Json> {
    json_reply(&ErrorResponse::new(detail), status)
}

/// Runs a synchronous store call off the async workers.
async fn run_blocking<T, F>(operation: F) -> StoreResult<T>
where
    F: FnOnce() -> StoreResult<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(operation)
        .await
        .map_err(|e| StoreError::Task(e.to_string()))?
}

pub async fn health_handler() -> Result<impl Reply, Infallible> {
    Ok(json_reply(&HealthResponse::default(), StatusCode::OK))
}

pub async fn analyze_handler(
    request: AnalyzeRequest,
    ctx: AppContext,
) -> Result<impl Reply, Infallible> {
    if request.is_blank() {
        return Ok(error_reply(StatusCode::BAD_REQUEST, "Code content cannot be empty."));
    }

    log::info!("🔍 Analysis requested ({} bytes)", request.code.len());

    let outcome = ctx.gateway.analyze(&request.code).await;
    if let Some(reason) = outcome.reason() {
        log::warn!("⚠️ Analysis degraded: {reason}");
    }

    let analysis = outcome.into_text();
    let store = ctx.store.clone();
    let code = request.code;
    let result = analysis.clone();

    match run_blocking(move || store.create(&code, &result)).await {
        Ok(id) => {
            log::info!("💾 Saved analysis #{id}");
            Ok(json_reply(&AnalyzeResponse { analysis }, StatusCode::OK))
        }
        Err(e) => {
            log::error!("❌ Failed to save analysis: {e}");
            Ok(error_reply(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("An error occurred during analysis: {e}"),
            ))
        }
    }
}

pub async fn history_handler(ctx: AppContext) -> Result<impl Reply, Infallible> {
    let store = ctx.store.clone();

    match run_blocking(move || store.list_recent(HISTORY_LIMIT)).await {
        Ok(records) => Ok(json_reply(&records, StatusCode::OK)),
        Err(e) => {
            log::error!("❌ Failed to load history: {e}");
            Ok(error_reply(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("An error occurred while loading history: {e}"),
            ))
        }
    }
}

pub async fn delete_one_handler(id: i64, ctx: AppContext) -> Result<impl Reply, Infallible> {
    let store = ctx.store.clone();

    match run_blocking(move || store.delete_one(id)).await {
        Ok(true) => {
            log::info!("🗑️ Deleted analysis #{id}");
            Ok(json_reply(&MessageResponse::new("Analysis deleted successfully"), StatusCode::OK))
        }
        Ok(false) => Ok(error_reply(StatusCode::NOT_FOUND, "Analysis not found")),
        Err(e) => {
            log::error!("❌ Failed to delete analysis #{id}: {e}");
            Ok(error_reply(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("An error occurred while deleting: {e}"),
            ))
        }
    }
}

pub async fn delete_all_handler(ctx: AppContext) -> Result<impl Reply, Infallible> {
    let store = ctx.store.clone();

    match run_blocking(move || store.delete_all()).await {
        Ok(count) => {
            log::info!("🗑️ Deleted {count} analyses");
            Ok(json_reply(
                &MessageResponse::new(format!("{count} analyses deleted successfully")),
                StatusCode::OK,
            ))
        }
        Err(e) => {
            log::error!("❌ Failed to clear history: {e}");
            Ok(error_reply(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("An error occurred while deleting: {e}"),
            ))
        }
    }
}

/// Turns warp rejections into `{"detail": ...}` bodies.
pub async fn handle_rejection(err: Rejection) -> Result<impl Reply, Infallible> {
    let (status, detail) = if err.is_not_found() {
        (StatusCode::NOT_FOUND, "Not Found".to_string())
    } else if let Some(e) = err.find::<warp::filters::body::BodyDeserializeError>() {
        (StatusCode::UNPROCESSABLE_ENTITY, format!("Invalid request body: {e}"))
    } else if err.find::<warp::reject::PayloadTooLarge>().is_some() {
        (StatusCode::PAYLOAD_TOO_LARGE, "Request body is too large".to_string())
    } else if err.find::<warp::reject::LengthRequired>().is_some() {
        (StatusCode::LENGTH_REQUIRED, "Content-Length header is required".to_string())
    } else if err.find::<warp::reject::UnsupportedMediaType>().is_some() {
        (StatusCode::UNSUPPORTED_MEDIA_TYPE, "Expected a JSON body".to_string())
    } else if err.find::<warp::reject::MethodNotAllowed>().is_some() {
        (StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed".to_string())
    } else {
        log::error!("❌ Unhandled rejection: {err:?}");
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error".to_string())
    };

    Ok(error_reply(status, detail))
}
