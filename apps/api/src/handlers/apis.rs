use axum::Json;
use axum::extract::{Extension, Path, State};
use axum::http::{HeaderMap, StatusCode};

use apiward_core::UserIdentity;
use apiward_domain::IpWhitelist;

use crate::dto::{ApiResponse, UpdateIpWhitelistRequest};
use crate::error::ApiResult;
use crate::request_context::request_context;
use crate::state::AppState;

pub async fn get_api_handler(
    State(state): State<AppState>,
    Extension(user): Extension<UserIdentity>,
    Path(api_id): Path<String>,
    headers: HeaderMap,
) -> ApiResult<Json<ApiResponse>> {
    let context = request_context(&state, user, &headers).await?;
    let api = state.api_service.get_api(&context, api_id.as_str()).await?;

    Ok(Json(ApiResponse::from(api)))
}

pub async fn update_ip_whitelist_handler(
    State(state): State<AppState>,
    Extension(user): Extension<UserIdentity>,
    Path(api_id): Path<String>,
    headers: HeaderMap,
    Json(payload): Json<UpdateIpWhitelistRequest>,
) -> ApiResult<StatusCode> {
    // Malformed input is rejected before the workspace is loaded.
    IpWhitelist::parse(payload.ip_whitelist.as_deref())?;

    let context = request_context(&state, user, &headers).await?;
    state
        .api_service
        .update_ip_whitelist(&context, api_id.as_str(), payload.ip_whitelist.as_deref())
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
