//! Table QR Code API Handlers

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
};
use shared::models::{DeletedResponse, QrCode, QrCodeCreate};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::utils::{AppError, AppResult};

/// GET /api/qrcodes/:restaurant_id - 获取餐厅的所有桌台二维码 (按桌号升序)
pub async fn list_by_restaurant(
    State(state): State<ServerState>,
    Path(restaurant_id): Path<String>,
) -> AppResult<Json<Vec<QrCode>>> {
    let codes = state
        .qr_code_service()
        .list_by_restaurant(&restaurant_id)
        .await?;
    Ok(Json(codes))
}

/// GET /api/qrcodes/code/:id - 获取单个二维码
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<QrCode>> {
    let qr = state.qr_code_service().get(&id).await?;
    Ok(Json(qr))
}

/// GET /api/qrcodes/code/:id/image - PNG 图片 (打印桌卡)
pub async fn image(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let png = state.qr_code_service().image(&id).await?;
    Ok(([(header::CONTENT_TYPE, "image/png")], png))
}

/// POST /api/qrcodes - 生成桌台二维码
pub async fn create(
    State(state): State<ServerState>,
    user: CurrentUser,
    payload: Result<Json<QrCodeCreate>, JsonRejection>,
) -> AppResult<(StatusCode, Json<QrCode>)> {
    let Json(payload) = payload.map_err(|e| AppError::validation(e.body_text()))?;
    let qr = state.qr_code_service().issue(payload).await?;

    tracing::info!(
        target: "audit",
        user = %user.username,
        id = %qr.id,
        "qr_code created"
    );

    Ok((StatusCode::CREATED, Json(qr)))
}

/// DELETE /api/qrcodes/:id - 删除二维码 (硬删除)
pub async fn delete(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<String>,
) -> AppResult<Json<DeletedResponse>> {
    let id = state.qr_code_service().delete(&id).await?;

    tracing::info!(target: "audit", user = %user.username, id = %id, "qr_code deleted");

    Ok(Json(DeletedResponse { id }))
}
