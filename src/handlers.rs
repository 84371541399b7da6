use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Serialize;

use crate::core::{GuestRegistration, GuestUpdate, Row};
use crate::error::ApiResult;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ApiMessage {
    pub success: bool,
    pub message: String,
}

impl ApiMessage {
    fn new(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ApiData<T> {
    pub success: bool,
    pub data: T,
}

impl<T> ApiData<T> {
    fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

pub async fn healthcheck() -> Json<ApiMessage> {
    Json(ApiMessage::new("ok"))
}

pub async fn add_guest(
    State(state): State<AppState>,
    Json(payload): Json<GuestRegistration>,
) -> ApiResult<(StatusCode, Json<ApiMessage>)> {
    state.service.create_registration(&payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiMessage::new("guest added to the sheet")),
    ))
}

pub async fn update_guest(
    State(state): State<AppState>,
    Path(row_index): Path<u32>,
    Json(payload): Json<GuestUpdate>,
) -> ApiResult<Json<ApiMessage>> {
    state.service.update_registration(row_index, &payload).await?;
    Ok(Json(ApiMessage::new(format!("row {row_index} updated"))))
}

pub async fn list_guests(State(state): State<AppState>) -> ApiResult<Json<ApiData<Vec<Row>>>> {
    let rows = state.service.list_registrations().await?;
    Ok(Json(ApiData::new(rows)))
}
