use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeRequest {
    #[serde(default)]
    pub vehicle_type: String,
    #[serde(default)]
    pub timestamps: Vec<DateTime<FixedOffset>>,
}

#[derive(Serialize)]
pub struct FeeResponse {
    pub fee: u32,
}

async fn calculate_fee(
    State(state): State<Arc<AppState>>,
    Json(request): Json<FeeRequest>,
) -> ApiResult<Json<FeeResponse>> {
    if request.vehicle_type.is_empty() {
        return Err(ApiError::BadRequest("missing vehicle type".into()));
    }
    if request.timestamps.is_empty() {
        return Err(ApiError::BadRequest("missing timestamps array".into()));
    }

    let fee = state
        .fee_service
        .calculate_fee(&request.vehicle_type, &request.timestamps)
        .await?;
    tracing::info!(
        vehicle_type = %request.vehicle_type,
        entries = request.timestamps.len(),
        fee,
        "fee calculated"
    );
    Ok(Json(FeeResponse { fee }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/fee", post(calculate_fee))
}
