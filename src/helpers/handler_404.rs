use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use crate::models::booking::BookingResponse;

pub async fn page_not_found_handler() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(BookingResponse::failed("Not found")))
}
