use std::sync::Arc;
use axum::{Extension, Json, Router};
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::post;
use tracing::{error, info, warn};
use crate::controller::AppState;
use crate::mailer::Mailer;
use crate::models::booking::{BookingPayload, BookingRequest, BookingResponse};
use crate::models::email::OutgoingEmail;
use crate::templates::booking_email::render_booking_email;
use crate::templates::locale::Language;

pub const SEND_FAILED: &str = "Failed to send email";
pub const INVALID_PAYLOAD: &str = "Invalid booking payload";

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/book", post(book_apartment))
        .route_layer(Extension(app_state.mailer))
}

/// Localize and render the confirmation for one booking.
pub fn compose_confirmation(booking: &BookingRequest) -> OutgoingEmail {
    let strings = Language::from_code(&booking.language).strings(booking);
    let rendered = render_booking_email(&strings, booking);

    OutgoingEmail {
        to: booking.email.clone(),
        subject: rendered.subject,
        text_body: rendered.text,
        html_body: rendered.html,
    }
}

pub async fn book_apartment(
    Extension(mailer): Extension<Arc<dyn Mailer>>,
    payload: Result<Json<BookingPayload>, JsonRejection>,
) -> impl IntoResponse {
    let payload = match payload {
        Ok(Json(payload)) => payload,
        Err(e) => {
            warn!("Rejected booking payload due to: {}", e);
            return (
                StatusCode::BAD_REQUEST,
                Json(BookingResponse::failed(INVALID_PAYLOAD))
            ).into_response();
        }
    };

    let booking = match BookingRequest::try_from(payload) {
        Ok(booking) => booking,
        Err(e) => {
            warn!("Rejected booking: {}", e);
            return (
                StatusCode::BAD_REQUEST,
                Json(BookingResponse::failed(e.to_string()))
            ).into_response();
        }
    };

    let email = compose_confirmation(&booking);

    return match mailer.send(&email).await {
        Ok(message_id) => {
            info!("Message sent: {}", message_id);
            (StatusCode::OK, Json(BookingResponse::sent(message_id))).into_response()
        }
        Err(e) => {
            error!("Error sending email: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(BookingResponse::failed(SEND_FAILED))
            ).into_response()
        }
    };
}
