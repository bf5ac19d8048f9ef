use poem::http::StatusCode;
use poem::web::Json;

use business::domain::receipt::errors::ReceiptError;

use crate::api::error::{EmptyResponse, IntoErrorResponse};

// Unparseable receipts answer 500 rather than 400 to stay compatible with
// existing clients of the receipt processor.
impl IntoErrorResponse for ReceiptError {
    fn into_error_response(self) -> (StatusCode, Json<EmptyResponse>) {
        let status = match &self {
            err if err.is_parse_error() => StatusCode::INTERNAL_SERVER_ERROR,
            ReceiptError::NotFound => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(EmptyResponse::default()))
    }
}
