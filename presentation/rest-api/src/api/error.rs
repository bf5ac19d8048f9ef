use poem::http::StatusCode;
use poem::web::Json;
use serde::Serialize;

/// Error body shared by every receipt endpoint: an empty JSON object.
/// The status code alone tells the caller what went wrong.
#[derive(Debug, Default, Serialize)]
pub struct EmptyResponse {}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<EmptyResponse>);
}
