use std::sync::Arc;

use poem::web::{Data, Json, Path};
use poem::{Endpoint, EndpointExt, IntoResponse, Response, Route, get, handler, post};

use business::domain::receipt::use_cases::get_points::{
    GetReceiptPointsParams, GetReceiptPointsUseCase,
};
use business::domain::receipt::use_cases::process::{ProcessReceiptParams, ProcessReceiptUseCase};
use business::domain::receipt::value_objects::ReceiptId;

use crate::api::error::IntoErrorResponse;
use crate::api::receipt::dto::{PointsResponse, ReceiptIdResponse};

/// Receipt processing API
///
/// Served by plain poem handlers: the receipt id is derived from the literal
/// request body, which a typed JSON payload would not preserve.
#[derive(Clone)]
pub struct ReceiptApi {
    process_use_case: Arc<dyn ProcessReceiptUseCase>,
    get_points_use_case: Arc<dyn GetReceiptPointsUseCase>,
}

impl ReceiptApi {
    pub fn new(
        process_use_case: Arc<dyn ProcessReceiptUseCase>,
        get_points_use_case: Arc<dyn GetReceiptPointsUseCase>,
    ) -> Self {
        Self {
            process_use_case,
            get_points_use_case,
        }
    }

    /// Routes relative to the `/receipts` prefix.
    pub fn into_routes(self) -> impl Endpoint {
        Route::new()
            .at("/process", post(process_receipt))
            .at("/:id/points", get(get_receipt_points))
            .data(self)
    }

    async fn process(&self, raw: Vec<u8>) -> Response {
        match self
            .process_use_case
            .execute(ProcessReceiptParams { raw })
            .await
        {
            Ok(record) => Json(ReceiptIdResponse::from(record)).into_response(),
            Err(err) => err.into_error_response().into_response(),
        }
    }

    async fn points(&self, id: String) -> Response {
        match self
            .get_points_use_case
            .execute(GetReceiptPointsParams {
                id: ReceiptId::new(id),
            })
            .await
        {
            Ok(record) => Json(PointsResponse::from(record)).into_response(),
            Err(err) => err.into_error_response().into_response(),
        }
    }
}

/// Process a receipt
///
/// Scores the submitted receipt and returns the id its points are stored under.
#[handler]
async fn process_receipt(Data(api): Data<&ReceiptApi>, body: Vec<u8>) -> Response {
    api.process(body).await
}

/// Get the points awarded to a processed receipt
#[handler]
async fn get_receipt_points(Data(api): Data<&ReceiptApi>, Path(id): Path<String>) -> Response {
    api.points(id).await
}
