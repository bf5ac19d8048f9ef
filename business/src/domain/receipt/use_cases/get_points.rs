use async_trait::async_trait;

use crate::domain::receipt::errors::ReceiptError;
use crate::domain::receipt::model::ScoreRecord;
use crate::domain::receipt::value_objects::ReceiptId;

pub struct GetReceiptPointsParams {
    pub id: ReceiptId,
}

#[async_trait]
pub trait GetReceiptPointsUseCase: Send + Sync {
    async fn execute(&self, params: GetReceiptPointsParams) -> Result<ScoreRecord, ReceiptError>;
}
