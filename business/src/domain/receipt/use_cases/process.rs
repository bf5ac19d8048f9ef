use async_trait::async_trait;

use crate::domain::receipt::errors::ReceiptError;
use crate::domain::receipt::model::ScoreRecord;

pub struct ProcessReceiptParams {
    /// The request body exactly as submitted.
    pub raw: Vec<u8>,
}

#[async_trait]
pub trait ProcessReceiptUseCase: Send + Sync {
    async fn execute(&self, params: ProcessReceiptParams) -> Result<ScoreRecord, ReceiptError>;
}
