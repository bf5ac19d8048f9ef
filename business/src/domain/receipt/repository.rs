use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::ScoreRecord;
use super::value_objects::ReceiptId;

#[async_trait]
pub trait ReceiptRepository: Send + Sync {
    /// Inserts the record, replacing any record already stored under the same id.
    async fn save(&self, record: &ScoreRecord) -> Result<(), RepositoryError>;
    async fn get_by_id(&self, id: &ReceiptId) -> Result<ScoreRecord, RepositoryError>;
}
