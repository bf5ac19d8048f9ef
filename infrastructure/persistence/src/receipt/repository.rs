use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use business::domain::errors::RepositoryError;
use business::domain::receipt::model::ScoreRecord;
use business::domain::receipt::repository::ReceiptRepository;
use business::domain::receipt::value_objects::ReceiptId;

use super::entity::ScoreRecordEntity;

/// Process-lifetime receipt store. Every read and write goes through the lock.
#[derive(Default)]
pub struct ReceiptRepositoryInMemory {
    records: RwLock<HashMap<String, ScoreRecordEntity>>,
}

impl ReceiptRepositoryInMemory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub async fn record_count(&self) -> usize {
        self.records.read().await.len()
    }
}

#[async_trait]
impl ReceiptRepository for ReceiptRepositoryInMemory {
    async fn save(&self, record: &ScoreRecord) -> Result<(), RepositoryError> {
        let entity = ScoreRecordEntity::from_domain(record);
        let replaced = self
            .records
            .write()
            .await
            .insert(entity.id.clone(), entity);

        if let Some(previous) = replaced {
            tracing::debug!(
                id = %record.id,
                previous_points = previous.points,
                previous_stored_at = %previous.stored_at,
                "overwrote score record"
            );
        }
        Ok(())
    }

    async fn get_by_id(&self, id: &ReceiptId) -> Result<ScoreRecord, RepositoryError> {
        self.records
            .read()
            .await
            .get(id.as_str())
            .cloned()
            .map(ScoreRecordEntity::into_domain)
            .ok_or(RepositoryError::NotFound)
    }
}
