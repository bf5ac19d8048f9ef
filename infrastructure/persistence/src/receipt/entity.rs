use chrono::{DateTime, Utc};

use business::domain::receipt::model::ScoreRecord;
use business::domain::receipt::value_objects::ReceiptId;

/// Stored shape of a score record.
#[derive(Debug, Clone)]
pub struct ScoreRecordEntity {
    pub id: String,
    pub points: u64,
    pub stored_at: DateTime<Utc>,
}

impl ScoreRecordEntity {
    pub fn from_domain(record: &ScoreRecord) -> Self {
        Self {
            id: record.id.as_str().to_string(),
            points: record.points,
            stored_at: Utc::now(),
        }
    }

    pub fn into_domain(self) -> ScoreRecord {
        ScoreRecord::new(ReceiptId::new(self.id), self.points)
    }
}
