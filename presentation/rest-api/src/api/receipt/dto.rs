use serde::Serialize;

use business::domain::receipt::model::ScoreRecord;

/// Body returned after a receipt is processed.
#[derive(Debug, Clone, Serialize)]
pub struct ReceiptIdResponse {
    pub id: String,
}

impl From<ScoreRecord> for ReceiptIdResponse {
    fn from(record: ScoreRecord) -> Self {
        Self {
            id: record.id.as_str().to_string(),
        }
    }
}

/// Body returned when looking up the points of a processed receipt.
#[derive(Debug, Clone, Serialize)]
pub struct PointsResponse {
    pub points: u64,
}

impl From<ScoreRecord> for PointsResponse {
    fn from(record: ScoreRecord) -> Self {
        Self {
            points: record.points,
        }
    }
}
