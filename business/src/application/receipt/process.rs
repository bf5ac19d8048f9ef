use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::receipt::errors::ReceiptError;
use crate::domain::receipt::model::{Receipt, ScoreRecord};
use crate::domain::receipt::repository::ReceiptRepository;
use crate::domain::receipt::scoring;
use crate::domain::receipt::use_cases::process::{ProcessReceiptParams, ProcessReceiptUseCase};
use crate::domain::receipt::value_objects::ReceiptId;

pub struct ProcessReceiptUseCaseImpl {
    pub repository: Arc<dyn ReceiptRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ProcessReceiptUseCase for ProcessReceiptUseCaseImpl {
    async fn execute(&self, params: ProcessReceiptParams) -> Result<ScoreRecord, ReceiptError> {
        let id = ReceiptId::from_raw(&params.raw);
        self.logger.info(&format!(
            "Processing receipt {} ({} bytes)",
            id,
            params.raw.len()
        ));

        let receipt = Receipt::from_json(&params.raw).inspect_err(|e| {
            self.logger
                .warn(&format!("Rejected receipt {}: {}", id, e));
        })?;

        let breakdown = scoring::breakdown(&receipt);
        let points = breakdown.iter().map(|c| c.points).sum();
        self.logger.debug(&format!(
            "Receipt {} scored {}: {}",
            id,
            points,
            breakdown
                .iter()
                .map(|c| format!("{}={}", c.rule, c.points))
                .collect::<Vec<_>>()
                .join(", ")
        ));

        let record = ScoreRecord::new(id, points);
        self.repository.save(&record).await?;

        self.logger
            .info(&format!("Receipt {} stored with {} points", record.id, record.points));
        Ok(record)
    }
}
