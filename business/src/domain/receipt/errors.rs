#[derive(Debug, thiserror::Error)]
pub enum ReceiptError {
    #[error("receipt.malformed_document")]
    MalformedDocument,
    #[error("receipt.malformed_total")]
    MalformedTotal,
    #[error("receipt.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}

impl ReceiptError {
    /// True when the submitted document could not be turned into a scorable receipt.
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            ReceiptError::MalformedDocument | ReceiptError::MalformedTotal
        )
    }
}
