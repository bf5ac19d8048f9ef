use std::sync::Arc;

use logger::TracingLogger;
use persistence::receipt::repository::ReceiptRepositoryInMemory;

use business::application::receipt::get_points::GetReceiptPointsUseCaseImpl;
use business::application::receipt::process::ProcessReceiptUseCaseImpl;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub receipt_api: crate::api::receipt::routes::ReceiptApi,
}

impl DependencyContainer {
    pub fn new() -> Self {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters
        let receipt_repository = Arc::new(ReceiptRepositoryInMemory::new());

        // Receipt use cases
        let process_use_case = Arc::new(ProcessReceiptUseCaseImpl {
            repository: receipt_repository.clone(),
            logger: logger.clone(),
        });
        let get_points_use_case = Arc::new(GetReceiptPointsUseCaseImpl {
            repository: receipt_repository,
            logger,
        });

        let receipt_api =
            crate::api::receipt::routes::ReceiptApi::new(process_use_case, get_points_use_case);

        Self {
            health_api,
            receipt_api,
        }
    }
}
