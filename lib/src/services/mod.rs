//! Services module for the entregas backend

pub mod deliveries;
pub mod health;

use std::sync::Arc;

use crate::repository::DeliveryOperations;

#[derive(Clone)]
pub struct Services {
    pub deliveries: Arc<deliveries::DeliveryService>,
    pub health: Arc<health::HealthService>,
}

impl Services {
    pub fn new(repository: Arc<dyn DeliveryOperations>) -> Self {
        let deliveries = Arc::new(deliveries::DeliveryService::new(repository.clone()));
        let health = Arc::new(health::HealthService::new(repository));
        Self { deliveries, health }
    }

    /// Create services backed by an empty mock repository
    #[cfg(any(test, feature = "mocks"))]
    pub fn mocks() -> Self {
        Self::new(Arc::new(crate::repository::MockRepository::new()))
    }
}
