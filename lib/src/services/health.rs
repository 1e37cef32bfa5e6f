use std::sync::Arc;

use serde::Serialize;

use crate::repository::DeliveryOperations;

#[derive(Serialize)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
    pub service: String,
    pub components: HealthComponents,
}

#[derive(Serialize)]
pub struct HealthComponents {
    pub database: ComponentHealth,
}

#[derive(Serialize)]
pub struct ComponentHealth {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

pub struct HealthService {
    repository: Arc<dyn DeliveryOperations>,
}

impl HealthService {
    pub fn new(repository: Arc<dyn DeliveryOperations>) -> Self {
        Self { repository }
    }

    pub async fn check_health(&self) -> HealthStatus {
        let database_health = self.check_database().await;

        let overall_status = if database_health.status == "healthy" {
            "healthy"
        } else {
            "unhealthy"
        };

        HealthStatus {
            status: overall_status.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            service: "entregas-backend".to_string(),
            components: HealthComponents {
                database: database_health,
            },
        }
    }

    async fn check_database(&self) -> ComponentHealth {
        match self.repository.ping().await {
            Ok(_) => ComponentHealth {
                status: "healthy".to_string(),
                message: None,
            },
            Err(e) => ComponentHealth {
                status: "unhealthy".to_string(),
                message: Some(format!("Database error: {}", e)),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockRepository;

    #[tokio::test]
    async fn reports_healthy_when_database_responds() {
        let service = HealthService::new(Arc::new(MockRepository::new()));

        let health = service.check_health().await;
        assert_eq!(health.status, "healthy");
        assert_eq!(health.service, "entregas-backend");
        assert_eq!(health.components.database.status, "healthy");
    }

    #[tokio::test]
    async fn reports_unhealthy_with_detail_when_database_is_down() {
        let repository = Arc::new(MockRepository::new());
        repository.set_unreachable(true);
        let service = HealthService::new(repository);

        let health = service.check_health().await;
        assert_eq!(health.status, "unhealthy");
        assert!(health
            .components
            .database
            .message
            .as_deref()
            .unwrap()
            .contains("unreachable"));
    }
}
