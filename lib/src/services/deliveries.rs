//! Delivery operations over the repository, mapped to API errors.

use std::sync::Arc;

use crate::error::{Error, Result};
use crate::models::{DeliveredFlag, Delivery};
use crate::repository::{DeliveryFilters, DeliveryOperations};

pub struct DeliveryService {
    repository: Arc<dyn DeliveryOperations>,
}

impl DeliveryService {
    pub fn new(repository: Arc<dyn DeliveryOperations>) -> Self {
        Self { repository }
    }

    /// Verify the database can hand out a connection.
    pub async fn ping(&self) -> Result<()> {
        self.repository
            .ping()
            .await
            .map_err(|e| Error::Database(e.to_string()))
    }

    /// List deliveries matching the given filters.
    pub async fn list(&self, filters: &DeliveryFilters) -> Result<Vec<Delivery>> {
        self.repository
            .list_deliveries(filters)
            .await
            .map_err(|e| Error::Database(e.to_string()))
    }

    /// Apply a status update to a single delivery.
    ///
    /// Returns the success message echoing the applied status and name, or
    /// `NotFound` when the id matches no row.
    pub async fn update_status(
        &self,
        id: i32,
        flag: DeliveredFlag,
        deliverer_name: &str,
    ) -> Result<String> {
        let affected = self
            .repository
            .update_delivery_status(id, flag, deliverer_name)
            .await
            .map_err(|e| Error::Database(e.to_string()))?;

        if affected == 0 {
            return Err(Error::NotFound(format!("Delivery {} not found", id)));
        }

        Ok(format!(
            "Delivery {} updated: status '{}', deliverer '{}'",
            id,
            flag.as_str(),
            deliverer_name
        ))
    }
}
