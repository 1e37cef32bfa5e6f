//! In-memory mock repository for tests and mock mode.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use parking_lot::RwLock;

use super::{DeliveryFilters, DeliveryOperations, RepositoryError, RepositoryResult};
use crate::models::{DeliveredFlag, Delivery};

/// Mock implementation of [`DeliveryOperations`] backed by a `Vec`.
///
/// Mirrors the production filter semantics in memory, and can simulate an
/// unreachable database via [`set_unreachable`](Self::set_unreachable).
#[derive(Default)]
pub struct MockRepository {
    deliveries: RwLock<Vec<Delivery>>,
    unreachable: AtomicBool,
}

impl MockRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_deliveries(deliveries: Vec<Delivery>) -> Self {
        Self {
            deliveries: RwLock::new(deliveries),
            unreachable: AtomicBool::new(false),
        }
    }

    pub fn insert(&self, delivery: Delivery) {
        self.deliveries.write().push(delivery);
    }

    /// Make every subsequent operation fail with a pool error.
    pub fn set_unreachable(&self, unreachable: bool) {
        self.unreachable.store(unreachable, Ordering::SeqCst);
    }

    pub fn get(&self, id: i32) -> Option<Delivery> {
        self.deliveries.read().iter().find(|d| d.id == id).cloned()
    }

    fn check_reachable(&self) -> RepositoryResult<()> {
        if self.unreachable.load(Ordering::SeqCst) {
            return Err(RepositoryError::Pool(
                "mock database unreachable".to_string(),
            ));
        }
        Ok(())
    }
}

fn matches(delivery: &Delivery, filters: &DeliveryFilters) -> bool {
    if let Some(start) = filters.start_date {
        if delivery.data_emissao < start {
            return false;
        }
    }
    if let Some(end) = filters.end_date {
        if delivery.data_emissao > end {
            return false;
        }
    }
    if let Some(pdv) = filters.pdv {
        if delivery.codigo_pdv != Some(pdv) && delivery.pdv != Some(pdv) {
            return false;
        }
    }
    if let Some(flag) = filters.status {
        if delivery.entregue != flag.as_str() {
            return false;
        }
    }
    true
}

#[async_trait]
impl DeliveryOperations for MockRepository {
    async fn ping(&self) -> RepositoryResult<()> {
        self.check_reachable()
    }

    async fn list_deliveries(&self, filters: &DeliveryFilters) -> RepositoryResult<Vec<Delivery>> {
        self.check_reachable()?;

        let mut results: Vec<Delivery> = self
            .deliveries
            .read()
            .iter()
            .filter(|d| matches(d, filters))
            .cloned()
            .collect();
        results.sort_by_key(|d| d.id);

        Ok(results)
    }

    async fn update_delivery_status(
        &self,
        id: i32,
        flag: DeliveredFlag,
        deliverer_name: &str,
    ) -> RepositoryResult<usize> {
        self.check_reachable()?;

        let mut deliveries = self.deliveries.write();
        let mut affected = 0;
        for delivery in deliveries.iter_mut().filter(|d| d.id == id) {
            delivery.entregue = flag.as_str().to_string();
            delivery.nome_entregador = Some(deliverer_name.to_string());
            affected += 1;
        }

        Ok(affected)
    }
}
