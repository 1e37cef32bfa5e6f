//! Data models for the entregas backend

pub mod deliveries;

pub use deliveries::{DeliveredFlag, DeliveriesQuery, Delivery, UpdateStatusRequest};
