//! Row and payload types for the delivery endpoints

use chrono::NaiveDate;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::schema::entregas;

/// A row of the `entregas` table, serialized with its database column names.
#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable, Serialize)]
#[diesel(table_name = entregas)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Delivery {
    pub id: i32,
    pub data_emissao: NaiveDate,
    pub codigo_pdv: Option<i32>,
    pub pdv: Option<i32>,
    pub entregue: String,
    pub nome_entregador: Option<String>,
}

/// Delivered flag, the only two states a delivery can be in.
///
/// The single-character wire representation (`S` delivered, `N` not
/// delivered) comes from the external data-entry system that owns the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveredFlag {
    Delivered,
    NotDelivered,
}

impl DeliveredFlag {
    /// Parse a flag case-insensitively; anything but `S`/`N` is rejected.
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_uppercase().as_str() {
            "S" => Some(Self::Delivered),
            "N" => Some(Self::NotDelivered),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Delivered => "S",
            Self::NotDelivered => "N",
        }
    }
}

/// Body of `PUT /api/deliveries/{id}/status`.
///
/// Both fields stay raw JSON values so the validation rules can distinguish
/// a missing field from a non-string one instead of losing the request to
/// the deserializer.
#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    #[serde(default)]
    pub status: Option<serde_json::Value>,
    #[serde(default, rename = "delivererName")]
    pub deliverer_name: Option<serde_json::Value>,
}

/// Raw query parameters of `GET /api/deliveries`, as transmitted.
#[derive(Debug, Default, Deserialize)]
pub struct DeliveriesQuery {
    #[serde(rename = "startDate")]
    pub start_date: Option<String>,
    #[serde(rename = "endDate")]
    pub end_date: Option<String>,
    pub pdv: Option<String>,
    pub status: Option<String>,
}
