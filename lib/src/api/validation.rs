//! Request validation rules for the delivery endpoints.
//!
//! Each rule is a small function returning the typed value or a
//! `BadRequest` with a rule-specific message. Handlers evaluate the rules
//! in a fixed order and stop at the first failure, so nothing reaches the
//! database on invalid input.

use chrono::NaiveDate;
use serde_json::Value;

use crate::error::Error;
use crate::models::{DeliveredFlag, DeliveriesQuery};
use crate::repository::DeliveryFilters;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Convert the raw read-endpoint query parameters into typed filters.
pub fn parse_filters(query: &DeliveriesQuery) -> Result<DeliveryFilters, Error> {
    let status = query
        .status
        .as_deref()
        .map(parse_status_filter)
        .transpose()?;
    let start_date = query
        .start_date
        .as_deref()
        .map(|v| parse_date("startDate", v))
        .transpose()?;
    let end_date = query
        .end_date
        .as_deref()
        .map(|v| parse_date("endDate", v))
        .transpose()?;
    let pdv = query.pdv.as_deref().map(parse_pdv).transpose()?;

    Ok(DeliveryFilters {
        start_date,
        end_date,
        pdv,
        status,
    })
}

fn parse_status_filter(value: &str) -> Result<DeliveredFlag, Error> {
    DeliveredFlag::parse(value)
        .ok_or_else(|| Error::BadRequest("status must be 'S' or 'N'".to_string()))
}

fn parse_date(field: &str, value: &str) -> Result<NaiveDate, Error> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
        .map_err(|_| Error::BadRequest(format!("{} must be a date in YYYY-MM-DD format", field)))
}

fn parse_pdv(value: &str) -> Result<i32, Error> {
    value
        .trim()
        .parse()
        .map_err(|_| Error::BadRequest("pdv must be numeric".to_string()))
}

/// Update rule 1: `status` present, a string, case-insensitively `S` or `N`.
pub fn parse_status(status: Option<&Value>) -> Result<DeliveredFlag, Error> {
    status
        .and_then(Value::as_str)
        .and_then(DeliveredFlag::parse)
        .ok_or_else(|| Error::BadRequest("status is required and must be 'S' or 'N'".to_string()))
}

/// Update rule 2: `delivererName` present, a string, non-blank after trim.
pub fn parse_deliverer_name(value: Option<&Value>) -> Result<String, Error> {
    let value = match value {
        None | Some(Value::Null) => {
            return Err(Error::BadRequest("delivererName is required".to_string()))
        }
        Some(value) => value,
    };

    let name = value
        .as_str()
        .ok_or_else(|| Error::BadRequest("delivererName must be a string".to_string()))?;

    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(Error::BadRequest(
            "delivererName must not be blank".to_string(),
        ));
    }

    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn query(
        start_date: Option<&str>,
        end_date: Option<&str>,
        pdv: Option<&str>,
        status: Option<&str>,
    ) -> DeliveriesQuery {
        DeliveriesQuery {
            start_date: start_date.map(String::from),
            end_date: end_date.map(String::from),
            pdv: pdv.map(String::from),
            status: status.map(String::from),
        }
    }

    #[test]
    fn absent_filters_parse_to_empty() {
        let filters = parse_filters(&query(None, None, None, None)).unwrap();
        assert_eq!(filters, DeliveryFilters::default());
    }

    #[test]
    fn present_filters_are_typed() {
        let filters =
            parse_filters(&query(Some("2024-01-01"), Some("2024-01-31"), Some("42"), Some("s")))
                .unwrap();

        assert_eq!(filters.start_date.unwrap().to_string(), "2024-01-01");
        assert_eq!(filters.end_date.unwrap().to_string(), "2024-01-31");
        assert_eq!(filters.pdv, Some(42));
        assert_eq!(filters.status, Some(DeliveredFlag::Delivered));
    }

    #[test]
    fn invalid_status_filter_is_rejected() {
        let err = parse_filters(&query(None, None, None, Some("X"))).unwrap_err();
        assert!(err.to_string().contains("status must be 'S' or 'N'"));
    }

    #[test]
    fn invalid_date_is_rejected_with_the_field_name() {
        let err = parse_filters(&query(Some("01/02/2024"), None, None, None)).unwrap_err();
        assert!(err.to_string().contains("startDate"));
    }

    #[test]
    fn non_numeric_pdv_is_rejected() {
        let err = parse_filters(&query(None, None, Some("abc"), None)).unwrap_err();
        assert!(err.to_string().contains("pdv must be numeric"));
    }

    #[test]
    fn update_status_rule_accepts_lowercase() {
        let value = json!("s");
        assert_eq!(parse_status(Some(&value)).unwrap(), DeliveredFlag::Delivered);
        let value = json!("N");
        assert_eq!(parse_status(Some(&value)).unwrap(), DeliveredFlag::NotDelivered);
    }

    #[test]
    fn update_status_rule_rejects_missing_invalid_and_non_string() {
        assert!(parse_status(None).is_err());
        assert!(parse_status(Some(&Value::Null)).is_err());

        let value = json!("X");
        assert!(parse_status(Some(&value)).is_err());

        // A numeric status fails the rule with a 400, not a deserializer error
        let value = json!(1);
        let err = parse_status(Some(&value)).unwrap_err();
        assert!(err.to_string().contains("status is required and must be 'S' or 'N'"));
    }

    #[test]
    fn deliverer_name_is_trimmed() {
        let value = json!("  Maria  ");
        assert_eq!(parse_deliverer_name(Some(&value)).unwrap(), "Maria");
    }

    #[test]
    fn deliverer_name_rules_have_specific_messages() {
        let err = parse_deliverer_name(None).unwrap_err();
        assert!(err.to_string().contains("delivererName is required"));

        let err = parse_deliverer_name(Some(&Value::Null)).unwrap_err();
        assert!(err.to_string().contains("delivererName is required"));

        let value = json!(42);
        let err = parse_deliverer_name(Some(&value)).unwrap_err();
        assert!(err.to_string().contains("must be a string"));

        let value = json!("   ");
        let err = parse_deliverer_name(Some(&value)).unwrap_err();
        assert!(err.to_string().contains("must not be blank"));
    }
}
