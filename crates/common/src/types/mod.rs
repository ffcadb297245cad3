//! Wire records exchanged between the shop API and its clients.
//!
//! Each record kind has an `*Input` companion without the server-assigned
//! `id`; it is the body of both create (POST) and full update (PUT).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

mod status;

pub use status::{ParseStatusError, ServiceStatus, VehicleStatus};

/// Server-assigned identifier of a record within its collection.
pub type RecordId = i32;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Health {
    pub status: String,
}

impl Health {
    pub fn healthy() -> Self {
        Self { status: "healthy".into() }
    }
}

/// Error body convention: `{"detail": "<message>"}`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ErrorBody {
    pub detail: String,
}

/// Acknowledgment returned by a successful delete.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deleted {
    pub success: bool,
}

impl Deleted {
    pub const OK: Deleted = Deleted { success: true };
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub phone: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CustomerInput {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl From<&Customer> for CustomerInput {
    fn from(c: &Customer) -> Self {
        Self { name: c.name.clone(), email: c.email.clone(), phone: c.phone.clone() }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Vehicle {
    pub id: RecordId,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub price: f64,
    pub status: VehicleStatus,
    pub customer_id: Option<RecordId>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct VehicleInput {
    pub make: String,
    pub model: String,
    pub year: i32,
    pub price: f64,
    #[serde(default)]
    pub status: VehicleStatus,
    #[serde(default)]
    pub customer_id: Option<RecordId>,
}

impl From<&Vehicle> for VehicleInput {
    fn from(v: &Vehicle) -> Self {
        Self {
            make: v.make.clone(),
            model: v.model.clone(),
            year: v.year,
            price: v.price,
            status: v.status,
            customer_id: v.customer_id,
        }
    }
}

/// A service job booked against a vehicle. Exposed at `/api/services`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ServiceRecord {
    pub id: RecordId,
    pub vehicle_id: RecordId,
    pub description: String,
    pub cost: f64,
    pub date: NaiveDate,
    pub status: ServiceStatus,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ServiceInput {
    pub vehicle_id: RecordId,
    pub description: String,
    pub cost: f64,
    pub date: NaiveDate,
    #[serde(default)]
    pub status: ServiceStatus,
}

impl From<&ServiceRecord> for ServiceInput {
    fn from(s: &ServiceRecord) -> Self {
        Self {
            vehicle_id: s.vehicle_id,
            description: s.description.clone(),
            cost: s.cost,
            date: s.date,
            status: s.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn vehicle_input_defaults_status_and_owner() {
        let v: VehicleInput = serde_json::from_value(json!({
            "make": "Honda", "model": "CBR", "year": 2020, "price": 9500.0
        }))
        .unwrap();
        assert_eq!(v.status, VehicleStatus::Available);
        assert_eq!(v.customer_id, None);
    }

    #[test]
    fn service_record_uses_iso_date_and_kebab_status() {
        let s = ServiceRecord {
            id: 3,
            vehicle_id: 1,
            description: "oil change".into(),
            cost: 49.9,
            date: NaiveDate::from_ymd_opt(2024, 5, 17).unwrap(),
            status: ServiceStatus::InProgress,
        };
        let v = serde_json::to_value(&s).unwrap();
        assert_eq!(v["date"], "2024-05-17");
        assert_eq!(v["status"], "in-progress");
    }

    #[test]
    fn input_from_record_drops_only_id() {
        let c = Customer { id: 7, name: "A".into(), email: "a@x.com".into(), phone: "1".into() };
        let input = CustomerInput::from(&c);
        let v = serde_json::to_value(&input).unwrap();
        assert!(v.get("id").is_none());
        assert_eq!(v["email"], "a@x.com");
    }

    #[test]
    fn deleted_ack_shape() {
        assert_eq!(serde_json::to_value(Deleted::OK).unwrap(), json!({"success": true}));
    }
}
