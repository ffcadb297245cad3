//! Field rules applied to every create and update before touching the database.

use common::types::{CustomerInput, ServiceInput, VehicleInput};

use crate::errors::ServiceError;

pub const MIN_YEAR: i32 = 1900;
pub const MAX_YEAR: i32 = 2100;

fn check_len(field: &str, value: &str, min: usize, max: usize) -> Result<(), ServiceError> {
    let n = value.chars().count();
    if n < min || n > max {
        return Err(ServiceError::Validation(format!("{field} must be between {min} and {max} characters")));
    }
    Ok(())
}

fn check_amount(field: &str, value: f64) -> Result<(), ServiceError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ServiceError::Validation(format!("{field} must be a non-negative number")));
    }
    Ok(())
}

/// `local@domain.tld` with no whitespace.
fn check_email(value: &str) -> Result<(), ServiceError> {
    let invalid = || ServiceError::Validation("email is not a valid email address".into());
    check_len("email", value, 3, 100)?;
    if value.chars().any(char::is_whitespace) {
        return Err(invalid());
    }
    let (local, domain) = value.split_once('@').ok_or_else(invalid)?;
    if local.is_empty() || domain.contains('@') {
        return Err(invalid());
    }
    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 || labels.iter().any(|l| l.is_empty()) {
        return Err(invalid());
    }
    Ok(())
}

pub fn validate_customer(input: &CustomerInput) -> Result<(), ServiceError> {
    check_len("name", &input.name, 1, 100)?;
    check_email(&input.email)?;
    check_len("phone", &input.phone, 1, 20)?;
    Ok(())
}

pub fn validate_vehicle(input: &VehicleInput) -> Result<(), ServiceError> {
    check_len("make", &input.make, 1, 50)?;
    check_len("model", &input.model, 1, 50)?;
    if !(MIN_YEAR..=MAX_YEAR).contains(&input.year) {
        return Err(ServiceError::Validation(format!("year must be between {MIN_YEAR} and {MAX_YEAR}")));
    }
    check_amount("price", input.price)?;
    Ok(())
}

pub fn validate_service(input: &ServiceInput) -> Result<(), ServiceError> {
    check_len("description", &input.description, 1, 500)?;
    check_amount("cost", input.cost)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use common::types::{ServiceStatus, VehicleStatus};

    fn customer(email: &str) -> CustomerInput {
        CustomerInput { name: "A".into(), email: email.into(), phone: "1".into() }
    }

    #[test]
    fn accepts_plain_emails() {
        for ok in ["a@x.com", "first.last@shop.example.org"] {
            assert!(validate_customer(&customer(ok)).is_ok(), "{ok}");
        }
    }

    #[test]
    fn rejects_malformed_emails() {
        for bad in ["", "ax.com", "@x.com", "a@x", "a@.com", "a@x.", "a b@x.com", "a@b@x.com"] {
            assert!(matches!(validate_customer(&customer(bad)), Err(ServiceError::Validation(_))), "{bad}");
        }
    }

    #[test]
    fn name_and_phone_lengths() {
        let mut c = customer("a@x.com");
        c.name = String::new();
        assert!(validate_customer(&c).is_err());
        c.name = "n".repeat(100);
        assert!(validate_customer(&c).is_ok());
        c.phone = "1".repeat(21);
        let err = validate_customer(&c).unwrap_err();
        assert_eq!(err.to_string(), "validation error: phone must be between 1 and 20 characters");
    }

    #[test]
    fn vehicle_year_and_price_bounds() {
        let mut v = VehicleInput {
            make: "Ducati".into(),
            model: "Monster".into(),
            year: 1900,
            price: 0.0,
            status: VehicleStatus::Reserved,
            customer_id: None,
        };
        assert!(validate_vehicle(&v).is_ok());
        v.year = 2101;
        assert!(validate_vehicle(&v).is_err());
        v.year = 2000;
        v.price = -0.01;
        assert!(validate_vehicle(&v).is_err());
        v.price = f64::NAN;
        assert!(validate_vehicle(&v).is_err());
    }

    #[test]
    fn service_description_and_cost() {
        let mut s = ServiceInput {
            vehicle_id: 1,
            description: "Brake pads".into(),
            cost: 120.0,
            date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            status: ServiceStatus::Pending,
        };
        assert!(validate_service(&s).is_ok());
        s.description = "x".repeat(501);
        assert!(validate_service(&s).is_err());
        s.description = "ok".into();
        s.cost = -5.0;
        assert!(validate_service(&s).is_err());
    }
}
