//! Service layer providing business-oriented CRUD operations on top of models.
//! - Separates business logic (validation, references, cascades) from data access.
//! - Reuses entity definitions in the `models` crate.
//! - Speaks the wire records of `common::types` so handlers stay thin.

pub mod errors;
pub mod pagination;
pub mod validation;
pub mod customer_service;
pub mod vehicle_service;
pub mod service_record_service;
#[cfg(test)]
pub mod test_support;
