//! Persistence layer: sea-orm entities for the shop tables plus
//! conversions into the wire records of `common::types`.

pub mod errors;
pub mod db;
pub mod customer;
pub mod vehicle;
pub mod service_record;

#[cfg(test)]
mod tests;
