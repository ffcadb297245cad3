//! Types and helpers shared by the shop server, its client and the CLI.

pub mod types;
pub mod utils;

/// Collection paths mounted by the server and used by the client.
pub mod paths {
    pub const CUSTOMERS: &str = "/api/customers";
    pub const VEHICLES: &str = "/api/vehicles";
    pub const SERVICES: &str = "/api/services";
    pub const HEALTH: &str = "/health";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_type_ok() {
        let h = types::Health::healthy();
        assert_eq!(h.status, "healthy");
    }

    #[test]
    fn resource_paths_are_under_api() {
        for p in [paths::CUSTOMERS, paths::VEHICLES, paths::SERVICES] {
            assert!(p.starts_with("/api/"));
            assert!(!p.ends_with('/'));
        }
    }
}
