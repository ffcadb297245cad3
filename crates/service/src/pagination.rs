//! Pagination utilities for service layer
//!
//! Collections are paged with `skip`/`limit` query parameters.

use serde::Deserialize;

pub const DEFAULT_LIMIT: u64 = 100;
pub const MAX_LIMIT: u64 = 1000;

/// Pagination parameters
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
pub struct Pagination {
    /// rows to skip from the start of the id-ordered collection
    #[serde(default)]
    pub skip: u64,
    /// maximum rows to return
    #[serde(default = "default_limit")]
    pub limit: u64,
}

fn default_limit() -> u64 { DEFAULT_LIMIT }

impl Pagination {
    /// Clamp to sane bounds and return `(offset, limit)`
    pub fn normalize(self) -> (u64, u64) {
        (self.skip, self.limit.clamp(1, MAX_LIMIT))
    }
}

impl Default for Pagination {
    fn default() -> Self { Self { skip: 0, limit: DEFAULT_LIMIT } }
}

#[cfg(test)]
mod tests {
    use super::Pagination;

    #[test]
    fn normalize_clamps_zero_limit() {
        let (skip, limit) = Pagination { skip: 0, limit: 0 }.normalize();
        assert_eq!(skip, 0);
        assert_eq!(limit, 1);
    }

    #[test]
    fn normalize_clamps_upper_bound() {
        let (skip, limit) = Pagination { skip: 40, limit: 5000 }.normalize();
        assert_eq!(skip, 40);
        assert_eq!(limit, 1000);
    }

    #[test]
    fn default_values_are_sane() {
        let d = Pagination::default();
        assert_eq!(d.skip, 0);
        assert_eq!(d.limit, 100);
    }
}
