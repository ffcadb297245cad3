use common::paths;
use common::types::{
    Customer, CustomerInput, Health, ServiceInput, ServiceRecord, Vehicle, VehicleInput,
};
use configs::ClientConfig;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::errors::ClientError;
use crate::resource::Resource;

/// Entry point bound to one API base URL, e.g. `http://localhost:8000`.
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Clone, Debug)]
pub struct ShopClient {
    http: reqwest::Client,
    base_url: String,
}

impl ShopClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_http_client(reqwest::Client::new(), base_url)
    }

    /// Use a preconfigured `reqwest::Client` (proxies, timeouts, TLS).
    pub fn with_http_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn from_config(cfg: &ClientConfig) -> Self {
        Self::new(cfg.base_url.as_str())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resource at an arbitrary collection path.
    pub fn resource<I, R>(&self, path: &str) -> Resource<I, R>
    where
        I: Serialize,
        R: DeserializeOwned,
    {
        Resource::new(self.http.clone(), &self.base_url, path)
    }

    /// Untyped resource for paths without a record type.
    pub fn raw(&self, path: &str) -> Resource<Value, Value> {
        self.resource(path)
    }

    pub fn customers(&self) -> Resource<CustomerInput, Customer> {
        self.resource(paths::CUSTOMERS)
    }

    pub fn vehicles(&self) -> Resource<VehicleInput, Vehicle> {
        self.resource(paths::VEHICLES)
    }

    pub fn services(&self) -> Resource<ServiceInput, ServiceRecord> {
        self.resource(paths::SERVICES)
    }

    /// `GET /health`.
    pub async fn health(&self) -> Result<Health, ClientError> {
        let url = format!("{}{}", self.base_url, paths::HEALTH);
        debug!(%url, "shop api health check");
        let resp = self.http.get(&url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.bytes().await.unwrap_or_default();
            return Err(ClientError::from_status_body(status.as_u16(), &body));
        }
        Ok(serde_json::from_slice(&resp.bytes().await?)?)
    }
}
