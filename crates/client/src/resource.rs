use std::marker::PhantomData;

use common::types::{Deleted, RecordId};
use reqwest::{Method, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, warn};

use crate::errors::ClientError;

/// CRUD operations on one collection path, e.g. `/api/customers`.
///
/// `I` is the request body of create and update, `R` the record the server
/// returns.
pub struct Resource<I, R> {
    http: reqwest::Client,
    base_url: String,
    path: String,
    _types: PhantomData<fn(&I) -> R>,
}

impl<I, R> Clone for Resource<I, R> {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
            base_url: self.base_url.clone(),
            path: self.path.clone(),
            _types: PhantomData,
        }
    }
}

impl<I, R> std::fmt::Debug for Resource<I, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Resource").field("base_url", &self.base_url).field("path", &self.path).finish()
    }
}

impl<I, R> Resource<I, R>
where
    I: Serialize,
    R: DeserializeOwned,
{
    pub(crate) fn new(http: reqwest::Client, base_url: &str, path: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            path: format!("/{}", path.trim_matches('/')),
            _types: PhantomData,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    fn collection_url(&self) -> String {
        format!("{}{}", self.base_url, self.path)
    }

    fn item_url(&self, id: RecordId) -> String {
        format!("{}/{}", self.collection_url(), id)
    }

    async fn send(&self, method: Method, url: String, build: impl FnOnce(RequestBuilder) -> RequestBuilder) -> Result<Response, ClientError> {
        debug!(%method, %url, "shop api request");
        let resp = build(self.http.request(method.clone(), &url)).send().await?;
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        // an unreadable error body still reports the status
        let body = resp.bytes().await.unwrap_or_default();
        let err = ClientError::from_status_body(status.as_u16(), &body);
        warn!(%method, %url, status = status.as_u16(), error = %err, "shop api request failed");
        Err(err)
    }

    async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, ClientError> {
        let bytes = resp.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// All records, in the order the server returns them.
    pub async fn get_all(&self) -> Result<Vec<R>, ClientError> {
        let resp = self.send(Method::GET, self.collection_url(), |b| b).await?;
        Self::decode(resp).await
    }

    pub async fn get_one(&self, id: RecordId) -> Result<R, ClientError> {
        let resp = self.send(Method::GET, self.item_url(id), |b| b).await?;
        Self::decode(resp).await
    }

    /// Create a record; returns the server's canonical copy with its new id.
    pub async fn create(&self, input: &I) -> Result<R, ClientError> {
        let resp = self.send(Method::POST, self.collection_url(), |b| b.json(input)).await?;
        Self::decode(resp).await
    }

    /// Replace the record at `id`.
    pub async fn update(&self, id: RecordId, input: &I) -> Result<R, ClientError> {
        let resp = self.send(Method::PUT, self.item_url(id), |b| b.json(input)).await?;
        Self::decode(resp).await
    }

    /// Delete the record at `id`. The success body is ignored.
    pub async fn delete(&self, id: RecordId) -> Result<Deleted, ClientError> {
        self.send(Method::DELETE, self.item_url(id), |b| b).await?;
        Ok(Deleted::OK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::types::{Customer, CustomerInput};

    #[test]
    fn urls_are_joined_without_double_slashes() {
        let r: Resource<CustomerInput, Customer> =
            Resource::new(reqwest::Client::new(), "http://shop.local:8000/", "api/customers/");
        assert_eq!(r.path(), "/api/customers");
        assert_eq!(r.collection_url(), "http://shop.local:8000/api/customers");
        assert_eq!(r.item_url(7), "http://shop.local:8000/api/customers/7");
    }
}
