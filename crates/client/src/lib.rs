//! Typed HTTP client for the shop API.
//!
//! [`ShopClient`] is bound to one base URL and hands out a [`Resource`] per
//! collection. Every resource operation issues exactly one request and
//! returns `Result<_, ClientError>`; there is no caching and no retry.
//!
//! ```ignore
//! let shop = client::ShopClient::new("http://localhost:8000");
//! let added = shop.customers().create(&CustomerInput { .. }).await?;
//! let all = shop.customers().get_all().await?;
//! ```

pub mod client;
pub mod errors;
pub mod resource;

pub use client::ShopClient;
pub use errors::ClientError;
pub use resource::Resource;
