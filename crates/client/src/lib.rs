//! Client side of the brand kit.
//!
//! - [`context`]: the resource context contract and the [`BrandKit`] bundle
//! - [`http`]: REST implementation of the contract over `reqwest`
//! - [`list`]: incremental (infinite-scroll) list consumer
//! - [`panel`]: headless controllers for the colors, fonts and assets panels
//! - [`editor`]: the canvas editor the panels read from and apply to

pub mod config;
pub mod context;
pub mod debounce;
pub mod editor;
pub mod error;
pub mod http;
pub mod list;
pub mod panel;
pub mod upload;

#[cfg(test)]
pub(crate) mod testing;

pub use config::ClientConfig;
pub use context::{BrandKit, ResourceContext};
pub use error::ClientError;
pub use http::HttpResource;
pub use list::{ListConsumer, LoadOutcome};
