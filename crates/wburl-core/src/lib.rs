pub mod config;
pub mod logging;

pub mod auth;
pub mod cookie;
pub mod error;
pub mod model;
pub mod url_model;

pub use error::UrlError;
pub use model::{FileDescriptor, ItemData, PageContext, TreeItem};
pub use url_model::{Endpoint, UrlBuilder};
