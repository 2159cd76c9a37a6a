//! WaterButler request URLs.
//!
//! A URL is the configured base address, the endpoint segment (`file?` or
//! `data?`) and a form-encoded query carrying the path, an empty token, the
//! node id, the provider and the session cookie. Building a URL never
//! performs I/O; issuing the request is the caller's job.

mod endpoint;
mod path;
mod query;

pub use endpoint::Endpoint;
pub use path::{effective_path, ROOT_PATH};
pub use query::RequestQuery;

use url::Url;

use crate::cookie::require_cookie;
use crate::error::UrlError;
use crate::model::{FileDescriptor, PageContext, TreeItem};

/// Cookie holding the OSF session, forwarded so the backend can authenticate.
pub const DEFAULT_COOKIE_NAME: &str = "osf";

/// Builds request URLs against one WaterButler base address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlBuilder {
    base: String,
    cookie_name: String,
}

impl UrlBuilder {
    /// Validates `base` and normalizes it to end with `/`.
    ///
    /// Query and fragment on the base are dropped.
    pub fn new(base: &str) -> Result<Self, UrlError> {
        let mut url = Url::parse(base).map_err(|e| UrlError::InvalidBaseUrl {
            url: base.to_string(),
            reason: e.to_string(),
        })?;
        if url.cannot_be_a_base() {
            return Err(UrlError::InvalidBaseUrl {
                url: base.to_string(),
                reason: "cannot be a base".to_string(),
            });
        }
        url.set_query(None);
        url.set_fragment(None);
        if !url.path().ends_with('/') {
            let p = format!("{}/", url.path());
            url.set_path(&p);
        }
        Ok(Self {
            base: url.into(),
            cookie_name: DEFAULT_COOKIE_NAME.to_string(),
        })
    }

    /// Reads the session from a cookie other than `osf`.
    pub fn with_cookie_name(mut self, name: impl Into<String>) -> Self {
        self.cookie_name = name.into();
        self
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn cookie_name(&self) -> &str {
        &self.cookie_name
    }

    /// Builds a URL for `endpoint`.
    ///
    /// `path` defaults to `/` when `None` or empty; `file.name` is appended to
    /// it verbatim. Fails with [`UrlError::MissingCookie`] if the session
    /// cookie is absent from `ctx.cookies`.
    pub fn build_url(
        &self,
        endpoint: Endpoint,
        path: Option<&str>,
        provider: &str,
        file: Option<&FileDescriptor>,
        ctx: &PageContext,
    ) -> Result<String, UrlError> {
        let cookie = require_cookie(&ctx.cookies, &self.cookie_name)?;
        let path = effective_path(path, file);
        let query = RequestQuery {
            path: &path,
            token: "",
            nid: &ctx.node_id,
            provider,
            cookie,
        };
        let url = format!("{}{}{}", self.base, endpoint.segment(), query.encode());
        tracing::debug!(
            %endpoint,
            provider,
            path = %path,
            nid = %ctx.node_id,
            "built waterbutler url"
        );
        Ok(url)
    }

    /// Builds a URL from a file-tree row's path and provider.
    pub fn build_from_tree_item(
        &self,
        endpoint: Endpoint,
        item: &TreeItem,
        file: Option<&FileDescriptor>,
        ctx: &PageContext,
    ) -> Result<String, UrlError> {
        self.build_url(
            endpoint,
            Some(item.data.path.as_str()),
            &item.data.provider,
            file,
            ctx,
        )
    }

    pub fn build_file_url_from_path(
        &self,
        path: Option<&str>,
        provider: &str,
        file: Option<&FileDescriptor>,
        ctx: &PageContext,
    ) -> Result<String, UrlError> {
        self.build_url(Endpoint::File, path, provider, file, ctx)
    }

    pub fn build_file_url(
        &self,
        item: &TreeItem,
        file: Option<&FileDescriptor>,
        ctx: &PageContext,
    ) -> Result<String, UrlError> {
        self.build_from_tree_item(Endpoint::File, item, file, ctx)
    }

    pub fn build_metadata_url_from_path(
        &self,
        path: Option<&str>,
        provider: &str,
        file: Option<&FileDescriptor>,
        ctx: &PageContext,
    ) -> Result<String, UrlError> {
        self.build_url(Endpoint::Metadata, path, provider, file, ctx)
    }

    pub fn build_metadata_url(
        &self,
        item: &TreeItem,
        file: Option<&FileDescriptor>,
        ctx: &PageContext,
    ) -> Result<String, UrlError> {
        self.build_from_tree_item(Endpoint::Metadata, item, file, ctx)
    }
}
