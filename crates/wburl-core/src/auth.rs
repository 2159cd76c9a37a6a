//! Decoding of the auth callback query WaterButler sends back to OSF.
//!
//! WaterButler forwards the `cookie`, `token`, `nid` and `provider` it was
//! given, plus the `action` it is about to perform. This module only decodes
//! that query and maps actions to the permission they need; session lookup
//! and node permission checks live with the host application.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use url::form_urlencoded;
use url::Url;

use crate::error::UrlError;
use crate::url_model::Endpoint;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Permission {
    Read,
    Write,
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Permission::Read => write!(f, "read"),
            Permission::Write => write!(f, "write"),
        }
    }
}

/// Operation WaterButler asks permission for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Metadata,
    Download,
    Upload,
    Delete,
    Copy,
    Move,
}

impl Action {
    pub fn required_permission(self) -> Permission {
        match self {
            Action::Metadata | Action::Download => Permission::Read,
            Action::Upload | Action::Delete | Action::Copy | Action::Move => Permission::Write,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Action::Metadata => "metadata",
            Action::Download => "download",
            Action::Upload => "upload",
            Action::Delete => "delete",
            Action::Copy => "copy",
            Action::Move => "move",
        }
    }
}

impl FromStr for Action {
    type Err = UrlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "metadata" => Ok(Action::Metadata),
            "download" => Ok(Action::Download),
            "upload" => Ok(Action::Upload),
            "delete" => Ok(Action::Delete),
            "copy" => Ok(Action::Copy),
            "move" => Ok(Action::Move),
            other => Err(UrlError::UnknownAction(other.to_string())),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decoded auth callback parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthRequest {
    pub action: Action,
    pub cookie: String,
    /// Always empty today; accepted as-is.
    pub token: String,
    pub node_id: String,
    pub provider: String,
}

impl AuthRequest {
    /// Decodes a form-urlencoded query (without the leading `?`).
    ///
    /// Every one of `action`, `cookie`, `token`, `nid` and `provider` must be
    /// present; an empty value counts as present. On repeated keys the first
    /// wins.
    pub fn from_query(query: &str) -> Result<Self, UrlError> {
        let mut action = None;
        let mut cookie = None;
        let mut token = None;
        let mut node_id = None;
        let mut provider = None;

        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            let slot = match &*key {
                "action" => &mut action,
                "cookie" => &mut cookie,
                "token" => &mut token,
                "nid" => &mut node_id,
                "provider" => &mut provider,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into_owned());
            }
        }

        let action: Action = action.ok_or(UrlError::MissingParam("action"))?.parse()?;
        Ok(Self {
            action,
            cookie: cookie.ok_or(UrlError::MissingParam("cookie"))?,
            token: token.ok_or(UrlError::MissingParam("token"))?,
            node_id: node_id.ok_or(UrlError::MissingParam("nid"))?,
            provider: provider.ok_or(UrlError::MissingParam("provider"))?,
        })
    }

    /// Decodes the query part of a full URL.
    pub fn from_url(url: &str) -> Result<Self, UrlError> {
        let parsed = Url::parse(url).map_err(|e| UrlError::InvalidUrl {
            url: url.to_string(),
            reason: e.to_string(),
        })?;
        Self::from_query(parsed.query().unwrap_or(""))
    }

    /// Decodes a URL built for a WaterButler route. When the query carries no
    /// `action`, it is implied by the route: `data` means metadata and `file`
    /// means download.
    pub fn from_request_url(url: &str) -> Result<Self, UrlError> {
        let parsed = Url::parse(url).map_err(|e| UrlError::InvalidUrl {
            url: url.to_string(),
            reason: e.to_string(),
        })?;
        let query = parsed.query().unwrap_or("");
        let has_action = form_urlencoded::parse(query.as_bytes()).any(|(k, _)| k == "action");
        if has_action {
            return Self::from_query(query);
        }

        let route = parsed
            .path_segments()
            .and_then(|mut segments| segments.next_back())
            .unwrap_or("");
        let action = match Endpoint::from_route(route) {
            Some(Endpoint::Metadata) => Action::Metadata,
            Some(Endpoint::File) => Action::Download,
            None => return Err(UrlError::MissingParam("action")),
        };
        let query = form_urlencoded::Serializer::new(String::new())
            .append_pair("action", action.as_str())
            .extend_pairs(form_urlencoded::parse(query.as_bytes()))
            .finish();
        Self::from_query(&query)
    }

    pub fn required_permission(&self) -> Permission {
        self.action.required_permission()
    }
}

/// File event reported by WaterButler once an operation finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogAction {
    Create,
    Update,
    Delete,
}

impl LogAction {
    /// Node log entry recorded for this event.
    pub fn node_log_kind(self) -> &'static str {
        match self {
            LogAction::Create => "file_added",
            LogAction::Update => "file_updated",
            LogAction::Delete => "file_removed",
        }
    }
}

impl FromStr for LogAction {
    type Err = UrlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "create" => Ok(LogAction::Create),
            "update" => Ok(LogAction::Update),
            "delete" => Ok(LogAction::Delete),
            other => Err(UrlError::UnknownLogAction(other.to_string())),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawLogPayload {
    auth: Option<RawLogAuth>,
    action: Option<String>,
    provider: Option<String>,
    metadata: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct RawLogAuth {
    id: Option<String>,
}

/// Callback body WaterButler posts once a file operation has finished.
#[derive(Debug, Clone, PartialEq)]
pub struct LogPayload {
    /// OSF user the operation ran as (`auth.id`).
    pub user_id: String,
    pub action: LogAction,
    pub provider: String,
    /// Provider-specific file metadata, passed through untouched.
    pub metadata: serde_json::Value,
}

impl LogPayload {
    /// Decodes the JSON body. `auth` (with `id`), `action`, `provider` and
    /// `metadata` are required; a `null` counts as missing.
    pub fn from_json(body: &str) -> Result<Self, UrlError> {
        let raw: RawLogPayload =
            serde_json::from_str(body).map_err(|e| UrlError::InvalidPayload(e.to_string()))?;
        let auth = raw.auth.ok_or(UrlError::MissingField("auth"))?;
        let action: LogAction = raw.action.ok_or(UrlError::MissingField("action"))?.parse()?;
        Ok(Self {
            user_id: auth.id.ok_or(UrlError::MissingField("auth.id"))?,
            action,
            provider: raw.provider.ok_or(UrlError::MissingField("provider"))?,
            metadata: raw.metadata.ok_or(UrlError::MissingField("metadata"))?,
        })
    }

    pub fn node_log_kind(&self) -> &'static str {
        self.action.node_log_kind()
    }
}
