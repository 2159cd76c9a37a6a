//! Which WaterButler route a request goes to.

use std::fmt;

/// `File` serves raw content from `file?`; `Metadata` describes a path via `data?`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    File,
    Metadata,
}

impl Endpoint {
    /// Maps the boolean "is this a metadata request" form used by older callers.
    pub fn from_metadata_flag(metadata: bool) -> Self {
        if metadata {
            Endpoint::Metadata
        } else {
            Endpoint::File
        }
    }

    /// Path segment appended to the base address, including the `?`.
    pub fn segment(self) -> &'static str {
        match self {
            Endpoint::File => "file?",
            Endpoint::Metadata => "data?",
        }
    }

    /// Inverse of [`Endpoint::segment`] for a bare route name (`file` or `data`).
    pub fn from_route(route: &str) -> Option<Self> {
        match route {
            "file" => Some(Endpoint::File),
            "data" => Some(Endpoint::Metadata),
            _ => None,
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::File => write!(f, "file"),
            Endpoint::Metadata => write!(f, "metadata"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metadata_flag() {
        assert_eq!(Endpoint::from_metadata_flag(true), Endpoint::Metadata);
        assert_eq!(Endpoint::from_metadata_flag(false), Endpoint::File);
    }

    #[test]
    fn segments() {
        assert_eq!(Endpoint::File.segment(), "file?");
        assert_eq!(Endpoint::Metadata.segment(), "data?");
    }

    #[test]
    fn route_names() {
        assert_eq!(Endpoint::from_route("data"), Some(Endpoint::Metadata));
        assert_eq!(Endpoint::from_route("file"), Some(Endpoint::File));
        assert_eq!(Endpoint::from_route("metadata"), None);
    }
}
