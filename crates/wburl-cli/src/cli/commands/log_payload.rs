//! `wburl log-payload <path>` – decode a WaterButler log callback body.

use anyhow::{Context, Result};
use std::path::Path;
use wburl_core::auth::LogPayload;

pub fn read_log_payload(path: &Path) -> Result<LogPayload> {
    let body = std::fs::read_to_string(path)
        .with_context(|| format!("read log payload: {}", path.display()))?;
    let payload =
        LogPayload::from_json(&body).with_context(|| format!("decode {}", path.display()))?;
    Ok(payload)
}

pub fn run_log_payload(path: &Path) -> Result<()> {
    let payload = read_log_payload(path)?;
    println!("user:     {}", payload.user_id);
    println!("provider: {}", payload.provider);
    println!("log:      {}", payload.node_log_kind());
    println!("metadata: {}", payload.metadata);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use wburl_core::auth::LogAction;

    #[test]
    fn read_log_payload_from_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(
            br#"{"auth":{"id":"u1"},"action":"delete","provider":"github","metadata":{"path":"/x"}}"#,
        )
        .unwrap();
        f.flush().unwrap();
        let payload = read_log_payload(f.path()).unwrap();
        assert_eq!(payload.action, LogAction::Delete);
        assert_eq!(payload.node_log_kind(), "file_removed");
    }

    #[test]
    fn read_log_payload_missing_field_names_it() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(br#"{"auth":{"id":"u1"},"action":"create","metadata":{}}"#)
            .unwrap();
        f.flush().unwrap();
        let err = read_log_payload(f.path()).unwrap_err();
        assert!(format!("{err:#}").contains("\"provider\""));
    }
}
