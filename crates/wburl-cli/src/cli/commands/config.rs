//! `wburl config` – show config location and values.

use anyhow::Result;
use wburl_core::config::{self, WbConfig};

pub fn run_config(cfg: &WbConfig) -> Result<()> {
    println!("config file:     {}", config::config_path()?.display());
    println!("waterbutler_url: {}", cfg.waterbutler_url);
    println!("cookie_name:     {}", cfg.cookie_name);
    Ok(())
}
