//! `wburl inspect <url>` – decode a request URL as the backend would.

use anyhow::Result;
use wburl_core::auth::AuthRequest;

pub fn run_inspect(url: &str) -> Result<()> {
    let req = AuthRequest::from_request_url(url)?;
    println!("action:     {}", req.action);
    println!("permission: {}", req.required_permission());
    println!("nid:        {}", req.node_id);
    println!("provider:   {}", req.provider);
    println!("cookie:     {}", req.cookie);
    if req.token.is_empty() {
        println!("token:      (empty)");
    } else {
        println!("token:      {}", req.token);
    }
    Ok(())
}
