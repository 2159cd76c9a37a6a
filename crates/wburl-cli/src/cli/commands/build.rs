//! `wburl file|metadata|file-item|metadata-item` – print a request URL.

use anyhow::{Context, Result};
use std::path::Path;
use wburl_core::config::WbConfig;
use wburl_core::url_model::UrlBuilder;
use wburl_core::{Endpoint, FileDescriptor, PageContext, TreeItem};

use crate::cli::{ItemArgs, PageArgs, PathArgs};

fn builder_for(cfg: &WbConfig, page: &PageArgs) -> Result<UrlBuilder> {
    match &page.base_url {
        Some(base) => Ok(UrlBuilder::new(base)?.with_cookie_name(cfg.cookie_name.clone())),
        None => cfg.builder(),
    }
}

fn page_context(page: &PageArgs) -> PageContext {
    PageContext::new(page.nid.clone(), page.cookies.clone())
}

pub fn read_tree_item(path: &Path) -> Result<TreeItem> {
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("read tree item: {}", path.display()))?;
    let item = serde_json::from_str(&data)
        .with_context(|| format!("parse tree item JSON: {}", path.display()))?;
    Ok(item)
}

pub fn run_build_from_path(
    cfg: &WbConfig,
    endpoint: Endpoint,
    target: &PathArgs,
    page: &PageArgs,
) -> Result<()> {
    let builder = builder_for(cfg, page)?;
    let file = target.name.as_deref().map(FileDescriptor::new);
    let url = builder.build_url(
        endpoint,
        target.path.as_deref(),
        &target.provider,
        file.as_ref(),
        &page_context(page),
    )?;
    println!("{url}");
    Ok(())
}

pub fn run_build_from_item(
    cfg: &WbConfig,
    endpoint: Endpoint,
    target: &ItemArgs,
    page: &PageArgs,
) -> Result<()> {
    let builder = builder_for(cfg, page)?;
    let item = read_tree_item(&target.item)?;
    let file = target.name.as_deref().map(FileDescriptor::new);
    let url = builder.build_from_tree_item(endpoint, &item, file.as_ref(), &page_context(page))?;
    println!("{url}");
    Ok(())
}
