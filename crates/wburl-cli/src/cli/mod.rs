//! CLI for building and inspecting WaterButler request URLs.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use wburl_core::config;
use wburl_core::Endpoint;

use commands::{
    run_build_from_item, run_build_from_path, run_config, run_inspect, run_log_payload,
};

/// Top-level CLI for wburl.
#[derive(Debug, Parser)]
#[command(name = "wburl")]
#[command(about = "Build WaterButler file and metadata request URLs", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

/// Page state the URL is built for.
#[derive(Debug, Clone, Args)]
pub struct PageArgs {
    /// Node (project or component) identifier.
    #[arg(long)]
    pub nid: String,

    /// Browser cookie string, e.g. "osf=abc; csrftoken=xyz".
    #[arg(long)]
    pub cookies: String,

    /// Override the configured WaterButler base URL.
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,
}

/// Storage location addressed by path.
#[derive(Debug, Clone, Args)]
pub struct PathArgs {
    /// Storage provider, e.g. osfstorage or github.
    #[arg(long)]
    pub provider: String,

    /// Path within the provider (default "/").
    #[arg(long)]
    pub path: Option<String>,

    /// File name appended to the path as-is.
    #[arg(long)]
    pub name: Option<String>,
}

/// Storage location taken from a file-tree row.
#[derive(Debug, Clone, Args)]
pub struct ItemArgs {
    /// JSON file holding a tree item: {"data": {"path": ..., "provider": ...}}.
    pub item: PathBuf,

    /// File name appended to the item's path as-is.
    #[arg(long)]
    pub name: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Build a file (download/upload) URL from a path and provider.
    File {
        #[command(flatten)]
        target: PathArgs,
        #[command(flatten)]
        page: PageArgs,
    },

    /// Build a metadata URL from a path and provider.
    Metadata {
        #[command(flatten)]
        target: PathArgs,
        #[command(flatten)]
        page: PageArgs,
    },

    /// Build a file URL from a tree item JSON file.
    FileItem {
        #[command(flatten)]
        target: ItemArgs,
        #[command(flatten)]
        page: PageArgs,
    },

    /// Build a metadata URL from a tree item JSON file.
    MetadataItem {
        #[command(flatten)]
        target: ItemArgs,
        #[command(flatten)]
        page: PageArgs,
    },

    /// Decode a request URL's query and show the permission it requires.
    Inspect {
        /// Full request URL.
        url: String,
    },

    /// Decode a log callback body and show the node log entry it records.
    LogPayload {
        /// JSON file holding the callback body.
        path: PathBuf,
    },

    /// Show the config file location and effective values.
    Config,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        Cli::parse().command.run()
    }

    pub fn run(self) -> Result<()> {
        match self {
            CliCommand::File { target, page } => {
                run_build_from_path(&load_config()?, Endpoint::File, &target, &page)?
            }
            CliCommand::Metadata { target, page } => {
                run_build_from_path(&load_config()?, Endpoint::Metadata, &target, &page)?
            }
            CliCommand::FileItem { target, page } => {
                run_build_from_item(&load_config()?, Endpoint::File, &target, &page)?
            }
            CliCommand::MetadataItem { target, page } => {
                run_build_from_item(&load_config()?, Endpoint::Metadata, &target, &page)?
            }
            CliCommand::Inspect { url } => run_inspect(&url)?,
            CliCommand::LogPayload { path } => run_log_payload(&path)?,
            CliCommand::Config => run_config(&load_config()?)?,
        }

        Ok(())
    }
}

/// Only commands that build URLs or report config touch the config file.
fn load_config() -> Result<config::WbConfig> {
    let cfg = config::load_or_init()?;
    tracing::debug!("loaded config: {:?}", cfg);
    Ok(cfg)
}

#[cfg(test)]
mod tests;
