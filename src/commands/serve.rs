//! `taskql serve`: runs the HTTP server.
//!
//! Settings are layered: config file, then `TASKQL_*` environment variables,
//! then the flags below.

use crate::libs::config::Config;
use crate::server::{init_tracing, start_web_server};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Interface to bind
    #[arg(long)]
    host: Option<String>,

    /// TCP port to listen on
    #[arg(short, long)]
    port: Option<u16>,

    /// SQLite database file
    #[arg(long)]
    db: Option<PathBuf>,
}

impl ServeArgs {
    fn apply(self, mut config: Config) -> Config {
        if let Some(host) = self.host {
            config.server.host = host;
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(db) = self.db {
            config.database.path = Some(db);
        }
        config
    }
}

pub async fn cmd(serve_args: ServeArgs) -> Result<()> {
    let config = serve_args.apply(Config::read()?.apply_env()?);
    init_tracing(&config.log_level);
    start_web_server(&config).await
}
