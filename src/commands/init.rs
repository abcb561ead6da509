//! Configuration initialization command.
//!
//! Writes the effective configuration (defaults merged with any existing
//! file) to the data directory so it can be edited by hand.

use crate::{
    libs::{config::Config, messages::Message},
    msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Remove existing configuration instead of creating new one
    #[arg(short, long)]
    delete: bool,
}

pub fn cmd(init_args: InitArgs) -> Result<()> {
    if init_args.delete {
        match Config::delete()? {
            Some(path) => msg_success!(Message::ConfigDeleted(path.display().to_string())),
            None => msg_success!(Message::ConfigNotFound(Config::path()?.display().to_string())),
        }
        return Ok(());
    }

    let path = Config::read()?.save()?;
    msg_success!(Message::ConfigSaved(path.display().to_string()));
    Ok(())
}
