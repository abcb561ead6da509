use crate::graphql::schema_sdl;
use crate::msg_print;
use anyhow::Result;

pub fn cmd() -> Result<()> {
    msg_print!(schema_sdl());
    Ok(())
}
