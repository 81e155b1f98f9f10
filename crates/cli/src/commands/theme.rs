//! Theme preference commands.

use ecofinds_core::Theme;

use crate::commands::CliError;
use crate::context::AppContext;

pub fn get(ctx: &AppContext) {
    println!("{}", ctx.theme.theme());
}

pub fn set(ctx: &mut AppContext, theme: &str) -> Result<(), CliError> {
    let theme: Theme = theme.parse().map_err(CliError::InvalidArgument)?;
    ctx.theme.set(theme)?;
    println!("Theme set to {theme}.");
    Ok(())
}

pub fn toggle(ctx: &mut AppContext) -> Result<(), CliError> {
    let theme = ctx.theme.toggle()?;
    println!("Theme set to {theme}.");
    Ok(())
}
