//! Usage and listing output.

use std::io::{self, Write};

use crate::context::AppContext;

/// Version string printed by `--version` and the usage banner.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

const NAME_WIDTH: usize = 14;

/// Print the full usage text: options, built-ins, plugins, aliases and the
/// config file in use.
pub fn write_usage<W: Write>(out: &mut W, ctx: &AppContext) -> io::Result<()> {
    let plugins = ctx.registry().list();

    writeln!(out, "dev v{} - lightweight CLI dispatcher", VERSION)?;
    writeln!(out)?;
    writeln!(out, "usage: dev [-V|-q] <command> [args...]")?;
    writeln!(out)?;
    writeln!(out, "options:")?;
    writeln!(out, "  -h, --help       Show this help message")?;
    writeln!(out, "  -v, --version    Show version information")?;
    writeln!(out, "  -V, --verbose    Print diagnostic output")?;
    writeln!(out, "  -q, --quiet      Print terse output")?;
    writeln!(out)?;
    writeln!(out, "built-in commands:")?;
    writeln!(out, "  list             List available plugin commands")?;
    writeln!(out, "  help <cmd>       Show help for a plugin command")?;
    writeln!(out)?;

    if plugins.is_empty() {
        writeln!(out, "plugins: (none)")?;
    } else {
        writeln!(out, "plugins:")?;
        write_plugins(out, ctx, &plugins)?;
    }

    if !ctx.aliases.is_empty() {
        writeln!(out)?;
        writeln!(out, "aliases:")?;
        write_aliases(out, ctx)?;
    }

    if !ctx.config.path().as_os_str().is_empty() {
        writeln!(out)?;
        writeln!(out, "config: {}", ctx.config.path().display())?;
    }
    Ok(())
}

/// Print the `list` built-in output.
///
/// In terse mode only plugin names are printed, one per line.
pub fn write_list<W: Write>(out: &mut W, ctx: &AppContext, terse: bool) -> io::Result<()> {
    let plugins = ctx.registry().list();

    if terse {
        for name in &plugins {
            writeln!(out, "{}", name)?;
        }
        return Ok(());
    }

    if plugins.is_empty() {
        writeln!(out, "No plugins found.")?;
        writeln!(out)?;
        writeln!(out, "Place executable files in the plugins/ directory.")?;
    } else {
        writeln!(out, "Available commands:")?;
        writeln!(out)?;
        write_plugins(out, ctx, &plugins)?;
    }

    if !ctx.aliases.is_empty() {
        writeln!(out)?;
        writeln!(out, "Aliases:")?;
        writeln!(out)?;
        write_aliases(out, ctx)?;
    }
    Ok(())
}

fn write_plugins<W: Write>(out: &mut W, ctx: &AppContext, plugins: &[String]) -> io::Result<()> {
    for name in plugins {
        match ctx.metadata.description(name) {
            Some(desc) => writeln!(out, "  {:<width$} {}", name, desc, width = NAME_WIDTH)?,
            None => writeln!(out, "  {}", name)?,
        }
    }
    Ok(())
}

fn write_aliases<W: Write>(out: &mut W, ctx: &AppContext) -> io::Result<()> {
    for (alias, target) in ctx.aliases.iter() {
        writeln!(out, "  {:<width$} → {}", alias, target, width = NAME_WIDTH)?;
    }
    Ok(())
}
