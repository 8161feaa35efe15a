//! Diagnostics for `template-namer`.
//!
//! Progress lines go to stdout through [`crate::output::OutputManager`];
//! tracing events go to stderr so the two never interleave in a pipe.
//!
//! The adapters log every listed entry and every planned write, so they
//! trail the rest of the tool by one level:
//!
//! | Flag(s)   | `template_namer`, `namer_core` | `namer_adapters` |
//! |-----------|--------------------------------|------------------|
//! | (none)    | WARN                           | WARN             |
//! | `-v`      | INFO                           | WARN             |
//! | `-vv`     | DEBUG                          | INFO             |
//! | `-vvv`    | TRACE                          | TRACE            |
//! | `--quiet` | ERROR                          | ERROR            |
//!
//! `RUST_LOG` replaces the table entirely.

use std::io::IsTerminal as _;

use tracing_subscriber::{
    EnvFilter, filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::cli::GlobalArgs;

/// Install the stderr subscriber. Call once, before the first event.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let (tool, adapters) = levels(args);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "template_namer={tool},namer_core={tool},namer_adapters={adapters}"
        ))
    });

    // No timestamps. Targets only at trace, where adapter events mix in.
    let fmt_layer = tracing_subscriber::fmt::layer()
        .without_time()
        .with_target(tool == LevelFilter::TRACE)
        .with_ansi(!args.no_color && std::io::stderr().is_terminal())
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))
}

/// Levels for the tool crates and for the adapters crate.
fn levels(args: &GlobalArgs) -> (LevelFilter, LevelFilter) {
    if args.quiet {
        return (LevelFilter::ERROR, LevelFilter::ERROR);
    }
    match args.verbose {
        0 => (LevelFilter::WARN, LevelFilter::WARN),
        1 => (LevelFilter::INFO, LevelFilter::WARN),
        2 => (LevelFilter::DEBUG, LevelFilter::INFO),
        _ => (LevelFilter::TRACE, LevelFilter::TRACE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(verbose: u8, quiet: bool) -> GlobalArgs {
        GlobalArgs {
            verbose,
            quiet,
            no_color: true,
            config: None,
        }
    }

    #[test]
    fn adapters_trail_until_trace() {
        assert_eq!(levels(&args(1, false)), (LevelFilter::INFO, LevelFilter::WARN));
        assert_eq!(levels(&args(2, false)), (LevelFilter::DEBUG, LevelFilter::INFO));
        assert_eq!(levels(&args(5, false)), (LevelFilter::TRACE, LevelFilter::TRACE));
    }

    #[test]
    fn quiet_silences_adapter_trace() {
        assert_eq!(levels(&args(3, true)), (LevelFilter::ERROR, LevelFilter::ERROR));
    }
}
