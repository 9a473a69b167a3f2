mod handlers;
pub mod parse;

use clap::Parser;
pub use parse::Cli;
use tracing_subscriber::EnvFilter;

use crate::core::error::GraphError;

/// Log to stderr so the chart on stdout stays clean.  `RUST_LOG` picks the
/// filter (default `warn`); `--debug` forces `debug`.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

pub fn run() -> Result<(), GraphError> {
    let cli = parse::Cli::parse();
    match cli.cmd {
        parse::Command::Csv(a) => {
            init_tracing(a.plot.debug);
            handlers::csv(a)
        }
        parse::Command::Func(a) => {
            init_tracing(a.plot.debug);
            handlers::func(&a)
        }
        parse::Command::Colors => {
            handlers::colors();
            Ok(())
        }
        parse::Command::Examples => {
            handlers::examples();
            Ok(())
        }
    }
}
