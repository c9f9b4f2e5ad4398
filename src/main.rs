use clap::Parser;
use filename_sort::cli::{execute, Cli};
use filename_sort::utils::{Output, OutputFormat};
use std::io::IsTerminal;
use tracing::error;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(true)
                .with_filter(
                    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
                ),
        )
        .init();

    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Plain { color: !cli.no_color && std::io::stdout().is_terminal() }
    };

    let output = match execute(&cli.cmd, std::io::stdin().lock()) {
        Ok(output) => output,
        Err(e) => {
            error!("{}", e);
            std::process::exit(2);
        }
    };

    match output.render(format) {
        Ok(text) => {
            if !text.is_empty() {
                println!("{}", text);
            }
        }
        Err(e) => {
            error!("{}", e);
            std::process::exit(2);
        }
    }

    if let Output::Flag(false) = output {
        std::process::exit(1);
    }
}
