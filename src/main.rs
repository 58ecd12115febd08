// SPDX-License-Identifier: MPL-2.0
use iced_labeler::app::{self, Flags};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
Iced Labeler

USAGE:
  iced_labeler [OPTIONS]

OPTIONS:
  -h, --help               Print this help
      --config-dir <DIR>   Read settings.toml from DIR
                           (overrides ICED_LABELER_CONFIG_DIR)
      --no-splash          Skip the startup splash screen
";

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("iced_labeler=info")),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let config_dir = match args.opt_value_from_str("--config-dir") {
        Ok(dir) => dir,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    let flags = Flags {
        config_dir,
        no_splash: args.contains("--no-splash"),
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unknown arguments");
    }

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting");
    app::run(flags)
}
