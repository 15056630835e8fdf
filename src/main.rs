// SPDX-License-Identifier: MPL-2.0
use iced_banner::app::{self, Flags};
use iced_banner::config::paths;

const HELP: &str = "\
iced_banner - in-app notification banners

USAGE:
  iced_banner [OPTIONS]

OPTIONS:
  --lang <LOCALE>        UI language, e.g. en-US or fr
  --config-dir <DIR>     Directory holding settings.toml
  --auto-hide <SECS>     Auto-hide delay for demo banners (0 disables)
  -h, --help             Print this help
";

fn parse_flags(mut args: pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        auto_hide: args.opt_value_from_str("--auto-hide")?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring unknown arguments");
    }
    Ok(flags)
}

fn main() -> iced::Result {
    // Respects RUST_LOG, defaults to info.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = match parse_flags(args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    paths::init_cli_override(flags.config_dir.clone());
    app::run(flags)
}
