// SPDX-License-Identifier: MPL-2.0
use iced_shrink::app::{self, paths, Flags};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
IcedShrink - drag-and-drop image compressor

USAGE:
  iced_shrink [OPTIONS] [IMAGE]

OPTIONS:
  --lang <LOCALE>       Interface language (e.g. en-US, fr)
  --config-dir <DIR>    Directory holding settings.toml
  --data-dir <DIR>      Directory holding session state
  -h, --help            Print this help
";

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("iced_shrink=info")),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let lang = read_option(&mut args, "--lang");
    let config_dir = read_option(&mut args, "--config-dir");
    let data_dir = read_option(&mut args, "--data-dir");

    if !paths::init_cli_overrides(data_dir, config_dir) {
        tracing::warn!("path overrides were already set; ignoring CLI values");
    }

    let file_path = args
        .finish()
        .into_iter()
        .next()
        .and_then(|s| s.into_string().ok());

    app::run(Flags { lang, file_path })
}

fn read_option(args: &mut pico_args::Arguments, key: &'static str) -> Option<String> {
    match args.opt_value_from_str(key) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!("ignoring {key}: {err}");
            None
        }
    }
}
