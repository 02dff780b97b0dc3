// SPDX-License-Identifier: MPL-2.0
use iced_folio::app::{self, Flags};
use std::path::PathBuf;

const HELP: &str = "\
Responsive image gallery with an animated detail modal

USAGE:
  iced_folio [OPTIONS] [PATH]

ARGS:
  <PATH>                Gallery manifest (.toml) or image directory

OPTIONS:
  --lang <LOCALE>       Interface language (e.g. en-US, fr)
  --config-dir <DIR>    Directory containing settings.toml
  -h, --help            Print this help

ENVIRONMENT:
  ICED_FOLIO_CONFIG_DIR Default for --config-dir
  RUST_LOG              Log filter (default: warn,iced_folio=info)
";

fn main() -> iced::Result {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("warn,iced_folio=info"),
    )
    .init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let lang: Option<String> = args.opt_value_from_str("--lang").unwrap_or_else(|err| {
        log::warn!("Ignoring --lang: {err}");
        None
    });
    let config_dir: Option<String> =
        args.opt_value_from_str("--config-dir").unwrap_or_else(|err| {
            log::warn!("Ignoring --config-dir: {err}");
            None
        });
    let gallery_path = args.finish().into_iter().next().map(PathBuf::from);

    app::run(Flags {
        lang,
        gallery_path,
        config_dir,
    })
}
