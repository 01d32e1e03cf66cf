// SPDX-License-Identifier: MPL-2.0
use video_translate::app::{self, logging, paths, Flags};

const HELP: &str = "\
VideoTranslate

USAGE:
  video_translate [OPTIONS] [VIDEO]

OPTIONS:
  -h, --help              Print this help and exit
  --lang <LOCALE>         Interface language (e.g. en-US, fr)
  --config-dir <DIR>      Directory holding settings.toml
  --endpoint <URL>        Upload endpoint; enables uploading

ARGS:
  <VIDEO>                 Video to preselect
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    logging::init();

    let flags = Flags {
        lang: string_option(&mut args, "--lang"),
        config_dir: string_option(&mut args, "--config-dir"),
        endpoint: string_option(&mut args, "--endpoint"),
        file_path: args
            .finish()
            .into_iter()
            .next()
            .and_then(|s| s.into_string().ok()),
    };
    tracing::debug!(?flags, "starting");

    paths::init_cli_overrides(flags.config_dir.clone());
    app::run(flags)
}

/// Reads `--key value`; a malformed value is logged and ignored.
fn string_option(args: &mut pico_args::Arguments, key: &'static str) -> Option<String> {
    match args.opt_value_from_str(key) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(%err, key, "ignoring command line option");
            None
        }
    }
}
