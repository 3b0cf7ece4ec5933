// SPDX-License-Identifier: MPL-2.0
use std::path::PathBuf;
use std::process::ExitCode;
use yadadri360::app::{self, paths, Flags};
use yadadri360::content::SiteContent;
use yadadri360::error::Error;
use yadadri360::ui::theming::ThemeMode;

const HELP: &str = "\
Yadadri 360\u{b0}

USAGE:
  yadadri360 [OPTIONS]

OPTIONS:
  --config-dir <DIR>     Directory holding settings.toml
  --theme <MODE>         light, dark or system (overrides settings.toml)
  --diagnostics <FILE>   Write a JSON diagnostics report on exit
  -h, --help             Print this help
";

fn main() -> ExitCode {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return ExitCode::SUCCESS;
    }

    let config_dir: Option<String> = match args.opt_value_from_str("--config-dir") {
        Ok(value) => value,
        Err(err) => return usage_error(&err.to_string()),
    };
    let theme: Option<ThemeMode> = match args.opt_value_from_str("--theme") {
        Ok(value) => value,
        Err(err) => return usage_error(&err.to_string()),
    };
    let diagnostics_path: Option<PathBuf> = match args.opt_value_from_str("--diagnostics") {
        Ok(value) => value,
        Err(err) => return usage_error(&err.to_string()),
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        return usage_error(&format!("unexpected arguments: {remaining:?}"));
    }

    paths::init_cli_overrides(config_dir);

    let content = match SiteContent::load() {
        Ok(content) => content,
        Err(err) => {
            eprintln!("{}", Error::from(err));
            return ExitCode::FAILURE;
        }
    };

    let flags = Flags {
        content,
        theme,
        diagnostics_path,
    };

    match app::run(flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Window error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn usage_error(message: &str) -> ExitCode {
    eprintln!("{message}\n\n{HELP}");
    ExitCode::from(2)
}
