// SPDX-License-Identifier: MPL-2.0
use outcome_showcase::app::{self, config, logging, paths, Bootstrap, Flags};
use std::process::ExitCode;

const HELP: &str = "\
Outcome Showcase

USAGE:
  outcome_showcase [OPTIONS]

OPTIONS:
  --lang <LOCALE>       Interface language (e.g. en-US, fr)
  --content <FILE>      Content document to show instead of the bundled one
  --config-dir <DIR>    Directory holding settings.toml
  -h, --help            Print this help
";

fn main() -> ExitCode {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return ExitCode::SUCCESS;
    }

    logging::init();

    let flags = match parse_flags(&mut args) {
        Ok(flags) => flags,
        Err(err) => {
            tracing::error!(error = %err, "invalid command line");
            eprint!("{HELP}");
            return ExitCode::FAILURE;
        }
    };
    let unused = args.finish();
    if !unused.is_empty() {
        tracing::warn!(?unused, "ignoring unrecognized arguments");
    }

    paths::init_cli_override(flags.config_dir.clone());
    let (config, config_warning) = config::load();

    let source = app::content_source(&flags, &config);
    let showcase = match app::load_showcase(source.as_ref(), &config) {
        Ok(showcase) => showcase,
        Err(err) => {
            tracing::error!(error = %err, source = %source.describe(), "cannot start showcase");
            return ExitCode::FAILURE;
        }
    };

    let bootstrap = Bootstrap {
        flags,
        config,
        config_warning,
        showcase,
    };

    match app::run(bootstrap) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "window terminated with an error");
            ExitCode::FAILURE
        }
    }
}

fn parse_flags(args: &mut pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    Ok(Flags {
        lang: args.opt_value_from_str("--lang")?,
        content: args.opt_value_from_str("--content")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    })
}
