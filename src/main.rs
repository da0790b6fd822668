//! traceagri binary entry point.

use std::process::ExitCode;

use traceagri::cli::{self, ArgsError};
use traceagri::{commands, logging, AppContext, Config};
use tracing::error;

fn usage_error(err: ArgsError) -> ExitCode {
    eprintln!("error: {}", err);
    eprintln!("Run 'traceagri --help' for usage.");
    ExitCode::from(2)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = match cli::parse_args() {
        Ok(args) => args,
        Err(e) => return usage_error(e),
    };

    if args.help {
        cli::print_help();
        return ExitCode::SUCCESS;
    }
    if args.version {
        cli::print_version();
        return ExitCode::SUCCESS;
    }

    let config = match Config::load(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::from(2);
        }
    };
    logging::try_init_with(config.log_filter()).ok();

    let Some(command) = args.command else {
        return usage_error(ArgsError::MissingArgument("COMMAND"));
    };

    let context = match AppContext::start(&config) {
        Ok(context) => context,
        Err(e) => {
            error!(error = %e, "failed to start");
            eprintln!("error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut stdout = std::io::stdout().lock();
    match commands::execute(&context, command, &mut stdout).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            error!(error = %e, "command failed");
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
