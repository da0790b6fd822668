//! Command-line interface for traceagri.
//!
//! Uses lexopt for minimal binary size overhead.

use std::ffi::OsString;
use std::path::PathBuf;

use crate::locale::Locale;
use crate::session::IdentityUpdate;

/// Command-line arguments.
#[derive(Debug, Clone, Default)]
pub struct Args {
    /// Path to configuration file.
    pub config: Option<PathBuf>,
    /// Directory holding the session record.
    pub data_dir: Option<PathBuf>,
    /// Display language.
    pub locale: Option<Locale>,
    /// Log level (error, warn, info, debug, trace).
    pub log_level: Option<String>,
    /// Show version and exit.
    pub version: bool,
    /// Show help and exit.
    pub help: bool,
    /// Command to run.
    pub command: Option<Command>,
}

/// Subcommands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Sign in with email and password.
    Login { email: String, password: String },
    /// Sign out.
    Logout,
    /// Show the signed-in profile.
    Whoami,
    /// Edit profile fields.
    Update(IdentityUpdate),
    /// Translate keys in the active locale.
    Translate(Vec<String>),
    /// List every translation key.
    Keys,
}

impl Command {
    /// Subcommand name as typed on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Login { .. } => "login",
            Command::Logout => "logout",
            Command::Whoami => "whoami",
            Command::Update(_) => "update",
            Command::Translate(_) => "translate",
            Command::Keys => "keys",
        }
    }
}

/// Parse command-line arguments.
pub fn parse_args() -> Result<Args, ArgsError> {
    parse_args_from(std::env::args_os())
}

/// Parse arguments from an iterator (for testing).
///
/// Global options are accepted before and after the subcommand.
pub fn parse_args_from<I>(args: I) -> Result<Args, ArgsError>
where
    I: IntoIterator<Item = OsString>,
{
    use lexopt::prelude::*;

    let mut result = Args::default();
    let mut parser = lexopt::Parser::from_iter(args);

    while let Some(arg) = parser.next()? {
        if let Some(opt) = global_option(&arg) {
            apply_global(opt, &mut parser, &mut result)?;
            continue;
        }
        match arg {
            Value(val) if result.command.is_none() => {
                let name = val.string()?;
                let command = parse_command(&name, &mut parser, &mut result)?;
                result.command = Some(command);
            }
            Value(val) => {
                return Err(ArgsError::UnexpectedArgument(val.to_string_lossy().into()));
            }
            _ => return Err(arg.unexpected().into()),
        }
    }

    Ok(result)
}

/// Options that apply to the whole invocation.
#[derive(Debug, Clone, Copy)]
enum GlobalOption {
    Help,
    Version,
    Config,
    DataDir,
    Locale,
    LogLevel,
}

fn global_option(arg: &lexopt::Arg<'_>) -> Option<GlobalOption> {
    use lexopt::prelude::*;

    match arg {
        Short('h') | Long("help") => Some(GlobalOption::Help),
        Short('V') | Long("version") => Some(GlobalOption::Version),
        Short('c') | Long("config") => Some(GlobalOption::Config),
        Short('d') | Long("data-dir") => Some(GlobalOption::DataDir),
        Short('L') | Long("locale") => Some(GlobalOption::Locale),
        Short('l') | Long("log-level") => Some(GlobalOption::LogLevel),
        _ => None,
    }
}

fn apply_global(
    opt: GlobalOption,
    parser: &mut lexopt::Parser,
    result: &mut Args,
) -> Result<(), ArgsError> {
    use lexopt::prelude::*;

    match opt {
        GlobalOption::Help => result.help = true,
        GlobalOption::Version => result.version = true,
        GlobalOption::Config => result.config = Some(parser.value()?.parse()?),
        GlobalOption::DataDir => result.data_dir = Some(parser.value()?.parse()?),
        GlobalOption::Locale => {
            let value: String = parser.value()?.parse()?;
            result.locale = Some(
                value
                    .parse()
                    .map_err(|_| ArgsError::InvalidValue("locale", value))?,
            );
        }
        GlobalOption::LogLevel => result.log_level = Some(parser.value()?.parse()?),
    }
    Ok(())
}

fn parse_command(
    name: &str,
    parser: &mut lexopt::Parser,
    result: &mut Args,
) -> Result<Command, ArgsError> {
    match name {
        "login" => {
            let email = positional(parser, result, "EMAIL")?;
            let password = positional(parser, result, "PASSWORD")?;
            Ok(Command::Login { email, password })
        }
        "logout" => Ok(Command::Logout),
        "whoami" => Ok(Command::Whoami),
        "update" => parse_update(parser, result).map(Command::Update),
        "translate" => {
            let keys = remaining_values(parser, result)?;
            if keys.is_empty() {
                return Err(ArgsError::MissingArgument("KEY"));
            }
            Ok(Command::Translate(keys))
        }
        "keys" => Ok(Command::Keys),
        other => Err(ArgsError::UnknownCommand(other.to_string())),
    }
}

fn positional(
    parser: &mut lexopt::Parser,
    result: &mut Args,
    name: &'static str,
) -> Result<String, ArgsError> {
    use lexopt::prelude::*;

    while let Some(arg) = parser.next()? {
        if let Some(opt) = global_option(&arg) {
            apply_global(opt, parser, result)?;
            continue;
        }
        return match arg {
            Value(val) => Ok(val.string()?),
            _ => Err(arg.unexpected().into()),
        };
    }
    Err(ArgsError::MissingArgument(name))
}

fn remaining_values(
    parser: &mut lexopt::Parser,
    result: &mut Args,
) -> Result<Vec<String>, ArgsError> {
    use lexopt::prelude::*;

    let mut values = Vec::new();
    while let Some(arg) = parser.next()? {
        if let Some(opt) = global_option(&arg) {
            apply_global(opt, parser, result)?;
            continue;
        }
        match arg {
            Value(val) => values.push(val.string()?),
            _ => return Err(arg.unexpected().into()),
        }
    }
    Ok(values)
}

fn parse_update(
    parser: &mut lexopt::Parser,
    result: &mut Args,
) -> Result<IdentityUpdate, ArgsError> {
    use lexopt::prelude::*;

    let mut update = IdentityUpdate::new();
    while let Some(arg) = parser.next()? {
        if let Some(opt) = global_option(&arg) {
            apply_global(opt, parser, result)?;
            continue;
        }
        match arg {
            Long("name") => update.name = Some(parser.value()?.parse()?),
            Long("email") => update.email = Some(parser.value()?.parse()?),
            Long("phone") => update.phone = Some(parser.value()?.parse()?),
            Long("location") => update.location = Some(parser.value()?.parse()?),
            Long("experience") => {
                let value: String = parser.value()?.parse()?;
                update.experience = Some(
                    value
                        .parse()
                        .map_err(|_| ArgsError::InvalidValue("experience", value))?,
                );
            }
            Long("specialization") => {
                update.specialization = Some(parser.value()?.parse()?);
            }
            Long("avatar") => update.avatar = Some(parser.value()?.parse()?),
            _ => return Err(arg.unexpected().into()),
        }
    }

    if update.is_empty() {
        return Err(ArgsError::MissingArgument("--<FIELD> <VALUE>"));
    }
    Ok(update)
}

/// Print help message.
pub fn print_help() {
    let version = env!("CARGO_PKG_VERSION");
    println!(
        r#"traceagri {version}
Farmer session and localization state

USAGE:
    traceagri [OPTIONS] <COMMAND> [OPTIONS]

COMMANDS:
    login <EMAIL> <PASSWORD>   Sign in and persist the session
    logout                     Sign out and erase the session
    whoami                     Show the signed-in profile
    update [FIELDS]            Edit profile fields:
                                 --name, --email, --phone, --location,
                                 --experience <YEARS>, --specialization,
                                 --avatar <URI>
    translate <KEY>...         Print display strings for keys
    keys                       List every translation key

OPTIONS:
    -c, --config <FILE>     Path to configuration file (JSON)
    -d, --data-dir <DIR>    Directory holding the session record
    -L, --locale <TAG>      Display language (en, hi) [default: en]
    -l, --log-level <LVL>   Log level (error, warn, info, debug, trace)
    -h, --help              Print help
    -V, --version           Print version

ENVIRONMENT VARIABLES:
    TRACEAGRI_DATA_DIR      Session directory (overrides config)
    TRACEAGRI_LOCALE        Display language (overrides config)
    TRACEAGRI_LOG_LEVEL     Log level (overrides config)
    RUST_LOG                Alternative log level setting

EXAMPLES:
    traceagri login ram@example.com secret
    traceagri -L hi whoami
    traceagri update --phone "+91 9000000000" --experience 16
    traceagri -L hi translate nav.dashboard nav.profile
    traceagri update --phone 2 -L hi
"#
    );
}

/// Print version.
pub fn print_version() {
    println!("traceagri {}", env!("CARGO_PKG_VERSION"));
}

/// Argument parsing errors.
#[derive(Debug)]
pub enum ArgsError {
    /// Lexopt parsing error.
    Lexopt(lexopt::Error),
    /// Invalid argument value.
    InvalidValue(&'static str, String),
    /// Unexpected positional argument.
    UnexpectedArgument(String),
    /// Unknown subcommand.
    UnknownCommand(String),
    /// Required argument not given.
    MissingArgument(&'static str),
}

impl std::fmt::Display for ArgsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lexopt(e) => write!(f, "{}", e),
            Self::InvalidValue(name, value) => {
                write!(f, "invalid value for --{}: '{}'", name, value)
            }
            Self::UnexpectedArgument(arg) => {
                write!(f, "unexpected argument: '{}'", arg)
            }
            Self::UnknownCommand(name) => write!(f, "unknown command: '{}'", name),
            Self::MissingArgument(name) => write!(f, "missing argument: {}", name),
        }
    }
}

impl std::error::Error for ArgsError {}

impl From<lexopt::Error> for ArgsError {
    fn from(e: lexopt::Error) -> Self {
        Self::Lexopt(e)
    }
}
