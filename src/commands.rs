//! Command execution for the `traceagri` binary.
//!
//! Each command drives the stores in an [`AppContext`] and renders its
//! result with strings from the active locale.

use std::io::Write;

use tracing::debug;

use crate::app::AppContext;
use crate::cli::Command;
use crate::locale::Locale;
use crate::session::Identity;
use crate::Result;

/// Message shown when a sign-in attempt is rejected.
const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// Run `command` against `context`, writing human-readable output to `out`.
///
/// Returns `Ok(false)` when the command was understood but could not be
/// carried out, such as a rejected sign-in or a profile edit while signed
/// out.
pub async fn execute<W: Write>(context: &AppContext, command: Command, out: &mut W) -> Result<bool> {
    debug!(command = command.name(), "executing command");

    match command {
        Command::Login { email, password } => {
            if context.session().authenticate(&email, &password).await? {
                if let Some(identity) = context.session().current_identity() {
                    writeln!(out, "{}, {}", context.t("dashboard.welcome"), identity.name)?;
                }
                Ok(true)
            } else {
                writeln!(out, "{INVALID_CREDENTIALS}")?;
                Ok(false)
            }
        }
        Command::Logout => {
            context.session().deauthenticate()?;
            write_sign_in(context, out)?;
            Ok(true)
        }
        Command::Whoami => match context.session().current_identity() {
            Some(identity) => {
                write_profile(context, &identity, out)?;
                Ok(true)
            }
            None => {
                write_sign_in(context, out)?;
                Ok(false)
            }
        },
        Command::Update(update) => {
            if !context.session().update_identity(update)? {
                write_sign_in(context, out)?;
                return Ok(false);
            }
            if let Some(identity) = context.session().current_identity() {
                write_profile(context, &identity, out)?;
            }
            Ok(true)
        }
        Command::Translate(keys) => {
            for key in &keys {
                if !context.locale().catalog().contains(key) {
                    debug!(key = %key, "no translation for key");
                }
                writeln!(out, "{}", context.t(key))?;
            }
            Ok(true)
        }
        Command::Keys => {
            let locale = context.locale();
            for key in locale.catalog().keys() {
                writeln!(
                    out,
                    "{}\t{}\t{}",
                    key,
                    locale.translate_in(Locale::En, key),
                    locale.translate_in(Locale::Hi, key)
                )?;
            }
            Ok(true)
        }
    }
}

fn write_profile<W: Write>(context: &AppContext, identity: &Identity, out: &mut W) -> Result<()> {
    writeln!(out, "{}", context.t("profile.title"))?;
    let rows = [
        ("profile.name", identity.name.clone()),
        ("auth.email", identity.email.clone()),
        ("auth.farmer.id", identity.farmer_id.clone()),
        ("profile.phone", identity.phone.clone()),
        ("profile.location", identity.location.clone()),
        ("profile.experience", identity.experience.to_string()),
        ("profile.specialization", identity.specialization.clone()),
    ];
    for (key, value) in rows {
        writeln!(out, "  {}: {}", context.t(key), value)?;
    }
    Ok(())
}

fn write_sign_in<W: Write>(context: &AppContext, out: &mut W) -> Result<()> {
    writeln!(out, "{}", context.t("auth.welcome"))?;
    writeln!(out, "{}", context.t("auth.subtitle"))?;
    Ok(())
}
