//! Pre-filtering of raw arguments so unknown flags are ignored.
//!
//! clap rejects unknown arguments outright. The CLI instead drops anything it
//! does not recognise, together with stray positional values, and parses the
//! rest. Recognition is driven by the clap definition itself, so new flags
//! need no change here.

use std::ffi::OsString;

use clap::{Arg, Command, CommandFactory};

use crate::Cli;

/// Split raw `argv` into the arguments clap should see and those ignored.
///
/// The program name is always kept. A recognised flag that takes a value
/// keeps the following argument too, unless the value is attached
/// (`--vertices=5`, `-N5`). A value flag with nothing usable after it is
/// ignored, so its default applies.
pub fn retain_known<I>(argv: I) -> (Vec<OsString>, Vec<OsString>)
where
    I: IntoIterator<Item = OsString>,
{
    let mut cmd = Cli::command();
    cmd.build();

    let mut argv = argv.into_iter().peekable();
    let mut kept: Vec<OsString> = argv.next().into_iter().collect();
    let mut ignored = Vec::new();

    while let Some(raw) = argv.next() {
        let Some(text) = raw.to_str() else {
            ignored.push(raw);
            continue;
        };
        match lookup(&cmd, text) {
            Some(Flag { expects_value: true }) => {
                // A flag whose value is missing falls back to its default.
                let value_follows = argv
                    .peek()
                    .and_then(|next| next.to_str())
                    .is_some_and(|next| lookup(&cmd, next).is_none());
                if value_follows {
                    kept.push(raw);
                    kept.extend(argv.next());
                } else {
                    ignored.push(raw);
                }
            }
            Some(Flag {
                expects_value: false,
            }) => kept.push(raw),
            None => ignored.push(raw),
        }
    }

    (kept, ignored)
}

struct Flag {
    /// The value is in the next argument rather than attached.
    expects_value: bool,
}

fn lookup(cmd: &Command, text: &str) -> Option<Flag> {
    if let Some(long) = text.strip_prefix("--") {
        let (name, attached) = match long.split_once('=') {
            Some((name, _)) => (name, true),
            None => (long, false),
        };
        let arg = cmd.get_arguments().find(|a| a.get_long() == Some(name))?;
        return Some(Flag {
            expects_value: takes_value(arg) && !attached,
        });
    }

    let mut shorts = text.strip_prefix('-')?.chars();
    let short = shorts.next()?;
    let arg = cmd.get_arguments().find(|a| a.get_short() == Some(short))?;
    let attached = shorts.next().is_some();
    Some(Flag {
        expects_value: takes_value(arg) && !attached,
    })
}

fn takes_value(arg: &Arg) -> bool {
    arg.get_action().takes_values()
}
