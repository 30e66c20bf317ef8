//! `help` and `version` output.

use crate::config::{HOME_OVERRIDE_ENV, Settings};
use crate::invocation::Operation;
use std::fmt::Write as _;
use std::io::{self, Write};

/// Print the version line.
pub fn cmd_version<W: Write>(settings: &Settings, out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", settings.version_line())
}

/// Print usage text.
pub fn cmd_help<W: Write>(settings: &Settings, out: &mut W) -> io::Result<()> {
    write!(out, "{}", usage_text(settings))
}

pub fn usage_text(settings: &Settings) -> String {
    let name = &settings.program_name;
    let mut commands = String::new();
    for operation in Operation::ALL {
        let _ = writeln!(
            commands,
            "  {:<19}{}",
            format!("{} [path]", operation.mode()),
            operation.summary()
        );
    }
    let _ = writeln!(commands, "  {:<19}{}", "version", "Show version");
    let _ = writeln!(commands, "  {:<19}{}", "help", "Show this help");

    format!(
        "\
{version}
Modular documentation automation system

Usage:
  {name} <command> [path]

Commands:
{commands}
Examples:
  {name} install .
  {name} update /path/to/project
  {name} audit .

Alternative (bash):
  ./install.sh /path/to/project install

Environment:
  {home_env}   Directory holding the installer scripts

Documentation: https://github.com/Pixasso/ai-docs-system
",
        version = settings.version_line(),
        name = name,
        commands = commands,
        home_env = HOME_OVERRIDE_ENV,
    )
}
