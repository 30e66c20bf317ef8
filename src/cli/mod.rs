//! CLI argument parsing for ai-docs-system.
//!
//! Uses clap derive macros for declarative argument definitions. Only the
//! first word is a command; clap classifies that word alone, so whatever
//! follows it (a target path that looks like a flag, `--`, stray extra
//! words) never turns a valid command into a parse error. The second word,
//! if any, is the target path and everything after it is ignored.
//!
//! Clap's own help and version handling is switched off: the fixed vocabulary
//! (`help`/`--help`/`-h`, `version`/`--version`/`-v`) is routed by the
//! dispatcher like any other command, and nothing in here ever exits the
//! process. Implementations live in the `commands` module.

use crate::invocation::{Invocation, Operation};
use clap::{ArgAction, Parser, Subcommand};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Name clap sees as argv[0].
pub const BIN_NAME: &str = "ai-docs-system";

/// AI Docs System: installs, updates, removes, and audits the documentation
/// system inside a project by delegating to the platform installer script.
#[derive(Parser, Debug)]
#[command(name = BIN_NAME)]
#[command(disable_help_flag = true, disable_version_flag = true)]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    /// Print usage text.
    #[arg(short = 'h', long = "help", action = ArgAction::SetTrue)]
    pub help: bool,

    /// Print the version string.
    #[arg(short = 'v', long = "version", action = ArgAction::SetTrue)]
    pub version: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Install the documentation system into a project.
    Install,

    /// Update an existing installation.
    Update,

    /// Remove the documentation system from a project.
    Uninstall,

    /// Check documentation health.
    Audit,

    /// Print the version string.
    Version,

    /// Print usage text.
    Help,

    /// Anything else; reported as an unknown command.
    #[command(external_subcommand)]
    External(Vec<OsString>),
}

/// Parse the raw argument list (program name excluded) into an invocation.
///
/// `cwd` is the working directory at invocation time; it becomes the target
/// path when none is given and anchors relative target paths. Path existence
/// is not checked. Parsing never fails: a first word outside the vocabulary
/// is returned as `Invocation::Unknown`.
pub fn parse_arguments<I, T>(argv: I, cwd: &Path) -> Invocation
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut words = argv.into_iter().map(Into::into);
    let Some(command_word) = words.next() else {
        return Invocation::Help;
    };
    let target_word = words.next();

    match classify(&command_word) {
        Classified::Operation(operation) => Invocation::Run {
            operation,
            target_path: resolve_target(target_word.map(PathBuf::from), cwd),
        },
        Classified::Version => Invocation::Version,
        Classified::Help => Invocation::Help,
        Classified::Unknown => Invocation::Unknown(command_word.to_string_lossy().into_owned()),
    }
}

enum Classified {
    Operation(Operation),
    Version,
    Help,
    Unknown,
}

/// Let clap recognize a single command word.
fn classify(word: &OsString) -> Classified {
    let Ok(cli) = Cli::try_parse_from([OsString::from(BIN_NAME), word.clone()]) else {
        return Classified::Unknown;
    };

    // Bundled shorts such as `-hv` are not part of the vocabulary.
    let exact = |spellings: [&str; 2]| spellings.iter().any(|s| word == s);
    if cli.help {
        return if exact(["-h", "--help"]) { Classified::Help } else { Classified::Unknown };
    }
    if cli.version {
        return if exact(["-v", "--version"]) { Classified::Version } else { Classified::Unknown };
    }

    match cli.command {
        Some(Command::Install) => Classified::Operation(Operation::Install),
        Some(Command::Update) => Classified::Operation(Operation::Update),
        Some(Command::Uninstall) => Classified::Operation(Operation::Uninstall),
        Some(Command::Audit) => Classified::Operation(Operation::Audit),
        Some(Command::Version) => Classified::Version,
        Some(Command::Help) => Classified::Help,
        // A lone `--` parses as "no command" but is not one.
        Some(Command::External(_)) | None => Classified::Unknown,
    }
}

/// Resolve the target directory against the invocation's working directory.
///
/// The collaborator runs inside the installation directory, so relative
/// paths are anchored here. `.` components are dropped; nothing else is
/// normalized and symlinks are left alone. An empty word means "no path".
fn resolve_target(path: Option<PathBuf>, cwd: &Path) -> PathBuf {
    match path {
        Some(path) if path.as_os_str().is_empty() => cwd.to_path_buf(),
        Some(path) if path.is_absolute() => path,
        Some(path) => cwd.join(path).components().collect(),
        None => cwd.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn cwd() -> PathBuf {
        if cfg!(windows) {
            PathBuf::from(r"C:\Users\u\app")
        } else {
            PathBuf::from("/home/u/app")
        }
    }

    fn parse(args: &[&str]) -> Invocation {
        parse_arguments(args.iter().copied(), &cwd())
    }

    #[test]
    fn cli_debug_assert() {
        // Verifies the CLI arguments configuration is valid
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_operations_with_explicit_path() {
        let target = if cfg!(windows) { r"C:\tmp\proj" } else { "/tmp/proj" };
        for op in Operation::ALL {
            let invocation = parse(&[op.mode(), target]);
            assert_eq!(
                invocation,
                Invocation::Run {
                    operation: op,
                    target_path: PathBuf::from(target),
                }
            );
            assert_eq!(invocation.mode(), Some(op.mode()));
        }
    }

    #[test]
    fn parse_audit_defaults_to_cwd() {
        assert_eq!(
            parse(&["audit"]),
            Invocation::Run {
                operation: Operation::Audit,
                target_path: cwd(),
            }
        );
    }

    #[test]
    fn parse_relative_path_is_anchored_at_cwd() {
        let Invocation::Run { target_path, .. } = parse(&["install", "sub/dir"]) else {
            panic!("Expected Run invocation");
        };
        assert_eq!(target_path, cwd().join("sub").join("dir"));
    }

    #[test]
    fn parse_dot_is_cwd() {
        let Invocation::Run { target_path, .. } = parse(&["update", "."]) else {
            panic!("Expected Run invocation");
        };
        assert_eq!(target_path, cwd());
    }

    #[test]
    fn parse_ignores_extra_tokens() {
        let target = if cfg!(windows) { r"C:\tmp\proj" } else { "/tmp/proj" };
        assert_eq!(
            parse(&["uninstall", target, "install", "more"]),
            Invocation::Run {
                operation: Operation::Uninstall,
                target_path: PathBuf::from(target),
            }
        );
    }

    #[test]
    fn parse_version_spellings() {
        for args in [&["version"][..], &["--version"], &["-v"]] {
            assert_eq!(parse(args), Invocation::Version, "{args:?}");
        }
    }

    #[test]
    fn parse_help_spellings() {
        for args in [&["help"][..], &["--help"], &["-h"], &[]] {
            assert_eq!(parse(args), Invocation::Help, "{args:?}");
        }
    }

    #[test]
    fn parse_unknown_command() {
        assert_eq!(
            parse(&["frobnicate"]),
            Invocation::Unknown("frobnicate".to_string())
        );
    }

    #[test]
    fn parse_unknown_flag() {
        assert_eq!(parse(&["--frob"]), Invocation::Unknown("--frob".to_string()));
    }

    #[test]
    fn parse_version_ignores_trailing_words() {
        for args in [&["version", "x"][..], &["-v", "-x"], &["--version", "--x", "y"]] {
            assert_eq!(parse(args), Invocation::Version, "{args:?}");
        }
    }

    #[test]
    fn parse_help_ignores_trailing_words() {
        for args in [&["help", "x"][..], &["--help", "--x"], &["-h", "install"]] {
            assert_eq!(parse(args), Invocation::Help, "{args:?}");
        }
    }

    #[test]
    fn parse_double_dash_is_kept_as_target() {
        let Invocation::Run { target_path, .. } = parse(&["install", "--", "p"]) else {
            panic!("Expected Run invocation");
        };
        assert_eq!(target_path, cwd().join("--"));
    }

    #[test]
    fn parse_hyphenated_target_is_a_path() {
        let Invocation::Run { target_path, .. } = parse(&["audit", "-x"]) else {
            panic!("Expected Run invocation");
        };
        assert_eq!(target_path, cwd().join("-x"));
    }

    #[test]
    fn parse_empty_target_is_cwd() {
        let Invocation::Run { target_path, .. } = parse(&["install", ""]) else {
            panic!("Expected Run invocation");
        };
        assert_eq!(target_path, cwd());
    }

    #[test]
    fn parse_lone_double_dash_and_bundled_flags_are_unknown() {
        assert_eq!(parse(&["--"]), Invocation::Unknown("--".to_string()));
        assert_eq!(parse(&["-hv"]), Invocation::Unknown("-hv".to_string()));
    }

    #[test]
    fn parse_commands_are_case_sensitive() {
        assert_eq!(
            parse(&["INSTALL"]),
            Invocation::Unknown("INSTALL".to_string())
        );
    }
}
