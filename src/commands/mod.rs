//! Command-line interface and orchestration.

mod evaluate;
mod init;
mod validate;

pub use evaluate::{EvaluateArgs, evaluate_device};
pub use init::{InitArgs, init_config};
pub use validate::{ValidateArgs, validate_config};

use clap::{Parser, Subcommand};
use std::ffi::OsString;
use std::io::Write;

/// The environment the CLI runs in: where output goes and how the process exits.
pub trait Host {
    fn output(&mut self) -> impl Write;

    fn error(&mut self) -> impl Write;

    fn exit(&mut self, code: i32);
}

#[derive(Parser, Debug)]
#[command(name = "droid-posture", version, about = "Evaluate the security posture of an Android device")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate a device from its collected signals
    Evaluate(EvaluateArgs),

    /// Write the default policy file
    Init(InitArgs),

    /// Check a policy file for errors
    Validate(ValidateArgs),
}

/// Parse `args` and run the selected command.
///
/// Failures are written to the host's error stream and reported through [`Host::exit`]
/// with code 1. A successful run only calls [`Host::exit`] for a non-zero status.
pub fn run<I, T>(host: &mut impl Host, args: I)
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) => {
            let rendered = e.render().to_string();
            if e.use_stderr() {
                let _ = write!(host.error(), "{rendered}");
            } else {
                let _ = write!(host.output(), "{rendered}");
            }

            let code = e.exit_code();
            if code != 0 {
                host.exit(code);
            }
            return;
        }
    };

    let result = match cli.command {
        Command::Evaluate(args) => evaluate_device(&args, &mut host.output()),
        Command::Init(args) => init_config(&args, &mut host.output()).map(|()| 0),
        Command::Validate(args) => validate_config(&args, &mut host.output()).map(|()| 0),
    };

    match result {
        Ok(0) => {}
        Ok(code) => host.exit(code),
        Err(e) => {
            let _ = writeln!(host.error(), "error: {e:#}");
            host.exit(1);
        }
    }
}

/// Resolve the directory in which `droid-posture.toml` is looked up.
fn working_dir() -> anyhow::Result<camino::Utf8PathBuf> {
    use anyhow::Context;

    let dir = std::env::current_dir().context("determining the current directory")?;
    camino::Utf8PathBuf::try_from(dir).context("the current directory is not valid UTF-8")
}
