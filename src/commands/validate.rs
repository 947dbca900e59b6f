use crate::commands::working_dir;
use crate::config::{CONFIG_FILE_NAME, Config};
use anyhow::bail;
use camino::Utf8PathBuf;
use clap::Args;
use std::io::Write;

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Policy file [default: droid-posture.toml in the current directory]
    #[arg(long, value_name = "PATH")]
    pub config: Option<Utf8PathBuf>,
}

pub fn validate_config(args: &ValidateArgs, out: &mut impl Write) -> anyhow::Result<()> {
    let dir = working_dir()?;
    let path = args.config.clone().unwrap_or_else(|| dir.join(CONFIG_FILE_NAME));
    if !path.exists() {
        bail!("could not find configuration file '{path}'");
    }

    let config = Config::load(&dir, Some(&path))?;
    for warning in config.warnings() {
        writeln!(out, "warning: {warning}")?;
    }

    writeln!(out, "Configuration file '{path}' is valid")?;
    Ok(())
}
