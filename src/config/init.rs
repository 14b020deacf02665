use anyhow::{bail, Context, Result};
use atomic_write_file::AtomicWriteFile;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use super::{get_config_path, Config, DEFAULT_DATA_FILE};
use crate::scoring::DEFAULT_TOP_N;

/// Prompt user with a message and return their trimmed input.
fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, message: &str) -> Result<String> {
    write!(output, "{}", message).context("Failed to write prompt")?;
    output.flush().context("Failed to flush stdout")?;
    let mut line = String::new();
    input.read_line(&mut line).context("Failed to read input")?;
    Ok(line.trim().to_string())
}

/// Prompt user with a message and a default value. Returns default if input is empty.
fn prompt_with_default<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
    default: &str,
) -> Result<String> {
    let answer = prompt(input, output, &format!("{} [{}]: ", message, default))?;
    if answer.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(answer)
    }
}

/// Write a config file atomically, creating its parent directory if needed.
pub fn write_config(path: &Path, config: &Config) -> Result<()> {
    let yaml = serde_saphyr::to_string(config)
        .map_err(|e| anyhow::anyhow!("Failed to serialize config: {}", e))?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;
    file.write_all(yaml.as_bytes())
        .with_context(|| format!("Failed to write config to {}", path.display()))?;
    file.commit().context("Failed to save config")?;

    Ok(())
}

/// Ask for the data file and match count, then write the config.
///
/// Weights are written at their defaults; edit the file to change them.
/// An existing file is only replaced with `force`.
pub fn run_init_wizard<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    config_path: &Path,
    force: bool,
) -> Result<()> {
    if config_path.exists() && !force {
        bail!(
            "Config already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    writeln!(output, "Adoptify configuration")?;
    writeln!(output, "======================")?;
    writeln!(output)?;

    let data_file =
        prompt_with_default(input, output, "Path to the shelter data file", DEFAULT_DATA_FILE)?;

    let top_n: usize = loop {
        let answer = prompt_with_default(
            input,
            output,
            "How many matches to show",
            &DEFAULT_TOP_N.to_string(),
        )?;
        match answer.parse() {
            Ok(n) => break n,
            Err(_) => writeln!(output, "  Invalid: must be a whole number. Try again.")?,
        }
    };

    let config = Config {
        data_file: Some(PathBuf::from(data_file)),
        top_n: Some(top_n),
        ..Config::with_defaults()
    };
    write_config(config_path, &config)?;

    writeln!(output)?;
    writeln!(output, "Config written to {}", config_path.display())?;
    Ok(())
}

/// Run the wizard on the terminal. Uses the default config path when none is given.
pub fn run_init_wizard_stdio(path: Option<PathBuf>, force: bool) -> Result<()> {
    let config_path = match path {
        Some(p) => p,
        None => get_config_path()?,
    };
    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut output = std::io::stdout();
    run_init_wizard(&mut input, &mut output, &config_path, force)
}
