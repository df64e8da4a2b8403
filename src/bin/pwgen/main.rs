use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use anyhow::Context;
use clap::Parser;
use serde::Serialize;

use pwgen::{Alphabet, Config, GenerationOptions, Password, MAX_LENGTH, MIN_LENGTH};

mod clipboard;
mod interactive;
mod table;

#[derive(Parser)]
#[command(about = "Generate random passwords")]
struct Args {
    /// Config file to read defaults from, instead of `$XDG_CONFIG_HOME/pwgen/config.yaml`.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Generate passwords and print them.
    #[command(alias = "gen")]
    Generate {
        #[command(flatten)]
        options: OptionArgs,
        /// How many passwords to generate. More than one are shown as a table.
        #[arg(short = 'n', long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        count: u32,
        /// Copy the (last) password to the clipboard.
        #[arg(long)]
        copy: bool,
        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Pick options and regenerate passwords from a menu, copying the one you like.
    Interactive {
        #[command(flatten)]
        options: OptionArgs,
    },
}

#[derive(clap::Args)]
struct OptionArgs {
    /// Password length.
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(MIN_LENGTH as i64..=MAX_LENGTH as i64))]
    length: Option<u8>,
    /// Include the digits 0-9.
    #[arg(long, conflicts_with = "no_numbers")]
    numbers: bool,
    /// Exclude the digits 0-9.
    #[arg(long)]
    no_numbers: bool,
    /// Include special characters (!@#$%^&*_+-=|;:,.<>?).
    #[arg(long, conflicts_with = "no_special")]
    special: bool,
    /// Exclude special characters.
    #[arg(long)]
    no_special: bool,
}

impl OptionArgs {
    /// Layer the command-line flags over the configured defaults.
    fn merge(&self, defaults: GenerationOptions) -> GenerationOptions {
        GenerationOptions {
            length: self.length.map_or(defaults.length, usize::from),
            include_numbers: flag(self.numbers, self.no_numbers, defaults.include_numbers),
            include_special_chars: flag(self.special, self.no_special, defaults.include_special_chars),
        }
    }
}

fn flag(on: bool, off: bool, default: bool) -> bool {
    if on {
        true
    } else if off {
        false
    } else {
        default
    }
}

fn run() -> Result<(), ProgError> {
    let args = Args::parse();
    let config = match args.config.as_deref() {
        Some(path) => Config::load(path)?,
        None => Config::load_default()?,
    };

    match args.command {
        Command::Generate {
            options,
            count,
            copy,
            json,
        } => generate(&config, options.merge(config.options), count, copy, json)?,
        Command::Interactive { options } => {
            interactive::run(&config, options.merge(config.options))?
        }
    }

    Ok(())
}

#[derive(Serialize)]
struct GeneratedRow {
    password: Password,
    entropy_bits: f64,
}

fn generate(
    config: &Config,
    options: GenerationOptions,
    count: u32,
    copy: bool,
    json: bool,
) -> Result<(), ProgError> {
    let mut rng = rand::thread_rng();
    let entropy_bits = Alphabet::for_options(&options).entropy_bits(options.length);
    let rows = (0..count)
        .map(|_| GeneratedRow {
            password: pwgen::generate(&mut rng, &options),
            entropy_bits,
        })
        .collect::<Vec<_>>();

    {
        let mut stdout = io::stdout().lock();
        if json {
            serde_json::to_writer(&mut stdout, &rows).context("failed to write JSON to stdout")?;
            writeln!(stdout).context("failed to write to stdout")?;
        } else if let [row] = rows.as_slice() {
            writeln!(stdout, "{}", row.password.as_str()).context("failed to write to stdout")?;
        } else {
            let rows = rows
                .iter()
                .enumerate()
                .map(|(i, row)| table::Row::new(i + 1, &row.password, row.entropy_bits))
                .collect::<Vec<_>>();
            table::display_table(&rows, &mut stdout).context("failed to output table")?;
        }
    }

    if copy {
        if let Some(row) = rows.last() {
            clipboard::copy_and_report(config, &row.password);
        }
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run() {
        Ok(()) => (),
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    }
}

#[derive(Debug, thiserror::Error)]
enum ProgError {
    #[error("Config error: {0}")]
    Config(pwgen::ConfigError),
    #[error("Prompt failed: {0}")]
    PromptFailed(#[source] io::Error),
    #[error(transparent)]
    Other(anyhow::Error),
}

impl From<anyhow::Error> for ProgError {
    fn from(err: anyhow::Error) -> ProgError {
        ProgError::Other(err)
    }
}

impl From<pwgen::ConfigError> for ProgError {
    fn from(err: pwgen::ConfigError) -> ProgError {
        ProgError::Config(err)
    }
}
