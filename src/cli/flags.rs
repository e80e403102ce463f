use clap::{ArgAction, Parser};
use passgen::Config;

fn defaults() -> Config {
    Config::default()
}

/// passgen is a password generating engine.
///
/// Boolean options take an optional value: `--symbols` or `--symbols=false`.
#[derive(Parser, Debug)]
#[command(name = "passgen", version, about, long_about = None)]
pub struct CliFlags {
    /// Length of the password
    #[arg(short, long, default_value_t = defaults().length)]
    pub length: usize,

    /// Character set to draw from, overriding the class toggles
    #[arg(long)]
    pub characters: Option<String>,

    /// Include symbols
    #[arg(long, default_value_t = defaults().include_symbols, num_args = 0..=1,
          require_equals = true, default_missing_value = "true", action = ArgAction::Set)]
    pub symbols: bool,

    /// Include numbers
    #[arg(long, default_value_t = defaults().include_numbers, num_args = 0..=1,
          require_equals = true, default_missing_value = "true", action = ArgAction::Set)]
    pub numbers: bool,

    /// Include lowercase letters
    #[arg(long, default_value_t = defaults().include_lowercase, num_args = 0..=1,
          require_equals = true, default_missing_value = "true", action = ArgAction::Set)]
    pub lowercase: bool,

    /// Include uppercase letters
    #[arg(long, default_value_t = defaults().include_uppercase, num_args = 0..=1,
          require_equals = true, default_missing_value = "true", action = ArgAction::Set)]
    pub uppercase: bool,

    /// Exclude similar characters (i, l, o, 0, 1, ...)
    #[arg(long, default_value_t = defaults().exclude_similar, num_args = 0..=1,
          require_equals = true, default_missing_value = "true", action = ArgAction::Set)]
    pub exclude_similar: bool,

    /// Exclude ambiguous symbols (<>[](){}/|\ ...)
    #[arg(long, default_value_t = defaults().exclude_ambiguous, num_args = 0..=1,
          require_equals = true, default_missing_value = "true", action = ArgAction::Set)]
    pub exclude_ambiguous: bool,

    /// How many passwords to generate
    #[arg(short = 'n', long, default_value_t = 1)]
    pub times: usize,

    /// Read entropy from /dev/urandom instead of getrandom
    #[arg(short, long)]
    pub urandom: bool,

    /// Log debug output to stderr
    #[arg(long)]
    pub debug: bool,
}

impl CliFlags {
    pub fn to_config(&self) -> Config {
        Config {
            length: self.length,
            character_set: self.characters.clone(),
            include_symbols: self.symbols,
            include_numbers: self.numbers,
            include_lowercase: self.lowercase,
            include_uppercase: self.uppercase,
            exclude_similar: self.exclude_similar,
            exclude_ambiguous: self.exclude_ambiguous,
        }
    }
}
