use std::fmt::Display;
use std::ops::RangeInclusive;
use std::str::FromStr;

use clap::Parser;
use pwphrase::config::{
    DEFAULT_PHRASE_COUNT, DEFAULT_PHRASE_LENGTH, DEFAULT_PROPORTION, DEFAULT_SEPARATOR,
    PHRASE_COUNT_RANGE, PHRASE_LENGTH_RANGE, PROPORTION_RANGE,
};
use pwphrase::{Error, PasswordConfig};

const AFTER_HELP: &str = "\
Examples:
  pwphrase                          # xxxxxx-xxxxxx-xxxxxx
  pwphrase --exclude_ambiguous      # same, without iIlL1oO0
  pwphrase -l 10 -n 1               # 10 character continuous password
  pwphrase -l 8 -n 1 -u 0 -d 1      # 8 digit PIN code";

#[derive(Parser, Debug)]
#[command(name = "pwphrase", version)]
#[command(about = "Generate a random password in the style of the iCloud Keychain: xxxxxx-xxxxxx-xxxxxx")]
#[command(after_help = AFTER_HELP)]
pub struct Args {
    /// Length of individual phrases. Allowed: [4 .. 25]
    #[arg(short, long, default_value_t = DEFAULT_PHRASE_LENGTH, value_parser = phrase_length)]
    pub length: usize,

    /// Number of phrases. Allowed: [1 .. 3]
    #[arg(short, long, default_value_t = DEFAULT_PHRASE_COUNT, value_parser = phrase_count)]
    pub number: usize,

    /// Characters separating the phrases
    #[arg(short, long, default_value = DEFAULT_SEPARATOR)]
    pub sep: String,

    /// Proportion of uppercase characters. Allowed: [0 .. 1]
    #[arg(short = 'u', long = "uppercase_prop", default_value_t = DEFAULT_PROPORTION, value_parser = proportion)]
    pub uppercase_prop: f64,

    /// Proportion of digits. Allowed: [0 .. 1]
    #[arg(short = 'd', long = "digit_prop", default_value_t = DEFAULT_PROPORTION, value_parser = proportion)]
    pub digit_prop: f64,

    /// Exclude the ambiguous characters iIlL1oO0
    #[arg(long = "exclude_ambiguous")]
    pub exclude_ambiguous: bool,

    /// Seed the generator for a reproducible password
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log sampling details to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Builds the validated library configuration. Ranges were already
    /// checked while parsing; this adds the proportion sum check.
    pub fn to_config(&self) -> Result<PasswordConfig, Error> {
        PasswordConfig::builder()
            .phrase_length(self.length)
            .phrase_count(self.number)
            .separator(self.sep.as_str())
            .uppercase_proportion(self.uppercase_prop)
            .digit_proportion(self.digit_prop)
            .exclude_ambiguous(self.exclude_ambiguous)
            .build()
    }
}

fn phrase_length(arg: &str) -> Result<usize, String> {
    parse_in_range(arg, &PHRASE_LENGTH_RANGE, "an integer")
}

fn phrase_count(arg: &str) -> Result<usize, String> {
    parse_in_range(arg, &PHRASE_COUNT_RANGE, "an integer")
}

fn proportion(arg: &str) -> Result<f64, String> {
    parse_in_range(arg, &PROPORTION_RANGE, "a float")
}

fn parse_in_range<T>(arg: &str, range: &RangeInclusive<T>, kind: &str) -> Result<T, String>
where
    T: FromStr + PartialOrd + Display,
{
    let value: T = arg.trim().parse().map_err(|_| format!("must be {kind} number"))?;
    if !range.contains(&value) {
        return Err(format!("must be in range [{} .. {}]", range.start(), range.end()));
    }
    Ok(value)
}
