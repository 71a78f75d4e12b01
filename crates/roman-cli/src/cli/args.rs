use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "roman",
    version,
    about = "Convert between integers and Roman numerals"
)]
pub struct Cli {
    /// Output format
    #[arg(
        long,
        value_enum,
        global = true,
        default_value_t = OutputFormat::Text,
        env = "ROMAN_FORMAT"
    )]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Encode integers as numerals
    Encode(EncodeArgs),
    /// Decode numerals to integers
    Decode(DecodeArgs),
    /// Check numerals for well-formedness
    Validate(ValidateArgs),
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq)]
pub enum OutputFormat {
    #[default]
    Text,
    /// One JSON object per input line
    Json,
}

#[derive(clap::Args, Debug, Clone)]
pub struct EncodeArgs {
    #[arg(required = true, allow_negative_numbers = true)]
    pub values: Vec<i64>,
}

#[derive(clap::Args, Debug, Clone)]
pub struct DecodeArgs {
    #[arg(required = true)]
    pub numerals: Vec<String>,
}

#[derive(clap::Args, Debug, Clone)]
pub struct ValidateArgs {
    /// Also require canonical form (decode then re-encode must match)
    #[arg(long, env = "ROMAN_STRICT")]
    pub strict: bool,

    #[arg(required = true)]
    pub numerals: Vec<String>,
}
