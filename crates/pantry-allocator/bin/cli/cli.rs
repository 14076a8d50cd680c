use clap::{Args, Parser, Subcommand, ValueEnum};
use pantry_allocator::{AllocatorSettings, SourceStrategy};
use std::fmt::{Display, Formatter};
use std::num::NonZeroU32;

pub const SOURCE_ENV: &str = "PANTRY_IDS_SOURCE";
pub const SEED_ENV: &str = "PANTRY_IDS_SEED";

pub const DEFAULT_COUNT: &str = "1";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SourceArg {
    #[value(name = "auto")]
    Auto,
    #[value(name = "strong")]
    Strong,
    #[value(name = "composite")]
    Composite,
}

impl Display for SourceArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceArg::Auto => write!(f, "auto"),
            SourceArg::Strong => write!(f, "strong"),
            SourceArg::Composite => write!(f, "composite"),
        }
    }
}

impl From<SourceArg> for SourceStrategy {
    fn from(value: SourceArg) -> Self {
        match value {
            SourceArg::Auto => SourceStrategy::Auto,
            SourceArg::Strong => SourceStrategy::Strong,
            SourceArg::Composite => SourceStrategy::Composite,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "pantry-ids", version, about = "Generate identifiers for recipes, timers and list items")]
pub struct CLI {
    #[arg(
        long,
        global = true,
        env = SOURCE_ENV,
        value_enum,
        default_value_t = SourceArg::Auto
    )]
    pub source: SourceArg,

    /// Seed for the composite source's pseudo-random stream.
    #[arg(long, global = true, env = SEED_ENV)]
    pub seed: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

impl CLI {
    pub fn settings(&self) -> AllocatorSettings {
        AllocatorSettings {
            strategy: self.source.into(),
            seed: self.seed,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print freshly generated identifiers, one per line.
    Generate(GenerateArgs),
    /// Print an identifier that is not among the taken ones.
    EnsureUnique(EnsureUniqueArgs),
}

#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Prepended verbatim to every identifier.
    #[arg(long, default_value = "")]
    pub prefix: String,

    #[arg(long, default_value = DEFAULT_COUNT)]
    pub count: usize,
}

#[derive(Debug, Args)]
pub struct EnsureUniqueArgs {
    /// Identifier to keep if it is free.
    #[arg(long)]
    pub desired: Option<String>,

    /// Identifiers already in use; repeat the flag or separate with commas.
    #[arg(long, value_delimiter = ',')]
    pub taken: Vec<String>,

    /// Give up after this many generated candidates instead of retrying forever.
    #[arg(long)]
    pub max_attempts: Option<NonZeroU32>,
}
