mod cli;

use crate::cli::{Command, EnsureUniqueArgs, GenerateArgs, CLI};
use clap::Parser;
use pantry_allocator::IdentifierAllocator;
use pantry_generator::Generator;
use std::collections::HashSet;
use std::io::{self, BufWriter, Write};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // stdout carries identifiers only, logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    // exits on its own for --help, --version and usage errors
    let config = CLI::parse();

    let allocator = IdentifierAllocator::from_settings(config.settings());

    info!(
        source = %allocator.generator().name(),
        requested = %config.source,
        "starting pantry-ids"
    );

    let mut out = BufWriter::new(io::stdout().lock());
    match config.command {
        Command::Generate(args) => run_generate(&allocator, args, &mut out)?,
        Command::EnsureUnique(args) => run_ensure_unique(&allocator, args, &mut out)?,
    }
    out.flush()?;

    Ok(())
}

fn run_generate<G: Generator>(
    allocator: &IdentifierAllocator<G>,
    args: GenerateArgs,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    for _ in 0..args.count {
        writeln!(out, "{}", allocator.generate(&args.prefix))?;
    }
    Ok(())
}

fn run_ensure_unique<G: Generator>(
    allocator: &IdentifierAllocator<G>,
    args: EnsureUniqueArgs,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let taken: HashSet<String> = args
        .taken
        .into_iter()
        .map(|id| id.trim().to_string())
        .filter(|id| !id.is_empty())
        .collect();

    let desired = args.desired.as_deref();
    let id = match args.max_attempts {
        Some(max_attempts) => allocator.try_ensure_unique(desired, &taken, max_attempts)?,
        None => allocator.ensure_unique(desired, &taken),
    };

    info!(id = %id, taken = taken.len(), "resolved identifier");
    writeln!(out, "{id}")?;
    Ok(())
}
