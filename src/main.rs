use std::{
    io::{stdin, stdout},
    process,
};

use clap::Parser;
use colored::Colorize;
use kmercorpus::{
    cli::Args,
    config::Config,
    error::KmerCorpusError,
    run::run,
};

#[cfg(feature = "tracing")]
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let args = Args::parse();

    #[cfg(feature = "tracing")]
    init_tracing();

    let config = Config::new(args);

    if !config.quiet {
        if let Some(k) = config.k {
            eprintln!("{}: {}", "k-length".bold(), k.to_string().blue().bold());
        }
        eprintln!(
            "{}: {}",
            "counting".bold(),
            if config.parallel { "parallel" } else { "sequential" }
                .blue()
                .bold()
        );
    }

    let result = run(&config, stdin().lock(), stdout().lock());

    match result {
        Ok(_) => {}
        Err(e @ KmerCorpusError::CorpusTooSmall { .. }) => {
            eprintln!(
                "{}\n {}",
                "Problem with input:".blue().bold(),
                e.to_string().blue()
            );
            eprintln!(" {}", "$ kmercorpus --help".bold());
            process::exit(1);
        }
        Err(e) => {
            eprintln!(
                "{}\n {}",
                "Application error:".blue().bold(),
                e.to_string().blue()
            );
            process::exit(1);
        }
    }
}
