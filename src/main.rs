//! facts CLI - Entry point
//!
//! Usage: facts <command> [options]

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use facts::cli::{output, Cli, Commands};

fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Parse CLI arguments
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }
    output::set_quiet(cli.quiet);

    // Run command
    let result = match cli.command {
        Commands::Config => facts::cli::config::run(),
        Commands::Daily(args) => facts::cli::daily::run(args),
        Commands::NewCategory(args) => facts::cli::new::run_category(args),
        Commands::NewFact(args) => facts::cli::new::run_fact(args),
        Commands::EditCategory(args) => facts::cli::edit::run_category(args),
        Commands::EditFact(args) => facts::cli::edit::run_fact(args),
        Commands::MoveCategory(args) => facts::cli::mv::run_category(args),
        Commands::MoveFact(args) => facts::cli::mv::run_fact(args),
        Commands::DestroyCategory(args) => facts::cli::destroy::run_category(args),
        Commands::DestroyFact(args) => facts::cli::destroy::run_fact(args),
        Commands::QueryCategory(args) => facts::cli::query::run_categories(args),
        Commands::QueryFact(args) => facts::cli::query::run_facts(args),
    };

    if let Err(error) = result {
        if error.is_benign() {
            // Expected outcome (imprecise query, editor abort): message
            // and a clean exit.
            output::note(&error.to_string());
        } else {
            eprintln!("{}", error.to_string().red());
            std::process::exit(error.status_code());
        }
    }
}
