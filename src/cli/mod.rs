//! CLI module - command definitions and handlers
//!
//! One file per command family; every handler loads config, builds the
//! client, and returns the typed error kinds `main` maps to exit codes.

use clap::{Parser, Subcommand};

pub mod config;
pub mod daily;
pub mod destroy;
pub mod edit;
pub mod mv;
pub mod new;
pub mod output;
pub mod query;

use crate::config::Config;

/// facts - command-line client for a facts server
#[derive(Parser, Debug)]
#[command(name = "facts")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Disable colorization in output
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,

    /// Only output warnings and errors
    #[arg(long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Configure the connection to a facts server
    Config,

    /// Get a list of daily facts
    #[command(visible_alias = "d")]
    Daily(daily::DailyArgs),

    /// Create new category(s)
    #[command(name = "new-category", visible_alias = "nc")]
    NewCategory(new::NewCategoryArgs),

    /// Create new fact(s)
    #[command(name = "new-fact", visible_alias = "nf")]
    NewFact(new::NewFactArgs),

    /// Edit a category's name
    #[command(name = "edit-category", visible_alias = "ec")]
    EditCategory(edit::EditCategoryArgs),

    /// Edit a fact's content
    #[command(name = "edit-fact", visible_alias = "ef")]
    EditFact(edit::EditFactArgs),

    /// Move category(s) to a new parent
    #[command(name = "move-category", visible_alias = "mc")]
    MoveCategory(mv::MoveCategoryArgs),

    /// Move fact(s) to a new category
    #[command(name = "move-fact", visible_alias = "mf")]
    MoveFact(mv::MoveFactArgs),

    /// Destroy category(s)
    #[command(name = "destroy-category", visible_alias = "rc")]
    DestroyCategory(destroy::DestroyCategoryArgs),

    /// Destroy fact(s)
    #[command(name = "destroy-fact", visible_alias = "rf")]
    DestroyFact(destroy::DestroyFactArgs),

    /// Query category(s)
    #[command(name = "query-category", visible_alias = "qc")]
    QueryCategory(query::QueryCategoryArgs),

    /// Query fact(s)
    #[command(name = "query-fact", visible_alias = "qf")]
    QueryFact(query::QueryFactArgs),
}

/// Write operations need configured credentials. When they are absent
/// the command points at `facts config` and exits cleanly, so the
/// caller should return right away on `false`.
pub(crate) fn ensure_auth(config: &Config) -> bool {
    if config.credentials().is_some() {
        true
    } else {
        output::note("Authorization required for this task, use `facts config`");
        false
    }
}

/// Argument usage problem: not a serious error, message and clean exit.
pub(crate) fn arg_misuse(message: &str) {
    output::note(message);
}
