//! `facts new-category` / `facts new-fact`
//!
//! New records come either from trailing arguments or, when none are
//! given, from a batch editor session (one record per non-blank line).

use clap::Args;

use super::{ensure_auth, arg_misuse, output};
use crate::config::Config;
use crate::core::category::Category;
use crate::core::editor::Editor;
use crate::core::fact::Fact;
use crate::core::record::{RestfulRecord, SearchOptions};
use crate::error::Result;
use crate::remote::RestClient;

#[derive(Args, Debug)]
pub struct NewCategoryArgs {
    /// Parent category (ID or partial name match) followed by new
    /// category names; with --no-parent, names only
    pub args: Vec<String>,

    /// Category should have no parent (making it root level)
    #[arg(short = 'p', long = "no-parent")]
    pub no_parent: bool,
}

pub fn run_category(args: NewCategoryArgs) -> Result<()> {
    let config = Config::load()?;
    if !ensure_auth(&config) {
        return Ok(());
    }
    let client = RestClient::from_config(&config)?;

    let (parent_id, names) = if args.no_parent {
        (None, args.args)
    } else {
        if args.args.is_empty() {
            arg_misuse("need at least one argument");
            return Ok(());
        }
        let parent = Category::search_one(&client, &args.args[0], &SearchOptions::default())?;
        (parent.id, args.args[1..].to_vec())
    };

    let names = if names.is_empty() {
        Editor::from_env()?.capture_lines()?
    } else {
        names
    };

    let mut created = Vec::new();
    for name in names {
        let mut category = Category::new(name);
        category.category_id = parent_id;
        category.save(&client)?;
        created.push(category);
    }
    output::print_categories(&created);
    Ok(())
}

#[derive(Args, Debug)]
pub struct NewFactArgs {
    /// Parent category (ID or partial name match) followed by content
    /// for new facts; content from $EDITOR when omitted
    #[arg(required = true)]
    pub args: Vec<String>,
}

pub fn run_fact(args: NewFactArgs) -> Result<()> {
    let config = Config::load()?;
    if !ensure_auth(&config) {
        return Ok(());
    }
    let client = RestClient::from_config(&config)?;

    let category = Category::search_one(&client, &args.args[0], &SearchOptions::default())?;

    let contents = if args.args.len() == 1 {
        Editor::from_env()?.capture_lines()?
    } else {
        args.args[1..].to_vec()
    };

    for content in contents {
        let mut fact = Fact::new(content, category.id);
        fact.save(&client)?;
        output::print_facts(std::slice::from_ref(&fact), false);
    }
    Ok(())
}
