//! `facts move-category` / `facts move-fact`
//!
//! Re-parenting: the last argument names the destination category, all
//! earlier arguments the records to move. `--no-parent` moves
//! categories to the root level instead.

use clap::Args;

use super::{arg_misuse, ensure_auth, output};
use crate::config::Config;
use crate::core::category::Category;
use crate::core::fact::Fact;
use crate::core::record::{RestfulRecord, SearchOptions};
use crate::error::Result;
use crate::remote::RestClient;

#[derive(Args, Debug)]
pub struct MoveCategoryArgs {
    /// Categories to move (ID or partial name match), destination last
    #[arg(required = true)]
    pub args: Vec<String>,

    /// Categories should be moved to the root level (no longer have a
    /// parent)
    #[arg(short = 'p', long = "no-parent")]
    pub no_parent: bool,
}

pub fn run_category(args: MoveCategoryArgs) -> Result<()> {
    if args.args.len() < 2 && !args.no_parent {
        arg_misuse("need at least two arguments");
        return Ok(());
    }
    let config = Config::load()?;
    if !ensure_auth(&config) {
        return Ok(());
    }
    let client = RestClient::from_config(&config)?;
    let options = SearchOptions::default();

    let (sources, dest_id) = if args.no_parent {
        (args.args.as_slice(), None)
    } else {
        let dest = Category::search_one(&client, args.args.last().unwrap(), &options)?;
        (&args.args[..args.args.len() - 1], dest.id)
    };

    for source in sources {
        let mut category = Category::search_one(&client, source, &options)?;
        category.category_id = dest_id;
        category.save(&client)?;
    }
    output::ok();
    Ok(())
}

#[derive(Args, Debug)]
pub struct MoveFactArgs {
    /// Facts to move (ID or partial content match), destination
    /// category last
    #[arg(required = true)]
    pub args: Vec<String>,
}

pub fn run_fact(args: MoveFactArgs) -> Result<()> {
    if args.args.len() < 2 {
        arg_misuse("need at least two arguments");
        return Ok(());
    }
    let config = Config::load()?;
    if !ensure_auth(&config) {
        return Ok(());
    }
    let client = RestClient::from_config(&config)?;
    let options = SearchOptions::default();

    let dest = Category::search_one(&client, args.args.last().unwrap(), &options)?;
    for source in &args.args[..args.args.len() - 1] {
        let mut fact = Fact::search_one(&client, source, &options)?;
        fact.category_id = dest.id;
        fact.save(&client)?;
    }
    output::ok();
    Ok(())
}
