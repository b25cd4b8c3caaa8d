//! `facts query-category` / `facts query-fact`
//!
//! Several search terms combine into one result set: AND by default,
//! OR with `--or`. Any term matching nothing fails the whole query.

use clap::Args;

use super::output;
use crate::config::Config;
use crate::core::category::Category;
use crate::core::fact::Fact;
use crate::core::query::{combine_terms, Combine};
use crate::core::record::{RestfulRecord, SearchOptions};
use crate::error::Result;
use crate::remote::RestClient;

#[derive(Args, Debug)]
pub struct QueryCategoryArgs {
    /// Search terms (ID or partial name match)
    #[arg(required = true)]
    pub terms: Vec<String>,

    /// Perform logical OR instead of AND on results of each term
    #[arg(long)]
    pub or: bool,

    /// Do not include facts with category results
    #[arg(short = 'n', long = "no-facts")]
    pub no_facts: bool,
}

pub fn run_categories(args: QueryCategoryArgs) -> Result<()> {
    let config = Config::load()?;
    let client = RestClient::from_config(&config)?;

    let options = SearchOptions {
        include_facts: !args.no_facts,
    };
    let results = combine_terms(&args.terms, Combine::from_or_flag(args.or), |term| {
        Category::search_one_or_more(&client, term, &options)
    })?;

    output::print_categories(&results);
    Ok(())
}

#[derive(Args, Debug)]
pub struct QueryFactArgs {
    /// Search terms (ID or partial content match)
    #[arg(required = true)]
    pub terms: Vec<String>,

    /// Perform logical OR instead of AND on results of each term
    #[arg(long)]
    pub or: bool,
}

pub fn run_facts(args: QueryFactArgs) -> Result<()> {
    let config = Config::load()?;
    let client = RestClient::from_config(&config)?;

    let options = SearchOptions::default();
    let results = combine_terms(&args.terms, Combine::from_or_flag(args.or), |term| {
        Fact::search_one_or_more(&client, term, &options)
    })?;

    output::print_facts(&results, true);
    Ok(())
}
