//! `facts destroy-category` / `facts destroy-fact`
//!
//! Each argument is resolved to exactly one record and destroyed.
//! Destroying a category also removes its child categories and facts on
//! the server side.

use clap::Args;

use super::{ensure_auth, output};
use crate::config::Config;
use crate::core::category::Category;
use crate::core::fact::Fact;
use crate::core::record::{RestfulRecord, SearchOptions};
use crate::error::Result;
use crate::remote::RestClient;

#[derive(Args, Debug)]
pub struct DestroyCategoryArgs {
    /// Categories to destroy (ID or partial name match)
    #[arg(required = true)]
    pub categories: Vec<String>,
}

pub fn run_category(args: DestroyCategoryArgs) -> Result<()> {
    let config = Config::load()?;
    if !ensure_auth(&config) {
        return Ok(());
    }
    let client = RestClient::from_config(&config)?;

    for term in &args.categories {
        let category = Category::search_one(&client, term, &SearchOptions::default())?;
        category.destroy(&client)?;
    }
    output::ok();
    Ok(())
}

#[derive(Args, Debug)]
pub struct DestroyFactArgs {
    /// Facts to destroy (ID or partial content match)
    #[arg(required = true)]
    pub facts: Vec<String>,
}

pub fn run_fact(args: DestroyFactArgs) -> Result<()> {
    let config = Config::load()?;
    if !ensure_auth(&config) {
        return Ok(());
    }
    let client = RestClient::from_config(&config)?;

    for term in &args.facts {
        let fact = Fact::search_one(&client, term, &SearchOptions::default())?;
        fact.destroy(&client)?;
    }
    output::ok();
    Ok(())
}
