//! `facts edit-category` / `facts edit-fact`
//!
//! The new value comes either from a second argument or, when omitted,
//! from a single-field editor session seeded with the current value.

use clap::Args;

use super::{ensure_auth, output};
use crate::config::Config;
use crate::core::category::Category;
use crate::core::editor::Editor;
use crate::core::fact::Fact;
use crate::core::record::{RestfulRecord, SearchOptions};
use crate::error::Result;
use crate::remote::RestClient;

#[derive(Args, Debug)]
pub struct EditCategoryArgs {
    /// Category to change (ID or partial name match)
    pub src: String,

    /// New name; $EDITOR is launched when omitted
    pub dest: Option<String>,
}

pub fn run_category(args: EditCategoryArgs) -> Result<()> {
    let config = Config::load()?;
    if !ensure_auth(&config) {
        return Ok(());
    }
    let client = RestClient::from_config(&config)?;

    let mut category = Category::search_one(&client, &args.src, &SearchOptions::default())?;
    category.name = match args.dest {
        Some(name) => name,
        None => Editor::from_env()?.edit(&category.name)?,
    };
    category.save(&client)?;
    output::ok();
    Ok(())
}

#[derive(Args, Debug)]
pub struct EditFactArgs {
    /// Fact to change (ID or partial content match)
    pub src: String,

    /// New content; $EDITOR is launched when omitted
    pub dest: Option<String>,
}

pub fn run_fact(args: EditFactArgs) -> Result<()> {
    let config = Config::load()?;
    if !ensure_auth(&config) {
        return Ok(());
    }
    let client = RestClient::from_config(&config)?;

    let mut fact = Fact::search_one(&client, &args.src, &SearchOptions::default())?;
    fact.content = match args.dest {
        Some(content) => content,
        None => Editor::from_env()?.edit(&fact.content)?,
    };
    fact.save(&client)?;
    output::ok();
    Ok(())
}
