//! `facts daily`
//!
//! Daily digest of facts for consumption and memorization.

use clap::Args;

use super::output;
use crate::config::Config;
use crate::core::fact::Fact;
use crate::core::record::RestfulRecord;
use crate::error::Result;
use crate::remote::RestClient;

#[derive(Args, Debug)]
pub struct DailyArgs {
    /// Number of facts to retrieve
    #[arg(short = 'n', long, default_value_t = 15)]
    pub num: u32,
}

pub fn run(args: DailyArgs) -> Result<()> {
    let config = Config::load()?;
    let client = RestClient::from_config(&config)?;

    let facts = Fact::daily(&client, &[("num", args.num.to_string())])?;
    output::print_facts(&facts, true);
    Ok(())
}
