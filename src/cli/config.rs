//! `facts config`
//!
//! Interactive setup of the connection to a facts server. Write
//! operations need credentials, so this prompts for the host URI and a
//! user/password pair and saves them for future runs.

use anyhow::Context;
use dialoguer::{Input, Password};

use super::output;
use crate::config::Config;
use crate::error::Result;

pub fn run() -> Result<()> {
    let mut config = Config::load()?;

    let uri: String = Input::new()
        .with_prompt(format!("URI of facts host [{}]", config.uri()))
        .allow_empty(true)
        .interact_text()
        .context("failed to read URI")?;
    if !uri.trim().is_empty() {
        config.uri = Some(uri.trim().to_string());
    }

    let user: String = Input::new()
        .with_prompt("User")
        .allow_empty(true)
        .interact_text()
        .context("failed to read user")?;
    if user.trim().is_empty() {
        output::note("User cannot be blank");
        return Ok(());
    }
    config.user = Some(user.trim().to_string());

    let password: String = Password::new()
        .with_prompt("Password")
        .allow_empty_password(true)
        .interact()
        .context("failed to read password")?;
    config.password = Some(password);

    let path = config.save()?;
    output::note(&format!(
        "\nWrote: {} (change permissions to 600)",
        path.display()
    ));
    Ok(())
}
