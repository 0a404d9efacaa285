//! One-shot content API probe

use colored::Colorize;

use crate::client::{ContentApi, HttpContentApi};
use crate::config::ApiConfig;
use crate::interfaces::cli::CliError;

/// Fetch both listings once and print what came back
pub async fn check_api(config: &ApiConfig) -> Result<(), CliError> {
    let api = HttpContentApi::from_config(config)?;
    println!("{} {}", "Checking content API at".yellow(), config.base_url.blue());

    let mut failures = 0;

    match api.list_references(None).await {
        Ok(items) => println!("  {} {} references", "✓".green(), items.len()),
        Err(e) => {
            failures += 1;
            println!("  {} references: {}", "✗".red(), e.to_string().red());
        }
    }

    match api.list_gallery(None).await {
        Ok(items) => println!("  {} {} gallery items", "✓".green(), items.len()),
        Err(e) => {
            failures += 1;
            println!("  {} gallery: {}", "✗".red(), e.to_string().red());
        }
    }

    if failures > 0 {
        return Err(CliError::ApiError(format!(
            "{} of 2 requests failed; the site will serve fallback content",
            failures
        )));
    }

    println!("{}", "Content API is reachable".green());
    Ok(())
}
