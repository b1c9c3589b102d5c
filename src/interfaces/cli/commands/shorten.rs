//! Shorten command

use colored::Colorize;

use crate::client::ShortenerService;
use crate::interfaces::cli::CliError;
use crate::pages::CreatePage;

/// Run one creation flow and print the short URL
pub async fn shorten_url(service: &dyn ShortenerService, url: String) -> Result<(), CliError> {
    let mut page = CreatePage::new();
    page.set_input(url);
    page.submit(service).await;

    if let Some(err) = page.error() {
        return Err(err.clone().into());
    }

    let short_url = page
        .short_url()
        .ok_or_else(|| CliError::CommandError("The service returned no short URL".into()))?;

    println!(
        "{} Short URL: {}",
        "✓".bold().green(),
        short_url.cyan().underline()
    );
    Ok(())
}
