//! Resolve command

use colored::Colorize;

use crate::client::ShortenerService;
use crate::interfaces::cli::CliError;
use crate::pages::{Navigation, Navigator, RedirectPage};

/// Prints the navigation target instead of following it
struct PrintNavigator;

impl Navigator for PrintNavigator {
    fn navigate(&mut self, target: &str) {
        println!("{}", target);
    }
}

/// Run one resolution flow and print where the code leads
pub async fn resolve_code(service: &dyn ShortenerService, code: String) -> Result<(), CliError> {
    let mut page = RedirectPage::new();
    let navigation = page
        .resolve(&code, service, &mut PrintNavigator)
        .await
        .ok_or_else(|| CliError::CommandError("Resolution did not complete".into()))?;

    if navigation == Navigation::Root {
        eprintln!(
            "{} {} could not be resolved, a browser would land on the creation page",
            "ℹ".bold().blue(),
            code.magenta()
        );
    }
    Ok(())
}
