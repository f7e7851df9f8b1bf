mod auth;
mod category;
mod config_cmd;
mod dashboard;
mod export;
mod item;
mod menu;
mod restaurant;

pub use auth::AuthCommand;
pub use category::CategoryCommand;
pub use config_cmd::ConfigCommand;
pub use dashboard::DashboardCommand;
pub use export::ExportCommand;
pub use item::ItemCommand;
pub use menu::MenuCommand;
pub use restaurant::RestaurantCommand;

use clap::ValueEnum;
use std::io::{self, Write};

#[derive(Clone, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// A store action failed and its notice has already been printed.
#[derive(Debug)]
pub struct Reported;

impl std::fmt::Display for Reported {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Request failed")
    }
}

impl std::error::Error for Reported {}

/// Asks a yes/no question on stdout; anything but `y` is a no.
pub(crate) fn confirm(prompt: &str) -> io::Result<bool> {
    print!("{} [y/N] ", prompt);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().eq_ignore_ascii_case("y"))
}

/// Cuts `value` to `width` characters, marking the cut with `...`.
pub(crate) fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() > width {
        let kept: String = value.chars().take(width.saturating_sub(3)).collect();
        format!("{}...", kept)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Soup", 30), "Soup");
        assert_eq!(truncate("A very long restaurant name", 10), "A very ...");
        assert_eq!(truncate("Crème brûlée maison", 8), "Crème...");
    }

    #[test]
    fn test_reported_is_detectable_through_box() {
        let error: Box<dyn std::error::Error> = Box::new(Reported);
        assert!(error.is::<Reported>());
    }
}
