//! Session token commands.
//!
//! The token is issued by the menu API's web login; these commands only
//! store, remove and inspect it.

use clap::{Args, Subcommand};
use std::io::{self, Write};

use menuboard_core::{SessionError, SessionStore};

use crate::config::Config;

#[derive(Args)]
pub struct AuthCommand {
    #[command(subcommand)]
    command: AuthSubcommand,
}

#[derive(Subcommand)]
enum AuthSubcommand {
    /// Store an access token (prompts when --token is omitted)
    Login {
        /// Access token issued by the API
        #[arg(long)]
        token: Option<String>,
    },
    /// Remove the stored token
    Logout,
    /// Show authentication status
    Status,
}

impl AuthCommand {
    pub fn run(&self, session: &SessionStore, config: &Config) -> Result<(), AuthError> {
        match &self.command {
            AuthSubcommand::Login { token } => login(session, token.as_deref()),
            AuthSubcommand::Logout => logout(session),
            AuthSubcommand::Status => status(session, config),
        }
    }
}

#[derive(Debug)]
pub enum AuthError {
    IoError(io::Error),
    Session(SessionError),
    EmptyToken,
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthError::IoError(e) => write!(f, "I/O error: {}", e),
            AuthError::Session(e) => write!(f, "Session error: {}", e),
            AuthError::EmptyToken => write!(f, "Token cannot be empty"),
        }
    }
}

impl std::error::Error for AuthError {}

impl From<io::Error> for AuthError {
    fn from(e: io::Error) -> Self {
        AuthError::IoError(e)
    }
}

impl From<SessionError> for AuthError {
    fn from(e: SessionError) -> Self {
        AuthError::Session(e)
    }
}

fn login(session: &SessionStore, token: Option<&str>) -> Result<(), AuthError> {
    let token = match token {
        Some(token) => token.trim().to_string(),
        None => {
            print!("Enter your access token: ");
            io::stdout().flush()?;
            let mut input = String::new();
            io::stdin().read_line(&mut input)?;
            input.trim().to_string()
        }
    };

    if token.is_empty() {
        return Err(AuthError::EmptyToken);
    }

    session.save_token(&token)?;
    tracing::info!("Saved session token to {}", session.path().display());
    println!("Logged in (token: {})", mask(&token));
    Ok(())
}

fn logout(session: &SessionStore) -> Result<(), AuthError> {
    if session.clear()? {
        println!("Logged out.");
    } else {
        println!("Already logged out.");
    }
    Ok(())
}

fn status(session: &SessionStore, config: &Config) -> Result<(), AuthError> {
    println!("API: {}", config.api_url.value);
    println!("Session file: {}", session.path().display());
    match session.read_token()? {
        Some(token) => println!("Logged in (token: {})", mask(&token)),
        None => println!("Not logged in. Run 'menuboard auth login' to authenticate."),
    }
    Ok(())
}

/// Shows the first and last four characters of long tokens only.
fn mask(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() > 8 {
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{}...{}", head, tail)
    } else {
        "****".to_string()
    }
}
