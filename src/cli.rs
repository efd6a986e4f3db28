//! Command-line front end: one subcommand per flow.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::api::{ApiClient, FlowError, Transport};
use crate::flow::{AuthFlow, AuthRequest, ProfileFlow, ProfileState};
use crate::loading::LoadingGuard;
use crate::model::{Credentials, NewUser, User};

#[derive(Debug, Parser)]
#[command(name = "realworld", version, about = "Client for the not-so-realworld user API")]
pub struct Cli {
    /// Path to config file (default: platform config dir)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the server base URL (e.g. http://localhost:4000)
    #[arg(long, global = true, value_name = "URL")]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Sign in and print the user with its token
    Login {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
    },
    /// Create an account and print the user with its token
    Register {
        #[arg(long)]
        email: String,
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
    },
    /// Show the user a token belongs to
    Whoami {
        #[arg(long)]
        token: String,
    },
    /// Change username and/or email; omitted fields are left unchanged
    Update {
        #[arg(long)]
        token: String,
        #[arg(long, default_value = "")]
        username: String,
        #[arg(long, default_value = "")]
        email: String,
    },
    /// Change the password
    Passwd {
        #[arg(long)]
        token: String,
        #[arg(long)]
        password: String,
    },
}

/// Result of a successful command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub message: Option<String>,
    pub user: User,
}

impl Outcome {
    /// Message line (if any) followed by the user as pretty JSON.
    pub fn render(&self) -> Result<String, serde_json::Error> {
        let user = serde_json::to_string_pretty(&self.user)?;
        Ok(match &self.message {
            Some(message) => format!("{}\n{}", message, user),
            None => user,
        })
    }
}

/// Text printed to stderr for a failed command.
pub fn render_error(err: &FlowError) -> String {
    match err.message().filter(|message| !message.is_empty()) {
        Some(message) => format!("Error: {}\n{}", err.title(), message),
        None => format!("Error: {}", err.title()),
    }
}

pub async fn execute<T: Transport>(
    command: Command,
    client: ApiClient<T>,
) -> Result<Outcome, FlowError> {
    let loading = LoadingGuard::new();

    match command {
        Command::Login { username, password } => {
            let request = AuthRequest::SignIn(Credentials { username, password });
            let user = AuthFlow::new(client).submit(&loading, request).await?;
            Ok(Outcome { message: None, user })
        }
        Command::Register {
            email,
            username,
            password,
        } => {
            let request = AuthRequest::SignUp(NewUser {
                email,
                username,
                password,
            });
            let user = AuthFlow::new(client).submit(&loading, request).await?;
            Ok(Outcome { message: None, user })
        }
        Command::Whoami { token } => {
            let mut state = ProfileState::with_loading(token_only(token), loading);
            let message = ProfileFlow::new(client).refresh(&mut state).await?;
            Ok(Outcome {
                message: Some(message),
                user: state.user,
            })
        }
        Command::Update {
            token,
            username,
            email,
        } => {
            let mut state = ProfileState::with_loading(token_only(token), loading);
            let message = ProfileFlow::new(client)
                .submit(&mut state, &username, &email)
                .await?;
            Ok(Outcome {
                message: Some(message),
                user: state.user,
            })
        }
        Command::Passwd { token, password } => {
            let mut state = ProfileState::with_loading(token_only(token), loading);
            let message = ProfileFlow::new(client)
                .change_password(&mut state, &password)
                .await?;
            Ok(Outcome {
                message: Some(message),
                user: state.user,
            })
        }
    }
}

/// Placeholder user for commands that only know a token; replaced by the
/// server's copy on success.
fn token_only(token: String) -> User {
    User {
        username: String::new(),
        email: String::new(),
        token,
    }
}
