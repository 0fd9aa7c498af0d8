//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use clap::{Parser, Subcommand};

/// Credential Manager - signup, verification and profile maintenance
#[derive(Parser, Debug)]
#[command(name = "credential-manager")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Register a new credential
    Signup(SignupArgs),

    /// Check a password against the stored credential
    Verify(LoginArgs),

    /// Show the profile of an authenticated owner
    Profile(LoginArgs),

    /// Change the display name of an authenticated owner
    Rename(RenameArgs),
}

/// Email and password of an existing credential
#[derive(Parser)]
pub struct LoginArgs {
    /// Email address
    #[arg(short, long)]
    pub email: String,

    /// Password
    #[arg(short, long, env = "CREDENTIAL_PASSWORD", hide_env_values = true)]
    pub password: String,
}

/// Arguments for the signup command
#[derive(Parser)]
pub struct SignupArgs {
    #[command(flatten)]
    pub login: LoginArgs,

    /// Display name
    #[arg(short, long)]
    pub name: String,
}

/// Arguments for the rename command
#[derive(Parser)]
pub struct RenameArgs {
    #[command(flatten)]
    pub login: LoginArgs,

    /// New display name
    #[arg(short, long)]
    pub name: String,
}

// Passwords stay out of debug output
impl std::fmt::Debug for LoginArgs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginArgs")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl std::fmt::Debug for SignupArgs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignupArgs")
            .field("login", &self.login)
            .field("name", &self.name)
            .finish()
    }
}

impl std::fmt::Debug for RenameArgs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenameArgs")
            .field("login", &self.login)
            .field("name", &self.name)
            .finish()
    }
}
