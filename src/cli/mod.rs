//! CLI module - Command-line interface for the application.
//!
//! Provides commands for:
//! - `signup` - Register a new credential
//! - `verify` - Check an email/password pair
//! - `profile` - Show the authenticated owner's profile
//! - `rename` - Change the authenticated owner's display name

pub mod args;

pub use args::{Cli, Commands};
