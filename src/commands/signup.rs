//! Signup command - Registers a new credential.

use crate::cli::args::SignupArgs;
use crate::config::Config;
use crate::domain::{Profile, SignupRequest};
use crate::errors::AppResult;
use crate::services::CredentialService;

/// Execute the signup command
pub async fn execute(args: SignupArgs, config: Config) -> AppResult<()> {
    let manager = super::bootstrap(&config).await?;

    let request = SignupRequest::new(args.login.email, args.login.password, args.name);
    let credential = manager.create(request).await?;

    super::print_json(&Profile::from(credential))
}
