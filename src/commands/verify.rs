//! Verify command - Checks an email/password pair.

use crate::cli::args::LoginArgs;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::services::CredentialService;

/// Execute the verify command
pub async fn execute(args: LoginArgs, config: Config) -> AppResult<()> {
    let manager = super::bootstrap(&config).await?;

    match manager.authenticate(&args.email, &args.password).await {
        Ok(_) => {
            println!("valid");
            Ok(())
        }
        Err(AppError::InvalidCredentials) => {
            println!("invalid");
            Err(AppError::InvalidCredentials)
        }
        Err(e) => Err(e),
    }
}
