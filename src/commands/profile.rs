//! Profile commands - Show or rename the authenticated owner.

use crate::cli::args::{LoginArgs, RenameArgs};
use crate::config::Config;
use crate::errors::AppResult;
use crate::services::CredentialService;

/// Execute the profile command
pub async fn show(args: LoginArgs, config: Config) -> AppResult<()> {
    let manager = super::bootstrap(&config).await?;

    let owner = manager.authenticate(&args.email, &args.password).await?;
    let profile = manager.fetch_profile(&owner).await?;

    super::print_json(&profile)
}

/// Execute the rename command
pub async fn rename(args: RenameArgs, config: Config) -> AppResult<()> {
    let manager = super::bootstrap(&config).await?;

    let owner = manager
        .authenticate(&args.login.email, &args.login.password)
        .await?;
    let profile = manager.update_profile(&owner, args.name).await?;

    super::print_json(&profile)
}
