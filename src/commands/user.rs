//! User command - Directory bootstrap from the command line.

use crate::cli::args::{UserAction, UserArgs};
use crate::config::Config;
use crate::domain::UserForm;
use crate::errors::AppResult;
use crate::infra::Database;
use crate::services::Services;

/// Execute the user command
pub async fn execute(args: UserArgs, config: Config) -> AppResult<()> {
    match args.action {
        UserAction::Add {
            username,
            fullname,
            role,
            password,
        } => {
            let db = Database::connect(&config).await?;
            let services = Services::from_connection(db.get_connection(), config)?;

            let user = services
                .users
                .create_user(UserForm {
                    id: None,
                    username,
                    password,
                    fullname,
                    role,
                })
                .await?;

            println!("Created user {} ({}) with id {}", user.username, user.role, user.id);
        }
    }

    Ok(())
}
