use clap::{Args, Subcommand};
use dairy_erp_client::client::ErpClient;

#[derive(Debug, Args)]
pub(crate) struct UsersCommand {
    #[command(subcommand)]
    command: Users,
}

#[derive(Debug, Subcommand)]
enum Users {
    /// List user accounts
    List,
    /// Show one user account
    Get { user_id: i64 },
    /// Block a user account
    Block { user_id: i64 },
    /// Unblock a user account
    Unblock { user_id: i64 },
}

pub(crate) async fn run(client: &ErpClient, command: UsersCommand) -> Result<(), String> {
    let users = client.users();
    match command.command {
        Users::List => {
            let list = users.list().await.map_err(|error| error.to_string())?;
            for user in list {
                let flag = if user.is_active { "" } else { " (blocked)" };
                println!("{}\t{}\t{:?}{flag}", user.id, user.email, user.role);
            }
            Ok(())
        }
        Users::Get { user_id } => {
            let user = users.get(user_id).await.map_err(|error| error.to_string())?;
            println!("email: {}", user.email);
            println!("role: {:?}", user.role);
            println!("active: {}", user.is_active);
            if let Some(last_login) = user.last_login_at {
                println!("last login: {last_login}");
            }
            Ok(())
        }
        Users::Block { user_id } => {
            users
                .block(user_id)
                .await
                .map_err(|error| error.to_string())?;
            println!("user {user_id} blocked");
            Ok(())
        }
        Users::Unblock { user_id } => {
            users
                .unblock(user_id)
                .await
                .map_err(|error| error.to_string())?;
            println!("user {user_id} unblocked");
            Ok(())
        }
    }
}
