use clap::Args;
use dairy_erp_client::client::ErpClient;

#[derive(Debug, Args)]
pub(crate) struct LoginArgs {
    /// Account email
    #[arg(long)]
    email: String,

    /// Account password (prefer the env var over the flag in shared shells)
    #[arg(long, env = "DAIRY_ERP_PASSWORD", hide_env_values = true)]
    password: String,
}

pub(crate) async fn login(client: &ErpClient, args: LoginArgs) -> Result<(), String> {
    let user = client
        .login(&args.email, &args.password)
        .await
        .map_err(|error| error.to_string())?;

    println!("logged in as {} ({:?})", user.email, user.role);
    Ok(())
}

pub(crate) async fn logout(client: &ErpClient) -> Result<(), String> {
    client.logout().await;
    println!("logged out");
    Ok(())
}

pub(crate) fn whoami(client: &ErpClient) -> Result<(), String> {
    match client.current_user() {
        Some(user) => {
            println!("email: {}", user.email);
            println!("role: {:?}", user.role);
            if let Some(last_login) = user.last_login_at {
                println!("last login: {last_login}");
            }
            Ok(())
        }
        None => Err("no local session; run `dairy-erp login`".to_string()),
    }
}
