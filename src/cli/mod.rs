use std::sync::Arc;

use clap::{Parser, Subcommand};
use dairy_erp_client::{client::ErpClient, config::ApiConfig, store::FileStore};

mod companies;
mod employees;
mod invoices;
mod orders;
mod products;
mod session;
mod users;
mod warehouse;

#[derive(Debug, Parser)]
#[command(name = "dairy-erp", about = "Dairy ERP client", long_about = None)]
pub(crate) struct Cli {
    /// API base URL
    #[arg(long, env = "DAIRY_ERP_API_URL", default_value = dairy_erp_client::config::DEFAULT_API_URL)]
    api_url: String,

    /// Path of the local session file
    #[arg(long, env = "DAIRY_ERP_SESSION_FILE", default_value = ".dairy-erp-session.json")]
    session_file: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Log in and store the session locally
    Login(session::LoginArgs),
    /// Clear the local session (best-effort server notification)
    Logout,
    /// Show the locally cached session user
    Whoami,
    Orders(orders::OrdersCommand),
    Invoices(invoices::InvoicesCommand),
    Products(products::ProductsCommand),
    Warehouse(warehouse::WarehouseCommand),
    Companies(companies::CompaniesCommand),
    Employees(employees::EmployeesCommand),
    Users(users::UsersCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        let mut client = ErpClient::new(
            ApiConfig::new(&self.api_url),
            Arc::new(FileStore::open(&self.session_file)),
        );
        client.on_session_expired(|| {
            eprintln!("session expired; run `dairy-erp login` to sign in again");
        });

        match self.command {
            Commands::Login(args) => session::login(&client, args).await,
            Commands::Logout => session::logout(&client).await,
            Commands::Whoami => session::whoami(&client),
            Commands::Orders(command) => orders::run(&client, command).await,
            Commands::Invoices(command) => invoices::run(&client, command).await,
            Commands::Products(command) => products::run(&client, command).await,
            Commands::Warehouse(command) => warehouse::run(&client, command).await,
            Commands::Companies(command) => companies::run(&client, command).await,
            Commands::Employees(command) => employees::run(&client, command).await,
            Commands::Users(command) => users::run(&client, command).await,
        }
    }
}
