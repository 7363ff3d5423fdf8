use clap::{Args, Subcommand};
use dairy_erp_client::client::ErpClient;

#[derive(Debug, Args)]
pub(crate) struct CompaniesCommand {
    #[command(subcommand)]
    command: Companies,
}

#[derive(Debug, Subcommand)]
enum Companies {
    /// List customer companies
    List,
    /// Show one company and its addresses
    Get { company_id: i64 },
    /// Reactivate a company
    Activate { company_id: i64 },
    /// Deactivate a company
    Deactivate { company_id: i64 },
}

pub(crate) async fn run(client: &ErpClient, command: CompaniesCommand) -> Result<(), String> {
    let companies = client.companies();
    match command.command {
        Companies::List => {
            let list = companies.list().await.map_err(|error| error.to_string())?;
            for company in list {
                let mut flags = String::new();
                if !company.is_active {
                    flags.push_str(" inactive");
                }
                if company.risk_flag {
                    flags.push_str(" at-risk");
                }
                println!(
                    "{}\t{}\t{} orders{flags}",
                    company.id, company.name, company.order_count
                );
            }
            Ok(())
        }
        Companies::Get { company_id } => {
            let company = companies
                .get(company_id)
                .await
                .map_err(|error| error.to_string())?;
            println!("name: {}", company.name);
            println!("tax id: {}", company.tax_id);
            println!("email: {}", company.main_email);
            if let Some(phone) = &company.phone {
                println!("phone: {phone}");
            }
            println!("active: {}", company.is_active);
            println!("at risk: {}", company.risk_flag);

            let addresses = companies
                .addresses(company_id)
                .await
                .map_err(|error| error.to_string())?;
            for address in addresses {
                println!(
                    "{:?} address: {}, {} {}, {}",
                    address.kind,
                    address.address_line,
                    address.postal_code,
                    address.city,
                    address.country
                );
            }
            Ok(())
        }
        Companies::Activate { company_id } => {
            companies
                .activate(company_id)
                .await
                .map_err(|error| error.to_string())?;
            println!("company {company_id} activated");
            Ok(())
        }
        Companies::Deactivate { company_id } => {
            companies
                .deactivate(company_id)
                .await
                .map_err(|error| error.to_string())?;
            println!("company {company_id} deactivated");
            Ok(())
        }
    }
}
