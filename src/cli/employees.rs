use clap::{Args, Subcommand};
use dairy_erp_client::client::ErpClient;

#[derive(Debug, Args)]
pub(crate) struct EmployeesCommand {
    #[command(subcommand)]
    command: Employees,
}

#[derive(Debug, Subcommand)]
enum Employees {
    /// List employees
    List,
    /// Show one employee
    Get { employee_id: i64 },
}

pub(crate) async fn run(client: &ErpClient, command: EmployeesCommand) -> Result<(), String> {
    match command.command {
        Employees::List => {
            let employees = client
                .employees()
                .list()
                .await
                .map_err(|error| error.to_string())?;
            for employee in employees {
                let flag = if employee.active { "" } else { " (inactive)" };
                println!(
                    "{}\t{} {}\t{}{flag}",
                    employee.id, employee.first_name, employee.last_name, employee.position
                );
            }
            Ok(())
        }
        Employees::Get { employee_id } => {
            let employee = client
                .employees()
                .get(employee_id)
                .await
                .map_err(|error| error.to_string())?;
            println!("name: {} {}", employee.first_name, employee.last_name);
            println!("position: {}", employee.position);
            println!("active: {}", employee.active);
            println!("hired: {}", employee.hired_at);
            Ok(())
        }
    }
}
