use std::path::PathBuf;

use clap::{Args, Subcommand};
use dairy_erp_client::{client::ErpClient, domain::invoices::InvoiceStatus};

#[derive(Debug, Args)]
pub(crate) struct InvoicesCommand {
    #[command(subcommand)]
    command: Invoices,
}

#[derive(Debug, Subcommand)]
enum Invoices {
    /// List invoices visible to the current user
    List,
    /// Show one invoice
    Get { invoice_id: i64 },
    /// Download an invoice PDF
    Pdf {
        invoice_id: i64,
        /// Where to write the PDF
        #[arg(long)]
        out: PathBuf,
    },
    /// Create an invoice for an order
    Create { order_id: i64 },
    /// Mark an invoice paid
    MarkPaid { invoice_id: i64 },
}

pub(crate) async fn run(client: &ErpClient, command: InvoicesCommand) -> Result<(), String> {
    match command.command {
        Invoices::List => {
            let invoices = client
                .invoices()
                .list()
                .await
                .map_err(|error| error.to_string())?;
            for invoice in invoices {
                println!(
                    "{}\t{}\t{:?}\t{}",
                    invoice.id, invoice.invoice_number, invoice.status, invoice.total_amount
                );
            }
            Ok(())
        }
        Invoices::Get { invoice_id } => {
            let invoice = client
                .invoices()
                .get(invoice_id)
                .await
                .map_err(|error| error.to_string())?;
            println!("number: {}", invoice.invoice_number);
            println!("order: {}", invoice.order_id);
            println!("status: {:?}", invoice.status);
            println!("total: {}", invoice.total_amount);
            println!("issued: {}", invoice.issue_date);
            println!("due: {}", invoice.due_date);
            Ok(())
        }
        Invoices::Pdf { invoice_id, out } => {
            let bytes = client
                .invoices()
                .pdf(invoice_id)
                .await
                .map_err(|error| error.to_string())?;
            std::fs::write(&out, bytes).map_err(|error| error.to_string())?;
            println!("wrote {}", out.display());
            Ok(())
        }
        Invoices::Create { order_id } => {
            let invoice = client
                .invoices()
                .create_for_order(order_id)
                .await
                .map_err(|error| error.to_string())?;
            println!("created invoice {} ({})", invoice.id, invoice.invoice_number);
            Ok(())
        }
        Invoices::MarkPaid { invoice_id } => {
            client
                .invoices()
                .update_status(invoice_id, InvoiceStatus::Paid)
                .await
                .map_err(|error| error.to_string())?;
            println!("invoice {invoice_id} marked paid");
            Ok(())
        }
    }
}
