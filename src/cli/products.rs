use clap::{Args, Subcommand};
use dairy_erp_client::client::ErpClient;

#[derive(Debug, Args)]
pub(crate) struct ProductsCommand {
    #[command(subcommand)]
    command: Products,
}

#[derive(Debug, Subcommand)]
enum Products {
    /// List products
    List,
    /// Show one product
    Get { product_id: i64 },
    /// Reactivate a product
    Activate { product_id: i64 },
    /// Retire a product from the catalogue
    Deactivate { product_id: i64 },
}

pub(crate) async fn run(client: &ErpClient, command: ProductsCommand) -> Result<(), String> {
    match command.command {
        Products::List => {
            let products = client
                .products()
                .list()
                .await
                .map_err(|error| error.to_string())?;
            for product in products {
                let flag = if product.is_active { "" } else { " (inactive)" };
                println!(
                    "{}\t{}\t{} {}\t{}{flag}",
                    product.id, product.name, product.default_price, product.unit, product.category
                );
            }
            Ok(())
        }
        Products::Get { product_id } => {
            let product = client
                .products()
                .get(product_id)
                .await
                .map_err(|error| error.to_string())?;
            println!("name: {}", product.name);
            println!("category: {}", product.category);
            println!("price: {} per {}", product.default_price, product.unit);
            println!("active: {}", product.is_active);
            println!("stock: {} (min {})", product.quantity, product.min_quantity);
            if product.is_low {
                println!("stock is below the reorder threshold");
            }
            Ok(())
        }
        Products::Activate { product_id } => {
            client
                .products()
                .activate(product_id)
                .await
                .map_err(|error| error.to_string())?;
            println!("product {product_id} activated");
            Ok(())
        }
        Products::Deactivate { product_id } => {
            client
                .products()
                .deactivate(product_id)
                .await
                .map_err(|error| error.to_string())?;
            println!("product {product_id} deactivated");
            Ok(())
        }
    }
}
