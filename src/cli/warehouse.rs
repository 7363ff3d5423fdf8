use clap::{Args, Subcommand};
use dairy_erp_client::{
    client::ErpClient,
    domain::warehouse::{NewMovement, NewReturnMovement, StockUpdate},
};

#[derive(Debug, Args)]
pub(crate) struct WarehouseCommand {
    #[command(subcommand)]
    command: Warehouse,
}

#[derive(Debug, Subcommand)]
enum Warehouse {
    /// Show stock levels for all products
    Stock,
    /// Change the reorder threshold of one product
    SetMinimum { product_id: i64, min_quantity: i32 },
    /// List recorded stock movements
    Movements,
    /// Record goods arriving
    Inbound(MovementArgs),
    /// Record goods leaving for an order
    Dispatch(MovementArgs),
    /// Record goods written off
    Loss(MovementArgs),
    /// Record goods returned from an order
    Return {
        product_id: i64,
        quantity: i32,
        #[arg(long)]
        order_id: i64,
        #[arg(long, default_value = "Customer return")]
        reason: String,
    },
}

#[derive(Debug, Args)]
struct MovementArgs {
    product_id: i64,
    quantity: i32,
    #[arg(long, default_value = "Stock correction")]
    reason: String,
}

pub(crate) async fn run(client: &ErpClient, command: WarehouseCommand) -> Result<(), String> {
    let warehouse = client.warehouse();
    match command.command {
        Warehouse::Stock => {
            let stocks = warehouse.stock().await.map_err(|error| error.to_string())?;
            for stock in stocks {
                let flag = if stock.is_low { " LOW" } else { "" };
                println!(
                    "{}\t{}\t{} (min {}){flag}",
                    stock.product_id, stock.product_name, stock.quantity, stock.min_quantity
                );
            }
            Ok(())
        }
        Warehouse::SetMinimum {
            product_id,
            min_quantity,
        } => {
            warehouse
                .update_stock(product_id, &StockUpdate { min_quantity })
                .await
                .map_err(|error| error.to_string())?;
            println!("minimum for product {product_id} set to {min_quantity}");
            Ok(())
        }
        Warehouse::Movements => {
            let movements = warehouse
                .movements()
                .await
                .map_err(|error| error.to_string())?;
            for movement in movements {
                println!(
                    "{}\t{:?}\tproduct {}\t{:+}\t{}",
                    movement.created_at,
                    movement.movement_type,
                    movement.product_id,
                    movement.quantity_change,
                    movement.reason.unwrap_or_default()
                );
            }
            Ok(())
        }
        Warehouse::Inbound(args) => {
            let movement = warehouse
                .inbound(&new_movement(args))
                .await
                .map_err(|error| error.to_string())?;
            println!("recorded movement {}", movement.id);
            Ok(())
        }
        Warehouse::Dispatch(args) => {
            let movement = warehouse
                .dispatch(&new_movement(args))
                .await
                .map_err(|error| error.to_string())?;
            println!("recorded movement {}", movement.id);
            Ok(())
        }
        Warehouse::Loss(args) => {
            let movement = warehouse
                .loss(&new_movement(args))
                .await
                .map_err(|error| error.to_string())?;
            println!("recorded movement {}", movement.id);
            Ok(())
        }
        Warehouse::Return {
            product_id,
            quantity,
            order_id,
            reason,
        } => {
            let movement = warehouse
                .record_return(&NewReturnMovement {
                    product_id,
                    quantity,
                    order_id,
                    reason,
                })
                .await
                .map_err(|error| error.to_string())?;
            println!("recorded movement {}", movement.id);
            Ok(())
        }
    }
}

fn new_movement(args: MovementArgs) -> NewMovement {
    NewMovement {
        product_id: args.product_id,
        quantity: args.quantity,
        reason: args.reason,
    }
}
