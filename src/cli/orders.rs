use clap::{Args, Subcommand};
use dairy_erp_client::{
    client::ErpClient,
    domain::orders::{NewOrderItem, OrderStatus},
};

#[derive(Debug, Args)]
pub(crate) struct OrdersCommand {
    #[command(subcommand)]
    command: Orders,
}

#[derive(Debug, Subcommand)]
enum Orders {
    /// List orders visible to the current user
    List,
    /// Show one order
    Get { order_id: i64 },
    /// Show the line items of one order
    Items { order_id: i64 },
    /// Place an order from product_id:quantity pairs
    Create {
        #[arg(required = true, value_name = "PRODUCT_ID:QUANTITY")]
        items: Vec<String>,
    },
    /// Move an order to a new status
    SetStatus { order_id: i64, status: String },
}

pub(crate) async fn run(client: &ErpClient, command: OrdersCommand) -> Result<(), String> {
    match command.command {
        Orders::List => {
            let orders = client
                .orders()
                .list()
                .await
                .map_err(|error| error.to_string())?;
            for order in orders {
                println!(
                    "{}\t{}\t{:?}\t{}",
                    order.id, order.order_number, order.status, order.total_amount
                );
            }
            Ok(())
        }
        Orders::Get { order_id } => {
            let order = client
                .orders()
                .get(order_id)
                .await
                .map_err(|error| error.to_string())?;
            println!("number: {}", order.order_number);
            println!("status: {:?}", order.status);
            println!("total: {}", order.total_amount);
            println!("date: {}", order.order_date);
            Ok(())
        }
        Orders::Items { order_id } => {
            let items = client
                .orders()
                .items(order_id)
                .await
                .map_err(|error| error.to_string())?;
            for item in items {
                println!(
                    "{}\t{}\tx{}\t{}",
                    item.product_id, item.product_name, item.quantity, item.unit_price
                );
            }
            Ok(())
        }
        Orders::Create { items } => {
            let items = items
                .iter()
                .map(|raw| parse_item(raw))
                .collect::<Result<Vec<_>, _>>()?;
            let order = client
                .orders()
                .create(&items)
                .await
                .map_err(|error| error.to_string())?;
            println!("created order {} ({})", order.id, order.order_number);
            Ok(())
        }
        Orders::SetStatus { order_id, status } => {
            let status = parse_status(&status)?;
            client
                .orders()
                .update_status(order_id, status)
                .await
                .map_err(|error| error.to_string())?;
            println!("order {order_id} updated");
            Ok(())
        }
    }
}

fn parse_item(raw: &str) -> Result<NewOrderItem, String> {
    let (product_id, quantity) = raw
        .split_once(':')
        .ok_or_else(|| format!("expected PRODUCT_ID:QUANTITY, got {raw}"))?;
    Ok(NewOrderItem {
        product_id: product_id
            .parse()
            .map_err(|_| format!("invalid product id: {product_id}"))?,
        quantity: quantity
            .parse()
            .map_err(|_| format!("invalid quantity: {quantity}"))?,
    })
}

fn parse_status(raw: &str) -> Result<OrderStatus, String> {
    match raw.to_ascii_uppercase().as_str() {
        "NEW" => Ok(OrderStatus::New),
        "IN_PREPARATION" => Ok(OrderStatus::InPreparation),
        "SHIPPED" => Ok(OrderStatus::Shipped),
        "INVOICED" => Ok(OrderStatus::Invoiced),
        "CANCELLED" => Ok(OrderStatus::Cancelled),
        other => Err(format!("unknown order status: {other}")),
    }
}
