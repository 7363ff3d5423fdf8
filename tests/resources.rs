//! Wire-format handling of the resource endpoints, through the full pipeline.

mod support;

use dairy_erp_client::{
    domain::{
        orders::OrderStatus,
        users::NewUser,
        warehouse::MovementType,
    },
    session::UserRole,
};
use testresult::TestResult;

use support::{REFRESHED_ACCESS, REFRESHED_REFRESH, ServerState, StubServer};

async fn authorized_setup() -> (StubServer, dairy_erp_client::client::ErpClient) {
    let server = StubServer::start(ServerState::new()).await;
    server.authorize(REFRESHED_ACCESS);
    let (client, _tokens) =
        support::seeded_client(&server.base_url, REFRESHED_ACCESS, REFRESHED_REFRESH);
    (server, client)
}

#[tokio::test]
async fn order_amounts_stay_decimal_strings() -> TestResult {
    let (_server, client) = authorized_setup().await;

    let orders = client.orders().list().await?;

    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].order_number, "ORD-2025-0007");
    assert_eq!(orders[0].status, OrderStatus::New);
    assert_eq!(orders[0].total_amount, "125.40");

    Ok(())
}

#[tokio::test]
async fn order_items_use_the_singular_envelope_key() -> TestResult {
    let (_server, client) = authorized_setup().await;

    let items = client.orders().items(7).await?;

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].product_name, "Milk 3.2%");
    assert_eq!(items[0].line_total, "25.00");

    Ok(())
}

#[tokio::test]
async fn movement_list_parses_the_server_envelope() -> TestResult {
    let (_server, client) = authorized_setup().await;

    let movements = client.warehouse().movements().await?;

    assert_eq!(movements.len(), 1);
    assert_eq!(movements[0].movement_type, MovementType::Dispatch);
    assert_eq!(movements[0].quantity_change, -10);
    assert_eq!(movements[0].related_order_id, Some(7));

    Ok(())
}

#[tokio::test]
async fn user_list_maps_status_to_the_active_flag() -> TestResult {
    let (_server, client) = authorized_setup().await;

    let users = client.users().list().await?;

    assert_eq!(users.len(), 1);
    assert_eq!(users[0].role, UserRole::Warehouse);
    assert!(!users[0].is_active);

    Ok(())
}

#[tokio::test]
async fn created_user_carries_a_placeholder_id() -> TestResult {
    let (_server, client) = authorized_setup().await;

    let created = client
        .users()
        .create(&NewUser {
            email: "new@dairy.example".to_string(),
            password: "secret123".to_string(),
            role: UserRole::Client,
            customer_company_id: Some(4),
            employee_id: None,
        })
        .await?;

    // The server answers 201 with no body; the id is not known yet.
    assert_eq!(created.id, 0);
    assert_eq!(created.email, "new@dairy.example");
    assert_eq!(created.customer_company_id, Some(4));

    Ok(())
}

#[tokio::test]
async fn company_status_splits_into_flags() -> TestResult {
    let (_server, client) = authorized_setup().await;

    let companies = client.companies().list().await?;

    assert_eq!(companies.len(), 1);
    assert_eq!(companies[0].name, "Mleko-Pol");
    assert!(!companies[0].is_active);
    assert!(companies[0].risk_flag);

    Ok(())
}

#[tokio::test]
async fn invoice_pdf_downloads_as_raw_bytes() -> TestResult {
    let (_server, client) = authorized_setup().await;

    let bytes = client.invoices().pdf(3).await?;

    assert!(bytes.starts_with(b"%PDF"));

    Ok(())
}
