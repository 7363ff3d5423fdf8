//! In-process stub of the ERP API for integration tests.

#![allow(dead_code)]

use std::{
    collections::HashSet,
    sync::{
        Arc, Mutex,
        atomic::{AtomicBool, AtomicU16, AtomicUsize, Ordering},
    },
    time::Duration,
};

use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use dairy_erp_client::{
    client::ErpClient,
    config::ApiConfig,
    session::{TokenPair, TokenStore},
    store::MemoryStore,
};
use serde_json::{Value, json};
use tokio::{net::TcpListener, sync::Barrier};

pub const INITIAL_ACCESS: &str = "access-1";
pub const INITIAL_REFRESH: &str = "refresh-1";
pub const REFRESHED_ACCESS: &str = "access-2";
pub const REFRESHED_REFRESH: &str = "refresh-2";

pub const EMAIL: &str = "staff@dairy.example";
pub const PASSWORD: &str = "correct-horse";

/// Behaviour knobs and counters shared with the running stub.
pub struct ServerState {
    /// Access tokens the protected routes accept.
    pub valid_access: Mutex<HashSet<String>>,
    pub refresh_calls: AtomicUsize,
    /// Whether the refresh endpoint honours a valid refresh token.
    pub refresh_succeeds: AtomicBool,
    /// Whether a successful refresh also makes the new token acceptable.
    /// Disabled to exercise the one-retry budget.
    pub accept_refreshed: AtomicBool,
    /// When set, unauthorized hits on `/orders` rendezvous here before the
    /// 401 goes out, so concurrent stale requests fail together.
    pub stale_barrier: Option<Barrier>,
    pub protected_calls: AtomicUsize,
    pub logout_calls: AtomicUsize,
    pub logout_status: AtomicU16,
}

impl ServerState {
    pub fn new() -> Self {
        Self {
            valid_access: Mutex::new(HashSet::new()),
            refresh_calls: AtomicUsize::new(0),
            refresh_succeeds: AtomicBool::new(true),
            accept_refreshed: AtomicBool::new(true),
            stale_barrier: None,
            protected_calls: AtomicUsize::new(0),
            logout_calls: AtomicUsize::new(0),
            logout_status: AtomicU16::new(200),
        }
    }
}

pub struct StubServer {
    pub base_url: String,
    pub state: Arc<ServerState>,
}

impl StubServer {
    pub async fn start(state: ServerState) -> Self {
        let state = Arc::new(state);
        let app = Router::new()
            .route("/api/v1/auth/login", post(login))
            .route("/api/v1/auth/refresh-token", post(refresh))
            .route("/api/v1/auth/logout", post(logout))
            .route("/api/v1/auth/register-company", post(register_company))
            .route("/api/v1/me", get(me))
            .route("/api/v1/orders", get(list_orders))
            .route("/api/v1/orders/{order_id}/items", get(order_items))
            .route("/api/v1/warehouse/movements", get(movements))
            .route("/api/v1/users", get(list_users).post(create_user))
            .route("/api/v1/companies", get(list_companies))
            .route("/api/v1/invoices/{invoice_id}/pdf", get(invoice_pdf))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("stub should bind an ephemeral port");
        let addr = listener.local_addr().expect("bound socket has an address");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("stub serve");
        });

        Self {
            base_url: format!("http://{addr}/api/v1"),
            state,
        }
    }

    /// Make the protected routes accept `token`.
    pub fn authorize(&self, token: &str) {
        self.state
            .valid_access
            .lock()
            .expect("stub state lock")
            .insert(token.to_string());
    }

    pub fn refresh_calls(&self) -> usize {
        self.state.refresh_calls.load(Ordering::SeqCst)
    }

    pub fn protected_calls(&self) -> usize {
        self.state.protected_calls.load(Ordering::SeqCst)
    }
}

/// Client over a fresh in-memory store pre-seeded with the given pair.
pub fn seeded_client(base_url: &str, access: &str, refresh: &str) -> (ErpClient, TokenStore) {
    let backing = Arc::new(MemoryStore::new());
    let tokens = TokenStore::new(backing.clone());
    tokens.save(&TokenPair {
        access_token: access.to_string(),
        refresh_token: refresh.to_string(),
    });

    (ErpClient::new(ApiConfig::new(base_url), backing), tokens)
}

/// Client over a fresh, empty in-memory store.
pub fn anonymous_client(base_url: &str) -> (ErpClient, TokenStore) {
    let backing = Arc::new(MemoryStore::new());
    let tokens = TokenStore::new(backing.clone());

    (ErpClient::new(ApiConfig::new(base_url), backing), tokens)
}

fn bearer(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

fn is_authorized(state: &ServerState, headers: &HeaderMap) -> bool {
    let Some(token) = bearer(headers) else {
        return false;
    };
    state
        .valid_access
        .lock()
        .expect("stub state lock")
        .contains(token)
}

async fn login(State(state): State<Arc<ServerState>>, Json(body): Json<Value>) -> Response {
    if body["email"] == EMAIL && body["password"] == PASSWORD {
        state
            .valid_access
            .lock()
            .expect("stub state lock")
            .insert(INITIAL_ACCESS.to_string());
        Json(json!({
            "accessToken": INITIAL_ACCESS,
            "refreshToken": INITIAL_REFRESH,
        }))
        .into_response()
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({"error": "invalid credentials"})),
        )
            .into_response()
    }
}

async fn refresh(State(state): State<Arc<ServerState>>, Json(body): Json<Value>) -> Response {
    state.refresh_calls.fetch_add(1, Ordering::SeqCst);

    // Long enough that every concurrent stale request joins the in-flight
    // exchange instead of starting its own.
    tokio::time::sleep(Duration::from_millis(50)).await;

    let honoured = state.refresh_succeeds.load(Ordering::SeqCst)
        && body["refreshToken"] == INITIAL_REFRESH;
    if !honoured {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({"error": "refresh token revoked"})),
        )
            .into_response();
    }

    if state.accept_refreshed.load(Ordering::SeqCst) {
        state
            .valid_access
            .lock()
            .expect("stub state lock")
            .insert(REFRESHED_ACCESS.to_string());
    }

    Json(json!({
        "accessToken": REFRESHED_ACCESS,
        "refreshToken": REFRESHED_REFRESH,
    }))
    .into_response()
}

async fn logout(State(state): State<Arc<ServerState>>) -> Response {
    state.logout_calls.fetch_add(1, Ordering::SeqCst);
    let status = StatusCode::from_u16(state.logout_status.load(Ordering::SeqCst))
        .unwrap_or(StatusCode::OK);
    status.into_response()
}

async fn register_company(Json(body): Json<Value>) -> Response {
    if body["taxId"] == "taken" {
        return (
            StatusCode::CONFLICT,
            Json(json!({"error": "tax id already registered"})),
        )
            .into_response();
    }
    StatusCode::CREATED.into_response()
}

async fn me(State(state): State<Arc<ServerState>>, headers: HeaderMap) -> Response {
    if !is_authorized(&state, &headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    Json(json!({
        "email": EMAIL,
        "role": "STAFF",
        "lastLoginAt": "2025-07-01T08:00:00Z",
        "employeeId": 3,
    }))
    .into_response()
}

async fn list_orders(State(state): State<Arc<ServerState>>, headers: HeaderMap) -> Response {
    state.protected_calls.fetch_add(1, Ordering::SeqCst);
    if !is_authorized(&state, &headers) {
        if let Some(barrier) = &state.stale_barrier {
            barrier.wait().await;
        }
        return StatusCode::UNAUTHORIZED.into_response();
    }
    Json(json!({
        "orders": [{
            "id": 7,
            "orderNumber": "ORD-2025-0007",
            "status": "NEW",
            "totalAmount": "125.40",
            "orderDate": "2025-07-01T10:00:00Z",
        }],
    }))
    .into_response()
}

async fn order_items(State(state): State<Arc<ServerState>>, headers: HeaderMap) -> Response {
    if !is_authorized(&state, &headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    Json(json!({
        "item": [{
            "id": 1,
            "productId": 2,
            "productName": "Milk 3.2%",
            "quantity": 10,
            "unitPrice": "2.50",
            "lineTotal": "25.00",
        }],
    }))
    .into_response()
}

async fn movements(State(state): State<Arc<ServerState>>, headers: HeaderMap) -> Response {
    if !is_authorized(&state, &headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    Json(json!({
        "stockMovements": [{
            "id": 11,
            "productId": 2,
            "quantityChange": -10,
            "movementType": "DISPATCH",
            "relatedOrderId": 7,
            "reason": "Order dispatch",
            "createdAt": "2025-07-01T10:05:00Z",
            "employeeId": 3,
        }],
    }))
    .into_response()
}

async fn list_users(State(state): State<Arc<ServerState>>, headers: HeaderMap) -> Response {
    if !is_authorized(&state, &headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    // The live server spells this envelope key with a capital U.
    Json(json!({
        "Users": [{
            "userId": 5,
            "email": "warehouse@dairy.example",
            "role": "WAREHOUSE",
            "status": "BLOCKED",
            "lastLoginAt": null,
        }],
    }))
    .into_response()
}

async fn create_user(State(state): State<Arc<ServerState>>, headers: HeaderMap) -> Response {
    if !is_authorized(&state, &headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    StatusCode::CREATED.into_response()
}

async fn list_companies(State(state): State<Arc<ServerState>>, headers: HeaderMap) -> Response {
    if !is_authorized(&state, &headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    Json(json!({
        "companies": [{
            "id": 4,
            "name": "Mleko-Pol",
            "taxId": "5261040828",
            "email": "office@mleko-pol.example",
            "phoneNumber": "+48 600 100 200",
            "orderCount": 17,
            "status": "AT_RISK",
            "registrationDate": "2024-03-12T00:00:00Z",
        }],
    }))
    .into_response()
}

async fn invoice_pdf(State(state): State<Arc<ServerState>>, headers: HeaderMap) -> Response {
    if !is_authorized(&state, &headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    // The bearer check above must pass alongside the caller's Accept header.
    let accept = headers
        .get(header::ACCEPT)
        .and_then(|value| value.to_str().ok());
    if accept != Some("application/pdf") {
        return StatusCode::NOT_ACCEPTABLE.into_response();
    }
    (
        [(header::CONTENT_TYPE, "application/pdf")],
        b"%PDF-1.7 stub".to_vec(),
    )
        .into_response()
}
