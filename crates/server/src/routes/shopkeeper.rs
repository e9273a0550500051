//! Shopkeeper route handlers.
//!
//! Login accepts any non-empty shop id; there is no credential check in
//! this trust model. The confirm action authorizes the supplied shop id
//! against the session only — it does not consult the order's own shop
//! (see DESIGN.md).

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use orderdesk_core::{OrderId, ShopId};

use crate::db::OrderRepository;
use crate::error::AppError;
use crate::filters;
use crate::middleware::{RequireShopkeeper, clear_session_state, session_state, set_session_state};
use crate::models::{Order, SessionState};
use crate::state::AppState;

// =============================================================================
// Form Types
// =============================================================================

/// Login form data.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub shop_id: Option<String>,
}

/// Confirm order form data.
#[derive(Debug, Deserialize)]
pub struct ConfirmOrderForm {
    pub order_id: Option<String>,
    pub shop_id: Option<String>,
}

// =============================================================================
// View Types
// =============================================================================

/// Order display data for the dashboard template.
#[derive(Clone)]
pub struct OrderView {
    pub id: OrderId,
    pub customer_name: String,
    pub items: Vec<String>,
}

impl From<Order> for OrderView {
    fn from(order: Order) -> Self {
        Self {
            id: order.id,
            customer_name: order.customer_name.into_inner(),
            items: order.items.into_inner(),
        }
    }
}

// =============================================================================
// Templates
// =============================================================================

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "shopkeeper/login.html")]
pub struct LoginTemplate;

/// Dashboard template with pending and confirmed order groups.
#[derive(Template, WebTemplate)]
#[template(path = "shopkeeper/dashboard.html")]
pub struct DashboardTemplate {
    pub shop_id: ShopId,
    pub pending: Vec<OrderView>,
    pub confirmed: Vec<OrderView>,
}

// =============================================================================
// Handlers
// =============================================================================

/// Display the login form.
pub async fn login_page() -> impl IntoResponse {
    LoginTemplate
}

/// Log in to a shop.
///
/// Any non-empty shop id is accepted; empty input is a 400.
#[instrument(skip(session))]
pub async fn login(session: Session, Form(form): Form<LoginForm>) -> Result<Redirect, AppError> {
    let shop_id = ShopId::parse(form.shop_id.as_deref().unwrap_or_default())?;

    set_session_state(
        &session,
        &SessionState::ShopkeeperAuthenticated {
            shop_id: shop_id.clone(),
        },
    )
    .await?;

    tracing::info!(shop_id = %shop_id, "shopkeeper logged in");
    Ok(Redirect::to("/shopkeeper/orders"))
}

/// Display the dashboard: the shop's orders split into pending and
/// confirmed groups, each newest first.
pub async fn orders(
    State(state): State<AppState>,
    RequireShopkeeper(shop_id): RequireShopkeeper,
) -> Result<DashboardTemplate, AppError> {
    let orders = OrderRepository::new(state.pool())
        .list_by_shop(&shop_id)
        .await?;

    // partition keeps the newest-first order within each group
    let (pending, confirmed): (Vec<Order>, Vec<Order>) =
        orders.into_iter().partition(|o| o.status.is_pending());

    Ok(DashboardTemplate {
        shop_id,
        pending: pending.into_iter().map(OrderView::from).collect(),
        confirmed: confirmed.into_iter().map(OrderView::from).collect(),
    })
}

/// Confirm a pending order.
///
/// Both fields are required; the supplied shop id must match the session's
/// shop. The target order's own shop is intentionally not checked — this
/// mirrors the documented trust model (DESIGN.md).
#[instrument(skip(state, session))]
pub async fn confirm_order(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<ConfirmOrderForm>,
) -> Result<Redirect, AppError> {
    let order_id = form
        .order_id
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::Validation("order id is required".to_owned()))?;
    let supplied_shop = ShopId::parse(form.shop_id.as_deref().unwrap_or_default())
        .map_err(|_| AppError::Validation("shop id is required".to_owned()))?;
    let order_id = order_id
        .parse::<i64>()
        .map(OrderId::new)
        .map_err(|_| AppError::Validation(format!("invalid order id: {order_id}")))?;

    match session_state(&session).await? {
        SessionState::ShopkeeperAuthenticated { shop_id } if shop_id == supplied_shop => {}
        _ => {
            return Err(AppError::Forbidden(
                "not authorized for this shop".to_owned(),
            ));
        }
    }

    OrderRepository::new(state.pool()).confirm(order_id).await?;
    tracing::info!(%order_id, shop_id = %supplied_shop, "order confirmed");

    Ok(Redirect::to("/shopkeeper/orders"))
}

/// Log out and return to the login form.
#[instrument(skip(session))]
pub async fn logout(session: Session) -> Result<Redirect, AppError> {
    clear_session_state(&session).await?;
    Ok(Redirect::to("/shopkeeper"))
}
