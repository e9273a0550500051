//! Customer route handlers.
//!
//! The customer flow accumulates items in the session and commits them as
//! one order row on confirmation. The session walks
//! shop selection -> ordering -> submitted; after a submission the item
//! list is empty again, so the next add starts a fresh order for the same
//! shop and customer.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use orderdesk_core::{CustomerName, ItemList, ShopId};

use crate::db::OrderRepository;
use crate::error::AppError;
use crate::filters;
use crate::middleware::{session_state, set_session_state};
use crate::models::SessionState;
use crate::state::AppState;

// =============================================================================
// Form Types
// =============================================================================

/// Start order form data.
#[derive(Debug, Deserialize)]
pub struct StartOrderForm {
    pub shop_id: Option<String>,
    pub customer_name: Option<String>,
}

/// Add item form data.
#[derive(Debug, Deserialize)]
pub struct AddItemForm {
    pub item: Option<String>,
}

// =============================================================================
// Templates
// =============================================================================

/// Shop/name selection page template.
#[derive(Template, WebTemplate)]
#[template(path = "customer/select_shop.html")]
pub struct SelectShopTemplate;

/// Current order page template.
#[derive(Template, WebTemplate)]
#[template(path = "customer/order.html")]
pub struct OrderTemplate {
    pub shop_id: ShopId,
    pub customer_name: CustomerName,
    pub items: Vec<String>,
}

/// Order placed confirmation template.
#[derive(Template, WebTemplate)]
#[template(path = "customer/order_placed.html")]
pub struct OrderPlacedTemplate {
    pub shop_id: ShopId,
    pub customer_name: CustomerName,
}

// =============================================================================
// Handlers
// =============================================================================

/// Display the shop/name selection form.
pub async fn select_shop() -> impl IntoResponse {
    SelectShopTemplate
}

/// Start a new customer session for a shop.
///
/// Rejects empty or whitespace-only fields with a 400; otherwise stores the
/// shop and name in the session with an empty item list.
#[instrument(skip(session))]
pub async fn start_order(
    session: Session,
    Form(form): Form<StartOrderForm>,
) -> Result<Redirect, AppError> {
    let shop_id = ShopId::parse(form.shop_id.as_deref().unwrap_or_default())?;
    let customer_name = CustomerName::parse(form.customer_name.as_deref().unwrap_or_default())?;

    set_session_state(
        &session,
        &SessionState::CustomerOrdering {
            shop_id: shop_id.clone(),
            customer_name,
            items: Vec::new(),
        },
    )
    .await?;

    tracing::info!(shop_id = %shop_id, "customer started ordering");
    Ok(Redirect::to("/customer/order"))
}

/// Display the current order.
///
/// Without a customer session this redirects to shop selection rather than
/// erroring.
pub async fn order_page(session: Session) -> Result<Response, AppError> {
    match session_state(&session).await? {
        SessionState::CustomerOrdering {
            shop_id,
            customer_name,
            items,
        } => Ok(OrderTemplate {
            shop_id,
            customer_name,
            items,
        }
        .into_response()),
        _ => Ok(Redirect::to("/customer").into_response()),
    }
}

/// Append an item to the in-progress order.
///
/// Whitespace-only items are silently ignored; outside an active customer
/// session this is a no-op redirect.
#[instrument(skip(session))]
pub async fn add_item(
    session: Session,
    Form(form): Form<AddItemForm>,
) -> Result<Redirect, AppError> {
    let item = form.item.as_deref().unwrap_or_default().trim();

    if !item.is_empty() {
        if let SessionState::CustomerOrdering {
            shop_id,
            customer_name,
            mut items,
        } = session_state(&session).await?
        {
            items.push(item.to_owned());
            set_session_state(
                &session,
                &SessionState::CustomerOrdering {
                    shop_id,
                    customer_name,
                    items,
                },
            )
            .await?;
        }
    }

    Ok(Redirect::to("/customer/order"))
}

/// Submit the in-progress order.
///
/// An empty order is not an error: the customer is sent back to the order
/// page and nothing is stored. On success the session keeps the shop and
/// name but its item list is emptied.
#[instrument(skip(state, session))]
pub async fn confirm_order(
    State(state): State<AppState>,
    session: Session,
) -> Result<Response, AppError> {
    match session_state(&session).await? {
        SessionState::CustomerOrdering {
            shop_id,
            customer_name,
            items,
        } => {
            let Ok(items) = ItemList::new(items) else {
                return Ok(Redirect::to("/customer/order").into_response());
            };

            let order_id = OrderRepository::new(state.pool())
                .create(&shop_id, &customer_name, &items)
                .await?;
            tracing::info!(%order_id, shop_id = %shop_id, "order placed");

            set_session_state(
                &session,
                &SessionState::CustomerOrdering {
                    shop_id: shop_id.clone(),
                    customer_name: customer_name.clone(),
                    items: Vec::new(),
                },
            )
            .await?;

            Ok(OrderPlacedTemplate {
                shop_id,
                customer_name,
            }
            .into_response())
        }
        _ => Ok(Redirect::to("/customer").into_response()),
    }
}

/// Discard the in-progress order, keeping the shop and name.
#[instrument(skip(session))]
pub async fn cancel_order(session: Session) -> Result<Redirect, AppError> {
    if let SessionState::CustomerOrdering {
        shop_id,
        customer_name,
        ..
    } = session_state(&session).await?
    {
        set_session_state(
            &session,
            &SessionState::CustomerOrdering {
                shop_id,
                customer_name,
                items: Vec::new(),
            },
        )
        .await?;
    }

    Ok(Redirect::to("/customer/order"))
}
