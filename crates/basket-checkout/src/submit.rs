//! Order submission.

use basket_cache::KvBackend;
use basket_cart::store::CartStore;
use thiserror::Error;
use tracing::{info, instrument, warn};

use crate::customer::Customer;
use crate::order::OrderRequest;
use crate::transport::{OrderTransport, TransportError};

/// Shown when required details or items are missing.
pub const VALIDATION_MESSAGE: &str = "Please fill in your details and add items to your cart.";
/// Shown after the endpoint accepts the order.
pub const SUCCESS_MESSAGE: &str = "Order sent successfully! You will receive an email shortly.";
/// Shown when the cart total is too large to submit.
pub const TOTAL_MESSAGE: &str = "The cart total is too large. Please adjust the quantities.";
/// Shown when the endpoint rejects the order without saying why.
pub const REJECTED_MESSAGE: &str = "Could not submit the order.";
/// Shown when the endpoint could not be reached or replied with garbage.
pub const CONNECTION_MESSAGE: &str = "Connection error. Please try again shortly.";

/// Why a submission did not go through. The cart is untouched in every case.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// Required data missing; nothing was sent.
    #[error("Missing required order data: {}", missing.join(", "))]
    Validation { missing: Vec<&'static str> },

    /// The cart total is not a finite number and cannot be sent as JSON.
    #[error("Order total out of range: {total}")]
    InvalidTotal { total: f64 },

    /// The endpoint answered `ok: false`.
    #[error("Order rejected: {}", message.as_deref().unwrap_or("no reason given"))]
    Rejected { message: Option<String> },

    /// The request failed or the reply was unreadable.
    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl SubmitError {
    /// Message to surface to the user.
    pub fn user_message(&self) -> String {
        match self {
            SubmitError::Validation { .. } => VALIDATION_MESSAGE.to_string(),
            SubmitError::InvalidTotal { .. } => TOTAL_MESSAGE.to_string(),
            SubmitError::Rejected { message } => message
                .clone()
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| REJECTED_MESSAGE.to_string()),
            SubmitError::Transport(_) => CONNECTION_MESSAGE.to_string(),
        }
    }
}

/// Result of an accepted submission.
#[derive(Debug, Clone)]
pub struct Submitted {
    /// The order that was sent.
    pub order: OrderRequest,
    /// Message returned by the endpoint, if any.
    pub server_message: Option<String>,
    /// Whether the cart was emptied afterwards. Only `false` if the storage
    /// write failed.
    pub cart_cleared: bool,
}

impl Submitted {
    /// Message to surface to the user.
    pub fn user_message(&self) -> &'static str {
        SUCCESS_MESSAGE
    }
}

/// Sends the persisted cart as an order.
#[derive(Debug)]
pub struct OrderSubmitter<T: OrderTransport> {
    transport: T,
}

impl<T: OrderTransport> OrderSubmitter<T> {
    /// Create a submitter over a transport.
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Borrow the transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Validate and send the cart in `store` for `customer`.
    ///
    /// Nothing is sent if the name or email is empty or the cart is empty.
    /// The request is sent once; on `ok: true` the cart is cleared, on any
    /// failure it is left as it was.
    #[instrument(skip_all, fields(key = store.key()))]
    pub async fn submit<B: KvBackend>(
        &self,
        store: &CartStore<B>,
        customer: Customer,
    ) -> Result<Submitted, SubmitError> {
        let cart = store.load();

        let mut missing = customer.missing_fields();
        if cart.is_empty() {
            missing.push("items");
        }
        if !missing.is_empty() {
            info!(?missing, "order not sent");
            return Err(SubmitError::Validation { missing });
        }

        let order = OrderRequest::new(customer, cart);
        if !order.total.is_finite() {
            warn!(total = order.total, "order not sent");
            return Err(SubmitError::InvalidTotal { total: order.total });
        }
        info!(lines = order.items.len(), total = order.total, "sending order");

        let ack = match self.transport.send(&order).await {
            Ok(ack) => ack,
            Err(e) => {
                warn!(error = %e, "order transport failed");
                return Err(e.into());
            }
        };

        if !ack.ok {
            warn!(message = ?ack.message, "order rejected");
            return Err(SubmitError::Rejected {
                message: ack.message,
            });
        }

        let cart_cleared = match store.clear() {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "order accepted but cart could not be cleared");
                false
            }
        };
        info!("order accepted");

        Ok(Submitted {
            order,
            server_message: ack.message,
            cart_cleared,
        })
    }
}
