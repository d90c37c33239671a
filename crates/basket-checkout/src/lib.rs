//! Order submission for Basket carts.
//!
//! This crate provides:
//! - `Customer` - Contact details entered at checkout
//! - `OrderRequest` / `OrderAck` - Wire types for the order endpoint
//! - `OrderTransport` - Seam for sending an order, with `HttpTransport` as
//!   the real implementation
//! - `OrderSubmitter` - Validates, sends once, and clears the cart on an
//!   acknowledged success
//!
//! # Example
//!
//! ```rust,ignore
//! use basket_checkout::{Customer, HttpTransport, OrderSubmitter, SubmitConfig};
//!
//! let transport = HttpTransport::new(&SubmitConfig::default())?;
//! let submitter = OrderSubmitter::new(transport);
//!
//! let customer = Customer::new("Ana", "ana@example.com", None);
//! match submitter.submit(&store, customer).await {
//!     Ok(done) => println!("{}", done.user_message()),
//!     Err(e) => eprintln!("{}", e.user_message()),
//! }
//! ```

mod customer;
mod order;
mod submit;
mod transport;

pub use customer::*;
pub use order::*;
pub use submit::*;
pub use transport::*;
