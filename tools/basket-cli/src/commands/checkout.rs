//! Order submission.

use anyhow::{anyhow, Result};
use basket_checkout::{Customer, HttpTransport, OrderSubmitter};
use serde_json::json;

use super::CheckoutArgs;
use crate::context::Context;

/// Submit the cart as an order.
pub async fn run(args: CheckoutArgs, ctx: &Context) -> Result<()> {
    let store = ctx.store()?;

    let mut submit_config = ctx.config.submit_config();
    if let Some(endpoint) = args.endpoint {
        submit_config.endpoint = endpoint;
    }
    let transport = HttpTransport::new(&submit_config)?;
    ctx.output
        .debug(&format!("Posting order to {}", transport.endpoint()));

    let customer = Customer::new(&args.name, &args.email, args.phone.as_deref());
    let submitter = OrderSubmitter::new(transport);

    let spinner = ctx.output.spinner("Sending order...");
    let result = submitter.submit(&store, customer).await;
    spinner.finish_and_clear();

    match result {
        Ok(done) => {
            if ctx.output.is_json() {
                ctx.output.json(&json!({
                    "ok": true,
                    "message": done.server_message,
                    "total": done.order.total,
                    "cart_cleared": done.cart_cleared,
                }));
            } else {
                ctx.output.success(done.user_message());
                if let Some(ref message) = done.server_message {
                    ctx.output.kv("server", message);
                }
            }
            if !done.cart_cleared {
                ctx.output
                    .warn("The order was accepted but the cart could not be cleared.");
            }
            Ok(())
        }
        Err(e) => {
            ctx.output.debug(&e.to_string());
            Err(anyhow!(e.user_message()))
        }
    }
}
