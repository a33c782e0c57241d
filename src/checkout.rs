//! Checkout
//!
//! Formats the cart into a human-readable order message and hands it to an
//! external channel (the storefront opens a messaging deep-link with it).
//! The contract with the cart is deliberately thin: read items and total,
//! clear only after the channel accepted the message.

use std::fmt::Write;

use rust_decimal::Decimal;
use rusty_money::{Money, iso::Currency};
use thiserror::Error;

use crate::{
    cart::Cart,
    items::{ItemKind, LineItem},
};

/// Errors raised during checkout handoff.
#[derive(Debug, Error, PartialEq)]
pub enum CheckoutError<E: std::error::Error + 'static> {
    /// The cart had no items; the channel is never opened for an empty order.
    #[error("cannot hand off an empty cart")]
    EmptyCart,

    /// The channel rejected the order message. The cart was left untouched.
    #[error("checkout channel rejected the order message")]
    Channel(#[source] E),
}

/// Build the order summary for the current cart contents.
///
/// Product lines come first, then service lines with the pet's name, one line
/// per slot, followed by the order total. Amounts are rounded and formatted
/// here, at the presentation boundary; the cart itself never rounds.
#[must_use]
pub fn order_summary(cart: &Cart, currency: &'static Currency) -> String {
    let mut message = String::from("New order:\n");

    let products: Vec<&LineItem> = cart
        .iter()
        .filter(|item| item.kind() == ItemKind::Product)
        .collect();

    let services: Vec<&LineItem> = cart
        .iter()
        .filter(|item| item.kind() == ItemKind::Service)
        .collect();

    if !products.is_empty() {
        _ = write!(message, "\nProducts:\n");

        for item in products {
            push_line(&mut message, item, currency);
        }
    }

    if !services.is_empty() {
        _ = write!(message, "\nServices:\n");

        for item in services {
            push_line(&mut message, item, currency);
        }
    }

    let total = Money::from_decimal(cart.total(), currency);
    _ = write!(message, "\nTotal: {total}");

    message
}

/// Hand the cart off to a checkout channel.
///
/// Builds the order summary, passes it to `send`, and clears the cart only
/// when the channel reports success. On failure the cart keeps its items so
/// the user can retry.
///
/// # Errors
///
/// Returns [`CheckoutError::EmptyCart`] for an empty cart, or
/// [`CheckoutError::Channel`] wrapping the channel's own error.
pub fn handoff<E: std::error::Error + 'static>(
    cart: &mut Cart,
    currency: &'static Currency,
    send: impl FnOnce(&str) -> Result<(), E>,
) -> Result<(), CheckoutError<E>> {
    if cart.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }

    let message = order_summary(cart, currency);

    send(&message).map_err(CheckoutError::Channel)?;
    cart.clear();

    Ok(())
}

fn push_line(message: &mut String, item: &LineItem, currency: &'static Currency) {
    let amount = Money::from_decimal(
        item.price() * Decimal::from(item.quantity()),
        currency,
    );

    match item.pet() {
        Some(pet) => {
            _ = writeln!(
                message,
                "{}x {} ({}) - {amount}",
                item.quantity(),
                item.name(),
                pet.name
            );
        }
        None => {
            _ = writeln!(message, "{}x {} - {amount}", item.quantity(), item.name());
        }
    }
}
