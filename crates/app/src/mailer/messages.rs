//! Email message builders.

use std::fmt::Write as _;

use crate::{auth::OTP_TTL_MINUTES, domain::orders::models::Order, mailer::EmailMessage};

/// Render the login-code email.
#[must_use]
pub fn otp_email(to: &str, recipient_name: &str, code: &str) -> EmailMessage {
    let text = format!(
        "Hi {recipient_name},\n\nYour KORE login code is {code}. \
         It expires in {OTP_TTL_MINUTES} minutes.\n\n\
         For your security, never share this code with anyone.\n\n— KORE"
    );

    let html = format!(
        "<p>Hi <strong>{recipient_name}</strong>,</p>\
         <p>Your KORE login code is:</p>\
         <p style=\"font-size:28px;letter-spacing:6px\"><strong>{code}</strong></p>\
         <p>It expires in {OTP_TTL_MINUTES} minutes. \
         For your security, never share this code with anyone.</p>\
         <p>— KORE</p>"
    );

    EmailMessage {
        to: to.to_string(),
        subject: "KORE – Your One-Time Password (OTP)".to_string(),
        text,
        html,
    }
}

/// Render the order-confirmation email.
#[must_use]
pub fn order_confirmation_email(to: &str, recipient_name: &str, order: &Order) -> EmailMessage {
    let mut text_lines = String::new();
    let mut html_rows = String::new();

    for item in &order.items {
        let line_total = item.price * rust_decimal::Decimal::from(item.quantity);

        let _ = writeln!(
            text_lines,
            "- {} x {} = ${line_total:.2}",
            item.name, item.quantity
        );
        let _ = write!(
            html_rows,
            "<tr><td>{}</td><td>{}</td><td>${line_total:.2}</td></tr>",
            item.name, item.quantity
        );
    }

    let text = format!(
        "Hi {recipient_name},\n\nThank you for your order on KORE.\n\n\
         Order ID: {}\nTotal: ${:.2}\n\nItems:\n{text_lines}\n— KORE",
        order.uuid, order.total
    );

    let html = format!(
        "<p>Hi <strong>{recipient_name}</strong>, thanks for ordering with \
         <strong>KORE</strong>! Your order has been placed successfully.</p>\
         <p><strong>Order ID:</strong> {}<br/><strong>Total:</strong> ${:.2}</p>\
         <table><thead><tr><th>Item</th><th>Qty</th><th>Price</th></tr></thead>\
         <tbody>{html_rows}</tbody></table>\
         <p>— KORE</p>",
        order.uuid, order.total
    );

    EmailMessage {
        to: to.to_string(),
        subject: "KORE – Order Confirmation".to_string(),
        text,
        html,
    }
}
