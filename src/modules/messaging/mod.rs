//! Outbound messaging deep-links
//!
//! Builds `wa.me` links that open a chat with the seller pre-filled with a
//! message about a book. Nothing is sent from the server.

mod whatsapp;

pub use whatsapp::{contact_url, format_price, inquiry_message};
