use rust_decimal::{Decimal, RoundingStrategy};
use uuid::Uuid;

use crate::shared::locale::Language;

const WHATSAPP_BASE_URL: &str = "https://wa.me";

/// Deep-link opening a chat with `phone` pre-filled with `message`.
///
/// Formatting characters in the phone number (`+`, spaces, dashes) are
/// dropped since `wa.me` only accepts digits.
pub fn contact_url(phone: &str, message: &str) -> String {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();
    format!(
        "{}/{}?text={}",
        WHATSAPP_BASE_URL,
        digits,
        urlencoding::encode(message)
    )
}

/// `"{price:.2} {currency}"`, e.g. `"120.00 MAD"`
pub fn format_price(price: Decimal, currency: &str) -> String {
    let rounded = price.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.2} {}", rounded, currency)
}

/// Pre-filled inquiry about a book, in the visitor's language.
///
/// Carries the product id so the seller can tell which listing a chat is about.
pub fn inquiry_message(language: Language, title: &str, product_id: Uuid, price: &str) -> String {
    match language {
        Language::Fr => format!(
            "Bonjour, je suis intéressé(e) par ce livre : {} ({}) - Prix : {}",
            title, product_id, price
        ),
        Language::En => format!(
            "Hello, I am interested in this book: {} ({}) - Price: {}",
            title, product_id, price
        ),
        Language::Ar => format!(
            "مرحبا، أنا مهتم بهذا الكتاب: {} ({}) - السعر: {}",
            title, product_id, price
        ),
    }
}
