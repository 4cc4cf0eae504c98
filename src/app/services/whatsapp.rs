use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::app::domain::menu::MenuCatalog;
use crate::app::domain::order::OrderSummary;

/// Characters that survive `encodeURIComponent` unescaped. wa.me expects the
/// `text` parameter encoded exactly the way a browser would encode it.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Render the order into the fixed message template.
///
/// Callers must have passed `check_submission` first: this does not
/// re-validate, and an empty summary would produce a greeting with no order
/// lines.
pub fn compose_order_message(
    catalog: &MenuCatalog,
    summary: &OrderSummary,
    address: &str,
) -> String {
    let mut message = format!(
        "Hello \u{1f44b}\nI would like to order from {}:\n\n",
        catalog.cafe_name
    );

    for line in &summary.lines {
        message.push_str(&format!(
            "\u{2022} {} x {} \u{2013} \u{20b9}{}\n",
            line.title, line.quantity, line.line_total
        ));
    }

    message.push_str(&format!("\n\u{1f6d2} Total Items: {}", summary.item_count));
    message.push_str(&format!(
        "\n\u{1f4b0} Total Amount: \u{20b9}{}\n",
        summary.grand_total
    ));
    message.push_str(&format!(
        "\n\u{1f4cd} Delivery Address:\n{}\n",
        address.trim()
    ));
    message.push_str("\nPlease confirm my order. Thank you!");

    message
}

/// Build the wa.me deep link that opens WhatsApp with the message pre-filled.
pub fn build_deep_link(whatsapp_number: &str, text: &str) -> String {
    format!(
        "https://wa.me/{}?text={}",
        whatsapp_number,
        utf8_percent_encode(text, URI_COMPONENT)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::domain::cart::Cart;

    fn catalog() -> MenuCatalog {
        MenuCatalog::parse(
            r#"{
                "cafeName": "Chai Point",
                "whatsappNumber": "911234567890",
                "categories": [
                    {"name": "Drinks", "items": [{"title": "Masala Chai", "price": 50}]},
                    {"name": "Snacks", "items": [{"title": "Samosa", "price": 30}]}
                ]
            }"#,
        )
        .unwrap()
    }

    fn summary_for(catalog: &MenuCatalog, quantities: &[(&str, u32)]) -> OrderSummary {
        let mut cart = Cart::new();
        for &(title, quantity) in quantities {
            let id = catalog
                .items()
                .find(|i| i.title == title)
                .unwrap()
                .id
                .clone();
            for _ in 0..quantity {
                cart.increment(&id);
            }
        }
        OrderSummary::compute(&cart, catalog)
    }

    #[test]
    fn test_message_has_one_line_per_order_line_in_catalog_order() {
        let catalog = catalog();
        let summary = summary_for(&catalog, &[("Samosa", 1), ("Masala Chai", 2)]);
        let message = compose_order_message(&catalog, &summary, "123 Main Street, City");

        let order_lines: Vec<&str> = message
            .lines()
            .filter(|l| l.starts_with('\u{2022}'))
            .collect();
        assert_eq!(order_lines.len(), 2);
        assert_eq!(order_lines[0], "\u{2022} Masala Chai x 2 \u{2013} \u{20b9}100");
        assert_eq!(order_lines[1], "\u{2022} Samosa x 1 \u{2013} \u{20b9}30");
    }

    #[test]
    fn test_message_template_blocks() {
        let catalog = catalog();
        let summary = summary_for(&catalog, &[("Masala Chai", 2), ("Samosa", 1)]);
        let message = compose_order_message(&catalog, &summary, "  45 Lake Road, Pune  ");

        assert!(message.starts_with("Hello \u{1f44b}\nI would like to order from Chai Point:\n"));
        // Item count is total units, not line count
        assert!(message.contains("Total Items: 3"));
        assert!(message.contains("Total Amount: \u{20b9}130"));
        // Address is trimmed into the message
        assert!(message.contains("Delivery Address:\n45 Lake Road, Pune\n"));
        assert!(message.ends_with("Please confirm my order. Thank you!"));
    }

    #[test]
    fn test_deep_link_shape() {
        let link = build_deep_link("911234567890", "hello world");
        assert_eq!(link, "https://wa.me/911234567890?text=hello%20world");
    }

    #[test]
    fn test_deep_link_encoding_matches_encode_uri_component() {
        // Newlines and '&' must be escaped; encodeURIComponent's unreserved
        // marks must not be.
        let link = build_deep_link("911234567890", "a\nb &c !~*'()-_.");
        assert_eq!(
            link,
            "https://wa.me/911234567890?text=a%0Ab%20%26c%20!~*'()-_."
        );
    }

    #[test]
    fn test_deep_link_encodes_non_ascii() {
        let link = build_deep_link("911234567890", "\u{20b9}50");
        assert_eq!(link, "https://wa.me/911234567890?text=%E2%82%B950");
    }

    #[test]
    fn test_composed_message_round_trips_into_link() {
        let catalog = catalog();
        let summary = summary_for(&catalog, &[("Masala Chai", 1)]);
        let message = compose_order_message(&catalog, &summary, "123 Main Street, City");
        let link = build_deep_link(&catalog.whatsapp_number, &message);

        assert!(link.starts_with("https://wa.me/911234567890?text=Hello%20"));
        // Nothing past the query marker may remain unescaped that would break
        // the URL: no raw spaces or newlines.
        let query = link.split_once("?text=").unwrap().1;
        assert!(!query.contains(' '));
        assert!(!query.contains('\n'));
        assert!(!query.contains('&'));
    }
}
