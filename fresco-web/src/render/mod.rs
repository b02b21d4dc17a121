//! HTML rendering
//!
//! Pure functions from the recipe collection and view state to page markup.
//! Handlers apply the output to the HTTP response; nothing in this module
//! touches state or I/O, so page logic stays testable without a server.
//! Every render call produces a complete page that fully replaces prior
//! output.

pub mod catalog;
pub mod detail;

/// Escape text for embedding into HTML element content or attribute values
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Wrap rendered body content in the shared document chrome
pub fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{}</title>\n\
         <link rel=\"stylesheet\" href=\"/static/style.css\">\n\
         </head>\n\
         <body>\n{}</body>\n\
         </html>\n",
        escape_html(title),
        body
    )
}

/// Render the purchase acknowledgment page.
///
/// The buy action is a stub: it names the recipe and servings count but
/// performs no persistence or transaction.
pub fn order_acknowledgment(recipe_name: &str, persons: u32) -> String {
    let body = format!(
        "<main class=\"order-ack\">\n\
         <h1>Order placed</h1>\n\
         <p>Added \"{}\" for {} person(s) to your cart! (This is a prototype action)</p>\n\
         <p><a class=\"btn\" href=\"/\">Back to recipes</a></p>\n\
         </main>\n",
        escape_html(recipe_name),
        persons
    );
    page("Fresco - Order", &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<b>"fish & chips"</b>"#),
            "&lt;b&gt;&quot;fish &amp; chips&quot;&lt;/b&gt;"
        );
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_order_acknowledgment_names_recipe_and_count() {
        let html = order_acknowledgment("Paneer Tikka", 3);
        assert!(html.contains("Paneer Tikka"));
        assert!(html.contains("for 3 person(s)"));
    }
}
