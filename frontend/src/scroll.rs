use log::debug;
use wasm_bindgen::JsValue;
use web_sys::{window, ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions};

/// Smoothly scrolls the element matching `href` (an in-page anchor such as
/// `#contact`) into view. Unknown anchors are ignored.
pub fn scroll_to_anchor(href: &str) {
    if !is_in_page_anchor(href) {
        return;
    }
    if let Err(e) = try_scroll_to_anchor(href) {
        debug!("could not scroll to {}: {:?}", href, e);
    }
}

fn try_scroll_to_anchor(href: &str) -> Result<(), JsValue> {
    let document = window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let Some(element) = document.query_selector(href)? else {
        debug!("no element for anchor {}", href);
        return Ok(());
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
    Ok(())
}

pub fn scroll_to_top() {
    if let Some(window) = window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

/// `#` alone is a placeholder link, not a target.
pub fn is_in_page_anchor(href: &str) -> bool {
    href.len() > 1 && href.starts_with('#')
}

/// Builds a `tel:` link; dialers choke on the spaces used for display.
pub fn tel_href(phone: &str) -> String {
    let digits: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
    format!("tel:{}", digits)
}

pub fn mailto_href(email: &str) -> String {
    format!("mailto:{}", email)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tel_links_drop_whitespace() {
        assert_eq!(tel_href("+49 157 85471426"), "tel:+4915785471426");
        assert_eq!(tel_href("\t+1 555\n0100 "), "tel:+15550100");
    }

    #[test]
    fn mailto_links_keep_the_address() {
        assert_eq!(mailto_href("konrad.schrein@gmail.com"), "mailto:konrad.schrein@gmail.com");
    }

    #[test]
    fn only_named_fragments_are_scroll_targets() {
        assert!(is_in_page_anchor("#growth"));
        assert!(!is_in_page_anchor("#"));
        assert!(!is_in_page_anchor(""));
        assert!(!is_in_page_anchor("https://example.com/#x"));
    }
}
