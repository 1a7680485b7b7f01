//! Server-side rendering helpers for section tests.

use futures::executor::block_on;
use yew::{BaseComponent, ServerRenderer};

/// Renders `C` to an HTML string.
pub fn render<C>(props: C::Properties) -> String
where
    C: BaseComponent,
    C::Properties: Send + 'static,
{
    block_on(ServerRenderer::<C>::with_props(move || props).render())
}

/// The markup left once the renderer's hydration comments are removed.
pub fn without_markers(html: &str) -> String {
    let mut out = String::new();
    let mut rest = html;
    while let Some(start) = rest.find("<!--") {
        out.push_str(&rest[..start]);
        rest = match rest[start..].find("-->") {
            Some(end) => &rest[start + end + 3..],
            None => "",
        };
    }
    out.push_str(rest);
    out
}

/// `text` as it appears inside an element once rendered.
pub fn escaped(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

/// Asserts every string occurs in `html`, in the given order.
pub fn assert_in_order(html: &str, texts: &[&str]) {
    let mut from = 0;
    for text in texts {
        let needle = escaped(text);
        match html[from..].find(&needle) {
            Some(at) => from += at + needle.len(),
            None => panic!("{:?} missing or out of order", text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markers_are_stripped() {
        assert_eq!(without_markers("<!--<[a]>--><!--</[a]>-->"), "");
        assert_eq!(without_markers("<p>x</p><!--y-->z"), "<p>x</p>z");
    }

    #[test]
    fn order_is_checked() {
        assert_in_order("<p>a &amp; b</p><p>c</p>", &["a & b", "c"]);
    }

    #[test]
    #[should_panic]
    fn out_of_order_text_fails() {
        assert_in_order("<p>c</p><p>a</p>", &["a", "c"]);
    }
}
