use yew::prelude::*;

use crate::animation::motion::{Pose, Reveal};
use crate::animation::observer::{use_scroll_reveal, Zone};
use crate::animation::zone::Threshold;
use crate::content::{self, FooterConfig, FooterLink, SectionConfig};
use crate::icons::{Icon, IconView};
use crate::scroll::{is_in_page_anchor, scroll_to_anchor, scroll_to_top};

/// Copies of the marquee text laid end to end so the loop never shows a gap.
pub const MARQUEE_REPEATS: usize = 4;

const CONTENT: Reveal = Reveal::new(Pose::offset_y(30.0))
    .duration(600)
    .stagger(".footer-item", 100)
    .at(Threshold::Top(90));

pub fn reveal_plan(config: &FooterConfig) -> Vec<Reveal> {
    if !config.is_enabled() {
        return Vec::new();
    }
    vec![CONTENT]
}

/// Characters of the marquee text, flagged when they should stand out.
pub fn marquee_glyphs(text: &str, highlights: &[char]) -> Vec<(char, bool)> {
    text.chars().map(|c| (c, highlights.contains(&c))).collect()
}

fn nav_column(heading: &'static str, links: &'static [FooterLink]) -> Html {
    if links.is_empty() {
        return html! {};
    }
    html! {
        <div class="footer-item">
            <h4 class="text-caption faint footer-heading">{heading}</h4>
            <ul class="footer-links">
                { for links.iter().map(|link| {
                    let href = link.href;
                    let onclick = Callback::from(move |_: MouseEvent| scroll_to_anchor(href));
                    html! {
                        <li key={link.label}>
                            <button class="footer-link text-body" onclick={onclick}>{link.label}</button>
                        </li>
                    }
                }) }
            </ul>
        </div>
    }
}

fn legal_link(link: &'static FooterLink) -> Html {
    if link.href.is_empty() {
        html! { <button key={link.label} class="footer-legal text-body-sm">{link.label}</button> }
    } else {
        html! { <a key={link.label} class="footer-legal text-body-sm" href={link.href}>{link.label}</a> }
    }
}

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    #[prop_or(&content::FOOTER)]
    pub config: &'static FooterConfig,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    if !props.config.is_enabled() {
        return html! {};
    }
    html! { <FooterBody config={props.config} /> }
}

#[function_component(FooterBody)]
fn footer_body(props: &FooterProps) -> Html {
    let config = props.config;
    let content_ref = use_node_ref();

    use_scroll_reveal("footer", Zone::bind(&[content_ref.clone()], reveal_plan(config)));

    let glyphs = marquee_glyphs(config.marquee_text, config.marquee_highlight_chars);
    let go_cta = {
        let href = config.cta_href;
        Callback::from(move |e: MouseEvent| {
            if is_in_page_anchor(href) {
                e.prevent_default();
                scroll_to_anchor(href);
            }
        })
    };
    let go_top = Callback::from(|_: MouseEvent| scroll_to_top());

    html! {
        <footer class="site-footer">
            <style>
                {r#"
                .site-footer {
                    position: relative;
                    width: 100%;
                    background: #000;
                    border-top: 1px solid rgba(255, 255, 255, 0.1);
                }
                .footer-marquee {
                    padding: 2rem 0;
                    border-bottom: 1px solid rgba(255, 255, 255, 0.05);
                    overflow: hidden;
                }
                .footer-marquee__track {
                    display: flex;
                    width: max-content;
                    animation: marquee 30s linear infinite;
                }
                .footer-marquee__run {
                    font-size: clamp(2.25rem, 5vw, 3.75rem);
                    font-weight: 300;
                    color: rgba(255, 255, 255, 0.1);
                    margin: 0 2rem;
                    white-space: pre;
                }
                .footer-marquee__run .hl {
                    color: rgba(255, 255, 255, 0.3);
                }
                .footer-marquee__dot {
                    margin: 0 4rem;
                }
                .footer-content {
                    max-width: 72rem;
                    margin: 0 auto;
                    padding: 4rem 2rem;
                }
                .footer-grid {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 3rem;
                }
                .footer-brand h3 {
                    margin-bottom: 1rem;
                }
                .footer-brand p {
                    max-width: 24rem;
                    margin-bottom: 1.5rem;
                }
                .footer-heading {
                    margin-bottom: 1rem;
                }
                .footer-links {
                    list-style: none;
                    padding: 0;
                    margin: 0;
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                }
                .footer-link,
                .footer-legal {
                    background: none;
                    border: none;
                    padding: 0;
                    cursor: pointer;
                    text-decoration: none;
                    font: inherit;
                    color: rgba(255, 255, 255, 0.6);
                    transition: color 0.3s;
                }
                .footer-legal {
                    color: rgba(255, 255, 255, 0.4);
                }
                .footer-link:hover,
                .footer-legal:hover {
                    color: #fff;
                }
                .footer-cta {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    color: #fff;
                    text-decoration: none;
                }
                .footer-bottom {
                    margin-top: 4rem;
                    padding-top: 2rem;
                    border-top: 1px solid rgba(255, 255, 255, 0.1);
                    display: flex;
                    flex-direction: column;
                    justify-content: space-between;
                    align-items: center;
                    gap: 1rem;
                }
                .footer-bottom__actions {
                    display: flex;
                    align-items: center;
                    gap: 1.5rem;
                }
                .footer-top {
                    width: 2.5rem;
                    height: 2.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: none;
                    color: rgba(255, 255, 255, 0.6);
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    cursor: pointer;
                    transition: all 0.3s;
                }
                .footer-top:hover {
                    background: rgba(255, 255, 255, 0.1);
                    border-color: rgba(255, 255, 255, 0.4);
                }
                @keyframes marquee {
                    from { transform: translateX(0); }
                    to { transform: translateX(-50%); }
                }
                @media (min-width: 768px) {
                    .footer-grid { grid-template-columns: repeat(4, 1fr); }
                    .footer-brand { grid-column: span 2; }
                    .footer-bottom { flex-direction: row; }
                }
                "#}
            </style>

            {
                if !config.marquee_text.is_empty() {
                    html! {
                        <div class="footer-marquee" aria-hidden="true">
                            <div class="footer-marquee__track">
                                { for (0..MARQUEE_REPEATS).map(|run| html! {
                                    <span key={run} class="footer-marquee__run">
                                        { for glyphs.iter().map(|(c, highlighted)| html! {
                                            <span class={classes!(highlighted.then_some("hl"))}>{c.to_string()}</span>
                                        }) }
                                        <span class="footer-marquee__dot">{"•"}</span>
                                    </span>
                                }) }
                            </div>
                        </div>
                    }
                } else {
                    html! {}
                }
            }

            <div ref={content_ref} class="footer-content">
                <div class="footer-grid">
                    <div class="footer-item footer-brand">
                        <h3 class="text-h3">{config.brand}</h3>
                        <p class="text-body muted">{config.tagline}</p>
                        {
                            if !config.cta_text.is_empty() {
                                html! {
                                    <a class="footer-cta text-body" href={config.cta_href} onclick={go_cta}>
                                        {config.cta_text}
                                        <IconView icon={Icon::ArrowUpRight} />
                                    </a>
                                }
                            } else {
                                html! {}
                            }
                        }
                    </div>
                    { nav_column(config.nav_heading_1, config.nav_links_1) }
                    { nav_column(config.nav_heading_2, config.nav_links_2) }
                </div>

                <div class="footer-item footer-bottom">
                    <p class="text-body-sm faint">{config.copyright}</p>
                    <div class="footer-bottom__actions">
                        { for config.legal_links.iter().map(legal_link) }
                        <button class="footer-top" onclick={go_top} aria-label="Back to top">
                            <IconView icon={Icon::ArrowUp} />
                        </button>
                    </div>
                </div>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::testing::{assert_in_order, render, without_markers};

    #[test]
    fn footer_is_gated_on_its_copyright() {
        let config = FooterConfig { copyright: "", ..content::FOOTER };
        assert!(reveal_plan(&config).is_empty());
        let plan = reveal_plan(&content::FOOTER);
        assert_eq!(plan.len(), 1);
        assert_eq!(plan[0].trigger, Threshold::Top(90));
        assert_eq!(plan[0].children, Some(".footer-item"));
    }

    #[test]
    fn marquee_highlights_configured_characters() {
        let glyphs = marquee_glyphs("Engineering Systems", &['E', 'S']);
        let highlighted: String = glyphs.iter().filter(|(_, hl)| *hl).map(|(c, _)| *c).collect();
        assert_eq!(highlighted, "ES");
        let text: String = glyphs.iter().map(|(c, _)| *c).collect();
        assert_eq!(text, "Engineering Systems");
    }

    #[test]
    fn marquee_without_highlights_is_plain() {
        assert!(marquee_glyphs("abc", &[]).iter().all(|(_, hl)| !hl));
        assert!(marquee_glyphs("", &['E']).is_empty());
    }

    #[test]
    fn rendered_footer_reproduces_its_copy() {
        let config = &content::FOOTER;
        let html = render::<Footer>(FooterProps { config });
        let mut texts = vec![config.brand, config.tagline, config.cta_text, config.nav_heading_1];
        texts.extend(config.nav_links_1.iter().map(|l| l.label));
        texts.push(config.nav_heading_2);
        texts.extend(config.nav_links_2.iter().map(|l| l.label));
        texts.push(config.copyright);
        texts.extend(config.legal_links.iter().map(|l| l.label));
        assert_in_order(&html, &texts);
    }

    #[test]
    fn footer_without_copyright_renders_nothing() {
        static OFF: FooterConfig = FooterConfig { copyright: "", ..content::FOOTER };
        let html = render::<Footer>(FooterProps { config: &OFF });
        assert_eq!(without_markers(&html).trim(), "");
    }
}
