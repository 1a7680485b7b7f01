use log::{debug, warn};
use web_sys::window;
use yew::prelude::*;
use yew_hooks::use_timeout;

use crate::animation::observer::refresh_reveals;
use crate::config;
use crate::content::{self, SiteConfig};
use crate::sections::{
    about::About, contact::Contact, footer::Footer, founder::Founder, growth::Growth,
    hero::Hero, philosophy::Philosophy, services::Services, video_tool::VideoTool,
};

/// Writes the document title and `<html lang>`; empty values leave the
/// document as it is.
fn apply_document_settings(site: &SiteConfig) {
    let Some(document) = window().and_then(|w| w.document()) else {
        return;
    };
    if !site.title.is_empty() {
        document.set_title(site.title);
    }
    if !site.language.is_empty() {
        match document.document_element() {
            Some(root) => {
                if let Err(e) = root.set_attribute("lang", site.language) {
                    warn!("could not set document language: {:?}", e);
                }
            }
            None => warn!("document has no root element"),
        }
    }
}

#[function_component]
pub fn Home() -> Html {
    use_effect_with_deps(
        move |_| {
            apply_document_settings(&content::SITE);
            || ()
        },
        (),
    );

    // Sections mounted below the fold may already be past their threshold
    // once fonts and images settle.
    use_timeout(
        || {
            debug!("refreshing reveal zones");
            refresh_reveals();
        },
        config::SCROLL_REFRESH_DELAY_MS,
    );

    html! {
        <div class="page-root">
            <style>
                {r#"
                *, *::before, *::after {
                    box-sizing: border-box;
                }
                html {
                    scroll-behavior: smooth;
                }
                body {
                    margin: 0;
                    background: #000;
                    color: #fff;
                    font-family: 'Inter', -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
                    -webkit-font-smoothing: antialiased;
                }
                .page-root {
                    position: relative;
                    min-height: 100vh;
                    background: #000;
                    color: #fff;
                    overflow-x: hidden;
                }
                .noise-overlay {
                    position: fixed;
                    inset: 0;
                    z-index: 100;
                    pointer-events: none;
                    opacity: 0.03;
                    background-image: url("data:image/svg+xml,%3Csvg viewBox='0 0 200 200' xmlns='http://www.w3.org/2000/svg'%3E%3Cfilter id='n'%3E%3CfeTurbulence type='fractalNoise' baseFrequency='0.9' numOctaves='4' stitchTiles='stitch'/%3E%3C/filter%3E%3Crect width='100%25' height='100%25' filter='url(%23n)'/%3E%3C/svg%3E");
                }
                .section {
                    position: relative;
                    width: 100%;
                    padding: 8rem 0;
                    background: #000;
                }
                .section-inner {
                    position: relative;
                    z-index: 1;
                    max-width: 72rem;
                    margin: 0 auto;
                    padding: 0 2rem;
                }
                .section-label {
                    margin-bottom: 2rem;
                }
                .section-title {
                    margin: 0 0 1.5rem;
                }
                .section-subtitle {
                    max-width: 36rem;
                    margin: 0 0 4rem;
                    color: rgba(255, 255, 255, 0.5);
                }
                .grid-bg {
                    position: absolute;
                    inset: 0;
                    pointer-events: none;
                    background-image:
                        linear-gradient(rgba(255, 255, 255, 0.03) 1px, transparent 1px),
                        linear-gradient(90deg, rgba(255, 255, 255, 0.03) 1px, transparent 1px);
                    background-size: 80px 80px;
                }
                .text-display {
                    font-size: clamp(3rem, 12vw, 10rem);
                    font-weight: 700;
                    line-height: 0.9;
                    letter-spacing: -0.04em;
                }
                .text-h1 {
                    font-size: clamp(2.5rem, 6vw, 5rem);
                    font-weight: 600;
                    line-height: 1;
                    letter-spacing: -0.03em;
                }
                .text-h2 {
                    font-size: clamp(2rem, 4vw, 3rem);
                    font-weight: 600;
                    line-height: 1.1;
                }
                .text-h3 {
                    font-size: clamp(1.25rem, 2vw, 1.5rem);
                    font-weight: 500;
                    line-height: 1.3;
                }
                .text-body {
                    font-size: 1.125rem;
                    line-height: 1.6;
                }
                .text-body-sm {
                    font-size: 0.9375rem;
                    line-height: 1.6;
                }
                .text-caption {
                    font-size: 0.75rem;
                    font-weight: 500;
                    letter-spacing: 0.2em;
                    text-transform: uppercase;
                }
                .muted {
                    color: rgba(255, 255, 255, 0.5);
                }
                .faint {
                    color: rgba(255, 255, 255, 0.3);
                }
                .card {
                    padding: 1.5rem;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    background: rgba(255, 255, 255, 0.02);
                }
                .card-hover {
                    transition: border-color 0.3s, background 0.3s;
                }
                .card-hover:hover {
                    border-color: rgba(255, 255, 255, 0.25);
                    background: rgba(255, 255, 255, 0.04);
                }
                .card-icon {
                    display: block;
                    font-size: 1.5rem;
                    margin-bottom: 1rem;
                    color: rgba(255, 255, 255, 0.6);
                }
                .icon {
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    line-height: 1;
                }
                .btn-primary,
                .btn-secondary {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.75rem;
                    padding: 1rem 2rem;
                    font: inherit;
                    font-size: 0.875rem;
                    font-weight: 500;
                    letter-spacing: 0.1em;
                    text-transform: uppercase;
                    cursor: pointer;
                    transition: all 0.3s;
                }
                .btn-primary {
                    background: #fff;
                    color: #000;
                    border: 1px solid #fff;
                }
                .btn-primary:hover {
                    background: transparent;
                    color: #fff;
                }
                .btn-secondary {
                    background: transparent;
                    color: #fff;
                    border: 1px solid rgba(255, 255, 255, 0.3);
                }
                .btn-secondary:hover {
                    border-color: #fff;
                    background: rgba(255, 255, 255, 0.05);
                }
                .btn-icon-shift {
                    transition: transform 0.3s;
                }
                .btn-primary:hover .btn-icon-shift {
                    transform: translateX(4px);
                }
                "#}
            </style>
            <div class="noise-overlay"></div>

            <main>
                <Hero />
                <VideoTool />
                <About />
                <Services />
                <Growth />
                <Philosophy />
                <Founder />
                <Contact />
                <Footer />
            </main>
        </div>
    }
}
