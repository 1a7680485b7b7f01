use yew::prelude::*;
use yew_router::prelude::*;
use yew_hooks::use_window_scroll;
use log::info;
use web_sys::MouseEvent;

mod config;
mod content;
mod icons;
mod scroll;
mod animation {
    pub mod motion;
    pub mod zone;
    pub mod observer;
    pub mod scrub;
}
mod pages {
    pub mod home;
}
mod sections {
    pub mod hero;
    pub mod video_tool;
    pub mod about;
    pub mod services;
    pub mod growth;
    pub mod philosophy;
    pub mod founder;
    pub mod contact;
    pub mod footer;
    #[cfg(test)]
    pub mod testing;
}

use content::{NavigationConfig, SectionConfig};
use pages::home::Home;
use scroll::{scroll_to_anchor, scroll_to_top};


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::NotFound => {
            info!("Unknown path, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        },
    }
}


#[derive(Properties, PartialEq)]
pub struct NavProps {
    #[prop_or(&content::NAVIGATION)]
    pub config: &'static NavigationConfig,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let config = props.config;
    let menu_open = use_state(|| false);
    let (_, scroll_y) = use_window_scroll();
    let is_scrolled = scroll_y > config::NAV_SCROLLED_THRESHOLD;

    if !config.is_enabled() {
        return html! {};
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let go_top = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
            scroll_to_top();
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", is_scrolled.then(|| "scrolled"))}>
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    transition: background 0.4s, border-color 0.4s, padding 0.4s;
                    padding: 1.5rem 0;
                    border-bottom: 1px solid transparent;
                }
                .top-nav.scrolled {
                    padding: 1rem 0;
                    background: rgba(0, 0, 0, 0.8);
                    backdrop-filter: blur(12px);
                    -webkit-backdrop-filter: blur(12px);
                    border-color: rgba(255, 255, 255, 0.1);
                }
                .nav-content {
                    max-width: 72rem;
                    margin: 0 auto;
                    padding: 0 2rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .nav-logo {
                    color: #fff;
                    text-decoration: none;
                    font-weight: 600;
                    letter-spacing: 0.2em;
                }
                .nav-right {
                    display: flex;
                    gap: 2rem;
                    align-items: center;
                }
                .nav-link {
                    color: rgba(255, 255, 255, 0.6);
                    text-decoration: none;
                    font-size: 0.75rem;
                    letter-spacing: 0.2em;
                    text-transform: uppercase;
                    transition: color 0.3s;
                }
                .nav-link:hover {
                    color: #fff;
                }
                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 5px;
                    background: none;
                    border: none;
                    cursor: pointer;
                    padding: 0.5rem;
                }
                .burger-menu span {
                    display: block;
                    width: 24px;
                    height: 1px;
                    background: #fff;
                }
                @media (max-width: 768px) {
                    .burger-menu { display: flex; }
                    .nav-right {
                        display: none;
                        position: absolute;
                        top: 100%;
                        left: 0;
                        right: 0;
                        flex-direction: column;
                        padding: 2rem;
                        background: rgba(0, 0, 0, 0.95);
                        border-bottom: 1px solid rgba(255, 255, 255, 0.1);
                    }
                    .nav-right.mobile-menu-open { display: flex; }
                }
                "#}
            </style>
            <div class="nav-content">
                <a href="#" class="nav-logo" onclick={go_top}>
                    {config.logo}
                </a>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Menu">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { for config.items.iter().map(|item| {
                        let href = item.href;
                        let menu_open = menu_open.clone();
                        let onclick = Callback::from(move |e: MouseEvent| {
                            e.prevent_default();
                            menu_open.set(false);
                            scroll_to_anchor(href);
                        });
                        html! {
                            <a key={item.href} href={item.href} class="nav-link" onclick={onclick}>
                                {item.label}
                            </a>
                        }
                    }) }
                </div>
            </div>
        </nav>
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
