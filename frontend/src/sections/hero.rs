use yew::prelude::*;
use yew_hooks::use_window_scroll;
use web_sys::HtmlElement;

use crate::animation::motion::{Ease, Pose, Reveal, Timeline};
use crate::animation::observer::{use_scroll_reveal, Zone};
use crate::animation::scrub;
use crate::animation::zone::Threshold;
use crate::content::{self, HeroConfig, SectionConfig};
use crate::icons::{Icon, IconView};
use crate::scroll::scroll_to_anchor;

/// The hero plays its entrance on load rather than on scroll.
const ENTRANCE_DELAY_MS: u32 = 300;
const CHAR_DURATION_MS: u32 = 900;
const CHAR_STAGGER_MS: u32 = 50;

/// Entrance of the title characters, subtitle, buttons, line and backdrop,
/// sequenced as one timeline.
pub fn reveal_plan(config: &HeroConfig) -> Vec<Reveal> {
    if !config.is_enabled() {
        return Vec::new();
    }
    let chars = config.title.chars().count() as u32;
    let mut tl = Timeline::starting_at(ENTRANCE_DELAY_MS);

    let title_start = tl.push(CHAR_DURATION_MS + CHAR_STAGGER_MS * chars.saturating_sub(1), 0);
    let title = Reveal::new(Pose::offset_y(60.0).rotate_y(-90.0))
        .duration(CHAR_DURATION_MS)
        .ease(Ease::BackOut)
        .stagger(".char", CHAR_STAGGER_MS)
        .delay(title_start)
        .at(Threshold::Mount);
    let subtitle = Reveal::new(Pose::offset_y(30.0).blur(20.0))
        .duration(800)
        .ease(Ease::Power2Out)
        .delay(tl.push(800, -400))
        .at(Threshold::Mount);
    let cta = Reveal::new(Pose::offset_y(40.0))
        .duration(700)
        .ease(Ease::ExpoOut)
        .delay(tl.push(700, -300))
        .at(Threshold::Mount);
    let line = Reveal::new(Pose::collapsed_x())
        .duration(1200)
        .ease(Ease::ExpoInOut)
        .delay(tl.push(1200, -500))
        .at(Threshold::Mount);
    let decor = Reveal::new(Pose::HIDDEN)
        .duration(1500)
        .ease(Ease::Power2Out)
        .delay(tl.push(1500, -1000))
        .at(Threshold::Mount);

    vec![title, subtitle, cta, line, decor]
}

/// Resting vertical nudge of each title character, alternating up and down.
fn char_offset(index: usize) -> i32 {
    if index % 2 == 0 { -4 } else { 4 }
}

struct Cube {
    size: u32,
    delay: f32,
    x: &'static str,
    y: &'static str,
    z: i32,
}

const CUBES: [Cube; 4] = [
    Cube { size: 80, delay: 0.0, x: "10%", y: "20%", z: 100 },
    Cube { size: 60, delay: 2.0, x: "85%", y: "30%", z: -100 },
    Cube { size: 40, delay: 4.0, x: "75%", y: "70%", z: 50 },
    Cube { size: 100, delay: 1.0, x: "5%", y: "60%", z: -50 },
];

struct Sphere {
    size: u32,
    delay: f32,
    x: &'static str,
    y: &'static str,
}

const SPHERES: [Sphere; 2] = [
    Sphere { size: 120, delay: 0.5, x: "90%", y: "15%" },
    Sphere { size: 80, delay: 3.0, x: "15%", y: "75%" },
];

fn floating_cube(cube: &Cube) -> Html {
    let half = cube.size / 2;
    let faces = [
        format!("translateZ({}px)", half),
        format!("translateZ(-{}px) rotateY(180deg)", half),
        format!("translateX({}px) rotateY(90deg)", half),
        format!("translateX(-{}px) rotateY(-90deg)", half),
        format!("translateY(-{}px) rotateX(90deg)", half),
        format!("translateY({}px) rotateX(-90deg)", half),
    ];
    html! {
        <div
            class="hero-cube"
            style={format!(
                "left: {}; top: {}; transform: translateZ({}px); animation-delay: {}s;",
                cube.x, cube.y, cube.z, cube.delay
            )}
        >
            <div
                class="hero-cube__body"
                style={format!("width: {0}px; height: {0}px; animation-delay: {1}s;", cube.size, cube.delay)}
            >
                { for faces.iter().map(|t| html! {
                    <div class="hero-cube__face" style={format!("transform: {};", t)}></div>
                }) }
            </div>
        </div>
    }
}

fn wireframe_sphere(sphere: &Sphere) -> Html {
    html! {
        <div
            class="hero-sphere"
            style={format!("left: {}; top: {}; animation-delay: {}s;", sphere.x, sphere.y, sphere.delay)}
        >
            <div class="hero-sphere__shell" style={format!("width: {0}px; height: {0}px;", sphere.size)}>
                <div class="hero-sphere__ring hero-sphere__ring--outer"></div>
                <div class="hero-sphere__ring hero-sphere__ring--inner"></div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    #[prop_or(&content::HERO)]
    pub config: &'static HeroConfig,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    if !props.config.is_enabled() {
        return html! {};
    }
    html! { <HeroBody config={props.config} /> }
}

#[function_component(HeroBody)]
fn hero_body(props: &HeroProps) -> Html {
    let config = props.config;
    let section_ref = use_node_ref();
    let title_ref = use_node_ref();
    let subtitle_ref = use_node_ref();
    let cta_ref = use_node_ref();
    let line_ref = use_node_ref();
    let decor_ref = use_node_ref();

    use_scroll_reveal(
        "hero",
        Zone::bind(
            &[
                title_ref.clone(),
                subtitle_ref.clone(),
                cta_ref.clone(),
                line_ref.clone(),
                decor_ref.clone(),
            ],
            reveal_plan(config),
        ),
    );

    // Parallax while the hero scrolls away.
    let (_, scroll_y) = use_window_scroll();
    let hero_height = section_ref
        .cast::<HtmlElement>()
        .map(|el| f64::from(el.offset_height()))
        .unwrap_or(0.0);
    let title_style = scrub::hero_title(scroll_y, hero_height).style();
    let subtitle_style = scrub::hero_subtitle(scroll_y, hero_height).style();

    let go_primary = {
        let href = config.cta_primary_href;
        Callback::from(move |_: MouseEvent| scroll_to_anchor(href))
    };
    let go_secondary = {
        let href = config.cta_secondary_href;
        Callback::from(move |_: MouseEvent| scroll_to_anchor(href))
    };

    html! {
        <section ref={section_ref} id="hero" class="hero-section">
            <style>
                {r#"
                .hero-section {
                    position: relative;
                    min-height: 100vh;
                    width: 100%;
                    overflow: hidden;
                    background: #000;
                    perspective: 1200px;
                }
                .hero-background {
                    position: absolute;
                    inset: 0;
                    background-size: cover;
                    background-position: center;
                    opacity: 0.35;
                }
                .hero-grid-plane {
                    position: absolute;
                    inset: 0;
                    pointer-events: none;
                    background:
                        linear-gradient(rgba(255, 255, 255, 0.02) 1px, transparent 1px),
                        linear-gradient(90deg, rgba(255, 255, 255, 0.02) 1px, transparent 1px);
                    background-size: 60px 60px;
                    transform: perspective(500px) rotateX(60deg) translateY(100px);
                    transform-origin: center bottom;
                    mask-image: linear-gradient(to top, rgba(0,0,0,0.3) 0%, transparent 60%);
                    -webkit-mask-image: linear-gradient(to top, rgba(0,0,0,0.3) 0%, transparent 60%);
                }
                .hero-decor {
                    position: absolute;
                    inset: 0;
                    pointer-events: none;
                }
                .hero-cube {
                    position: absolute;
                    transform-style: preserve-3d;
                    animation: float 8s ease-in-out infinite;
                }
                .hero-cube__body {
                    position: relative;
                    transform-style: preserve-3d;
                    animation: rotate-cube 20s linear infinite;
                }
                .hero-cube__face {
                    position: absolute;
                    inset: 0;
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    background: rgba(255, 255, 255, 0.02);
                }
                .hero-sphere {
                    position: absolute;
                    animation: float 10s ease-in-out infinite;
                }
                .hero-sphere__shell {
                    position: relative;
                    border-radius: 50%;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                }
                .hero-sphere__ring {
                    position: absolute;
                    border-radius: 50%;
                    border: 1px solid rgba(255, 255, 255, 0.05);
                }
                .hero-sphere__ring--outer { inset: 1rem; animation: rotate-cube 15s linear infinite; }
                .hero-sphere__ring--inner { inset: 2rem; animation: rotate-cube 20s linear infinite reverse; }
                .hero-beam {
                    position: absolute;
                    width: 1px;
                    background: linear-gradient(to bottom, transparent, rgba(255,255,255,0.1), transparent);
                }
                .hero-vignette {
                    position: absolute;
                    inset: 0;
                    z-index: 10;
                    pointer-events: none;
                    background: radial-gradient(ellipse at center, transparent 30%, rgba(0,0,0,0.8) 100%);
                }
                .hero-content {
                    position: relative;
                    z-index: 20;
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    justify-content: center;
                    align-items: center;
                    padding: 0 2rem;
                    transform-style: preserve-3d;
                }
                .hero-portrait {
                    width: 10rem;
                    height: 10rem;
                    margin: 32px 0 2rem;
                    border-radius: 50%;
                    object-fit: cover;
                    border: 4px solid rgba(255, 255, 255, 0.2);
                    box-shadow: 0 10px 30px rgba(0, 0, 0, 0.5);
                }
                .hero-services-label {
                    position: absolute;
                    top: 2rem;
                    left: 2rem;
                    z-index: 30;
                }
                .hero-title {
                    text-align: center;
                    margin-bottom: 1.5rem;
                    transform-style: preserve-3d;
                    text-shadow: 0 0 60px rgba(255, 255, 255, 0.15);
                    will-change: transform, opacity;
                }
                .hero-title .char {
                    display: inline-block;
                    position: relative;
                }
                .hero-line {
                    width: 6rem;
                    height: 1px;
                    background: rgba(255, 255, 255, 0.3);
                    margin-bottom: 2rem;
                    transform-origin: center;
                }
                .hero-subtitle {
                    font-weight: 300;
                    color: rgba(255, 255, 255, 0.7);
                    letter-spacing: 0.02em;
                    text-align: center;
                    max-width: 48rem;
                    margin-bottom: 3rem;
                }
                .hero-cta {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 1.5rem;
                }
                .hero-scroll-hint {
                    position: absolute;
                    bottom: 2rem;
                    left: 50%;
                    transform: translateX(-50%);
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 0.5rem;
                }
                .hero-scroll-hint__bar {
                    width: 1px;
                    height: 3rem;
                    background: linear-gradient(to bottom, rgba(255,255,255,0.3), transparent);
                    animation: pulse-glow 2s ease-in-out infinite;
                }
                .hero-copyright {
                    position: absolute;
                    right: 2rem;
                    bottom: 2rem;
                    z-index: 30;
                }
                @keyframes float {
                    0%, 100% { translate: 0 0; }
                    50% { translate: 0 -20px; }
                }
                @keyframes rotate-cube {
                    from { transform: rotateX(0deg) rotateY(0deg); }
                    to { transform: rotateX(360deg) rotateY(360deg); }
                }
                @keyframes pulse-glow {
                    0%, 100% { opacity: 0.3; }
                    50% { opacity: 1; }
                }
                "#}
            </style>

            {
                if !config.background_image.is_empty() {
                    html! {
                        <div
                            class="hero-background"
                            style={format!("background-image: url('{}');", config.background_image)}
                        ></div>
                    }
                } else {
                    html! {}
                }
            }
            <div class="hero-grid-plane"></div>

            <div ref={decor_ref} class="hero-decor">
                { for CUBES.iter().map(floating_cube) }
                { for SPHERES.iter().map(wireframe_sphere) }
                <div
                    class="hero-beam"
                    style="left: 20%; top: 40%; height: 200px; animation: float 12s ease-in-out infinite;"
                ></div>
                <div
                    class="hero-beam"
                    style="left: 80%; top: 50%; height: 150px; animation: float 10s ease-in-out infinite reverse;"
                ></div>
            </div>

            <div class="hero-vignette"></div>

            <div class="hero-content">
                {
                    if !config.portrait.is_empty() {
                        html! { <img class="hero-portrait" src={config.portrait} alt={config.portrait_alt} /> }
                    } else {
                        html! {}
                    }
                }
                {
                    if !config.services_label.is_empty() {
                        html! {
                            <div class="hero-services-label">
                                <span class="text-caption muted">{config.services_label}</span>
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }

                <h1 ref={title_ref} class="hero-title text-display" style={title_style}>
                    { for config.title.chars().enumerate().map(|(i, c)| html! {
                        <span key={i} class="char" style={format!("top: {}px;", char_offset(i))}>
                            {c.to_string()}
                        </span>
                    }) }
                </h1>

                <div ref={line_ref} class="hero-line"></div>

                <div style={subtitle_style}>
                    <p ref={subtitle_ref} class="hero-subtitle text-h3">{config.subtitle}</p>
                </div>

                <div ref={cta_ref} class="hero-cta">
                    {
                        if !config.cta_primary.is_empty() {
                            html! {
                                <button class="btn-primary" onclick={go_primary}>
                                    {config.cta_primary}
                                    <IconView icon={Icon::ArrowRight} class="btn-icon-shift" />
                                </button>
                            }
                        } else {
                            html! {}
                        }
                    }
                    {
                        if !config.cta_secondary.is_empty() {
                            html! {
                                <button class="btn-secondary" onclick={go_secondary}>
                                    <IconView icon={Icon::Mail} />
                                    {config.cta_secondary}
                                </button>
                            }
                        } else {
                            html! {}
                        }
                    }
                </div>

                {
                    if !config.scroll_hint.is_empty() {
                        html! {
                            <div class="hero-scroll-hint">
                                <span class="text-caption faint">{config.scroll_hint}</span>
                                <div class="hero-scroll-hint__bar"></div>
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>

            {
                if !config.copyright.is_empty() {
                    html! {
                        <div class="hero-copyright">
                            <span class="text-body-sm faint">{config.copyright}</span>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_hero_has_no_zones() {
        let config = HeroConfig { title: "", ..content::HERO };
        assert!(reveal_plan(&config).is_empty());
    }

    #[test]
    fn entrance_follows_the_timeline() {
        let plan = reveal_plan(&content::HERO);
        assert_eq!(plan.len(), 5);
        assert!(plan.iter().all(|r| r.trigger == Threshold::Mount));

        // "SCHREINER": nine characters.
        let delays: Vec<u32> = plan.iter().map(|r| r.delay_ms).collect();
        assert_eq!(delays, vec![300, 1200, 1700, 1900, 2100]);
        assert_eq!(plan[0].children, Some(".char"));
        assert_eq!(plan[0].total_ms(9), 300 + 8 * 50 + 900);
        assert_eq!(plan[1].from.blur, 20.0);
    }

    #[test]
    fn title_characters_alternate() {
        let offsets: Vec<i32> = (0..4).map(char_offset).collect();
        assert_eq!(offsets, vec![-4, 4, -4, 4]);
    }
}
