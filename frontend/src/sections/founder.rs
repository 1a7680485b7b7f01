use yew::prelude::*;

use crate::animation::motion::{Ease, Pose, Reveal};
use crate::animation::observer::{use_scroll_reveal, Zone};
use crate::animation::zone::Threshold;
use crate::content::{self, FounderConfig, SectionConfig};
use crate::icons::{Icon, IconView};
use crate::scroll::mailto_href;

const LABEL: Reveal = Reveal::new(Pose::offset_y(20.0)).duration(600).at(Threshold::Top(85));
const IMAGE: Reveal = Reveal::new(Pose::offset_x(-60.0))
    .duration(1000)
    .ease(Ease::ExpoOut)
    .delay(100);
const TEXT: Reveal = Reveal::new(Pose::offset_y(40.0))
    .duration(800)
    .delay(200)
    .stagger(".animate-item", 100);

pub fn reveal_plan(config: &FounderConfig) -> Vec<Reveal> {
    if !config.is_enabled() {
        return Vec::new();
    }
    vec![LABEL, IMAGE, TEXT]
}

#[derive(Properties, PartialEq)]
pub struct FounderProps {
    #[prop_or(&content::FOUNDER)]
    pub config: &'static FounderConfig,
}

#[function_component(Founder)]
pub fn founder(props: &FounderProps) -> Html {
    if !props.config.is_enabled() {
        return html! {};
    }
    html! { <FounderBody config={props.config} /> }
}

#[function_component(FounderBody)]
fn founder_body(props: &FounderProps) -> Html {
    let config = props.config;
    let label_ref = use_node_ref();
    let image_ref = use_node_ref();
    let text_ref = use_node_ref();

    use_scroll_reveal(
        "founder",
        Zone::bind(
            &[label_ref.clone(), image_ref.clone(), text_ref.clone()],
            reveal_plan(config),
        ),
    );

    html! {
        <section id="founder" class="section">
            <style>
                {r#"
                .founder-layout {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 4rem;
                    align-items: center;
                }
                .founder-portrait {
                    position: relative;
                    aspect-ratio: 4 / 5;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    overflow: hidden;
                }
                .founder-portrait img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    filter: grayscale(100%);
                    transition: filter 0.6s;
                }
                .founder-portrait:hover img {
                    filter: grayscale(0%);
                }
                .founder-portrait__placeholder {
                    position: absolute;
                    inset: 0;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: linear-gradient(135deg, rgba(255,255,255,0.04), rgba(255,255,255,0.01));
                }
                .founder-text .animate-item {
                    margin-bottom: 1.5rem;
                }
                .founder-role {
                    color: rgba(255, 255, 255, 0.5);
                }
                .founder-bio {
                    line-height: 1.8;
                    color: rgba(255, 255, 255, 0.7);
                }
                .founder-links {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1.5rem;
                    align-items: center;
                }
                .founder-link {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    color: rgba(255, 255, 255, 0.7);
                    text-decoration: none;
                    transition: color 0.3s;
                }
                .founder-link:hover {
                    color: #fff;
                }
                @media (min-width: 1024px) {
                    .founder-layout { grid-template-columns: 2fr 3fr; }
                }
                "#}
            </style>

            <div class="section-inner">
                <div ref={label_ref} class="section-label">
                    <span class="text-caption muted">{config.title}</span>
                </div>

                <div class="founder-layout">
                    <div ref={image_ref} class="founder-portrait">
                        {
                            if !config.image.is_empty() {
                                html! { <img src={config.image} alt={config.image_alt} loading="lazy" /> }
                            } else {
                                html! {
                                    <div class="founder-portrait__placeholder" role="img" aria-label={config.image_alt}>
                                        <span class="text-caption faint">{config.image_alt}</span>
                                    </div>
                                }
                            }
                        }
                    </div>

                    <div ref={text_ref} class="founder-text">
                        <h2 class="text-h1 animate-item">{config.name}</h2>
                        <p class="text-body founder-role animate-item">{config.role}</p>
                        <p class="text-body founder-bio animate-item">{config.bio}</p>
                        <div class="founder-links animate-item">
                            {
                                if !config.email.is_empty() {
                                    html! {
                                        <a class="founder-link" href={mailto_href(config.email)}>
                                            <IconView icon={Icon::Mail} />
                                            <span class="text-body-sm">{config.email}</span>
                                        </a>
                                    }
                                } else {
                                    html! {}
                                }
                            }
                            { for config.socials.iter().map(|social| html! {
                                <a
                                    key={social.label}
                                    class="founder-link"
                                    href={social.href}
                                    target="_blank"
                                    rel="noopener noreferrer"
                                >
                                    <IconView icon={Icon::from_key(social.icon).unwrap_or(Icon::ArrowUpRight)} />
                                    <span class="text-body-sm">{social.label}</span>
                                </a>
                            }) }
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::testing::{assert_in_order, render, without_markers};

    #[test]
    fn disabled_founder_has_no_zones() {
        let config = FounderConfig { title: "", ..content::FOUNDER };
        assert!(reveal_plan(&config).is_empty());
    }

    #[test]
    fn portrait_slides_in_from_the_left() {
        let plan = reveal_plan(&content::FOUNDER);
        assert_eq!(plan[1].from.x, -60.0);
        assert_eq!(plan[1].from.opacity, 0.0);
        assert_eq!(plan[2].children, Some(".animate-item"));
    }

    #[test]
    fn email_link_uses_the_configured_address() {
        assert_eq!(mailto_href(content::FOUNDER.email), "mailto:konrad.schrein@gmail.com");
    }

    #[test]
    fn rendered_founder_reproduces_its_copy() {
        let config = &content::FOUNDER;
        let html = render::<Founder>(FounderProps { config });
        let mut texts = vec![config.title, config.image_alt, config.name, config.role, config.bio, config.email];
        texts.extend(config.socials.iter().map(|s| s.label));
        assert_in_order(&html, &texts);
    }

    #[test]
    fn disabled_founder_renders_nothing() {
        static OFF: FounderConfig = FounderConfig { title: "", ..content::FOUNDER };
        let html = render::<Founder>(FounderProps { config: &OFF });
        assert_eq!(without_markers(&html).trim(), "");
    }
}
