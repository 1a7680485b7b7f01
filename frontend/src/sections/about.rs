use yew::prelude::*;

use crate::animation::motion::{Ease, Pose, Reveal};
use crate::animation::observer::{use_scroll_reveal, Zone};
use crate::animation::zone::Threshold;
use crate::content::{self, AboutConfig, SectionConfig};
use crate::icons::{Icon, IconView};

const TITLE: Reveal = Reveal::new(Pose::offset_y(60.0)).duration(1000).ease(Ease::ExpoOut);
const LINE: Reveal = Reveal::new(Pose::collapsed_x())
    .duration(1200)
    .ease(Ease::ExpoOut)
    .at(Threshold::Top(85));
const TEXT: Reveal = Reveal::new(Pose::offset_y(40.0)).duration(800).delay(200);
const FEATURES: Reveal = Reveal::new(Pose::offset_y(30.0))
    .duration(600)
    .delay(300)
    .stagger(".feature-item", 100)
    .at(Threshold::Top(85));

pub fn reveal_plan(config: &AboutConfig) -> Vec<Reveal> {
    if !config.is_enabled() {
        return Vec::new();
    }
    vec![TITLE, LINE, TEXT, FEATURES]
}

#[derive(Properties, PartialEq)]
pub struct AboutProps {
    #[prop_or(&content::ABOUT)]
    pub config: &'static AboutConfig,
}

#[function_component(About)]
pub fn about(props: &AboutProps) -> Html {
    if !props.config.is_enabled() {
        return html! {};
    }
    html! { <AboutBody config={props.config} /> }
}

#[function_component(AboutBody)]
fn about_body(props: &AboutProps) -> Html {
    let config = props.config;
    let title_ref = use_node_ref();
    let line_ref = use_node_ref();
    let text_ref = use_node_ref();
    let features_ref = use_node_ref();

    use_scroll_reveal(
        "about",
        Zone::bind(
            &[title_ref.clone(), line_ref.clone(), text_ref.clone(), features_ref.clone()],
            reveal_plan(config),
        ),
    );

    let images: Vec<(&str, &str)> = [(config.image1, config.image1_alt), (config.image2, config.image2_alt)]
        .into_iter()
        .filter(|(src, _)| !src.is_empty())
        .collect();

    html! {
        <section id="about" class="section">
            <style>
                {r#"
                .about-line {
                    width: 100%;
                    height: 1px;
                    background: rgba(255, 255, 255, 0.1);
                    margin-bottom: 3rem;
                    transform-origin: left;
                }
                .about-text {
                    max-width: 48rem;
                    line-height: 1.7;
                    margin-bottom: 4rem;
                    color: rgba(255, 255, 255, 0.7);
                }
                .about-features {
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    gap: 1.5rem;
                }
                .about-gallery {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                    gap: 1.5rem;
                    margin-top: 4rem;
                }
                .about-gallery img {
                    width: 100%;
                    height: auto;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                }
                .about-author {
                    display: flex;
                    align-items: center;
                    gap: 1.5rem;
                    margin-top: 4rem;
                }
                .about-author img {
                    width: 4rem;
                    height: 4rem;
                    border-radius: 50%;
                    object-fit: cover;
                }
                @media (min-width: 768px) {
                    .about-features { grid-template-columns: repeat(4, 1fr); }
                }
                "#}
            </style>
            <div class="grid-bg" style="opacity: 0.5;"></div>

            <div class="section-inner">
                <div class="section-label">
                    <span class="text-caption muted">{config.label}</span>
                </div>

                <h2 ref={title_ref} class="text-h1 section-title">
                    {config.title_line1}
                    {
                        if !config.title_line2.is_empty() {
                            html! { <><br />{config.title_line2}</> }
                        } else {
                            html! {}
                        }
                    }
                </h2>

                <div ref={line_ref} class="about-line"></div>

                <p ref={text_ref} class="text-body about-text">{config.description}</p>

                <div ref={features_ref} class="about-features">
                    { for config.features.iter().map(|feature| html! {
                        <div key={feature.label} class="feature-item card card-hover">
                            {
                                match Icon::from_key(feature.icon) {
                                    Some(icon) => html! { <IconView icon={icon} class="card-icon" /> },
                                    None => html! {},
                                }
                            }
                            <span class="text-body-sm">{feature.label}</span>
                        </div>
                    }) }
                </div>

                {
                    if !images.is_empty() {
                        html! {
                            <div class="about-gallery">
                                { for images.iter().map(|(src, alt)| html! {
                                    <img key={*src} src={*src} alt={*alt} loading="lazy" />
                                }) }
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }

                {
                    if !config.author_name.is_empty() {
                        html! {
                            <div class="about-author">
                                {
                                    if !config.author_image.is_empty() {
                                        html! { <img src={config.author_image} alt={config.author_name} /> }
                                    } else {
                                        html! {}
                                    }
                                }
                                <div>
                                    <h4 class="text-body">{config.author_name}</h4>
                                    <p class="text-body-sm muted">{config.author_bio}</p>
                                </div>
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::testing::{assert_in_order, render, without_markers};

    #[test]
    fn disabled_about_has_no_zones() {
        let config = AboutConfig { title_line1: "", ..content::ABOUT };
        assert!(reveal_plan(&config).is_empty());
    }

    #[test]
    fn features_stagger_after_the_text() {
        let plan = reveal_plan(&content::ABOUT);
        assert_eq!(plan.len(), 4);
        assert_eq!(plan[3].children, Some(".feature-item"));
        assert_eq!(plan[3].trigger, Threshold::Top(85));
        assert!(plan[3].delay_ms > plan[2].delay_ms);
    }

    #[test]
    fn every_feature_names_a_known_icon() {
        for feature in content::ABOUT.features {
            assert!(Icon::from_key(feature.icon).is_some(), "{}", feature.icon);
        }
    }

    #[test]
    fn rendered_about_reproduces_its_copy() {
        let config = &content::ABOUT;
        let html = render::<About>(AboutProps { config });
        let mut texts = vec![config.label, config.title_line1, config.title_line2, config.description];
        texts.extend(config.features.iter().map(|f| f.label));
        texts.extend([config.author_name, config.author_bio]);
        assert_in_order(&html, &texts);
    }

    #[test]
    fn disabled_about_renders_nothing() {
        static OFF: AboutConfig = AboutConfig { title_line1: "", ..content::ABOUT };
        let html = render::<About>(AboutProps { config: &OFF });
        assert_eq!(without_markers(&html).trim(), "");
    }
}
