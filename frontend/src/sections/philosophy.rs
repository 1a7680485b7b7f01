use yew::prelude::*;

use crate::animation::motion::{Ease, Pose, Reveal};
use crate::animation::observer::{use_scroll_reveal, Zone};
use crate::animation::zone::Threshold;
use crate::content::{self, PhilosophyConfig, SectionConfig};
use crate::icons::{Icon, IconView};

const LABEL: Reveal = Reveal::new(Pose::offset_y(20.0)).duration(600).at(Threshold::Top(85));
const TITLE: Reveal = Reveal::new(Pose::offset_y(50.0))
    .duration(1000)
    .ease(Ease::ExpoOut)
    .delay(100);
const TEXT: Reveal = Reveal::new(Pose::offset_y(40.0)).duration(800).delay(200);
const PRINCIPLES: Reveal = Reveal::new(Pose::offset_y(30.0))
    .duration(600)
    .delay(300)
    .stagger(".principle-item", 100)
    .at(Threshold::Top(85));

pub fn reveal_plan(config: &PhilosophyConfig) -> Vec<Reveal> {
    if !config.is_enabled() {
        return Vec::new();
    }
    vec![LABEL, TITLE, TEXT, PRINCIPLES]
}

#[derive(Properties, PartialEq)]
pub struct PhilosophyProps {
    #[prop_or(&content::PHILOSOPHY)]
    pub config: &'static PhilosophyConfig,
}

#[function_component(Philosophy)]
pub fn philosophy(props: &PhilosophyProps) -> Html {
    if !props.config.is_enabled() {
        return html! {};
    }
    html! { <PhilosophyBody config={props.config} /> }
}

#[function_component(PhilosophyBody)]
fn philosophy_body(props: &PhilosophyProps) -> Html {
    let config = props.config;
    let label_ref = use_node_ref();
    let title_ref = use_node_ref();
    let text_ref = use_node_ref();
    let principles_ref = use_node_ref();

    use_scroll_reveal(
        "philosophy",
        Zone::bind(
            &[label_ref.clone(), title_ref.clone(), text_ref.clone(), principles_ref.clone()],
            reveal_plan(config),
        ),
    );

    html! {
        <section id="philosophy" class="section philosophy-section">
            <style>
                {r#"
                .philosophy-section {
                    overflow: hidden;
                }
                .philosophy-backdrop {
                    position: absolute;
                    inset: 0;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    pointer-events: none;
                    user-select: none;
                }
                .philosophy-backdrop span {
                    font-size: 20vw;
                    font-weight: 900;
                    letter-spacing: -0.05em;
                    color: rgba(255, 255, 255, 0.02);
                    white-space: nowrap;
                }
                .philosophy-inner {
                    position: relative;
                    max-width: 64rem;
                    margin: 0 auto;
                    text-align: center;
                }
                .philosophy-quote {
                    position: relative;
                    max-width: 48rem;
                    margin: 0 auto 5rem;
                    line-height: 1.8;
                    color: rgba(255, 255, 255, 0.7);
                }
                .philosophy-quote::before {
                    content: '"';
                    position: absolute;
                    top: -2rem;
                    left: -1rem;
                    font-size: 6rem;
                    line-height: 1;
                    color: rgba(255, 255, 255, 0.05);
                }
                .philosophy-principles {
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    gap: 1.5rem;
                    text-align: left;
                }
                .principle-item h3 {
                    margin: 1rem 0 0.5rem;
                }
                .philosophy-motto {
                    margin-top: 5rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 1.5rem;
                }
                .philosophy-motto__rule {
                    width: 4rem;
                    height: 1px;
                    background: rgba(255, 255, 255, 0.2);
                }
                @media (min-width: 1024px) {
                    .philosophy-principles { grid-template-columns: repeat(4, 1fr); }
                }
                "#}
            </style>

            {
                if !config.backdrop_word.is_empty() {
                    html! {
                        <div class="philosophy-backdrop" aria-hidden="true">
                            <span>{config.backdrop_word}</span>
                        </div>
                    }
                } else {
                    html! {}
                }
            }

            <div class="section-inner philosophy-inner">
                <div ref={label_ref} class="section-label">
                    <span class="text-caption muted">{config.subtitle}</span>
                </div>
                <h2 ref={title_ref} class="text-display section-title">{config.title}</h2>
                <p ref={text_ref} class="text-h3 philosophy-quote">{config.text}</p>

                <div ref={principles_ref} class="philosophy-principles">
                    { for config.principles.iter().map(|principle| html! {
                        <div key={principle.title} class="principle-item card card-hover">
                            {
                                match Icon::from_key(principle.icon) {
                                    Some(icon) => html! { <IconView icon={icon} class="card-icon" /> },
                                    None => html! {},
                                }
                            }
                            <h3 class="text-body">{principle.title}</h3>
                            <p class="text-body-sm muted">{principle.description}</p>
                        </div>
                    }) }
                </div>

                {
                    if !config.motto.is_empty() {
                        html! {
                            <div class="philosophy-motto">
                                <div class="philosophy-motto__rule"></div>
                                <span class="text-caption muted">{config.motto}</span>
                                <div class="philosophy-motto__rule"></div>
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
    fn disabled_philosophy_has_no_zones() {
        let config = PhilosophyConfig { title: "", ..content::PHILOSOPHY };
        assert!(reveal_plan(&config).is_empty());
    }

    #[test]
    fn label_leads_and_principles_follow() {
        let plan = reveal_plan(&content::PHILOSOPHY);
        let delays: Vec<u32> = plan.iter().map(|r| r.delay_ms).collect();
        assert_eq!(delays, vec![0, 100, 200, 300]);
        assert_eq!(plan[3].children, Some(".principle-item"));
    }

    #[test]
    fn every_principle_names_a_known_icon() {
        for principle in content::PHILOSOPHY.principles {
            assert!(Icon::from_key(principle.icon).is_some(), "{}", principle.icon);
        }
    }

    #[test]
    fn rendered_philosophy_reproduces_its_copy() {
        let config = &content::PHILOSOPHY;
        let html = render::<Philosophy>(PhilosophyProps { config });
        let mut texts = vec![config.backdrop_word, config.subtitle, config.title, config.text];
        texts.extend(config.principles.iter().flat_map(|p| [p.title, p.description]));
        texts.push(config.motto);
        assert_in_order(&html, &texts);
    }

    #[test]
    fn disabled_philosophy_renders_nothing() {
        static OFF: PhilosophyConfig = PhilosophyConfig { title: "", ..content::PHILOSOPHY };
        let html = render::<Philosophy>(PhilosophyProps { config: &OFF });
        assert_eq!(without_markers(&html).trim(), "");
    }
}
