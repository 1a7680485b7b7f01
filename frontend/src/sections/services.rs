use yew::prelude::*;

use crate::animation::motion::{Ease, Pose, Reveal};
use crate::animation::observer::{use_scroll_reveal, Zone};
use crate::animation::zone::Threshold;
use crate::content::{self, SectionConfig, ServiceItem, ServicesConfig};
use crate::icons::{Icon, IconView};

const TITLE: Reveal = Reveal::new(Pose::offset_y(50.0)).duration(1000).ease(Ease::ExpoOut);
const SUBTITLE: Reveal = Reveal::new(Pose::offset_y(30.0))
    .duration(800)
    .delay(100)
    .at(Threshold::Top(85));
const CARDS: Reveal = Reveal::new(Pose::offset_y(60.0).rotate_x(15.0))
    .duration(800)
    .ease(Ease::ExpoOut)
    .delay(200)
    .stagger(".service-card", 150);

pub fn reveal_plan(config: &ServicesConfig) -> Vec<Reveal> {
    if !config.is_enabled() {
        return Vec::new();
    }
    vec![TITLE, SUBTITLE, CARDS]
}

fn card_style(hovered: bool) -> &'static str {
    if hovered {
        "transform: translateZ(20px) scale(1.02); border-color: rgba(255,255,255,0.25); background: rgba(255,255,255,0.04);"
    } else {
        "transform: translateZ(0); border-color: rgba(255,255,255,0.1); background: rgba(255,255,255,0.02);"
    }
}

#[derive(Properties, PartialEq)]
pub struct ServicesProps {
    #[prop_or(&content::SERVICES)]
    pub config: &'static ServicesConfig,
}

#[function_component(Services)]
pub fn services(props: &ServicesProps) -> Html {
    if !props.config.is_enabled() {
        return html! {};
    }
    html! { <ServicesBody config={props.config} /> }
}

#[function_component(ServicesBody)]
fn services_body(props: &ServicesProps) -> Html {
    let config = props.config;
    let title_ref = use_node_ref();
    let subtitle_ref = use_node_ref();
    let cards_ref = use_node_ref();
    let hovered = use_state(|| None::<&'static str>);

    use_scroll_reveal(
        "services",
        Zone::bind(
            &[title_ref.clone(), subtitle_ref.clone(), cards_ref.clone()],
            reveal_plan(config),
        ),
    );

    let card = |service: &'static ServiceItem| {
        let is_hovered = *hovered == Some(service.id);
        let on_enter = {
            let hovered = hovered.clone();
            Callback::from(move |_: MouseEvent| hovered.set(Some(service.id)))
        };
        let on_leave = {
            let hovered = hovered.clone();
            Callback::from(move |_: MouseEvent| hovered.set(None))
        };
        html! {
            <div key={service.id} class="service-card" onmouseenter={on_enter} onmouseleave={on_leave}>
                <div class="service-card__inner" style={card_style(is_hovered)}>
                    <div class="service-card__number">
                        <span class="text-caption faint">{service.id}</span>
                    </div>
                    <div class="service-card__icon" style={if is_hovered { "color: rgba(255,255,255,0.9);" } else { "color: rgba(255,255,255,0.4);" }}>
                        <IconView icon={Icon::for_service(service.id)} />
                    </div>
                    {
                        if !service.image.is_empty() {
                            html! { <img class="service-card__image" src={service.image} alt={service.title} loading="lazy" /> }
                        } else {
                            html! {}
                        }
                    }
                    <h3 class="text-h3 service-card__title">{service.title}</h3>
                    <p class="text-body-sm muted">{service.description}</p>
                    <div class="service-card__rule" style={if is_hovered { "width: 100%;" } else { "width: 0%;" }}></div>
                </div>
            </div>
        }
    };

    html! {
        <section id="services" class="section">
            <style>
                {r#"
                .services-backdrop {
                    position: absolute;
                    inset: 0;
                    pointer-events: none;
                    background: radial-gradient(ellipse at 50% 0%, rgba(255,255,255,0.03) 0%, transparent 50%);
                }
                .services-grid {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 1.5rem;
                    perspective: 1000px;
                }
                .service-card {
                    transform-style: preserve-3d;
                }
                .service-card__inner {
                    position: relative;
                    height: 100%;
                    padding: 2rem;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    transform-style: preserve-3d;
                    transition: all 0.4s cubic-bezier(0.16, 1, 0.3, 1);
                }
                .service-card__number {
                    position: absolute;
                    top: 1.5rem;
                    right: 1.5rem;
                }
                .service-card__icon {
                    font-size: 2.5rem;
                    margin-bottom: 1.5rem;
                    transition: color 0.3s;
                }
                .service-card__image {
                    width: 100%;
                    height: auto;
                    margin-bottom: 1.5rem;
                }
                .service-card__title {
                    margin-bottom: 1rem;
                }
                .service-card__rule {
                    position: absolute;
                    bottom: 0;
                    left: 0;
                    height: 1px;
                    background: rgba(255, 255, 255, 0.3);
                    transition: width 0.5s;
                }
                @media (min-width: 768px) {
                    .services-grid { grid-template-columns: repeat(2, 1fr); }
                }
                "#}
            </style>
            <div class="services-backdrop"></div>

            <div class="section-inner">
                <div class="section-label">
                    <span class="text-caption muted">{config.label}</span>
                </div>
                <h2 ref={title_ref} class="text-h1 section-title">{config.title}</h2>
                <p ref={subtitle_ref} class="text-body section-subtitle">{config.subtitle}</p>

                <div ref={cards_ref} class="services-grid">
                    { for config.services.iter().map(card) }
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
    fn disabled_services_have_no_zones() {
        let config = ServicesConfig { title: "", ..content::SERVICES };
        assert!(reveal_plan(&config).is_empty());
    }

    #[test]
    fn cards_tilt_in_one_after_another() {
        let plan = reveal_plan(&content::SERVICES);
        let cards = plan[2];
        assert_eq!(cards.children, Some(".service-card"));
        assert_eq!(cards.from.rotate_x, 15.0);
        assert_eq!(cards.delay_for(3), 200 + 3 * 150);
    }

    #[test]
    fn configured_services_have_dedicated_icons() {
        let icons: Vec<Icon> = content::SERVICES.services.iter().map(|s| Icon::for_service(s.id)).collect();
        assert_eq!(icons, vec![Icon::Youtube, Icon::Film, Icon::Share, Icon::Bot]);
    }

    #[test]
    fn rendered_services_reproduce_their_copy() {
        let config = &content::SERVICES;
        let html = render::<Services>(ServicesProps { config });
        let mut texts = vec![config.label, config.title, config.subtitle];
        texts.extend(config.services.iter().flat_map(|s| [s.id, s.title, s.description]));
        assert_in_order(&html, &texts);
    }

    #[test]
    fn disabled_services_render_nothing() {
        static OFF: ServicesConfig = ServicesConfig { title: "", ..content::SERVICES };
        let html = render::<Services>(ServicesProps { config: &OFF });
        assert_eq!(without_markers(&html).trim(), "");
    }
}
