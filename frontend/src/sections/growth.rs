use yew::prelude::*;

use crate::animation::motion::{Ease, Pose, Reveal};
use crate::animation::observer::{use_scroll_reveal, Zone};
use crate::animation::zone::Threshold;
use crate::content::{self, GrowthConfig, MilestoneItem, SectionConfig};
use crate::icons::{Icon, IconView};

const TITLE: Reveal = Reveal::new(Pose::offset_y(50.0)).duration(1000).ease(Ease::ExpoOut);
const SUBTITLE: Reveal = Reveal::new(Pose::offset_y(30.0))
    .duration(800)
    .delay(100)
    .at(Threshold::Top(85));
const GRID: Reveal = Reveal::new(Pose::offset_y(40.0).scale(0.95))
    .duration(700)
    .ease(Ease::ExpoOut)
    .delay(200)
    .stagger(".milestone-item", 100);

pub fn reveal_plan(config: &GrowthConfig) -> Vec<Reveal> {
    if !config.is_enabled() {
        return Vec::new();
    }
    vec![TITLE, SUBTITLE, GRID]
}

/// A milestone as it appears on the page.
#[derive(Debug, Clone, PartialEq)]
pub struct MilestoneCard {
    pub index: String,
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

/// Milestones in ascending id order, whatever order they are configured in.
pub fn milestone_cards(config: &GrowthConfig) -> Vec<MilestoneCard> {
    let mut items: Vec<&MilestoneItem> = config.milestones.iter().collect();
    items.sort_by_key(|m| m.id);
    items
        .into_iter()
        .map(|m| MilestoneCard {
            index: format!("{:02}", m.id),
            icon: Icon::for_milestone(m.id),
            title: m.title,
            description: m.description,
        })
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct GrowthProps {
    #[prop_or(&content::GROWTH)]
    pub config: &'static GrowthConfig,
}

#[function_component(Growth)]
pub fn growth(props: &GrowthProps) -> Html {
    if !props.config.is_enabled() {
        return html! {};
    }
    html! { <GrowthBody config={props.config} /> }
}

#[function_component(GrowthBody)]
fn growth_body(props: &GrowthProps) -> Html {
    let config = props.config;
    let title_ref = use_node_ref();
    let subtitle_ref = use_node_ref();
    let grid_ref = use_node_ref();

    use_scroll_reveal(
        "growth",
        Zone::bind(
            &[title_ref.clone(), subtitle_ref.clone(), grid_ref.clone()],
            reveal_plan(config),
        ),
    );

    let cards = milestone_cards(config);

    html! {
        <section id="growth" class="section">
            <style>
                {r#"
                .growth-grid {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 1.5rem;
                    margin-bottom: 5rem;
                }
                .milestone-item {
                    position: relative;
                    padding: 2rem;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    background: rgba(255, 255, 255, 0.02);
                    transition: border-color 0.3s, background 0.3s;
                }
                .milestone-item:hover {
                    border-color: rgba(255, 255, 255, 0.25);
                    background: rgba(255, 255, 255, 0.04);
                }
                .milestone-item__head {
                    display: flex;
                    justify-content: space-between;
                    align-items: flex-start;
                    margin-bottom: 1.5rem;
                }
                .milestone-item__icon {
                    font-size: 2rem;
                    color: rgba(255, 255, 255, 0.6);
                }
                .milestone-item h3 {
                    margin-bottom: 0.75rem;
                }
                .growth-stats {
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    gap: 2rem;
                    padding-top: 3rem;
                    border-top: 1px solid rgba(255, 255, 255, 0.1);
                }
                .growth-stat {
                    text-align: center;
                }
                .growth-stat__value {
                    display: block;
                    font-size: clamp(2rem, 4vw, 3rem);
                    font-weight: 700;
                    margin-bottom: 0.5rem;
                }
                @media (min-width: 768px) {
                    .growth-grid { grid-template-columns: repeat(2, 1fr); }
                    .growth-stats { grid-template-columns: repeat(4, 1fr); }
                }
                @media (min-width: 1024px) {
                    .growth-grid { grid-template-columns: repeat(3, 1fr); }
                }
                "#}
            </style>
            <div class="grid-bg" style="opacity: 0.3;"></div>

            <div class="section-inner">
                <div class="section-label">
                    <span class="text-caption muted">{config.label}</span>
                </div>
                <h2 ref={title_ref} class="text-h1 section-title">{config.title}</h2>
                <p ref={subtitle_ref} class="text-body section-subtitle">{config.subtitle}</p>

                <div ref={grid_ref} class="growth-grid">
                    { for cards.iter().map(|card| html! {
                        <div key={card.index.clone()} class="milestone-item">
                            <div class="milestone-item__head">
                                <IconView icon={card.icon} class="milestone-item__icon" />
                                <span class="text-caption faint">{card.index.clone()}</span>
                            </div>
                            <h3 class="text-h3">{card.title}</h3>
                            <p class="text-body-sm muted">{card.description}</p>
                        </div>
                    }) }
                </div>

                {
                    if !config.stats.is_empty() {
                        html! {
                            <div class="growth-stats">
                                { for config.stats.iter().map(|stat| html! {
                                    <div key={stat.label} class="growth-stat">
                                        <span class="growth-stat__value">{stat.value}</span>
                                        <span class="text-caption muted">{stat.label}</span>
                                    </div>
                                }) }
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
    fn disabled_growth_has_no_zones() {
        let config = GrowthConfig { title: "", ..content::GROWTH };
        assert!(reveal_plan(&config).is_empty());
        assert_eq!(reveal_plan(&content::GROWTH).len(), 3);
    }

    #[test]
    fn milestones_render_in_id_order_with_their_icons() {
        let cards = milestone_cards(&content::GROWTH);
        let indices: Vec<&str> = cards.iter().map(|c| c.index.as_str()).collect();
        assert_eq!(indices, vec!["01", "02", "03", "04", "05"]);
        let icons: Vec<Icon> = cards.iter().map(|c| c.icon).collect();
        assert_eq!(
            icons,
            vec![Icon::Rocket, Icon::TrendingUp, Icon::Award, Icon::Globe, Icon::Cpu]
        );
        assert_eq!(cards[2].title, "Silver Play Button");
    }

    #[test]
    fn shuffled_milestones_are_sorted() {
        const SHUFFLED: &[MilestoneItem] = &[
            MilestoneItem { id: 5, title: "e", description: "" },
            MilestoneItem { id: 1, title: "a", description: "" },
            MilestoneItem { id: 3, title: "c", description: "" },
        ];
        let config = GrowthConfig { milestones: SHUFFLED, ..content::GROWTH };
        let titles: Vec<&str> = milestone_cards(&config).iter().map(|c| c.title).collect();
        assert_eq!(titles, vec!["a", "c", "e"]);
    }

    #[test]
    fn unknown_milestone_ids_use_the_fallback_icon() {
        const EXTRA: &[MilestoneItem] = &[MilestoneItem { id: 12, title: "Next", description: "" }];
        let config = GrowthConfig { milestones: EXTRA, ..content::GROWTH };
        let cards = milestone_cards(&config);
        assert_eq!(cards[0].icon, Icon::MILESTONE_FALLBACK);
        assert_eq!(cards[0].index, "12");
    }

    #[test]
    fn rendered_milestones_read_back_in_id_order() {
        let html = render::<Growth>(GrowthProps { config: &content::GROWTH });
        let mut texts = vec![content::GROWTH.label, content::GROWTH.title, content::GROWTH.subtitle];
        for id in 1..=5 {
            let milestone = content::GROWTH.milestones.iter().find(|m| m.id == id).unwrap();
            texts.push(milestone.title);
            texts.push(milestone.description);
        }
        texts.extend(content::GROWTH.stats.iter().flat_map(|s| [s.value, s.label]));
        assert_in_order(&html, &texts);
        assert_in_order(
            &html,
            &[
                "Multiple Channels Launched",
                "Two Channels Monetized",
                "Silver Play Button",
                "Multi-Platform Expansion",
                "Proprietary AI Development",
            ],
        );
    }

    #[test]
    fn disabled_growth_renders_nothing() {
        static OFF: GrowthConfig = GrowthConfig { title: "", ..content::GROWTH };
        let html = render::<Growth>(GrowthProps { config: &OFF });
        assert_eq!(without_markers(&html).trim(), "");
    }
}
