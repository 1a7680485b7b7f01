use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    ArrowRight,
    ArrowUp,
    ArrowUpRight,
    Award,
    Bot,
    Building,
    Cpu,
    Film,
    Globe,
    Layers,
    Linkedin,
    Mail,
    MapPin,
    Phone,
    Repeat,
    Rocket,
    Send,
    Settings,
    Share,
    Sparkles,
    Target,
    TrendingUp,
    Workflow,
    Youtube,
    Zap,
}

impl Icon {
    /// Icon used when a milestone id has no entry in [`Icon::for_milestone`].
    pub const MILESTONE_FALLBACK: Icon = Icon::Rocket;
    /// Icon used when a service id has no entry in [`Icon::for_service`].
    pub const SERVICE_FALLBACK: Icon = Icon::Youtube;

    pub fn for_milestone(id: u32) -> Icon {
        match id {
            1 => Icon::Rocket,
            2 => Icon::TrendingUp,
            3 => Icon::Award,
            4 => Icon::Globe,
            5 => Icon::Cpu,
            _ => Self::MILESTONE_FALLBACK,
        }
    }

    pub fn for_service(id: &str) -> Icon {
        match id {
            "01" => Icon::Youtube,
            "02" => Icon::Film,
            "03" => Icon::Share,
            "04" => Icon::Bot,
            _ => Self::SERVICE_FALLBACK,
        }
    }

    /// Looks up the icons content records refer to by name.
    pub fn from_key(key: &str) -> Option<Icon> {
        let icon = match key {
            "award" => Icon::Award,
            "bot" => Icon::Bot,
            "cpu" => Icon::Cpu,
            "film" => Icon::Film,
            "globe" => Icon::Globe,
            "layers" => Icon::Layers,
            "linkedin" => Icon::Linkedin,
            "mail" => Icon::Mail,
            "repeat" => Icon::Repeat,
            "rocket" => Icon::Rocket,
            "settings" => Icon::Settings,
            "share" => Icon::Share,
            "sparkles" => Icon::Sparkles,
            "target" => Icon::Target,
            "trending-up" => Icon::TrendingUp,
            "workflow" => Icon::Workflow,
            "youtube" => Icon::Youtube,
            "zap" => Icon::Zap,
            _ => return None,
        };
        Some(icon)
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Icon::ArrowRight => "→",
            Icon::ArrowUp => "↑",
            Icon::ArrowUpRight => "↗",
            Icon::Award => "🏆",
            Icon::Bot => "🤖",
            Icon::Building => "🏢",
            Icon::Cpu => "🧠",
            Icon::Film => "🎞",
            Icon::Globe => "🌐",
            Icon::Layers => "🗂",
            Icon::Linkedin => "in",
            Icon::Mail => "✉",
            Icon::MapPin => "📍",
            Icon::Phone => "☎",
            Icon::Repeat => "🔁",
            Icon::Rocket => "🚀",
            Icon::Send => "➤",
            Icon::Settings => "⚙",
            Icon::Share => "🔗",
            Icon::Sparkles => "✨",
            Icon::Target => "🎯",
            Icon::TrendingUp => "📈",
            Icon::Workflow => "🔀",
            Icon::Youtube => "▶",
            Icon::Zap => "⚡",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Icon::ArrowRight => "arrow-right",
            Icon::ArrowUp => "arrow-up",
            Icon::ArrowUpRight => "arrow-up-right",
            Icon::Award => "award",
            Icon::Bot => "bot",
            Icon::Building => "building",
            Icon::Cpu => "cpu",
            Icon::Film => "film",
            Icon::Globe => "globe",
            Icon::Layers => "layers",
            Icon::Linkedin => "linkedin",
            Icon::Mail => "mail",
            Icon::MapPin => "map-pin",
            Icon::Phone => "phone",
            Icon::Repeat => "repeat",
            Icon::Rocket => "rocket",
            Icon::Send => "send",
            Icon::Settings => "settings",
            Icon::Share => "share",
            Icon::Sparkles => "sparkles",
            Icon::Target => "target",
            Icon::TrendingUp => "trending-up",
            Icon::Workflow => "workflow",
            Icon::Youtube => "youtube",
            Icon::Zap => "zap",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct IconViewProps {
    pub icon: Icon,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(IconView)]
pub fn icon_view(props: &IconViewProps) -> Html {
    html! {
        <span
            class={classes!("icon", format!("icon-{}", props.icon.name()), props.class.clone())}
            aria-hidden="true"
        >
            {props.icon.glyph()}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn milestones_map_to_their_icons() {
        let mapped: Vec<Icon> = (1..=5).map(Icon::for_milestone).collect();
        assert_eq!(
            mapped,
            vec![Icon::Rocket, Icon::TrendingUp, Icon::Award, Icon::Globe, Icon::Cpu]
        );
    }

    #[test]
    fn unknown_ids_fall_back() {
        assert_eq!(Icon::for_milestone(0), Icon::MILESTONE_FALLBACK);
        assert_eq!(Icon::for_milestone(42), Icon::MILESTONE_FALLBACK);
        assert_eq!(Icon::for_service("99"), Icon::SERVICE_FALLBACK);
        assert_eq!(Icon::for_service(""), Icon::Youtube);
    }

    #[test]
    fn keys_round_trip_through_names() {
        for icon in [Icon::Cpu, Icon::Workflow, Icon::Sparkles, Icon::Layers, Icon::Zap] {
            assert_eq!(Icon::from_key(icon.name()), Some(icon));
        }
        assert_eq!(Icon::from_key("nope"), None);
    }
}
