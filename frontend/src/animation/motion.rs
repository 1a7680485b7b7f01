//! Entrance motion descriptors.
//!
//! A [`Reveal`] says where an element starts (a [`Pose`]), how long it takes
//! to settle at its natural position, and with which curve. Everything here is
//! plain data rendered to inline CSS; the browser does the interpolation.

use super::zone::Threshold;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Ease {
    Power2Out,
    ExpoOut,
    ExpoInOut,
    /// Overshoots slightly before settling.
    BackOut,
}

impl Ease {
    pub fn css(self) -> &'static str {
        match self {
            Ease::Power2Out => "cubic-bezier(0.215, 0.61, 0.355, 1)",
            Ease::ExpoOut => "cubic-bezier(0.16, 1, 0.3, 1)",
            Ease::ExpoInOut => "cubic-bezier(0.87, 0, 0.13, 1)",
            Ease::BackOut => "cubic-bezier(0.34, 1.56, 0.64, 1)",
        }
    }
}

/// A visual state relative to the element's resting layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub scale_x: f64,
    pub rotate_x: f64,
    pub rotate_y: f64,
    pub blur: f64,
    pub opacity: f64,
}

impl Pose {
    pub const REST: Pose = Pose {
        x: 0.0,
        y: 0.0,
        scale: 1.0,
        scale_x: 1.0,
        rotate_x: 0.0,
        rotate_y: 0.0,
        blur: 0.0,
        opacity: 1.0,
    };

    /// Transparent, otherwise at rest.
    pub const HIDDEN: Pose = Pose { opacity: 0.0, ..Pose::REST };

    pub const fn offset_y(y: f64) -> Pose {
        Pose { y, ..Pose::HIDDEN }
    }

    pub const fn offset_x(x: f64) -> Pose {
        Pose { x, ..Pose::HIDDEN }
    }

    /// A line drawn from its transform origin; stays opaque.
    pub const fn collapsed_x() -> Pose {
        Pose { scale_x: 0.0, ..Pose::REST }
    }

    pub const fn blur(self, px: f64) -> Pose {
        Pose { blur: px, ..self }
    }

    pub const fn scale(self, scale: f64) -> Pose {
        Pose { scale, ..self }
    }

    pub const fn rotate_x(self, deg: f64) -> Pose {
        Pose { rotate_x: deg, ..self }
    }

    pub const fn rotate_y(self, deg: f64) -> Pose {
        Pose { rotate_y: deg, ..self }
    }

    pub fn transform_css(&self) -> String {
        let mut parts = Vec::new();
        if self.x != 0.0 || self.y != 0.0 {
            parts.push(format!("translate3d({}px, {}px, 0px)", self.x, self.y));
        }
        if self.rotate_x != 0.0 {
            parts.push(format!("rotateX({}deg)", self.rotate_x));
        }
        if self.rotate_y != 0.0 {
            parts.push(format!("rotateY({}deg)", self.rotate_y));
        }
        if self.scale != 1.0 {
            parts.push(format!("scale({})", self.scale));
        }
        if self.scale_x != 1.0 {
            parts.push(format!("scaleX({})", self.scale_x));
        }
        if parts.is_empty() {
            "none".to_string()
        } else {
            parts.join(" ")
        }
    }

    pub fn filter_css(&self) -> String {
        if self.blur > 0.0 {
            format!("blur({}px)", self.blur)
        } else {
            "none".to_string()
        }
    }

    /// `(property, value)` pairs to write on the element.
    pub fn style_properties(&self) -> [(&'static str, String); 3] {
        [
            ("opacity", self.opacity.to_string()),
            ("transform", self.transform_css()),
            ("filter", self.filter_css()),
        ]
    }
}

/// One-shot entrance for a trigger zone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reveal {
    pub from: Pose,
    pub duration_ms: u32,
    pub ease: Ease,
    pub delay_ms: u32,
    pub stagger_ms: u32,
    /// Selector of the children to animate instead of the zone element itself.
    pub children: Option<&'static str>,
    pub trigger: Threshold,
}

impl Reveal {
    pub const fn new(from: Pose) -> Reveal {
        Reveal {
            from,
            duration_ms: 800,
            ease: Ease::Power2Out,
            delay_ms: 0,
            stagger_ms: 0,
            children: None,
            trigger: Threshold::Top(80),
        }
    }

    pub const fn duration(self, duration_ms: u32) -> Reveal {
        Reveal { duration_ms, ..self }
    }

    pub const fn ease(self, ease: Ease) -> Reveal {
        Reveal { ease, ..self }
    }

    pub const fn delay(self, delay_ms: u32) -> Reveal {
        Reveal { delay_ms, ..self }
    }

    pub const fn stagger(self, selector: &'static str, stagger_ms: u32) -> Reveal {
        Reveal { children: Some(selector), stagger_ms, ..self }
    }

    pub const fn at(self, trigger: Threshold) -> Reveal {
        Reveal { trigger, ..self }
    }

    /// Start delay of the `index`-th animated element.
    pub fn delay_for(&self, index: usize) -> u32 {
        self.delay_ms + self.stagger_ms.saturating_mul(index as u32)
    }

    pub fn transition_css(&self, index: usize) -> String {
        let delay = self.delay_for(index);
        let ease = self.ease.css();
        ["opacity", "transform", "filter"]
            .iter()
            .map(|prop| format!("{} {}ms {} {}ms", prop, self.duration_ms, ease, delay))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Style written when the zone fires: the transition first, then the rest pose.
    pub fn end_properties(&self, index: usize) -> Vec<(&'static str, String)> {
        let mut props = vec![("transition", self.transition_css(index))];
        props.extend(Pose::REST.style_properties());
        props
    }

    /// Time until the last animated element settles.
    pub fn total_ms(&self, elements: usize) -> u32 {
        let last = elements.saturating_sub(1);
        self.delay_for(last) + self.duration_ms
    }
}

/// Sequencing helper for entrances that play as one timeline.
///
/// Each step starts `offset_ms` after the current end of the timeline; a
/// negative offset overlaps the step with what came before.
#[derive(Debug, Clone, Default)]
pub struct Timeline {
    end_ms: i64,
}

impl Timeline {
    pub fn starting_at(delay_ms: u32) -> Timeline {
        Timeline { end_ms: delay_ms as i64 }
    }

    /// Adds a step and returns its absolute start.
    pub fn push(&mut self, duration_ms: u32, offset_ms: i64) -> u32 {
        let start = (self.end_ms + offset_ms).max(0);
        self.end_ms = self.end_ms.max(start + duration_ms as i64);
        start as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rest_pose_renders_as_identity() {
        assert_eq!(Pose::REST.transform_css(), "none");
        assert_eq!(Pose::REST.filter_css(), "none");
        assert_eq!(Pose::REST.style_properties()[0].1, "1");
    }

    #[test]
    fn start_poses_render_their_offsets() {
        let pose = Pose::offset_y(60.0).rotate_x(15.0).scale(0.95);
        assert_eq!(
            pose.transform_css(),
            "translate3d(0px, 60px, 0px) rotateX(15deg) scale(0.95)"
        );
        assert_eq!(pose.opacity, 0.0);

        let blurred = Pose::offset_y(30.0).blur(20.0);
        assert_eq!(blurred.filter_css(), "blur(20px)");

        let line = Pose::collapsed_x();
        assert_eq!(line.transform_css(), "scaleX(0)");
        assert_eq!(line.opacity, 1.0);
    }

    #[test]
    fn stagger_spreads_children() {
        let reveal = Reveal::new(Pose::offset_y(30.0))
            .duration(600)
            .delay(300)
            .stagger(".feature-item", 100);
        assert_eq!(reveal.delay_for(0), 300);
        assert_eq!(reveal.delay_for(3), 600);
        assert_eq!(reveal.total_ms(4), 1200);
        assert!(reveal.transition_css(2).contains("opacity 600ms"));
        assert!(reveal.transition_css(2).ends_with("500ms"));
    }

    #[test]
    fn end_style_sets_transition_before_rest_pose() {
        let reveal = Reveal::new(Pose::offset_y(40.0)).ease(Ease::ExpoOut);
        let props = reveal.end_properties(0);
        assert_eq!(props[0].0, "transition");
        assert!(props[0].1.contains(Ease::ExpoOut.css()));
        assert_eq!(&props[1..], &Pose::REST.style_properties()[..]);
    }

    #[test]
    fn timeline_overlaps_negative_offsets() {
        let mut tl = Timeline::starting_at(300);
        // Nine characters, 900ms each, 50ms apart.
        let chars = tl.push(900 + 50 * 8, 0);
        let subtitle = tl.push(800, -400);
        let cta = tl.push(700, -300);
        let line = tl.push(1200, -500);
        let decor = tl.push(1500, -1000);

        assert_eq!(chars, 300);
        assert_eq!(subtitle, 1200);
        assert_eq!(cta, 1700);
        assert_eq!(line, 1900);
        assert_eq!(decor, 2100);
    }

    #[test]
    fn timeline_never_starts_before_zero() {
        let mut tl = Timeline::default();
        assert_eq!(tl.push(100, -500), 0);
        // The next step queues behind the clamped one.
        assert_eq!(tl.push(50, 0), 100);
    }
}
