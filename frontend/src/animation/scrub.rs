//! Scroll-linked motion for the hero: instead of playing once, these poses
//! follow the scroll position while the hero leaves the viewport.

/// Progress through a range that starts when the section top meets the
/// viewport top and ends after `end_fraction` of the section height.
pub fn progress(scroll_y: f64, section_height: f64, end_fraction: f64) -> f64 {
    let span = section_height * end_fraction;
    if span <= 0.0 {
        return if scroll_y > 0.0 { 1.0 } else { 0.0 };
    }
    (scroll_y / span).clamp(0.0, 1.0)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrubPose {
    /// Vertical shift as a percentage of the element's own height.
    pub y_percent: f64,
    pub opacity: f64,
}

impl ScrubPose {
    pub fn style(&self) -> String {
        format!(
            "transform: translateY({:.2}%); opacity: {:.3};",
            self.y_percent, self.opacity
        )
    }
}

/// Hero title: drifts down 30% and fades to 20% over the first half of the hero.
pub fn hero_title(scroll_y: f64, hero_height: f64) -> ScrubPose {
    let p = progress(scroll_y, hero_height, 0.5);
    ScrubPose { y_percent: p * 30.0, opacity: 1.0 - p * 0.8 }
}

/// Hero subtitle: drifts down 20% and fades out completely over 40% of the hero.
pub fn hero_subtitle(scroll_y: f64, hero_height: f64) -> ScrubPose {
    let p = progress(scroll_y, hero_height, 0.4);
    ScrubPose { y_percent: p * 20.0, opacity: 1.0 - p }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_is_clamped() {
        assert_eq!(progress(-50.0, 1000.0, 0.5), 0.0);
        assert_eq!(progress(250.0, 1000.0, 0.5), 0.5);
        assert_eq!(progress(5000.0, 1000.0, 0.5), 1.0);
    }

    #[test]
    fn zero_height_sections_snap() {
        assert_eq!(progress(0.0, 0.0, 0.5), 0.0);
        assert_eq!(progress(10.0, 0.0, 0.5), 1.0);
    }

    #[test]
    fn hero_layers_move_at_different_rates() {
        let title = hero_title(400.0, 800.0);
        assert_eq!(title, ScrubPose { y_percent: 30.0, opacity: 1.0 - 0.8 });

        let subtitle = hero_subtitle(160.0, 800.0);
        assert_eq!(subtitle.y_percent, 10.0);
        assert_eq!(subtitle.opacity, 0.5);

        let top = hero_title(0.0, 800.0);
        assert_eq!(top.style(), "transform: translateY(0.00%); opacity: 1.000;");
    }
}
