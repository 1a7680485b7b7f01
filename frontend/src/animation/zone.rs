//! Trigger zones and the per-section group that owns them.
//!
//! A zone starts `Unarmed` and flips to `Revealed` the first time its region
//! crosses the threshold. Nothing moves it back. Disposing the group (the
//! section unmounting) retires every zone, after which no intersection report
//! has any effect.

use super::motion::Reveal;

/// When a zone fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Threshold {
    /// The region's top edge reaches this percentage down the viewport.
    Top(u8),
    /// Right after the section mounts, regardless of scroll position.
    Mount,
}

impl Threshold {
    /// IntersectionObserver `rootMargin` that shrinks the root to the top
    /// `pct` percent of the viewport.
    pub fn root_margin(self) -> Option<String> {
        match self {
            Threshold::Top(pct) => {
                let pct = pct.min(100);
                Some(format!("0px 0px -{}% 0px", 100 - pct))
            }
            Threshold::Mount => None,
        }
    }

    /// Whether a region whose top edge sits `top_px` below the viewport top
    /// has crossed the threshold.
    pub fn crossed(self, top_px: f64, viewport_px: f64) -> bool {
        match self {
            Threshold::Top(pct) => top_px <= viewport_px * f64::from(pct.min(100)) / 100.0,
            Threshold::Mount => true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneState {
    Unarmed,
    Revealed,
    Disposed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TriggerZone {
    reveal: Reveal,
    state: ZoneState,
}

impl TriggerZone {
    pub fn new(reveal: Reveal) -> Self {
        Self { reveal, state: ZoneState::Unarmed }
    }

    pub fn state(&self) -> ZoneState {
        self.state
    }

    pub fn reveal(&self) -> &Reveal {
        &self.reveal
    }

    /// Reports an intersection. Returns `true` only on the transition out of
    /// `Unarmed`.
    pub fn intersect(&mut self) -> bool {
        match self.state {
            ZoneState::Unarmed => {
                self.state = ZoneState::Revealed;
                true
            }
            ZoneState::Revealed | ZoneState::Disposed => false,
        }
    }

    pub fn dispose(&mut self) {
        self.state = ZoneState::Disposed;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ZoneId(usize);

impl ZoneId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// The trigger zones of one mounted section.
#[derive(Debug, Default)]
pub struct RevealGroup {
    zones: Vec<TriggerZone>,
    fired: usize,
    disposed: bool,
}

impl RevealGroup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a zone. A disposed group accepts nothing.
    pub fn register(&mut self, reveal: Reveal) -> Option<ZoneId> {
        if self.disposed {
            return None;
        }
        self.zones.push(TriggerZone::new(reveal));
        Some(ZoneId(self.zones.len() - 1))
    }

    /// Reports that the zone's region entered the trigger area. Yields the
    /// reveal to play the first time only.
    pub fn intersect(&mut self, id: ZoneId) -> Option<Reveal> {
        if self.disposed {
            return None;
        }
        let zone = self.zones.get_mut(id.0)?;
        if zone.intersect() {
            self.fired += 1;
            Some(zone.reveal)
        } else {
            None
        }
    }

    pub fn state(&self, id: ZoneId) -> Option<ZoneState> {
        self.zones.get(id.0).map(TriggerZone::state)
    }

    /// Zones still waiting for their first intersection.
    pub fn unarmed(&self) -> impl Iterator<Item = (ZoneId, &TriggerZone)> + '_ {
        self.zones
            .iter()
            .enumerate()
            .filter(|(_, zone)| zone.state == ZoneState::Unarmed)
            .map(|(i, zone)| (ZoneId(i), zone))
    }

    /// Number of transitions that have played.
    pub fn fired(&self) -> usize {
        self.fired
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    pub fn dispose(&mut self) {
        self.disposed = true;
        for zone in &mut self.zones {
            zone.dispose();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::motion::Pose;

    fn fade_up() -> Reveal {
        Reveal::new(Pose::offset_y(40.0))
    }

    #[test]
    fn first_intersection_reveals_once() {
        let mut group = RevealGroup::new();
        let id = group.register(fade_up()).unwrap();
        assert_eq!(group.state(id), Some(ZoneState::Unarmed));

        assert_eq!(group.intersect(id), Some(fade_up()));
        assert_eq!(group.state(id), Some(ZoneState::Revealed));

        for _ in 0..5 {
            assert_eq!(group.intersect(id), None);
        }
        assert_eq!(group.state(id), Some(ZoneState::Revealed));
        assert_eq!(group.fired(), 1);
    }

    #[test]
    fn zones_fire_independently() {
        let mut group = RevealGroup::new();
        let title = group.register(fade_up()).unwrap();
        let grid = group.register(fade_up().stagger(".milestone-item", 100)).unwrap();

        assert!(group.intersect(grid).is_some());
        assert_eq!(group.state(title), Some(ZoneState::Unarmed));
        assert_eq!(group.unarmed().map(|(id, _)| id).collect::<Vec<_>>(), vec![title]);
    }

    #[test]
    fn disposal_silences_pending_zones() {
        let mut group = RevealGroup::new();
        let a = group.register(fade_up()).unwrap();
        let b = group.register(fade_up()).unwrap();
        group.intersect(a);
        group.dispose();

        assert_eq!(group.intersect(a), None);
        assert_eq!(group.intersect(b), None);
        assert_eq!(group.state(b), Some(ZoneState::Disposed));
        assert_eq!(group.fired(), 1);
        assert_eq!(group.unarmed().count(), 0);
        assert!(group.register(fade_up()).is_none());
    }

    #[test]
    fn new_group_is_empty_until_registered() {
        let mut group = RevealGroup::new();
        assert!(group.is_empty());
        let id = group.register(fade_up()).unwrap();
        assert!(!group.is_empty());
        assert_eq!(group.len(), 1);
        assert_eq!(group.state(id), Some(ZoneState::Unarmed));
    }

    #[test]
    fn unknown_zone_is_ignored() {
        let mut group = RevealGroup::new();
        assert_eq!(group.intersect(ZoneId(3)), None);
        assert_eq!(group.state(ZoneId(3)), None);
    }

    #[test]
    fn top_threshold_maps_to_root_margin() {
        assert_eq!(Threshold::Top(80).root_margin().as_deref(), Some("0px 0px -20% 0px"));
        assert_eq!(Threshold::Top(100).root_margin().as_deref(), Some("0px 0px -0% 0px"));
        assert_eq!(Threshold::Mount.root_margin(), None);
    }

    #[test]
    fn crossing_is_measured_from_the_viewport_top() {
        let t = Threshold::Top(85);
        assert!(t.crossed(849.0, 1000.0));
        assert!(t.crossed(850.0, 1000.0));
        assert!(!t.crossed(851.0, 1000.0));
        assert!(t.crossed(-200.0, 1000.0));
        assert!(Threshold::Mount.crossed(5000.0, 1000.0));
    }
}
