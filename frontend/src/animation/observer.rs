//! Browser side of the scroll reveal: binds a section's trigger zones to
//! IntersectionObservers for as long as the section is mounted.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{
    window, Event, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};
use yew::prelude::*;

use super::motion::Reveal;
use super::zone::{RevealGroup, Threshold, ZoneId};

/// Window event asking every mounted section to re-measure its zones.
pub const REFRESH_EVENT: &str = "reveal:refresh";

/// A region of a section and the entrance it plays.
#[derive(Clone, PartialEq)]
pub struct Zone {
    pub target: NodeRef,
    pub reveal: Reveal,
}

impl Zone {
    /// Pairs refs with a section's reveal plan. A disabled section has an
    /// empty plan and therefore gets no zones.
    pub fn bind(targets: &[NodeRef], plan: Vec<Reveal>) -> Vec<Zone> {
        targets
            .iter()
            .zip(plan)
            .map(|(target, reveal)| Zone { target: target.clone(), reveal })
            .collect()
    }
}

/// Registers `zones` once on mount and tears them all down on unmount.
#[hook]
pub fn use_scroll_reveal(section: &'static str, zones: Vec<Zone>) {
    use_effect_with_deps(
        move |_| {
            let binding = RevealBinding::attach(section, zones);
            move || drop(binding)
        },
        (),
    );
}

/// Asks every live section to check its unarmed zones against the current
/// layout, for regions that were already past their threshold when observed.
pub fn refresh_reveals() {
    let Some(window) = window() else {
        return;
    };
    match Event::new(REFRESH_EVENT) {
        Ok(event) => {
            if let Err(e) = window.dispatch_event(&event) {
                warn!("failed to dispatch {}: {:?}", REFRESH_EVENT, e);
            }
        }
        Err(e) => warn!("failed to create {}: {:?}", REFRESH_EVENT, e),
    }
}

struct Target {
    id: ZoneId,
    trigger: Threshold,
    element: HtmlElement,
}

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

struct RevealBinding {
    section: &'static str,
    group: Rc<RefCell<RevealGroup>>,
    observers: Vec<(IntersectionObserver, ObserverCallback)>,
    timers: Vec<Timeout>,
    refresh: Option<Closure<dyn FnMut()>>,
}

impl RevealBinding {
    fn attach(section: &'static str, zones: Vec<Zone>) -> Self {
        let group = Rc::new(RefCell::new(RevealGroup::new()));
        let mut targets = Vec::new();

        for zone in zones {
            let Some(element) = zone.target.cast::<HtmlElement>() else {
                debug!("{}: zone has no element, skipping", section);
                continue;
            };
            let Some(id) = group.borrow_mut().register(zone.reveal) else {
                continue;
            };
            for el in animated_elements(&element, &zone.reveal) {
                write_style(&el, &zone.reveal.from.style_properties());
            }
            targets.push(Target { id, trigger: zone.reveal.trigger, element });
        }
        let targets = Rc::new(targets);

        let fire: Rc<dyn Fn(ZoneId)> = {
            let group = group.clone();
            let targets = targets.clone();
            Rc::new(move |id: ZoneId| {
                let reveal = group.borrow_mut().intersect(id);
                let Some(reveal) = reveal else {
                    debug!(
                        "{}: zone {} ignored, state {:?}",
                        section,
                        id.index(),
                        group.borrow().state(id)
                    );
                    return;
                };
                if let Some(target) = targets.iter().find(|t| t.id == id) {
                    let count = play(&target.element, &reveal);
                    debug!(
                        "{}: zone {} revealed, settles in {}ms",
                        section,
                        id.index(),
                        reveal.total_ms(count)
                    );
                }
            })
        };

        let mut binding = RevealBinding {
            section,
            group: group.clone(),
            observers: Vec::new(),
            timers: Vec::new(),
            refresh: None,
        };

        for target in targets.iter() {
            let id = target.id;
            let fire = fire.clone();
            match target.trigger {
                Threshold::Mount => {
                    binding.timers.push(Timeout::new(0, move || fire(id)));
                }
                threshold @ Threshold::Top(_) => {
                    match observe(threshold, &target.element, move || fire(id)) {
                        Ok(observer) => binding.observers.push(observer),
                        Err(e) => warn!("{}: could not observe zone {}: {:?}", section, id.index(), e),
                    }
                }
            }
        }

        binding.refresh = listen_for_refresh(section, group, targets, fire);
        if binding.group.borrow().is_empty() {
            debug!("{}: nothing to reveal", section);
        } else {
            debug!("{}: {} zones armed", section, binding.group.borrow().len());
        }
        binding
    }
}

impl Drop for RevealBinding {
    fn drop(&mut self) {
        self.group.borrow_mut().dispose();
        for (observer, _) in &self.observers {
            observer.disconnect();
        }
        if let (Some(window), Some(refresh)) = (window(), self.refresh.as_ref()) {
            let _ = window
                .remove_event_listener_with_callback(REFRESH_EVENT, refresh.as_ref().unchecked_ref());
        }
        debug!("{}: zones disposed after {} reveals", self.section, self.group.borrow().fired());
        // Timeouts cancel themselves when the Vec drops.
    }
}

fn observe(
    threshold: Threshold,
    element: &HtmlElement,
    on_enter: impl Fn() + 'static,
) -> Result<(IntersectionObserver, ObserverCallback), JsValue> {
    let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
        let entered = entries
            .iter()
            .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
            .any(|entry| entry.is_intersecting());
        if entered {
            // One shot: nothing about this region matters after the first entry.
            observer.disconnect();
            on_enter();
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let init = IntersectionObserverInit::new();
    if let Some(margin) = threshold.root_margin() {
        init.set_root_margin(&margin);
    }
    init.set_threshold(&JsValue::from_f64(0.0));

    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    observer.observe(element);
    Ok((observer, callback))
}

fn listen_for_refresh(
    section: &'static str,
    group: Rc<RefCell<RevealGroup>>,
    targets: Rc<Vec<Target>>,
    fire: Rc<dyn Fn(ZoneId)>,
) -> Option<Closure<dyn FnMut()>> {
    let window = window()?;
    let callback = Closure::wrap(Box::new(move || {
        let viewport = web_sys::window()
            .and_then(|w| w.inner_height().ok())
            .and_then(|h| h.as_f64())
            .unwrap_or(0.0);
        let due: Vec<ZoneId> = {
            let group = group.borrow();
            group
                .unarmed()
                .filter(|(id, zone)| {
                    targets.iter().find(|t| t.id == *id).map_or(false, |t| {
                        let top = t.element.get_bounding_client_rect().top();
                        zone.reveal().trigger.crossed(top, viewport)
                    })
                })
                .map(|(id, _)| id)
                .collect()
        };
        for id in due {
            fire(id);
        }
    }) as Box<dyn FnMut()>);

    match window.add_event_listener_with_callback(REFRESH_EVENT, callback.as_ref().unchecked_ref()) {
        Ok(()) => Some(callback),
        Err(e) => {
            warn!("{}: could not listen for {}: {:?}", section, REFRESH_EVENT, e);
            None
        }
    }
}

/// The zone element itself, or the children its reveal staggers across.
fn animated_elements(element: &HtmlElement, reveal: &Reveal) -> Vec<HtmlElement> {
    let Some(selector) = reveal.children else {
        return vec![element.clone()];
    };
    match element.query_selector_all(selector) {
        Ok(list) => (0..list.length())
            .filter_map(|i| list.get(i))
            .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
            .collect(),
        Err(e) => {
            warn!("bad stagger selector {}: {:?}", selector, e);
            Vec::new()
        }
    }
}

/// Plays the reveal and returns how many elements it moved.
fn play(element: &HtmlElement, reveal: &Reveal) -> usize {
    let elements = animated_elements(element, reveal);
    for (index, el) in elements.iter().enumerate() {
        // Flush styles so the transition starts from the start pose.
        let _ = el.offset_height();
        write_style(el, &reveal.end_properties(index));
    }
    elements.len()
}

fn write_style(element: &HtmlElement, properties: &[(&'static str, String)]) {
    let style = element.style();
    for (name, value) in properties {
        if let Err(e) = style.set_property(name, value) {
            warn!("could not set {}: {:?}", name, e);
        }
    }
}
