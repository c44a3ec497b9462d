use crate::style::StylePatch;
use crate::tilt::Rect;
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{window, Document, Element, Event, EventTarget, HtmlElement, MouseEvent};

pub fn document() -> Option<Document> {
    window()?.document()
}

pub fn query(selector: &str) -> Option<HtmlElement> {
    document()?
        .query_selector(selector)
        .ok()
        .flatten()?
        .dyn_into::<HtmlElement>()
        .ok()
}

pub fn query_all(selector: &str) -> Vec<HtmlElement> {
    let Some(nodes) = document().and_then(|d| d.query_selector_all(selector).ok()) else {
        return Vec::new();
    };

    (0..nodes.length())
        .filter_map(|index| nodes.item(index))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

pub fn by_id(id: &str) -> Option<HtmlElement> {
    document()?
        .get_element_by_id(id)?
        .dyn_into::<HtmlElement>()
        .ok()
}

/// The only place inline styles are written.
pub fn apply_patch(element: &HtmlElement, patch: &StylePatch) {
    let style = element.style();
    for (property, value) in patch.entries() {
        let _ = style.set_property(property, value);
    }
}

pub fn set_class(element: &Element, class: &str, present: bool) {
    let _ = element.class_list().toggle_with_force(class, present);
}

pub fn class_names(element: &Element) -> Vec<String> {
    element
        .class_name()
        .split_whitespace()
        .map(ToString::to_string)
        .collect()
}

pub fn inject_style(css: &str) -> bool {
    let Some(document) = document() else {
        return false;
    };
    let Some(head) = document.head() else {
        return false;
    };
    let Ok(style) = document.create_element("style") else {
        return false;
    };

    style.set_text_content(Some(css));
    head.append_child(&style).is_ok()
}

pub fn client_rect(element: &Element) -> Rect {
    let rect = element.get_bounding_client_rect();
    Rect {
        left: rect.left(),
        top: rect.top(),
        width: rect.width(),
        height: rect.height(),
    }
}

pub fn viewport_size() -> (f64, f64) {
    let Some(win) = window() else {
        return (1280.0, 720.0);
    };

    let width = win
        .inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(1280.0);
    let height = win
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(720.0);

    (width, height)
}

pub fn scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

/// An event listener that stays attached for as long as this value lives.
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub fn new(
        target: &EventTarget,
        event: &'static str,
        callback: impl FnMut(Event) + 'static,
    ) -> Option<Self> {
        let callback = Closure::<dyn FnMut(Event)>::new(callback);
        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .ok()?;

        Some(Self {
            target: target.clone(),
            event,
            callback,
        })
    }

    pub fn mouse(
        target: &EventTarget,
        event: &'static str,
        mut callback: impl FnMut(MouseEvent) + 'static,
    ) -> Option<Self> {
        Self::new(target, event, move |event: Event| {
            if let Ok(event) = event.dyn_into::<MouseEvent>() {
                callback(event);
            }
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

type Step = Rc<RefCell<Box<dyn FnMut() -> Option<u32>>>>;
type Slot = Rc<RefCell<Option<Timeout>>>;

/// Self-rescheduling timer. `step` returns the delay before its next run, or
/// `None` to stop. Dropping the loop cancels the pending run.
pub struct TimerLoop {
    slot: Slot,
}

impl TimerLoop {
    pub fn start(initial_delay_ms: u32, step: impl FnMut() -> Option<u32> + 'static) -> Self {
        let slot: Slot = Rc::new(RefCell::new(None));
        let step: Step = Rc::new(RefCell::new(Box::new(step)));
        arm(Rc::downgrade(&slot), step, initial_delay_ms);
        Self { slot }
    }

    pub fn is_running(&self) -> bool {
        self.slot.borrow().is_some()
    }
}

fn arm(slot: Weak<RefCell<Option<Timeout>>>, step: Step, delay_ms: u32) {
    let Some(strong) = slot.upgrade() else {
        return;
    };

    let timeout = Timeout::new(delay_ms, move || {
        let next = (&mut *step.borrow_mut())();
        match next {
            Some(delay_ms) => arm(slot, step, delay_ms),
            None => {
                if let Some(slot) = slot.upgrade() {
                    slot.borrow_mut().take();
                }
            }
        }
    });
    *strong.borrow_mut() = Some(timeout);
}
