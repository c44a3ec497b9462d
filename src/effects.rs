use crate::animators::{self, CounterAnimation};
use crate::config::{EffectsConfig, CONFIG_ELEMENT_ID};
use crate::dom::{self, Listener, TimerLoop};
use crate::logging::{log_event, LogLevel};
use crate::navigation::{self, MenuState, SectionOffset};
use crate::parallax;
use crate::particles::{self, MathRandom, ParticleDescriptor, PARTICLE_CLASS};
use crate::reveal::{self, RevealLedger, RevealTrigger, REVEALED_CLASS};
use crate::tilt;
use crate::typing::{TypingDelays, TypingState};
use gloo_timers::callback::Timeout;
use js_sys::Array;
use serde_json::json;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    window, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, ScrollBehavior, ScrollIntoViewOptions,
};

const ACTIVE_CLASS: &str = "active";

#[derive(Default)]
struct Animations {
    loops: Vec<TimerLoop>,
    timeouts: Vec<Timeout>,
}

struct RevealObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Everything installed on the page. Dropping it detaches all listeners,
/// disconnects the observer and cancels pending timers.
pub struct Effects {
    _listeners: Vec<Listener>,
    _typing: Option<TimerLoop>,
    _observer: Option<RevealObserver>,
    _animations: Rc<RefCell<Animations>>,
}

pub fn load_config() -> EffectsConfig {
    let Some(raw) = dom::by_id(CONFIG_ELEMENT_ID).and_then(|element| element.text_content()) else {
        return EffectsConfig::default();
    };

    match EffectsConfig::from_json(&raw) {
        Ok(config) => config,
        Err(error) => {
            let defaults = EffectsConfig::default();
            log_event(
                defaults.log_level,
                LogLevel::Warn,
                "config_invalid",
                json!({ "error": error.to_string() }),
            );
            defaults
        }
    }
}

pub fn install(config: EffectsConfig) -> Effects {
    let config = Rc::new(config);
    let animations = Rc::new(RefCell::new(Animations::default()));
    let mut listeners = Vec::new();

    dom::inject_style(reveal::REVEALED_RULE);
    dom::inject_style(particles::PARTICLE_KEYFRAMES);

    listeners.extend(install_navigation(&config));
    let typing = install_typing(&config);
    listeners.extend(install_tilt(&config));
    let observer = install_reveal(&config, &animations);
    prepare_skill_bars();
    prepare_counters();
    let particle_count = install_particles(&config);
    listeners.extend(install_parallax(&config));
    listeners.extend(install_glow());

    log_event(
        config.log_level,
        LogLevel::Info,
        "effects_installed",
        json!({
            "listeners": listeners.len(),
            "typing": typing.as_ref().is_some_and(TimerLoop::is_running),
            "observer": observer.is_some(),
            "particles": particle_count,
        }),
    );

    Effects {
        _listeners: listeners,
        _typing: typing,
        _observer: observer,
        _animations: animations,
    }
}

fn log_missing(config: &EffectsConfig, selector: &str) {
    log_event(
        config.log_level,
        LogLevel::Debug,
        "element_missing",
        json!({ "selector": selector }),
    );
}

fn install_navigation(config: &Rc<EffectsConfig>) -> Vec<Listener> {
    let mut listeners = Vec::new();
    let menu = Rc::new(Cell::new(MenuState::default()));
    let burger = dom::query(".burger");
    let nav_links = dom::query(".nav-links");
    let links = dom::query_all(".nav-link");

    let show_menu = {
        let burger = burger.clone();
        let nav_links = nav_links.clone();
        move |state: MenuState| {
            for element in burger.iter().chain(nav_links.iter()) {
                dom::set_class(element, ACTIVE_CLASS, state.is_open());
            }
        }
    };

    match burger.as_ref() {
        Some(burger) => {
            let menu = menu.clone();
            let show_menu = show_menu.clone();
            listeners.extend(Listener::new(burger, "click", move |_| {
                let next = menu.get().toggled();
                menu.set(next);
                show_menu(next);
            }));
        }
        None => log_missing(config, ".burger"),
    }

    for link in &links {
        let menu = menu.clone();
        let show_menu = show_menu.clone();
        let href = link.get_attribute("href").unwrap_or_default();
        listeners.extend(Listener::new(link, "click", move |event| {
            let activation = navigation::activate_link(menu.get(), &href);
            menu.set(activation.menu);
            show_menu(activation.menu);

            if activation.prevent_default {
                event.prevent_default();
            }
            if let Some(section) = activation.scroll_to.and_then(dom::by_id) {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                section.scroll_into_view_with_scroll_into_view_options(&options);
            }
        }));
    }

    let Some(win) = window() else {
        return listeners;
    };
    let navbar = dom::query(".glass-nav");
    if navbar.is_none() {
        log_missing(config, ".glass-nav");
    }
    let link_targets: Vec<(HtmlElement, String)> = links
        .into_iter()
        .map(|link| {
            let href = link.get_attribute("href").unwrap_or_default();
            (link, href)
        })
        .collect();
    let config = config.clone();

    listeners.extend(Listener::new(&win, "scroll", move |_| {
        let scroll_y = dom::scroll_y();
        let sections: Vec<SectionOffset> = dom::query_all("section")
            .iter()
            .map(|section| SectionOffset {
                id: section.get_attribute("id"),
                top: f64::from(section.offset_top()),
            })
            .collect();
        let active = navigation::active_section(&sections, scroll_y, config.nav_lookahead);

        for (link, href) in &link_targets {
            dom::set_class(link, ACTIVE_CLASS, navigation::is_link_active(href, active));
        }

        if let Some(navbar) = navbar.as_ref() {
            dom::apply_patch(
                navbar,
                &navigation::navbar_background(scroll_y, config.nav_tint_threshold),
            );
        }
    }));

    listeners
}

fn install_typing(config: &Rc<EffectsConfig>) -> Option<TimerLoop> {
    let Some(target) = dom::query(".dynamic-text") else {
        log_missing(config, ".dynamic-text");
        return None;
    };
    if config.words.is_empty() {
        return None;
    }

    let mut state = TypingState::new(config.words.as_slice(), TypingDelays::from_config(config));
    Some(TimerLoop::start(0, move || {
        let frame = state.tick()?;
        target.set_text_content(Some(&frame.text));
        Some(frame.delay_ms)
    }))
}

fn install_tilt(config: &Rc<EffectsConfig>) -> Vec<Listener> {
    let mut listeners = Vec::new();

    for element in dom::query_all("[data-tilt]") {
        let sensitivity = config.tilt_sensitivity;
        let tilted = element.clone();
        listeners.extend(Listener::mouse(&element, "mousemove", move |event| {
            let angles = tilt::tilt_angles(
                dom::client_rect(&tilted),
                f64::from(event.client_x()),
                f64::from(event.client_y()),
                sensitivity,
            );
            dom::apply_patch(&tilted, &tilt::card_tilt(angles));
        }));

        let resting = element.clone();
        listeners.extend(Listener::new(&element, "mouseleave", move |_| {
            dom::apply_patch(&resting, &tilt::card_rest());
        }));
    }

    match dom::by_id("codeWindow") {
        Some(code_window) => {
            let sensitivity = config.code_window_sensitivity;
            let tilted = code_window.clone();
            listeners.extend(Listener::mouse(&code_window, "mousemove", move |event| {
                let angles = tilt::tilt_angles(
                    dom::client_rect(&tilted),
                    f64::from(event.client_x()),
                    f64::from(event.client_y()),
                    sensitivity,
                );
                dom::apply_patch(&tilted, &tilt::code_window_tilt(angles));
            }));

            let resting = code_window.clone();
            listeners.extend(Listener::new(&code_window, "mouseleave", move |_| {
                dom::apply_patch(&resting, &tilt::code_window_rest());
            }));
        }
        None => log_missing(config, "#codeWindow"),
    }

    listeners
}

fn install_reveal(
    config: &Rc<EffectsConfig>,
    animations: &Rc<RefCell<Animations>>,
) -> Option<RevealObserver> {
    let sections = dom::query_all("section");
    for section in &sections {
        dom::apply_patch(section, &reveal::section_hidden());
    }
    if let Some(hero) = dom::query(".hero") {
        dom::apply_patch(&hero, &reveal::section_visible());
    }
    for (index, card) in dom::query_all(".glass-card").iter().enumerate() {
        dom::apply_patch(card, &reveal::card_stagger(index, config.card_stagger_ms));
    }

    let ledger = Rc::new(RefCell::new(RevealLedger::new()));
    let observed: Vec<Element> = sections.iter().map(|section| (**section).clone()).collect();
    let callback = {
        let config = config.clone();
        let animations = animations.clone();
        Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    let target = entry.target();
                    let Some(index) = observed.iter().position(|section| *section == target) else {
                        continue;
                    };
                    if !ledger.borrow_mut().observe(index, entry.is_intersecting()) {
                        continue;
                    }
                    log_event(
                        config.log_level,
                        LogLevel::Debug,
                        "section_revealed",
                        json!({ "section": index, "revealed": ledger.borrow().revealed_count() }),
                    );

                    dom::set_class(&target, REVEALED_CLASS, true);
                    observer.unobserve(&target);

                    let classes = dom::class_names(&target);
                    for trigger in RevealTrigger::for_classes(classes.iter().map(String::as_str)) {
                        log_event(
                            config.log_level,
                            LogLevel::Debug,
                            "reveal_trigger",
                            json!({ "section": index, "trigger": trigger.as_str() }),
                        );
                        match trigger {
                            RevealTrigger::SkillBars => animate_skill_bars(&config, &animations),
                            RevealTrigger::Counters => animate_counters(&config, &animations),
                        }
                    }
                }
            },
        )
    };

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config.reveal_threshold));
    options.set_root_margin(&config.reveal_root_margin());
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options).ok()?;
    for section in &sections {
        observer.observe(section);
    }

    Some(RevealObserver {
        observer,
        _callback: callback,
    })
}

fn prepare_skill_bars() {
    for bar in dom::query_all(".skill-progress") {
        dom::apply_patch(&bar, &animators::skill_bar_collapsed());
    }
}

fn prepare_counters() {
    for counter in dom::query_all(".stat-number") {
        counter.set_text_content(Some("0"));
    }
}

fn animate_skill_bars(config: &Rc<EffectsConfig>, animations: &Rc<RefCell<Animations>>) {
    let bars: Vec<_> = dom::query_all(".skill-progress")
        .into_iter()
        .filter_map(|bar| {
            let raw = bar.get_attribute("data-progress").unwrap_or_default();
            match animators::skill_bar_width(&raw) {
                Some(width) => Some((bar, width)),
                None => {
                    log_event(
                        config.log_level,
                        LogLevel::Debug,
                        "skill_bar_skipped",
                        json!({ "progress": raw }),
                    );
                    None
                }
            }
        })
        .collect();
    if bars.is_empty() {
        return;
    }

    let timeout = Timeout::new(config.skill_bar_delay_ms, move || {
        for (bar, width) in &bars {
            dom::apply_patch(bar, width);
        }
    });
    animations.borrow_mut().timeouts.push(timeout);
}

fn animate_counters(config: &Rc<EffectsConfig>, animations: &Rc<RefCell<Animations>>) {
    for counter in dom::query_all(".stat-number") {
        let raw = counter.get_attribute("data-count").unwrap_or_default();
        let Some(target) = animators::parse_counter_target(&raw) else {
            log_event(
                config.log_level,
                LogLevel::Debug,
                "counter_skipped",
                json!({ "count": raw }),
            );
            continue;
        };

        let frame_ms = config.counter_frame_ms;
        let mut animation = CounterAnimation::new(target, config.counter_duration_ms, frame_ms);
        let ticker = TimerLoop::start(0, move || {
            let frame = animation.next_frame()?;
            counter.set_text_content(Some(&frame.text));
            (!frame.done).then_some(frame_ms)
        });
        animations.borrow_mut().loops.push(ticker);
    }
}

fn install_particles(config: &Rc<EffectsConfig>) -> usize {
    let Some(container) = dom::by_id("particles") else {
        log_missing(config, "#particles");
        return 0;
    };
    let Some(document) = dom::document() else {
        return 0;
    };

    let mut appended = 0;
    for particle in particles::generate(config.particle_count, &mut MathRandom) {
        if append_particle(&document, &container, &particle) {
            appended += 1;
        }
    }
    appended
}

fn append_particle(
    document: &web_sys::Document,
    container: &HtmlElement,
    particle: &ParticleDescriptor,
) -> bool {
    let Some(element) = document
        .create_element("div")
        .ok()
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
    else {
        return false;
    };
    element.set_class_name(PARTICLE_CLASS);
    dom::apply_patch(&element, &particle.style());
    container.append_child(&element).is_ok()
}

fn install_parallax(config: &Rc<EffectsConfig>) -> Vec<Listener> {
    let mut listeners = Vec::new();

    match (dom::document(), dom::query(".bg-animation")) {
        (Some(document), Some(background)) => {
            let strength = config.parallax_strength;
            listeners.extend(Listener::mouse(&document, "mousemove", move |event| {
                let offset = parallax::background_offset(
                    f64::from(event.client_x()),
                    f64::from(event.client_y()),
                    dom::viewport_size(),
                    strength,
                );
                dom::apply_patch(&background, &parallax::background_shift(offset));
            }));
        }
        _ => log_missing(config, ".bg-animation"),
    }

    match (window(), dom::query(".hero")) {
        (Some(win), Some(hero)) => {
            let factor = config.hero_scroll_factor;
            listeners.extend(Listener::new(&win, "scroll", move |_| {
                dom::apply_patch(&hero, &parallax::hero_background(dom::scroll_y(), factor));
            }));
        }
        _ => log_missing(config, ".hero"),
    }

    listeners
}

fn install_glow() -> Vec<Listener> {
    dom::query_all(".glow-btn")
        .into_iter()
        .filter_map(|button| {
            let target = button.clone();
            Listener::mouse(&button, "mousemove", move |event| {
                let patch = parallax::glow_position(
                    dom::client_rect(&target),
                    f64::from(event.client_x()),
                    f64::from(event.client_y()),
                );
                dom::apply_patch(&target, &patch);
            })
        })
        .collect()
}
