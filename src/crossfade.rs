use crate::constants::{
    CAUTIONARY_PANE_SELECTOR, CROSSFADE_INPUT_SELECTOR, CROSSFADE_SELECTOR,
    HOPEFUL_PANE_SELECTOR, MASK_POSITION_VAR,
};
use crate::dom;
use crate::events::Listener;
use crate::style;
use ambient_core::{Crossfade, MotionMode, PaneState};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use web_sys as web;

struct Panes {
    hopeful: web::HtmlElement,
    cautionary: web::HtmlElement,
}

impl Panes {
    fn render(&self, fade: &Crossfade, mode: MotionMode) {
        let (hopeful, cautionary) = fade.panes(mode);
        apply_pane(&self.hopeful, hopeful);
        apply_pane(&self.cautionary, cautionary);
        dom::set_style(
            &self.cautionary,
            MASK_POSITION_VAR,
            &style::mask_position(fade.mask_percent(mode)),
        );
    }
}

fn apply_pane(el: &web::HtmlElement, state: PaneState) {
    dom::set_style(el, "opacity", &state.opacity.to_string());
    dom::set_style(el, "pointer-events", if state.interactive { "auto" } else { "none" });
    _ = el.set_attribute("aria-hidden", if state.hidden { "true" } else { "false" });
}

/// Story card whose slider fades between its hopeful and cautionary panes.
pub struct CrossfadeCard {
    fade: Rc<RefCell<Crossfade>>,
    mode: Rc<Cell<MotionMode>>,
    panes: Rc<Panes>,
    _input: Listener,
}

impl CrossfadeCard {
    fn mount(card: &web::Element, mode: MotionMode) -> anyhow::Result<Option<Self>> {
        let (Some(input), Some(hopeful), Some(cautionary)) = (
            dom::query_one::<web::HtmlInputElement>(card, CROSSFADE_INPUT_SELECTOR),
            dom::query_one::<web::HtmlElement>(card, HOPEFUL_PANE_SELECTOR),
            dom::query_one::<web::HtmlElement>(card, CAUTIONARY_PANE_SELECTOR),
        ) else {
            return Ok(None);
        };

        let fade = Rc::new(RefCell::new(Crossfade::new()));
        let mode = Rc::new(Cell::new(mode));
        let panes = Rc::new(Panes {
            hopeful,
            cautionary,
        });
        let initial = input.value_as_number();
        if initial.is_finite() {
            fade.borrow_mut().set_blend(initial as f32);
        }
        panes.render(&fade.borrow(), mode.get());

        let (f, m, p, field) = (fade.clone(), mode.clone(), panes.clone(), input.clone());
        let listener = Listener::new(&input, "input", move |_ev| {
            let value = field.value_as_number();
            if !value.is_finite() {
                return;
            }
            f.borrow_mut().set_blend(value as f32);
            p.render(&f.borrow(), m.get());
        })?;

        Ok(Some(Self {
            fade,
            mode,
            panes,
            _input: listener,
        }))
    }

    pub fn set_mode(&self, mode: MotionMode) {
        self.mode.set(mode);
        self.panes.render(&self.fade.borrow(), mode);
    }
}

pub fn mount_cards(root: &web::Element, mode: MotionMode) -> Vec<CrossfadeCard> {
    dom::query_all::<web::Element>(root, CROSSFADE_SELECTOR)
        .iter()
        .filter_map(|card| match CrossfadeCard::mount(card, mode) {
            Ok(Some(card)) => Some(card),
            Ok(None) => {
                log::warn!("[crossfade] card is missing its slider or panes");
                None
            }
            Err(e) => {
                log::warn!("[crossfade] card skipped: {:?}", e);
                None
            }
        })
        .collect()
}
