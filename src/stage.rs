use crate::crossfade::{self, CrossfadeCard};
use crate::dom;
use crate::motion::MotionPreference;
use crate::parallax::ParallaxWiring;
use crate::tilt::{self, TiltPanel};
use crate::wash::WashWiring;
use ambient_core::{AmbientSlot, MotionMode, Palette};
use anyhow::anyhow;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use web_sys as web;

/// Page shell: owns the motion preference, the shared ambient slot and
/// every controller, and fans preference changes out to them.
pub struct Stage {
    mode: MotionMode,
    preference: MotionPreference,
    slot: AmbientSlot,
    parallax: ParallaxWiring,
    wash: WashWiring,
    panels: Vec<TiltPanel>,
    cards: Vec<CrossfadeCard>,
    torn_down: bool,
}

impl Stage {
    pub fn mount(window: web::Window, document: web::Document) -> anyhow::Result<Rc<RefCell<Stage>>> {
        let root = dom::root_element(&document).ok_or_else(|| anyhow!("no root element"))?;
        let preference = MotionPreference::new(&window);
        let mode = preference.mode();
        let slot = AmbientSlot::new();

        let mut parallax = ParallaxWiring::new(window.clone(), document.clone(), mode);
        let layers = parallax.register_layers(&root);
        parallax.start()?;

        let mut wash = WashWiring::new(
            window.clone(),
            root.clone(),
            slot.clone(),
            Palette::default(),
            mode,
        );
        wash.start(&root)?;

        let panels = tilt::mount_panels(&window, &root, mode);
        let cards = crossfade::mount_cards(&root, mode);
        log::info!(
            "[stage] mounted mode={:?} layers={} panels={} cards={}",
            mode,
            layers,
            panels.len(),
            cards.len()
        );

        let stage = Rc::new(RefCell::new(Stage {
            mode,
            preference,
            slot,
            parallax,
            wash,
            panels,
            cards,
            torn_down: false,
        }));

        let weak: Weak<RefCell<Stage>> = Rc::downgrade(&stage);
        let watched = stage.borrow_mut().preference.watch(move |mode| {
            if let Some(stage) = weak.upgrade() {
                stage.borrow_mut().set_mode(mode);
            }
        });
        if let Err(e) = watched {
            log::warn!("[stage] reduced-motion changes will not be tracked: {:?}", e);
        }
        Ok(stage)
    }

    pub fn mode(&self) -> MotionMode {
        self.mode
    }

    pub fn ambient(&self) -> &AmbientSlot {
        &self.slot
    }

    /// Re-snap or re-attach every controller for the new mode.
    pub fn set_mode(&mut self, mode: MotionMode) {
        if self.torn_down || self.mode == mode {
            return;
        }
        self.mode = mode;
        if let Err(e) = self.parallax.set_mode(mode) {
            log::error!("[stage] parallax mode change: {:?}", e);
        }
        self.wash.set_mode(mode);
        for panel in &mut self.panels {
            if let Err(e) = panel.set_mode(mode) {
                log::error!("[stage] tilt mode change: {:?}", e);
            }
        }
        for card in &self.cards {
            card.set_mode(mode);
        }
        log::info!("[stage] mode -> {:?}", mode);
    }

    /// Detach everything and cancel pending frames. Safe to repeat.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.torn_down = true;
        self.preference.unwatch();
        self.parallax.stop();
        self.wash.stop();
        for panel in &mut self.panels {
            panel.stop();
        }
        self.cards.clear();
        log::info!("[stage] torn down");
    }
}

impl Drop for Stage {
    fn drop(&mut self) {
        self.teardown();
    }
}
