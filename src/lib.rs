#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

mod constants;
mod crossfade;
mod dom;
mod events;
mod frame;
mod motion;
mod parallax;
mod stage;
mod style;
mod tilt;
mod wash;

use stage::Stage;

thread_local! {
    static STAGE: RefCell<Option<Rc<RefCell<Stage>>>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("ambient-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let (window, document) =
        dom::window_document().ok_or_else(|| anyhow::anyhow!("no window or document"))?;
    let stage = Stage::mount(window, document)?;
    STAGE.with(|slot| {
        if let Some(previous) = slot.borrow_mut().replace(stage) {
            previous.borrow_mut().teardown();
        }
    });
    Ok(())
}

/// Detach every listener and cancel pending frames.
#[wasm_bindgen]
pub fn teardown() {
    let stage = STAGE.with(|slot| slot.borrow_mut().take());
    if let Some(stage) = stage {
        stage.borrow_mut().teardown();
    }
}

/// Last ambient color written to the page, as `#rrggbb`.
#[wasm_bindgen(js_name = ambientColor)]
pub fn ambient_color() -> Option<String> {
    STAGE.with(|slot| {
        slot.borrow()
            .as_ref()
            .and_then(|stage| stage.borrow().ambient().color())
            .map(|c| c.to_hex())
    })
}

/// `true` while the reduced-motion preference is in effect.
#[wasm_bindgen(js_name = reducedMotion)]
pub fn reduced_motion() -> bool {
    STAGE.with(|slot| {
        slot.borrow()
            .as_ref()
            .is_some_and(|stage| stage.borrow().mode().is_static())
    })
}
