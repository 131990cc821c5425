#![cfg(target_arch = "wasm32")]
use anyhow::anyhow;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;

mod background;
mod canvas;
mod config;
mod cursor;
mod dom;
mod frame;

use background::ParticleBackground;
use cursor::CustomCursor;

/// Both effects, alive for as long as this value is.
struct Effects {
    _background: ParticleBackground,
    _cursor: CustomCursor,
}

thread_local! {
    static MOUNTED: RefCell<Option<Effects>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("fx-web starting");

    if let Err(e) = mount_effects() {
        log::error!("mount error: {:?}", e);
    }
    Ok(())
}

/// Mount the particle background and custom cursor. No-op when already mounted.
#[wasm_bindgen]
pub fn mount() -> Result<(), JsValue> {
    mount_effects().map_err(|e| js_sys::Error::new(&format!("{e:#}")).into())
}

/// Stop both animation loops, detach listeners and remove created elements.
#[wasm_bindgen]
pub fn unmount() {
    let taken = MOUNTED.with(|m| m.borrow_mut().take());
    if let Some(effects) = taken {
        drop(effects);
        log::info!("[fx] unmounted");
    }
}

#[wasm_bindgen]
pub fn is_mounted() -> bool {
    MOUNTED.with(|m| m.borrow().is_some())
}

fn mount_effects() -> anyhow::Result<()> {
    if is_mounted() {
        return Ok(());
    }
    let document = dom::window_document().ok_or_else(|| anyhow!("no document"))?;
    let params = config::read_params(&document);

    let background = ParticleBackground::mount(&document, params.field)?;
    let cursor = CustomCursor::mount(&document, params.follower)?;
    MOUNTED.with(|m| {
        *m.borrow_mut() = Some(Effects {
            _background: background,
            _cursor: cursor,
        })
    });
    log::info!("[fx] mounted");
    Ok(())
}
