use anyhow::anyhow;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Self-rescheduling `requestAnimationFrame` loop.
///
/// Dropping the loop cancels the pending frame request and releases the
/// callback, so nothing runs after the owning effect is torn down.
pub struct AnimationLoop {
    pending: Rc<Cell<Option<i32>>>,
    tick: TickSlot,
}

impl AnimationLoop {
    pub fn start(mut on_frame: impl FnMut() + 'static) -> anyhow::Result<Self> {
        let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let tick: TickSlot = Rc::new(RefCell::new(None));

        let tick_clone = tick.clone();
        let pending_tick = pending.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            pending_tick.set(None);
            on_frame();
            if let Some(cb) = tick_clone.borrow().as_ref() {
                pending_tick.set(request_frame(cb));
            }
        }) as Box<dyn FnMut()>));

        let first = tick.borrow().as_ref().and_then(request_frame);
        if first.is_none() {
            tick.borrow_mut().take();
            return Err(anyhow!("requestAnimationFrame unavailable"));
        }
        pending.set(first);
        Ok(Self { pending, tick })
    }
}

fn request_frame(cb: &Closure<dyn FnMut()>) -> Option<i32> {
    web::window()?
        .request_animation_frame(cb.as_ref().unchecked_ref())
        .ok()
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        if let Some(id) = self.pending.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
        // the closure holds a reference to its own slot; clearing it breaks the cycle
        self.tick.borrow_mut().take();
    }
}
