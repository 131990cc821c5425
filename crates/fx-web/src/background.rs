use crate::canvas::{context_2d, CanvasSurface};
use crate::dom::{self, EventListener, MountedElement};
use crate::frame::AnimationLoop;
use anyhow::anyhow;
use fx_core::{FieldParams, ParticleField};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub const CANVAS_ID: &str = "particle-canvas";

/// Full-viewport canvas of drifting, linked particles behind the page.
pub struct ParticleBackground {
    // drop order: stop the loop and the listener before removing the canvas
    _frame_loop: AnimationLoop,
    _resize: EventListener,
    _canvas: MountedElement,
}

impl ParticleBackground {
    pub fn mount(document: &web::Document, params: FieldParams) -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow!("no window"))?;
        let mounted = MountedElement::find_or_create(document, "canvas", CANVAS_ID)?;
        let canvas = mounted
            .element
            .clone()
            .dyn_into::<web::HtmlCanvasElement>()
            .map_err(|e| anyhow!("#{} is not a canvas: {:?}", CANVAS_ID, e))?;
        dom::set_styles(
            &mounted.element,
            &[
                ("position", "fixed"),
                ("top", "0"),
                ("left", "0"),
                ("z-index", "0"),
                ("pointer-events", "none"),
                ("-webkit-tap-highlight-color", "transparent"),
            ],
        );

        let field = Rc::new(RefCell::new(ParticleField::from_entropy(params)));
        fit_to_viewport(&window, &canvas, &field);

        let resize = {
            let canvas = canvas.clone();
            let field = field.clone();
            EventListener::new(&window, "resize", move |_| {
                if let Some(w) = web::window() {
                    fit_to_viewport(&w, &canvas, &field);
                }
            })?
        };

        let frame_loop = {
            let field = field.clone();
            let mut ctx: Option<web::CanvasRenderingContext2d> = None;
            AnimationLoop::start(move || {
                if ctx.is_none() {
                    ctx = context_2d(&canvas);
                }
                // no context yet: skip this frame and try again on the next one
                let Some(ctx) = ctx.as_ref() else {
                    return;
                };
                let (w, h) = (canvas.width() as f32, canvas.height() as f32);
                let mut surface = CanvasSurface::new(ctx);
                field.borrow_mut().frame(w, h, &mut surface);
            })?
        };

        log::info!(
            "[background] mounted with {} particles",
            field.borrow().particles().len()
        );
        Ok(Self {
            _frame_loop: frame_loop,
            _resize: resize,
            _canvas: mounted,
        })
    }
}

fn fit_to_viewport(
    window: &web::Window,
    canvas: &web::HtmlCanvasElement,
    field: &Rc<RefCell<ParticleField>>,
) {
    let (w, h) = dom::sync_canvas_to_viewport(window, canvas);
    let mut field = field.borrow_mut();
    field.initialize(w as f32, h as f32);
    log::debug!(
        "[background] resized to {}x{}, {} particles",
        w,
        h,
        field.particles().len()
    );
}
