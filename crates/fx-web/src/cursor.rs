use crate::dom::{self, EventListener, MountedElement};
use crate::frame::AnimationLoop;
use fx_core::{
    interactive_selector, is_interactive_tag, pulse_keyframes_css, FollowerFrame, FollowerParams,
    PointerFollower, Rgba, ACCENT_RGB,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub const DOT_ID: &str = "cursor-dot";
pub const RING_ID: &str = "cursor-ring";
const HOVER_CLASS: &str = "hover";
const PULSE_STYLE_ID: &str = "cursor-pulse-style";
const PULSE_ANIMATION: &str = "fx-cursor-pulse";

/// Replacement pointer: a dot pinned to the cursor and a ring that trails it.
pub struct CustomCursor {
    _frame_loop: AnimationLoop,
    _listeners: Vec<EventListener>,
    body: Option<web::HtmlElement>,
    prev_body_cursor: String,
    _dot: MountedElement,
    _ring: MountedElement,
    _pulse_style: MountedElement,
}

impl CustomCursor {
    pub fn mount(document: &web::Document, params: FollowerParams) -> anyhow::Result<Self> {
        let accent = Rgba::from_rgb(ACCENT_RGB, 1.0).to_css();
        let dot = MountedElement::find_or_create(document, "div", DOT_ID)?;
        let ring = MountedElement::find_or_create(document, "div", RING_ID)?;
        let shared = [
            ("position", "fixed"),
            ("pointer-events", "none"),
            ("z-index", "9999"),
            ("border-radius", "50%"),
            ("transform", "translate3d(0, 0, 0)"),
            ("transition", "width 0.2s, height 0.2s, top 0.2s, left 0.2s"),
        ];
        dom::set_styles(&dot.element, &shared);
        dom::set_styles(&ring.element, &shared);
        dom::set_styles(&dot.element, &[("background-color", accent.as_str())]);
        let border = format!("2px solid {accent}");
        dom::set_styles(&ring.element, &[("border", border.as_str())]);

        let pulse_style = MountedElement::find_or_create(document, "style", PULSE_STYLE_ID)?;
        pulse_style
            .element
            .set_text_content(Some(&pulse_keyframes_css(PULSE_ANIMATION)));

        let follower = Rc::new(RefCell::new(PointerFollower::new(params)));
        apply_hover_style(
            &dot.element,
            &ring.element,
            &follower.borrow().current_frame(),
        );

        let listeners = wire_pointer_listeners(document, &follower)?;

        let frame_loop = {
            let dot = dot.element.clone();
            let ring = ring.element.clone();
            let mut last_hover = false;
            AnimationLoop::start(move || {
                let frame = follower.borrow_mut().tick();
                if frame.hover != last_hover {
                    apply_hover_style(&dot, &ring, &frame);
                    last_hover = frame.hover;
                }
                apply_positions(&dot, &ring, &frame);
            })?
        };

        // hide the system pointer while the replacement is shown
        let body = document.body();
        let prev_body_cursor = body
            .as_ref()
            .and_then(|b| b.style().get_property_value("cursor").ok())
            .unwrap_or_default();
        if let Some(b) = &body {
            _ = b.style().set_property("cursor", "none");
        }

        log::info!("[cursor] mounted");
        Ok(Self {
            _frame_loop: frame_loop,
            _listeners: listeners,
            body,
            prev_body_cursor,
            _dot: dot,
            _ring: ring,
            _pulse_style: pulse_style,
        })
    }
}

impl Drop for CustomCursor {
    fn drop(&mut self) {
        if let Some(b) = &self.body {
            let style = b.style();
            if self.prev_body_cursor.is_empty() {
                _ = style.remove_property("cursor");
            } else {
                _ = style.set_property("cursor", &self.prev_body_cursor);
            }
        }
    }
}

fn wire_pointer_listeners(
    document: &web::Document,
    follower: &Rc<RefCell<PointerFollower>>,
) -> anyhow::Result<Vec<EventListener>> {
    let on_move = {
        let follower = follower.clone();
        EventListener::new(document, "mousemove", move |ev| {
            if let Some(ev) = ev.dyn_ref::<web::MouseEvent>() {
                follower
                    .borrow_mut()
                    .on_pointer_move(ev.client_x() as f32, ev.client_y() as f32);
            }
        })?
    };

    let selector = interactive_selector();
    let on_over = {
        let follower = follower.clone();
        let selector = selector.clone();
        EventListener::new(document, "mouseover", move |ev| {
            let interactive = targets_interactive(&ev, &selector);
            follower.borrow_mut().on_pointer_enter(interactive);
        })?
    };
    let on_out = {
        let follower = follower.clone();
        EventListener::new(document, "mouseout", move |ev| {
            let interactive = targets_interactive(&ev, &selector);
            follower.borrow_mut().on_pointer_leave(interactive);
        })?
    };

    Ok(vec![on_move, on_over, on_out])
}

/// The event target is a button or link, or sits inside one.
fn targets_interactive(ev: &web::Event, selector: &str) -> bool {
    let Some(el) = ev
        .target()
        .and_then(|t| t.dyn_into::<web::Element>().ok())
    else {
        return false;
    };
    is_interactive_tag(&el.tag_name()) || matches!(el.closest(selector), Ok(Some(_)))
}

fn apply_positions(dot: &web::HtmlElement, ring: &web::HtmlElement, frame: &FollowerFrame) {
    _ = dot.style().set_property(
        "transform",
        &format!("translate3d({}px, {}px, 0)", frame.dot.x, frame.dot.y),
    );
    _ = ring.style().set_property(
        "transform",
        &format!("translate3d({}px, {}px, 0)", frame.ring.x, frame.ring.y),
    );
}

fn apply_hover_style(dot: &web::HtmlElement, ring: &web::HtmlElement, frame: &FollowerFrame) {
    size_centered(dot, frame.dot_size);
    size_centered(ring, frame.ring_size);
    _ = ring
        .style()
        .set_property("opacity", &frame.ring_opacity.to_string());
    let pulse = match frame.dot_pulse_sec {
        Some(period) => format!("{PULSE_ANIMATION} {period}s infinite"),
        None => "none".to_string(),
    };
    _ = dot.style().set_property("animation", &pulse);
    for el in [dot, ring] {
        _ = el
            .class_list()
            .toggle_with_force(HOVER_CLASS, frame.hover);
    }
}

// Offsets by half the size so the translate3d coordinate is the centre.
fn size_centered(el: &web::HtmlElement, size: f32) {
    let px = format!("{size}px");
    let offset = format!("{}px", -size / 2.0);
    dom::set_styles(
        el,
        &[
            ("width", px.as_str()),
            ("height", px.as_str()),
            ("top", offset.as_str()),
            ("left", offset.as_str()),
        ],
    );
}
