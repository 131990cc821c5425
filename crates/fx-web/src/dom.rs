use anyhow::anyhow;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Viewport size in CSS pixels (`innerWidth`, `innerHeight`).
pub fn viewport_size(window: &web::Window) -> (f64, f64) {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    (w.max(0.0), h.max(0.0))
}

/// Match the canvas backing store to the viewport and return its new size.
pub fn sync_canvas_to_viewport(window: &web::Window, canvas: &web::HtmlCanvasElement) -> (u32, u32) {
    let (w, h) = viewport_size(window);
    canvas.set_width(w as u32);
    canvas.set_height(h as u32);
    (canvas.width(), canvas.height())
}

pub fn set_styles(el: &web::HtmlElement, styles: &[(&str, &str)]) {
    let style = el.style();
    for (name, value) in styles {
        _ = style.set_property(name, value);
    }
}

/// An element looked up by id, or created and appended to `<body>` when the
/// page does not provide one. Created elements are removed again on drop.
pub struct MountedElement {
    pub element: web::HtmlElement,
    created: bool,
}

impl MountedElement {
    pub fn find_or_create(document: &web::Document, tag: &str, id: &str) -> anyhow::Result<Self> {
        let (el, created) = match document.get_element_by_id(id) {
            Some(el) => (el, false),
            None => {
                let el = document
                    .create_element(tag)
                    .map_err(|e| anyhow!("create <{}>: {:?}", tag, e))?;
                el.set_id(id);
                let body = document.body().ok_or_else(|| anyhow!("no body"))?;
                body.append_child(&el)
                    .map_err(|e| anyhow!("append #{}: {:?}", id, e))?;
                (el, true)
            }
        };
        let element = el
            .dyn_into::<web::HtmlElement>()
            .map_err(|e| anyhow!("#{} is not an HTML element: {:?}", id, e))?;
        Ok(Self { element, created })
    }
}

impl Drop for MountedElement {
    fn drop(&mut self) {
        if self.created {
            self.element.remove();
        }
    }
}

/// Listener registration that is withdrawn when the handle is dropped.
pub struct EventListener {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl EventListener {
    pub fn new(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> anyhow::Result<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        target
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .map_err(|e| anyhow!("listen for {}: {:?}", event, e))?;
        Ok(Self {
            target: target.clone(),
            event,
            closure,
        })
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}
