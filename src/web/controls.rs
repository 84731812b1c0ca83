//! Toggle controls discovered in the page markup.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use crate::caps::ControlRegistry;
use crate::consts::TOGGLE_SELECTOR;

/// Controls matching `.dark-mode-toggle`, re-queried on every pass so
/// relabeling never goes through stale element references.
///
/// Binding is a one-shot sweep: controls inserted into the page afterwards
/// are never wired up. There is no mutation observation.
#[derive(Default)]
pub struct DomControls;

impl DomControls {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ControlRegistry for DomControls {
    fn set_labels(&self, text: &str, aria: &str) {
        for_each_control(|el| label_control(el, text, aria));
    }

    fn bind(&self, text: &'static str, aria: &'static str, on_activate: Box<dyn Fn()>) {
        let on_activate: Rc<dyn Fn()> = Rc::from(on_activate);
        let Some(doc) = super::document() else { return };

        if doc.ready_state() == "loading" {
            // Too early to traverse; finish once the parser is done.
            let deferred = Closure::wrap(Box::new(move |_: web_sys::Event| {
                bind_all(text, aria, &on_activate);
            }) as Box<dyn FnMut(_)>);
            if doc
                .add_event_listener_with_callback(
                    "DOMContentLoaded",
                    deferred.as_ref().unchecked_ref(),
                )
                .is_ok()
            {
                deferred.forget();
            }
        } else {
            bind_all(text, aria, &on_activate);
        }
    }
}

fn bind_all(text: &str, aria: &str, on_activate: &Rc<dyn Fn()>) {
    for_each_control(|el| {
        label_control(el, text, aria);
        attach_activation(el, on_activate);
    });
}

fn for_each_control(mut f: impl FnMut(&web_sys::Element)) {
    let Some(doc) = super::document() else { return };
    let Ok(nodes) = doc.query_selector_all(TOGGLE_SELECTOR) else { return };
    for index in 0..nodes.length() {
        if let Some(el) = nodes.item(index).and_then(|node| node.dyn_into::<web_sys::Element>().ok()) {
            f(&el);
        }
    }
}

fn label_control(el: &web_sys::Element, text: &str, aria: &str) {
    el.set_text_content(Some(text));
    let _ = el.set_attribute("aria-label", aria);
}

/// Wire click plus Enter/Space keydown to the activation handler. All three
/// suppress the control's default action so a link-styled control does not
/// navigate and Space does not scroll.
fn attach_activation(el: &web_sys::Element, on_activate: &Rc<dyn Fn()>) {
    let handler = Rc::clone(on_activate);
    let click = Closure::wrap(Box::new(move |event: web_sys::Event| {
        event.prevent_default();
        handler();
    }) as Box<dyn FnMut(_)>);
    if el
        .add_event_listener_with_callback("click", click.as_ref().unchecked_ref())
        .is_ok()
    {
        click.forget();
    }

    let handler = Rc::clone(on_activate);
    let keydown = Closure::wrap(Box::new(move |event: web_sys::KeyboardEvent| {
        let key = event.key();
        if key == "Enter" || key == " " {
            event.prevent_default();
            handler();
        }
    }) as Box<dyn FnMut(_)>);
    if el
        .add_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref())
        .is_ok()
    {
        keydown.forget();
    }
}
