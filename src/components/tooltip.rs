//! Hover hints drawn above the drawer.
//!
//! The drawer paper scrolls, so anything positioned inside it is clipped to
//! its box. Hints are therefore rendered by a fixed layer outside the drawer
//! and placed from the hovered element's bounding rect.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Gap between the hovered element and the hint, in pixels.
pub const TOOLTIP_GAP: f64 = 8.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    pub text: &'static str,
    pub top: f64,
    pub left: f64,
}

impl Tooltip {
    /// Hint vertically centred on an element and placed right of it.
    pub fn beside(text: &'static str, top: f64, bottom: f64, right: f64) -> Self {
        Self {
            text,
            top: (top + bottom) / 2.0,
            left: right + TOOLTIP_GAP,
        }
    }

    pub fn style(&self) -> String {
        format!("top: {}px; left: {}px;", self.top, self.left)
    }
}

#[derive(Clone, Copy)]
pub struct TooltipContext(pub RwSignal<Option<Tooltip>>);

impl TooltipContext {
    pub fn show_beside(&self, ev: &leptos::ev::MouseEvent, text: &'static str) {
        let Some(el) = ev
            .current_target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        else {
            return;
        };
        let rect = el.get_bounding_client_rect();
        self.0
            .set(Some(Tooltip::beside(text, rect.top(), rect.bottom(), rect.right())));
    }

    pub fn hide(&self) {
        self.0.set(None);
    }
}

#[component]
pub fn TooltipLayer(tooltip: RwSignal<Option<Tooltip>>) -> impl IntoView {
    move || {
        tooltip.get().map(|t| {
            view! {
                <div class="tooltip-popper" role="tooltip" style=t.style()>
                    {t.text}
                </div>
            }
        })
    }
}
