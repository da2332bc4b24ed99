use leptos::prelude::*;

/// Layout direction of the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Ltr,
    Rtl,
}

impl Direction {
    pub fn from_attr(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("rtl") {
            Direction::Rtl
        } else {
            Direction::Ltr
        }
    }

    pub fn as_attr(self) -> &'static str {
        match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        }
    }

    /// Class for the edge a temporary drawer slides in from.
    pub fn drawer_anchor_class(self) -> &'static str {
        match self {
            Direction::Ltr => "anchor-left",
            Direction::Rtl => "anchor-right",
        }
    }
}

#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub direction: Signal<Direction>,
}

/// Direction declared on `<html dir="...">`, defaulting to left-to-right.
pub fn document_direction() -> Direction {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.document_element())
        .and_then(|html| html.get_attribute("dir"))
        .map(|dir| Direction::from_attr(&dir))
        .unwrap_or_default()
}
