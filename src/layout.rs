//! Responsive display state of the navigation panel.
//!
//! Two flags drive the panel: `is_open` (owned by the parent) and
//! `is_collapsed` (owned by the panel). Which of them matters depends on the
//! viewport: narrow screens only look at `is_open`, wide screens only look
//! at `is_collapsed`.

use leptos::ev;
use leptos::prelude::*;

pub const EXPANDED_WIDTH_PX: u32 = 320;
pub const COLLAPSED_WIDTH_PX: u32 = 96;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Viewport {
    Narrow,
    Wide,
}

impl Viewport {
    pub fn from_width(width_px: f64, breakpoint_px: u32) -> Self {
        if width_px >= f64::from(breakpoint_px) {
            Viewport::Wide
        } else {
            Viewport::Narrow
        }
    }

    /// The floating menu button only exists where the panel can be hidden.
    pub fn has_menu_toggle(self) -> bool {
        self == Viewport::Narrow
    }

    /// Collapsing only makes sense for the docked panel.
    pub fn has_collapse_toggle(self) -> bool {
        self == Viewport::Wide
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayState {
    pub is_open: bool,
    pub is_collapsed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelLayout {
    /// Narrow viewport, closed: off-canvas.
    Hidden,
    /// Narrow viewport, open: full-height overlay over a backdrop.
    Overlay,
    /// Wide viewport: in-flow, `is_open` is irrelevant.
    Docked { collapsed: bool },
}

impl PanelLayout {
    pub fn resolve(state: DisplayState, viewport: Viewport) -> Self {
        match viewport {
            // collapse is never applied to the overlay
            Viewport::Narrow if state.is_open => PanelLayout::Overlay,
            Viewport::Narrow => PanelLayout::Hidden,
            Viewport::Wide => PanelLayout::Docked {
                collapsed: state.is_collapsed,
            },
        }
    }

    pub fn is_visible(self) -> bool {
        !matches!(self, PanelLayout::Hidden)
    }

    pub fn shows_backdrop(self) -> bool {
        matches!(self, PanelLayout::Overlay)
    }

    pub fn is_collapsed(self) -> bool {
        matches!(self, PanelLayout::Docked { collapsed: true })
    }

    /// Names, KPIs and nav labels; a collapsed panel keeps only icons.
    pub fn shows_labels(self) -> bool {
        !self.is_collapsed()
    }

    pub fn width_px(self) -> u32 {
        if self.is_collapsed() {
            COLLAPSED_WIDTH_PX
        } else {
            EXPANDED_WIDTH_PX
        }
    }

    pub fn panel_class(self) -> &'static str {
        match self {
            PanelLayout::Hidden => "sidebar sidebar-hidden",
            PanelLayout::Overlay => "sidebar sidebar-overlay",
            PanelLayout::Docked { collapsed: false } => "sidebar sidebar-docked",
            PanelLayout::Docked { collapsed: true } => "sidebar sidebar-docked sidebar-collapsed",
        }
    }
}

fn current_viewport(breakpoint_px: u32) -> Viewport {
    let query = format!("(min-width: {}px)", breakpoint_px);
    match window().match_media(&query) {
        Ok(Some(list)) if list.matches() => Viewport::Wide,
        Ok(Some(_)) => Viewport::Narrow,
        _ => {
            let width = window()
                .inner_width()
                .ok()
                .and_then(|w| w.as_f64())
                .unwrap_or(0.0);
            Viewport::from_width(width, breakpoint_px)
        }
    }
}

/// Track which side of the breakpoint the window is on.
pub fn use_viewport(breakpoint_px: u32) -> ReadSignal<Viewport> {
    let (viewport, set_viewport) = signal(current_viewport(breakpoint_px));

    let handle = window_event_listener(ev::resize, move |_| {
        let next = current_viewport(breakpoint_px);
        if viewport.get_untracked() != next {
            tracing::debug!(?next, "viewport changed");
            set_viewport.set(next);
        }
    });
    on_cleanup(move || handle.remove());

    viewport
}
