//! Enter/exit motion expressed as plain visual parameters.
//!
//! Each function maps a visibility flag to the target offset and opacity plus
//! the CSS transition that gets there. The browser interpolates; easing is
//! `ease-out`, which never overshoots, so progress is monotonic.

pub const PANEL_OFFSET_PX: f64 = -320.0;
pub const ITEM_OFFSET_PX: f64 = -20.0;

pub const PANEL_DURATION_MS: u32 = 300;
pub const ITEM_ENTER_MS: u32 = 250;
pub const ITEM_EXIT_MS: u32 = 200;
pub const BACKDROP_DURATION_MS: u32 = 200;

pub const STAGGER_MS: u32 = 50;
pub const ENTER_DELAY_MS: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    pub offset_x: f64,
    pub opacity: f64,
    pub duration_ms: u32,
    pub delay_ms: u32,
}

impl Motion {
    pub fn panel(visible: bool) -> Self {
        Self {
            offset_x: if visible { 0.0 } else { PANEL_OFFSET_PX },
            opacity: if visible { 1.0 } else { 0.0 },
            duration_ms: PANEL_DURATION_MS,
            delay_ms: 0,
        }
    }

    pub fn backdrop(visible: bool) -> Self {
        Self {
            offset_x: 0.0,
            opacity: if visible { 1.0 } else { 0.0 },
            duration_ms: BACKDROP_DURATION_MS,
            delay_ms: 0,
        }
    }

    /// Children enter top to bottom after a short delay and leave bottom to top.
    pub fn item(visible: bool, index: usize, count: usize) -> Self {
        let index = index.min(count.saturating_sub(1)) as u32;
        let count = count as u32;
        if visible {
            Self {
                offset_x: 0.0,
                opacity: 1.0,
                duration_ms: ITEM_ENTER_MS,
                delay_ms: ENTER_DELAY_MS + STAGGER_MS * index,
            }
        } else {
            Self {
                offset_x: ITEM_OFFSET_PX,
                opacity: 0.0,
                duration_ms: ITEM_EXIT_MS,
                delay_ms: STAGGER_MS * count.saturating_sub(1).saturating_sub(index),
            }
        }
    }

    pub fn to_style(&self) -> String {
        self.style(None)
    }

    /// Panel style; width changes share the offset transition so collapsing animates.
    pub fn panel_style(visible: bool, width_px: u32) -> String {
        Self::panel(visible).style(Some(width_px))
    }

    fn style(&self, width_px: Option<u32>) -> String {
        let timing = format!("{}ms ease-out {}ms", self.duration_ms, self.delay_ms);
        let mut style = String::new();
        let mut transitions = vec![format!("transform {}", timing), format!("opacity {}", timing)];
        if let Some(width) = width_px {
            style.push_str(&format!("width: {}px; ", width));
            transitions.push(format!("width {}", timing));
        }
        style.push_str(&format!(
            "transform: translateX({}px); opacity: {}; transition: {};",
            self.offset_x,
            self.opacity,
            transitions.join(", "),
        ));
        if self.opacity <= 0.0 {
            style.push_str(" pointer-events: none;");
        }
        style
    }
}
