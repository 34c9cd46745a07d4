use std::time::Duration;

use crate::motion::{Easing, Transition};

/// Vertical distance the header labels travel when swapping.
pub const SWAP_DISTANCE_PX: f32 = 40.0;

pub const SWAP_TRANSITION: Transition = Transition::new(Duration::from_millis(300), Easing::EaseOut);

/// Underline growing along the bottom border of a hovered panel.
pub const UNDERLINE_TRANSITION: Transition =
    Transition::new(Duration::from_millis(700), Easing::EaseOut);

/// Track behind the underline, fading in while the bar grows.
pub const UNDERLINE_TRACK_TRANSITION: Transition =
    Transition::new(Duration::from_millis(700), Easing::EaseIn);

pub const UNDERLINE_COLOR: &str = "var(--accordion-hover)";

/// Pointer hover over a panel header. Purely presentational.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HoverState {
    #[default]
    Rest,
    Hovered,
}

impl HoverState {
    pub fn enter(&mut self) {
        *self = HoverState::Hovered;
    }

    pub fn leave(&mut self) {
        *self = HoverState::Rest;
    }

    pub fn is_hovered(&self) -> bool {
        matches!(self, HoverState::Hovered)
    }
}

/// Vertical offsets (px) of the visible and duplicate header labels.
///
/// At rest the visible labels sit in place and the duplicates wait outside
/// their clipping box; on hover the visible index slides up, the visible
/// title slides down, and the duplicates slide into place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwapOffsets {
    pub index: f32,
    pub hidden_index: f32,
    pub title: f32,
    pub hidden_title: f32,
}

impl SwapOffsets {
    pub fn for_state(state: HoverState) -> Self {
        match state {
            HoverState::Rest => Self {
                index: 0.0,
                hidden_index: SWAP_DISTANCE_PX,
                title: 0.0,
                hidden_title: -SWAP_DISTANCE_PX,
            },
            HoverState::Hovered => Self {
                index: -SWAP_DISTANCE_PX,
                hidden_index: 0.0,
                title: SWAP_DISTANCE_PX,
                hidden_title: 0.0,
            },
        }
    }
}

/// Inline style for one sliding label.
pub fn label_style(offset: f32) -> String {
    format!(
        "transform: translateY({}px); transition: {};",
        offset,
        SWAP_TRANSITION.css(&["transform"])
    )
}

/// Inline style for the hover underline bar.
pub fn underline_style(state: HoverState) -> String {
    let width = if state.is_hovered() { 100 } else { 0 };
    format!(
        "width: {}%; transition: {};",
        width,
        UNDERLINE_TRANSITION.css(&["width"])
    )
}

/// Inline style for the track the underline bar grows across.
pub fn underline_track_style(state: HoverState) -> String {
    let color = if state.is_hovered() {
        UNDERLINE_COLOR
    } else {
        "transparent"
    };
    format!(
        "background-color: {}; transition: {};",
        color,
        UNDERLINE_TRACK_TRANSITION.css(&["background-color"])
    )
}
