//! Animation parameters for the accordion renderers.
//!
//! Everything here is a pure function of presentation state (expanded,
//! revealed, measured height). The controller never calls into this module;
//! renderers turn the values into inline CSS and let the browser run the
//! transitions.

use std::time::Duration;

// ---------------------------------------------------------------------------
// Transitions
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Easing {
    Linear,
    EaseIn,
    #[default]
    EaseOut,
    EaseInOut,
}

impl Easing {
    pub fn css_name(&self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::EaseIn => "ease-in",
            Easing::EaseOut => "ease-out",
            Easing::EaseInOut => "ease-in-out",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub duration: Duration,
    pub delay: Duration,
    pub easing: Easing,
}

impl Transition {
    pub const fn new(duration: Duration, easing: Easing) -> Self {
        Self {
            duration,
            delay: Duration::ZERO,
            easing,
        }
    }

    pub const fn with_delay(self, delay: Duration) -> Self {
        Self { delay, ..self }
    }

    /// CSS `transition` value applying this timing to each property.
    pub fn css(&self, properties: &[&str]) -> String {
        properties
            .iter()
            .map(|property| {
                let mut entry = format!(
                    "{} {}ms {}",
                    property,
                    self.duration.as_millis(),
                    self.easing.css_name()
                );
                if !self.delay.is_zero() {
                    entry.push_str(&format!(" {}ms", self.delay.as_millis()));
                }
                entry
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}

// ---------------------------------------------------------------------------
// Title entrance
// ---------------------------------------------------------------------------

pub const LETTER_STAGGER: Duration = Duration::from_millis(50);
pub const LETTER_TRANSITION: Transition =
    Transition::new(Duration::from_millis(400), Easing::EaseOut);
/// Distance below the resting position a hidden letter starts from.
pub const LETTER_OFFSET_PX: f32 = 30.0;

/// Delay offsets for `count` items spaced `delay` apart, starting at zero.
pub fn stagger_offsets(count: usize, delay: Duration) -> Vec<Duration> {
    (0..count)
        .map(|i| delay.saturating_mul(i as u32))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LetterPose {
    pub glyph: char,
    pub opacity: f32,
    pub offset_y: f32,
    pub delay: Duration,
}

impl LetterPose {
    pub fn style(&self) -> String {
        format!(
            "display: inline-block; opacity: {}; transform: translateY({}px); transition: {};",
            self.opacity,
            self.offset_y,
            LETTER_TRANSITION
                .with_delay(self.delay)
                .css(&["opacity", "transform"])
        )
    }
}

/// Per-character poses of the heading, hidden until `revealed`.
pub fn letter_poses(title: &str, revealed: bool) -> Vec<LetterPose> {
    let glyphs: Vec<char> = title.chars().collect();
    let delays = stagger_offsets(glyphs.len(), LETTER_STAGGER);

    glyphs
        .into_iter()
        .zip(delays)
        .map(|(c, delay)| LetterPose {
            // inline-block collapses a plain space to nothing
            glyph: if c == ' ' { '\u{a0}' } else { c },
            opacity: if revealed { 1.0 } else { 0.0 },
            offset_y: if revealed { 0.0 } else { LETTER_OFFSET_PX },
            delay,
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Expand icon
// ---------------------------------------------------------------------------

pub const ICON_TRANSITION: Transition =
    Transition::new(Duration::from_millis(500), Easing::EaseInOut);
pub const ICON_ROTATION_DEG: f32 = 90.0;

pub fn icon_rotation(expanded: bool) -> f32 {
    if expanded {
        ICON_ROTATION_DEG
    } else {
        0.0
    }
}

/// Style of the rotating vertical stroke, pivoting on its own center.
pub fn icon_stroke_style(expanded: bool) -> String {
    format!(
        "transform: rotate({}deg); transform-box: fill-box; transform-origin: 50% 50%; transition: {};",
        icon_rotation(expanded),
        ICON_TRANSITION.css(&["transform"])
    )
}

// ---------------------------------------------------------------------------
// Body region
// ---------------------------------------------------------------------------

pub const BODY_TRANSITION: Transition =
    Transition::new(Duration::from_millis(500), Easing::EaseInOut);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyHeight {
    Collapsed,
    /// Natural height; follows the content as it reflows.
    Auto,
    Measured(i32),
}

impl BodyHeight {
    pub fn css(&self) -> String {
        match self {
            BodyHeight::Collapsed => "0px".to_string(),
            BodyHeight::Auto => "auto".to_string(),
            BodyHeight::Measured(px) => format!("{}px", px),
        }
    }
}

/// Where a panel body is in its expand/collapse transition.
///
/// CSS cannot transition to or from `height: auto`, so an opening body runs
/// to its measured height and settles on `auto` once the transition ends.
/// A closing body is first pinned to its measured height for a frame, then
/// released to zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BodyPhase {
    #[default]
    Collapsed,
    Expanding,
    Open,
    Closing,
}

impl BodyPhase {
    pub fn settled(expanded: bool) -> Self {
        if expanded {
            BodyPhase::Open
        } else {
            BodyPhase::Collapsed
        }
    }

    pub fn on_toggle(self, expanded: bool) -> Self {
        match (self, expanded) {
            (BodyPhase::Collapsed | BodyPhase::Closing, true) => BodyPhase::Expanding,
            (BodyPhase::Open, false) => BodyPhase::Closing,
            // still at a pixel height, so it can run straight to zero
            (BodyPhase::Expanding, false) => BodyPhase::Collapsed,
            (phase, _) => phase,
        }
    }

    /// The height transition finished.
    pub fn on_transition_end(self) -> Self {
        match self {
            BodyPhase::Expanding => BodyPhase::Open,
            phase => phase,
        }
    }

    /// The pinned height has been painted.
    pub fn on_frame(self) -> Self {
        match self {
            BodyPhase::Closing => BodyPhase::Collapsed,
            phase => phase,
        }
    }

    pub fn height(self, measured: Option<i32>) -> BodyHeight {
        match (self, measured) {
            (BodyPhase::Collapsed, _) => BodyHeight::Collapsed,
            (BodyPhase::Open, _) => BodyHeight::Auto,
            (BodyPhase::Expanding | BodyPhase::Closing, Some(px)) => BodyHeight::Measured(px.max(0)),
            (BodyPhase::Expanding | BodyPhase::Closing, None) => BodyHeight::Auto,
        }
    }

    pub fn opacity(self) -> u8 {
        match self {
            BodyPhase::Collapsed => 0,
            _ => 1,
        }
    }
}

pub fn body_style(phase: BodyPhase, measured: Option<i32>) -> String {
    format!(
        "overflow: hidden; height: {}; opacity: {}; transition: {};",
        phase.height(measured).css(),
        phase.opacity(),
        BODY_TRANSITION.css(&["height", "opacity"])
    )
}
