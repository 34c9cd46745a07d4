/// Fraction of the container that must be visible to count as in view.
pub const DEFAULT_THRESHOLD: f64 = 0.1;

/// One-shot latch for the title entrance animation.
///
/// Fires on the first observation that reports the container in view and
/// never again for the lifetime of the component.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RevealTrigger {
    fired: bool,
}

impl RevealTrigger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the latest viewport signal. Returns `true` only on the call
    /// that starts the entrance animation.
    pub fn observe(&mut self, in_view: bool) -> bool {
        if in_view && !self.fired {
            self.fired = true;
            log::debug!("Reveal trigger fired");
            return true;
        }
        false
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }
}
