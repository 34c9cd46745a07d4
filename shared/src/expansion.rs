use std::collections::BTreeSet;

use crate::error::AccordionError;
use crate::types::PanelSet;

// ============================================================================
// Expansion State
// ============================================================================

/// Set of currently expanded panel indices.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionState {
    indices: BTreeSet<usize>,
}

impl ExpansionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, index: usize) -> bool {
        self.indices.contains(&index)
    }

    pub fn insert(&mut self, index: usize) -> bool {
        self.indices.insert(index)
    }

    pub fn remove(&mut self, index: usize) -> bool {
        self.indices.remove(&index)
    }

    /// Flip membership of `index`, returning the new membership.
    pub fn flip(&mut self, index: usize) -> bool {
        if self.indices.remove(&index) {
            false
        } else {
            self.indices.insert(index);
            true
        }
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Expanded indices in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.indices.iter().copied()
    }
}

impl FromIterator<usize> for ExpansionState {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Self {
            indices: iter.into_iter().collect(),
        }
    }
}

// ============================================================================
// Panel State
// ============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PanelState {
    #[default]
    Collapsed,
    Expanded,
}

impl PanelState {
    pub fn from_expanded(expanded: bool) -> Self {
        if expanded {
            PanelState::Expanded
        } else {
            PanelState::Collapsed
        }
    }

    pub fn is_expanded(&self) -> bool {
        matches!(self, PanelState::Expanded)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PanelState::Collapsed => "collapsed",
            PanelState::Expanded => "expanded",
        }
    }
}

// ============================================================================
// Controller
// ============================================================================

/// Non-exclusive accordion: any number of panels may be expanded at once.
///
/// Indices outside `0..panel_count` are rejected with
/// [`AccordionError::InvalidIndex`] and leave the state untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccordionController {
    panel_count: usize,
    state: ExpansionState,
}

impl AccordionController {
    pub fn new(panel_count: usize) -> Self {
        Self {
            panel_count,
            state: ExpansionState::new(),
        }
    }

    pub fn for_panels(panels: &PanelSet) -> Self {
        Self::new(panels.len())
    }

    pub fn panel_count(&self) -> usize {
        self.panel_count
    }

    pub fn expanded(&self) -> &ExpansionState {
        &self.state
    }

    /// Expand a collapsed panel or collapse an expanded one.
    /// Returns whether the panel is expanded afterwards.
    pub fn toggle(&mut self, index: usize) -> Result<bool, AccordionError> {
        if let Err(e) = self.check_index(index) {
            log::warn!("Rejected toggle: {}", e);
            return Err(e);
        }
        let expanded = self.state.flip(index);
        log::debug!(
            "Panel {} {}",
            index,
            PanelState::from_expanded(expanded).as_str()
        );
        Ok(expanded)
    }

    pub fn is_expanded(&self, index: usize) -> Result<bool, AccordionError> {
        self.check_index(index)?;
        Ok(self.state.contains(index))
    }

    pub fn panel_state(&self, index: usize) -> Result<PanelState, AccordionError> {
        self.is_expanded(index).map(PanelState::from_expanded)
    }

    fn check_index(&self, index: usize) -> Result<(), AccordionError> {
        if index < self.panel_count {
            Ok(())
        } else {
            Err(AccordionError::InvalidIndex {
                index,
                panel_count: self.panel_count,
            })
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Panel;

    fn init_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn expanded_set(controller: &AccordionController) -> Vec<usize> {
        controller.expanded().iter().collect()
    }

    /// Every toggle sequence of `length` over `panel_count` panels.
    fn sequences(panel_count: usize, length: u32) -> Vec<Vec<usize>> {
        let total = panel_count.pow(length);
        (0..total)
            .map(|mut n| {
                (0..length)
                    .map(|_| {
                        let index = n % panel_count;
                        n /= panel_count;
                        index
                    })
                    .collect()
            })
            .collect()
    }

    #[test]
    fn test_initially_collapsed() {
        let controller = AccordionController::new(4);
        for i in 0..4 {
            assert!(!controller.is_expanded(i).unwrap());
            assert_eq!(controller.panel_state(i).unwrap(), PanelState::Collapsed);
        }
        assert!(controller.expanded().is_empty());
    }

    #[test]
    fn test_toggle_single_panel() {
        init_logging();
        let mut controller = AccordionController::new(4);

        assert!(controller.toggle(2).unwrap());

        assert!(controller.is_expanded(2).unwrap());
        for i in [0, 1, 3] {
            assert!(!controller.is_expanded(i).unwrap());
        }
    }

    #[test]
    fn test_toggle_sequence_leaves_odd_indices() {
        init_logging();
        let mut controller = AccordionController::new(4);

        controller.toggle(0).unwrap();
        controller.toggle(1).unwrap();
        assert!(!controller.toggle(0).unwrap());

        assert_eq!(expanded_set(&controller), vec![1]);
    }

    #[test]
    fn test_out_of_range_is_rejected() {
        init_logging();
        let mut controller = AccordionController::new(4);
        controller.toggle(1).unwrap();
        let before = controller.clone();

        let err = controller.is_expanded(5).unwrap_err();
        assert!(matches!(
            err,
            AccordionError::InvalidIndex {
                index: 5,
                panel_count: 4
            }
        ));

        let err = controller.toggle(4).unwrap_err();
        assert!(matches!(err, AccordionError::InvalidIndex { index: 4, .. }));
        assert!(controller.panel_state(usize::MAX).is_err());

        assert_eq!(controller, before);
    }

    #[test]
    fn test_empty_panel_set() {
        let mut controller = AccordionController::for_panels(&PanelSet::default());
        assert_eq!(controller.panel_count(), 0);
        assert!(controller.toggle(0).is_err());
        assert!(controller.expanded().is_empty());
    }

    #[test]
    fn test_for_panels_uses_panel_count() {
        let panels = PanelSet::new(vec![Panel::new("A", "a"), Panel::new("B", "b")]);
        let controller = AccordionController::for_panels(&panels);
        assert_eq!(controller.panel_count(), 2);
    }

    #[test]
    fn test_double_toggle_restores_state() {
        for sequence in sequences(4, 3) {
            let mut controller = AccordionController::new(4);
            for &i in &sequence {
                controller.toggle(i).unwrap();
            }
            for i in 0..4 {
                let before = controller.clone();
                controller.toggle(i).unwrap();
                controller.toggle(i).unwrap();
                assert_eq!(controller, before, "sequence {:?} then {}", sequence, i);
            }
        }
    }

    #[test]
    fn test_toggle_does_not_affect_other_panels() {
        for sequence in sequences(4, 3) {
            let mut controller = AccordionController::new(4);
            for &i in &sequence {
                controller.toggle(i).unwrap();
            }
            for i in 0..4 {
                let mut toggled = controller.clone();
                toggled.toggle(i).unwrap();
                for j in (0..4).filter(|&j| j != i) {
                    assert_eq!(
                        toggled.is_expanded(j).unwrap(),
                        controller.is_expanded(j).unwrap()
                    );
                }
                assert_ne!(
                    toggled.is_expanded(i).unwrap(),
                    controller.is_expanded(i).unwrap()
                );
            }
        }
    }

    #[test]
    fn test_state_matches_odd_toggle_counts() {
        for length in 0..=5 {
            for sequence in sequences(4, length) {
                let mut controller = AccordionController::new(4);
                let mut counts = [0usize; 4];
                for &i in &sequence {
                    controller.toggle(i).unwrap();
                    counts[i] += 1;
                }

                let expected: ExpansionState =
                    (0..4).filter(|&i| counts[i] % 2 == 1).collect();
                assert_eq!(controller.expanded(), &expected, "sequence {:?}", sequence);
            }
        }
    }

    #[test]
    fn test_expansion_state_flip() {
        let mut state = ExpansionState::new();
        assert!(state.flip(3));
        assert!(state.contains(3));
        assert!(!state.flip(3));
        assert!(!state.contains(3));

        assert!(state.insert(1));
        assert!(!state.insert(1));
        assert!(state.remove(1));
        assert!(!state.remove(1));
    }

    #[test]
    fn test_expansion_state_iterates_ascending() {
        let state: ExpansionState = vec![3, 0, 2].into_iter().collect();
        assert_eq!(state.iter().collect::<Vec<_>>(), vec![0, 2, 3]);
        assert_eq!(state.len(), 3);
    }

    #[test]
    fn test_panel_state_strings() {
        assert_eq!(PanelState::Collapsed.as_str(), "collapsed");
        assert_eq!(PanelState::Expanded.as_str(), "expanded");
        assert!(PanelState::from_expanded(true).is_expanded());
        assert_eq!(PanelState::default(), PanelState::Collapsed);
    }
}
