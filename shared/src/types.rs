use serde::{Deserialize, Serialize};

// ============================================================================
// Panel Types
// ============================================================================

/// One titled, collapsible content block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Panel {
    pub title: String,
    #[serde(rename = "description")]
    pub body: String,
}

impl Panel {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}

/// Ordered, immutable list of panels for one accordion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PanelSet {
    panels: Vec<Panel>,
}

impl PanelSet {
    pub fn new(panels: Vec<Panel>) -> Self {
        Self { panels }
    }

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Panel> {
        self.panels.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Panel> {
        self.panels.iter()
    }
}

impl FromIterator<Panel> for PanelSet {
    fn from_iter<I: IntoIterator<Item = Panel>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a PanelSet {
    type Item = &'a Panel;
    type IntoIter = std::slice::Iter<'a, Panel>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ============================================================================
// Labels
// ============================================================================

/// 1-based, zero-padded label shown in front of a panel title ("01", "02", ...).
pub fn index_label(index: usize) -> String {
    format!("{:02}", index + 1)
}

/// DOM id of a panel's body region, referenced by the header's `aria-controls`.
pub fn panel_dom_id(index: usize) -> String {
    format!("panel-{}", index)
}

// ============================================================================
// Tests
// ============================================================================
