use serde::{Deserialize, Serialize};

use crate::error::AccordionError;
use crate::types::PanelSet;

/// Content payload compiled into the bundle.
const BUNDLED_CONTENT: &str = include_str!("../content/process.json");

/// Heading, subtitle and panels of one accordion section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentConfig {
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub panels: PanelSet,
}

impl ContentConfig {
    /// Parse the payload shipped with the application.
    pub fn bundled() -> Result<Self, AccordionError> {
        Self::from_json(BUNDLED_CONTENT)
    }

    pub fn from_json(json: &str) -> Result<Self, AccordionError> {
        let config: ContentConfig = serde_json::from_str(json)?;
        log::debug!(
            "Loaded content \"{}\" with {} panels",
            config.title,
            config.panels.len()
        );
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_content() {
        let config = ContentConfig::bundled().unwrap();

        assert_eq!(config.title, "PROCESS");
        assert_eq!(config.subtitle, "Things I can help you with:");
        assert_eq!(config.panels.len(), 4);

        let titles: Vec<&str> = config.panels.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Art Direction",
                "Digital Design",
                "Webflow Development",
                "Interaction Design",
            ]
        );
        assert!(config.panels.iter().all(|p| !p.body.is_empty()));
    }

    #[test]
    fn test_missing_panels_degrades_to_empty() {
        let config = ContentConfig::from_json(r#"{"title":"EMPTY"}"#).unwrap();
        assert!(config.panels.is_empty());
        assert_eq!(config.subtitle, "");
    }

    #[test]
    fn test_malformed_payload() {
        let err = ContentConfig::from_json("{\"title\": ").unwrap_err();
        assert!(matches!(err, AccordionError::Content(_)));

        let err = ContentConfig::from_json(r#"{"panels": []}"#).unwrap_err();
        assert!(matches!(err, AccordionError::Content(_)));
    }
}
