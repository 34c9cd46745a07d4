use thiserror::Error;

#[derive(Debug, Error)]
pub enum AccordionError {
    #[error("panel index {index} is out of range for {panel_count} panels")]
    InvalidIndex { index: usize, panel_count: usize },

    #[error("invalid content payload: {0}")]
    Content(#[from] serde_json::Error),
}
