pub mod content;
pub mod error;
pub mod expansion;
pub mod hover;
pub mod motion;
pub mod reveal;
pub mod types;

pub use content::ContentConfig;
pub use error::AccordionError;
pub use expansion::{AccordionController, ExpansionState, PanelState};
pub use hover::{HoverState, SwapOffsets};
pub use reveal::RevealTrigger;
pub use types::*;
