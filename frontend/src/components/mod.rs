pub mod accordion;
pub mod accordion_animated;
pub mod accordion_basic;
pub mod alert;
pub mod expand_icon;

pub use accordion_animated::AccordionAnimated;
pub use accordion_basic::AccordionBasic;
