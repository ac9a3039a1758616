//! Rules document assembly

pub mod template;

pub use template::assemble_rules;
