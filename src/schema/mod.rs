pub mod identifiers;
pub mod tables;
pub mod types;

pub use identifiers::*;
pub use tables::*;
pub use types::*;
