pub mod adapters;
pub mod contracts;
pub mod store;

pub use adapters::*;
pub use contracts::*;
pub use store::*;
