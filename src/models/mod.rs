pub mod activity;
pub mod plan;

pub use activity::*;
pub use plan::*;
