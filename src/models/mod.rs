pub mod cat;
pub mod task;

pub use cat::*;
pub use task::*;
