pub mod pipeline;
pub mod report;

pub use pipeline::*;
pub use report::*;
