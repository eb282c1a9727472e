pub mod normalize;
pub mod calculators;
pub mod evaluators;
pub mod classifier;
pub mod tasks;
pub mod aggregators;

pub use normalize::*;
pub use calculators::*;
pub use evaluators::*;
pub use classifier::*;
pub use tasks::*;
pub use aggregators::*;
