pub mod record;
pub mod config;
pub mod evaluation;
pub mod summary;

pub use record::*;
pub use config::*;
pub use evaluation::*;
pub use summary::*;
