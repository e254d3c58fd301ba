pub mod period;
pub mod types;

pub use period::Month;
pub use types::*;
