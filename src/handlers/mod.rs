pub mod health;
pub mod dashboard;
pub mod search;

pub use health::*;
pub use dashboard::*;
pub use search::*;
