pub mod health;
pub mod message;
pub mod dashboard;
pub mod search;
pub mod error;

pub use health::*;
pub use message::*;
pub use dashboard::*;
pub use search::*;
pub use error::*;
