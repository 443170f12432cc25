pub mod feed;
pub mod score;
pub mod types;

pub use feed::*;
pub use score::*;
pub use types::*;
