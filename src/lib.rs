pub mod args;
pub mod error;
pub mod feed;
pub mod model;
pub mod mvu;
pub mod score;
pub mod storage;

pub use error::CoreError;
pub use storage::StorageError;
pub use feed::merge_feed;
