pub mod dispatch;
pub mod insight;
pub mod mock;
pub mod schema;
pub mod shared;
pub mod stats;
pub mod submit;
pub mod summary;
pub mod tags;
