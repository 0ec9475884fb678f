pub mod analysis;
pub mod base;
pub mod metric;
pub mod patient;
pub mod shared_summary;
pub mod user;
pub mod visit;
