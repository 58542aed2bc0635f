pub mod engine;
pub mod format;
pub mod geometry;
pub mod schedule;
pub mod session;
