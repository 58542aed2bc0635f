pub mod catalog;
pub mod tracker;
