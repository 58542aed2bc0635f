pub mod db;
pub mod store;
pub mod workout_log;
