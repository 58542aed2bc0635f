pub mod progress_ring;
pub mod timer;
