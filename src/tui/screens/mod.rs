pub mod home;
pub mod library;
pub mod track;
