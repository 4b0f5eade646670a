pub mod date_window;
pub mod upload;
