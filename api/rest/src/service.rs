pub mod log_file;
pub mod project;
pub mod root;
