pub mod path;
pub mod sniff;
