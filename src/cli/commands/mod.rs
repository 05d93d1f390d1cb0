pub mod align;
pub mod config;
pub mod lcs;
pub mod table;
