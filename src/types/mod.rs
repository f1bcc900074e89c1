pub mod format;
pub mod mode;
