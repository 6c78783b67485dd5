//! Helpers with no component state

pub mod constants;
pub mod format;
pub mod url;
