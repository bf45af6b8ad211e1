pub mod format;
pub mod pad;
