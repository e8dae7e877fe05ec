//! Platform-agnostic building blocks shared by every view.

pub mod content;
pub mod format;
pub mod lang;
pub mod preference;
pub mod storage;
pub mod theme;
