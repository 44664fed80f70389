//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules keep browser/environment concerns and pure display math
//! out of page and component code so both stay testable.

pub mod auth;
pub mod format;
pub mod spotlight;
