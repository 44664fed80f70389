//! Reactive state containers provided through Leptos context.
//!
//! DESIGN
//! ======
//! Each container is a plain struct wrapped in `RwSignal` at the app root.
//! Mutation helpers live on the structs so they can be tested without a
//! reactive runtime.

pub mod auth;
pub mod catalog;
pub mod forms;
