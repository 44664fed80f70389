//! Service layer: domain operations over the backend adapters.
//!
//! DESIGN
//! ======
//! Services take the narrow dependencies they use (`&dyn DocumentStore`,
//! `&dyn IdentityProvider`, policies) rather than the whole `AppState`, and
//! report failures through per-service `thiserror` enums. HTTP status
//! mapping stays in the route layer.

pub mod auth;
pub mod bookings;
pub mod cars;
pub mod images;
pub mod session;
pub mod users;
