//! Browser-side access to the site's JSON API.

pub mod api;
