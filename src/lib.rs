//! BarberShop booking-site front-end.
//!
//! Serves the public landing page and exposes [`models`], the typed mirror of
//! the hosted backend's tables, for data-access code to build payloads with.

pub mod models;
pub mod routes;
pub mod templates;
