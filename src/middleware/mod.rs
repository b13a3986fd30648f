//! HTTP middleware: bearer-token extraction for protected routes.

pub mod auth;
