//! HTTP API: routing and request/response mapping for the user collection.

pub mod app;
