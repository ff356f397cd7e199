//! Clients for outbound services.

pub mod client;

pub use client::build_http_client;
