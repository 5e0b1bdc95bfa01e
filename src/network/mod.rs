//! HTTP networking module
//!
//! Provides HTTP client functionality for talking to the catalog API.

mod client;

pub use client::{HttpClient, HttpResponse};
