//! TaxJar rate provider integration
//!
//! Thin gateway to the TaxJar rates endpoint: one outbound call per lookup,
//! normalized into the domain breakdown or a failure carrying the provider's
//! own diagnostic text.
//!
//! API docs: https://developers.taxjar.com/api/reference/#rates

pub mod dto;
mod adapter;
mod client;

pub use client::TaxJarClient;
