//! crpt-client - Rate-Limited CRPT API Client
//!
//! This crate implements a client for the Chestny ZNAK (CRPT) document
//! submission API. Outbound calls are admitted through a fixed-window permit
//! gate so that no more than a configured number of requests is dispatched
//! within any window, regardless of how many tasks submit concurrently.

pub mod client;
pub mod config;
pub mod document;
pub mod error;
pub mod ratelimit;
pub mod transport;
