/*
[INPUT]:  HTTP client configuration and API endpoints
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod account;
pub mod client;
pub mod error;
pub mod market;
pub mod orders;
pub mod rate;
pub mod withdrawals;

pub use error::{BitxError, Result};
pub use rate::{CallRateTracker, DEFAULT_RATE_WINDOW};

pub use client::{BitxClient, ClientConfig, Credentials};
