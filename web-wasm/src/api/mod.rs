//! Backend REST integration

mod client;

pub use client::{dispatch, fetch_json, API_ERROR_MSG};
