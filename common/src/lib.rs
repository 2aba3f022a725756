//! Platform-independent model for the Jobby job-listing page.
//!
//! Everything here compiles and tests natively; the `frontend` crate only
//! wires these types to Yew components and `gloo-net` requests.

pub mod config;
pub mod credentials;
pub mod fetch;
pub mod model;
pub mod requests;
