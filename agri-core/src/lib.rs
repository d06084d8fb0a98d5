//! Core types and view state for the crop monitoring dashboard.
//!
//! The analytics service computes everything; this crate only models what it
//! returns and how the two dashboard views reconcile successive responses:
//! - `crop`: snapshot replacement and field selection for the crop analysis view
//! - `satellite`: image list, selected image and analysis mode for the imagery view
//! - `refresh`: coalescing of queued refresh triggers
//! - `chart`: fixed rendering contracts handed to the D3 charts
//! - `api` (feature `api`): native HTTP client for the analytics service

#[cfg(feature = "api")]
pub mod api;
pub mod chart;
pub mod config;
pub mod crop;
pub mod error;
pub mod field;
pub mod health;
pub mod ids;
pub mod imagery;
pub mod ndvi;
pub mod refresh;
pub mod satellite;
pub mod sequence;
pub mod wire;

pub use error::FetchError;
