//! Client-side orchestration for the personalized movie dashboard.
//!
//! The crate loads the dashboard sections from the recommendation backend,
//! keeps a session-local entity cache, drives the dashboard / genre drill-down
//! views and the detail overlay, and reports searches and interactions back
//! to the backend.

pub mod config;
pub mod dashboard;
pub mod error;
pub mod models;
pub mod services;
pub mod state;
pub mod store;
pub mod ui;

pub use dashboard::Dashboard;
pub use error::{AppError, AppResult};
