#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! A login form with email validation, hosted in a terminal page, plus a
//! static file server for the built bundle.

pub mod model;
pub mod server;
pub mod tui;
