//! Common test utilities for the webserver suites

#![allow(dead_code)]

pub mod fixtures;
pub mod helpers;
