//! HTTP surface: route handlers and request extraction

pub mod handlers;
