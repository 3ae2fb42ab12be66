//! shellcfg - a terminal shell that loads its runtime configuration before
//! first render.
//!
//! Startup is gated: the config loader must resolve before the root view is
//! constructed, so the view never observes a half-loaded configuration.
//! The binary entry point is in main.rs.

pub mod app;
pub mod config;
pub mod environment;
pub mod input;
pub mod startup;
pub mod theme;
pub mod ui;
