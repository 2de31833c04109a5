//! # Controllers Module
//!
//! The controller layer connects user input to commands, drives catalog
//! fetches, and coordinates view updates.

pub mod app_controller;

pub use app_controller::AppController;
