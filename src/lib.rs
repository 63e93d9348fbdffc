//! Theme, language, entrance animation and anchor scrolling for the
//! launcher landing page, compiled to wasm.

pub mod app;
pub mod config;
pub mod controllers;
pub mod dom;
pub mod error;
pub mod state;
pub mod translations;
pub mod web;

#[cfg(test)]
mod testing;

pub use app::{boot, Page};
pub use error::{Error, Result};
