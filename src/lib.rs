//! Weather Board - terminal weather lookup on WeatherAPI.com
//!
//! The library exposes the board's modules so the binary and tests share them.

pub mod action;
pub mod api;
pub mod components;
pub mod config;
pub mod effect;
pub mod error;
pub mod glyphs;
pub mod logging;
pub mod reducer;
pub mod state;
