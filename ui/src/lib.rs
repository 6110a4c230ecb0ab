#![warn(clippy::all, rust_2018_idioms)]

//! egui front end of the campus user directory.

pub mod app;
pub mod state;
pub mod widgets;

pub use app::CampusApp;
