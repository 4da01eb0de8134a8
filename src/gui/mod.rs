//! GUI module
//!
//! Provides the Slint-based add/launch/remove form. Every callback is a single
//! request to the application controller followed by a full re-render of the
//! returned state.

pub mod gui_controller;

pub use gui_controller::GuiController;
