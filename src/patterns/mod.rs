//! Creational pattern demonstrations.

pub mod abstract_factory;
pub mod factory_method;

pub use abstract_factory::{Application, GuiFactory, MacFactory, WinFactory};
