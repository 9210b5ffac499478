//! Animal Gene Lab - compose a cartoon animal from shape traits
//!
//! This library provides:
//! - The trait/animal data model and the catalog of addable traits
//! - The lab controller that turns user actions into animal edits
//! - Shape rasterization and the compositing renderer
//! - The lab window (with the `gui` feature) and a terminal preview

pub mod catalog;
pub mod cli;
pub mod color;
pub mod config;
pub mod lab;
pub mod models;
pub mod renderer;
pub mod shapes;
pub mod terminal;
pub mod ui;
