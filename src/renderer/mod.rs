//! Renderers produced by compiling templates
//!
//! A [`Renderer`] interprets the compiled segments of one template for a
//! count and extra arguments. A [`ListRenderer`] drives a renderer from a
//! sequence of items instead of an explicit count.

pub mod list;
pub mod template;

pub use list::ListRenderer;
pub use template::Renderer;
