//! Renderers for the generated site artifacts.

pub mod json;
pub mod mdx;
pub mod nav;
