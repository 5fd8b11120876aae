// src/formatting/mod.rs
//! Renders Notion block trees into Hatena Blog markdown.

pub mod block_renderer;
mod html;
mod rich_text;

pub use block_renderer::{render_blocks, HatenaBlockRenderer};
pub use html::callout_class;
pub use rich_text::render_span;
