//! HTML rendering for wcms content.
//!
//! Each block variant maps to exactly one template, selected by the block's
//! kind tag and nothing else; content never influences template choice.
//! [`Renderer`] walks a body in declaration order and emits one fragment per
//! block; user text is escaped on the way out and rich text goes through the
//! Markdown renderer.
//!
//! Asset references resolve through [`AssetResolver`](wcms_blocks::AssetResolver);
//! a reference whose asset has been deleted renders as nothing.

mod renderer;
mod templates;

pub use renderer::Renderer;
pub use templates::template_for;
