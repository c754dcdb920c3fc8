mod escape;
mod latex;

use crate::core::ast::DocumentAst;
use crate::Result;

pub use escape::escape_latex;
pub use latex::{LatexRenderer, IMAGE_OMITTED_COMMENT};

pub trait Renderer {
    fn render(&self, document: &DocumentAst) -> Result<String>;
}
