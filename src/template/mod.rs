//! SVG to Vue single-file component transformer.
//!
//! # Pipeline
//!
//! ```text
//! raw input
//!     │
//!     ▼
//! ┌─────────┐
//! │ extract │ ──► first `<svg` .. last `</svg>`
//! └────┬────┘
//!      ▼
//! ┌─────────┐
//! │  color  │ ──► stroke/fill → currentColor (optional)
//! └────┬────┘
//!      ▼
//! ┌─────────┐
//! │   ids   │ ──► ` id="x"` → ` :id="idN"`, url(#x) follows
//! └────┬────┘
//!      ▼
//! ┌─────────┐
//! │  emit   │ ──► <template> + optional <script> data factory
//! └─────────┘
//! ```
//!
//! Every stage is pure and deterministic. The random suffix that keeps ids
//! unique across mounted instances is computed by the *generated* component
//! at runtime, never here.

mod color;
mod emit;
mod extract;
mod ids;

pub use color::{CURRENT_COLOR, normalize_current_color};
pub use emit::SUFFIX_VAR;
pub use extract::extract_svg;
pub use ids::{BoundFragment, IdBinding, bind_ids};

use std::borrow::Cow;
use thiserror::Error;

/// Transformer errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// An id value that cannot be spliced into the generated component.
    #[error("malformed identifier `{id}`: {reason}")]
    MalformedIdentifier { id: String, reason: String },
}

/// Options for [`generate_component_source`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateOptions {
    /// Rewrite paint values to `currentColor` before binding ids.
    pub current_color: bool,
    /// Emit `lang="ts"` on the script tag. Cosmetic only.
    pub typescript: bool,
}

impl Default for TemplateOptions {
    fn default() -> Self {
        Self {
            current_color: true,
            typescript: true,
        }
    }
}

/// A generated component together with what the transformer found.
#[derive(Debug, Clone)]
pub struct Component {
    pub source: String,
    pub bindings: Vec<IdBinding>,
    /// False when the input had no `<svg>` fragment (empty template).
    pub has_fragment: bool,
}

/// Transform raw svg markup into component source text.
///
/// Missing `<svg>` yields an empty template; only malformed id values fail.
pub fn generate_component_source(
    input: &str,
    options: &TemplateOptions,
) -> Result<String, TemplateError> {
    transform(input, options).map(|c| c.source)
}

/// Like [`generate_component_source`] but keeps the id bindings.
pub fn transform(input: &str, options: &TemplateOptions) -> Result<Component, TemplateError> {
    let svg = extract_svg(input);
    let has_fragment = !svg.is_empty();

    let svg: Cow<'_, str> = if options.current_color {
        Cow::Owned(normalize_current_color(svg))
    } else {
        Cow::Borrowed(svg)
    };

    let BoundFragment { markup, bindings } = bind_ids(&svg)?;
    let data = emit::render_data_factory(&bindings);
    let source = emit::render_component(&markup, data.as_deref(), options.typescript);

    Ok(Component {
        source,
        bindings,
        has_fragment,
    })
}
