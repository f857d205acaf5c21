//! Id placeholder binding.
//!
//! Inline SVG ids live in the page-global DOM namespace, so two mounted
//! copies of the same icon would fight over `#gradient` or `#clip`. Each
//! ` id="..."` attribute is swapped for a data-bound placeholder (`id0`,
//! `id1`, ...) and every `url(#...)` reference to it follows along.
//!
//! Occurrences are never merged: a literal id that appears twice gets two
//! placeholders, numbered by position.

use regex::Regex;
use std::sync::LazyLock;

use super::TemplateError;

/// Space-prefixed, double-quoted `id` attribute. `id='x'` is not matched.
static RE_ID: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#" id="([^"\n]*)""#).unwrap());

/// One rewritten `id` attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdBinding {
    /// Generated data field name (`id0`, `id1`, ...).
    pub placeholder: String,
    /// Literal id value found in the source markup.
    pub original: String,
}

impl IdBinding {
    /// JavaScript expression computing the runtime id for one instance.
    ///
    /// `suffix_var` names the per-instance random suffix variable.
    pub fn runtime_expr(&self, suffix_var: &str) -> String {
        format!("'{}_' + {}", self.original, suffix_var)
    }
}

/// Fragment with ids replaced by placeholders.
#[derive(Debug, Clone, Default)]
pub struct BoundFragment {
    pub markup: String,
    /// Bindings in order of appearance.
    pub bindings: Vec<IdBinding>,
}

/// Replace every ` id="..."` attribute with a dynamic `:id` binding.
///
/// Empty values are skipped and do not consume a placeholder number.
pub fn bind_ids(svg: &str) -> Result<BoundFragment, TemplateError> {
    let mut markup = svg.to_string();
    let mut bindings: Vec<IdBinding> = Vec::new();

    for caps in RE_ID.captures_iter(svg) {
        let attribute = &caps[0];
        let id = &caps[1];
        if id.is_empty() {
            continue;
        }
        check_identifier(id)?;

        let placeholder = format!("id{}", bindings.len());

        // Earlier matches are already rewritten to ` :id=`, so the first
        // literal occurrence left is this one.
        markup = markup.replacen(attribute, &format!(r#" :id="{placeholder}""#), 1);
        markup = bind_url_references(&markup, id, &placeholder)?;

        bindings.push(IdBinding {
            placeholder,
            original: id.to_string(),
        });
    }

    Ok(BoundFragment { markup, bindings })
}

/// Rewrite ` attr="url(#id)"` into a binding built from `placeholder`.
fn bind_url_references(
    markup: &str,
    id: &str,
    placeholder: &str,
) -> Result<String, TemplateError> {
    let pattern = format!(r#" ([a-z][a-z-]*)="url\(#{}\)""#, regex::escape(id));
    let re = Regex::new(&pattern).map_err(|e| TemplateError::MalformedIdentifier {
        id: id.to_string(),
        reason: e.to_string(),
    })?;

    let replacement = format!(r#" :${{1}}="'url(#' + {placeholder} + ')'""#);
    Ok(re.replace_all(markup, replacement.as_str()).into_owned())
}

/// Reject ids that would break the generated script string literal.
fn check_identifier(id: &str) -> Result<(), TemplateError> {
    let bad = id
        .chars()
        .find(|c| matches!(c, '\'' | '\\' | '<') || c.is_control());

    match bad {
        Some(c) => Err(TemplateError::MalformedIdentifier {
            id: id.to_string(),
            reason: format!("character {c:?} cannot be embedded in generated script"),
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn placeholders(fragment: &BoundFragment) -> Vec<&str> {
        fragment
            .bindings
            .iter()
            .map(|b| b.placeholder.as_str())
            .collect()
    }

    #[test]
    fn test_no_ids() {
        let svg = r#"<svg><rect width="4"/></svg>"#;
        let bound = bind_ids(svg).unwrap();
        assert_eq!(bound.markup, svg);
        assert!(bound.bindings.is_empty());
    }

    #[test]
    fn test_single_id_with_reference() {
        let bound = bind_ids(r#"<svg><rect id="a" fill="url(#a)"/></svg>"#).unwrap();
        assert_eq!(
            bound.markup,
            r#"<svg><rect :id="id0" :fill="'url(#' + id0 + ')'"/></svg>"#
        );
        assert_eq!(
            bound.bindings,
            vec![IdBinding {
                placeholder: "id0".into(),
                original: "a".into(),
            }]
        );
    }

    #[test]
    fn test_duplicates_not_coalesced() {
        let svg = r#"<svg><g id="a"/><g id="a"/><g id="b"/></svg>"#;
        let bound = bind_ids(svg).unwrap();
        assert_eq!(placeholders(&bound), ["id0", "id1", "id2"]);
        assert_eq!(
            bound.markup,
            r#"<svg><g :id="id0"/><g :id="id1"/><g :id="id2"/></svg>"#
        );
        let originals: Vec<_> = bound.bindings.iter().map(|b| b.original.as_str()).collect();
        assert_eq!(originals, ["a", "a", "b"]);
    }

    #[test]
    fn test_reference_follows_first_occurrence() {
        // all references are consumed by the first binding of a duplicated id
        let svg = r#"<svg><g id="a"/><g id="a"/><use fill="url(#a)"/></svg>"#;
        let bound = bind_ids(svg).unwrap();
        assert!(bound.markup.contains(r#":fill="'url(#' + id0 + ')'""#));
        assert!(!bound.markup.contains("id1 +"));
    }

    #[test]
    fn test_references_elsewhere() {
        let svg = concat!(
            r#"<svg><defs><linearGradient id="ring"/><clipPath id="clip"/></defs>"#,
            r#"<circle stroke="url(#ring)" clip-path="url(#clip)"/>"#,
            r#"<path fill="url(#ring)"/></svg>"#
        );
        let bound = bind_ids(svg).unwrap();
        assert_eq!(placeholders(&bound), ["id0", "id1"]);
        assert!(bound.markup.contains(r#":stroke="'url(#' + id0 + ')'""#));
        assert!(bound.markup.contains(r#":fill="'url(#' + id0 + ')'""#));
        assert!(bound.markup.contains(r#":clip-path="'url(#' + id1 + ')'""#));
        assert!(!bound.markup.contains("url(#ring)"));
    }

    #[test]
    fn test_single_quoted_id_untouched() {
        let svg = "<svg><g id='x'/></svg>";
        let bound = bind_ids(svg).unwrap();
        assert_eq!(bound.markup, svg);
        assert!(bound.bindings.is_empty());
    }

    #[test]
    fn test_empty_id_skipped() {
        let svg = r#"<svg><g id=""/><g id="b"/></svg>"#;
        let bound = bind_ids(svg).unwrap();
        assert_eq!(placeholders(&bound), ["id0"]);
        assert_eq!(bound.bindings[0].original, "b");
        assert!(bound.markup.contains(r#"<g id=""/>"#));
    }

    #[test]
    fn test_id_without_leading_space_untouched() {
        let svg = "<svg><g\tid=\"a\"/><g data-id=\"b\"/></svg>";
        let bound = bind_ids(svg).unwrap();
        assert!(bound.bindings.is_empty());
    }

    #[test]
    fn test_regex_special_characters_are_literal() {
        let svg = r#"<svg><g id="a.b(1)"/><g fill="url(#a.b(1))"/><g fill="url(#aXb(1))"/></svg>"#;
        let bound = bind_ids(svg).unwrap();
        assert!(bound.markup.contains(r#":fill="'url(#' + id0 + ')'""#));
        // the dot must not act as a wildcard
        assert!(bound.markup.contains(r#"fill="url(#aXb(1))""#));
    }

    #[test]
    fn test_malformed_identifier() {
        let err = bind_ids(r#"<svg><g id="it's"/></svg>"#).unwrap_err();
        assert!(matches!(
            err,
            TemplateError::MalformedIdentifier { ref id, .. } if id == "it's"
        ));

        assert!(bind_ids(r#"<svg><g id="a\b"/></svg>"#).is_err());
    }

    #[test]
    fn test_runtime_expr() {
        let binding = IdBinding {
            placeholder: "id0".into(),
            original: "mask".into(),
        };
        assert_eq!(binding.runtime_expr("randomString"), "'mask_' + randomString");
    }
}
