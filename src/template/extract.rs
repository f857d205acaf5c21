//! Fragment extraction.
//!
//! Pulls the `<svg ...>...</svg>` block out of arbitrary input (an exported
//! file with an XML prolog, a pasted HTML snippet, etc.).

const OPEN_TAG: &str = "<svg";
const CLOSE_TAG: &str = "</svg>";

/// Extract the outermost svg fragment.
///
/// Spans from the first `<svg` to the *last* `</svg>` in the input, so nested
/// or sibling `<svg>` elements stay inside the fragment. Returns an empty
/// string when there is no opening tag or no closing tag after it.
///
/// # Examples
/// ```ignore
/// extract_svg(r#"<?xml version="1.0"?><svg><g/></svg>"#) -> "<svg><g/></svg>"
/// extract_svg("<div>no icon here</div>")                  -> ""
/// ```
pub fn extract_svg(input: &str) -> &str {
    let Some(start) = input.find(OPEN_TAG) else {
        return "";
    };

    match input.rfind(CLOSE_TAG) {
        Some(end) if end >= start + OPEN_TAG.len() => &input[start..end + CLOSE_TAG.len()],
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_without_svg() {
        assert_eq!(extract_svg(""), "");
        assert_eq!(extract_svg("<div><span/></div>"), "");
        assert_eq!(extract_svg("just some text"), "");
    }

    #[test]
    fn test_extract_strips_surroundings() {
        let input = r#"<?xml version="1.0" encoding="UTF-8"?>
<!-- Generator: Sketch -->
<svg width="24" height="24"><path d="M0 0h24v24H0z"/></svg>
trailing"#;
        let svg = extract_svg(input);
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert_eq!(
            svg,
            r#"<svg width="24" height="24"><path d="M0 0h24v24H0z"/></svg>"#
        );
    }

    #[test]
    fn test_extract_is_greedy() {
        let input = "<p><svg id=\"outer\"><svg id=\"inner\"></svg></svg></p>";
        assert_eq!(
            extract_svg(input),
            "<svg id=\"outer\"><svg id=\"inner\"></svg></svg>"
        );

        let siblings = "<svg>a</svg> and <svg>b</svg>";
        assert_eq!(extract_svg(siblings), siblings);
    }

    #[test]
    fn test_extract_spans_lines() {
        let input = "<svg>\n  <g>\n    <rect/>\n  </g>\n</svg>";
        assert_eq!(extract_svg(input), input);
    }

    #[test]
    fn test_extract_unclosed() {
        assert_eq!(extract_svg("<svg><rect/>"), "");
        // closing tag only before the opening one
        assert_eq!(extract_svg("</svg><svg>"), "");
    }
}
