//! `stroke`/`fill` normalization to `currentColor`.
//!
//! Icons exported from design tools carry hard-coded paint values. Rewriting
//! them to `currentColor` lets the icon inherit the surrounding text color.

use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Paint value that must survive normalization (transparent shapes).
const KEEP_VALUE: &str = "none";

/// Value written in place of every other paint.
pub const CURRENT_COLOR: &str = "currentColor";

/// `stroke=` / `fill=` with either quote style on each side.
static RE_PAINT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(stroke|fill)=(['"])(.*?)(['"])"#).unwrap());

/// Rewrite every `stroke`/`fill` value except `none` to `currentColor`.
///
/// Quote characters are written back exactly as found. Applying this twice
/// yields the same result as applying it once.
pub fn normalize_current_color(svg: &str) -> String {
    RE_PAINT
        .replace_all(svg, |caps: &Captures| {
            let value = if &caps[3] == KEEP_VALUE {
                KEEP_VALUE
            } else {
                CURRENT_COLOR
            };
            format!("{}={}{}{}", &caps[1], &caps[2], value, &caps[4])
        })
        .into_owned()
}
