//! Component source assembly.

use super::ids::IdBinding;

/// Name of the per-instance random suffix inside the generated data factory.
pub const SUFFIX_VAR: &str = "randomString";

/// JavaScript computing the suffix: ten base-36 characters.
const SUFFIX_INIT: &str = "Math.random().toString(36).slice(-10)";

/// Render the `data` option body, or `None` when there is nothing to bind.
///
/// The suffix is computed once per component instance and shared by every
/// placeholder, so ids stay distinct within one icon (different prefixes)
/// and across instances (different suffixes).
pub fn render_data_factory(bindings: &[IdBinding]) -> Option<String> {
    if bindings.is_empty() {
        return None;
    }

    let entries = bindings
        .iter()
        .map(|b| format!("{}: {}", b.placeholder, b.runtime_expr(SUFFIX_VAR)))
        .collect::<Vec<_>>()
        .join(", ");

    Some(format!(
        "
    data: () => {{
        const {SUFFIX_VAR} = {SUFFIX_INIT}
        return {{
            {entries}
        }}
    }}"
    ))
}

/// Render the full single-file component.
pub fn render_component(markup: &str, data_factory: Option<&str>, typescript: bool) -> String {
    let mut out = format!("<template>\n    {markup}\n</template>\n");

    if let Some(data) = data_factory {
        let script_tag = if typescript {
            r#"<script lang="ts">"#
        } else {
            "<script>"
        };
        out.push_str(&format!(
            "
{script_tag}
import {{ defineComponent }} from 'vue'

export default defineComponent({{
    {data}
}})
</script>"
        ));
    }

    out.push('\n');
    out
}
