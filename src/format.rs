//! Console rendering of spelling results.

use crate::core::label::ResultSet;

/// Renders forms as a braced block, one tab-indented `{ a, b }` line per
/// form. No forms at all renders as `[]`.
pub fn render_forms(forms: &ResultSet) -> String {
    if forms.is_empty() {
        return "[]".to_string();
    }
    let mut out = String::from("{\n");
    for (i, form) in forms.iter().enumerate() {
        out.push_str("\t{ ");
        out.push_str(&form.join(", "));
        out.push_str(" }");
        if i + 1 < forms.len() {
            out.push(',');
        }
        out.push('\n');
    }
    out.push('}');
    out
}
