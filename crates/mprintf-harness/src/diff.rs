//! Diff rendering for fixture comparison.

/// Render a diff between expected and actual rendered output.
///
/// Rendered outputs are single escaped lines, so the diff points at the
/// first differing byte offset.
#[must_use]
pub fn render_diff(expected: &str, actual: &str) -> String {
    if expected == actual {
        return String::from("[identical]");
    }

    let offset = expected
        .bytes()
        .zip(actual.bytes())
        .position(|(e, a)| e != a)
        .unwrap_or_else(|| expected.len().min(actual.len()));

    let mut out = String::new();
    out.push_str("--- expected\n");
    out.push_str("+++ actual\n");
    for (i, (e, a)) in expected.lines().zip(actual.lines()).enumerate() {
        if e != a {
            out.push_str(&format!("@@ line {} @@\n", i + 1));
            out.push_str(&format!("-{e}\n"));
            out.push_str(&format!("+{a}\n"));
        }
    }
    if expected.is_empty() || actual.is_empty() {
        out.push_str(&format!("-{expected}\n+{actual}\n"));
    }
    out.push_str(&format!("first difference at byte {offset}\n"));
    out
}
