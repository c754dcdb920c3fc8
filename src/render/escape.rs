/// Escapes LaTeX control characters.
///
/// Works in a single pass over the input, so backslashes introduced by a
/// replacement are never escaped again.
pub fn escape_latex(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '\\' => escaped.push_str("\\textbackslash{}"),
            '{' | '}' | '$' | '&' | '%' | '#' | '_' => {
                escaped.push('\\');
                escaped.push(ch);
            }
            '^' => escaped.push_str("\\textasciicircum{}"),
            '~' => escaped.push_str("\\textasciitilde{}"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
