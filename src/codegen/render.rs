/// Prefixes each line of a generated source string with a right-aligned
/// 1-based line number, the way the editor's preview gutter displays it.
pub fn with_line_numbers(source: &str) -> String {
    let lines: Vec<&str> = source.split('\n').collect();
    let width = lines.len().to_string().len();
    lines
        .iter()
        .enumerate()
        .map(|(i, line)| format!("{:>width$}  {}", i + 1, line))
        .collect::<Vec<_>>()
        .join("\n")
}
