/// Joins `Label: value` pairs, one per line, in the order given.
pub fn compose_body(lines: &[(&str, &str)]) -> String {
    lines
        .iter()
        .map(|(label, value)| format!("{label}: {value}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// `mailto:` URI whose subject and body are percent-encoded.
pub fn mailto_uri(to: &str, subject: &str, body: &str) -> String {
    format!(
        "mailto:{to}?subject={}&body={}",
        urlencoding::encode(subject),
        urlencoding::encode(body)
    )
}
