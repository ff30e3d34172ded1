//! HTML to readable text.

/// Column width handed to the renderer; lines are rejoined afterwards.
const RENDER_WIDTH: usize = 100;

/// Renders `html` as plain text with blank lines and edge whitespace removed.
pub fn html_to_text(html: &str) -> String {
    let text = html2text::from_read(html.as_bytes(), RENDER_WIDTH);

    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
