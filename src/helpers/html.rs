/// Escape HTML special characters
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_escape() {
        assert_eq!(html_escape("<script>"), "&lt;script&gt;");
        assert_eq!(html_escape("Tom & Jerry"), "Tom &amp; Jerry");
        assert_eq!(html_escape("\"quoted\""), "&quot;quoted&quot;");
        assert_eq!(html_escape("O'Brien"), "O&#39;Brien");
    }

    #[test]
    fn test_html_escape_leaves_plain_text() {
        assert_eq!(html_escape("Loft 3"), "Loft 3");
        assert_eq!(html_escape("2024-05-01"), "2024-05-01");
    }
}
