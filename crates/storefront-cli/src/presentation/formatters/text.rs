pub fn truncate(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}

/// Collapse newlines and runs of whitespace into single spaces
pub fn single_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Mug", 10), "Mug");
        assert_eq!(truncate("Fjallraven Backpack", 10), "Fjallra...");
    }

    #[test]
    fn test_single_line() {
        assert_eq!(single_line("Slim fit\n  cotton\tshirt"), "Slim fit cotton shirt");
    }
}
