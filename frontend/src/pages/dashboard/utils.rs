use chrono::NaiveDateTime;

pub fn format_timestamp(timestamp: &NaiveDateTime) -> String {
    timestamp.format("%Y-%m-%d %H:%M").to_string()
}

/// Server file paths look like `uploads/<id>_<name>`; only the final
/// segment is worth showing.
pub fn file_display_name(path: &str) -> String {
    path.rsplit(['/', '\\'])
        .next()
        .filter(|name| !name.is_empty())
        .unwrap_or(path)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamps_render_to_the_minute() {
        let timestamp: NaiveDateTime = "2025-01-02T03:04:05".parse().unwrap();
        assert_eq!(format_timestamp(&timestamp), "2025-01-02 03:04");
    }

    #[test]
    fn display_name_keeps_only_the_final_segment() {
        assert_eq!(file_display_name("uploads/42_take.mp3"), "42_take.mp3");
        assert_eq!(file_display_name("take.mp3"), "take.mp3");
        assert_eq!(file_display_name("uploads\\win\\take.mp3"), "take.mp3");
    }
}
