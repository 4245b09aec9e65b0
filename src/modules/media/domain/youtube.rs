use regex::Regex;
use std::sync::OnceLock;

static VIDEO_ID_RE: OnceLock<Regex> = OnceLock::new();

fn video_id_re() -> &'static Regex {
    // Matches the id segment of watch, share, embed, and legacy URL shapes
    VIDEO_ID_RE.get_or_init(|| {
        Regex::new(r"(youtu\.be/|v/|u/\w/|embed/|watch\?v=|&v=)([^#&?]*)")
            .expect("youtube id pattern is valid")
    })
}

/// Extracts the 11-character video id from any known YouTube URL shape.
pub fn video_id(url: &str) -> Option<&str> {
    let captures = video_id_re().captures(url)?;
    let id = captures.get(2)?.as_str();

    if id.len() == 11 {
        Some(id)
    } else {
        None
    }
}

/// Thumbnail for a video URL; empty when no id can be extracted so callers
/// can fall back to a placeholder without branching on errors.
pub fn thumbnail_url(url: &str) -> String {
    match video_id(url) {
        Some(id) => format!("https://img.youtube.com/vi/{}/hqdefault.jpg", id),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_id_from_known_url_shapes() {
        let urls = [
            "https://youtu.be/dQw4w9WgXcQ",
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
            "https://www.youtube.com/embed/dQw4w9WgXcQ",
        ];

        for url in urls {
            assert_eq!(video_id(url), Some("dQw4w9WgXcQ"), "failed for {}", url);
        }
    }

    #[test]
    fn test_extracts_id_from_list_parameter_url() {
        let url = "https://www.youtube.com/watch?list=PL123&v=dQw4w9WgXcQ";

        assert_eq!(video_id(url), Some("dQw4w9WgXcQ"));
    }

    #[test]
    fn test_no_id_yields_none_not_a_panic() {
        assert_eq!(video_id("https://example.com/video"), None);
        assert_eq!(video_id("https://youtu.be/short"), None);
        assert_eq!(video_id(""), None);
    }

    #[test]
    fn test_thumbnail_derived_from_id() {
        assert_eq!(
            thumbnail_url("https://youtu.be/dQw4w9WgXcQ"),
            "https://img.youtube.com/vi/dQw4w9WgXcQ/hqdefault.jpg"
        );
    }

    #[test]
    fn test_thumbnail_is_empty_without_id() {
        assert_eq!(thumbnail_url("https://example.com/clip"), "");
    }
}
