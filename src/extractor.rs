use std::sync::LazyLock;

use regex::Regex;

/// Recognized YouTube URL shapes, tried in order. Each pattern captures the
/// video ID in group 1. `youtu.be` links never carry a `www.` subdomain.
static URL_PATTERNS: LazyLock<[Regex; 3]> = LazyLock::new(|| {
    [
        Regex::new(r"^https?://(?:www\.)?youtube\.com/watch\?v=([\w-]+)").unwrap(),
        Regex::new(r"^https?://(?:www\.)?youtube\.com/embed/([\w-]+)").unwrap(),
        Regex::new(r"^https?://youtu\.be/([\w-]+)").unwrap(),
    ]
});

/// Extract the video ID from a YouTube URL. First matching pattern wins;
/// `None` means the URL is not one of the supported shapes.
pub fn extract_video_id(url: &str) -> Option<String> {
    URL_PATTERNS
        .iter()
        .find_map(|pattern| pattern.captures(url))
        .map(|caps| caps[1].to_string())
}
