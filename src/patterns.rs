use once_cell::sync::Lazy;
use regex::Regex;

/// Paths ending in a recognized image extension, case-insensitive.
static IMAGE_PATH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\.(jpg|jpeg|gif|png)$").expect("image pattern is valid"));

pub fn is_image_request(path: &str) -> bool {
    IMAGE_PATH.is_match(path)
}
