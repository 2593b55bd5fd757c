use std::fmt;

/// Coarse browser family derived from a user-agent string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Browser {
    Firefox,
    Chrome,
    InternetExplorer,
    Safari,
    Other,
}

impl Browser {
    /// Every label, in ranking preference order.
    pub const ALL: [Browser; 5] = [
        Browser::Firefox,
        Browser::Chrome,
        Browser::InternetExplorer,
        Browser::Safari,
        Browser::Other,
    ];

    /// Labels considered when picking the most popular browser.
    pub const NAMED: [Browser; 4] = [
        Browser::Firefox,
        Browser::Chrome,
        Browser::InternetExplorer,
        Browser::Safari,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Browser::Firefox => "Firefox",
            Browser::Chrome => "Chrome",
            Browser::InternetExplorer => "Internet Explorer",
            Browser::Safari => "Safari",
            Browser::Other => "Other",
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Browser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Classify a user agent. Rules are checked in order and the first match wins;
/// all checks are case-sensitive substring tests.
pub fn detect_browser(user_agent: &str) -> Browser {
    let ua = user_agent;
    if ua.contains("Firefox") {
        Browser::Firefox
    } else if ua.contains("Chrome") && !ua.contains("Chromium") {
        Browser::Chrome
    } else if ua.contains("MSIE") || ua.contains("Trident") {
        Browser::InternetExplorer
    } else if ua.contains("Safari") && !ua.contains("Chrome") {
        Browser::Safari
    } else {
        Browser::Other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_common_agents() {
        let cases = [
            (
                "Mozilla/5.0 (Windows NT 10.0; rv:109.0) Gecko/20100101 Firefox/115.0",
                Browser::Firefox,
            ),
            (
                "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0 Safari/537.36",
                Browser::Chrome,
            ),
            (
                "Mozilla/4.0 (compatible; MSIE 8.0; Windows NT 6.1; Trident/4.0)",
                Browser::InternetExplorer,
            ),
            (
                "Mozilla/5.0 (Windows NT 6.1; Trident/7.0; rv:11.0) like Gecko",
                Browser::InternetExplorer,
            ),
            (
                "Mozilla/5.0 (Macintosh) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.0 Safari/605.1.15",
                Browser::Safari,
            ),
            ("curl/8.4.0", Browser::Other),
            ("", Browser::Other),
        ];

        for (ua, expected) in cases {
            assert_eq!(detect_browser(ua), expected, "user agent: {ua}");
        }
    }

    #[test]
    fn firefox_rule_wins_over_later_rules() {
        assert_eq!(detect_browser("Firefox Chrome MSIE Safari"), Browser::Firefox);
    }

    #[test]
    fn chromium_is_not_chrome() {
        assert_eq!(
            detect_browser("Mozilla/5.0 Chromium/119.0 Chrome/119.0"),
            Browser::Other
        );
        // Safari rule is also excluded because "Chrome" is present.
        assert_eq!(
            detect_browser("Chromium/119.0 Chrome/119.0 Safari/537.36"),
            Browser::Other
        );
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert_eq!(detect_browser("mozilla firefox"), Browser::Other);
        assert_eq!(detect_browser("msie"), Browser::Other);
    }

    #[test]
    fn display_uses_human_names() {
        assert_eq!(Browser::InternetExplorer.to_string(), "Internet Explorer");
        assert_eq!(Browser::Other.to_string(), "Other");
    }
}
