//! Client environment classification for the footer's system-info block.
//!
//! The user-agent string is matched against fixed, ordered candidate lists;
//! the first substring hit wins per list. Matching is case-sensitive, same
//! as the identification strings browsers actually send.

/// Placeholder shown instead of a real network lookup.
pub const PLACEHOLDER_IP: &str = "192.168.x.x";

type MatchRule = (&'static [&'static str], &'static str);

// Linux is checked before Android on purpose: Android user agents carry
// both tokens and the list order decides.
const OS_RULES: &[MatchRule] = &[
    (&["Windows"], "Windows"),
    (&["Mac"], "macOS"),
    (&["Linux"], "Linux"),
    (&["Android"], "Android"),
    (&["iOS", "iPhone", "iPad"], "iOS"),
];

const BROWSER_RULES: &[MatchRule] = &[
    (&["Chrome"], "Chrome"),
    (&["Firefox"], "Firefox"),
    (&["Safari"], "Safari"),
    (&["Edge"], "Edge"),
    (&["Opera", "OPR"], "Opera"),
    (&["MSIE", "Trident/"], "Internet Explorer"),
];

fn first_match(rules: &[MatchRule], user_agent: &str, fallback: &'static str) -> &'static str {
    rules
        .iter()
        .find(|(needles, _)| needles.iter().any(|n| user_agent.contains(n)))
        .map(|(_, label)| *label)
        .unwrap_or(fallback)
}

pub fn classify_os(user_agent: &str) -> &'static str {
    first_match(OS_RULES, user_agent, "Unknown OS")
}

pub fn classify_browser(user_agent: &str) -> &'static str {
    first_match(BROWSER_RULES, user_agent, "Unknown Browser")
}

/// Snapshot of the client's self-reported identity. Viewport dimensions are
/// deliberately not part of the snapshot; they stay reactive to resize and
/// are read from the window-size signal at display time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SystemSnapshot {
    pub operating_system: &'static str,
    pub browser: &'static str,
    pub ip_address: &'static str,
}

impl SystemSnapshot {
    pub fn from_user_agent(user_agent: &str) -> Self {
        Self {
            operating_system: classify_os(user_agent),
            browser: classify_browser(user_agent),
            ip_address: PLACEHOLDER_IP,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHROME_ON_WINDOWS: &str =
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0 Safari/537.36";
    const FIREFOX_ON_LINUX: &str =
        "Mozilla/5.0 (X11; Linux x86_64; rv:121.0) Gecko/20100101 Firefox/121.0";
    const SAFARI_ON_MAC: &str =
        "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.1 Safari/605.1.15";
    const CHROME_ON_ANDROID: &str =
        "Mozilla/5.0 (Linux; Android 14; Pixel 8) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0 Mobile Safari/537.36";

    #[test]
    fn test_os_classification() {
        assert_eq!(classify_os(CHROME_ON_WINDOWS), "Windows");
        assert_eq!(classify_os(SAFARI_ON_MAC), "macOS");
        assert_eq!(classify_os(FIREFOX_ON_LINUX), "Linux");
        assert_eq!(classify_os("Mozilla/5.0 (iPhone; CPU iPhone OS 17_1)"), "iOS");
    }

    #[test]
    fn test_android_reports_as_linux() {
        // Android user agents contain "Linux", which sits earlier in the
        // ordered list; first match wins.
        assert_eq!(classify_os(CHROME_ON_ANDROID), "Linux");
    }

    #[test]
    fn test_browser_classification() {
        assert_eq!(classify_browser(CHROME_ON_WINDOWS), "Chrome");
        assert_eq!(classify_browser(FIREFOX_ON_LINUX), "Firefox");
        assert_eq!(classify_browser(SAFARI_ON_MAC), "Safari");
        assert_eq!(classify_browser("Mozilla/5.0 ... Trident/7.0"), "Internet Explorer");
    }

    #[test]
    fn test_unknown_fallbacks() {
        assert_eq!(classify_os("curl/8.4.0"), "Unknown OS");
        assert_eq!(classify_browser("curl/8.4.0"), "Unknown Browser");
    }

    #[test]
    fn test_snapshot_carries_placeholder_address() {
        let snapshot = SystemSnapshot::from_user_agent(CHROME_ON_WINDOWS);
        assert_eq!(snapshot.operating_system, "Windows");
        assert_eq!(snapshot.browser, "Chrome");
        assert_eq!(snapshot.ip_address, PLACEHOLDER_IP);
    }
}
