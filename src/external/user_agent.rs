use rand::seq::IndexedRandom;

/// Recent desktop Chrome releases on Windows, Linux and macOS
const DESKTOP_CHROME: &[&str] = &[
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/130.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/129.0.0.0 Safari/537.36",
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36",
];

/// User-Agent sent with every SHOWROOM request of a run
pub fn random_user_agent() -> &'static str {
    DESKTOP_CHROME
        .choose(&mut rand::rng())
        .copied()
        .unwrap_or(DESKTOP_CHROME[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_user_agent_is_desktop_chrome() {
        for _ in 0..20 {
            let ua = random_user_agent();
            assert!(DESKTOP_CHROME.contains(&ua));
            assert!(ua.contains("Chrome/"));
        }
    }
}
