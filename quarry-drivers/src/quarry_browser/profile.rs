use rand::prelude::SliceRandom;

/// Snapshot of user agent, window, and locale characteristics presented by
/// the browser session.
#[derive(Debug, Clone)]
pub struct SessionProfile {
    pub user_agent: String,
    pub window: (u32, u32),
    pub languages: Vec<String>,
}

impl SessionProfile {
    /// Select one of the built-in desktop profiles for this session.
    pub fn pick() -> Self {
        let mut rng = rand::thread_rng();
        builtin_profiles().choose(&mut rng).unwrap().clone()
    }
}

fn builtin_profiles() -> Vec<SessionProfile> {
    vec![
        SessionProfile {
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36".to_string(),
            window: (1920, 1080),
            languages: vec!["en-US".to_string(), "en".to_string()],
        },
        SessionProfile {
            user_agent: "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36".to_string(),
            window: (1440, 900),
            languages: vec!["en-US".to_string(), "en".to_string()],
        },
    ]
}

/// Construct Chrome command-line arguments for a session profile.
pub fn browser_args(profile: &SessionProfile, headless: bool) -> Vec<String> {
    let mut args = vec![
        "--disable-blink-features=AutomationControlled".to_string(),
        "--disable-infobars".to_string(),
        "--disable-dev-shm-usage".to_string(),
        "--no-sandbox".to_string(),
        format!("--user-agent={}", profile.user_agent),
        format!("--window-size={},{}", profile.window.0, profile.window.1),
        format!("--lang={}", profile.languages.join(",")),
    ];
    if headless {
        args.push("--headless".to_string());
        args.push("--disable-gpu".to_string());
    }
    args
}

/// JavaScript applied after each navigation to mask the most common
/// automation signals.
pub const WEBDRIVER_EVASIONS: &str = r#"
    Object.defineProperty(navigator, 'webdriver', { get: () => undefined });
    Object.defineProperty(navigator, 'plugins', { get: () => [1,2,3] });
    Object.defineProperty(navigator, 'languages', {
        get: () => ['en-US', 'en']
    });
    if (!window.chrome) window.chrome = { runtime: {} };
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pick_returns_a_builtin_profile() {
        let picked = SessionProfile::pick();
        assert!(builtin_profiles()
            .iter()
            .any(|p| p.user_agent == picked.user_agent && p.window == picked.window));
    }

    #[test]
    fn browser_args_carry_profile_and_headless_flags() {
        let profile = SessionProfile {
            user_agent: "QuarryTest/1.0".to_string(),
            window: (800, 600),
            languages: vec!["en-GB".to_string()],
        };

        let visible = browser_args(&profile, false);
        assert!(visible.contains(&"--user-agent=QuarryTest/1.0".to_string()));
        assert!(visible.contains(&"--window-size=800,600".to_string()));
        assert!(visible.contains(&"--lang=en-GB".to_string()));
        assert!(!visible.iter().any(|a| a == "--headless"));

        let headless = browser_args(&profile, true);
        assert!(headless.iter().any(|a| a == "--headless"));
        assert!(headless.iter().any(|a| a == "--disable-gpu"));
    }
}
