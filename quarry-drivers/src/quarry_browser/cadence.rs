use anyhow::Result;
use fantoccini::elements::Element;
use rand::rngs::OsRng;
use rand::Rng;
use std::time::Duration;
use tokio::time::sleep;

/// Paces keyboard and pointer input so a session types and acts at a human
/// rhythm instead of firing DOM events back to back.
#[derive(Debug, Clone)]
pub struct InputCadence {
    keystroke_ms: (u64, u64),
    action_ms: (u64, u64),
}

impl Default for InputCadence {
    fn default() -> Self {
        Self {
            keystroke_ms: (20, 120),
            action_ms: (200, 900),
        }
    }
}

impl InputCadence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sleep for a random duration between `min` and `max` milliseconds.
    pub async fn pause(&self, min: u64, max: u64) {
        let mut rng = OsRng;
        let ms = rng.gen_range(min..=max);
        sleep(Duration::from_millis(ms)).await;
    }

    /// Sleep for one inter-action gap (between navigations, clicks).
    pub async fn between_actions(&self) {
        self.pause(self.action_ms.0, self.action_ms.1).await;
    }

    /// Type the provided text with small random delays between characters.
    pub async fn type_into(&self, element: &Element, text: &str) -> Result<()> {
        for ch in text.chars() {
            element.send_keys(&ch.to_string()).await?;
            self.pause(self.keystroke_ms.0, self.keystroke_ms.1).await;
        }
        Ok(())
    }
}
