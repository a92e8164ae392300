use std::env;

pub const NO_PAUSE_VAR: &str = "MAP_DEMOS_NO_PAUSE";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DemoConfig {
    /// Wait for a line on stdin before exiting.
    pub pause: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self { pause: true }
    }
}

impl DemoConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let no_pause = lookup(NO_PAUSE_VAR).is_some_and(|value| {
            matches!(
                value.trim().to_ascii_lowercase().as_str(),
                "1" | "true" | "yes"
            )
        });
        Self { pause: !no_pause }
    }
}
