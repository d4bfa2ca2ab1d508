//! Runtime configuration from environment variables.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `LIFE_BOARD_SIZE` | 50 | Board side length (1..=200) |
//! | `LIFE_TICK_MS` | 175 | Interval between generations |
//! | `LIFE_SEED` | wall clock | Seed for random boards |
//! | `LIFE_PATTERN_PATH` | unset | Pattern file loaded at startup |
//! | `LIFE_HEADLESS` | unset | Run this many generations without the TUI and print them |
//! | `LIFE_LOG_PATH` | unset | Log file for TUI runs |
//!
//! Unparseable values fall back to their defaults with a warning.

use std::env;
use std::path::PathBuf;

use log::warn;

use crate::types::{DEFAULT_BOARD_SIZE, GENERATION_MS, MAX_BOARD_SIZE};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LifeConfig {
    pub board_size: usize,
    pub generation_ms: u32,
    pub seed: Option<u32>,
    pub pattern_path: Option<PathBuf>,
    pub headless_generations: Option<u64>,
    pub log_path: Option<PathBuf>,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            generation_ms: GENERATION_MS,
            seed: None,
            pattern_path: None,
            headless_generations: None,
            log_path: None,
        }
    }
}

impl LifeConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read configuration through an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let board_size = parse_var(&lookup, "LIFE_BOARD_SIZE")
            .map(|n: usize| n.clamp(1, MAX_BOARD_SIZE))
            .unwrap_or(defaults.board_size);

        let generation_ms = parse_var(&lookup, "LIFE_TICK_MS")
            .map(|ms: u32| ms.max(1))
            .unwrap_or(defaults.generation_ms);

        Self {
            board_size,
            generation_ms,
            seed: parse_var(&lookup, "LIFE_SEED"),
            pattern_path: path_var(&lookup, "LIFE_PATTERN_PATH"),
            headless_generations: parse_var(&lookup, "LIFE_HEADLESS"),
            log_path: path_var(&lookup, "LIFE_LOG_PATH"),
        }
    }

    pub fn is_headless(&self) -> bool {
        self.headless_generations.is_some()
    }
}

fn non_empty(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<String> {
    lookup(key)
        .map(|s| s.trim().to_string())
        .and_then(|s| if s.is_empty() { None } else { Some(s) })
}

fn parse_var<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> Option<T> {
    let raw = non_empty(lookup, key)?;
    match raw.parse() {
        Ok(v) => Some(v),
        Err(_) => {
            warn!("ignoring {key}={raw:?}: not a valid number");
            None
        }
    }
}

fn path_var(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<PathBuf> {
    non_empty(lookup, key).map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> LifeConfig {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        LifeConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn defaults_without_variables() {
        assert_eq!(config(&[]), LifeConfig::default());
        assert!(!config(&[]).is_headless());
    }

    #[test]
    fn reads_all_variables() {
        let c = config(&[
            ("LIFE_BOARD_SIZE", "64"),
            ("LIFE_TICK_MS", "100"),
            ("LIFE_SEED", "42"),
            ("LIFE_PATTERN_PATH", " gun.txt "),
            ("LIFE_HEADLESS", "10"),
            ("LIFE_LOG_PATH", "/tmp/life.log"),
        ]);
        assert_eq!(c.board_size, 64);
        assert_eq!(c.generation_ms, 100);
        assert_eq!(c.seed, Some(42));
        assert_eq!(c.pattern_path, Some(PathBuf::from("gun.txt")));
        assert_eq!(c.headless_generations, Some(10));
        assert_eq!(c.log_path, Some(PathBuf::from("/tmp/life.log")));
    }

    #[test]
    fn invalid_values_fall_back() {
        let c = config(&[("LIFE_BOARD_SIZE", "huge"), ("LIFE_TICK_MS", "-5")]);
        assert_eq!(c.board_size, DEFAULT_BOARD_SIZE);
        assert_eq!(c.generation_ms, GENERATION_MS);
    }

    #[test]
    fn board_size_is_clamped() {
        assert_eq!(config(&[("LIFE_BOARD_SIZE", "0")]).board_size, 1);
        assert_eq!(config(&[("LIFE_BOARD_SIZE", "5000")]).board_size, MAX_BOARD_SIZE);
    }

    #[test]
    fn blank_paths_are_unset() {
        let c = config(&[("LIFE_PATTERN_PATH", "   ")]);
        assert_eq!(c.pattern_path, None);
    }
}
