//! Game settings
//!
//! Arena size and the gameplay policies that the simulation leaves open.
//! Loaded from an optional JSON file on native builds.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::sim::Arena;

/// Which quantities scale with frame-time delta
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum MotionScaling {
    /// Only input rotation scales with delta; thrust, friction and
    /// position steps run at a fixed per-tick rate (classic behavior)
    #[default]
    RotationOnly,
    /// Rotation, thrust, friction, position and asteroid spin all scale
    Uniform,
}

impl MotionScaling {
    pub fn as_str(&self) -> &'static str {
        match self {
            MotionScaling::RotationOnly => "RotationOnly",
            MotionScaling::Uniform => "Uniform",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "rotation" | "rotationonly" | "rotation_only" => Some(MotionScaling::RotationOnly),
            "uniform" => Some(MotionScaling::Uniform),
            _ => None,
        }
    }
}

/// What happens to a bullet that destroys an asteroid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum BulletHitPolicy {
    /// Bullet keeps flying and may destroy every asteroid it overlaps
    #[default]
    Pierce,
    /// Bullet is removed and destroys at most one asteroid
    Consume,
}

/// Game settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Play area for new rounds; a running round uses its own `GameState::arena`
    pub arena: Arena,
    /// Frame-time delta policy
    pub motion_scaling: MotionScaling,
    /// Bullet behavior on hit
    pub bullet_hit: BulletHitPolicy,
    /// Run seed (None = derive from the clock)
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            arena: Arena::default(),
            motion_scaling: MotionScaling::RotationOnly,
            bullet_hit: BulletHitPolicy::Pierce,
            seed: None,
        }
    }
}

impl Settings {
    /// Parse settings from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let settings: Self = serde_json::from_str(json)?;
        Ok(settings.validate())
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Replace an unusable arena with the default one
    pub fn validate(mut self) -> Self {
        let ok = |d: f32| d.is_finite() && d > 0.0;
        if !ok(self.arena.width) || !ok(self.arena.height) {
            log::warn!(
                "Invalid arena {}x{}, using {}x{}",
                self.arena.width,
                self.arena.height,
                Arena::default().width,
                Arena::default().height
            );
            self.arena = Arena::default();
        }
        self
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Bad settings file {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Could not read {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_classic_arena() {
        let s = Settings::default();
        assert_eq!(s.arena.width, 800.0);
        assert_eq!(s.arena.height, 600.0);
        assert_eq!(s.motion_scaling, MotionScaling::RotationOnly);
        assert_eq!(s.bullet_hit, BulletHitPolicy::Pierce);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let s = Settings::from_json(r#"{ "bullet_hit": "Consume", "seed": 7 }"#).unwrap();
        assert_eq!(s.bullet_hit, BulletHitPolicy::Consume);
        assert_eq!(s.seed, Some(7));
        assert_eq!(s.arena.width, 800.0);
    }

    #[test]
    fn test_zero_arena_rejected() {
        let s = Settings::from_json(r#"{ "arena": { "width": 0.0, "height": 600.0 } }"#).unwrap();
        assert_eq!(s.arena, Arena::default());
    }

    #[test]
    fn test_malformed_json_is_error() {
        assert!(Settings::from_json("{ not json").is_err());
    }

    #[test]
    fn test_json_roundtrip_keeps_custom_arena() {
        let mut s = Settings::default();
        s.arena = Arena::new(1024.0, 768.0);
        let back = Settings::from_json(&s.to_json().unwrap()).unwrap();
        assert_eq!(back.arena, Arena::new(1024.0, 768.0));
    }

    #[test]
    fn test_missing_file_falls_back() {
        let s = Settings::load(Path::new("/definitely/not/here.json"));
        assert_eq!(s.arena, Arena::default());
    }

    #[test]
    fn test_motion_scaling_from_str() {
        assert_eq!(MotionScaling::from_str("Uniform"), Some(MotionScaling::Uniform));
        assert_eq!(MotionScaling::from_str("rotation"), Some(MotionScaling::RotationOnly));
        assert_eq!(MotionScaling::from_str("bogus"), None);
    }
}
