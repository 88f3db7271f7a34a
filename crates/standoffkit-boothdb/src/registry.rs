//! JSON-backed booth profile registry.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use standoffkit_core::RigidOffset;

use crate::error::{BoothError, BoothResult};
use crate::model::{BoothId, BoothProfile, BoothSetup};
use crate::traits::BoothConfigProvider;

/// In-memory registry of booth profiles, keyed by canonical booth id
/// (numeric labels collapse to their booth number, so `"2a"` and `"2"`
/// address the same profile).
#[derive(Debug, Clone, Default)]
pub struct BoothRegistry {
    profiles: BTreeMap<String, BoothProfile>,
}

impl BoothRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a profile, keyed by its canonical id.
    pub fn insert(&mut self, profile: BoothProfile) {
        let key = BoothId::parse(&profile.id).to_string();
        self.profiles.insert(key, profile);
    }

    /// Look up a profile.
    pub fn get(&self, booth: &BoothId) -> Option<&BoothProfile> {
        self.profiles.get(&booth.to_string())
    }

    /// Number of registered profiles.
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Whether the registry holds no profiles.
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Load a registry from a JSON file holding an array of profiles.
    pub fn load(path: &Path) -> BoothResult<Self> {
        let contents = fs::read_to_string(path)?;
        let profiles: Vec<BoothProfile> = serde_json::from_str(&contents)?;
        let mut registry = Self::new();
        for profile in profiles {
            registry.insert(profile);
        }
        Ok(registry)
    }

    /// Save the registry to a JSON file as an array of profiles.
    pub fn save(&self, path: &Path) -> BoothResult<()> {
        let profiles: Vec<&BoothProfile> = self.profiles.values().collect();
        let contents = serde_json::to_string_pretty(&profiles)?;
        fs::write(path, contents)?;
        Ok(())
    }

    fn profile(&self, booth: &BoothId) -> BoothResult<&BoothProfile> {
        self.get(booth)
            .ok_or_else(|| BoothError::BoothNotFound(booth.to_string()))
    }
}

impl BoothConfigProvider for BoothRegistry {
    fn setup(&self, booth: &BoothId) -> BoothResult<BoothSetup> {
        let profile = self.profile(booth)?;
        Ok(BoothSetup {
            nozzle_utool: profile.nozzle_utool,
            ugo_reference: profile.ugo_reference,
            config_tag: profile.config_tag.clone(),
            has_aux_axis: profile.has_aux_axis,
        })
    }

    fn utool(&self, booth: &BoothId, index: u8) -> BoothResult<RigidOffset> {
        let profile = self.profile(booth)?;
        profile
            .utools
            .get(&index)
            .copied()
            .ok_or_else(|| BoothError::ToolNotFound {
                booth: booth.to_string(),
                index,
            })
    }

    fn uframe(&self, booth: &BoothId, index: u8) -> BoothResult<RigidOffset> {
        let profile = self.profile(booth)?;
        profile
            .uframes
            .get(&index)
            .copied()
            .ok_or_else(|| BoothError::FrameNotFound {
                booth: booth.to_string(),
                index,
            })
    }
}
