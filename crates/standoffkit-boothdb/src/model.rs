//! Booth identifiers and profile records.

use serde::{Deserialize, Serialize};
use standoffkit_core::{EulerAngles, RigidOffset};
use std::collections::BTreeMap;
use std::fmt;

/// Booth numeric codes whose robots carry an auxiliary rotary axis (E1).
/// Used as the default capability when creating a profile by id.
pub const AUX_AXIS_BOOTHS: [u32; 4] = [1, 2, 13, 16];

/// Extract the booth number from a booth label, e.g. `"2a"` -> `2`.
///
/// Best-effort: returns the first contiguous digit run, or `None` when the
/// label carries no digits. The caller decides the fallback; nothing is
/// swallowed silently.
pub fn extract_booth_number(label: &str) -> Option<u32> {
    let start = label.find(|c: char| c.is_ascii_digit())?;
    let digits: &str = &label[start..];
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse().ok()
}

/// A booth identifier: numeric where the label contains a booth number,
/// otherwise the label itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoothId {
    /// A booth addressed by number (labels like `"6"` or `"2a"`).
    Numeric(u32),
    /// A booth addressed by a purely textual label.
    Named(String),
}

impl BoothId {
    /// Parse a booth label, preferring the numeric form.
    pub fn parse(label: &str) -> Self {
        match extract_booth_number(label) {
            Some(number) => Self::Numeric(number),
            None => Self::Named(label.to_string()),
        }
    }

    /// The numeric booth code, when the booth has one.
    pub fn numeric(&self) -> Option<u32> {
        match self {
            Self::Numeric(number) => Some(*number),
            Self::Named(_) => None,
        }
    }
}

impl fmt::Display for BoothId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(number) => write!(f, "{}", number),
            Self::Named(name) => write!(f, "{}", name),
        }
    }
}

/// Configuration of a single robot cell.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BoothProfile {
    /// Booth label as configured, e.g. `"6"` or `"2a"`
    pub id: String,
    pub description: String,
    /// Destination (nozzle) tool offset for standoff adjustment
    pub nozzle_utool: RigidOffset,
    /// Reference angles for Universal Gun Orientation normalization
    pub ugo_reference: EulerAngles,
    /// Configuration tag written into point metadata by the vendor tools
    pub config_tag: String,
    /// Whether the booth's robot carries an auxiliary rotary axis (E1)
    pub has_aux_axis: bool,
    /// UTool setpoints by tool index
    pub utools: BTreeMap<u8, RigidOffset>,
    /// UFrame setpoints by frame index
    pub uframes: BTreeMap<u8, RigidOffset>,
}

impl Default for BoothProfile {
    fn default() -> Self {
        Self {
            id: String::new(),
            description: String::new(),
            nozzle_utool: RigidOffset::default(),
            ugo_reference: EulerAngles::default(),
            config_tag: "N U T, 0, 0, 0".to_string(),
            has_aux_axis: false,
            utools: BTreeMap::new(),
            uframes: BTreeMap::new(),
        }
    }
}

impl BoothProfile {
    /// Create an empty profile for a booth label. The auxiliary-axis
    /// capability defaults from the booth's numeric code per
    /// [`AUX_AXIS_BOOTHS`].
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        let has_aux_axis = extract_booth_number(&id)
            .map(|number| AUX_AXIS_BOOTHS.contains(&number))
            .unwrap_or(false);
        Self {
            id,
            has_aux_axis,
            ..Self::default()
        }
    }
}

/// The per-booth values the conversion orchestrator needs up front.
#[derive(Debug, Clone)]
pub struct BoothSetup {
    /// Destination (nozzle) tool offset
    pub nozzle_utool: RigidOffset,
    /// Reference angles for UGO normalization
    pub ugo_reference: EulerAngles,
    /// Configuration tag string
    pub config_tag: String,
    /// Whether point records must carry an E1 field
    pub has_aux_axis: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_booth_number() {
        assert_eq!(extract_booth_number("6"), Some(6));
        assert_eq!(extract_booth_number("2a"), Some(2));
        assert_eq!(extract_booth_number("booth 13"), Some(13));
        assert_eq!(extract_booth_number("east"), None);
        assert_eq!(extract_booth_number(""), None);
    }

    #[test]
    fn test_booth_id_parse() {
        assert_eq!(BoothId::parse("2a"), BoothId::Numeric(2));
        assert_eq!(BoothId::parse("16"), BoothId::Numeric(16));
        assert_eq!(BoothId::parse("east"), BoothId::Named("east".to_string()));
        assert_eq!(BoothId::parse("2a").to_string(), "2");
        assert_eq!(BoothId::parse("east").to_string(), "east");
    }

    #[test]
    fn test_new_profile_aux_axis_default() {
        assert!(BoothProfile::new("1").has_aux_axis);
        assert!(BoothProfile::new("2a").has_aux_axis);
        assert!(BoothProfile::new("13").has_aux_axis);
        assert!(BoothProfile::new("16").has_aux_axis);
        assert!(!BoothProfile::new("6").has_aux_axis);
        assert!(!BoothProfile::new("east").has_aux_axis);
    }
}
