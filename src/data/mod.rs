//! Celestial-body dataset schema.
//!
//! Mirrors the JSON document served by every dataset tier:
//!
//! ```json
//! { "updated": "...", "source": "...", "bodies": [Body] }
//! ```
//!
//! where a `Body` is `{ name, type, radiusKm, color, description, orbit?, moons? }`.

pub mod embedded;

use std::fmt;

use serde::{Deserialize, Serialize};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  BodyKind
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyKind {
    Star,
    Planet,
    Moon,
}

impl BodyKind {
    /// Display label used by the info panel.
    pub fn label(self) -> &'static str {
        match self {
            BodyKind::Star => "Star",
            BodyKind::Planet => "Planet",
            BodyKind::Moon => "Moon",
        }
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  Rgb: "#rrggbb" / "#rgb" colour
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// 8-bit RGB triple, serialized as a CSS hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::from_u32(0xffffff);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build from a packed `0xRRGGBB` value.
    pub const fn from_u32(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as u8,
            g: ((hex >> 8) & 0xff) as u8,
            b: (hex & 0xff) as u8,
        }
    }

    /// Parse `#rrggbb` or `#rgb` (leading `#` optional).
    pub fn from_hex(s: &str) -> Option<Self> {
        let digits = s.trim().trim_start_matches('#');
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        match digits.len() {
            6 => u32::from_str_radix(digits, 16).ok().map(Self::from_u32),
            3 => {
                let mut expanded = String::with_capacity(6);
                for c in digits.chars() {
                    expanded.push(c);
                    expanded.push(c);
                }
                u32::from_str_radix(&expanded, 16).ok().map(Self::from_u32)
            }
            _ => None,
        }
    }

    /// Channels normalized to [0, 1].
    pub fn to_unit(self) -> [f32; 3] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        ]
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Self::WHITE
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl TryFrom<String> for Rgb {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Rgb::from_hex(&value).ok_or_else(|| format!("invalid colour {:?}", value))
    }
}

impl From<Rgb> for String {
    fn from(value: Rgb) -> Self {
        value.to_string()
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  Records
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Orbital elements relative to the parent body. Immutable for the session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrbitalElements {
    pub semi_major_axis_km: f64,
    pub orbital_period_days: f64,
    pub eccentricity: f64,
    /// Values above 90 denote a retrograde orbit.
    #[serde(default)]
    pub inclination_deg: f64,
}

impl OrbitalElements {
    /// Check the numeric ranges the kinematics rely on.
    pub fn check(&self) -> Result<(), String> {
        if !(self.semi_major_axis_km.is_finite() && self.semi_major_axis_km > 0.0) {
            return Err(format!(
                "semiMajorAxisKm must be > 0, got {}",
                self.semi_major_axis_km
            ));
        }
        if !(self.orbital_period_days.is_finite() && self.orbital_period_days > 0.0) {
            return Err(format!(
                "orbitalPeriodDays must be > 0, got {}",
                self.orbital_period_days
            ));
        }
        if !(0.0..1.0).contains(&self.eccentricity) {
            return Err(format!(
                "eccentricity must be in [0, 1), got {}",
                self.eccentricity
            ));
        }
        if !self.inclination_deg.is_finite() {
            return Err("inclinationDeg must be finite".to_string());
        }
        Ok(())
    }
}

/// Static description of one star, planet or moon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CelestialBody {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: BodyKind,
    pub radius_km: f64,
    #[serde(default)]
    pub color: Rgb,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orbit: Option<OrbitalElements>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub moons: Vec<CelestialBody>,
}

impl CelestialBody {
    /// Validate this record and its moons recursively.
    pub fn check(&self) -> Result<(), String> {
        if !(self.radius_km.is_finite() && self.radius_km > 0.0) {
            return Err(format!("{}: radiusKm must be > 0", self.name));
        }
        match (self.kind, &self.orbit) {
            (BodyKind::Star, Some(_)) => {
                return Err(format!("{}: a star cannot have an orbit", self.name));
            }
            (BodyKind::Planet | BodyKind::Moon, None) => {
                return Err(format!("{}: missing orbit", self.name));
            }
            (_, Some(orbit)) => orbit.check().map_err(|e| format!("{}: {}", self.name, e))?,
            (BodyKind::Star, None) => {}
        }
        let mut seen = std::collections::HashSet::new();
        for moon in &self.moons {
            if !seen.insert(moon.name.as_str()) {
                return Err(format!("{}: duplicate moon name {}", self.name, moon.name));
            }
            moon.check()?;
        }
        Ok(())
    }

    /// This body plus every descendant.
    pub fn count(&self) -> usize {
        1 + self.moons.iter().map(CelestialBody::count).sum::<usize>()
    }
}

/// A complete dataset document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub updated: String,
    #[serde(default)]
    pub source: String,
    pub bodies: Vec<CelestialBody>,
}

impl Dataset {
    /// Validate every record. Does not require a star; that is the
    /// hierarchy builder's concern.
    pub fn check(&self) -> Result<(), String> {
        if self.bodies.is_empty() {
            return Err("`bodies` is empty".to_string());
        }
        let mut seen = std::collections::HashSet::new();
        for body in &self.bodies {
            if !seen.insert(body.name.as_str()) {
                return Err(format!("duplicate body name {}", body.name));
            }
            body.check()?;
        }
        Ok(())
    }

    /// Total number of records, moons included.
    pub fn body_count(&self) -> usize {
        self.bodies.iter().map(CelestialBody::count).sum()
    }
}
