//! Info panel content: what the overlay shows for the hovered body.

use crate::data::CelestialBody;

pub const WELCOME_TITLE: &str = "Solar System Explorer";
pub const WELCOME_SUBTITLE: &str = "Hover over a body to learn more.";
pub const WELCOME_DESCRIPTION: &str = "Experience an interactive tour of our solar system. \
Move the mouse to inspect worlds, drag to orbit the camera, and scroll to zoom.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoRow {
    pub label: &'static str,
    pub value: String,
}

/// Text of the info overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoPanel {
    pub title: String,
    pub subtitle: String,
    pub rows: Vec<InfoRow>,
    pub description: String,
}

impl Default for InfoPanel {
    fn default() -> Self {
        Self::welcome()
    }
}

impl InfoPanel {
    /// Shown when nothing is under the pointer.
    pub fn welcome() -> Self {
        Self {
            title: WELCOME_TITLE.to_string(),
            subtitle: WELCOME_SUBTITLE.to_string(),
            rows: Vec::new(),
            description: WELCOME_DESCRIPTION.to_string(),
        }
    }

    /// Shown while the dataset is being resolved.
    pub fn loading() -> Self {
        Self {
            title: "Loading solar system data…".to_string(),
            subtitle: String::new(),
            rows: Vec::new(),
            description: String::new(),
        }
    }

    /// Shown when the scene could not be built.
    pub fn startup_error() -> Self {
        Self {
            title: "Unable to load solar system data".to_string(),
            subtitle: "Check the console for details.".to_string(),
            rows: Vec::new(),
            description: String::new(),
        }
    }

    pub fn for_body(body: &CelestialBody) -> Self {
        let mut rows = vec![InfoRow {
            label: "Radius",
            value: format!("{} km", format_grouped(body.radius_km)),
        }];

        if let Some(orbit) = &body.orbit {
            rows.push(InfoRow {
                label: "Orbital Period",
                value: format!("{} days", format_grouped(orbit.orbital_period_days)),
            });
            rows.push(InfoRow {
                label: "Semi-major Axis",
                value: format!("{} million km", format_fixed(orbit.semi_major_axis_km / 1e6, 2)),
            });
            rows.push(InfoRow {
                label: "Eccentricity",
                value: format_fixed(orbit.eccentricity, 4),
            });
        }

        Self {
            title: body.name.clone(),
            subtitle: body.kind.label().to_string(),
            rows,
            description: body.description.clone(),
        }
    }
}

/// `1234567.891` → `"1,234,567.891"`: comma thousands separators, at most
/// three fractional digits, trailing zeros dropped.
///
/// Rounds the shortest decimal form of `value`, ties away from zero.
pub fn format_grouped(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let (int_part, frac_part) = round_decimal(&value.abs().to_string(), 3);
    let frac_part = frac_part.trim_end_matches('0');

    let mut out = String::with_capacity(int_part.len() + int_part.len() / 3 + 5);
    let nonzero = int_part.bytes().chain(frac_part.bytes()).any(|b| b != b'0');
    if value < 0.0 && nonzero {
        out.push('-');
    }
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

/// Exactly `places` fractional digits, rounding the exact binary value
/// half away from zero: `0.125` → `"0.13"`, `1.005` → `"1.00"`.
pub fn format_fixed(value: f64, places: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    // 1074 digits cover the full binary expansion of any f64.
    let exact = format!("{:.1074}", value.abs());
    let (int_part, frac_part) = round_decimal(&exact, places);

    let mut out = String::with_capacity(int_part.len() + places + 2);
    if value < 0.0 {
        out.push('-');
    }
    out.push_str(&int_part);
    if places > 0 {
        out.push('.');
        out.push_str(&frac_part);
    }
    out
}

/// Round an unsigned plain decimal (`"123.4567"`) to `places` fractional
/// digits, half away from zero. Returns the integer and fractional digits.
fn round_decimal(plain: &str, places: usize) -> (String, String) {
    let (int_part, frac_part) = plain.split_once('.').unwrap_or((plain, ""));

    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().chain(std::iter::repeat(b'0')).take(places))
        .collect();

    if frac_part.as_bytes().get(places).is_some_and(|d| *d >= b'5') {
        let mut carry = true;
        for d in digits.iter_mut().rev() {
            if *d == b'9' {
                *d = b'0';
            } else {
                *d += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
        }
    }

    let split = digits.len() - places;
    let text: String = digits.iter().map(|&b| b as char).collect();
    (text[..split].to_string(), text[split..].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::embedded::embedded_dataset;

    #[test]
    fn grouping() {
        assert_eq!(format_grouped(0.0), "0");
        assert_eq!(format_grouped(999.0), "999");
        assert_eq!(format_grouped(1000.0), "1,000");
        assert_eq!(format_grouped(2439.7), "2,439.7");
        assert_eq!(format_grouped(696340.0), "696,340");
        assert_eq!(format_grouped(60190.03), "60,190.03");
        assert_eq!(format_grouped(0.31891), "0.319");
        assert_eq!(format_grouped(-1234.5), "-1,234.5");
        assert_eq!(format_grouped(-0.0001), "0");
        assert_eq!(format_grouped(999.9999), "1,000");
    }

    #[test]
    fn midpoints_round_away_from_zero() {
        assert_eq!(format_grouped(1.0625), "1.063");
        assert_eq!(format_grouped(2.0625), "2.063");
        assert_eq!(format_grouped(-1.0625), "-1.063");
        assert_eq!(format_fixed(0.125, 2), "0.13");
        assert_eq!(format_fixed(0.03125, 4), "0.0313");
        assert_eq!(format_fixed(2.5, 0), "3");
        assert_eq!(format_fixed(9.995, 2), "9.99");
        assert_eq!(format_fixed(99.999, 2), "100.00");
    }

    #[test]
    fn fixed_rounds_the_binary_value() {
        // 1.005 is stored just below the midpoint
        assert_eq!(format_fixed(1.005, 2), "1.00");
        assert_eq!(format_fixed(0.2056, 4), "0.2056");
        assert_eq!(format_fixed(57.90905, 2), "57.91");
        assert_eq!(format_fixed(0.0, 4), "0.0000");
    }

    #[test]
    fn midpoint_rows() {
        let body: CelestialBody = serde_json::from_str(
            r#"{
                "name": "Midpoint",
                "type": "planet",
                "radiusKm": 1.0625,
                "orbit": {
                    "semiMajorAxisKm": 125000,
                    "orbitalPeriodDays": 2.0625,
                    "eccentricity": 0.03125
                }
            }"#,
        )
        .unwrap();
        let values: Vec<String> = InfoPanel::for_body(&body)
            .rows
            .into_iter()
            .map(|r| r.value)
            .collect();
        assert_eq!(
            values,
            ["1.063 km", "2.063 days", "0.13 million km", "0.0313"]
        );
    }

    #[test]
    fn planet_rows() {
        let dataset = embedded_dataset();
        let mercury = dataset.bodies.iter().find(|b| b.name == "Mercury").unwrap();
        let panel = InfoPanel::for_body(mercury);
        assert_eq!(panel.title, "Mercury");
        assert_eq!(panel.subtitle, "Planet");
        let rows: Vec<(&str, &str)> = panel
            .rows
            .iter()
            .map(|r| (r.label, r.value.as_str()))
            .collect();
        assert_eq!(
            rows,
            [
                ("Radius", "2,439.7 km"),
                ("Orbital Period", "87.969 days"),
                ("Semi-major Axis", "57.91 million km"),
                ("Eccentricity", "0.2056"),
            ]
        );
        assert_eq!(panel.description, mercury.description);
    }

    #[test]
    fn star_has_only_radius() {
        let dataset = embedded_dataset();
        let panel = InfoPanel::for_body(&dataset.bodies[0]);
        assert_eq!(panel.subtitle, "Star");
        assert_eq!(panel.rows.len(), 1);
        assert_eq!(panel.rows[0].value, "696,340 km");
    }

    #[test]
    fn moon_label() {
        let dataset = embedded_dataset();
        let moon = &dataset.bodies[3].moons[0];
        assert_eq!(InfoPanel::for_body(moon).subtitle, "Moon");
    }

    #[test]
    fn welcome_has_no_rows() {
        let panel = InfoPanel::welcome();
        assert_eq!(panel.title, WELCOME_TITLE);
        assert!(panel.rows.is_empty());
        assert_eq!(InfoPanel::default(), panel);
    }
}
