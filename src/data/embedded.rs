//! Embedded fallback dataset: the Sun, the eight planets and their major moons.
//!
//! Built in code rather than parsed so the last loader tier cannot fail.

use super::{BodyKind, CelestialBody, Dataset, OrbitalElements, Rgb};

pub const EMBEDDED_UPDATED: &str = "2024-01-01";
pub const EMBEDDED_SOURCE: &str = "Embedded fallback dataset";

fn orbit(a_km: f64, period_days: f64, e: f64, inclination_deg: f64) -> Option<OrbitalElements> {
    Some(OrbitalElements {
        semi_major_axis_km: a_km,
        orbital_period_days: period_days,
        eccentricity: e,
        inclination_deg,
    })
}

fn body(
    name: &str,
    kind: BodyKind,
    color: u32,
    radius_km: f64,
    description: &str,
    orbit: Option<OrbitalElements>,
    moons: Vec<CelestialBody>,
) -> CelestialBody {
    CelestialBody {
        name: name.to_string(),
        kind,
        radius_km,
        color: Rgb::from_u32(color),
        description: description.to_string(),
        orbit,
        moons,
    }
}

fn planet(
    name: &str,
    color: u32,
    radius_km: f64,
    description: &str,
    orbit: Option<OrbitalElements>,
    moons: Vec<CelestialBody>,
) -> CelestialBody {
    body(name, BodyKind::Planet, color, radius_km, description, orbit, moons)
}

fn moon(
    name: &str,
    color: u32,
    radius_km: f64,
    description: &str,
    orbit: Option<OrbitalElements>,
) -> CelestialBody {
    body(name, BodyKind::Moon, color, radius_km, description, orbit, Vec::new())
}

/// The bundled dataset.
pub fn embedded_dataset() -> Dataset {
    Dataset {
        updated: EMBEDDED_UPDATED.to_string(),
        source: EMBEDDED_SOURCE.to_string(),
        bodies: embedded_bodies(),
    }
}

fn embedded_bodies() -> Vec<CelestialBody> {
    vec![
        body(
            "Sun",
            BodyKind::Star,
            0xfdb813,
            696340.0,
            "The G-type main-sequence star at the center of the Solar System, providing the gravitational anchor and energy for all orbiting bodies.",
            None,
            Vec::new(),
        ),
        planet(
            "Mercury",
            0xb0b0b0,
            2439.7,
            "Closest planet to the Sun with a heavily cratered surface and extreme temperature variations.",
            orbit(57909050.0, 87.969, 0.2056, 7.0),
            Vec::new(),
        ),
        planet(
            "Venus",
            0xe0c085,
            6051.8,
            "Second planet from the Sun with a dense CO₂ atmosphere causing a runaway greenhouse effect.",
            orbit(108208000.0, 224.701, 0.0068, 3.4),
            Vec::new(),
        ),
        planet(
            "Earth",
            0x4f93d2,
            6371.0,
            "Our home world, the only known planet to host life, with abundant liquid water and a protective atmosphere.",
            orbit(149598023.0, 365.256, 0.0167, 0.0),
            vec![moon(
                "Moon",
                0xcccccc,
                1737.4,
                "Earth's only natural satellite, responsible for tides and stabilizing Earth's axial tilt.",
                orbit(384400.0, 27.322, 0.0549, 5.1),
            )],
        ),
        planet(
            "Mars",
            0xd14b2f,
            3389.5,
            "The Red Planet with a thin atmosphere, evidence of ancient water, and the tallest volcano in the Solar System.",
            orbit(227939200.0, 686.98, 0.0934, 1.85),
            vec![
                moon(
                    "Phobos",
                    0x88807c,
                    11.27,
                    "Innermost Martian moon, a captured asteroid on a decaying orbit.",
                    orbit(9376.0, 0.3189, 0.0151, 1.1),
                ),
                moon(
                    "Deimos",
                    0xa3978f,
                    6.2,
                    "Outer Martian moon, a small, irregularly shaped body with a smooth regolith layer.",
                    orbit(23463.0, 1.263, 0.0002, 1.8),
                ),
            ],
        ),
        planet(
            "Jupiter",
            0xd9b38c,
            69911.0,
            "The largest planet with powerful storms like the Great Red Spot and a strong magnetic field.",
            orbit(778299000.0, 4332.59, 0.0489, 1.3),
            vec![
                moon(
                    "Io",
                    0xf4d35e,
                    1821.6,
                    "Volcanically active Galilean moon with hundreds of active lava flows.",
                    orbit(421800.0, 1.769, 0.0041, 0.0),
                ),
                moon(
                    "Europa",
                    0xc1d1e3,
                    1560.8,
                    "Ice-covered world suspected to harbor a subsurface ocean.",
                    orbit(671100.0, 3.551, 0.009, 0.5),
                ),
                moon(
                    "Ganymede",
                    0xb8a48b,
                    2634.1,
                    "Largest moon in the Solar System and the only moon with its own magnetic field.",
                    orbit(1070400.0, 7.155, 0.0013, 0.2),
                ),
                moon(
                    "Callisto",
                    0x9d8771,
                    2410.3,
                    "A heavily cratered moon with one of the oldest surfaces in the Solar System.",
                    orbit(1882700.0, 16.689, 0.0074, 0.2),
                ),
            ],
        ),
        planet(
            "Saturn",
            0xf5deb3,
            58232.0,
            "Gas giant famous for its spectacular ring system composed of ice and rocky debris.",
            orbit(1429394000.0, 10759.22, 0.0565, 2.5),
            vec![
                moon(
                    "Titan",
                    0xd4a373,
                    2574.7,
                    "Largest moon of Saturn with a thick nitrogen-rich atmosphere and methane lakes.",
                    orbit(1221870.0, 15.945, 0.0288, 0.3),
                ),
                moon(
                    "Enceladus",
                    0xf1f5f9,
                    252.1,
                    "Icy moon with geysers that hint at a subsurface ocean.",
                    orbit(237948.0, 1.37, 0.0047, 0.0),
                ),
                moon(
                    "Rhea",
                    0xd8d5d0,
                    763.5,
                    "Second-largest moon of Saturn with a heavily cratered icy surface.",
                    orbit(527108.0, 4.518, 0.001, 0.3),
                ),
                moon(
                    "Iapetus",
                    0xc4b39a,
                    734.5,
                    "Moon with a distinctive two-tone coloration and an equatorial ridge.",
                    orbit(3561300.0, 79.322, 0.0286, 7.5),
                ),
            ],
        ),
        planet(
            "Uranus",
            0x77c1d4,
            25362.0,
            "Ice giant tipped on its side, leading to extreme seasonal variations.",
            orbit(2870658000.0, 30688.5, 0.0463, 0.8),
            vec![
                moon(
                    "Titania",
                    0xb7c7cf,
                    788.4,
                    "Largest moon of Uranus with canyon systems and fault valleys.",
                    orbit(436300.0, 8.706, 0.0011, 0.1),
                ),
                moon(
                    "Oberon",
                    0xb3c1c7,
                    761.4,
                    "Outer major moon of Uranus featuring ancient, cratered terrain.",
                    orbit(583500.0, 13.463, 0.0014, 0.1),
                ),
                moon(
                    "Umbriel",
                    0x9daeb6,
                    584.7,
                    "Dark moon rich in carbon compounds with few impact features.",
                    orbit(266000.0, 4.144, 0.0039, 0.1),
                ),
                moon(
                    "Ariel",
                    0xbfcdd4,
                    578.9,
                    "Bright Uranian moon with relatively young tectonically resurfaced plains.",
                    orbit(190900.0, 2.52, 0.0012, 0.1),
                ),
                moon(
                    "Miranda",
                    0xc7d6de,
                    235.8,
                    "Smallest of Uranus's five major moons, famed for its dramatic cliffs and ridges.",
                    orbit(129900.0, 1.414, 0.0013, 4.2),
                ),
            ],
        ),
        planet(
            "Neptune",
            0x4976e6,
            24622.0,
            "Farthest known planet with supersonic winds and dynamic storms in its atmosphere.",
            orbit(4498396000.0, 60182.0, 0.0086, 1.8),
            vec![
                moon(
                    "Triton",
                    0xc5d4e0,
                    1353.4,
                    "Largest moon of Neptune with geysers and a retrograde orbit, likely captured.",
                    orbit(354759.0, 5.877, 0.000016, 156.9),
                ),
                moon(
                    "Proteus",
                    0x9099a1,
                    210.0,
                    "Second-largest Neptunian moon with an irregular, boxy shape.",
                    orbit(117647.0, 1.122, 0.0005, 0.5),
                ),
            ],
        ),
    ]
}
