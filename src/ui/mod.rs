//! Generic egui helpers shared by the viewport and the overlay.

use egui::{Color32, Grid, RichText, Ui};

use solar_explorer::info::InfoPanel;
use solar_explorer::render::scene::BACKGROUND as SCENE_BACKGROUND;

// ─── Colours ─────────────────────────────────────────────────────────────────

pub const BACKGROUND: Color32 = Color32::from_rgb(
    SCENE_BACKGROUND.r,
    SCENE_BACKGROUND.g,
    SCENE_BACKGROUND.b,
);

const ACCENT: Color32 = Color32::from_rgb(0x9e, 0xc5, 0xff);
const MUTED: Color32 = Color32::from_rgb(0xa0, 0xa8, 0xb8);

/// Linear [0, 1] colour plus opacity to an egui colour.
pub fn color32(rgb: [f32; 3], alpha: f32) -> Color32 {
    let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    Color32::from_rgba_unmultiplied(
        channel(rgb[0]),
        channel(rgb[1]),
        channel(rgb[2]),
        channel(alpha),
    )
}

// ─── Info overlay ────────────────────────────────────────────────────────────

/// Title, type line, detail table and description.
pub fn draw_info_panel(ui: &mut Ui, panel: &InfoPanel) {
    ui.set_max_width(320.0);

    ui.label(RichText::new(&panel.title).size(20.0).strong());
    if !panel.subtitle.is_empty() {
        ui.label(RichText::new(&panel.subtitle).color(ACCENT));
    }

    if !panel.rows.is_empty() {
        ui.add_space(6.0);
        Grid::new("info_rows")
            .num_columns(2)
            .spacing([12.0, 4.0])
            .show(ui, |ui| {
                for row in &panel.rows {
                    ui.label(RichText::new(row.label).color(MUTED));
                    ui.label(row.value.as_str());
                    ui.end_row();
                }
            });
    }

    if !panel.description.is_empty() {
        ui.add_space(6.0);
        ui.label(panel.description.as_str());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_colour_conversion() {
        assert_eq!(color32([1.0, 0.0, 0.5], 1.0), Color32::from_rgb(255, 0, 128));
        assert_eq!(color32([2.0, -1.0, 0.0], 1.0), Color32::from_rgb(255, 0, 0));
    }
}
