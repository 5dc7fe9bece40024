//! Main viewport for `ExplorerApp`.
//!
//! Handles orbit-camera input, runs the session frame and paints the scene
//! with the egui painter: starfield, then orbit loops, then body discs from
//! far to near.

use eframe::egui;

use solar_explorer::math::{self, Vec3};
use solar_explorer::picking::Pointer;
use solar_explorer::render::scene::Scene;
use solar_explorer::render::OrbitCamera;
use solar_explorer::session::Session;

use super::{ExplorerApp, Phase};
use crate::ui;

/// Scroll distance, in points, treated as one wheel notch
const SCROLL_NOTCH: f32 = 50.0;

impl ExplorerApp {
    /// Allocate the full central area, apply input and paint one frame.
    pub fn draw_viewport(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        let response = ui.allocate_response(
            ui.available_size(),
            egui::Sense::click_and_drag().union(egui::Sense::hover()),
        );
        let rect = response.rect;
        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, 0.0, ui::BACKGROUND);

        let Phase::Running(session) = &mut self.phase else {
            return;
        };

        session.resize(rect.width(), rect.height());

        // Drag to orbit around the star
        if response.dragged() {
            let delta = response.drag_delta();
            session.camera.rotate(delta.x, delta.y, rect.height());
            self.dragging = true;
        } else {
            self.dragging = false;
        }

        // Scroll to dolly in/out
        if response.hovered() {
            let scroll = ui.input(|i| i.raw_scroll_delta.y);
            if scroll.abs() > 0.1 {
                session.camera.zoom(scroll / SCROLL_NOTCH);
            }
        }

        match response.hover_pos() {
            Some(pos) => session.pointer_moved(Pointer::from_screen(
                [pos.x, pos.y],
                [rect.min.x, rect.min.y],
                [rect.width(), rect.height()],
            )),
            None => {
                if session.pointer() != Pointer::Outside {
                    session.pointer_left();
                }
            }
        }

        session.frame();
        paint_session(&painter, rect, session);

        if session.hovered().is_some() {
            ctx.set_cursor_icon(egui::CursorIcon::PointingHand);
        } else if self.dragging {
            ctx.set_cursor_icon(egui::CursorIcon::Grabbing);
        }

        // Continuous animation
        ctx.request_repaint();
    }
}

fn paint_session(painter: &egui::Painter, rect: egui::Rect, session: &Session) {
    let scene = &session.scene;
    let camera = &session.camera;
    let eye = camera.eye();

    paint_starfield(painter, rect, scene, camera, eye);
    paint_orbits(painter, rect, scene, camera, eye);
    paint_bodies(painter, rect, scene, camera, eye);
}

fn screen_pos(p: &solar_explorer::render::Projected, rect: egui::Rect) -> egui::Pos2 {
    let [x, y] = p.to_screen([rect.min.x, rect.min.y], [rect.width(), rect.height()]);
    egui::pos2(x, y)
}

fn paint_starfield(
    painter: &egui::Painter,
    rect: egui::Rect,
    scene: &Scene,
    camera: &OrbitCamera,
    eye: Vec3,
) {
    let radius = scene.starfield.size * 0.5;
    for star in &scene.starfield.points {
        let Some(p) = camera.project(star.position) else {
            continue;
        };
        let pos = screen_pos(&p, rect);
        if !rect.contains(pos) {
            continue;
        }
        let distance = math::length(math::sub(star.position, eye));
        let color = scene.fog.apply(star.color, distance);
        painter.circle_filled(pos, radius, ui::color32(color, scene.starfield.opacity));
    }
}

fn paint_orbits(
    painter: &egui::Painter,
    rect: egui::Rect,
    scene: &Scene,
    camera: &OrbitCamera,
    eye: Vec3,
) {
    for inst in scene.tree.instances() {
        let Some(line) = &inst.node.orbit_line else {
            continue;
        };
        let Some(points) = scene.orbit_world_points(inst.id) else {
            continue;
        };
        let center = scene
            .tree
            .parent(inst.id)
            .map(|p| p.node.world_position)
            .unwrap_or(math::ORIGIN);
        let distance = math::length(math::sub(center, eye));
        let color = scene.fog.apply(line.color.to_unit(), distance);
        let stroke = egui::Stroke::new(1.0, ui::color32(color, line.opacity));

        // Split the loop wherever a point falls outside the view range
        let mut run: Vec<egui::Pos2> = Vec::with_capacity(points.len());
        for point in points {
            match camera.project(point) {
                Some(p) => run.push(screen_pos(&p, rect)),
                None => {
                    if run.len() > 1 {
                        painter.add(egui::Shape::line(std::mem::take(&mut run), stroke));
                    } else {
                        run.clear();
                    }
                }
            }
        }
        if run.len() > 1 {
            painter.add(egui::Shape::line(run, stroke));
        }
    }
}

fn paint_bodies(
    painter: &egui::Painter,
    rect: egui::Rect,
    scene: &Scene,
    camera: &OrbitCamera,
    eye: Vec3,
) {
    let mut discs = Vec::with_capacity(scene.tree.len());
    for inst in scene.tree.instances() {
        let center = inst.node.world_position;
        let radius = inst.node.sphere.radius;
        let distance = math::length(math::sub(center, eye));
        // Spheres are only drawn from outside
        if distance <= radius {
            continue;
        }
        let Some(p) = camera.project(center) else {
            continue;
        };
        let pixels = camera.projected_radius(radius, p.depth, rect.height()).max(1.0);
        let color = scene.fog.apply(scene.shade(inst, eye), distance);
        discs.push((p.depth, screen_pos(&p, rect), pixels, ui::color32(color, 1.0)));
    }

    discs.sort_by(|a, b| b.0.total_cmp(&a.0));
    for (_, pos, pixels, color) in discs {
        painter.circle_filled(pos, pixels, color);
    }
}
