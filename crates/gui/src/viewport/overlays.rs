use super::camera::OrbitCamera;
use crate::app::GameState;

/// Text overlays drawn on top of the GL viewport.
pub fn draw_overlays(
    painter: &egui::Painter,
    rect: egui::Rect,
    camera: &OrbitCamera,
    game: &GameState,
) {
    // Navigation hint
    let hint = if game.sim.shuffle.is_done() {
        "Drag a face to turn · Right-drag to orbit · Scroll to zoom"
    } else {
        "Scrambling…"
    };
    painter.text(
        egui::pos2(rect.center().x, rect.bottom() - 16.0),
        egui::Align2::CENTER_BOTTOM,
        hint,
        egui::FontId::proportional(12.0),
        egui::Color32::from_rgb(130, 130, 140),
    );

    // Camera info overlay
    let overlay_rect = egui::Rect::from_min_size(
        egui::pos2(rect.right() - 140.0, rect.top() + 4.0),
        egui::vec2(136.0, 44.0),
    );
    painter.rect_filled(
        overlay_rect,
        4.0,
        egui::Color32::from_rgba_premultiplied(0, 0, 0, 140),
    );
    painter.text(
        overlay_rect.min + egui::vec2(6.0, 4.0),
        egui::Align2::LEFT_TOP,
        format!(
            "Dist: {:.1}\nYaw: {:.0}  Pitch: {:.0}",
            camera.distance, camera.yaw, camera.pitch,
        ),
        egui::FontId::monospace(10.0),
        egui::Color32::from_rgb(160, 160, 170),
    );
}
