//! Menu screens and the settings window.

use eframe::egui;
use rubik_core::config::{MAX_ROTATION_SPEED, MIN_ROTATION_SPEED};

use super::buttons::{menu_button, HoverScale};
use crate::settings::AppSettings;

pub enum MenuAction {
    None,
    Play,
    Settings,
    Quit,
}

pub enum PauseAction {
    None,
    Resume,
    Restart,
    MainMenu,
    Quit,
}

/// The title screen.
pub fn main_menu(
    ctx: &egui::Context,
    hover: &mut [HoverScale; 4],
    settings: &AppSettings,
    dt: f32,
) -> MenuAction {
    let mut action = MenuAction::None;
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(ui.available_height() * 0.22);
            ui.label(
                egui::RichText::new("RUBIK")
                    .size(56.0)
                    .strong()
                    .color(egui::Color32::from_rgb(230, 230, 235)),
            );
            ui.label(egui::RichText::new("cube simulator").weak());
            ui.add_space(40.0);

            if menu_button(ui, &mut hover[0], &settings.hover, dt, "Play") {
                action = MenuAction::Play;
            }
            if menu_button(ui, &mut hover[1], &settings.hover, dt, "Settings") {
                action = MenuAction::Settings;
            }
            if menu_button(ui, &mut hover[2], &settings.hover, dt, "Quit") {
                action = MenuAction::Quit;
            }
        });
    });
    action
}

/// The in-game pause overlay.
pub fn pause_menu(
    ctx: &egui::Context,
    hover: &mut [HoverScale; 4],
    settings: &AppSettings,
    dt: f32,
) -> PauseAction {
    let mut action = PauseAction::None;
    egui::Window::new("pause_menu")
        .title_bar(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(8.0);
                ui.heading("Paused");
                ui.add_space(12.0);

                if menu_button(ui, &mut hover[0], &settings.hover, dt, "Resume") {
                    action = PauseAction::Resume;
                }
                if menu_button(ui, &mut hover[1], &settings.hover, dt, "Restart") {
                    action = PauseAction::Restart;
                }
                if menu_button(ui, &mut hover[2], &settings.hover, dt, "Main menu") {
                    action = PauseAction::MainMenu;
                }
                if menu_button(ui, &mut hover[3], &settings.hover, dt, "Quit") {
                    action = PauseAction::Quit;
                }
                ui.add_space(8.0);
            });
        });
    action
}

/// The settings window. Returns true when any value changed this frame.
pub fn settings_window(
    ctx: &egui::Context,
    settings: &mut AppSettings,
    open: &mut bool,
) -> bool {
    let mut changed = false;
    egui::Window::new("Settings")
        .open(open)
        .resizable(false)
        .show(ctx, |ui| {
            ui.heading("Cube");
            changed |= ui
                .add(
                    egui::Slider::new(
                        &mut settings.sim.rotation_speed,
                        MIN_ROTATION_SPEED..=MAX_ROTATION_SPEED,
                    )
                    .text("Rotation speed (°/s)"),
                )
                .changed();
            changed |= ui
                .add(
                    egui::Slider::new(&mut settings.sim.shuffle_moves, 1..=50)
                        .text("Shuffle moves"),
                )
                .changed();

            ui.separator();
            ui.heading("Camera");
            changed |= ui
                .add(
                    egui::Slider::new(&mut settings.camera.orbit_sens, 0.1..=1.0)
                        .text("Orbit sensitivity"),
                )
                .changed();

            ui.separator();
            ui.heading("Interface");
            changed |= ui
                .add(
                    egui::Slider::new(&mut settings.hover.target_scale, 1.0..=1.5)
                        .text("Button hover scale"),
                )
                .changed();
            changed |= ui
                .add(
                    egui::Slider::new(&mut settings.hover.duration, 0.0..=0.5)
                        .text("Hover animation (s)"),
                )
                .changed();
            changed |= ui
                .add(egui::Slider::new(&mut settings.ui.font_size, 10.0..=24.0).text("Font size"))
                .changed();

            ui.horizontal(|ui| {
                ui.label("Background");
                changed |= ui
                    .color_edit_button_srgb(&mut settings.viewport.background_color)
                    .changed();
            });
        });
    changed
}
