//! Main application module

mod buttons;
mod menus;
mod styles;

use eframe::egui;
use rubik_core::{DragGesture, Simulation};

use crate::settings::AppSettings;
use crate::viewport::CubeViewport;
use buttons::HoverScale;
use menus::{MenuAction, PauseAction};

/// Which screen the app is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    MainMenu,
    Playing,
    Paused,
}

/// Live game state: the simulation plus the in-progress drag.
pub struct GameState {
    pub sim: Simulation,
    pub gesture: DragGesture,
}

/// Main application
pub struct CubeApp {
    settings: AppSettings,
    screen: Screen,
    game: GameState,
    viewport: CubeViewport,
    hover: [HoverScale; 4],
    show_settings_window: bool,
    /// Last applied font size (to detect changes)
    last_font_size: f32,
}

impl CubeApp {
    pub fn new(cc: &eframe::CreationContext<'_>, shuffle_override: Option<u32>) -> Self {
        let mut settings = AppSettings::load();
        if let Some(n) = shuffle_override {
            settings.sim.shuffle_moves = n;
        }

        styles::configure_styles(&cc.egui_ctx, settings.ui.font_size);

        let mut viewport = CubeViewport::new();
        if let Some(gl) = cc.gl.as_ref() {
            viewport.init_gl(gl);
        }

        let last_font_size = settings.ui.font_size;
        let game = GameState {
            sim: Simulation::new(settings.sim.clone()),
            gesture: DragGesture::default(),
        };

        Self {
            settings,
            screen: Screen::MainMenu,
            game,
            viewport,
            hover: Default::default(),
            show_settings_window: false,
            last_font_size,
        }
    }

    /// Rebuild a solved cube, queue the scramble, and enter play.
    fn start_game(&mut self) {
        self.game.sim.config = self.settings.sim.clone();
        self.game.sim.restart();
        self.game.gesture.cancel();
        self.viewport.mark_rebuilt();
        self.viewport.reset_camera();
        self.screen = Screen::Playing;
    }

    fn handle_keyboard(&mut self, ctx: &egui::Context) {
        // Don't handle shortcuts when a text field is focused
        if ctx.memory(|m| m.focused().is_some()) {
            return;
        }
        let (escape, restart) =
            ctx.input(|i| (i.key_pressed(egui::Key::Escape), i.key_pressed(egui::Key::R)));

        if escape {
            match self.screen {
                Screen::Playing => self.screen = Screen::Paused,
                Screen::Paused => self.screen = Screen::Playing,
                Screen::MainMenu => {}
            }
        }
        if restart && self.screen == Screen::Playing {
            self.start_game();
        }
    }

    fn show_main_menu(&mut self, ctx: &egui::Context, dt: f32) {
        match menus::main_menu(ctx, &mut self.hover, &self.settings, dt) {
            MenuAction::Play => self.start_game(),
            MenuAction::Settings => self.show_settings_window = true,
            MenuAction::Quit => ctx.send_viewport_cmd(egui::ViewportCommand::Close),
            MenuAction::None => {}
        }
    }

    fn show_game(&mut self, ctx: &egui::Context, interactive: bool) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            self.status_bar(ui);
        });
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                self.viewport
                    .show(ui, &mut self.game, &self.settings, interactive);
            });
    }

    fn status_bar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.weak(format!("Turns: {}", self.game.sim.engine.turns_completed()));
            ui.separator();

            if !self.game.sim.shuffle.is_done() {
                ui.colored_label(
                    egui::Color32::from_rgb(255, 200, 100),
                    format!("Scrambling ({} left)", self.game.sim.shuffle.remaining()),
                );
            } else if self.game.sim.engine.is_idle() {
                ui.weak("Ready");
            } else {
                ui.weak("Turning…");
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.weak("rubik v0.1");
                ui.separator();
                if ui.small_button("Settings").clicked() {
                    self.show_settings_window = !self.show_settings_window;
                }
            });
        });
    }
}

impl eframe::App for CubeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Clamped so a long hitch cannot fast-forward the animation.
        let dt = ctx.input(|i| i.stable_dt).min(0.1);

        // Apply font size if changed
        if self.settings.ui.font_size != self.last_font_size {
            styles::apply_font_size(ctx, self.settings.ui.font_size);
            self.last_font_size = self.settings.ui.font_size;
        }

        self.handle_keyboard(ctx);

        match self.screen {
            Screen::MainMenu => self.show_main_menu(ctx, dt),
            Screen::Playing => {
                self.game.sim.step(dt);
                self.show_game(ctx, true);
            }
            Screen::Paused => {
                // Simulation time is frozen; the scene still renders.
                self.show_game(ctx, false);
                match menus::pause_menu(ctx, &mut self.hover, &self.settings, dt) {
                    PauseAction::Resume => self.screen = Screen::Playing,
                    PauseAction::Restart => self.start_game(),
                    PauseAction::MainMenu => self.screen = Screen::MainMenu,
                    PauseAction::Quit => ctx.send_viewport_cmd(egui::ViewportCommand::Close),
                    PauseAction::None => {}
                }
            }
        }

        if self.show_settings_window {
            let mut open = self.show_settings_window;
            if menus::settings_window(ctx, &mut self.settings, &mut open) {
                // Live-apply the clamped speed and persist.
                self.settings
                    .sim
                    .set_rotation_speed(self.settings.sim.rotation_speed);
                self.game.sim.config = self.settings.sim.clone();
                self.settings.save();
            }
            self.show_settings_window = open;
        }

        // The turn animation and button tweens run every frame.
        ctx.request_repaint();
    }
}
