//! 3D viewport panel with OpenGL rendering

mod camera;
mod gl_renderer;
mod mesh;
mod overlays;
mod picking;

use std::sync::{Arc, Mutex};

use egui::Ui;
use glam::{Mat4, Vec2};

use crate::app::GameState;
use crate::settings::AppSettings;
use camera::OrbitCamera;
use gl_renderer::{GlRenderer, RenderParams};
use mesh::{cubie_mesh, MeshData};
use picking::{pick_cubie, CUBIE_SIZE_RATIO};

/// 3D viewport panel: orbit camera, drag gestures, GL rendering.
pub struct CubeViewport {
    camera: OrbitCamera,
    gl_renderer: Option<Arc<Mutex<GlRenderer>>>,
    /// Bumped when the cube is rebuilt so the renderer re-uploads meshes.
    generation: u64,
}

impl CubeViewport {
    pub fn new() -> Self {
        Self {
            camera: OrbitCamera::default(),
            gl_renderer: None,
            generation: 1,
        }
    }

    /// Initialize GL renderer (must be called with a GL context)
    pub fn init_gl(&mut self, gl: &glow::Context) {
        let renderer = GlRenderer::new(gl);
        self.gl_renderer = Some(Arc::new(Mutex::new(renderer)));
    }

    pub fn reset_camera(&mut self) {
        self.camera = OrbitCamera::default();
    }

    pub fn mark_rebuilt(&mut self) {
        self.generation += 1;
    }

    /// Input handling plus rendering for one frame. `interactive` is false
    /// while paused: gestures are dropped and the camera holds still, but the
    /// cube still renders.
    pub fn show(&mut self, ui: &mut Ui, game: &mut GameState, settings: &AppSettings, interactive: bool) {
        let (rect, response) =
            ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

        if interactive {
            self.handle_camera(ui, &response, settings);
            self.handle_gesture(ui, &response, rect, game);
        } else if game.gesture.is_tracking() {
            game.gesture.cancel();
        }

        if !ui.is_rect_visible(rect) {
            return;
        }

        self.render_gl(ui, rect, game, settings);
        overlays::draw_overlays(&ui.painter_at(rect), rect, &self.camera, game);
    }

    fn handle_camera(&mut self, ui: &Ui, response: &egui::Response, settings: &AppSettings) {
        // Right-drag orbits around the cube.
        if response.dragged_by(egui::PointerButton::Secondary) {
            let delta = response.drag_delta();
            let sens = settings.camera.orbit_sens;
            self.camera.orbit(delta.x * sens, delta.y * sens);
        }

        // Scroll zooms, one distance step per wheel notch.
        let scroll = ui.input(|i| i.smooth_scroll_delta.y);
        if response.hovered() && scroll.abs() > 0.1 {
            self.camera.zoom(scroll * 0.02 * settings.camera.zoom_step);
        }
    }

    fn handle_gesture(
        &mut self,
        ui: &Ui,
        response: &egui::Response,
        rect: egui::Rect,
        game: &mut GameState,
    ) {
        // Press: raycast the cube surface and start tracking, engine willing.
        if ui.input(|i| i.pointer.primary_pressed())
            && response.hovered()
            && game.sim.engine.is_idle()
        {
            if let Some(pos) = ui.input(|i| i.pointer.interact_pos()) {
                let ray = self.camera.screen_ray(pos, rect);
                if let Some((_, hit)) = pick_cubie(&ray, &game.sim.cube, &game.sim.engine) {
                    game.gesture.press(Vec2::new(pos.x, pos.y), hit);
                }
            }
        }

        // Release: resolve the swipe; drop it if the engine got busy again.
        if ui.input(|i| i.pointer.primary_released()) && game.gesture.is_tracking() {
            let Some(pos) = ui.input(|i| i.pointer.latest_pos()) else {
                game.gesture.cancel();
                return;
            };
            let camera = &self.camera;
            let mv = game.gesture.release(
                Vec2::new(pos.x, pos.y),
                game.sim.config.drag_threshold,
                game.sim.cube.spacing(),
                |base, dir| camera.project_dir(base, dir, rect),
            );
            if let Some(mv) = mv {
                if game.sim.engine.is_idle() {
                    game.sim.try_turn(mv);
                } else {
                    tracing::debug!(?mv, "gesture dropped, engine busy");
                }
            }
        }
    }

    fn render_gl(&self, ui: &mut Ui, rect: egui::Rect, game: &GameState, settings: &AppSettings) {
        let Some(gl_renderer) = &self.gl_renderer else {
            return;
        };

        let size = CUBIE_SIZE_RATIO * game.sim.cube.spacing();
        let meshes: Vec<MeshData> = game
            .sim
            .cube
            .cubies()
            .map(|(_, c)| cubie_mesh(c.home, size))
            .collect();
        let models: Vec<Mat4> = game
            .sim
            .cube
            .ids()
            .map(|id| {
                let (pos, orient) = game.sim.engine.world_pose(&game.sim.cube, id);
                Mat4::from_rotation_translation(orient, pos)
            })
            .collect();

        let renderer_clone = gl_renderer.clone();
        let generation = self.generation;
        let camera = self.camera.clone();
        let bg_color = settings.viewport.background_color;

        let callback = egui::PaintCallback {
            rect,
            callback: Arc::new(egui_glow::CallbackFn::new(move |info, painter| {
                let gl = painter.gl();

                let clip = info.clip_rect_in_pixels();
                let viewport = [
                    clip.left_px as f32,
                    clip.from_bottom_px as f32,
                    clip.width_px as f32,
                    clip.height_px as f32,
                ];
                let aspect = viewport[2] / viewport[3];
                let vp = camera.view_projection(aspect);

                if let Ok(mut r) = renderer_clone.lock() {
                    r.sync_cubies(gl, &meshes, generation);
                    let params = RenderParams { viewport, bg_color };
                    r.paint(gl, &vp, &models, &params);
                }
            })),
        };
        ui.painter().add(callback);
    }
}
