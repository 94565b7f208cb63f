//! Menu buttons with the hover grow/shrink animation.

use crate::settings::HoverSettings;

/// Scale animation for one button: grows toward the target while hovered,
/// shrinks back afterwards. Advanced by raw frame time, so it keeps
/// animating while the simulation is paused.
#[derive(Debug, Clone, Copy)]
pub struct HoverScale {
    current: f32,
}

impl Default for HoverScale {
    fn default() -> Self {
        Self { current: 1.0 }
    }
}

impl HoverScale {
    /// Current scale factor.
    pub fn scale(&self) -> f32 {
        self.current
    }

    /// Advance toward the hovered or rest scale. `duration` is the full
    /// rest-to-target time; motion is linear, and the final step clamps onto
    /// the target.
    pub fn tick(&mut self, hovered: bool, settings: &HoverSettings, dt: f32) {
        let target = if hovered { settings.target_scale } else { 1.0 };
        if settings.duration <= 0.0 {
            self.current = target;
            return;
        }
        let step = (settings.target_scale - 1.0).abs() / settings.duration * dt;
        if (target - self.current).abs() <= step {
            self.current = target;
        } else {
            self.current += step.copysign(target - self.current);
        }
    }
}

/// A large menu button that grows while hovered. Returns true when clicked.
pub fn menu_button(
    ui: &mut egui::Ui,
    anim: &mut HoverScale,
    settings: &HoverSettings,
    dt: f32,
    label: &str,
) -> bool {
    let text = egui::RichText::new(label).size(20.0 * anim.scale());
    let response = ui.add_sized(egui::vec2(240.0, 48.0), egui::Button::new(text));
    anim.tick(response.hovered(), settings, dt);
    response.clicked()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> HoverSettings {
        HoverSettings {
            target_scale: 1.1,
            duration: 0.15,
        }
    }

    #[test]
    fn test_reaches_target_within_duration() {
        let s = settings();
        let mut anim = HoverScale::default();
        for _ in 0..20 {
            anim.tick(true, &s, 0.016);
        }
        assert_eq!(anim.scale(), s.target_scale);
    }

    #[test]
    fn test_returns_to_rest_after_exit() {
        let s = settings();
        let mut anim = HoverScale::default();
        for _ in 0..20 {
            anim.tick(true, &s, 0.016);
        }
        for _ in 0..20 {
            anim.tick(false, &s, 0.016);
        }
        assert_eq!(anim.scale(), 1.0);
    }

    #[test]
    fn test_never_overshoots() {
        let s = settings();
        let mut anim = HoverScale::default();
        for _ in 0..100 {
            anim.tick(true, &s, 0.051); // coarse frames
            assert!(anim.scale() <= s.target_scale);
            assert!(anim.scale() >= 1.0);
        }
    }

    #[test]
    fn test_zero_duration_snaps() {
        let s = HoverSettings {
            target_scale: 1.2,
            duration: 0.0,
        };
        let mut anim = HoverScale::default();
        anim.tick(true, &s, 0.016);
        assert_eq!(anim.scale(), 1.2);
        anim.tick(false, &s, 0.016);
        assert_eq!(anim.scale(), 1.0);
    }

    #[test]
    fn test_reverses_mid_flight() {
        let s = settings();
        let mut anim = HoverScale::default();
        anim.tick(true, &s, 0.05);
        let partway = anim.scale();
        assert!(partway > 1.0 && partway < s.target_scale);
        anim.tick(false, &s, 0.016);
        assert!(anim.scale() < partway);
    }
}
