use freefly_common::FreeflyConfig;
use freefly_input::{InputEvent, InputQueue, KeyBindings};
use freefly_navigator::Navigator;
use freefly_render::{RenderView, Scene};
use freefly_render_wgpu::SceneStyle;
use glam::Mat4;
use std::time::Instant;
use winit::keyboard::{Key, NamedKey};

/// Which of the two demos is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Demo {
    /// Free-fly camera over the static scene.
    Scene,
    /// Time-animated full-screen quad, no camera.
    Pulse,
}

impl Demo {
    pub fn scene(self) -> Scene {
        match self {
            Demo::Scene => Scene::demo(),
            Demo::Pulse => Scene::pulse_quad(),
        }
    }

    pub fn style(self) -> SceneStyle {
        match self {
            Demo::Scene => SceneStyle::Lit,
            Demo::Pulse => SceneStyle::Pulse,
        }
    }
}

/// What the window layer should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Handled,
    ReleaseCapture,
    Ignored,
}

/// Everything the demo owns apart from GPU and window handles.
pub struct AppState {
    pub demo: Demo,
    pub navigator: Navigator,
    pub input: InputQueue,
    pub bindings: KeyBindings,
    pub show_hud: bool,
    pub max_frame_ms: f32,
    started: Instant,
    last_frame: Instant,
}

impl AppState {
    pub fn new(config: &FreeflyConfig, demo: Demo) -> anyhow::Result<Self> {
        let bindings = KeyBindings::with_overrides(&config.bindings)?;
        let now = Instant::now();
        Ok(Self {
            demo,
            navigator: Navigator::new(config.navigator.clone()),
            input: InputQueue::new(),
            bindings,
            show_hud: true,
            max_frame_ms: config.window.max_frame_ms,
            started: now,
            last_frame: now,
        })
    }

    pub fn captured(&self) -> bool {
        self.input.is_captured()
    }

    pub fn set_captured(&mut self, captured: bool) {
        self.input.push(InputEvent::Capture(captured));
    }

    /// Route a logical key. Escape and F1 are handled here; everything else
    /// goes through the bindings and is queued for the next frame.
    pub fn handle_key(&mut self, key: &Key, pressed: bool, repeat: bool) -> KeyOutcome {
        match key {
            Key::Named(NamedKey::Escape) if pressed => return KeyOutcome::ReleaseCapture,
            Key::Named(NamedKey::F1) if pressed && !repeat => {
                self.show_hud = !self.show_hud;
                return KeyOutcome::Handled;
            }
            _ => {}
        }
        if repeat || self.demo != Demo::Scene {
            return KeyOutcome::Ignored;
        }
        let Some(action) = key_name(key).and_then(|name| self.bindings.action_for(&name)) else {
            return KeyOutcome::Ignored;
        };
        if self.input.push(InputEvent::Key { action, pressed }) {
            KeyOutcome::Handled
        } else {
            KeyOutcome::Ignored
        }
    }

    pub fn handle_pointer_motion(&mut self, dx: f64, dy: f64) {
        if self.demo == Demo::Scene {
            self.input.push(InputEvent::PointerMotion {
                dx: dx as f32,
                dy: dy as f32,
            });
        }
    }

    /// Advance one frame using wall-clock time.
    pub fn frame(&mut self, aspect_ratio: f32) -> RenderView {
        let now = Instant::now();
        let elapsed_ms = (now - self.last_frame).as_secs_f32() * 1000.0;
        self.last_frame = now;
        let time_ms = (now - self.started).as_secs_f32() * 1000.0;
        self.advance(elapsed_ms, time_ms, aspect_ratio)
    }

    /// Apply queued input, step the navigator, and build the frame's view.
    pub fn advance(&mut self, elapsed_ms: f32, time_ms: f32, aspect_ratio: f32) -> RenderView {
        let elapsed_ms = elapsed_ms.min(self.max_frame_ms);
        self.navigator.apply_all(self.input.drain());
        let view_proj = match self.demo {
            Demo::Scene => {
                self.navigator.step(elapsed_ms);
                self.navigator.view_projection(aspect_ratio)
            }
            Demo::Pulse => Mat4::IDENTITY,
        };
        RenderView { view_proj, time_ms }
    }

    pub fn draw_hud(&self, ctx: &egui::Context) {
        if !self.show_hud {
            return;
        }

        egui::Window::new("Freefly")
            .default_pos([12.0, 12.0])
            .resizable(false)
            .show(ctx, |ui| {
                if self.demo == Demo::Pulse {
                    ui.label("Pulse demo");
                    ui.small("F1: Toggle HUD");
                    return;
                }

                let p = self.navigator.position();
                let o = self.navigator.orientation();
                let held = self.navigator.input();
                ui.label(format!("Position: ({:.2}, {:.2}, {:.2})", p.x, p.y, p.z));
                ui.label(format!(
                    "Yaw: {:.1}°  Pitch: {:.1}°",
                    o.yaw.to_degrees(),
                    o.pitch.to_degrees()
                ));
                ui.label(format!(
                    "Speed: {:.4} u/ms{}",
                    self.navigator.speed(),
                    if held.fast { " (fast)" } else { "" }
                ));
                ui.label(if self.captured() {
                    "Mouse captured (Esc to release)"
                } else {
                    "Click to capture mouse"
                });

                ui.separator();
                for action in freefly_input::Action::ALL {
                    let keys = self.bindings.keys_for(action).join(", ");
                    let marker = if held.is_held(action) { "●" } else { "○" };
                    ui.small(format!("{marker} {action}: {keys}"));
                }
                ui.separator();
                ui.small("F1: Toggle HUD");
            });
    }
}

/// Name used for binding lookup: the typed character, or a lowercase
/// name for named keys (`space`, `shift`, ...).
pub fn key_name(key: &Key) -> Option<String> {
    match key {
        Key::Character(s) => Some(s.to_string()),
        Key::Named(NamedKey::Space) => Some("space".into()),
        Key::Named(named) => Some(format!("{named:?}").to_lowercase()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use freefly_input::Action;
    use glam::Vec3;

    fn state(demo: Demo) -> AppState {
        AppState::new(&FreeflyConfig::default(), demo).unwrap()
    }

    fn char_key(c: &str) -> Key {
        Key::Character(c.into())
    }

    #[test]
    fn key_names() {
        assert_eq!(key_name(&char_key("W")).as_deref(), Some("W"));
        assert_eq!(key_name(&Key::Named(NamedKey::Space)).as_deref(), Some("space"));
        assert_eq!(key_name(&Key::Named(NamedKey::Shift)).as_deref(), Some("shift"));
    }

    #[test]
    fn keys_ignored_until_captured() {
        let mut s = state(Demo::Scene);
        assert_eq!(s.handle_key(&char_key("w"), true, false), KeyOutcome::Ignored);
        s.set_captured(true);
        assert_eq!(s.handle_key(&char_key("w"), true, false), KeyOutcome::Handled);
        assert_eq!(s.handle_key(&char_key("q"), true, false), KeyOutcome::Ignored);
    }

    #[test]
    fn escape_requests_release() {
        let mut s = state(Demo::Scene);
        assert_eq!(
            s.handle_key(&Key::Named(NamedKey::Escape), true, false),
            KeyOutcome::ReleaseCapture
        );
    }

    #[test]
    fn f1_toggles_hud() {
        let mut s = state(Demo::Scene);
        assert!(s.show_hud);
        s.handle_key(&Key::Named(NamedKey::F1), true, false);
        assert!(!s.show_hud);
    }

    #[test]
    fn input_applies_before_step() {
        let mut s = state(Demo::Scene);
        let start = s.navigator.position();
        s.set_captured(true);
        s.handle_key(&Key::Named(NamedKey::Space), true, false);

        s.advance(100.0, 100.0, 1.0);
        let moved = s.navigator.position() - start;
        assert!(moved.abs_diff_eq(Vec3::new(0.0, 0.15, 0.0), 1e-5), "{moved}");
    }

    #[test]
    fn elapsed_is_capped() {
        let mut s = state(Demo::Scene);
        let start = s.navigator.position();
        s.set_captured(true);
        s.handle_key(&char_key("d"), true, false);

        s.advance(10_000.0, 0.0, 1.0);
        let moved = (s.navigator.position() - start).length();
        assert!((moved - 100.0 * 0.0015).abs() < 1e-5);
    }

    #[test]
    fn losing_capture_releases_keys() {
        let mut s = state(Demo::Scene);
        s.set_captured(true);
        s.handle_key(&char_key("w"), true, false);
        s.advance(1.0, 1.0, 1.0);
        assert!(s.navigator.input().is_held(Action::MoveForward));

        s.set_captured(false);
        s.advance(1.0, 2.0, 1.0);
        assert!(!s.navigator.input().any_movement());
    }

    #[test]
    fn pulse_demo_ignores_navigation() {
        let mut s = state(Demo::Pulse);
        s.set_captured(true);
        assert_eq!(s.handle_key(&char_key("w"), true, false), KeyOutcome::Ignored);
        s.handle_pointer_motion(50.0, 0.0);
        let view = s.advance(16.0, 500.0, 1.0);
        assert_eq!(view.view_proj, Mat4::IDENTITY);
        assert_eq!(view.time_ms, 500.0);
        assert_eq!(s.navigator.orientation().yaw, 0.0);
    }
}
