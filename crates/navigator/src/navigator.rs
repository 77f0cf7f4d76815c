use freefly_common::{NavigatorSettings, Orientation};
use freefly_input::{Action, InputEvent, InputState};
use glam::{Mat3, Mat4, Quat, Vec3};

/// Free-fly camera driven by held keys and pointer motion.
///
/// Horizontal movement follows the yaw angle; vertical movement (ascend and
/// descend) is always along world Y. Pitch only affects where the camera
/// looks, never the direction it moves.
#[derive(Debug, Clone)]
pub struct Navigator {
    position: Vec3,
    orientation: Orientation,
    input: InputState,
    settings: NavigatorSettings,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(NavigatorSettings::default())
    }
}

impl Navigator {
    /// Create a navigator at the configured start pose with no keys held.
    pub fn new(settings: NavigatorSettings) -> Self {
        let mut orientation = settings.start_orientation;
        if settings.clamp_pitch {
            orientation.clamp_pitch();
        }
        Self {
            position: settings.start_position,
            orientation,
            input: InputState::default(),
            settings,
        }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn settings(&self) -> &NavigatorSettings {
        &self.settings
    }

    /// Current movement speed in world units per millisecond.
    pub fn speed(&self) -> f32 {
        if self.input.fast {
            self.settings.fast_speed
        } else {
            self.settings.base_speed
        }
    }

    /// World-space direction the camera looks along.
    pub fn forward(&self) -> Vec3 {
        self.rotation() * Vec3::NEG_Z
    }

    /// Turn the camera by one pointer-motion sample, in pixels.
    ///
    /// Moving the pointer right turns right (yaw decreases); moving it down
    /// looks down (pitch decreases).
    pub fn update_orientation(&mut self, delta_x: f32, delta_y: f32) {
        let s = self.settings.sensitivity;
        self.orientation.yaw += -delta_x * s;
        self.orientation.pitch += -delta_y * s;
        if self.settings.clamp_pitch {
            self.orientation.clamp_pitch();
        }
    }

    /// Record a bound key going down or up.
    pub fn update_movement(&mut self, action: Action, pressed: bool) {
        if self.input.is_held(action) != pressed {
            tracing::trace!(%action, pressed, "movement input");
        }
        self.input.set(action, pressed);
    }

    /// Release every held key. Used when pointer capture is lost, since the
    /// matching key-up events will never be delivered.
    pub fn release_all(&mut self) {
        if self.input != InputState::default() {
            tracing::debug!("releasing held movement input");
        }
        self.input.clear();
    }

    /// Apply one queued input event.
    pub fn apply(&mut self, event: InputEvent) {
        match event {
            InputEvent::Key { action, pressed } => self.update_movement(action, pressed),
            InputEvent::PointerMotion { dx, dy } => self.update_orientation(dx, dy),
            InputEvent::Capture(false) => self.release_all(),
            InputEvent::Capture(true) => {}
        }
    }

    /// Apply a frame's worth of events, in order.
    pub fn apply_all(&mut self, events: impl IntoIterator<Item = InputEvent>) {
        for event in events {
            self.apply(event);
        }
    }

    /// Integrate movement over `elapsed_ms` milliseconds and return the
    /// displacement that was applied.
    ///
    /// The direction from the held keys is normalized, so diagonal movement is
    /// no faster than straight movement. With no keys held (or only opposing
    /// keys) the displacement is zero. Negative or NaN elapsed times count as zero.
    pub fn step(&mut self, elapsed_ms: f32) -> Vec3 {
        let elapsed_ms = elapsed_ms.max(0.0);

        let mut direction = Mat3::from_rotation_y(self.orientation.yaw) * self.input.planar_axis();
        direction.y += self.input.vertical_axis();

        let delta = direction.normalize_or_zero() * (elapsed_ms * self.speed());
        self.position += delta;
        delta
    }

    /// World-to-camera transform for the current pose.
    pub fn view_matrix(&self) -> Mat4 {
        let camera_to_world = Mat4::IDENTITY
            * Mat4::from_translation(self.position)
            * Mat4::from_rotation_y(self.orientation.yaw)
            * Mat4::from_rotation_x(self.orientation.pitch);
        camera_to_world.inverse()
    }

    /// Perspective projection with an infinite far plane (depth range 0..1).
    pub fn projection_matrix(&self, aspect_ratio: f32) -> Mat4 {
        let aspect = if aspect_ratio.is_finite() {
            aspect_ratio.max(0.0001)
        } else {
            1.0
        };
        Mat4::perspective_infinite_rh(self.settings.fov_y(), aspect, self.settings.near)
    }

    /// Projection × view, recomputed from the current state on every call.
    pub fn view_projection(&self, aspect_ratio: f32) -> Mat4 {
        self.projection_matrix(aspect_ratio) * self.view_matrix()
    }

    fn rotation(&self) -> Quat {
        Quat::from_rotation_y(self.orientation.yaw) * Quat::from_rotation_x(self.orientation.pitch)
    }
}
