use crate::action::Action;
use glam::Vec3;

/// Held navigation keys.
///
/// Each flag is set on press and cleared on release; there is no repeat-rate
/// dependency and opposite flags may be held together.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct InputState {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    pub down: bool,
    pub up: bool,
    pub fast: bool,
}

impl InputState {
    pub fn set(&mut self, action: Action, pressed: bool) {
        let flag = match action {
            Action::MoveForward => &mut self.forward,
            Action::MoveBackward => &mut self.backward,
            Action::MoveLeft => &mut self.left,
            Action::MoveRight => &mut self.right,
            Action::Descend => &mut self.down,
            Action::Ascend => &mut self.up,
            Action::Fast => &mut self.fast,
        };
        *flag = pressed;
    }

    pub fn is_held(&self, action: Action) -> bool {
        match action {
            Action::MoveForward => self.forward,
            Action::MoveBackward => self.backward,
            Action::MoveLeft => self.left,
            Action::MoveRight => self.right,
            Action::Descend => self.down,
            Action::Ascend => self.up,
            Action::Fast => self.fast,
        }
    }

    /// True when any of the six movement flags is held (the fast modifier
    /// alone does not count).
    pub fn any_movement(&self) -> bool {
        self.forward || self.backward || self.left || self.right || self.down || self.up
    }

    /// Release everything.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Unnormalized horizontal direction in camera-local axes (-Z forward, +X right).
    pub fn planar_axis(&self) -> Vec3 {
        let mut dir = Vec3::ZERO;
        if self.forward {
            dir.z -= 1.0;
        }
        if self.backward {
            dir.z += 1.0;
        }
        if self.left {
            dir.x -= 1.0;
        }
        if self.right {
            dir.x += 1.0;
        }
        dir
    }

    /// -1, 0 or +1 along world Y.
    pub fn vertical_axis(&self) -> f32 {
        let mut y = 0.0;
        if self.down {
            y -= 1.0;
        }
        if self.up {
            y += 1.0;
        }
        y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_query_each_action() {
        let mut s = InputState::default();
        for action in Action::ALL {
            assert!(!s.is_held(action));
            s.set(action, true);
            assert!(s.is_held(action));
        }
        for action in Action::ALL {
            s.set(action, false);
            assert!(!s.is_held(action));
        }
        assert_eq!(s, InputState::default());
    }

    #[test]
    fn fast_alone_is_not_movement() {
        let mut s = InputState::default();
        s.set(Action::Fast, true);
        assert!(!s.any_movement());
        s.set(Action::Ascend, true);
        assert!(s.any_movement());
    }

    #[test]
    fn axes_follow_flags() {
        let mut s = InputState::default();
        s.forward = true;
        s.right = true;
        s.up = true;
        assert_eq!(s.planar_axis(), Vec3::new(1.0, 0.0, -1.0));
        assert_eq!(s.vertical_axis(), 1.0);
    }

    #[test]
    fn opposite_flags_cancel() {
        let s = InputState {
            forward: true,
            backward: true,
            left: true,
            right: true,
            down: true,
            up: true,
            fast: false,
        };
        assert_eq!(s.planar_axis(), Vec3::ZERO);
        assert_eq!(s.vertical_axis(), 0.0);
    }

    #[test]
    fn clear_releases_all() {
        let mut s = InputState {
            forward: true,
            fast: true,
            ..Default::default()
        };
        s.clear();
        assert_eq!(s, InputState::default());
    }
}
