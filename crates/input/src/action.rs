use std::fmt;
use std::str::FromStr;

/// A logical navigation action. Any input device (keyboard today) maps onto
/// this vocabulary; the navigator consumes actions, never raw key events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Action {
    /// Move along the camera's -Z axis.
    MoveForward,
    MoveBackward,
    /// Strafe along the camera's -X axis.
    MoveLeft,
    MoveRight,
    /// Move down along world Y, independent of yaw.
    Descend,
    Ascend,
    /// Speed modifier.
    Fast,
}

impl Action {
    pub const ALL: [Action; 7] = [
        Action::MoveForward,
        Action::MoveBackward,
        Action::MoveLeft,
        Action::MoveRight,
        Action::Descend,
        Action::Ascend,
        Action::Fast,
    ];

    /// Name used in config files.
    pub fn name(self) -> &'static str {
        match self {
            Action::MoveForward => "move_forward",
            Action::MoveBackward => "move_backward",
            Action::MoveLeft => "move_left",
            Action::MoveRight => "move_right",
            Action::Descend => "descend",
            Action::Ascend => "ascend",
            Action::Fast => "fast",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Action {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Action::ALL
            .into_iter()
            .find(|a| a.name().eq_ignore_ascii_case(s))
            .ok_or(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_parse_back() {
        for action in Action::ALL {
            assert_eq!(action.name().parse::<Action>(), Ok(action));
        }
    }

    #[test]
    fn parse_ignores_case_and_whitespace() {
        assert_eq!(" Ascend ".parse::<Action>(), Ok(Action::Ascend));
        assert_eq!("MOVE_LEFT".parse::<Action>(), Ok(Action::MoveLeft));
    }

    #[test]
    fn unknown_name_fails() {
        assert!("jump".parse::<Action>().is_err());
    }

    #[test]
    fn display_matches_name() {
        assert_eq!(Action::Fast.to_string(), "fast");
    }
}
