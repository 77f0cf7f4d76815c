use anyhow::{bail, Result};
use freefly_input::{Action, InputEvent, KeyBindings};
use freefly_navigator::Navigator;
use serde::Serialize;
use std::fmt;

/// A headless navigation run: keys held for the whole run, optional pointer
/// motion before every frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Plan {
    actions: Vec<Action>,
    frames: u32,
    frame_ms: f32,
    look: Option<(f32, f32)>,
}

/// Navigator state after one simulated frame.
#[derive(Debug, Clone, Serialize)]
pub struct Sample {
    pub frame: u32,
    pub time_ms: f32,
    pub position: [f32; 3],
    pub yaw: f32,
    pub pitch: f32,
    /// Length of this frame's displacement.
    pub moved: f32,
}

impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [x, y, z] = self.position;
        write!(
            f,
            "frame {:>4}  t={:>8.1}ms  pos=({x:.4}, {y:.4}, {z:.4})  yaw={:.4} pitch={:.4}  moved={:.5}",
            self.frame, self.time_ms, self.yaw, self.pitch, self.moved
        )
    }
}

impl Plan {
    pub fn new(
        bindings: &KeyBindings,
        keys: &[String],
        frames: u32,
        frame_ms: f32,
        look: Option<(f32, f32)>,
    ) -> Result<Self> {
        if !(frame_ms.is_finite() && frame_ms >= 0.0) {
            bail!("frame time must be a non-negative number, got {frame_ms}");
        }
        let mut actions = Vec::with_capacity(keys.len());
        for key in keys.iter().filter(|k| !k.trim().is_empty()) {
            match bindings.action_for(key) {
                Some(action) => actions.push(action),
                None => bail!("key `{key}` is not bound to any action"),
            }
        }
        Ok(Self {
            actions,
            frames,
            frame_ms,
            look,
        })
    }

    /// Events delivered before the first frame: capture, then every key down.
    fn setup_events(&self) -> impl Iterator<Item = InputEvent> + '_ {
        std::iter::once(InputEvent::Capture(true)).chain(
            self.actions
                .iter()
                .map(|&action| InputEvent::Key {
                    action,
                    pressed: true,
                }),
        )
    }

    pub fn run(&self, nav: &mut Navigator) -> Vec<Sample> {
        nav.apply_all(self.setup_events());
        tracing::debug!(actions = ?self.actions, frames = self.frames, "simulating");

        (1..=self.frames)
            .map(|frame| {
                if let Some((dx, dy)) = self.look {
                    nav.apply(InputEvent::PointerMotion { dx, dy });
                }
                let delta = nav.step(self.frame_ms);
                let o = nav.orientation();
                Sample {
                    frame,
                    time_ms: frame as f32 * self.frame_ms,
                    position: nav.position().to_array(),
                    yaw: o.yaw,
                    pitch: o.pitch,
                    moved: delta.length(),
                }
            })
            .collect()
    }
}

/// Parse `dx,dy` pointer motion.
pub fn parse_look(s: &str) -> Result<(f32, f32), String> {
    let (dx, dy) = s
        .split_once(',')
        .ok_or_else(|| format!("expected `dx,dy`, got `{s}`"))?;
    let parse = |v: &str| {
        v.trim()
            .parse::<f32>()
            .map_err(|e| format!("invalid number `{}`: {e}", v.trim()))
    };
    Ok((parse(dx)?, parse(dy)?))
}
