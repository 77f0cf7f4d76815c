use crate::scene::Scene;
use glam::{Mat4, Vec4};

/// Per-frame inputs to a renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderView {
    /// Clip-from-world matrix, bound as a uniform before the draw.
    pub view_proj: Mat4,
    /// Milliseconds since the app started, for time-animated shaders.
    pub time_ms: f32,
}

impl Default for RenderView {
    fn default() -> Self {
        Self {
            view_proj: Mat4::IDENTITY,
            time_ms: 0.0,
        }
    }
}

/// Renderer-agnostic interface. All renderers implement this trait.
///
/// The renderer reads a static scene and the per-frame view, then produces
/// output. It never feeds anything back into navigation.
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output;

    /// Render one frame of `scene` as seen through `view`.
    fn render(&self, scene: &Scene, view: &RenderView) -> Self::Output;
}

/// Text renderer for headless use.
///
/// Prints the matrix and every scene vertex projected to normalized device
/// coordinates, marking vertices that fall outside the view volume.
#[derive(Debug, Default)]
pub struct DebugTextRenderer;

impl DebugTextRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for DebugTextRenderer {
    type Output = String;

    fn render(&self, scene: &Scene, view: &RenderView) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "=== Frame (scene={}, t={:.1}ms) ===\n",
            scene.name, view.time_ms
        ));
        out.push_str(&format!(
            "Triangles: {}  Vertices: {}\n",
            scene.triangle_count(),
            scene.vertices.len()
        ));
        out.push_str("view_proj (rows):\n");
        for r in 0..4 {
            let row = view.view_proj.row(r);
            out.push_str(&format!(
                "  [{:9.4} {:9.4} {:9.4} {:9.4}]\n",
                row.x, row.y, row.z, row.w
            ));
        }

        let mut visible = 0;
        for (i, v) in scene.vertices.iter().enumerate() {
            let clip = view.view_proj * Vec4::new(v.position[0], v.position[1], v.position[2], 1.0);
            if clip.w <= 0.0 {
                out.push_str(&format!("  v{i:<2} behind camera\n"));
                continue;
            }
            let ndc = clip.truncate() / clip.w;
            let inside = ndc.x.abs() <= 1.0 && ndc.y.abs() <= 1.0 && (0.0..=1.0).contains(&ndc.z);
            if inside {
                visible += 1;
            }
            out.push_str(&format!(
                "  v{i:<2} ndc=({:.3}, {:.3}, {:.4}){}\n",
                ndc.x,
                ndc.y,
                ndc.z,
                if inside { "" } else { " clipped" }
            ));
        }
        out.push_str(&format!("Visible vertices: {visible}\n"));

        tracing::trace!(scene = scene.name, visible, "debug frame rendered");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn identity_view_sees_pulse_quad_edges() {
        let renderer = DebugTextRenderer::new();
        let output = renderer.render(&Scene::pulse_quad(), &RenderView::default());

        assert!(output.contains("scene=pulse"));
        assert!(output.contains("Triangles: 2"));
        assert!(output.contains("Visible vertices: 4"));
    }

    #[test]
    fn camera_looking_away_sees_nothing() {
        let view = Mat4::look_to_rh(Vec3::new(0.0, 2.0, 3.5), Vec3::Z, Vec3::Y);
        let proj = Mat4::perspective_infinite_rh(72.0_f32.to_radians(), 1.0, 0.1);
        let output = DebugTextRenderer::new().render(
            &Scene::demo(),
            &RenderView {
                view_proj: proj * view,
                time_ms: 16.0,
            },
        );

        assert!(output.contains("behind camera"));
        assert!(output.contains("Visible vertices: 0"));
    }

    #[test]
    fn camera_facing_scene_sees_it() {
        let view = Mat4::look_at_rh(Vec3::new(0.0, 2.0, 6.0), Vec3::ZERO, Vec3::Y);
        let proj = Mat4::perspective_infinite_rh(72.0_f32.to_radians(), 1.0, 0.1);
        let output = DebugTextRenderer::new().render(
            &Scene::demo(),
            &RenderView {
                view_proj: proj * view,
                time_ms: 0.0,
            },
        );

        assert!(output.contains("Visible vertices: 11"));
        assert!(!output.contains("clipped"));
    }
}
