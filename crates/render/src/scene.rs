use bytemuck::{Pod, Zeroable};

/// Interleaved vertex: position then RGB colour, 24 bytes.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct SceneVertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

impl SceneVertex {
    pub const fn new(position: [f32; 3], color: [f32; 3]) -> Self {
        Self { position, color }
    }
}

/// Errors from validating scene geometry.
#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    #[error("index {index} at position {at} is out of bounds for {vertex_count} vertices")]
    IndexOutOfBounds {
        at: usize,
        index: u16,
        vertex_count: usize,
    },
    #[error("index count {0} is not a multiple of 3")]
    PartialTriangle(usize),
    #[error("scene has no triangles")]
    Empty,
}

/// Static indexed triangle list plus the colour the frame is cleared to.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub name: &'static str,
    pub vertices: Vec<SceneVertex>,
    pub indices: Vec<u16>,
    pub clear_color: [f64; 4],
}

const SAND: [f32; 3] = [0.86, 0.08, 0.24];
const WALL_BASE: [f32; 3] = [0.1, 0.1, 0.44];
const WALL_TOP: [f32; 3] = [0.54, 0.17, 0.89];
const GREEN: [f32; 3] = [0.0, 1.0, 0.0];
const YELLOW: [f32; 3] = [1.0, 1.0, 0.0];

impl Scene {
    /// A 3×3 floor, a unit-high wall behind the origin and a triangle in front of it.
    pub fn demo() -> Self {
        #[rustfmt::skip]
        let vertices = vec![
            // floor
            SceneVertex::new([ 1.5, 0.0,  1.5], SAND),
            SceneVertex::new([ 1.5, 0.0, -1.5], SAND),
            SceneVertex::new([-1.5, 0.0, -1.5], SAND),
            SceneVertex::new([-1.5, 0.0,  1.5], SAND),
            // wall
            SceneVertex::new([ 0.5, 0.0, -0.5], WALL_BASE),
            SceneVertex::new([ 0.5, 1.0, -0.5], WALL_TOP),
            SceneVertex::new([-0.5, 1.0, -0.5], WALL_TOP),
            SceneVertex::new([-0.5, 0.0, -0.5], WALL_BASE),
            // triangle
            SceneVertex::new([ 0.5, 0.0,  0.5], GREEN),
            SceneVertex::new([ 0.0, 1.0,  0.5], YELLOW),
            SceneVertex::new([-0.5, 0.0,  0.5], GREEN),
        ];
        #[rustfmt::skip]
        let indices = vec![
            0, 1, 2,  0, 2, 3,
            4, 5, 6,  4, 6, 7,
            8, 9, 10,
        ];
        Self {
            name: "demo",
            vertices,
            indices,
            clear_color: [0.5, 1.0, 0.83, 1.0],
        }
    }

    /// Two triangles covering clip space, drawn with an identity matrix.
    pub fn pulse_quad() -> Self {
        let white = [1.0, 1.0, 1.0];
        #[rustfmt::skip]
        let vertices = vec![
            SceneVertex::new([-1.0, -1.0, 0.0], white),
            SceneVertex::new([-1.0,  1.0, 0.0], white),
            SceneVertex::new([ 1.0,  1.0, 0.0], white),
            SceneVertex::new([ 1.0, -1.0, 0.0], white),
        ];
        Self {
            name: "pulse",
            vertices,
            indices: vec![0, 1, 2, 0, 2, 3],
            clear_color: [0.0, 0.0, 0.0, 1.0],
        }
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Check that the index list forms whole triangles over existing vertices.
    pub fn validate(&self) -> Result<(), SceneError> {
        if self.indices.is_empty() {
            return Err(SceneError::Empty);
        }
        if self.indices.len() % 3 != 0 {
            return Err(SceneError::PartialTriangle(self.indices.len()));
        }
        let vertex_count = self.vertices.len();
        if let Some((at, &index)) = self
            .indices
            .iter()
            .enumerate()
            .find(|(_, i)| usize::from(**i) >= vertex_count)
        {
            return Err(SceneError::IndexOutOfBounds {
                at,
                index,
                vertex_count,
            });
        }
        Ok(())
    }
}
