//! Mesh buffers owned by the simulation.
//!
//! `MeshBuffer` decouples the deformation math from any rendering API: the
//! engine mutates positions through [`MeshBuffer::set_position`] /
//! [`MeshBuffer::apply_displacement`] and rebuilds normals once per frame;
//! a renderer reads the buffers back as plain bytes.

use glam::Vec3;
use std::f32::consts::{PI, TAU};

/// Indexed triangle mesh with positions and per-vertex normals.
#[derive(Clone, Debug)]
pub struct MeshBuffer {
    positions: Vec<Vec3>,
    normals: Vec<Vec3>,
    indices: Vec<u32>,
}

impl MeshBuffer {
    /// Build a UV sphere centred at the origin.
    ///
    /// Produces `(segments + 1) * (rings + 1)` vertices; normals start as the
    /// outward radial direction. `segments >= 3` and `rings >= 2` are
    /// expected (validated by `SimConfig`).
    pub fn sphere(radius: f32, segments: u32, rings: u32) -> Self {
        let vert_count = ((segments + 1) * (rings + 1)) as usize;
        let mut positions = Vec::with_capacity(vert_count);
        let mut normals = Vec::with_capacity(vert_count);
        for r in 0..=rings {
            let phi = r as f32 / rings as f32 * PI;
            for s in 0..=segments {
                let theta = s as f32 / segments as f32 * TAU;
                let dir = Vec3::new(
                    phi.sin() * theta.cos(),
                    phi.cos(),
                    phi.sin() * theta.sin(),
                );
                positions.push(dir * radius);
                normals.push(dir);
            }
        }
        let mut indices = Vec::with_capacity((segments * rings * 6) as usize);
        for r in 0..rings {
            for s in 0..segments {
                let a = r * (segments + 1) + s;
                let b = a + 1;
                let c = a + segments + 1;
                let d = c + 1;
                indices.extend_from_slice(&[a, b, c, b, d, c]);
            }
        }
        Self {
            positions,
            normals,
            indices,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn normals(&self) -> &[Vec3] {
        &self.normals
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn position(&self, i: usize) -> Vec3 {
        self.positions[i]
    }

    pub fn set_position(&mut self, i: usize, p: Vec3) {
        self.positions[i] = p;
    }

    pub fn apply_displacement(&mut self, i: usize, offset: Vec3) {
        self.positions[i] += offset;
    }

    /// Position buffer as raw bytes for an external renderer.
    pub fn position_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.positions)
    }

    /// Normal buffer as raw bytes for an external renderer.
    pub fn normal_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.normals)
    }

    /// Rebuild per-vertex normals from the current positions by accumulating
    /// area-weighted face normals. Required after deformation so lighting
    /// follows the displaced surface.
    pub fn recompute_normals(&mut self) {
        for n in &mut self.normals {
            *n = Vec3::ZERO;
        }
        for tri in self.indices.chunks_exact(3) {
            let (a, b, c) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
            let pa = self.positions[a];
            let face = (self.positions[b] - pa).cross(self.positions[c] - pa);
            self.normals[a] += face;
            self.normals[b] += face;
            self.normals[c] += face;
        }
        for n in &mut self.normals {
            *n = n.normalize_or_zero();
        }
    }
}
