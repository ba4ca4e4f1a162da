// Unit meshes for the three hit-shape primitives. Each is sized so that the
// primitive's `mesh_scale()` maps it onto the real shape:
// sphere radius 1, cube half-extent 1, cylinder radius 1 and half-height 1.

use std::f32::consts::{PI, TAU};

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub pos: [f32; 3],
    pub normal: [f32; 3],
}

#[derive(Default, Clone, Debug)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u16>,
}

impl MeshData {
    fn push(&mut self, pos: [f32; 3], normal: [f32; 3]) -> u16 {
        self.vertices.push(Vertex { pos, normal });
        (self.vertices.len() - 1) as u16
    }
}

pub fn unit_sphere(stacks: u16, slices: u16) -> MeshData {
    let stacks = stacks.max(2);
    let slices = slices.max(3);
    let mut mesh = MeshData::default();
    for i in 0..=stacks {
        let phi = PI * i as f32 / stacks as f32;
        let (ring, y) = phi.sin_cos();
        for j in 0..=slices {
            let theta = TAU * j as f32 / slices as f32;
            let (s, c) = theta.sin_cos();
            let p = [ring * c, y, ring * s];
            mesh.push(p, p);
        }
    }
    let row = slices + 1;
    for i in 0..stacks {
        for j in 0..slices {
            let a = i * row + j;
            let b = a + row;
            mesh.indices.extend_from_slice(&[a, b, a + 1, a + 1, b, b + 1]);
        }
    }
    mesh
}

pub fn unit_cube() -> MeshData {
    // (normal, u, v) per face
    const FACES: [([f32; 3], [f32; 3], [f32; 3]); 6] = [
        ([1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]),
        ([-1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 0.0]),
        ([0.0, 1.0, 0.0], [0.0, 0.0, 1.0], [1.0, 0.0, 0.0]),
        ([0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]),
        ([0.0, 0.0, 1.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
        ([0.0, 0.0, -1.0], [0.0, 1.0, 0.0], [1.0, 0.0, 0.0]),
    ];
    let mut mesh = MeshData::default();
    for (n, u, v) in FACES {
        let base = mesh.vertices.len() as u16;
        for (su, sv) in [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)] {
            let p = [
                n[0] + u[0] * su + v[0] * sv,
                n[1] + u[1] * su + v[1] * sv,
                n[2] + u[2] * su + v[2] * sv,
            ];
            mesh.push(p, n);
        }
        mesh.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
    mesh
}

pub fn unit_cylinder(segments: u16) -> MeshData {
    let segments = segments.max(3);
    let mut mesh = MeshData::default();

    // side wall: bottom/top pairs
    for j in 0..=segments {
        let theta = TAU * j as f32 / segments as f32;
        let (s, c) = theta.sin_cos();
        mesh.push([c, -1.0, s], [c, 0.0, s]);
        mesh.push([c, 1.0, s], [c, 0.0, s]);
    }
    for j in 0..segments {
        let a = j * 2;
        mesh.indices
            .extend_from_slice(&[a, a + 1, a + 2, a + 2, a + 1, a + 3]);
    }

    // caps
    for y in [-1.0f32, 1.0] {
        let n = [0.0, y, 0.0];
        let center = mesh.push([0.0, y, 0.0], n);
        for j in 0..=segments {
            let theta = TAU * j as f32 / segments as f32;
            let (s, c) = theta.sin_cos();
            mesh.push([c, y, s], n);
        }
        for j in 0..segments {
            let a = center + 1 + j;
            mesh.indices.extend_from_slice(&[center, a, a + 1]);
        }
    }
    mesh
}
