//! Triangle mesh buffers
//!
//! Meshes are stored as three parallel sequences: vertex positions, vertex normals and a flat
//! list of triangle vertex indices. Vertices are never shared between triangles.

#![warn(missing_docs)]

mod builder;
mod obj;

use isomesh_math::{Point3, Vec3};

pub use builder::MeshBuilder;

/// Interleaved vertex ready for GPU upload
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    /// Vertex position
    pub position: [f32; 3],
    /// Vertex normal
    pub normal: [f32; 3],
}

/// Isosurface mesh
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mesh {
    positions: Vec<[f32; 3]>,
    normals: Vec<[f32; 3]>,
    indices: Vec<u32>,
}

impl Mesh {
    /// Constructs an empty mesh
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns vertex positions
    pub fn positions(&self) -> &[[f32; 3]] {
        &self.positions
    }

    /// Returns vertex normals, index aligned with positions
    pub fn normals(&self) -> &[[f32; 3]] {
        &self.normals
    }

    /// Returns type casted list of indices
    ///
    /// Use u32 to get indices themselves or u8 to get data for buffering
    pub fn indices<T: bytemuck::Pod>(&self) -> &[T] {
        bytemuck::cast_slice(&self.indices)
    }

    /// Returns number of vertices
    pub fn count_vertices(&self) -> usize {
        self.positions.len()
    }

    /// Returns number of faces (triangles) in the mesh
    pub fn count_faces(&self) -> usize {
        self.indices.len() / 3
    }

    /// Checks if the mesh has no triangles
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Returns position of a vertex
    pub fn position(&self, index: u32) -> Option<Point3> {
        self.positions.get(index as usize).map(|p| Point3::from(*p))
    }

    /// Returns normal of a vertex
    pub fn normal(&self, index: u32) -> Option<Vec3> {
        self.normals.get(index as usize).map(|n| Vec3::from(*n))
    }

    /// Iterates over triangles as triplets of vertex indices
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices
            .chunks_exact(3)
            .map(|chunk| [chunk[0], chunk[1], chunk[2]])
    }

    /// Returns interleaved vertices
    pub fn vertices(&self) -> Vec<Vertex> {
        self.positions
            .iter()
            .zip(self.normals.iter())
            .map(|(position, normal)| Vertex {
                position: *position,
                normal: *normal,
            })
            .collect()
    }

    /// Returns interleaved vertex buffer data
    pub fn vertex_buffer(&self) -> Vec<u8> {
        bytemuck::cast_slice(&self.vertices()).to_vec()
    }

    /// Checks the buffer invariants: normals count equals positions count, indices count is a
    /// multiple of 3 and every index points to an existing vertex
    pub fn is_consistent(&self) -> bool {
        let count = self.positions.len();
        self.normals.len() == count
            && self.indices.len() % 3 == 0
            && self.indices.iter().all(|i| (*i as usize) < count)
    }

    /// Takes buffers of another mesh, leaving it empty
    pub fn replace_with(&mut self, other: &mut Mesh) {
        std::mem::swap(self, other);
        other.clear();
    }

    fn clear(&mut self) {
        self.positions.clear();
        self.normals.clear();
        self.indices.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use isomesh_math::{point3, vec3};

    fn triangle() -> Mesh {
        let mut builder = MeshBuilder::new();
        builder.emit_vertex(point3(0.0, 0.0, 0.0), vec3(0.0, 0.0, 1.0));
        builder.emit_vertex(point3(1.0, 0.0, 0.0), vec3(0.0, 0.0, 1.0));
        builder.emit_vertex(point3(0.0, 1.0, 0.0), vec3(0.0, 0.0, 1.0));
        builder.build()
    }

    #[test]
    fn counts() {
        let mesh = triangle();
        assert_eq!(mesh.count_vertices(), 3);
        assert_eq!(mesh.count_faces(), 1);
        assert!(mesh.is_consistent());
        assert_eq!(mesh.triangles().collect::<Vec<_>>(), vec![[0, 1, 2]]);
    }

    #[test]
    fn vertex_lookup() {
        let mesh = triangle();
        assert_eq!(mesh.position(1), Some(point3(1.0, 0.0, 0.0)));
        assert_eq!(mesh.normal(2), Some(vec3(0.0, 0.0, 1.0)));
        assert_eq!(mesh.position(3), None);
        assert_eq!(mesh.normal(3), None);
    }

    #[test]
    fn indices_as_bytes() {
        let mesh = triangle();
        assert_eq!(mesh.indices::<u32>(), &[0, 1, 2]);
        assert_eq!(mesh.indices::<u8>().len(), 12);
    }

    #[test]
    fn interleaved_vertices() {
        let mesh = triangle();
        let vertices = mesh.vertices();
        assert_eq!(vertices[1].position, [1.0, 0.0, 0.0]);
        assert_eq!(vertices[1].normal, [0.0, 0.0, 1.0]);
        assert_eq!(
            mesh.vertex_buffer().len(),
            3 * std::mem::size_of::<Vertex>()
        );
    }

    #[test]
    fn replace_empties_source() {
        let mut published = Mesh::new();
        let mut fresh = triangle();
        published.replace_with(&mut fresh);
        assert_eq!(published.count_faces(), 1);
        assert!(fresh.is_empty());
        assert_eq!(fresh.count_vertices(), 0);
    }
}
