use isomesh_math::{Point3, Vec3};

use crate::Mesh;

/// Accumulates vertices of a mesh during one traversal
#[derive(Debug, Default)]
pub struct MeshBuilder {
    mesh: Mesh,
}

impl MeshBuilder {
    /// Constructs an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a vertex and its normal, and references it from the index buffer
    ///
    /// Returns index of the new vertex.
    pub fn emit_vertex(&mut self, position: Point3, normal: Vec3) -> u32 {
        let index = self.mesh.positions.len() as u32;
        self.mesh.positions.push(position.into());
        self.mesh.normals.push(normal.into());
        self.mesh.indices.push(index);
        index
    }

    /// Drops everything emitted so far, keeping allocated memory
    pub fn clear(&mut self) {
        self.mesh.clear();
    }

    /// Returns mesh built so far
    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    /// Returns number of emitted vertices
    pub fn count_vertices(&self) -> usize {
        self.mesh.count_vertices()
    }

    /// Moves the built buffers into the target mesh, the builder becomes empty
    pub fn publish(&mut self, target: &mut Mesh) {
        target.replace_with(&mut self.mesh);
    }

    /// Consumes the builder and returns the mesh
    pub fn build(self) -> Mesh {
        self.mesh
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use isomesh_math::{point3, vec3};

    #[test]
    fn emit_returns_sequential_indices() {
        let mut builder = MeshBuilder::new();
        for i in 0..6 {
            let index = builder.emit_vertex(point3(i as f32, 0.0, 0.0), vec3(1.0, 0.0, 0.0));
            assert_eq!(index, i);
        }
        assert_eq!(builder.mesh().indices::<u32>(), &[0, 1, 2, 3, 4, 5]);
        assert_eq!(builder.mesh().positions()[4], [4.0, 0.0, 0.0]);
    }

    #[test]
    fn clear_restarts_indices() {
        let mut builder = MeshBuilder::new();
        builder.emit_vertex(point3(0.0, 0.0, 0.0), vec3(1.0, 0.0, 0.0));
        builder.clear();
        assert_eq!(builder.count_vertices(), 0);
        assert_eq!(builder.emit_vertex(point3(0.0, 0.0, 0.0), vec3(1.0, 0.0, 0.0)), 0);
    }

    #[test]
    fn publish_moves_buffers() {
        let mut builder = MeshBuilder::new();
        for _ in 0..3 {
            builder.emit_vertex(point3(0.0, 0.0, 0.0), vec3(1.0, 0.0, 0.0));
        }
        let mut published = Mesh::new();
        builder.publish(&mut published);
        assert_eq!(published.count_faces(), 1);
        assert_eq!(builder.count_vertices(), 0);
    }
}
