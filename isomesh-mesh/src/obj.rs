use std::io::Write;

use crate::Mesh;

impl Mesh {
    /// Writes the mesh in Wavefront OBJ format
    ///
    /// OBJ indices are 1-based; every face references the same index for position and normal.
    pub fn write_obj<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writeln!(writer, "# isomesh")?;
        writeln!(
            writer,
            "# vertices: {}, faces: {}",
            self.count_vertices(),
            self.count_faces()
        )?;
        for [x, y, z] in self.positions.iter() {
            writeln!(writer, "v {} {} {}", x, y, z)?;
        }
        for [x, y, z] in self.normals.iter() {
            writeln!(writer, "vn {} {} {}", x, y, z)?;
        }
        for [a, b, c] in self.triangles() {
            writeln!(
                writer,
                "f {0}//{0} {1}//{1} {2}//{2}",
                a + 1,
                b + 1,
                c + 1
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::MeshBuilder;
    use isomesh_math::{point3, vec3};

    #[test]
    fn obj_output() {
        let mut builder = MeshBuilder::new();
        builder.emit_vertex(point3(0.0, 0.0, 0.0), vec3(0.0, 0.0, 1.0));
        builder.emit_vertex(point3(1.0, 0.0, 0.0), vec3(0.0, 0.0, 1.0));
        builder.emit_vertex(point3(0.0, 1.5, 0.0), vec3(0.0, 0.0, 1.0));
        let mesh = builder.build();

        let mut buffer = Vec::new();
        mesh.write_obj(&mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let lines = text.lines().collect::<Vec<_>>();

        assert_eq!(lines.len(), 2 + 3 + 3 + 1);
        assert_eq!(lines[1], "# vertices: 3, faces: 1");
        assert_eq!(lines[4], "v 0 1.5 0");
        assert_eq!(lines[5], "vn 0 0 1");
        assert_eq!(lines[8], "f 1//1 2//2 3//3");
    }
}
