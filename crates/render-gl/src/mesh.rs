use crate::error::GlError;
use glow::HasContext;
use std::mem::size_of;

/// Interleaved `f32` vertex layout: components per attribute location.
///
/// `VertexLayout::new(&[3, 2])` describes `vec3 aPos` at location 0 followed
/// by `vec2 aTexCoord` at location 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VertexLayout {
    components: Vec<i32>,
}

impl VertexLayout {
    pub fn new(components: &[i32]) -> Self {
        Self {
            components: components.to_vec(),
        }
    }

    /// Floats per vertex.
    pub fn floats_per_vertex(&self) -> usize {
        self.components.iter().map(|&c| c as usize).sum()
    }

    /// Bytes between consecutive vertices.
    pub fn stride(&self) -> i32 {
        (self.floats_per_vertex() * size_of::<f32>()) as i32
    }

    /// `(location, components, byte offset)` for each attribute.
    pub fn attributes(&self) -> impl Iterator<Item = (u32, i32, i32)> + '_ {
        self.components.iter().enumerate().scan(0i32, |offset, (location, &count)| {
            let attr = (location as u32, count, *offset);
            *offset += count * size_of::<f32>() as i32;
            Some(attr)
        })
    }

    /// Number of whole vertices in `data`.
    pub fn vertex_count(&self, data: &[f32]) -> i32 {
        match self.floats_per_vertex() {
            0 => 0,
            n => (data.len() / n) as i32,
        }
    }
}

/// A vertex array with its vertex buffer and optional element buffer.
#[derive(Debug)]
pub struct Mesh {
    vao: glow::VertexArray,
    vbo: glow::Buffer,
    ebo: Option<glow::Buffer>,
    count: i32,
}

impl Mesh {
    /// Upload `vertices` for `glDrawArrays`.
    pub fn new(gl: &glow::Context, vertices: &[f32], layout: &VertexLayout) -> Result<Self, GlError> {
        Self::upload(gl, vertices, None, layout)
    }

    /// Upload `vertices` and `indices` for `glDrawElements`.
    pub fn indexed(gl: &glow::Context, vertices: &[f32], indices: &[u32], layout: &VertexLayout) -> Result<Self, GlError> {
        Self::upload(gl, vertices, Some(indices), layout)
    }

    fn upload(gl: &glow::Context, vertices: &[f32], indices: Option<&[u32]>, layout: &VertexLayout) -> Result<Self, GlError> {
        unsafe {
            let buffers = create_all(
                if indices.is_some() { 2 } else { 1 },
                || gl.create_buffer(),
                |buffer| gl.delete_buffer(buffer),
            )
            .map_err(create_err("buffer"))?;
            let vao = match gl.create_vertex_array() {
                Ok(vao) => vao,
                Err(reason) => {
                    for &buffer in &buffers {
                        gl.delete_buffer(buffer);
                    }
                    return Err(GlError::Create {
                        object: "vertex array",
                        reason,
                    });
                }
            };
            let vbo = buffers[0];
            let ebo = buffers.get(1).copied();

            gl.bind_vertex_array(Some(vao));
            gl.bind_buffer(glow::ARRAY_BUFFER, Some(vbo));
            gl.buffer_data_u8_slice(glow::ARRAY_BUFFER, bytemuck::cast_slice(vertices), glow::STATIC_DRAW);

            if let (Some(ebo), Some(indices)) = (ebo, indices) {
                gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, Some(ebo));
                gl.buffer_data_u8_slice(glow::ELEMENT_ARRAY_BUFFER, bytemuck::cast_slice(indices), glow::STATIC_DRAW);
            }

            for (location, components, offset) in layout.attributes() {
                gl.vertex_attrib_pointer_f32(location, components, glow::FLOAT, false, layout.stride(), offset);
                gl.enable_vertex_attrib_array(location);
            }

            // The element buffer binding is VAO state, so only the array buffer is unbound.
            gl.bind_buffer(glow::ARRAY_BUFFER, None);
            gl.bind_vertex_array(None);

            let count = match indices {
                Some(indices) => indices.len() as i32,
                None => layout.vertex_count(vertices),
            };
            tracing::debug!(count, indexed = ebo.is_some(), "mesh uploaded");

            Ok(Self { vao, vbo, ebo, count })
        }
    }

    /// Number of vertices (or indices, when indexed) drawn by [`draw`](Self::draw).
    pub fn count(&self) -> i32 {
        self.count
    }

    pub fn bind(&self, gl: &glow::Context) {
        unsafe { gl.bind_vertex_array(Some(self.vao)) }
    }

    /// Bind and draw the whole mesh as triangles.
    pub fn draw(&self, gl: &glow::Context) {
        self.bind(gl);
        unsafe {
            if self.ebo.is_some() {
                gl.draw_elements(glow::TRIANGLES, self.count, glow::UNSIGNED_INT, 0);
            } else {
                gl.draw_arrays(glow::TRIANGLES, 0, self.count);
            }
        }
    }

    /// Draw `count` vertices (or indices) starting at `first`, e.g. one cube face.
    ///
    /// # Panics
    /// If the range runs past the end of the mesh.
    pub fn draw_range(&self, gl: &glow::Context, first: i32, count: i32) {
        assert!(
            first >= 0 && count >= 0 && first + count <= self.count,
            "draw range {first}..{} outside mesh of {}",
            first + count,
            self.count
        );
        self.bind(gl);
        unsafe {
            if self.ebo.is_some() {
                let byte_offset = first * std::mem::size_of::<u32>() as i32;
                gl.draw_elements(glow::TRIANGLES, count, glow::UNSIGNED_INT, byte_offset);
            } else {
                gl.draw_arrays(glow::TRIANGLES, first, count);
            }
        }
    }

    pub fn destroy(self, gl: &glow::Context) {
        unsafe {
            gl.delete_vertex_array(self.vao);
            gl.delete_buffer(self.vbo);
            if let Some(ebo) = self.ebo {
                gl.delete_buffer(ebo);
            }
        }
    }
}

/// Create `count` objects, deleting the ones already made if a later one fails.
fn create_all<T: Copy>(
    count: usize,
    mut create: impl FnMut() -> Result<T, String>,
    mut delete: impl FnMut(T),
) -> Result<Vec<T>, String> {
    let mut created = Vec::with_capacity(count);
    for _ in 0..count {
        match create() {
            Ok(object) => created.push(object),
            Err(reason) => {
                created.into_iter().for_each(&mut delete);
                return Err(reason);
            }
        }
    }
    Ok(created)
}

fn create_err(object: &'static str) -> impl Fn(String) -> GlError {
    move |reason| GlError::Create { object, reason }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_texcoord_layout() {
        let layout = VertexLayout::new(&[3, 2]);
        assert_eq!(layout.floats_per_vertex(), 5);
        assert_eq!(layout.stride(), 20);
        assert_eq!(layout.attributes().collect::<Vec<_>>(), vec![(0, 3, 0), (1, 2, 12)]);
    }

    #[test]
    fn three_attribute_offsets() {
        let layout = VertexLayout::new(&[3, 3, 2]);
        assert_eq!(layout.attributes().collect::<Vec<_>>(), vec![(0, 3, 0), (1, 3, 12), (2, 2, 24)]);
    }

    #[test]
    fn vertex_count_ignores_partial_vertex() {
        let layout = VertexLayout::new(&[3]);
        assert_eq!(layout.vertex_count(&[0.0; 9]), 3);
        assert_eq!(layout.vertex_count(&[0.0; 10]), 3);
        assert_eq!(VertexLayout::new(&[]).vertex_count(&[0.0; 3]), 0);
    }

    #[test]
    fn position_texcoord_layer_layout() {
        let layout = VertexLayout::new(&[3, 2, 1]);
        assert_eq!(layout.floats_per_vertex(), 6);
        assert_eq!(layout.stride(), 24);
        assert_eq!(layout.attributes().collect::<Vec<_>>(), vec![(0, 3, 0), (1, 2, 12), (2, 1, 20)]);
        assert_eq!(layout.vertex_count(&[0.0; 216]), 36);
    }

    #[test]
    fn create_all_returns_every_object() {
        let mut next = 0;
        let made = create_all(
            3,
            || {
                next += 1;
                Ok(next)
            },
            |_| panic!("nothing should be deleted"),
        )
        .unwrap();
        assert_eq!(made, vec![1, 2, 3]);
    }

    #[test]
    fn create_all_deletes_earlier_objects_on_failure() {
        let mut next = 0;
        let mut deleted = Vec::new();
        let err = create_all(
            3,
            || {
                next += 1;
                if next == 2 { Err("out of memory".to_string()) } else { Ok(next) }
            },
            |id| deleted.push(id),
        )
        .unwrap_err();
        assert_eq!(err, "out of memory");
        assert_eq!(deleted, vec![1]);
    }
}
