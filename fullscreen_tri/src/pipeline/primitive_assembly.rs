use web_sys::WebGl2RenderingContext as Gl;

/// The way a [DrawCommand](crate::pipeline::DrawCommand) assembles vertices into primitives.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Topology {
    Points,
    Lines,
    LineStrip,
    LineLoop,
    Triangles,
    TriangleStrip,
    /// Every triangle shares the first vertex; `n` vertices produce `n - 2` triangles.
    TriangleFan,
}

impl Topology {
    pub(crate) fn id(&self) -> u32 {
        match self {
            Topology::Points => Gl::POINTS,
            Topology::Lines => Gl::LINES,
            Topology::LineStrip => Gl::LINE_STRIP,
            Topology::LineLoop => Gl::LINE_LOOP,
            Topology::Triangles => Gl::TRIANGLES,
            Topology::TriangleStrip => Gl::TRIANGLE_STRIP,
            Topology::TriangleFan => Gl::TRIANGLE_FAN,
        }
    }

    /// The number of primitives assembled from `vertex_count` vertices.
    pub fn primitive_count(&self, vertex_count: u32) -> u32 {
        match self {
            Topology::Points => vertex_count,
            Topology::Lines => vertex_count / 2,
            Topology::LineStrip => vertex_count.saturating_sub(1),
            Topology::LineLoop => {
                if vertex_count >= 2 {
                    vertex_count
                } else {
                    0
                }
            }
            Topology::Triangles => vertex_count / 3,
            Topology::TriangleStrip | Topology::TriangleFan => vertex_count.saturating_sub(2),
        }
    }
}
