use std::convert::TryFrom;
use std::ops::Range;

use crate::pipeline::{Program, Topology};
use crate::runtime::{Connection, GlContext};
use crate::task::{ContextId, GpuTask};

/// Submits a single `draw_arrays` call for a [Program]; see [Program::draw_command].
pub struct DrawCommand<G>
where
    G: GlContext,
{
    program: Program<G>,
    topology: Topology,
    first: i32,
    count: i32,
}

impl<G> DrawCommand<G>
where
    G: GlContext,
{
    pub(crate) fn new(program: Program<G>, topology: Topology, vertices: Range<u32>) -> Self {
        let first = i32::try_from(vertices.start).unwrap_or(i32::MAX);
        let count = vertices.end.saturating_sub(vertices.start);
        let count = i32::try_from(count).unwrap_or(i32::MAX - first);

        DrawCommand {
            program,
            topology,
            first,
            count,
        }
    }

    pub fn topology(&self) -> Topology {
        self.topology
    }

    pub fn vertex_count(&self) -> u32 {
        self.count as u32
    }
}

impl<G> GpuTask<Connection<G>> for DrawCommand<G>
where
    G: GlContext,
{
    type Output = ();

    fn context_id(&self) -> ContextId {
        ContextId::Id(self.program.context_id())
    }

    fn execute(self, connection: &mut Connection<G>) -> Self::Output {
        self.program.activate(connection);

        log::trace!(
            "drawing {} vertices as {:?} starting at vertex {}",
            self.count,
            self.topology,
            self.first
        );

        connection
            .gl()
            .draw_arrays(self.topology, self.first, self.count);
    }
}
