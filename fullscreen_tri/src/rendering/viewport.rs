use std::convert::TryFrom;

use crate::runtime::state::ContextUpdate;
use crate::runtime::{Connection, GlContext};
use crate::task::{ContextId, GpuTask};

/// Maps normalized device coordinates onto the region `(0, 0)` to `(width, height)` of the
/// drawing surface.
pub struct ViewportCommand {
    context_id: usize,
    width: i32,
    height: i32,
}

impl ViewportCommand {
    pub(crate) fn new(context_id: usize, width: u32, height: u32) -> Self {
        ViewportCommand {
            context_id,
            width: i32::try_from(width).unwrap_or(i32::MAX),
            height: i32::try_from(height).unwrap_or(i32::MAX),
        }
    }
}

impl<G> GpuTask<Connection<G>> for ViewportCommand
where
    G: GlContext,
{
    type Output = ();

    fn context_id(&self) -> ContextId {
        ContextId::Id(self.context_id)
    }

    fn execute(self, connection: &mut Connection<G>) -> Self::Output {
        let (gl, state) = connection.unpack_mut();

        state
            .set_viewport(0, 0, self.width, self.height)
            .apply(gl);
    }
}
