use crate::task::{ContextId, GpuTask};

/// Transforms the output of a task with a function, see [GpuTaskExt::map].
///
/// [GpuTaskExt::map]: crate::task::GpuTaskExt::map
#[derive(Clone)]
pub struct Map<T, F> {
    task: T,
    f: F,
}

impl<T, F> Map<T, F> {
    pub(crate) fn new(task: T, f: F) -> Self {
        Map { task, f }
    }
}

impl<Ec, T, F, U> GpuTask<Ec> for Map<T, F>
where
    T: GpuTask<Ec>,
    F: FnOnce(T::Output) -> U,
{
    type Output = U;

    fn context_id(&self) -> ContextId {
        self.task.context_id()
    }

    fn execute(self, execution_context: &mut Ec) -> Self::Output {
        let Map { task, f } = self;

        f(task.execute(execution_context))
    }
}
