use crate::task::{ContextId, GpuTask};

/// Wraps an optional task; executing an empty [OptionTask] does nothing and outputs `None`.
pub struct OptionTask<T> {
    option: Option<T>,
}

impl<T> OptionTask<T> {
    pub fn is_some(&self) -> bool {
        self.option.is_some()
    }
}

impl<Ec, T> GpuTask<Ec> for OptionTask<T>
where
    T: GpuTask<Ec>,
{
    type Output = Option<T::Output>;

    fn context_id(&self) -> ContextId {
        match &self.option {
            Some(task) => task.context_id(),
            None => ContextId::Any,
        }
    }

    fn execute(self, execution_context: &mut Ec) -> Self::Output {
        self.option.map(|task| task.execute(execution_context))
    }
}

impl<T> From<Option<T>> for OptionTask<T> {
    fn from(option: Option<T>) -> Self {
        OptionTask { option }
    }
}
