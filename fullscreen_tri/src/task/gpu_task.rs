use std::fmt;

use super::{sequence, sequence3, Map, Sequence, Sequence3};

/// Identifies the rendering context a task is bound to.
///
/// A task that does not touch any context-owned objects may run on [ContextId::Any] context.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ContextId {
    Any,
    Id(usize),
}

impl ContextId {
    /// Combines the context IDs of two tasks that are to be executed together.
    ///
    /// Returns an error if both IDs refer to specific contexts and these contexts differ.
    pub fn combine(&self, other: ContextId) -> Result<ContextId, IncompatibleContextIds> {
        match *self {
            ContextId::Any => Ok(other),
            ContextId::Id(id) => {
                if other == ContextId::Any || other == ContextId::Id(id) {
                    Ok(*self)
                } else {
                    Err(IncompatibleContextIds(*self, other))
                }
            }
        }
    }

    /// Whether or not a task with this ID may be executed by the context with the given `id`.
    pub fn is_compatible(&self, id: usize) -> bool {
        match *self {
            ContextId::Any => true,
            ContextId::Id(own) => own == id,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct IncompatibleContextIds(pub ContextId, pub ContextId);

impl fmt::Display for IncompatibleContextIds {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "tasks bound to different contexts ({:?} and {:?}) cannot be combined",
            self.0, self.1
        )
    }
}

impl std::error::Error for IncompatibleContextIds {}

/// A unit of work that is to be executed by the GPU driver.
///
/// Tasks are executed synchronously by the context they are submitted to, see
/// [RenderingContext::submit].
///
/// [RenderingContext::submit]: crate::runtime::RenderingContext::submit
pub trait GpuTask<Ec> {
    type Output;

    fn context_id(&self) -> ContextId;

    fn execute(self, execution_context: &mut Ec) -> Self::Output;
}

pub trait GpuTaskExt<Ec>: GpuTask<Ec> {
    fn map<F, U>(self, f: F) -> Map<Self, F>
    where
        F: FnOnce(Self::Output) -> U,
        Self: Sized;

    fn sequence<B>(self, b: B) -> Sequence<Self, B, Ec>
    where
        B: GpuTask<Ec>,
        Self: Sized;

    fn sequence3<B, C>(self, b: B, c: C) -> Sequence3<Self, B, C, Ec>
    where
        B: GpuTask<Ec>,
        C: GpuTask<Ec>,
        Self: Sized;
}

impl<T, Ec> GpuTaskExt<Ec> for T
where
    T: GpuTask<Ec>,
{
    fn map<F, U>(self, f: F) -> Map<T, F>
    where
        F: FnOnce(T::Output) -> U,
    {
        Map::new(self, f)
    }

    fn sequence<B>(self, b: B) -> Sequence<T, B, Ec>
    where
        B: GpuTask<Ec>,
    {
        sequence(self, b)
    }

    fn sequence3<B, C>(self, b: B, c: C) -> Sequence3<T, B, C, Ec>
    where
        B: GpuTask<Ec>,
        C: GpuTask<Ec>,
    {
        sequence3(self, b, c)
    }
}

/// A task that finishes immediately without doing any work.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Empty;

impl<Ec> GpuTask<Ec> for Empty {
    type Output = ();

    fn context_id(&self) -> ContextId {
        ContextId::Any
    }

    fn execute(self, _execution_context: &mut Ec) -> Self::Output {}
}
