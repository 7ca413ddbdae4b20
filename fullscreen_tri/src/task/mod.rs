//! Provides a small framework for specifying units of work that are to be executed by the GPU
//! driver.
//!
//! A "task" is a unit of work for the GPU, represented by the [GpuTask] trait. The atomic tasks
//! this crate provides (using a program, setting a uniform, drawing) are called "commands" by
//! convention. Tasks may be combined with [sequence] and [sequence3], which execute their sub-tasks
//! strictly in order; all sub-tasks in a sequence must be bound to the same rendering context.
//!
//! A task does nothing until it is submitted to a rendering context with
//! [RenderingContext::submit], which executes it synchronously and returns its output.
//!
//! [RenderingContext::submit]: crate::runtime::RenderingContext::submit

mod gpu_task;
pub use self::gpu_task::{ContextId, Empty, GpuTask, GpuTaskExt, IncompatibleContextIds};

mod map;
pub use self::map::Map;

mod option_task;
pub use self::option_task::OptionTask;

mod sequence;
pub use self::sequence::{sequence, sequence3, Sequence, Sequence3};
