//! A rendering context that runs on the main (and only) browser thread.
//!
//! Tasks submitted to a [SingleThreadedContext] are executed immediately; there are no suspension
//! points, so every submission has finished by the time [RenderingContext::submit] returns.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlCanvasElement, WebGl2RenderingContext as Gl};

use crate::pipeline::{
    FragmentShader, Program, ShaderCompilationError, ShaderLinkingError, VertexShader,
};
use crate::rendering::{surface_dimensions, DefaultRenderTarget};
use crate::runtime::{Connection, ContextOptions, GlContext, RenderingContext};
use crate::task::GpuTask;
use crate::util::js_error_message;

thread_local!(static ID_GEN: IdGen = IdGen::new());

struct IdGen {
    next: Cell<usize>,
}

impl IdGen {
    const fn new() -> Self {
        IdGen { next: Cell::new(0) }
    }

    fn next(&self) -> usize {
        let next = self.next.get();

        self.next.set(next + 1);

        next
    }
}

pub struct SingleThreadedContext<G = Gl>
where
    G: GlContext,
{
    connection: Rc<RefCell<Connection<G>>>,
    id: usize,
}

impl<G> SingleThreadedContext<G>
where
    G: GlContext,
{
    /// Wraps a GL context.
    ///
    /// # Tracked state
    ///
    /// The returned context tracks the active program and the viewport itself, and only issues a
    /// GL call when the tracked value changes. This is only correct if:
    ///
    /// - the `gl` context is in its default state (no program in use, viewport untouched), and;
    /// - the `gl` context is not modified through another handle for as long as the returned
    ///   context remains alive.
    ///
    /// Otherwise the tracked state goes stale and state changes may be skipped.
    pub fn from_gl_context(gl: G) -> Self {
        let id = ID_GEN.with(|id_gen| id_gen.next());

        SingleThreadedContext {
            connection: Rc::new(RefCell::new(Connection::new(id, gl))),
            id,
        }
    }
}

impl<G> Clone for SingleThreadedContext<G>
where
    G: GlContext,
{
    fn clone(&self) -> Self {
        SingleThreadedContext {
            connection: self.connection.clone(),
            id: self.id,
        }
    }
}

impl<G> RenderingContext for SingleThreadedContext<G>
where
    G: GlContext,
{
    type Gl = G;

    fn id(&self) -> usize {
        self.id
    }

    fn create_vertex_shader(&self, source: &str) -> Result<VertexShader<G>, ShaderCompilationError> {
        VertexShader::new(&self.connection.borrow(), source)
    }

    fn create_fragment_shader(
        &self,
        source: &str,
    ) -> Result<FragmentShader<G>, ShaderCompilationError> {
        FragmentShader::new(&self.connection.borrow(), source)
    }

    fn create_program(
        &self,
        vertex_shader: &VertexShader<G>,
        fragment_shader: &FragmentShader<G>,
    ) -> Result<Program<G>, ShaderLinkingError> {
        Program::link(&self.connection.borrow(), vertex_shader, fragment_shader)
    }

    fn submit<T>(&self, task: T) -> T::Output
    where
        T: GpuTask<Connection<G>>,
    {
        let task_context = task.context_id();

        if !task_context.is_compatible(self.id) {
            panic!(
                "cannot submit a task bound to {:?} to context {}",
                task_context, self.id
            );
        }

        task.execute(&mut self.connection.borrow_mut())
    }
}

#[derive(Debug, Error)]
pub enum InitError {
    #[error("no global `window` is available")]
    NoWindow,
    #[error("the window's inner size is unavailable")]
    ViewportUnavailable,
    #[error("requesting a WebGL 2.0 context failed: {0}")]
    ContextRequest(String),
    #[error("the canvas does not support WebGL 2.0")]
    WebGl2Unsupported,
}

impl From<InitError> for JsValue {
    fn from(error: InitError) -> Self {
        js_sys::Error::new(&error.to_string()).into()
    }
}

/// Obtains a WebGL 2.0 context for the `canvas` and sizes the canvas to the browser viewport.
///
/// The canvas' drawing buffer is resized once to the window's inner size; it is not resized when
/// the window changes afterwards. Returns the rendering context and the default render target,
/// whose viewport already covers the whole canvas.
///
/// # Tracked state
///
/// The `canvas` must not have handed out a `webgl2` context before, and the returned context must
/// be the only handle through which its GL state is modified; see
/// [SingleThreadedContext::from_gl_context].
pub fn init(
    canvas: &HtmlCanvasElement,
    options: &ContextOptions,
) -> Result<(SingleThreadedContext, DefaultRenderTarget), InitError> {
    let window = web_sys::window().ok_or(InitError::NoWindow)?;
    let inner_width = window
        .inner_width()
        .ok()
        .and_then(|width| width.as_f64())
        .ok_or(InitError::ViewportUnavailable)?;
    let inner_height = window
        .inner_height()
        .ok()
        .and_then(|height| height.as_f64())
        .ok_or(InitError::ViewportUnavailable)?;
    let (width, height) =
        surface_dimensions(inner_width, inner_height).ok_or(InitError::ViewportUnavailable)?;

    canvas.set_width(width);
    canvas.set_height(height);

    #[allow(deprecated)]
    let attributes = JsValue::from_serde(options)
        .map_err(|err| InitError::ContextRequest(err.to_string()))?;

    let gl: Gl = canvas
        .get_context_with_context_options("webgl2", &attributes)
        .map_err(|err| InitError::ContextRequest(js_error_message(&err)))?
        .ok_or(InitError::WebGl2Unsupported)?
        .dyn_into()
        .map_err(|_| InitError::WebGl2Unsupported)?;

    let context = SingleThreadedContext::from_gl_context(gl);
    let render_target = DefaultRenderTarget::fit(&context, width, height);

    log::info!(
        "initialized WebGL 2.0 context {} with a {}x{} drawing surface",
        context.id(),
        width,
        height
    );

    Ok((context, render_target))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::{ContextId, Empty};
    use crate::test_util::RecordingGl;

    struct BoundTo(usize);

    impl GpuTask<Connection<RecordingGl>> for BoundTo {
        type Output = usize;

        fn context_id(&self) -> ContextId {
            ContextId::Id(self.0)
        }

        fn execute(self, connection: &mut Connection<RecordingGl>) -> Self::Output {
            connection.context_id()
        }
    }

    #[test]
    fn test_context_ids_are_unique() {
        let a = SingleThreadedContext::from_gl_context(RecordingGl::new());
        let b = SingleThreadedContext::from_gl_context(RecordingGl::new());

        assert_ne!(a.id(), b.id());
        assert_eq!(a.clone().id(), a.id());
    }

    #[test]
    fn test_submit_executes_task_with_own_connection() {
        let context = SingleThreadedContext::from_gl_context(RecordingGl::new());

        assert_eq!(context.submit(BoundTo(context.id())), context.id());
        context.submit(Empty);
    }

    #[test]
    #[should_panic]
    fn test_submit_task_bound_to_other_context() {
        let context = SingleThreadedContext::from_gl_context(RecordingGl::new());
        let other = SingleThreadedContext::from_gl_context(RecordingGl::new());

        context.submit(BoundTo(other.id()));
    }
}
