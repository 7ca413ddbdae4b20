//! Tracks the parts of the GL context state this crate modifies, so that redundant state changes
//! are never sent to the driver.

use crate::runtime::GlContext;

/// A pending update to the GL context state; updates that would not change the state are `None`.
pub trait ContextUpdate<'a, G> {
    fn apply(self, gl: &G);
}

impl<'a, F, G> ContextUpdate<'a, G> for Option<F>
where
    F: FnOnce(&G),
{
    fn apply(self, gl: &G) {
        if let Some(f) = self {
            f(gl);
        }
    }
}

pub struct DynamicState<P> {
    active_program: Option<P>,
    viewport: Option<(i32, i32, i32, i32)>,
}

impl<P> DynamicState<P>
where
    P: Clone + PartialEq,
{
    /// The state of a freshly created context: no program in use and the viewport untouched.
    pub fn initial() -> Self {
        DynamicState {
            active_program: None,
            viewport: None,
        }
    }

    pub fn active_program(&self) -> Option<&P> {
        self.active_program.as_ref()
    }

    pub fn set_active_program<'a, G>(&mut self, program: Option<&'a P>) -> impl ContextUpdate<'a, G>
    where
        G: GlContext<Program = P>,
    {
        if program != self.active_program.as_ref() {
            self.active_program = program.cloned();

            Some(move |gl: &G| gl.use_program(program))
        } else {
            None
        }
    }

    pub fn viewport(&self) -> Option<(i32, i32, i32, i32)> {
        self.viewport
    }

    pub fn set_viewport<G>(
        &mut self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    ) -> impl ContextUpdate<'static, G>
    where
        G: GlContext,
    {
        let viewport = Some((x, y, width, height));

        if viewport != self.viewport {
            self.viewport = viewport;

            Some(move |gl: &G| gl.viewport(x, y, width, height))
        } else {
            None
        }
    }
}
