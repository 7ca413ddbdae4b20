use crate::rendering::viewport::ViewportCommand;
use crate::runtime::RenderingContext;

/// The drawing surface the browser displays: the canvas' default framebuffer.
///
/// Its dimensions are fixed when it is created; the surface is not resized afterwards.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct DefaultRenderTarget {
    context_id: usize,
    width: u32,
    height: u32,
}

impl DefaultRenderTarget {
    /// Describes a `width` by `height` pixel surface for the `context` and points the context's
    /// viewport at the whole surface.
    pub fn fit<Rc>(context: &Rc, width: u32, height: u32) -> Self
    where
        Rc: RenderingContext,
    {
        context.submit(ViewportCommand::new(context.id(), width, height));

        DefaultRenderTarget {
            context_id: context.id(),
            width,
            height,
        }
    }

    pub fn context_id(&self) -> usize {
        self.context_id
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

/// Converts the window's inner size (in CSS pixels, as reported by the browser) into drawing
/// surface dimensions.
///
/// Fractional sizes are floored and each dimension is at least `1`. Returns `None` if either
/// dimension is not a finite number.
pub fn surface_dimensions(inner_width: f64, inner_height: f64) -> Option<(u32, u32)> {
    fn dimension(value: f64) -> Option<u32> {
        if value.is_finite() {
            Some((value.floor() as u32).max(1))
        } else {
            None
        }
    }

    Some((dimension(inner_width)?, dimension(inner_height)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::SingleThreadedContext;
    use crate::test_util::{GlCall, RecordingGl};

    #[test]
    fn test_fit_sets_viewport_once() {
        let gl = RecordingGl::new();
        let context = SingleThreadedContext::from_gl_context(gl.clone());

        let render_target = DefaultRenderTarget::fit(&context, 1024, 768);

        assert_eq!(render_target.dimensions(), (1024, 768));
        assert_eq!(render_target.context_id(), context.id());
        assert_eq!(gl.calls(), vec![GlCall::Viewport(0, 0, 1024, 768)]);
    }

    #[test]
    fn test_surface_dimensions() {
        assert_eq!(surface_dimensions(1920.0, 1080.0), Some((1920, 1080)));
        assert_eq!(surface_dimensions(799.6, 600.2), Some((799, 600)));
    }

    #[test]
    fn test_surface_dimensions_are_at_least_one_pixel() {
        assert_eq!(surface_dimensions(0.0, 0.4), Some((1, 1)));
        assert_eq!(surface_dimensions(-20.0, 300.0), Some((1, 300)));
    }

    #[test]
    fn test_surface_dimensions_reject_non_finite() {
        assert_eq!(surface_dimensions(f64::NAN, 300.0), None);
        assert_eq!(surface_dimensions(300.0, f64::INFINITY), None);
    }
}
