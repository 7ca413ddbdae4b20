use serde_derive::Serialize;

/// Hints to the browser which GPU configuration is preferred for the context.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PowerPreference {
    Default,
    HighPerformance,
    LowPower,
}

impl Default for PowerPreference {
    fn default() -> Self {
        PowerPreference::Default
    }
}

/// Attributes used when requesting a WebGL 2.0 context from a canvas.
///
/// Construct with [ContextOptions::begin] to override individual attributes, or use
/// [ContextOptions::default]:
///
/// ```
/// use fullscreen_tri::runtime::{ContextOptions, PowerPreference};
///
/// let options = ContextOptions::begin()
///     .antialias(false)
///     .power_preference(PowerPreference::LowPower)
///     .finish();
///
/// assert!(!options.antialias());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContextOptions {
    alpha: bool,
    antialias: bool,
    depth: bool,
    stencil: bool,
    premultiplied_alpha: bool,
    preserve_drawing_buffer: bool,
    power_preference: PowerPreference,
    fail_if_major_performance_caveat: bool,
}

impl ContextOptions {
    pub fn begin() -> ContextOptionsBuilder {
        ContextOptionsBuilder {
            options: ContextOptions::default(),
        }
    }

    pub fn alpha(&self) -> bool {
        self.alpha
    }

    pub fn antialias(&self) -> bool {
        self.antialias
    }

    pub fn depth(&self) -> bool {
        self.depth
    }

    pub fn stencil(&self) -> bool {
        self.stencil
    }

    pub fn premultiplied_alpha(&self) -> bool {
        self.premultiplied_alpha
    }

    pub fn preserve_drawing_buffer(&self) -> bool {
        self.preserve_drawing_buffer
    }

    pub fn power_preference(&self) -> PowerPreference {
        self.power_preference
    }

    pub fn fail_if_major_performance_caveat(&self) -> bool {
        self.fail_if_major_performance_caveat
    }
}

// A fullscreen triangle never needs depth or stencil buffers.
impl Default for ContextOptions {
    fn default() -> Self {
        ContextOptions {
            alpha: true,
            antialias: true,
            depth: false,
            stencil: false,
            premultiplied_alpha: true,
            preserve_drawing_buffer: false,
            power_preference: PowerPreference::default(),
            fail_if_major_performance_caveat: false,
        }
    }
}

pub struct ContextOptionsBuilder {
    options: ContextOptions,
}

impl ContextOptionsBuilder {
    pub fn alpha(mut self, alpha: bool) -> Self {
        self.options.alpha = alpha;

        self
    }

    pub fn antialias(mut self, antialias: bool) -> Self {
        self.options.antialias = antialias;

        self
    }

    pub fn depth(mut self, depth: bool) -> Self {
        self.options.depth = depth;

        self
    }

    pub fn stencil(mut self, stencil: bool) -> Self {
        self.options.stencil = stencil;

        self
    }

    pub fn premultiplied_alpha(mut self, premultiplied_alpha: bool) -> Self {
        self.options.premultiplied_alpha = premultiplied_alpha;

        self
    }

    pub fn preserve_drawing_buffer(mut self, preserve_drawing_buffer: bool) -> Self {
        self.options.preserve_drawing_buffer = preserve_drawing_buffer;

        self
    }

    pub fn power_preference(mut self, power_preference: PowerPreference) -> Self {
        self.options.power_preference = power_preference;

        self
    }

    pub fn fail_if_major_performance_caveat(
        mut self,
        fail_if_major_performance_caveat: bool,
    ) -> Self {
        self.options.fail_if_major_performance_caveat = fail_if_major_performance_caveat;

        self
    }

    pub fn finish(self) -> ContextOptions {
        self.options
    }
}
