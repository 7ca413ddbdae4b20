// Fills the browser viewport with a single triangle.
//
// A triangle that covers the whole viewport is the cheapest way to run a fragment shader once for
// every pixel on the screen: the vertex shader generates 3 clip-space positions from
// `gl_VertexID` alone, so no vertex buffers are needed. The fragment shader then uses the
// `windowSize` uniform to turn `gl_FragCoord` into normalized screen coordinates.
//
// The shader code is not compiled into the module: it is fetched from `vert.glsl` and `frag.glsl`
// next to `index.html` when the module starts, so you can edit the shaders and simply reload the
// page.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use web_sys::{window, HtmlCanvasElement};

use fullscreen_tri::fullscreen::FullscreenTriangle;
use fullscreen_tri::runtime::{self, ContextOptions, InitError, RenderingContext};
use fullscreen_tri::shader_source::ShaderSourceLocation;

mod logging;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Route panics and `log` records to the developer console, otherwise failures would be silent.
    console_error_panic_hook::set_once();
    logging::init_logging(log::LevelFilter::Info);

    // Create a new canvas element and attach it to the document body. `runtime::init` will size it
    // to match the viewport.
    let document = window()
        .and_then(|window| window.document())
        .ok_or(InitError::NoWindow)?;
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("document has no body"))?;
    let canvas: HtmlCanvasElement = document.create_element("canvas")?.dyn_into()?;

    body.append_child(&canvas)?;

    // Obtain a WebGL 2.0 context for the canvas. This returns the context we'll submit our GPU
    // tasks to and the default render target, which knows the dimensions of the drawing surface.
    let (context, render_target) = runtime::init(&canvas, &ContextOptions::default())?;

    // Fetch the shader sources. This blocks until both files have arrived.
    let sources = ShaderSourceLocation::default();
    let vertex_source = sources.fetch_sync("vert")?;
    let fragment_source = sources.fetch_sync("frag")?;

    // Compile both stages, link them into a program and look up the `windowSize` uniform. If the
    // driver rejects either shader, the error carries the driver's info log so it shows up in the
    // console.
    let triangle = FullscreenTriangle::new(&context, &vertex_source, &fragment_source)?;

    // Activate the program, set `windowSize` to the surface dimensions and draw 3 vertices as a
    // triangle fan. We only draw once: nothing changes after this.
    context.submit(triangle.frame_task(&render_target));

    log::info!(
        "drew full-screen triangle at {}x{}",
        render_target.width(),
        render_target.height()
    );

    Ok(())
}
