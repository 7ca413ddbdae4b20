//! Loads shader source code that is served next to the page.
//!
//! Sources are fetched with a synchronous `XMLHttpRequest`, which blocks the main thread until the
//! response has arrived. A shader called `name` is expected at `<directory>/<name>.<extension>`,
//! relative to the page:
//!
//! ```
//! use fullscreen_tri::shader_source::ShaderSourceLocation;
//!
//! let location = ShaderSourceLocation::new("shaders/", "glsl");
//!
//! assert_eq!(location.url_for("vert"), "shaders/vert.glsl");
//! ```

use thiserror::Error;
use wasm_bindgen::JsValue;
use web_sys::XmlHttpRequest;

use crate::util::js_error_message;

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ShaderSourceLocation {
    directory: String,
    extension: String,
}

impl ShaderSourceLocation {
    pub fn new<D, E>(directory: D, extension: E) -> Self
    where
        D: Into<String>,
        E: Into<String>,
    {
        let directory = directory.into();
        let directory = match directory.trim_end_matches('/') {
            "" if directory.starts_with('/') => "/".to_string(),
            trimmed => trimmed.to_string(),
        };
        let extension = extension.into().trim_start_matches('.').to_string();

        ShaderSourceLocation {
            directory,
            extension,
        }
    }

    pub fn directory(&self) -> &str {
        &self.directory
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// The page-relative URL of the shader called `name`.
    pub fn url_for(&self, name: &str) -> String {
        let mut url = String::with_capacity(
            self.directory.len() + name.len() + self.extension.len() + 2,
        );

        if !self.directory.is_empty() {
            url.push_str(&self.directory);

            if !self.directory.ends_with('/') {
                url.push('/');
            }
        }

        url.push_str(name);

        if !self.extension.is_empty() {
            url.push('.');
            url.push_str(&self.extension);
        }

        url
    }

    /// Fetches the source code of the shader called `name`, blocking until the response arrives.
    pub fn fetch_sync(&self, name: &str) -> Result<String, FetchShaderSourceError> {
        let url = self.url_for(name);
        let request_error = |err: JsValue| FetchShaderSourceError::Request {
            url: url.clone(),
            message: js_error_message(&err),
        };

        let request = XmlHttpRequest::new().map_err(&request_error)?;

        request
            .open_with_async("GET", &url, false)
            .map_err(&request_error)?;
        request.send().map_err(&request_error)?;

        let status = request.status().map_err(&request_error)?;

        if !is_success_status(status) {
            return Err(FetchShaderSourceError::Status { url, status });
        }

        let source = request
            .response_text()
            .map_err(&request_error)?
            .ok_or_else(|| FetchShaderSourceError::MissingBody { url: url.clone() })?;

        log::debug!("fetched `{}` ({} bytes)", url, source.len());

        Ok(source)
    }
}

/// Shaders are served from the directory that holds the page, with the `glsl` extension.
impl Default for ShaderSourceLocation {
    fn default() -> Self {
        ShaderSourceLocation::new("", "glsl")
    }
}

#[derive(Clone, PartialEq, Eq, Debug, Error)]
pub enum FetchShaderSourceError {
    #[error("request for `{url}` failed: {message}")]
    Request { url: String, message: String },
    #[error("request for `{url}` returned HTTP status {status}")]
    Status { url: String, status: u16 },
    #[error("response for `{url}` has no text body")]
    MissingBody { url: String },
}

impl From<FetchShaderSourceError> for JsValue {
    fn from(error: FetchShaderSourceError) -> Self {
        js_sys::Error::new(&error.to_string()).into()
    }
}

// Pages opened from `file://` report status 0 for successful requests.
fn is_success_status(status: u16) -> bool {
    status == 0 || (200..300).contains(&status)
}
