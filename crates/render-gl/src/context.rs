use crate::error::GlError;
use glow::HasContext;
use glutin::config::{Config, ConfigTemplateBuilder, GlConfig};
use glutin::context::{
    ContextApi, ContextAttributesBuilder, GlProfile, NotCurrentGlContext, PossiblyCurrentContext, Version,
};
use glutin::display::{GetGlDisplay, GlDisplay};
use glutin::surface::{GlSurface, Surface, SwapInterval, WindowSurface};
use glutin_winit::{DisplayBuilder, GlWindow as _};
use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;
use winit::dpi::{LogicalSize, PhysicalSize};
use winit::event_loop::ActiveEventLoop;
use winit::raw_window_handle::HasWindowHandle;
use winit::window::{CursorGrabMode, Window};

/// Window and context creation parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// Requested core-profile version as `(major, minor)`.
    pub gl_version: (u8, u8),
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "LearnOpenGL".into(),
            width: 800,
            height: 600,
            gl_version: (3, 3),
            vsync: true,
        }
    }
}

/// A window with a current OpenGL core-profile context.
///
/// Field order matters: the GL objects drop before the window they render to.
pub struct GlWindow {
    gl: glow::Context,
    surface: Surface<WindowSurface>,
    context: PossiblyCurrentContext,
    window: Window,
}

/// Prefer the config with the most multisample samples.
///
/// glutin-winit only calls the picker after `find_configs` succeeded, and that
/// returns `Err` instead of an empty iterator, so `build` reports a missing
/// config as an error before this runs.
fn pick_config(configs: Box<dyn Iterator<Item = Config> + '_>) -> Config {
    configs
        .reduce(|best, c| if c.num_samples() > best.num_samples() { c } else { best })
        .expect("find_configs yields at least one config")
}

impl GlWindow {
    pub fn new(event_loop: &ActiveEventLoop, config: &WindowConfig) -> Result<Self, GlError> {
        let attributes = Window::default_attributes()
            .with_title(config.title.clone())
            .with_inner_size(LogicalSize::new(config.width, config.height));
        let template = ConfigTemplateBuilder::new().with_alpha_size(8).with_depth_size(24);

        let (window, gl_config) = DisplayBuilder::new()
            .with_window_attributes(Some(attributes))
            .build(event_loop, template, pick_config)
            .map_err(|e| GlError::Context(e.to_string()))?;
        let window = window.ok_or_else(|| GlError::Context("display builder created no window".into()))?;

        let raw_handle = window
            .window_handle()
            .map_err(|e| GlError::Context(e.to_string()))?
            .as_raw();
        let display = gl_config.display();
        let (major, minor) = config.gl_version;
        let context_attributes = ContextAttributesBuilder::new()
            .with_profile(GlProfile::Core)
            .with_context_api(ContextApi::OpenGl(Some(Version::new(major, minor))))
            .build(Some(raw_handle));

        let surface_attributes = window
            .build_surface_attributes(Default::default())
            .map_err(|e| GlError::Context(e.to_string()))?;

        // SAFETY: the raw handle and surface attributes come from `window`,
        // which this struct keeps alive for as long as the context.
        let (surface, context) = unsafe {
            let not_current = display.create_context(&gl_config, &context_attributes)?;
            let surface = display.create_window_surface(&gl_config, &surface_attributes)?;
            let context = not_current.make_current(&surface)?;
            (surface, context)
        };

        if config.vsync {
            if let Err(e) = surface.set_swap_interval(&context, SwapInterval::Wait(NonZeroU32::MIN)) {
                tracing::warn!("failed to enable vsync: {e}");
            }
        }

        // SAFETY: the context was made current on this thread above.
        let gl = unsafe { glow::Context::from_loader_function_cstr(|name| display.get_proc_address(name)) };

        tracing::info!(
            version = ?gl.version(),
            samples = gl_config.num_samples(),
            "OpenGL context created"
        );

        Ok(Self {
            gl,
            surface,
            context,
            window,
        })
    }

    pub fn gl(&self) -> &glow::Context {
        &self.gl
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn size(&self) -> PhysicalSize<u32> {
        self.window.inner_size()
    }

    pub fn aspect_ratio(&self) -> f32 {
        let size = self.size();
        size.width as f32 / size.height.max(1) as f32
    }

    /// Resize the surface and the viewport. Zero sizes (minimized) are ignored.
    pub fn resize(&self, size: PhysicalSize<u32>) {
        let (Some(width), Some(height)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height)) else {
            return;
        };
        self.surface.resize(&self.context, width, height);
        unsafe {
            self.gl.viewport(0, 0, size.width as i32, size.height as i32);
        }
    }

    pub fn swap_buffers(&self) -> Result<(), GlError> {
        self.surface.swap_buffers(&self.context)?;
        Ok(())
    }

    /// Hide and lock the cursor for mouse look, or release it.
    pub fn capture_cursor(&self, captured: bool) {
        let grab = if captured {
            self.window
                .set_cursor_grab(CursorGrabMode::Locked)
                .or_else(|_| self.window.set_cursor_grab(CursorGrabMode::Confined))
        } else {
            self.window.set_cursor_grab(CursorGrabMode::None)
        };
        if let Err(e) = grab {
            tracing::warn!("cursor grab not supported: {e}");
        }
        self.window.set_cursor_visible(!captured);
    }

    pub fn request_redraw(&self) {
        self.window.request_redraw();
    }
}
