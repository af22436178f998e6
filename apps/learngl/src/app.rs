use crate::scene::{Frame, Scene, SceneContext};
use crate::settings::Settings;
use crate::tutorials::Tutorial;
use anyhow::Context;
use learngl_camera::Camera;
use learngl_input::{Action, CameraController, KeyBindings, KeyState};
use learngl_render_gl::GlWindow;
use std::time::Instant;
use winit::application::ApplicationHandler;
use winit::event::{DeviceEvent, DeviceId, ElementState, KeyEvent, MouseScrollDelta, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::PhysicalKey;
use winit::window::WindowId;

/// Frame deltas above this are clamped so a stall does not teleport the camera.
const MAX_FRAME_DT: f32 = 0.1;

/// Pixels of touchpad scroll per wheel line.
const PIXELS_PER_LINE: f32 = 20.0;

/// The winit application running one tutorial scene.
pub struct App {
    tutorial: Tutorial,
    settings: Settings,
    window: Option<GlWindow>,
    scene: Option<Box<dyn Scene>>,
    camera: Camera,
    controller: CameraController,
    keys: KeyState,
    cursor_captured: bool,
    started: Instant,
    last_frame: Instant,
    /// First fatal error; `main` returns it once the loop exits.
    pub failure: Option<anyhow::Error>,
}

impl App {
    pub fn new(tutorial: Tutorial, settings: Settings) -> Self {
        let now = Instant::now();
        Self {
            tutorial,
            camera: Camera::new(settings.camera),
            controller: CameraController::new(KeyBindings::default()),
            settings,
            window: None,
            scene: None,
            keys: KeyState::new(),
            cursor_captured: false,
            started: now,
            last_frame: now,
            failure: None,
        }
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> anyhow::Result<()> {
        let window = GlWindow::new(event_loop, &self.settings.window).context("creating GL window")?;
        let ctx = SceneContext {
            gl: window.gl(),
            settings: &self.settings,
        };
        let scene = self.tutorial.build(&ctx).with_context(|| format!("building {:?}", self.tutorial))?;

        self.cursor_captured = self.tutorial.uses_camera() && self.settings.capture_cursor;
        if self.cursor_captured {
            window.capture_cursor(true);
        }
        window.resize(window.size());

        self.scene = Some(scene);
        self.window = Some(window);
        self.started = Instant::now();
        self.last_frame = self.started;
        Ok(())
    }

    /// Destroy the scene while the context is still current, then leave the loop.
    fn shutdown(&mut self, event_loop: &ActiveEventLoop) {
        if let (Some(scene), Some(window)) = (self.scene.take(), &self.window) {
            scene.destroy(window.gl());
            tracing::info!("scene destroyed");
        }
        event_loop.exit();
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        tracing::error!("{err:#}");
        self.failure.get_or_insert(err);
        self.shutdown(event_loop);
    }

    fn handle_key(&mut self, event_loop: &ActiveEventLoop, event: KeyEvent) {
        let PhysicalKey::Code(key) = event.physical_key else {
            return;
        };
        let pressed = event.state == ElementState::Pressed;
        self.keys.set(key, pressed);
        if pressed && self.controller.bindings().action(key) == Some(Action::Exit) {
            tracing::info!("exit requested");
            self.shutdown(event_loop);
        }
    }

    fn frame(&mut self) -> anyhow::Result<()> {
        let now = Instant::now();
        let dt = (now - self.last_frame).as_secs_f32().min(MAX_FRAME_DT);
        self.last_frame = now;

        if self.tutorial.uses_camera() {
            self.controller.update(&mut self.camera, &self.keys, dt);
        }

        let (Some(window), Some(scene)) = (&self.window, &mut self.scene) else {
            return Ok(());
        };
        let frame = Frame {
            time: (now - self.started).as_secs_f32(),
            aspect: window.aspect_ratio(),
            camera: &self.camera,
        };
        scene.render(window.gl(), &frame);
        window.swap_buffers().context("presenting frame")?;
        Ok(())
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(e) = self.init(event_loop) {
            self.fail(event_loop, e);
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => self.shutdown(event_loop),
            WindowEvent::Resized(size) => {
                if let Some(window) = &self.window {
                    window.resize(size);
                }
            }
            WindowEvent::KeyboardInput { event, .. } => self.handle_key(event_loop, event),
            WindowEvent::Focused(false) => self.controller.focus_lost(&mut self.keys),
            WindowEvent::CursorMoved { position, .. } => {
                if self.tutorial.uses_camera() && !self.cursor_captured {
                    self.controller
                        .cursor_moved(&mut self.camera, position.x as f32, position.y as f32);
                }
            }
            WindowEvent::CursorLeft { .. } => self.controller.cursor_left(),
            WindowEvent::MouseWheel { delta, .. } => {
                if self.tutorial.uses_camera() {
                    let y = match delta {
                        MouseScrollDelta::LineDelta(_, y) => y,
                        MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / PIXELS_PER_LINE,
                    };
                    self.controller.scrolled(&mut self.camera, y);
                }
            }
            WindowEvent::RedrawRequested => {
                if let Err(e) = self.frame() {
                    self.fail(event_loop, e);
                }
            }
            _ => {}
        }
    }

    fn device_event(&mut self, _event_loop: &ActiveEventLoop, _device_id: DeviceId, event: DeviceEvent) {
        if let DeviceEvent::MouseMotion { delta } = event {
            if self.cursor_captured && self.tutorial.uses_camera() {
                self.controller
                    .mouse_delta(&mut self.camera, delta.0 as f32, delta.1 as f32);
            }
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        // Platform teardown without a close request.
        if let (Some(scene), Some(window)) = (self.scene.take(), &self.window) {
            scene.destroy(window.gl());
        }
    }
}
