//! Application shell: window lifecycle, event dispatch, and the frame loop.

use std::sync::Arc;
use std::time::Instant;

use winit::{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    event::{ElementState, MouseButton, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{CursorGrabMode, Window, WindowAttributes},
};

use crate::gfx::camera::Camera;
use crate::gfx::render_engine::{RenderEngine, RenderError};
use crate::input::InputState;
use crate::physics::Player;
use crate::settings::Settings;

pub struct WalkApp {
    event_loop: Option<EventLoop<()>>,
    app_state: AppState,
}

struct AppState {
    settings: Settings,
    window: Option<Arc<Window>>,
    render_engine: Option<RenderEngine>,
    input: InputState,
    player: Player,
    last_frame: Option<Instant>,
    init_error: Option<RenderError>,
}

impl WalkApp {
    /// Creates the application with default settings.
    pub fn new() -> anyhow::Result<Self> {
        let event_loop = EventLoop::new()?;

        Ok(Self {
            event_loop: Some(event_loop),
            app_state: AppState {
                settings: Settings::default(),
                window: None,
                render_engine: None,
                input: InputState::new(),
                player: Player::new(),
                last_frame: None,
                init_error: None,
            },
        })
    }

    /// Runs the event loop to completion (consumes self).
    pub fn run(mut self) -> anyhow::Result<()> {
        let event_loop = self
            .event_loop
            .take()
            .expect("Event loop already consumed");
        event_loop.set_control_flow(ControlFlow::Poll);

        event_loop.run_app(&mut self.app_state)?;

        if let Some(err) = self.app_state.init_error.take() {
            return Err(err.into());
        }
        Ok(())
    }
}

impl AppState {
    fn capture_cursor(&mut self, window: &Window) {
        // Locked is unsupported on some platforms; fall back to Confined.
        let grabbed = window
            .set_cursor_grab(CursorGrabMode::Locked)
            .or_else(|_| window.set_cursor_grab(CursorGrabMode::Confined));
        if let Err(err) = grabbed {
            log::warn!("cursor grab unavailable: {err}");
        }
        window.set_cursor_visible(false);
        self.input.set_cursor_captured(true);
    }

    fn release_cursor(&mut self, window: &Window) {
        let _ = window.set_cursor_grab(CursorGrabMode::None);
        window.set_cursor_visible(true);
        self.input.set_cursor_captured(false);
    }

    /// One frame: drain input, step physics, upload the camera, draw.
    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let Some(render_engine) = self.render_engine.as_mut() else {
            return;
        };

        let now = Instant::now();
        let dt = self
            .last_frame
            .map(|last| now.duration_since(last).as_secs_f32())
            .unwrap_or(0.0);
        self.last_frame = Some(now);

        let frame_input = self.input.take_frame_input();
        self.player.update(dt, &frame_input, &self.settings);

        let camera =
            Camera::from_player(&self.player, &self.settings, render_engine.aspect_ratio());
        render_engine.update(camera.build_uniform());

        match render_engine.render_frame() {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                render_engine.reconfigure();
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("surface out of memory, exiting");
                event_loop.exit();
            }
            Err(err) => {
                log::warn!("dropped frame: {err}");
            }
        }
    }
}

impl ApplicationHandler for AppState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let (width, height) = self.settings.window_size;
        let attributes = WindowAttributes::default()
            .with_title("gridwalk")
            .with_inner_size(winit::dpi::LogicalSize::new(width, height));

        let window = match event_loop.create_window(attributes) {
            Ok(window) => Arc::new(window),
            Err(err) => {
                log::error!("failed to create window: {err}");
                event_loop.exit();
                return;
            }
        };

        let (width, height) = window.inner_size().into();
        let engine = pollster::block_on(RenderEngine::new(
            window.clone(),
            width,
            height,
            &self.settings,
        ));
        match engine {
            Ok(engine) => {
                self.render_engine = Some(engine);
                self.capture_cursor(&window);
                self.window = Some(window);
                log::info!("window and GPU initialized ({width}x{height})");
            }
            Err(err) => {
                self.init_error = Some(err);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        let Some(window) = self.window.clone() else {
            return;
        };

        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                if matches!(event.physical_key, PhysicalKey::Code(KeyCode::Escape))
                    && event.state == ElementState::Pressed
                {
                    // Escape hands the cursor back to the OS; the demo keeps
                    // running and a click re-captures it.
                    self.release_cursor(&window);
                } else {
                    self.input.process_key_event(&event);
                }
            }
            WindowEvent::MouseInput {
                button: MouseButton::Left,
                state: ElementState::Pressed,
                ..
            } => {
                if !self.input.cursor_captured() {
                    self.capture_cursor(&window);
                }
            }
            WindowEvent::Resized(PhysicalSize { width, height }) => {
                if let Some(render_engine) = self.render_engine.as_mut() {
                    render_engine.resize(width, height);
                }
            }
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::RedrawRequested => {
                self.redraw(event_loop);
            }
            _ => (),
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: winit::event::DeviceId,
        event: winit::event::DeviceEvent,
    ) {
        if let winit::event::DeviceEvent::MouseMotion { delta } = event {
            self.input.process_mouse_motion(delta);
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(ref window) = self.window {
            window.request_redraw();
        }
    }
}
