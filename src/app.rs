//! Viewer builder and the winit frame loop.
//!
//! One full animation pass runs per redraw: advance the clock, recompute
//! every star position for that instant, push the position buffer to the
//! GPU, draw. Camera input and the optional config panel hang off the same
//! event stream.

use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use crate::config::GalaxyConfig;
use crate::error::RunError;
use crate::field::StarField;
use crate::gpu::GpuState;
use crate::time::Time;
#[cfg(feature = "egui")]
use crate::ui::{ConfigPanel, EguiIntegration};

/// Entry point for the viewer.
///
/// ```ignore
/// use orbitfield::prelude::*;
///
/// Galaxy::new()
///     .with_config(GalaxyConfig {
///         num_particles: 50_000,
///         ..GalaxyConfig::default()
///     })
///     .run()?;
/// ```
pub struct Galaxy {
    config: GalaxyConfig,
}

impl Galaxy {
    /// Create a viewer with the default configuration.
    pub fn new() -> Self {
        Self {
            config: GalaxyConfig::default(),
        }
    }

    /// Replace the configuration.
    pub fn with_config(mut self, config: GalaxyConfig) -> Self {
        self.config = config;
        self
    }

    /// Generate the star field and run the window loop until closed.
    pub fn run(self) -> Result<(), RunError> {
        let field = StarField::generate(&self.config)?;

        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = App::new(field);
        event_loop.run_app(&mut app)?;

        match app.init_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

impl Default for Galaxy {
    fn default() -> Self {
        Self::new()
    }
}

struct App {
    window: Option<Arc<Window>>,
    gpu: Option<GpuState>,
    field: StarField,
    time: Time,
    mouse_pressed: bool,
    last_mouse_pos: Option<(f64, f64)>,
    /// Set when window or GPU setup fails; surfaced after the loop exits.
    init_error: Option<RunError>,
    #[cfg(feature = "egui")]
    ui: Option<EguiIntegration>,
    #[cfg(feature = "egui")]
    panel: ConfigPanel,
}

impl App {
    fn new(field: StarField) -> Self {
        #[cfg(feature = "egui")]
        let panel = ConfigPanel::new(field.config());

        Self {
            window: None,
            gpu: None,
            field,
            time: Time::new(),
            mouse_pressed: false,
            last_mouse_pos: None,
            init_error: None,
            #[cfg(feature = "egui")]
            ui: None,
            #[cfg(feature = "egui")]
            panel,
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let (elapsed, _) = self.time.update();

        #[cfg(feature = "egui")]
        let frame_output = self.run_panel();

        self.field.update(elapsed);

        if let Some(gpu) = &mut self.gpu {
            gpu.write_positions(self.field.positions());

            #[cfg(feature = "egui")]
            let result = {
                let ui = self.ui.as_mut();
                gpu.render(elapsed, move |device, queue, encoder, view, config| {
                    if let (Some(ui), Some(output)) = (ui, frame_output.as_ref()) {
                        ui.paint(device, queue, encoder, view, config, output);
                    }
                })
            };
            #[cfg(not(feature = "egui"))]
            let result = gpu.render(elapsed, |_, _, _, _, _| {});

            match result {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost) => gpu.resize(winit::dpi::PhysicalSize {
                    width: gpu.config.width,
                    height: gpu.config.height,
                }),
                Err(wgpu::SurfaceError::OutOfMemory) => event_loop.exit(),
                Err(e) => eprintln!("Render error: {:?}", e),
            }
        }

        if let Some(window) = &self.window {
            if self.time.frame() % 30 == 0 {
                window.set_title(&format!(
                    "orbitfield — {} stars — {:.0} fps",
                    self.field.len(),
                    self.time.fps()
                ));
            }
            window.request_redraw();
        }
    }

    /// Build the config panel for this frame; a returned config means the
    /// user applied a change and the field was regenerated and swapped.
    #[cfg(feature = "egui")]
    fn run_panel(&mut self) -> Option<crate::ui::EguiFrameOutput> {
        let (ui, window, gpu) = match (self.ui.as_mut(), self.window.as_ref(), self.gpu.as_mut()) {
            (Some(ui), Some(window), Some(gpu)) => (ui, window, gpu),
            _ => return None,
        };

        ui.begin_frame(window);

        let mut paused = self.time.is_paused();
        let applied = self
            .panel
            .show(&ui.ctx, self.field.len(), self.time.fps(), &mut paused);
        if paused != self.time.is_paused() {
            self.time.toggle_pause();
        }

        let output = ui.end_frame(window);

        if let Some(config) = applied {
            // The panel pre-validates, so generation only fails if the two
            // ever disagree; keep the old field in that case.
            match StarField::generate(&config) {
                Ok(new_field) => {
                    self.field = new_field;
                    gpu.upload_field(&self.field);
                }
                Err(e) => eprintln!("Invalid configuration: {}", e),
            }
        }

        Some(output)
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_attrs = Window::default_attributes()
            .with_title("orbitfield")
            .with_inner_size(winit::dpi::LogicalSize::new(1280, 720));

        let window = match event_loop.create_window(window_attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                self.init_error = Some(e.into());
                event_loop.exit();
                return;
            }
        };

        match pollster::block_on(GpuState::new(window.clone(), &self.field)) {
            Ok(gpu) => {
                #[cfg(feature = "egui")]
                {
                    self.ui = Some(EguiIntegration::new(
                        gpu.device(),
                        gpu.surface_format(),
                        &window,
                    ));
                }
                self.gpu = Some(gpu);
            }
            Err(e) => {
                self.init_error = Some(e.into());
                event_loop.exit();
                return;
            }
        }

        self.window = Some(window);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        #[cfg(feature = "egui")]
        if let (Some(ui), Some(window)) = (self.ui.as_mut(), self.window.as_ref()) {
            let consumed = ui.on_window_event(window, &event);
            if consumed
                && !matches!(
                    event,
                    WindowEvent::RedrawRequested | WindowEvent::CloseRequested
                )
            {
                return;
            }
        }

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(physical_size) => {
                if let Some(gpu) = &mut self.gpu {
                    gpu.resize(physical_size);
                }
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed
                    && event.physical_key == PhysicalKey::Code(KeyCode::Space)
                {
                    self.time.toggle_pause();
                }
            }
            WindowEvent::MouseInput { state, button, .. } => {
                if button == MouseButton::Left {
                    self.mouse_pressed = state == ElementState::Pressed;
                    if !self.mouse_pressed {
                        self.last_mouse_pos = None;
                    }
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                if self.mouse_pressed {
                    if let Some((last_x, last_y)) = self.last_mouse_pos {
                        let dx = (position.x - last_x) as f32;
                        let dy = (position.y - last_y) as f32;
                        if let Some(gpu) = &mut self.gpu {
                            gpu.camera.orbit(dx, dy);
                        }
                    }
                    self.last_mouse_pos = Some((position.x, position.y));
                }
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let scroll = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 * 0.1,
                };
                if let Some(gpu) = &mut self.gpu {
                    gpu.camera.zoom(scroll);
                }
            }
            WindowEvent::RedrawRequested => {
                self.redraw(event_loop);
            }
            _ => {}
        }
    }
}
