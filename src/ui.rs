//! Optional egui parameter panel, available with the `egui` feature.
//!
//! The panel edits a scratch copy of [`GalaxyConfig`]; nothing touches the
//! live star field until the user applies the changes, at which point the
//! app regenerates a fresh field and swaps it in whole.

use std::sync::Arc;

use winit::window::Window;

use crate::config::GalaxyConfig;
use crate::error::ConfigError;

/// Egui plumbing: context, winit state, and wgpu renderer.
pub struct EguiIntegration {
    pub ctx: egui::Context,
    state: egui_winit::State,
    renderer: egui_wgpu::Renderer,
}

/// Output from one egui frame, ready for painting.
pub struct EguiFrameOutput {
    pub paint_jobs: Vec<egui::ClippedPrimitive>,
    pub textures_delta: egui::TexturesDelta,
    pub pixels_per_point: f32,
}

impl EguiIntegration {
    pub fn new(
        device: &wgpu::Device,
        output_format: wgpu::TextureFormat,
        window: &Arc<Window>,
    ) -> Self {
        let ctx = egui::Context::default();

        let mut style = egui::Style::default();
        style.visuals = egui::Visuals::dark();
        style.visuals.window_shadow = egui::Shadow::NONE;
        style.visuals.popup_shadow = egui::Shadow::NONE;
        ctx.set_style(style);

        let state = egui_winit::State::new(
            ctx.clone(),
            egui::ViewportId::ROOT,
            window.as_ref(),
            Some(window.scale_factor() as f32),
            None,
            None,
        );

        let renderer = egui_wgpu::Renderer::new(
            device,
            output_format,
            None,  // depth format
            1,     // msaa samples
            false, // dithering
        );

        Self {
            ctx,
            state,
            renderer,
        }
    }

    /// Process a winit event.
    ///
    /// Returns true if egui consumed the event (don't pass to camera controls).
    pub fn on_window_event(&mut self, window: &Window, event: &winit::event::WindowEvent) -> bool {
        let response = self.state.on_window_event(window, event);
        response.consumed
    }

    /// Begin a new frame. Call before building the panel.
    pub fn begin_frame(&mut self, window: &Window) {
        let raw_input = self.state.take_egui_input(window);
        self.ctx.begin_frame(raw_input);
    }

    /// End the frame and collect what needs painting.
    pub fn end_frame(&mut self, window: &Window) -> EguiFrameOutput {
        let full_output = self.ctx.end_frame();

        self.state
            .handle_platform_output(window, full_output.platform_output);

        let paint_jobs = self
            .ctx
            .tessellate(full_output.shapes, full_output.pixels_per_point);

        EguiFrameOutput {
            paint_jobs,
            textures_delta: full_output.textures_delta,
            pixels_per_point: full_output.pixels_per_point,
        }
    }

    /// Paint the frame output on top of an already-rendered view.
    pub fn paint(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
        surface_config: &wgpu::SurfaceConfiguration,
        output: &EguiFrameOutput,
    ) {
        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [surface_config.width, surface_config.height],
            pixels_per_point: output.pixels_per_point,
        };

        for (id, image_delta) in &output.textures_delta.set {
            self.renderer
                .update_texture(device, queue, *id, image_delta);
        }
        self.renderer.update_buffers(
            device,
            queue,
            encoder,
            &output.paint_jobs,
            &screen_descriptor,
        );

        {
            let mut render_pass = encoder
                .begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("Egui Pass"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load,
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    timestamp_writes: None,
                    occlusion_query_set: None,
                })
                .forget_lifetime();

            self.renderer
                .render(&mut render_pass, &output.paint_jobs, &screen_descriptor);
        }

        for id in &output.textures_delta.free {
            self.renderer.free_texture(id);
        }
    }
}

/// Floating window with sliders for every galaxy parameter.
pub struct ConfigPanel {
    edited: GalaxyConfig,
    error: Option<ConfigError>,
}

impl ConfigPanel {
    pub fn new(config: &GalaxyConfig) -> Self {
        Self {
            edited: config.clone(),
            error: None,
        }
    }

    /// Build the panel. Returns a validated config when the user hits
    /// "Regenerate".
    pub fn show(
        &mut self,
        ctx: &egui::Context,
        star_count: usize,
        fps: f32,
        paused: &mut bool,
    ) -> Option<GalaxyConfig> {
        let mut applied = None;

        egui::Window::new("Galaxy")
            .default_pos([10.0, 10.0])
            .show(ctx, |ui| {
                ui.label(format!("{} stars — {:.0} fps", star_count, fps));
                ui.checkbox(paused, "Pause");
                ui.separator();

                ui.add(
                    egui::Slider::new(&mut self.edited.num_particles, 1_000..=200_000)
                        .text("Particles"),
                );
                ui.add(egui::Slider::new(&mut self.edited.num_orbits, 1..=120).text("Orbits"));
                ui.add(
                    egui::Slider::new(&mut self.edited.ellipse_scale, 0.5..=10.0)
                        .text("Ellipse scale"),
                );
                ui.add(
                    egui::Slider::new(&mut self.edited.speed_factor, 0.1..=5.0)
                        .text("Speed factor"),
                );
                ui.add(
                    egui::Slider::new(&mut self.edited.size_scale, 0.0..=1.0).text("Size scale"),
                );

                ui.horizontal(|ui| {
                    let mut start = self.edited.start_color.to_array();
                    if egui::color_picker::color_edit_button_rgb(ui, &mut start).changed() {
                        self.edited.start_color = start.into();
                    }
                    ui.label("Inner color");
                });
                ui.horizontal(|ui| {
                    let mut end = self.edited.end_color.to_array();
                    if egui::color_picker::color_edit_button_rgb(ui, &mut end).changed() {
                        self.edited.end_color = end.into();
                    }
                    ui.label("Outer color");
                });

                ui.separator();
                if ui.button("Regenerate").clicked() {
                    match self.edited.validate() {
                        Ok(()) => {
                            self.error = None;
                            applied = Some(self.edited.clone());
                        }
                        Err(e) => self.error = Some(e),
                    }
                }
                if let Some(e) = self.error {
                    ui.colored_label(egui::Color32::LIGHT_RED, e.to_string());
                }
            });

        applied
    }
}
