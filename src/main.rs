//! QSN - Quasicrystalline Spin Network viewer
//!
//! Opens a window and redraws a freshly generated tetrahedron field whenever
//! the window asks for it or the camera moves.

use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::WindowId,
};

use qsn::config::AppConfig;
use qsn::systems::{is_drawable_size, RenderError, RenderSystem, SceneSystem, WindowSystem};
use qsn_core::Tetrahedron;
use qsn_input::CameraController;

/// Main application state
struct App {
    /// Application configuration
    config: AppConfig,
    window: Option<WindowSystem>,
    render: Option<RenderSystem>,
    scene: SceneSystem,
    controller: CameraController,
}

impl App {
    fn new() -> Self {
        let config = AppConfig::load().unwrap_or_else(|e| {
            log::warn!("Failed to load config: {}. Using defaults.", e);
            AppConfig::default()
        });

        let scene = SceneSystem::new(
            config.scene.to_assembler(),
            config.scene.to_random_source(),
        );
        let controller = config.camera.to_controller();

        log::info!(
            "Generating {} tetrahedra per frame (seed {})",
            config.scene.num_tetrahedra,
            config.scene.seed
        );

        Self {
            config,
            window: None,
            render: None,
            scene,
            controller,
        }
    }

    fn request_redraw(&self) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    /// Generate the next frame, but only if there is a surface to draw it on
    fn next_drawable_frame(&mut self) -> Option<Vec<Tetrahedron>> {
        self.render.as_ref()?;
        Some(self.scene.next_frame())
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let Some(frame) = self.next_drawable_frame() else {
            return;
        };
        let Some(render) = &mut self.render else {
            return;
        };

        match render.render_frame(&frame, &self.controller) {
            Ok(()) => {}
            Err(RenderError::SurfaceLost) => {
                render.reconfigure();
                self.request_redraw();
            }
            Err(RenderError::OutOfMemory) => {
                log::error!("Out of GPU memory");
                event_loop.exit();
            }
            Err(e) => log::warn!("Render error: {}", e),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = WindowSystem::create(event_loop, &self.config.window)
            .expect("Failed to create window");

        let render = RenderSystem::new(
            window.window().clone(),
            &self.config.rendering,
            self.config.camera.clone(),
            self.config.window.vsync,
            self.scene.assembler().triangle_count(),
        )
        .expect("Failed to initialize GPU");

        window.request_redraw();
        self.window = Some(window);
        self.render = Some(render);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(physical_size) => {
                // Minimised windows report a zero size and are not redrawn
                if !is_drawable_size(physical_size.width, physical_size.height) {
                    return;
                }
                if let Some(render) = &mut self.render {
                    render.resize(physical_size.width, physical_size.height);
                }
                self.request_redraw();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    self.controller.process_keyboard(key, event.state);
                }

                if self.controller.take_redraw_request() {
                    if let Some(window) = &self.window {
                        window.update_title(&self.controller.status());
                        window.request_redraw();
                    }
                }
            }

            WindowEvent::RedrawRequested => self.redraw(event_loop),

            _ => {}
        }
    }
}

fn main() {
    // Initialize logging
    env_logger::init();
    log::info!("Starting QSN");

    let event_loop = EventLoop::new().expect("Failed to create event loop");
    // Frames are drawn on demand, not continuously
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = App::new();
    event_loop.run_app(&mut app).expect("Event loop error");
}
