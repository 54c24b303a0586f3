//! Skyroll - parallax backdrop demo
//!
//! Opens a window, loads the backdrop texture, and scrolls it with a
//! keyboard-driven horizontal drift and a self-driven vertical oscillation.

use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::WindowId,
};

use skyroll::config::AppConfig;
use skyroll::input::{InputAction, InputMapper};
use skyroll::systems::{RenderError, RenderSystem, SimulationSystem, WindowSystem};
use skyroll_core::{FrameStats, ScrollState};
use skyroll_input::ScrollController;

/// Main application state
struct App {
    /// Application configuration
    config: AppConfig,
    window: Option<WindowSystem>,
    render: Option<RenderSystem>,
    scroll: ScrollState,
    controller: ScrollController,
    simulation: SimulationSystem,
    stats: FrameStats,
}

impl App {
    fn new() -> Self {
        // Load configuration
        let config = AppConfig::load().unwrap_or_else(|e| {
            log::warn!("Failed to load config: {}. Using defaults.", e);
            AppConfig::default()
        });

        let scroll = ScrollState::new(config.scroll.to_scroll_params());

        Self {
            config,
            window: None,
            render: None,
            scroll,
            controller: ScrollController::new(),
            simulation: SimulationSystem::new(),
            stats: FrameStats::new(),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window = WindowSystem::create(event_loop, &self.config.window)
                .unwrap_or_else(|e| panic!("Failed to create window: {}", e));

            let render = RenderSystem::new(
                window.window().clone(),
                &self.config.window,
                &self.config.rendering,
            );

            window.request_redraw();
            self.window = Some(window);
            self.render = Some(render);
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(physical_size) => {
                if let Some(render) = &mut self.render {
                    render.resize(physical_size.width, physical_size.height);
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    if let Some(action) = InputMapper::map_keyboard(key, event.state) {
                        match action {
                            InputAction::Exit => {
                                event_loop.exit();
                                return;
                            }
                            InputAction::ToggleFullscreen => {
                                if let Some(window) = &self.window {
                                    window.toggle_fullscreen();
                                }
                            }
                            InputAction::ResetScroll => {
                                self.scroll.reset();
                                log::info!("Scroll offsets reset");
                            }
                        }
                    }
                    // Pass to controller for scroll keys
                    self.controller.process_keyboard(key, event.state);
                }
            }

            WindowEvent::RedrawRequested => {
                self.simulation
                    .update(&mut self.scroll, &self.controller, &mut self.stats);

                if self.config.debug.fps_in_title {
                    if let Some(window) = &self.window {
                        window.update_title(self.stats.latest());
                    }
                }

                if let Some(render) = &mut self.render {
                    match render.render_frame(self.scroll.offsets()) {
                        Ok(()) => {}
                        Err(RenderError::SurfaceLost) => {
                            let (width, height) = render.size();
                            render.resize(width, height);
                        }
                        Err(RenderError::OutOfMemory) => {
                            log::error!("GPU out of memory, exiting");
                            event_loop.exit();
                        }
                        Err(e) => {
                            log::warn!("Render error: {}", e);
                        }
                    }
                }

                // Request next frame
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            _ => {}
        }
    }
}

fn main() {
    // Initialize logging
    env_logger::init();
    log::info!("Starting Skyroll");

    // Create event loop
    let event_loop = EventLoop::new().expect("Failed to create event loop");
    event_loop.set_control_flow(ControlFlow::Poll);

    // Create and run application
    let mut app = App::new();
    event_loop.run_app(&mut app).expect("Event loop error");

    // Frame statistics gathered during the run
    app.stats.log_report();
}
