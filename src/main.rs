use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowId},
};

use frame_viewer::cli::Cli;
use frame_viewer::input::{action_for_event, KeyAction};
use frame_viewer::renderer::{GridRenderer, HudInfo};
use frame_viewer::{CameraController, ViewerConfig};

const FPS_UPDATE_INTERVAL: f32 = 1.0;

struct App {
    config: ViewerConfig,
    window: Option<Arc<Window>>,
    renderer: Option<GridRenderer>,
    camera: CameraController,
    last_frame_time: Instant,
    frame_count: u32,
    fps: f32,
    fps_update_timer: f32,
}

impl App {
    fn new(config: ViewerConfig) -> Self {
        let camera = CameraController::from_config(&config.camera);
        Self {
            config,
            window: None,
            renderer: None,
            camera,
            last_frame_time: Instant::now(),
            frame_count: 0,
            fps: 0.0,
            fps_update_timer: 0.0,
        }
    }

    fn update_fps(&mut self) {
        let now = Instant::now();
        let delta = now.duration_since(self.last_frame_time).as_secs_f32();
        self.last_frame_time = now;

        self.frame_count += 1;
        self.fps_update_timer += delta;

        if self.fps_update_timer >= FPS_UPDATE_INTERVAL {
            self.fps = self.frame_count as f32 / self.fps_update_timer;
            log::debug!("FPS: {:.1}", self.fps);
            self.frame_count = 0;
            self.fps_update_timer = 0.0;
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        self.update_fps();

        let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) else {
            return;
        };
        let hud_info = HudInfo {
            fps: self.fps,
            frame: *self.camera.frame(),
        };

        match renderer.render(window, &hud_info) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("Surface lost, reconfiguring");
                renderer.reconfigure();
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("Out of GPU memory, exiting");
                event_loop.exit();
            }
            Err(e) => log::warn!("Skipping frame: {}", e),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match event_loop.create_window(
            Window::default_attributes()
                .with_title(self.config.window.title.clone())
                .with_inner_size(winit::dpi::LogicalSize::new(
                    self.config.window.width,
                    self.config.window.height,
                )),
        ) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("Failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };

        let renderer = match pollster::block_on(GridRenderer::new(window.clone(), &self.config)) {
            Ok(r) => r,
            Err(e) => {
                log::error!("Failed to initialize renderer: {:#}", e);
                event_loop.exit();
                return;
            }
        };

        self.window = Some(window);
        self.renderer = Some(renderer);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) {
            if renderer.handle_event(window, &event) {
                return;
            }
        }

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput { event, .. } => {
                match action_for_event(&event) {
                    Some(KeyAction::Exit) => event_loop.exit(),
                    Some(KeyAction::ResetCamera) => self.camera.reset(),
                    Some(KeyAction::Camera(command)) => self.camera.apply(command),
                    None => {}
                }
            }
            WindowEvent::Resized(size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(size.width, size.height);
                }
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = ViewerConfig::resolve(&cli)?;
    log::info!(
        "Camera steps: move {} units, yaw {} degrees",
        config.camera.move_step,
        config.camera.yaw_step_degrees
    );

    let event_loop = EventLoop::new()?;
    let mut app = App::new(config);

    log::info!("Controls: arrow keys to fly, Home to reset, Escape to quit");
    event_loop.run_app(&mut app)?;

    Ok(())
}
