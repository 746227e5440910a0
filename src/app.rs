//! Window, event loop and frame loop.

use std::sync::Arc;
use std::time::Instant;

use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::KeyCode;
use winit::window::{Window, WindowAttributes, WindowId};

use crate::config::AppConfig;
use crate::error::AppError;
use crate::gpu::GpuContext;
use crate::input::Input;
use crate::orbit_camera::OrbitCamera;
use crate::render::{DrawQueue, MeshPass};
use crate::scene::SceneManager;

const NEXT_KEYS: [KeyCode; 2] = [KeyCode::ArrowRight, KeyCode::KeyN];
const PREVIOUS_KEYS: [KeyCode; 2] = [KeyCode::ArrowLeft, KeyCode::KeyP];

/// Opens the window and runs `scenes` until the window closes.
///
/// Startup failures (window, GPU) end the loop and are returned.
pub fn run(config: AppConfig, scenes: SceneManager) -> Result<(), AppError> {
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = TableauApp::Pending {
        config,
        scenes: Some(scenes),
    };
    event_loop.run_app(&mut app)?;

    match app {
        TableauApp::Failed(err) => Err(err),
        _ => Ok(()),
    }
}

enum TableauApp {
    Pending {
        config: AppConfig,
        scenes: Option<SceneManager>,
    },
    Running(Box<Running>),
    Failed(AppError),
}

struct Running {
    config: AppConfig,
    window: Arc<Window>,
    gpu: GpuContext,
    mesh_pass: MeshPass,
    queue: DrawQueue,
    scenes: SceneManager,
    orbit: OrbitCamera,
    input: Input,
    last_frame: Instant,
    shown_scene: Option<String>,
}

impl Running {
    fn start(
        event_loop: &ActiveEventLoop,
        config: AppConfig,
        scenes: SceneManager,
    ) -> Result<Self, AppError> {
        let window_attrs = WindowAttributes::default()
            .with_title(&config.title)
            .with_inner_size(winit::dpi::LogicalSize::new(config.width, config.height));

        let window = Arc::new(event_loop.create_window(window_attrs)?);
        let gpu = GpuContext::new(window.clone())?;
        let mesh_pass = MeshPass::new(&gpu);
        log::info!(
            "window ready ({}x{}), {} scenes registered",
            gpu.width(),
            gpu.height(),
            scenes.scene_count()
        );

        let mut running = Self {
            config,
            window,
            gpu,
            mesh_pass,
            queue: DrawQueue::new(),
            scenes,
            orbit: OrbitCamera::new(),
            input: Input::new(),
            last_frame: Instant::now(),
            shown_scene: None,
        };
        running.refresh_title();
        Ok(running)
    }

    /// Applies scene navigation keys. Returns false when the app should exit.
    fn handle_keys(&mut self) -> bool {
        if self.input.key_pressed(KeyCode::Escape) {
            return false;
        }

        if self.input.any_pressed(&NEXT_KEYS) {
            self.scenes.switch_to_next_scene();
        } else if self.input.any_pressed(&PREVIOUS_KEYS) {
            self.scenes.switch_to_previous_scene();
        } else if let Some(index) = self.input.digit_pressed() {
            if let Err(err) = self.scenes.switch_to_scene(index) {
                log::debug!("ignoring scene key {}: {err}", index + 1);
            }
        }
        true
    }

    fn refresh_title(&mut self) {
        let current = self.scenes.current_scene_name().map(str::to_owned);
        if current == self.shown_scene {
            return;
        }
        let title = match &current {
            Some(name) => format!("{} - {}", self.config.title, name),
            None => self.config.title.clone(),
        };
        self.window.set_title(&title);
        self.shown_scene = current;
    }

    fn frame(&mut self) -> bool {
        let now = Instant::now();
        let dt = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;

        if !self.handle_keys() {
            return false;
        }
        self.refresh_title();

        self.orbit.update(&self.input);
        self.scenes.update(dt);

        self.queue.clear();
        self.scenes.draw(&mut self.queue);
        self.render();
        self.queue.clear();

        self.input.begin_frame();
        true
    }

    fn render(&mut self) {
        let output = match self.gpu.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::debug!("surface lost, reconfiguring");
                self.gpu.reconfigure();
                return;
            }
            Err(err) => {
                log::warn!("skipping frame: {err}");
                return;
            }
        };
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Frame Encoder"),
            });

        let camera = self.orbit.camera();
        self.mesh_pass.render(
            &self.gpu,
            &mut encoder,
            &view,
            &camera,
            self.config.clear_color,
            &self.queue,
        );

        self.gpu.queue.submit(std::iter::once(encoder.finish()));
        output.present();
    }
}

impl ApplicationHandler for TableauApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        let TableauApp::Pending { config, scenes } = self else {
            return;
        };
        let Some(scenes) = scenes.take() else {
            return;
        };

        *self = match Running::start(event_loop, config.clone(), scenes) {
            Ok(running) => TableauApp::Running(Box::new(running)),
            Err(err) => {
                log::error!("{err}");
                event_loop.exit();
                TableauApp::Failed(err)
            }
        };
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let TableauApp::Running(running) = self else {
            return;
        };

        running.input.handle_event(&event);

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                running.gpu.resize(size.width, size.height);
            }
            WindowEvent::RedrawRequested => {
                if running.frame() {
                    running.window.request_redraw();
                } else {
                    event_loop.exit();
                }
            }
            _ => {}
        }
    }
}
