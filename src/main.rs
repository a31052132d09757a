//! Terraplane - interactive deformable terrain mesh demo
//!
//! A square plane grid is re-deformed every frame by a selectable height
//! function (sine wave, constant, random, fractal noise, single-octave
//! noise). All mesh, noise, and camera parameters are editable at runtime
//! from the keyboard.

use std::sync::Arc;
use std::time::Instant;

use clap::Parser;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use terraplane::camera::CameraSystem;
use terraplane::cli::Args;
use terraplane::params::{CameraParams, RenderConfig, TerrainParams};
use terraplane::rendering::{RenderSystem, Uniforms};
use terraplane::terrain::TerrainSystem;

/// Main application state
struct App {
    // Window and rendering
    window: Option<Arc<Window>>,
    render_system: Option<RenderSystem>,

    // Simulation systems
    terrain: TerrainSystem,
    camera: CameraSystem,

    // Configuration, mutated by the keyboard parameter panel
    terrain_params: TerrainParams,
    render_config: RenderConfig,

    // Time tracking
    start_time: Instant,
}

impl App {
    fn new(args: &Args) -> Self {
        let terrain_params = args.initial_terrain_params();
        let terrain = TerrainSystem::new(&terrain_params, args.seed);
        let camera = CameraSystem::new(CameraParams::default());

        Self {
            window: None,
            render_system: None,
            terrain,
            camera,
            terrain_params,
            render_config: RenderConfig::default(),
            start_time: Instant::now(),
        }
    }
}

impl ApplicationHandler for App {
    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return; // Already initialized
        }

        let window_attributes = Window::default_attributes()
            .with_title("Terraplane")
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.render_config.window_width,
                self.render_config.window_height,
            ));

        let window = Arc::new(event_loop.create_window(window_attributes).unwrap());

        match pollster::block_on(RenderSystem::new(Arc::clone(&window), &self.terrain.grid)) {
            Ok(render_system) => {
                self.render_system = Some(render_system);
            }
            Err(e) => {
                log::error!("Failed to initialize rendering: {:?}", e);
                event_loop.exit();
                return;
            }
        }

        println!("\nTerraplane is running!");
        println!("  Tab         cycle height function");
        println!("  [ ]         octaves    - +");
        println!("  - =         height multiplier");
        println!("  F G         frequency  - +");
        println!("  A S         amplitude  - +");
        println!("  L ;         lacunarity - +");
        println!("  P '         persistence - +");
        println!("  , .         subdivisions - +");
        println!("  N M         plane size - +");
        println!("  Arrows / R  orbit camera / reset");
        println!("  Esc         quit\n");

        self.window = Some(window);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => {
                self.render_config.window_width = size.width;
                self.render_config.window_height = size.height;
                if let Some(render_system) = &mut self.render_system {
                    render_system.resize(size.width, size.height);
                }
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(code),
                        ..
                    },
                ..
            } => {
                if code == KeyCode::Escape {
                    event_loop.exit();
                } else {
                    self.handle_key(code);
                }
            }
            WindowEvent::RedrawRequested => {
                self.render_frame(event_loop);
            }
            _ => {}
        }
    }
}

impl App {
    /// Apply one parameter-panel key press.
    fn handle_key(&mut self, code: KeyCode) {
        let step = self.camera.orbit_step();
        match code {
            KeyCode::ArrowLeft => return self.camera.orbit(-step, 0.0),
            KeyCode::ArrowRight => return self.camera.orbit(step, 0.0),
            KeyCode::ArrowUp => return self.camera.orbit(0.0, step),
            KeyCode::ArrowDown => return self.camera.orbit(0.0, -step),
            KeyCode::KeyR => return self.camera.reset(),
            _ => {}
        }

        let p = &mut self.terrain_params;
        let needs_rebuild = match code {
            KeyCode::Tab => {
                let function = p.height_function.next();
                log::info!("height function: {}", function.name());
                p.set_height_function(function)
            }
            KeyCode::BracketLeft => p.set_octaves(p.noise.octaves.saturating_sub(1)),
            KeyCode::BracketRight => p.set_octaves(p.noise.octaves + 1),
            KeyCode::Minus => p.set_height_mult(p.height_mult - 0.1),
            KeyCode::Equal => p.set_height_mult(p.height_mult + 0.1),
            KeyCode::KeyF => p.set_frequency(p.noise.frequency - 0.1),
            KeyCode::KeyG => p.set_frequency(p.noise.frequency + 0.1),
            KeyCode::KeyA => p.set_amplitude(p.noise.amplitude - 0.1),
            KeyCode::KeyS => p.set_amplitude(p.noise.amplitude + 0.1),
            KeyCode::KeyL => p.set_lacunarity(p.noise.lacunarity - 0.1),
            KeyCode::Semicolon => p.set_lacunarity(p.noise.lacunarity + 0.1),
            KeyCode::KeyP => p.set_persistence(p.noise.persistence - 0.05),
            KeyCode::Quote => p.set_persistence(p.noise.persistence + 0.05),
            KeyCode::Comma => p.set_subdivisions(p.dimensions.subdivisions.saturating_sub(5)),
            KeyCode::Period => p.set_subdivisions(p.dimensions.subdivisions + 5),
            KeyCode::KeyN => p.set_plane_size(p.dimensions.size - 1.0),
            KeyCode::KeyM => p.set_plane_size(p.dimensions.size + 1.0),
            _ => return,
        };

        log::debug!(
            "noise params: freq {}, amp {}, lac {}, pers {}, octaves {}",
            p.noise.frequency,
            p.noise.amplitude,
            p.noise.lacunarity,
            p.noise.persistence,
            p.noise.octaves
        );

        if needs_rebuild {
            self.terrain.rebuild(&self.terrain_params.dimensions);
            if let Some(render_system) = &mut self.render_system {
                render_system.rebuild_mesh_buffers(&self.terrain.grid);
            }
        }
    }

    /// Update the terrain and render a single frame
    fn render_frame(&mut self, event_loop: &ActiveEventLoop) {
        let Some(ref render_system) = self.render_system else {
            return;
        };

        let elapsed_s = self.start_time.elapsed().as_secs_f32();

        // Rewrite vertex heights for this frame, then upload them
        self.terrain.update(elapsed_s, &self.terrain_params);
        render_system.update_vertices(&self.terrain.grid.vertices);

        let view_proj = self.camera.create_view_proj_matrix(&self.render_config);
        let uniforms = Uniforms {
            view_proj: view_proj.to_cols_array_2d(),
            time: elapsed_s,
            height_mult: self.terrain_params.height_mult,
            _padding: [0.0; 2],
        };
        render_system.update_uniforms(&uniforms);

        let result = render_system.render();
        match result {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost) | Err(wgpu::SurfaceError::Outdated) => {
                let (width, height) = (
                    self.render_config.window_width,
                    self.render_config.window_height,
                );
                if let Some(render_system) = &mut self.render_system {
                    render_system.resize(width, height);
                }
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("Out of GPU memory, exiting");
                event_loop.exit();
            }
            Err(e) => log::warn!("Render error: {:?}", e),
        }
    }
}

fn main() {
    env_logger::init();

    let args = Args::parse();
    log::info!(
        "starting: {} plane, {} subdivisions, {} height function",
        args.size,
        args.subdivisions,
        args.height_function
    );

    let mut app = App::new(&args);
    let event_loop = EventLoop::new().unwrap();
    let _ = event_loop.run_app(&mut app);
}
