//! Core application state and lifecycle.

use pagesmith_core::BuilderState;
use peniko::Color;
use std::sync::Arc;
use std::time::Duration;
use vello::util::RenderSurface;
use vello::wgpu::PresentMode;
use winit::application::ApplicationHandler;
#[cfg(not(target_arch = "wasm32"))]
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::window::{Window, WindowId};

use crate::ui::{render_ui, UiLayout};

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub background_color: Color,
    pub layout: UiLayout,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Pagesmith".to_string(),
            width: 1280,
            height: 800,
            background_color: Color::from_rgba8(255, 255, 255, 255),
            layout: UiLayout::default(),
        }
    }
}

/// Runtime state for the application.
struct AppState {
    // Windowing
    window: Arc<Window>,
    surface: RenderSurface<'static>,

    // egui
    egui_ctx: egui::Context,
    egui_state: egui_winit::State,
    egui_renderer: egui_wgpu::Renderer,

    // State
    builder: BuilderState,
    config: AppConfig,
}

/// Main application struct.
pub struct App {
    config: AppConfig,
    state: Option<AppState>,
    render_cx: Option<vello::util::RenderContext>,
    /// Window waiting for async surface creation (WASM only)
    pending_window: Option<Arc<Window>>,
    /// Flag to indicate async init is in progress
    #[cfg(target_arch = "wasm32")]
    init_in_progress: std::cell::Cell<bool>,
}

impl App {
    /// Create a new application with default configuration.
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    /// Create a new application with custom configuration.
    pub fn with_config(config: AppConfig) -> Self {
        Self {
            config,
            state: None,
            render_cx: None,
            pending_window: None,
            #[cfg(target_arch = "wasm32")]
            init_in_progress: std::cell::Cell::new(false),
        }
    }

    /// Run the application.
    pub async fn run() {
        Self::run_with_config(AppConfig::default()).await;
    }

    /// Run the application with custom configuration.
    pub async fn run_with_config(config: AppConfig) {
        let event_loop = EventLoop::new().expect("Failed to create event loop");
        let app = App::with_config(config);

        #[cfg(target_arch = "wasm32")]
        {
            use winit::platform::web::EventLoopExtWebSys;
            event_loop.spawn_app(app);
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let mut app = app;
            event_loop.run_app(&mut app).expect("Event loop error");
        }
    }

    /// Finish initialization after surface is created.
    fn finish_init(&mut self, window: Arc<Window>, surface: RenderSurface<'static>) {
        let render_cx = self.render_cx.as_ref().expect("RenderContext not initialized");
        let device = &render_cx.devices[surface.dev_id].device;

        let egui_ctx = egui::Context::default();
        egui_ctx.set_visuals(egui::Visuals::light());
        let egui_state = egui_winit::State::new(
            egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );
        let egui_renderer = egui_wgpu::Renderer::new(
            device,
            surface.config.format,
            egui_wgpu::RendererOptions::default(),
        );

        log::info!("Pagesmith initialized - {}x{}", surface.config.width, surface.config.height);

        self.state = Some(AppState {
            window: window.clone(),
            surface,
            egui_ctx,
            egui_state,
            egui_renderer,
            builder: BuilderState::new(),
            config: self.config.clone(),
        });

        self.pending_window = None;

        // Request initial redraw
        window.request_redraw();
    }

    /// Create the window attributes for this platform.
    #[cfg(not(target_arch = "wasm32"))]
    fn window_attributes(&self) -> winit::window::WindowAttributes {
        Window::default_attributes()
            .with_title(&self.config.title)
            .with_inner_size(LogicalSize::new(self.config.width, self.config.height))
    }

    /// Create the window attributes for this platform, attaching a canvas to the DOM.
    #[cfg(target_arch = "wasm32")]
    fn window_attributes(&self) -> winit::window::WindowAttributes {
        use wasm_bindgen::JsCast;
        use winit::platform::web::WindowAttributesExtWebSys;

        let web_window = web_sys::window().expect("No window");
        let document = web_window.document().expect("No document");

        // Remove loading indicator
        if let Some(loading) = document.get_element_by_id("loading") {
            loading.remove();
        }

        let canvas = document
            .get_element_by_id("pagesmith-canvas")
            .and_then(|e| e.dyn_into::<web_sys::HtmlCanvasElement>().ok())
            .or_else(|| {
                let app_div = document.get_element_by_id("app")?;
                let canvas = document.create_element("canvas").ok()?;
                canvas.set_id("pagesmith-canvas");
                app_div.append_child(&canvas).ok()?;
                canvas.dyn_into::<web_sys::HtmlCanvasElement>().ok()
            })
            .expect("Failed to create canvas");

        let (width, height) = crate::web::viewport_size(self.config.width, self.config.height);
        canvas.set_width(width);
        canvas.set_height(height);
        let style = canvas.style();
        let _ = style.set_property("width", "100%");
        let _ = style.set_property("height", "100%");
        let _ = style.set_property("display", "block");

        log::info!("Canvas created: {}x{}", width, height);

        Window::default_attributes()
            .with_title(&self.config.title)
            .with_canvas(Some(canvas))
    }

    /// Start async surface creation on the web.
    #[cfg(target_arch = "wasm32")]
    fn begin_async_init(&mut self, window: Arc<Window>) {
        if self.init_in_progress.get() {
            return;
        }
        self.init_in_progress.set(true);

        let (width, height) = crate::web::viewport_size(self.config.width, self.config.height);

        // Get raw pointer to self for async callback
        let self_ptr = self as *mut Self;

        wasm_bindgen_futures::spawn_local(async move {
            log::info!("Creating surface asynchronously...");

            let mut render_cx = vello::util::RenderContext::new();
            match render_cx
                .create_surface(window.clone(), width, height, PresentMode::AutoVsync)
                .await
            {
                Ok(surface) => {
                    // Transmute lifetime to 'static
                    let surface: RenderSurface<'static> = unsafe { std::mem::transmute(surface) };

                    // SAFETY: WASM is single-threaded and the App is kept
                    // alive by the event loop
                    let app = unsafe { &mut *self_ptr };
                    app.render_cx = Some(render_cx);
                    app.finish_init(window, surface);
                }
                Err(e) => {
                    log::error!("Failed to create surface: {:?}", e);
                    let app = unsafe { &mut *self_ptr };
                    app.init_in_progress.set(false);
                }
            }
        });
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Run one egui frame, apply the resulting builder events and present.
    fn redraw(&mut self, render_cx: &vello::util::RenderContext) {
        let egui_input = self.egui_state.take_egui_input(&self.window);
        let builder = &self.builder;
        let layout = self.config.layout;
        let mut ui_events = Vec::new();
        let egui_output = self.egui_ctx.run(egui_input, |ctx| {
            ui_events = render_ui(ctx, builder, &layout);
        });

        if !ui_events.is_empty() {
            log::debug!("UI events: {:?}", ui_events);
            for transition in self.builder.handle_events(ui_events) {
                if transition.is_change() {
                    log::debug!("Builder transition: {:?}", transition);
                }
            }
            // Render the new state on the next frame.
            self.window.request_redraw();
        }

        let repaint_now = egui_output
            .viewport_output
            .get(&egui::ViewportId::ROOT)
            .is_some_and(|v| v.repaint_delay == Duration::ZERO);

        self.egui_state
            .handle_platform_output(&self.window, egui_output.platform_output);
        let egui_primitives = self
            .egui_ctx
            .tessellate(egui_output.shapes, egui_output.pixels_per_point);

        let device_handle = &render_cx.devices[self.surface.dev_id];
        let device = &device_handle.device;
        let queue = &device_handle.queue;

        let surface_texture = match self.surface.surface.get_current_texture() {
            Ok(t) => t,
            Err(e) => {
                log::warn!("Failed to get surface texture: {:?}", e);
                return;
            }
        };
        let surface_view = surface_texture
            .texture
            .create_view(&vello::wgpu::TextureViewDescriptor::default());

        // Update egui textures
        for (id, image_delta) in &egui_output.textures_delta.set {
            self.egui_renderer.update_texture(device, queue, *id, image_delta);
        }

        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [self.surface.config.width, self.surface.config.height],
            pixels_per_point: egui_output.pixels_per_point,
        };

        let mut encoder = device.create_command_encoder(&vello::wgpu::CommandEncoderDescriptor {
            label: Some("egui encoder"),
        });
        let user_buffers = self.egui_renderer.update_buffers(
            device,
            queue,
            &mut encoder,
            &egui_primitives,
            &screen_descriptor,
        );

        {
            let render_pass = encoder.begin_render_pass(&vello::wgpu::RenderPassDescriptor {
                label: Some("egui render pass"),
                color_attachments: &[Some(vello::wgpu::RenderPassColorAttachment {
                    view: &surface_view,
                    resolve_target: None,
                    ops: vello::wgpu::Operations {
                        load: vello::wgpu::LoadOp::Clear(clear_color(self.config.background_color)),
                        store: vello::wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            // Use forget_lifetime to satisfy egui-wgpu's 'static requirement
            let mut render_pass = render_pass.forget_lifetime();
            self.egui_renderer
                .render(&mut render_pass, &egui_primitives, &screen_descriptor);
        }

        queue.submit(user_buffers.into_iter().chain(std::iter::once(encoder.finish())));

        // Free egui textures
        for id in &egui_output.textures_delta.free {
            self.egui_renderer.free_texture(id);
        }
        surface_texture.present();

        if repaint_now {
            self.window.request_redraw();
        }
    }
}

/// Convert the configured background to a wgpu clear color.
fn clear_color(color: Color) -> vello::wgpu::Color {
    let [r, g, b, a] = color.components;
    vello::wgpu::Color {
        r: r as f64,
        g: g as f64,
        b: b as f64,
        a: a as f64,
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() || self.pending_window.is_some() {
            return;
        }

        log::info!("Creating window...");

        let window = Arc::new(
            event_loop
                .create_window(self.window_attributes())
                .expect("Failed to create window"),
        );

        let size = window.inner_size();
        let (width, height) = if size.width == 0 || size.height == 0 {
            (self.config.width, self.config.height)
        } else {
            (size.width, size.height)
        };

        log::info!("Surface size: {}x{}", width, height);

        // On native, block on async surface creation
        #[cfg(not(target_arch = "wasm32"))]
        {
            let render_cx = self
                .render_cx
                .get_or_insert_with(vello::util::RenderContext::new);

            let surface = pollster::block_on(render_cx.create_surface(
                window.clone(),
                width,
                height,
                PresentMode::AutoVsync,
            ))
            .expect("Failed to create surface");

            // Transmute lifetime to 'static - safe because App owns everything
            let surface: RenderSurface<'static> = unsafe { std::mem::transmute(surface) };
            self.finish_init(window, surface);
        }

        // On WASM, store window for later async initialization
        #[cfg(target_arch = "wasm32")]
        {
            self.pending_window = Some(window);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        // On WASM, handle async initialization
        #[cfg(target_arch = "wasm32")]
        if self.state.is_none() {
            if let Some(window) = self.pending_window.clone() {
                self.begin_async_init(window.clone());
                // Request redraw to keep the event loop running
                window.request_redraw();
            }
            return;
        }

        let Some(state) = &mut self.state else {
            return;
        };

        // Let egui process the event first
        let egui_response = state.egui_state.on_window_event(&state.window, &event);
        if egui_response.repaint {
            state.window.request_redraw();
        }

        match event {
            WindowEvent::CloseRequested => {
                log::info!("Closing Pagesmith");
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if size.width == 0 || size.height == 0 {
                    return;
                }

                if let Some(render_cx) = self.render_cx.as_mut() {
                    render_cx.resize_surface(&mut state.surface, size.width, size.height);
                }

                state.window.request_redraw();
            }

            WindowEvent::RedrawRequested => {
                let Some(render_cx) = self.render_cx.as_ref() else {
                    return;
                };
                state.redraw(render_cx);
            }

            _ => {}
        }
    }
}
