use crate::controllers::engine::{EngineConfig, EngineRequest, FractalEngine};
use crate::core::data::pixel_size::PixelSize;
use crate::core::data::raster::Raster;
use crate::core::fractals::mandelbrot::precision::Precision;
use crate::core::viewport::{MIN_HEIGHT, MIN_WIDTH};
use crate::input::gui::errors::GuiError;
use crate::input::gui::key_input::key_request;
use crate::input::gui::overlay::{OverlayState, draw_overlay};
use crate::input::selection::SelectionTracker;
use crate::presenters::pixels::presenter::PixelsPresenter;
use egui::Context;
use egui_winit::State as EguiWinitState;
use log::{debug, error, info, warn};
use std::collections::VecDeque;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, Event, MouseButton, WindowEvent};
use winit::event_loop::{EventLoop, EventLoopWindowTarget};
use winit::keyboard::PhysicalKey;
use winit::window::{Window, WindowBuilder};

const WINDOW_TITLE: &str = "Fractal - Mandelbrot";

/// The engine renders on construction, so it is only built once the first
/// frame (a black raster under the wait overlay) is on screen.
enum EngineSlot {
    Starting {
        config: EngineConfig,
        placeholder: Raster,
    },
    Ready(FractalEngine),
}

impl EngineSlot {
    fn starting(config: EngineConfig) -> Self {
        Self::Starting {
            config,
            placeholder: Raster::new(config.pixel_size),
        }
    }

    fn raster(&self) -> &Raster {
        match self {
            Self::Starting { placeholder, .. } => placeholder,
            Self::Ready(engine) => engine.raster(),
        }
    }

    fn precision(&self) -> u32 {
        match self {
            Self::Starting { config, .. } => Precision::clamped(config.max_iterations).get(),
            Self::Ready(engine) => engine.precision(),
        }
    }
}

fn overlay_state(
    slot: &EngineSlot,
    selection: &SelectionTracker,
    pending: &VecDeque<EngineRequest>,
) -> OverlayState {
    OverlayState {
        precision: slot.precision(),
        selection: selection.rectangle(),
        waiting: matches!(slot, EngineSlot::Starting { .. }) || !pending.is_empty(),
    }
}

struct GuiApp {
    window: &'static Window,
    presenter: PixelsPresenter,
    engine: EngineSlot,
    selection: SelectionTracker,
    /// Requests wait here until a frame with the wait overlay has been shown.
    pending: VecDeque<EngineRequest>,
    egui_ctx: Context,
    egui_state: EguiWinitState,
    failure: Option<GuiError>,
}

impl GuiApp {
    fn new(
        window: &'static Window,
        event_loop: &EventLoop<()>,
        presenter: PixelsPresenter,
        config: EngineConfig,
    ) -> Self {
        let egui_ctx = Context::default();
        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(window.scale_factor() as f32),
            None,
        );

        let mut app = Self {
            window,
            presenter,
            engine: EngineSlot::starting(config),
            selection: SelectionTracker::default(),
            pending: VecDeque::new(),
            egui_ctx,
            egui_state,
            failure: None,
        };

        // The window manager may not honour the requested size.
        let size = window.inner_size();
        if let Ok(actual) = PixelSize::new(size.width, size.height) {
            if actual != config.pixel_size {
                app.queue(EngineRequest::Resize(actual));
            }
        }

        window.request_redraw();
        app
    }

    fn handle_event(&mut self, event: Event<()>, elwt: &EventLoopWindowTarget<()>) {
        if let Event::WindowEvent { event, window_id } = event {
            if window_id == self.window.id() {
                let _ = self.egui_state.on_window_event(self.window, &event);
                self.handle_window_event(event, elwt);
            }
        }
    }

    fn handle_window_event(&mut self, event: WindowEvent, elwt: &EventLoopWindowTarget<()>) {
        match event {
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::Resized(size) => {
                if let Err(err) = self.presenter.resize_surface(size.width, size.height) {
                    self.fail(err, elwt);
                    return;
                }

                if let Ok(pixel_size) = PixelSize::new(size.width, size.height) {
                    self.queue(EngineRequest::Resize(pixel_size));
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.selection
                    .cursor_moved(self.presenter.window_pos_to_pixel(position));

                if self.selection.rectangle().is_some() {
                    self.window.request_redraw();
                }
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => match state {
                ElementState::Pressed => self.selection.press(),
                ElementState::Released => {
                    if let Some(request) = self.selection.release() {
                        self.queue(request);
                    }
                }
            },
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key_code) = event.physical_key {
                    if let Some(request) = key_request(key_code, event.state) {
                        self.queue(request);
                    }
                }
            }
            WindowEvent::RedrawRequested => self.redraw(elwt),
            _ => {}
        }
    }

    fn queue(&mut self, request: EngineRequest) {
        debug!("Queued {:?}", request);

        // A drag-resize emits many sizes; only the latest one matters.
        if let (EngineRequest::Resize(_), Some(EngineRequest::Resize(_))) =
            (request, self.pending.back())
        {
            self.pending.pop_back();
        }

        self.pending.push_back(request);
        self.window.request_redraw();
    }

    fn redraw(&mut self, elwt: &EventLoopWindowTarget<()>) {
        let overlay = overlay_state(&self.engine, &self.selection, &self.pending);

        let raw_input = self.egui_state.take_egui_input(self.window);
        let mut egui_output = self.egui_ctx.run(raw_input, |ctx| draw_overlay(ctx, &overlay));
        let platform_output = std::mem::take(&mut egui_output.platform_output);
        self.egui_state
            .handle_platform_output(self.window, platform_output);

        if let Err(err) = self
            .presenter
            .present(self.engine.raster(), egui_output, &self.egui_ctx)
        {
            self.fail(err, elwt);
            return;
        }

        if overlay.waiting {
            // The wait overlay is on screen; rendering now blocks this thread.
            if let Err(err) = self.start_engine() {
                self.fail(err, elwt);
                return;
            }
            self.process_pending();
            self.window.request_redraw();
        }
    }

    fn start_engine(&mut self) -> Result<(), GuiError> {
        if let EngineSlot::Starting { config, .. } = self.engine {
            let engine = FractalEngine::new(config)?;
            info!("First view rendered in {:?}", engine.last_render_duration());
            self.engine = EngineSlot::Ready(engine);
        }

        Ok(())
    }

    fn process_pending(&mut self) {
        let EngineSlot::Ready(engine) = &mut self.engine else {
            return;
        };

        while let Some(request) = self.pending.pop_front() {
            match engine.handle(request) {
                Ok(true) => info!(
                    "{:?} rendered in {:?}",
                    request,
                    engine.last_render_duration()
                ),
                Ok(false) => debug!("{:?} left the view unchanged", request),
                Err(err) => warn!("{:?} failed: {}", request, err),
            }
        }
    }

    fn fail(&mut self, err: GuiError, elwt: &EventLoopWindowTarget<()>) {
        error!("Viewer stopping: {}", err);
        self.failure = Some(err);
        elwt.exit();
    }
}

/// Opens the viewer window and runs its event loop until the window closes.
pub fn run_gui(config: EngineConfig) -> Result<(), GuiError> {
    let event_loop = EventLoop::new()?;

    let window = WindowBuilder::new()
        .with_title(WINDOW_TITLE)
        .with_inner_size(PhysicalSize::new(
            config.pixel_size.width(),
            config.pixel_size.height(),
        ))
        .with_min_inner_size(PhysicalSize::new(MIN_WIDTH, MIN_HEIGHT))
        .build(&event_loop)?;
    let window: &'static Window = Box::leak(Box::new(window));

    let presenter = PixelsPresenter::new(window, config.pixel_size)?;
    let mut app = GuiApp::new(window, &event_loop, presenter, config);

    info!("Viewer window open");

    event_loop.run(|event, elwt| app.handle_event(event, elwt))?;

    match app.failure.take() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}
