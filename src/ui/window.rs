//! winit event loop and softbuffer presentation for a [`Session`].

use std::num::NonZeroU32;
use std::rc::Rc;

use image::RgbaImage;
use log::{error, info};
use thiserror::Error;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, KeyEvent, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{Key, NamedKey};
use winit::window::{Window, WindowId};

use super::text::{Typeface, CAPTION_SIZE};
use super::Session;
use crate::color::to_xrgb;
use crate::config::LabConfig;

/// Failures bringing up or drawing the window
#[derive(Debug, Error)]
pub enum UiError {
    #[error("failed to start event loop: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),
    #[error("framebuffer error: {0}")]
    Surface(#[from] softbuffer::SoftBufferError),
}

type Surface = softbuffer::Surface<Rc<Window>, Rc<Window>>;

struct GeneLabApp {
    title: String,
    session: Session,
    window: Option<Rc<Window>>,
    surface: Option<Surface>,
    cursor: (f64, f64),
    error: Option<UiError>,
}

impl GeneLabApp {
    fn new(config: &LabConfig) -> Self {
        Self {
            title: config.window.title.clone(),
            session: Session::from_config(config).with_typeface(Typeface::load(CAPTION_SIZE)),
            window: None,
            surface: None,
            cursor: (0.0, 0.0),
            error: None,
        }
    }

    fn open(&mut self, event_loop: &ActiveEventLoop) -> Result<(), UiError> {
        let layout = self.session.layout();
        let attrs = Window::default_attributes()
            .with_title(&self.title)
            .with_inner_size(PhysicalSize::new(layout.width as u32, layout.height as u32))
            .with_resizable(false);

        let window = Rc::new(event_loop.create_window(attrs)?);
        let context = softbuffer::Context::new(window.clone())?;
        let surface = softbuffer::Surface::new(&context, window.clone())?;

        info!("window open ({}x{})", layout.width, layout.height);
        self.window = Some(window);
        self.surface = Some(surface);
        Ok(())
    }

    fn present(&mut self) -> Result<(), UiError> {
        let (Some(window), Some(surface)) = (&self.window, &mut self.surface) else {
            return Ok(());
        };
        let size = window.inner_size();
        let (Some(width), Some(height)) =
            (NonZeroU32::new(size.width), NonZeroU32::new(size.height))
        else {
            return Ok(());
        };

        let mut frame = RgbaImage::new(size.width, size.height);
        self.session.paint(&mut frame);

        surface.resize(width, height)?;
        let mut buffer = surface.buffer_mut()?;
        for (dst, px) in buffer.iter_mut().zip(frame.pixels()) {
            *dst = to_xrgb(*px);
        }
        buffer.present()?;
        Ok(())
    }

    fn request_redraw(&self) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn key(&mut self, event: KeyEvent) {
        let handled = match &event.logical_key {
            Key::Named(NamedKey::Escape) => self.session.cancel(),
            Key::Named(NamedKey::Enter) => self.session.submit(),
            Key::Named(NamedKey::Backspace) => self.session.backspace(),
            _ => match &event.text {
                Some(text) => self.session.type_text(text),
                None => false,
            },
        };
        if handled {
            self.request_redraw();
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: UiError) {
        error!("{}", err);
        self.error = Some(err);
        event_loop.exit();
    }
}

impl ApplicationHandler for GeneLabApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(err) = self.open(event_loop) {
            self.fail(event_loop, err);
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        event_loop.set_control_flow(ControlFlow::Wait);

        match event {
            WindowEvent::CloseRequested => {
                info!("window closed");
                self.surface = None;
                self.window = None;
                event_loop.exit();
            }
            WindowEvent::RedrawRequested => {
                if let Err(err) = self.present() {
                    self.fail(event_loop, err);
                }
            }
            WindowEvent::Resized(_) => self.request_redraw(),
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = (position.x, position.y);
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => {
                let (x, y) = (self.cursor.0.floor() as i32, self.cursor.1.floor() as i32);
                if self.session.click(x, y) {
                    self.request_redraw();
                }
            }
            WindowEvent::KeyboardInput { event, .. } if event.state == ElementState::Pressed => {
                self.key(event);
            }
            _ => {}
        }
    }
}

/// Open the lab window and block until it is closed.
pub fn run(config: &LabConfig) -> Result<(), UiError> {
    let event_loop = EventLoop::new()?;
    let mut app = GeneLabApp::new(config);
    event_loop.run_app(&mut app)?;
    match app.error.take() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}
