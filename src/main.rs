mod graphics;
mod grid;
mod hex;
mod input;

use thiserror::Error;
use winit::{
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::WindowBuilder,
};

use crate::graphics::GraphicsRenderer;
use crate::grid::HexGrid;
use crate::input::{InputAction, InputHandler};

const HEX_RADIUS: f32 = 80.0;
const GRID_ROWS: u32 = 8;
const GRID_COLS: u32 = 6;

#[derive(Debug, Error)]
enum AppError {
    #[error("Failed to create window: {0}")]
    Window(#[from] winit::error::OsError),
    #[error("Failed to create framebuffer: {0}")]
    Framebuffer(#[from] pixels::Error),
}

fn main() -> Result<(), AppError> {
    env_logger::init();

    let mut grid = HexGrid::new(HEX_RADIUS, GRID_ROWS, GRID_COLS);
    let (width, height) = grid.measure();

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("Hexagrid")
        .with_inner_size(winit::dpi::LogicalSize::new(width, height))
        .with_resizable(false)
        .build(&event_loop)?;

    let mut graphics = GraphicsRenderer::new(&window, width, height)?;
    let mut input_handler = InputHandler::new();

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    *control_flow = ControlFlow::Exit;
                }
                WindowEvent::Resized(size) => {
                    graphics.resize_surface(size.width, size.height);
                    window.request_redraw();
                }
                WindowEvent::CursorMoved { position, .. } => {
                    input_handler.handle_cursor_moved(position);
                }
                WindowEvent::MouseInput { state, button, .. } => {
                    let action = input_handler.handle_mouse_input(state, button);
                    apply_action(&mut grid, &graphics, action);
                }
                WindowEvent::KeyboardInput { input, .. } => {
                    let action = input_handler.handle_keyboard_input(&input);
                    apply_action(&mut grid, &graphics, action);
                }
                _ => {}
            },
            Event::MainEventsCleared => {
                if grid.take_redraw_request() {
                    window.request_redraw();
                }
            }
            Event::RedrawRequested(_) => {
                graphics.render(&grid);
                if let Err(err) = graphics.present() {
                    log::error!("Render error: {}", err);
                    *control_flow = ControlFlow::Exit;
                }
            }
            _ => {}
        }
    });
}

fn apply_action(grid: &mut HexGrid, graphics: &GraphicsRenderer, action: InputAction) {
    match action {
        InputAction::PointerDown(x, y) => {
            if let Some((buf_x, buf_y)) = graphics.window_to_buffer((x, y)) {
                if grid.on_pointer_down(buf_x, buf_y) {
                    log::debug!("Toggled cell under ({:.0}, {:.0})", buf_x, buf_y);
                }
            }
        }
        InputAction::Reset => {
            grid.reset();
            log::debug!("Cleared all selections");
        }
        InputAction::None => {}
    }
}
