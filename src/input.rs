use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, KeyboardInput, MouseButton, VirtualKeyCode};

/// Action produced from a raw window event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputAction {
    None,
    /// Left button pressed at the tracked cursor position (physical pixels).
    PointerDown(f32, f32),
    /// Clear all selections.
    Reset,
}

/// Tracks the cursor and maps window events to application actions.
pub struct InputHandler {
    cursor_x: f32,
    cursor_y: f32,
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            cursor_x: 0.0,
            cursor_y: 0.0,
        }
    }

    pub fn handle_cursor_moved(&mut self, position: PhysicalPosition<f64>) {
        self.cursor_x = position.x as f32;
        self.cursor_y = position.y as f32;
    }

    pub fn handle_mouse_input(&self, state: ElementState, button: MouseButton) -> InputAction {
        if button == MouseButton::Left && state == ElementState::Pressed {
            InputAction::PointerDown(self.cursor_x, self.cursor_y)
        } else {
            InputAction::None
        }
    }

    pub fn handle_keyboard_input(&self, input: &KeyboardInput) -> InputAction {
        if input.state != ElementState::Pressed {
            return InputAction::None;
        }

        match input.virtual_keycode {
            Some(VirtualKeyCode::R) => InputAction::Reset,
            _ => InputAction::None,
        }
    }
}
