use pixels::{Pixels, SurfaceTexture};
use winit::window::Window;

use crate::grid::HexGrid;
use crate::hex::HexMetrics;

const BACKGROUND_COLOR: [u8; 4] = [255, 255, 255, 255];
const DEFAULT_COLOR: [u8; 4] = [224, 224, 224, 255]; // #E0E0E0
const SELECTED_COLOR: [u8; 4] = [76, 175, 80, 255]; // #4CAF50
const STROKE_COLOR: [u8; 4] = [0, 0, 0, 255];
const STROKE_WIDTH: f32 = 4.0;

pub struct GraphicsRenderer {
    pixels: Pixels,
    width: u32,
    height: u32,
}

impl GraphicsRenderer {
    pub fn new(window: &Window, width: u32, height: u32) -> Result<Self, pixels::Error> {
        let window_size = window.inner_size();
        let surface_texture = SurfaceTexture::new(window_size.width, window_size.height, window);
        let pixels = Pixels::new(width, height, surface_texture)?;

        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    /// Forwards window resizes to the surface. The buffer keeps the measured
    /// grid size; the grid never re-lays-out.
    pub fn resize_surface(&mut self, width: u32, height: u32) {
        if let Err(err) = self.pixels.resize_surface(width, height) {
            log::error!("Failed to resize surface: {}", err);
        }
    }

    /// Maps a physical window position onto the framebuffer, `None` when the
    /// position falls outside it.
    pub fn window_to_buffer(&self, position: (f32, f32)) -> Option<(f32, f32)> {
        self.pixels
            .window_pos_to_pixel(position)
            .ok()
            .map(|(x, y)| (x as f32, y as f32))
    }

    /// Draws the whole grid into the framebuffer: background, then every
    /// cell in layout order with its fill color and stroked outline.
    pub fn render(&mut self, grid: &HexGrid) {
        let width = self.width;
        let height = self.height;
        let frame = self.pixels.frame_mut();

        for pixel in frame.chunks_exact_mut(4) {
            pixel.copy_from_slice(&BACKGROUND_COLOR);
        }

        let metrics = grid.metrics();
        for cell in grid.cells() {
            let fill = if cell.selected {
                SELECTED_COLOR
            } else {
                DEFAULT_COLOR
            };
            Self::draw_hexagon_static(
                frame,
                cell.center_x,
                cell.center_y,
                metrics,
                fill,
                width,
                height,
            );
        }
    }

    pub fn present(&mut self) -> Result<(), pixels::Error> {
        self.pixels.render()
    }

    /// Rasterizes one cell: fill inside the hexagon, stroke in the band
    /// straddling its boundary.
    fn draw_hexagon_static(
        frame: &mut [u8],
        center_x: f32,
        center_y: f32,
        metrics: HexMetrics,
        fill: [u8; 4],
        width: u32,
        height: u32,
    ) {
        let outer = metrics.radius + STROKE_WIDTH / 2.0;
        let inner = metrics.radius - STROKE_WIDTH / 2.0;

        let min_x = (center_x - outer).floor().max(0.0) as u32;
        let max_x = (center_x + outer).ceil().min(width as f32) as u32;
        let min_y = (center_y - outer).floor().max(0.0) as u32;
        let max_y = (center_y + outer).ceil().min(height as f32) as u32;

        for py in min_y..max_y {
            for px in min_x..max_x {
                let dx = px as f32 + 0.5 - center_x;
                let dy = py as f32 + 0.5 - center_y;

                let color = if in_hexagon(dx, dy, outer) && !in_hexagon(dx, dy, inner) {
                    STROKE_COLOR
                } else if in_hexagon(dx, dy, metrics.radius) {
                    fill
                } else {
                    continue;
                };

                let index = ((py * width + px) * 4) as usize;
                if index + 3 < frame.len() {
                    frame[index..index + 4].copy_from_slice(&color);
                }
            }
        }
    }
}

/// Containment test for a hexagon of circumradius `radius` centered at the
/// origin, with vertices at 60-degree steps starting at angle 0.
fn in_hexagon(dx: f32, dy: f32, radius: f32) -> bool {
    let sqrt3 = 3.0_f32.sqrt();
    dy.abs() <= sqrt3 / 2.0 * radius && sqrt3 * dx.abs() + dy.abs() <= sqrt3 * radius
}
