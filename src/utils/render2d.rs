use crate::core::RenderFrame;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color(pub u8, pub u8, pub u8, pub u8);

impl Color {
    /// Opaque color from a `0xRRGGBB` literal.
    pub const fn rgb(hex: u32) -> Self {
        Color((hex >> 16) as u8, (hex >> 8) as u8, hex as u8, 255)
    }
}

pub const WHITE: Color = Color(255, 255, 255, 255);
pub const GRAY: Color = Color(128, 128, 128, 255);
pub const DARK_GRAY: Color = Color(64, 64, 64, 255);

// Cell palette
pub const START_GREEN: Color = Color::rgb(0x7fc97f);
pub const GOAL_SALMON: Color = Color::rgb(0xfb8072);
pub const AGENT_BLUE: Color = Color::rgb(0x80b1d3);

/// A minimal RGBA software canvas for simple 2D rendering.
pub struct Canvas {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>, // RGBA
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        let mut canvas = Self {
            width,
            height,
            pixels: vec![0; (width as usize) * (height as usize) * 4],
        };
        canvas.clear(WHITE);
        canvas
    }

    pub fn clear(&mut self, color: Color) {
        for px in self.pixels.chunks_exact_mut(4) {
            px.copy_from_slice(&[color.0, color.1, color.2, color.3]);
        }
    }

    #[inline]
    pub fn put_pixel(&mut self, x: i32, y: i32, color: Color) {
        if x < 0 || y < 0 { return; }
        let (x, y) = (x as u32, y as u32);
        if x >= self.width || y >= self.height { return; }
        let idx = ((y * self.width + x) as usize) * 4;
        self.pixels[idx..idx + 4].copy_from_slice(&[color.0, color.1, color.2, color.3]);
    }

    /// Read back a pixel; `None` outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height { return None; }
        let idx = ((y * self.width + x) as usize) * 4;
        let p = &self.pixels[idx..idx + 4];
        Some(Color(p[0], p[1], p[2], p[3]))
    }

    /// Draw a filled rectangle with top-left (x, y), width w, height h.
    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color) {
        if w <= 0 || h <= 0 { return; }
        let x0 = x.max(0) as u32;
        let y0 = y.max(0) as u32;
        let x1 = (x + w).clamp(0, self.width as i32) as u32;
        let y1 = (y + h).clamp(0, self.height as i32) as u32;
        for yy in y0..y1 {
            let base = (yy * self.width) as usize * 4;
            for xx in x0..x1 {
                let idx = base + (xx as usize) * 4;
                self.pixels[idx..idx + 4].copy_from_slice(&[color.0, color.1, color.2, color.3]);
            }
        }
    }

    /// Outline of a rectangle, one pixel wide.
    pub fn stroke_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color) {
        if w <= 0 || h <= 0 { return; }
        let (x1, y1) = (x + w - 1, y + h - 1);
        self.draw_line(x, y, x1, y, color);
        self.draw_line(x, y1, x1, y1, color);
        self.draw_line(x, y, x, y1, color);
        self.draw_line(x1, y, x1, y1, color);
    }

    /// Integer Bresenham line.
    pub fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
        let mut x0 = x0;
        let mut y0 = y0;
        let dx = (x1 - x0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let dy = -(y1 - y0).abs();
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        loop {
            self.put_pixel(x0, y0, color);
            if x0 == x1 && y0 == y1 { break; }
            let e2 = 2 * err;
            if e2 >= dy { err += dy; x0 += sx; }
            if e2 <= dx { err += dx; y0 += sy; }
        }
    }

    pub fn into_render_frame(self) -> RenderFrame {
        RenderFrame::Pixels { width: self.width, height: self.height, data: self.pixels }
    }
}
