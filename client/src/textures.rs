use bevy::{
    asset::RenderAssetUsages,
    image::ImageSampler,
    prelude::*,
    render::render_resource::{Extent3d, TextureDimension, TextureFormat},
};
use rand::Rng;
use std::f32::consts::PI;

use crate::{constants::*, spawning::map::repeat_sampler};

// ============================================================================
// Canvas
// ============================================================================

// RGBA8 pixel buffer with alpha blending. Coordinates wrap on both axes so every
// generated texture tiles seamlessly.
#[derive(Debug, Clone)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Canvas {
    #[must_use]
    pub fn filled(width: u32, height: u32, color: [u8; 4]) -> Self {
        let pixels = color
            .iter()
            .copied()
            .cycle()
            .take((width * height * 4) as usize)
            .collect();
        Self { width, height, pixels }
    }

    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = self.index(x as i32, y as i32);
        [self.pixels[i], self.pixels[i + 1], self.pixels[i + 2], self.pixels[i + 3]]
    }

    fn index(&self, x: i32, y: i32) -> usize {
        let x = x.rem_euclid(self.width as i32) as usize;
        let y = y.rem_euclid(self.height as i32) as usize;
        (y * self.width as usize + x) * 4
    }

    // Source-over blend of an opaque colour at the given coverage
    pub fn blend_pixel(&mut self, x: i32, y: i32, color: [u8; 3], alpha: f32) {
        let alpha = alpha.clamp(0.0, 1.0);
        let i = self.index(x, y);
        for (channel, value) in color.iter().enumerate() {
            let dst = f32::from(self.pixels[i + channel]);
            self.pixels[i + channel] = (f32::from(*value) - dst).mul_add(alpha, dst).round() as u8;
        }
    }

    // Covers every pixel whose centre lies inside the rectangle
    pub fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: [u8; 3], alpha: f32) {
        let x0 = (x - 0.5).ceil() as i32;
        let y0 = (y - 0.5).ceil() as i32;
        let x1 = (x + w - 0.5).ceil() as i32;
        let y1 = (y + h - 0.5).ceil() as i32;
        for py in y0..y1 {
            for px in x0..x1 {
                self.blend_pixel(px, py, color, alpha);
            }
        }
    }

    pub fn fill_ellipse(&mut self, cx: f32, cy: f32, rx: f32, ry: f32, rotation: f32, color: [u8; 3], alpha: f32) {
        if rx <= 0.0 || ry <= 0.0 {
            return;
        }
        let (sin, cos) = rotation.sin_cos();
        let reach = rx.max(ry).ceil() as i32;
        let (ccx, ccy) = (cx.floor() as i32, cy.floor() as i32);
        for py in ccy - reach..=ccy + reach {
            for px in ccx - reach..=ccx + reach {
                let dx = px as f32 + 0.5 - cx;
                let dy = py as f32 + 0.5 - cy;
                let u = dx.mul_add(cos, dy * sin) / rx;
                let v = dy.mul_add(cos, -dx * sin) / ry;
                if u.mul_add(u, v * v) <= 1.0 {
                    self.blend_pixel(px, py, color, alpha);
                }
            }
        }
    }

    pub fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: [u8; 3], alpha: f32) {
        self.fill_ellipse(cx, cy, radius, radius, 0.0, color, alpha);
    }

    // Radial gradient that fades from `inner` at the centre through `middle` to fully
    // transparent `outer` at the rim
    pub fn fill_radial(&mut self, cx: f32, cy: f32, radius: f32, inner: [u8; 4], middle: [u8; 4], outer: [u8; 4]) {
        if radius <= 0.0 {
            return;
        }
        let reach = radius.ceil() as i32;
        let (ccx, ccy) = (cx.floor() as i32, cy.floor() as i32);
        for py in ccy - reach..=ccy + reach {
            for px in ccx - reach..=ccx + reach {
                let d = (px as f32 + 0.5 - cx).hypot(py as f32 + 0.5 - cy) / radius;
                if d >= 1.0 {
                    continue;
                }
                let (a, b, t) = if d < 0.5 { (inner, middle, d * 2.0) } else { (middle, outer, (d - 0.5) * 2.0) };
                let mix = |i: usize| (f32::from(b[i]) - f32::from(a[i])).mul_add(t, f32::from(a[i]));
                let color = [mix(0).round() as u8, mix(1).round() as u8, mix(2).round() as u8];
                self.blend_pixel(px, py, color, mix(3) / 255.0);
            }
        }
    }

    // Thick line by stamping a disc every half pixel along the segment
    pub fn draw_line(&mut self, from: Vec2, to: Vec2, width: f32, color: [u8; 3]) {
        let steps = (from.distance(to) * 2.0).ceil().max(1.0) as usize;
        let mut covered = std::collections::HashSet::new();
        let half = width / 2.0;
        for step in 0..=steps {
            let p = from.lerp(to, step as f32 / steps as f32);
            let reach = half.ceil() as i32;
            for py in (p.y.floor() as i32 - reach)..=(p.y.floor() as i32 + reach) {
                for px in (p.x.floor() as i32 - reach)..=(p.x.floor() as i32 + reach) {
                    let d = (px as f32 + 0.5 - p.x).hypot(py as f32 + 0.5 - p.y);
                    if d <= half && covered.insert((px, py)) {
                        self.blend_pixel(px, py, color, 1.0);
                    }
                }
            }
        }
    }

    // Upload as a repeating, sRGB texture
    #[must_use]
    pub fn into_image(self) -> Image {
        let mut image = Image::new(
            Extent3d {
                width: self.width,
                height: self.height,
                depth_or_array_layers: 1,
            },
            TextureDimension::D2,
            self.pixels,
            TextureFormat::Rgba8UnormSrgb,
            RenderAssetUsages::RENDER_WORLD,
        );
        image.sampler = ImageSampler::Descriptor(repeat_sampler());
        image
    }
}

const fn rgb(color: [u8; 4]) -> [u8; 3] {
    [color[0], color[1], color[2]]
}

fn shade(base: i32, offset: i32) -> u8 {
    (base + offset).clamp(0, 255) as u8
}

// ============================================================================
// Generators
// ============================================================================

// Staggered rows of bricks with varying tint and a darker bottom edge
pub fn brick_canvas(rng: &mut impl Rng) -> Canvas {
    let mut canvas = Canvas::filled(TEXTURE_SIZE, TEXTURE_SIZE, BRICK_MORTAR_COLOR);
    let mortar = BRICK_MORTAR as f32;
    let brick_w = (BRICK_WIDTH - BRICK_MORTAR * 2) as f32;
    let brick_h = (BRICK_HEIGHT - BRICK_MORTAR * 2) as f32;

    for row in 0..TEXTURE_SIZE / BRICK_HEIGHT {
        let y = (row * BRICK_HEIGHT) as f32;
        let offset = if row % 2 == 0 { 0 } else { BRICK_WIDTH / 2 };
        for col in 0..TEXTURE_SIZE / BRICK_WIDTH {
            let x = (col * BRICK_WIDTH + offset) as f32;
            let s = rng.random_range(-BRICK_SHADE_RANGE..BRICK_SHADE_RANGE);
            let color = [
                shade(BRICK_BASE_COLOR[0], s),
                shade(BRICK_BASE_COLOR[1], s),
                shade(BRICK_BASE_COLOR[2], s),
            ];
            canvas.fill_rect(x + mortar, y + mortar, brick_w, brick_h, color, 1.0);
            canvas.fill_rect(
                x + mortar,
                y + BRICK_HEIGHT as f32 - mortar - 10.0,
                brick_w,
                8.0,
                [0, 0, 0],
                0.1,
            );
        }
    }
    canvas
}

pub fn asphalt_canvas(rng: &mut impl Rng) -> Canvas {
    let mut canvas = Canvas::filled(TEXTURE_SIZE, TEXTURE_SIZE, ASPHALT_COLOR);
    let size = TEXTURE_SIZE as f32;
    for _ in 0..ASPHALT_SPECKS {
        let s = rng.random_range(-20..20);
        let grey = shade(i32::from(ASPHALT_COLOR[0]), s);
        canvas.fill_rect(
            rng.random_range(0.0..size),
            rng.random_range(0.0..size),
            rng.random_range(0.0..3.0),
            rng.random_range(0.0..3.0),
            [grey; 3],
            0.3,
        );
    }
    canvas
}

// Pale panels separated by horizontal seams, with soft blotches
pub fn concrete_canvas(rng: &mut impl Rng) -> Canvas {
    let mut canvas = Canvas::filled(TEXTURE_SIZE, TEXTURE_SIZE, CONCRETE_COLOR);
    let size = TEXTURE_SIZE as f32;
    for y in (0..TEXTURE_SIZE).step_by(CONCRETE_SEAM_SPACING as usize) {
        canvas.fill_rect(0.0, y as f32 - 1.5, size, 3.0, rgb(CONCRETE_SEAM_COLOR), 1.0);
    }
    for _ in 0..CONCRETE_BLOTCHES {
        let s = rng.random_range(-15..15);
        let grey = shade(i32::from(CONCRETE_COLOR[0]), s);
        canvas.fill_circle(
            rng.random_range(0.0..size),
            rng.random_range(0.0..size),
            rng.random_range(0.0..5.0),
            [grey; 3],
            0.5,
        );
    }
    canvas
}

pub fn bark_canvas(rng: &mut impl Rng) -> Canvas {
    let mut canvas = Canvas::filled(BARK_TEXTURE_SIZE, BARK_TEXTURE_SIZE, BARK_COLOR);
    let size = BARK_TEXTURE_SIZE as f32;
    let mut x = 0.0;
    while x < size {
        let drift = rng.random_range(-5.0..5.0);
        canvas.draw_line(Vec2::new(x, 0.0), Vec2::new(x + drift, size), 2.0, rgb(BARK_LINE_COLOR));
        x += rng.random_range(15.0..25.0);
    }
    for _ in 0..BARK_KNOTS {
        canvas.fill_ellipse(
            rng.random_range(0.0..size),
            rng.random_range(0.0..size),
            10.0,
            15.0,
            rng.random_range(0.0..PI),
            rgb(BARK_KNOT_COLOR),
            1.0,
        );
    }
    canvas
}

// Grey-green rotting skin with blood stains, wounds and a lumpy grain
pub fn zombie_skin_canvas(rng: &mut impl Rng) -> Canvas {
    let mut canvas = Canvas::filled(TEXTURE_SIZE, TEXTURE_SIZE, SKIN_COLOR);
    let size = TEXTURE_SIZE as f32;

    for _ in 0..SKIN_BLOOD_STAINS {
        let (x, y) = (rng.random_range(0.0..size), rng.random_range(0.0..size));
        let radius = rng.random_range(10.0..40.0);
        canvas.fill_radial(x, y, radius, [139, 0, 0, 204], [100, 0, 0, 128], [80, 0, 0, 0]);
    }

    for _ in 0..SKIN_WOUNDS {
        canvas.fill_rect(
            rng.random_range(0.0..size),
            rng.random_range(0.0..size),
            rng.random_range(5.0..20.0),
            rng.random_range(2.0..10.0),
            [0x4a, 0, 0],
            1.0,
        );
    }

    for _ in 0..SKIN_BUMPS {
        let s = rng.random_range(-15..15);
        let color = [
            shade(i32::from(SKIN_COLOR[0]), s),
            shade(i32::from(SKIN_COLOR[1]), s),
            shade(i32::from(SKIN_COLOR[2]), s),
        ];
        canvas.fill_rect(rng.random_range(0.0..size), rng.random_range(0.0..size), 2.0, 2.0, color, 0.3);
    }
    canvas
}
