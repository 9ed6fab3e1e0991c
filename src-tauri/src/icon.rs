use crate::classify::AqiLevel;

// Icon rendering configuration
pub const ICON_SIZE: u32 = 32; // Final tray icon size
const RENDER_SCALE: u32 = 4; // Render at 4x for quality
const RENDER_SIZE: u32 = ICON_SIZE * RENDER_SCALE; // 128px

// Dot radius and ring width at render resolution
const DOT_RADIUS: i32 = 52;
const RING_WIDTH: i32 = 6;

const UNKNOWN_COLOR: [u8; 3] = [128, 128, 128];

/// Darken a colour for the outline ring so light dots stay visible on light menu bars
fn ring_color(rgb: [u8; 3]) -> [u8; 3] {
    rgb.map(|c| (c as f32 * 0.6) as u8)
}

/// Render a filled dot in `rgb` with a darker ring, downscaled to `ICON_SIZE`
fn render_dot(rgb: [u8; 3]) -> Vec<u8> {
    use image::{Rgba, RgbaImage, imageops};
    use imageproc::drawing::draw_filled_circle_mut;

    let mut img = RgbaImage::from_pixel(RENDER_SIZE, RENDER_SIZE, Rgba([0, 0, 0, 0]));
    let center = (RENDER_SIZE as i32 / 2, RENDER_SIZE as i32 / 2);

    let ring = ring_color(rgb);
    draw_filled_circle_mut(
        &mut img,
        center,
        DOT_RADIUS,
        Rgba([ring[0], ring[1], ring[2], 255]),
    );
    draw_filled_circle_mut(
        &mut img,
        center,
        DOT_RADIUS - RING_WIDTH,
        Rgba([rgb[0], rgb[1], rgb[2], 255]),
    );

    // Downscale to final icon size for smooth edges
    let final_img = imageops::resize(&img, ICON_SIZE, ICON_SIZE, imageops::FilterType::Lanczos3);

    final_img.into_raw()
}

/// RGBA bytes for the tray icon: the bucket colour, or grey when there is no reading
pub fn generate_level_icon(level: Option<AqiLevel>) -> Vec<u8> {
    let rgb = level.map(|l| l.color()).unwrap_or(UNKNOWN_COLOR);
    render_dot(rgb)
}
