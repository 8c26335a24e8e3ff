//! Color theme constants for the sessions sheet.
//!
//! Colors are `Rgb` so animation progress can alpha-blend them; the terminal
//! has no real opacity, so "fading" is a blend toward the backdrop color.

use ratatui::style::Color;

/// Terminal backdrop behind everything
pub const COLOR_BACKDROP: Color = Color::Rgb(10, 10, 14);

/// Scrim color at full opacity
pub const COLOR_SCRIM: Color = Color::Rgb(28, 28, 38);

/// Card surface
pub const COLOR_CARD_BG: Color = Color::Rgb(24, 26, 34);

/// Card border
pub const COLOR_BORDER: Color = Color::Rgb(90, 90, 110);

/// Card title and hint text
pub const COLOR_DIM: Color = Color::Rgb(140, 140, 150);

/// Row text
pub const COLOR_ROW_TEXT: Color = Color::Rgb(222, 222, 232);

/// Row background, default treatment
pub const COLOR_ROW_BG: Color = Color::Rgb(40, 42, 54);

/// Row background, current-session treatment
pub const COLOR_ROW_CURRENT_BG: Color = Color::Rgb(84, 62, 130);

/// Blend `fg` toward `bg` by `alpha` (1.0 keeps `fg`, 0.0 yields `bg`).
///
/// Non-RGB colors cannot be interpolated; they snap at the midpoint.
pub fn blend(fg: Color, bg: Color, alpha: f32) -> Color {
    let t = alpha.clamp(0.0, 1.0);
    match (fg, bg) {
        (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
            let mix = |a: u8, b: u8| (f32::from(a) * t + f32::from(b) * (1.0 - t)).round() as u8;
            Color::Rgb(mix(r1, r2), mix(g1, g2), mix(b1, b2))
        }
        _ => {
            if t >= 0.5 {
                fg
            } else {
                bg
            }
        }
    }
}
