//! Rendering for the sessions sheet.
//!
//! The sheet draws in three layers: the backdrop, the scrim whose opacity
//! tracks the sheet animation linearly, and the card whose scale and
//! opacity track the accelerated animation value. A hidden sheet renders
//! nothing and registers no hit areas, so it is fully excluded from
//! interaction.

pub mod interaction;
pub mod theme;

pub use interaction::{handle_sheet_action, HitRegistry, SheetAction};

use std::time::Instant;

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::App;
use crate::session::display::truncate_to_width;
use theme::{
    blend, COLOR_BACKDROP, COLOR_BORDER, COLOR_CARD_BG, COLOR_DIM, COLOR_ROW_BG,
    COLOR_ROW_CURRENT_BG, COLOR_ROW_TEXT, COLOR_SCRIM,
};

/// Widest the card gets, in cells.
const CARD_MAX_WIDTH: u16 = 50;

/// Render one frame.
pub fn render(frame: &mut Frame, app: &mut App, now: Instant) {
    let area = frame.area();
    app.hit_registry.clear();

    frame.render_widget(
        Block::default().style(Style::default().bg(COLOR_BACKDROP)),
        area,
    );

    if !app.sheet.is_visible() {
        return;
    }

    // Scrim, in lockstep with the card animation but linear
    let scrim_color = blend(COLOR_SCRIM, COLOR_BACKDROP, app.sheet.scrim_progress(now));
    frame.render_widget(Block::default().style(Style::default().bg(scrim_color)), area);
    if app.sheet.is_interactive() {
        app.hit_registry.register(area, SheetAction::DismissSheet);
    }

    let t = app.sheet.card_progress(now);
    let card_area = scaled_rect(card_area_full(area, app.binder.len()), t);
    if card_area.width < 4 || card_area.height < 3 {
        return;
    }

    frame.render_widget(Clear, card_area);
    let card_bg = blend(COLOR_CARD_BG, scrim_color, t);
    let block = Block::default()
        .title(Span::styled(
            " Sessions ",
            Style::default()
                .fg(blend(COLOR_DIM, scrim_color, t))
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(blend(COLOR_BORDER, scrim_color, t)))
        .style(Style::default().bg(card_bg));
    frame.render_widget(block, card_area);

    let inner = Rect {
        x: card_area.x + 1,
        y: card_area.y + 1,
        width: card_area.width.saturating_sub(2),
        height: card_area.height.saturating_sub(2),
    };

    let interactive = app.sheet.is_interactive();
    let text_color = blend(COLOR_ROW_TEXT, scrim_color, t);

    if app.binder.is_empty() {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                " No open sessions",
                Style::default().fg(blend(COLOR_DIM, scrim_color, t)),
            ))),
            inner,
        );
    }

    for (index, slot) in app.binder.rows_mut().iter_mut().enumerate() {
        let row_y = inner.y + (index as u16) * 2;
        if row_y + 1 >= inner.y + inner.height {
            // Row no longer fits (mid-animation or tiny terminal)
            slot.area = Rect::ZERO;
            continue;
        }

        let resting = Rect::new(inner.x, row_y, inner.width, 1);
        slot.area = resting;
        if interactive {
            app.hit_registry.register(resting, SheetAction::Row(index));
        }

        // Rightward drag offset, clipped at the frame edge
        let offset = slot.gesture.offset(now).min(area.width);
        let row_x = resting.x.saturating_add(offset).min(area.right());
        let row_width = resting.width.min(area.right().saturating_sub(row_x));
        if row_width == 0 {
            continue;
        }

        let row_bg = if slot.visual.is_current {
            COLOR_ROW_CURRENT_BG
        } else {
            COLOR_ROW_BG
        };
        let style = Style::default()
            .bg(blend(row_bg, card_bg, t))
            .fg(text_color);

        let text = truncate_to_width(&slot.visual.text, row_width.saturating_sub(2) as usize);
        let padded = format!(" {text:<width$}", width = row_width.saturating_sub(1) as usize);
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(padded, style))),
            Rect::new(row_x, row_y, row_width, 1),
        );
    }

    // Hint line on the card's last inner row
    if inner.height >= 2 {
        let hint_y = inner.y + inner.height - 1;
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                " tap: switch   swipe right: close   esc: dismiss",
                Style::default().fg(blend(COLOR_DIM, scrim_color, t)),
            ))),
            Rect::new(inner.x, hint_y, inner.width, 1),
        );
    }
}

/// The card's resting (fully shown) area, centered in `area`.
fn card_area_full(area: Rect, row_count: usize) -> Rect {
    let width = CARD_MAX_WIDTH.min(area.width.saturating_sub(4));
    // Rows are one line each with a blank line between, plus borders,
    // a separating blank and the hint line.
    let rows_height = if row_count == 0 {
        1
    } else {
        (row_count as u16) * 2 - 1
    };
    let height = (rows_height + 4).min(area.height.saturating_sub(2));

    let x = (area.width.saturating_sub(width)) / 2;
    let y = (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

/// Scale `rect` uniformly around its center by `t` in `[0, 1]`.
fn scaled_rect(rect: Rect, t: f32) -> Rect {
    let t = t.clamp(0.0, 1.0);
    let width = (f32::from(rect.width) * t).round() as u16;
    let height = (f32::from(rect.height) * t).round() as u16;
    let x = rect.x + (rect.width - width) / 2;
    let y = rect.y + (rect.height - height) / 2;
    Rect::new(x, y, width, height)
}
