//! Frame drawing
//!
//! Reads session state and draws it. Purely presentational: nothing here
//! feeds back into the simulation.

use macroquad::prelude::*;

use crate::consts::{PICKUP_RADIUS, PLAYER_SIZE, TILE_SIZE};
use crate::sim::{Outcome, Session, Tile};

/// Draw one frame of the session: tiles, pickups, body, HUD and, once the
/// outcome is terminal, a centered banner.
pub fn draw_session(session: &Session) {
    clear_background(BLACK);

    for (row, col, tile) in session.grid.cells() {
        let x = col as f32 * TILE_SIZE;
        let y = row as f32 * TILE_SIZE;
        match tile {
            Tile::Wall => draw_rectangle(x, y, TILE_SIZE, TILE_SIZE, WHITE),
            Tile::Exit => draw_rectangle(x, y, TILE_SIZE, TILE_SIZE, GREEN),
            Tile::Hazard => draw_rectangle(x, y, TILE_SIZE, TILE_SIZE, RED),
            Tile::Empty | Tile::PlayerStart | Tile::Pickup => {}
        }
    }

    // Remaining pickups come from the session list; collected ones are
    // already gone from both the list and the grid.
    for pickup in &session.pickups {
        draw_circle(pickup.x, pickup.y, PICKUP_RADIUS, YELLOW);
    }

    let body = &session.body;
    draw_circle(body.pos.x, body.pos.y, PLAYER_SIZE / 2.0, BLUE);

    let hud = format!(
        "Pickups: {}/{}",
        session.collected_pickups, session.total_pickups
    );
    draw_text(&hud, 10.0, 26.0, 24.0, WHITE);

    match session.outcome {
        Outcome::Won => banner("You made it!", GREEN),
        Outcome::Lost => banner("Squished! Press Esc to quit", RED),
        Outcome::InProgress => {}
    }
}

fn banner(text: &str, color: Color) {
    let font_size = 48.0;
    let dims = measure_text(text, None, font_size as u16, 1.0);
    draw_text(
        text,
        (screen_width() - dims.width) / 2.0,
        screen_height() / 2.0,
        font_size,
        color,
    );
}
