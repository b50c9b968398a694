//! Gravity Maze entry point
//!
//! Owns the window, input polling and frame pacing. The simulation lives in
//! `gravity_maze::sim` and is advanced here in fixed timesteps.

use macroquad::prelude::*;

use gravity_maze::consts::{MAX_SUBSTEPS, SCREEN_HEIGHT, SCREEN_WIDTH, SIM_DT};
use gravity_maze::render;
use gravity_maze::sim::level;
use gravity_maze::sim::{Grid, LevelError, Session, TickInput, tick};

fn window_conf() -> Conf {
    Conf {
        window_title: "Gravity Maze".to_owned(),
        window_width: SCREEN_WIDTH,
        window_height: SCREEN_HEIGHT,
        ..Default::default()
    }
}

/// Grid from the path given on the command line, or the built-in level
fn load_grid() -> Result<Grid, LevelError> {
    match std::env::args().nth(1) {
        Some(path) => level::load_file(&path),
        None => level::parse(level::DEFAULT_LEVEL),
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    let mut session = match load_grid().and_then(Session::new) {
        Ok(session) => session,
        Err(err) => {
            log::error!("could not start level: {err}");
            std::process::exit(1);
        }
    };

    let mut input = TickInput::default();
    let mut accumulator = 0.0_f32;
    let mut last_outcome = session.outcome;

    loop {
        if is_key_pressed(KeyCode::Escape) {
            break;
        }
        if is_key_pressed(KeyCode::Space) {
            input.gravity_cycles += 1;
        }

        accumulator += get_frame_time().min(0.1);
        let mut substeps = 0;
        while accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            tick(&mut session, &input);
            accumulator -= SIM_DT;
            substeps += 1;
            // One-shot inputs feed exactly one tick
            input = TickInput::default();
        }

        if session.outcome != last_outcome {
            log::info!("outcome: {:?}", session.outcome);
            last_outcome = session.outcome;
        }

        render::draw_session(&session);
        next_frame().await;
    }
}
