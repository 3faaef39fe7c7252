//! Terminal falling-block game runner.
//!
//! Owns the process context: the RNG seed, terminal acquisition and
//! release, and the input -> gravity -> render loop. The loop paces itself
//! by spending the remaining frame budget inside the bounded input poll.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;

use termtris::core::GameState;
use termtris::input::{handle_key_event, should_quit, CrosstermInput, InputSource};
use termtris::term::{GameView, TerminalRenderer};
use termtris::types::{GameConfig, FRAME_MS};

/// How a game ended
enum Outcome {
    Quit,
    ToppedOut,
}

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();

    match result? {
        (Outcome::Quit, score) => println!("Game ended! Score: {score}"),
        (Outcome::ToppedOut, score) => println!("GAME OVER! Final score: {score}"),
    }
    Ok(())
}

fn run(term: &mut TerminalRenderer) -> Result<(Outcome, u32)> {
    let mut state = GameState::new(GameConfig::default(), clock_seed());
    state.start();

    let view = GameView::default();
    let mut input = CrosstermInput;
    let mut frame = String::new();

    let frame_duration = Duration::from_millis(FRAME_MS as u64);
    let mut last_frame = Instant::now();

    loop {
        // Render.
        view.render_into(&state, &mut frame);
        term.draw(&frame)?;

        if state.game_over() {
            return Ok((Outcome::ToppedOut, state.score()));
        }

        // Input: a bounded poll spending at most the remaining frame
        // budget, so gravity is never starved while keys are idle.
        let timeout = frame_duration
            .checked_sub(last_frame.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));
        if let Some(key) = input.poll_key(timeout)? {
            if should_quit(key) {
                return Ok((Outcome::Quit, state.score()));
            }
            if let Some(action) = handle_key_event(key) {
                state.apply_action(action);
            }
        }

        // Gravity, fed with measured wall-clock time once per frame.
        if last_frame.elapsed() >= frame_duration {
            let elapsed_ms = last_frame.elapsed().as_millis() as u32;
            last_frame = Instant::now();
            state.tick(elapsed_ms);
        }
    }
}

/// Seed for the piece RNG, taken from the wall clock at startup
fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(0x5eed)
}
