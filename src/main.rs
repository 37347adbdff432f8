//! Terminal spinning cube (default binary).
//!
//! Runs the fixed-rate frame loop: drain input events, spin the cube, render
//! into a framebuffer, flush the changed cells, then sleep out the rest of the
//! frame.

use std::thread;
use std::time::Instant;

use anyhow::{Context, Result};

use tui_cube::core::{frame_budget, frame_period, Cube, FrameTimer, Spin};
use tui_cube::input::EventSource;
use tui_cube::term::{CubeView, FrameBuffer, TerminalRenderer, Viewport};
use tui_cube::types::{DriverEvent, SIDE_LENGTH};

/// What the loop leaves behind for the exit summary.
struct Session {
    frames: u64,
    timer: FrameTimer,
}

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    let result = term.enter().and_then(|()| run(&mut term));

    // Always try to restore terminal state.
    let _ = term.exit();

    match result {
        Ok(session) => {
            eprintln!(
                "[cube] {} frames, avg frame time {:.1}ms",
                session.frames,
                session.timer.average_ms()
            );
            Ok(())
        }
        Err(e) => {
            eprintln!("[cube] fatal: {:#}", e);
            Err(e)
        }
    }
}

fn run(term: &mut TerminalRenderer) -> Result<Session> {
    let (w, h) = crossterm::terminal::size().context("query terminal size")?;
    let mut viewport = Viewport::new(w, h);
    let mut events = EventSource::start()?;

    let view = CubeView::default();
    let mut fb = FrameBuffer::new(viewport.width, viewport.height);
    let mut cube = Cube::new(SIDE_LENGTH);
    cube.set_origin(viewport.cube_origin());

    let mut spin = Spin::default();
    let mut session = Session {
        frames: 0,
        timer: FrameTimer::new(),
    };

    let target = frame_period();
    let mut last_frame = Instant::now();

    loop {
        while let Some(event) = events.try_recv() {
            match event {
                DriverEvent::Quit => return Ok(session),
                DriverEvent::TogglePause => spin.toggle_pause(),
                DriverEvent::Resize { width, height } => {
                    viewport = Viewport::new(width, height);
                    cube.set_origin(viewport.cube_origin());
                    term.invalidate();
                }
            }
        }

        let frame_start = Instant::now();
        let delta = frame_start.duration_since(last_frame);
        last_frame = frame_start;

        cube.set_rotation(spin.rotation());
        view.render_into(&cube, &session.timer, viewport, &mut fb);
        term.draw(&fb)?;

        session.timer.record(frame_start.elapsed());
        session.frames += 1;
        spin.advance(delta);

        let budget = frame_budget(target, frame_start.elapsed());
        if !budget.is_zero() {
            thread::sleep(budget);
        }
    }
}
