//! Ninja Runner - terminal entry point

use std::io::{self, BufWriter, Write};
use std::time::Duration;

use crossterm::event::{self, Event};
use crossterm::terminal;

use ninja_runner::Settings;
use ninja_runner::platform::{FrameClock, InputTracker, PixelCanvas, TerminalSession};
use ninja_runner::renderer::draw_frame;
use ninja_runner::sim::{GameEvent, GameState, tick};

/// Game instance holding all state
struct Game {
    state: GameState,
    input: InputTracker,
    clock: FrameClock,
    canvas: PixelCanvas,
    show_hint: bool,
    runs: u32,
}

impl Game {
    fn new(settings: &Settings, seed: u64, session: &TerminalSession, cols: u16, rows: u16) -> Self {
        Self {
            state: GameState::with_config(seed, &settings.sim_config()),
            input: InputTracker::new(settings.target_fps, session.keyboard_enhanced()),
            clock: FrameClock::new(settings.target_fps),
            canvas: PixelCanvas::new(cols, rows),
            show_hint: settings.show_controls_hint,
            runs: 1,
        }
    }

    /// Drain pending terminal events. Returns false once quit was requested.
    fn poll_events(&mut self) -> io::Result<bool> {
        while event::poll(Duration::ZERO)? {
            match event::read()? {
                Event::Key(key) => self.input.handle_key(key),
                Event::Resize(cols, rows) => {
                    log::debug!("Terminal resized to {}x{}", cols, rows);
                    self.canvas.resize(cols, rows);
                }
                _ => {}
            }
        }
        Ok(!self.input.quit_requested())
    }

    /// Run one simulation tick
    fn update(&mut self, dt_ms: f32) {
        let input = self.input.next_input();
        for event in tick(&mut self.state, &input, dt_ms) {
            if event == GameEvent::Restarted {
                self.runs += 1;
            }
        }
    }

    /// Render the current frame
    fn render(&mut self, out: &mut impl Write) -> io::Result<()> {
        draw_frame(&mut self.canvas, &self.state, self.show_hint);
        self.canvas.present(out)
    }
}

fn run(game: &mut Game, out: &mut impl Write) -> io::Result<()> {
    loop {
        let dt_ms = game.clock.tick();
        if !game.poll_events()? {
            return Ok(());
        }
        game.update(dt_ms);
        game.render(out)?;
        game.clock.wait();
    }
}

fn main() -> io::Result<()> {
    env_logger::init();
    log::info!("Ninja Runner starting...");

    let settings = Settings::load();
    log::debug!("Settings: {:?}", settings);
    let seed = settings.resolve_seed();

    let session = TerminalSession::start()?;
    let (cols, rows) = terminal::size()?;
    let mut game = Game::new(&settings, seed, &session, cols, rows);
    log::info!("Game initialized with seed: {} ({}x{} cells)", seed, cols, rows);

    let mut out = BufWriter::new(io::stdout());
    let result = run(&mut game, &mut out);
    drop(out);
    drop(session);

    log::info!(
        "Ninja Runner stopped after {} frames: {} run(s), high score {}",
        game.clock.frame_count(),
        game.runs,
        game.state.high_score
    );
    result
}
