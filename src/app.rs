use color_eyre::Result;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::time::{Duration, Instant};

use crate::game::{FRAME_INTERVAL, Game};
use crate::input::{InputEvent, InputManager};
use crate::renderer::{GameRenderer, RenderView};

/// The main application: owns the game, the input translation layer and
/// the renderer, and drives the fixed-timestep loop.
pub struct App {
    running: bool,
    game: Game,
    input_manager: InputManager,
    renderer: GameRenderer,
    /// Real time accumulated toward the next simulation frame.
    accumulator: Duration,
    last_loop_time: Instant,
    fps: u32,
}

impl App {
    /// Construct a new instance of [`App`].
    pub fn new() -> Self {
        Self {
            running: true,
            game: Game::new(),
            input_manager: InputManager::new(),
            renderer: GameRenderer::new(),
            accumulator: Duration::ZERO,
            last_loop_time: Instant::now(),
            fps: 0,
        }
    }

    /// Run the application's main loop. Input is drained every
    /// iteration; the game only updates and draws once enough real time
    /// has accumulated for a full fixed-timestep frame.
    pub fn run(mut self, terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>) -> Result<()> {
        while self.running {
            let now = Instant::now();
            self.accumulator += now.duration_since(self.last_loop_time);
            self.last_loop_time = now;

            for event in self.input_manager.poll_events()? {
                match event {
                    InputEvent::Quit => self.running = false,
                    InputEvent::Pressed(key) => self.game.key_pressed(key),
                    InputEvent::Released(key) => self.game.key_released(key),
                }
            }

            if self.accumulator >= FRAME_INTERVAL {
                let dt = self.accumulator;
                self.accumulator = Duration::ZERO;
                if dt.as_micros() > 0 {
                    self.fps = (1_000_000 / dt.as_micros()) as u32;
                }

                self.game.update(dt.as_secs_f32() * 1000.0);

                terminal.draw(|frame| {
                    let view = RenderView {
                        player: &self.game.player,
                        projectiles: &self.game.projectiles,
                        waves: &self.game.waves,
                        score: self.game.score,
                        wave_count: self.game.wave_count,
                        is_game_over: self.game.is_game_over,
                        area: frame.area(),
                        fps: self.fps,
                    };
                    self.renderer.render(frame, &view);
                })?;
            }

            // Small sleep to prevent CPU spinning between frames
            std::thread::sleep(Duration::from_millis(2));
        }
        Ok(())
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
