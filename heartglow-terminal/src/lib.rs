/// Terminal frontend for the heart animation
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal,
};
use heartglow_core::{AnimationState, HeartSurface};
use std::io::{self, stdout, Write};
use std::time::{Duration, Instant, UNIX_EPOCH};

pub mod canvas;
pub mod scene;

pub use canvas::{Canvas, Rgba};
pub use scene::SceneRenderer;

const TARGET_FPS: u64 = 30;

/// Main application struct driving the animation in the terminal.
///
/// Owns the drawing surface, the scene renderer, and the animation state;
/// the frame loop runs strictly sequentially and reschedules itself until
/// stopped with `q`/Esc.
pub struct HeartApp {
    state: AnimationState,
    scene: SceneRenderer,
    canvas: Canvas,
    running: bool,
}

impl HeartApp {
    /// Build the app against the current terminal. Fails before the loop
    /// starts if the terminal cannot report a size.
    pub fn new() -> io::Result<Self> {
        let (columns, rows) = terminal::size()?;
        let canvas = Canvas::new(columns, rows);

        let seed = UNIX_EPOCH
            .elapsed()
            .map(|elapsed| elapsed.as_nanos() as u64)
            .unwrap_or(0);

        Ok(Self {
            state: AnimationState::new(seed, &canvas.viewport()),
            scene: SceneRenderer::new(HeartSurface::default()),
            canvas,
            running: true,
        })
    }

    pub fn run(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;

        let result = self.main_loop();

        // Cleanup
        terminal::disable_raw_mode()?;
        execute!(stdout(), terminal::LeaveAlternateScreen, cursor::Show)?;

        result
    }

    fn main_loop(&mut self) -> io::Result<()> {
        let target_frame_time = Duration::from_millis(1000 / TARGET_FPS);

        while self.running {
            let frame_start = Instant::now();

            // Handle input
            if event::poll(Duration::from_millis(0))? {
                self.handle_event()?;
            }

            // Update
            self.state.tick(&self.canvas.viewport());

            // Render
            self.render()?;

            // Frame timing
            let elapsed = frame_start.elapsed();
            if elapsed < target_frame_time {
                std::thread::sleep(target_frame_time - elapsed);
            }
        }

        Ok(())
    }

    fn handle_event(&mut self) -> io::Result<()> {
        match event::read()? {
            Event::Key(KeyEvent { code, .. }) => match code {
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.running = false;
                }
                _ => {}
            },
            // A resize only swaps the drawing surface; per-frame state is
            // untouched.
            Event::Resize(columns, rows) => {
                self.canvas = Canvas::new(columns, rows);
            }
            _ => {}
        }
        Ok(())
    }

    fn render(&mut self) -> io::Result<()> {
        self.scene.render(&mut self.canvas, &self.state);

        let mut stdout = stdout();
        self.canvas.draw(&mut stdout)?;

        queue!(
            stdout,
            cursor::MoveTo(0, 0),
            SetForegroundColor(Color::DarkGrey),
            Print("heartglow | q to quit"),
            ResetColor
        )?;

        stdout.flush()?;
        Ok(())
    }
}
