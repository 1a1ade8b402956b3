/// Heartglow - a rotating wireframe heart for the terminal
///
/// Renders a pulsing 3D heart with ambient aura, ripples, shooting stars,
/// and orbiting sparkles. Press Q or ESC to quit.

use heartglow_terminal::HeartApp;
use std::io;

fn main() -> io::Result<()> {
    let mut app = HeartApp::new()?;
    app.run()
}
