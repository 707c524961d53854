use anyhow::Result;
use rand::random_range;
use sdl3::Sdl;
use sdl3::event::Event;
use sdl3::keyboard::Keycode;
use sdl3::pixels::Color;
use sdl3::render::Canvas;
use sdl3::video::Window;

use tilted::{AppError, FrameClock, OrientedRect, Vec2f, debugln, draw};

/// Interactive demo: a spinning rectangle follows the cursor over a field of
/// scattered obstacles. Colliding obstacles fill in and the overlap polygon
/// with its area is shown.
struct DemoCore {
    sdl: Sdl,
    canvas: Canvas<Window>,
    obstacles: Vec<OrientedRect>,
    player: OrientedRect,
}

impl DemoCore {
    const WIDTH: u32 = 800;
    const HEIGHT: u32 = 600;
    const OBSTACLES: usize = 6;
    /// Rotation speed of the player in degrees per second.
    const SPIN: f32 = 45.0;
    const FPS: f32 = 60.0;

    /// Creates the demo by initializing the SDL context, creating a window,
    /// and scattering the obstacles.
    fn new() -> Result<Self, AppError> {
        let sdl = sdl3::init().map_err(AppError::Sdl)?;
        let video = sdl.video().map_err(AppError::Sdl)?;

        let window = video
            .window("TILTED", Self::WIDTH, Self::HEIGHT)
            .build()
            .map_err(|why| AppError::Window(why.to_string()))?;

        let canvas = window.into_canvas();

        #[allow(clippy::cast_precision_loss)]
        let (max_x, max_y) = (Self::WIDTH as f32, Self::HEIGHT as f32);
        let obstacles = (0..Self::OBSTACLES)
            .map(|_| {
                OrientedRect::new(
                    random_range(0.0..max_x - 140.0),
                    random_range(0.0..max_y - 140.0),
                    random_range(40.0..140.0),
                    random_range(40.0..140.0),
                    random_range(0.0..360.0),
                )
            })
            .collect();

        Ok(Self {
            sdl,
            canvas,
            obstacles,
            player: OrientedRect::new(0.0, 0.0, 96.0, 64.0, 30.0),
        })
    }

    /// Runs the main loop: input, spin, collision queries, and rendering.
    fn run(&mut self) -> Result<(), AppError> {
        let mut event_pump = self.sdl.event_pump().map_err(AppError::Sdl)?;
        let mut clock = FrameClock::new(Self::FPS);

        'demo_loop: loop {
            let dt = clock.tick();

            for event in event_pump.poll_iter() {
                match event {
                    Event::Quit { .. }
                    | Event::KeyDown {
                        keycode: Some(Keycode::Escape),
                        ..
                    } => break 'demo_loop,

                    Event::MouseMotion { x, y, .. } => {
                        // Keep the cursor on the player's center.
                        let corner = Vec2f(x, y) - self.player.dimensions().scale(0.5);
                        self.player.x = corner.0;
                        self.player.y = corner.1;
                    }

                    _ => (),
                }
            }

            self.player.rotation += Self::SPIN * dt;

            self.canvas.set_draw_color(Color::RGB(255, 255, 255));
            self.canvas.clear();

            let mut total_area = 0.0;
            for obstacle in &self.obstacles {
                if self.player.intersects(obstacle) {
                    draw::fill(&mut self.canvas, obstacle, Color::RGB(255, 210, 210));
                    draw::outline(&mut self.canvas, obstacle, Color::RGB(200, 0, 0));

                    let overlap = self.player.overlap(obstacle);
                    total_area += overlap.area();
                    draw::overlap_lines(&mut self.canvas, &overlap, Color::RGB(255, 0, 0));
                } else {
                    draw::outline(&mut self.canvas, obstacle, Color::RGB(0, 0, 0));
                }
            }

            draw::outline(&mut self.canvas, &self.player, Color::RGB(0, 0, 255));

            if total_area > 0.0 {
                debugln!("Overlap area: {:.1} px^2", total_area);
            }

            self.canvas.present();
        }

        Ok(())
    }
}

fn main() -> Result<()> {
    let mut demo = DemoCore::new()?;
    demo.run()?;
    Ok(())
}
