//! Cannon Pong entry point
//!
//! Native builds run the mode headless: an autopilot aims at the defending
//! paddle and fires, frames go to a recording sink, and the run ends when the
//! game does. Pass a settings JSON path as the first argument to override
//! render settings.

mod native {
    use cannon_pong::renderer::RecordingSink;
    use cannon_pong::sim::{InputEvent, Key, PointerButton};
    use cannon_pong::{ModeHost, Settings, ShootMode};
    use glam::{UVec2, Vec3};

    /// Fixed frame clock (60 Hz)
    const FRAME_DT: f32 = 1.0 / 60.0;
    /// Give up after two minutes of game time
    const MAX_FRAMES: u32 = 60 * 120;
    const WINDOW: UVec2 = UVec2::new(1280, 720);

    struct Host {
        running: bool,
    }

    impl ModeHost for Host {
        fn clear_current(&mut self) {
            log::info!("Mode cleared, stopping");
            self.running = false;
        }
    }

    fn load_settings() -> Settings {
        let Some(path) = std::env::args().nth(1) else {
            return Settings::load(None);
        };
        match std::fs::read_to_string(&path) {
            Ok(json) => Settings::load(Some(&json)),
            Err(e) => {
                log::warn!("Could not read settings from {}: {}", path, e);
                Settings::default()
            }
        }
    }

    /// Events a player would send this frame: aim at the defender, fire when
    /// loaded, decline a new game once it is over
    fn autopilot(mode: &ShootMode, sink: &RecordingSink) -> Vec<InputEvent> {
        let state = mode.state();
        if state.status.outcome.is_ended() {
            return vec![InputEvent::KeyDown { key: Key::Char('n') }];
        }

        let mut events = Vec::with_capacity(2);
        if sink.frames > 0 {
            let target = state.right_paddle.pos;
            let clip = sink
                .court_to_clip
                .transform_point3(Vec3::new(target.x, target.y, 0.0));
            events.push(InputEvent::PointerMotion {
                x: (clip.x + 1.0) / 2.0 * WINDOW.x as f32 - 0.5,
                y: (1.0 - clip.y) / 2.0 * WINDOW.y as f32 - 0.5,
            });
        }
        if !state.status.shooting {
            events.push(InputEvent::PointerDown {
                button: PointerButton::Left,
            });
        }
        events
    }

    pub fn run() {
        env_logger::init();
        log::info!("Cannon Pong (headless) starting...");

        let mut mode = ShootMode::new(load_settings());
        let mut host = Host { running: true };
        let mut sink = RecordingSink::new();

        let mut frame = 0;
        while host.running && frame < MAX_FRAMES {
            for event in autopilot(&mode, &sink) {
                mode.handle_event(&event, WINDOW, &mut host);
            }
            mode.update(FRAME_DT);
            mode.draw(WINDOW, &mut sink);
            frame += 1;
        }

        log::info!(
            "Stopped after {} frames ({} triangles, {} bytes in last frame)",
            frame,
            sink.triangle_count(),
            sink.vertex_bytes().len()
        );
        match serde_json::to_string(&mode.state().status) {
            Ok(json) => println!("{json}"),
            Err(e) => log::error!("Could not serialize final status: {}", e),
        }
    }
}

fn main() {
    native::run();
}
