use std::time::{Duration, Instant};

use kiss3d::event::{Action, Event, Key, WindowEvent};
use log::info;

use super::camera::OrbitCamera;
use crate::model::SimulationClock;

// Key config, all in one place. Letters match either case.
const KEY_QUIT: char = 'q';
const KEY_QUIT_ALT: Key = Key::Escape;
const KEY_SPEED_UP: char = '+';
const KEY_SLOW_DOWN: char = '-';
const KEY_RESET: char = 'r';

pub const KEY_HELP: &str = "Drag: rotate | Scroll: zoom | +/-: speed | R: reset | Q/Esc: quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    Quit,
    SpeedUp,
    SlowDown,
    Reset,
}

impl KeyCommand {
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            KEY_QUIT => Some(KeyCommand::Quit),
            KEY_SPEED_UP => Some(KeyCommand::SpeedUp),
            KEY_SLOW_DOWN => Some(KeyCommand::SlowDown),
            KEY_RESET => Some(KeyCommand::Reset),
            _ => None,
        }
    }
}

pub struct Controller {
    clock: SimulationClock,
    quit_requested: bool,
    fps_counter: FpsCounter,
}

pub struct FpsCounter {
    instant: Instant,
    counter: usize,
    window: Duration,
    previous_fps: f64,
}

impl FpsCounter {
    pub fn new(window: Duration) -> Self {
        FpsCounter {
            instant: Instant::now(),
            counter: 0,
            window,
            previous_fps: 0.0,
        }
    }

    pub fn reset(&mut self) {
        self.instant = Instant::now();
        self.counter = 0;
    }

    pub fn value(&self) -> f64 {
        self.previous_fps
    }

    pub fn increment(&mut self) {
        self.counter += 1;

        let elapsed = self.instant.elapsed();
        if elapsed > self.window {
            self.previous_fps = self.counter as f64 / elapsed.as_secs_f64();
            self.reset();
        }
    }
}

impl Controller {
    pub fn new() -> Self {
        Controller {
            clock: SimulationClock::new(),
            quit_requested: false,
            fps_counter: FpsCounter::new(Duration::from_secs(1)),
        }
    }

    pub fn process_event(&mut self, event: Event, camera: &mut OrbitCamera) {
        let command = match event.value {
            WindowEvent::Char(c) => KeyCommand::from_char(c),
            WindowEvent::Key(KEY_QUIT_ALT, Action::Press, _) => Some(KeyCommand::Quit),
            _ => None,
        };

        if let Some(command) = command {
            self.apply(command, camera);
        }
    }

    pub fn apply(&mut self, command: KeyCommand, camera: &mut OrbitCamera) {
        match command {
            KeyCommand::Quit => {
                info!("Quit requested");
                self.quit_requested = true;
            }
            KeyCommand::SpeedUp => {
                self.clock.speed_up();
                info!("Time speed is {:.3}x", self.clock.time_speed());
            }
            KeyCommand::SlowDown => {
                self.clock.slow_down();
                info!("Time speed is {:.3}x", self.clock.time_speed());
            }
            KeyCommand::Reset => {
                self.clock.reset();
                camera.reset();
                info!("Reset time speed and camera");
            }
        }
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    pub fn time_speed(&self) -> f64 {
        self.clock.time_speed()
    }

    pub fn fps(&self) -> f64 {
        self.fps_counter.value()
    }

    pub fn increment_frame_counter(&mut self) {
        self.fps_counter.increment()
    }
}

impl Default for Controller {
    fn default() -> Self {
        Self::new()
    }
}
