use crate::games::GameMode;
use crate::games::shooter::KEY_STEP;
use crate::games::snake::Direction;

/// Keys the games react to. Anything else is dropped at the edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    A,
    D,
    Space,
}

impl Key {
    /// Accepts DOM-style key values and codes (`"ArrowLeft"`, `"a"`,
    /// `"KeyA"`, `" "`, `"Spacebar"`).
    pub fn from_code(code: &str) -> Option<Key> {
        match code {
            "ArrowLeft" | "Left" => Some(Key::ArrowLeft),
            "ArrowRight" | "Right" => Some(Key::ArrowRight),
            "ArrowUp" | "Up" => Some(Key::ArrowUp),
            "ArrowDown" | "Down" => Some(Key::ArrowDown),
            "a" | "A" | "KeyA" => Some(Key::A),
            "d" | "D" | "KeyD" => Some(Key::D),
            " " | "Space" | "Spacebar" => Some(Key::Space),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    /// Pointer position as a percentage of the play-field width.
    PointerMove(f32),
    PointerActivate,
    KeyDown(Key),
}

/// Player intent, already specific to the running mode.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Intent {
    MoveTo(f32),
    MoveBy(f32),
    Fire,
    SetDirection(Direction),
}

pub struct InputAdapter;

impl InputAdapter {
    pub fn translate(mode: GameMode, event: InputEvent) -> Option<Intent> {
        match mode {
            GameMode::Shooter => Self::translate_shooter(event),
            GameMode::Snake => Self::translate_snake(event),
        }
    }

    fn translate_shooter(event: InputEvent) -> Option<Intent> {
        match event {
            InputEvent::PointerMove(x) if x.is_finite() => Some(Intent::MoveTo(x)),
            InputEvent::PointerMove(_) => None,
            InputEvent::PointerActivate => Some(Intent::Fire),
            InputEvent::KeyDown(Key::ArrowLeft | Key::A) => Some(Intent::MoveBy(-KEY_STEP)),
            InputEvent::KeyDown(Key::ArrowRight | Key::D) => Some(Intent::MoveBy(KEY_STEP)),
            InputEvent::KeyDown(Key::Space) => Some(Intent::Fire),
            InputEvent::KeyDown(Key::ArrowUp | Key::ArrowDown) => None,
        }
    }

    fn translate_snake(event: InputEvent) -> Option<Intent> {
        let direction = match event {
            InputEvent::KeyDown(Key::ArrowUp) => Direction::Up,
            InputEvent::KeyDown(Key::ArrowDown) => Direction::Down,
            InputEvent::KeyDown(Key::ArrowLeft) => Direction::Left,
            InputEvent::KeyDown(Key::ArrowRight) => Direction::Right,
            _ => return None,
        };
        Some(Intent::SetDirection(direction))
    }
}
