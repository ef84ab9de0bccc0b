#![forbid(unsafe_code)]

//! Navigation directions and list axes.
//!
//! [`Direction::None`] is a sentinel: it means "no navigation requested" and
//! every navigation entry point short-circuits on it without side effects.

use std::fmt;
use std::str::FromStr;

use crate::config::NavConfig;
use crate::error::NavError;
use crate::event::{KeyCode, KeyEvent, KeyEventKind, Modifiers};

/// Directional input consumed by the navigation engine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    /// No navigation requested.
    #[default]
    None,
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// The four real directions.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Whether this is the `None` sentinel.
    #[inline]
    #[must_use]
    pub const fn is_none(self) -> bool {
        matches!(self, Direction::None)
    }

    /// Axis this direction travels along, or `None` for the sentinel.
    #[must_use]
    pub const fn axis(self) -> Option<Axis> {
        match self {
            Direction::Left | Direction::Right => Some(Axis::Horizontal),
            Direction::Up | Direction::Down => Some(Axis::Vertical),
            Direction::None => None,
        }
    }

    /// The reverse direction. `None` maps to itself.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::None => Direction::None,
        }
    }

    /// Map a key press to a direction.
    ///
    /// Arrow keys always map. `h`/`j`/`k`/`l` map when
    /// [`NavConfig::vim_keys`] is set. Releases never map, and neither do
    /// keys held with CTRL/ALT/SUPER while [`NavConfig::ignore_modified`]
    /// is set. Anything else yields [`Direction::None`].
    #[must_use]
    pub fn from_key(key: &KeyEvent, config: &NavConfig) -> Self {
        if key.kind == KeyEventKind::Release {
            return Direction::None;
        }
        if config.ignore_modified
            && key
                .modifiers
                .intersects(Modifiers::CTRL | Modifiers::ALT | Modifiers::SUPER)
        {
            return Direction::None;
        }
        match key.code {
            KeyCode::Left => Direction::Left,
            KeyCode::Right => Direction::Right,
            KeyCode::Up => Direction::Up,
            KeyCode::Down => Direction::Down,
            KeyCode::Char(c) if config.vim_keys => match c {
                'h' => Direction::Left,
                'j' => Direction::Down,
                'k' => Direction::Up,
                'l' => Direction::Right,
                _ => Direction::None,
            },
            _ => Direction::None,
        }
    }

    /// Stable lowercase name, used in logs and error messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Direction::None => "none",
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Axis of a linear focus list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    /// Step along this axis for `direction`: -1, +1, or 0 when orthogonal.
    #[must_use]
    pub const fn offset(self, direction: Direction) -> isize {
        match (self, direction) {
            (Axis::Horizontal, Direction::Left) | (Axis::Vertical, Direction::Up) => -1,
            (Axis::Horizontal, Direction::Right) | (Axis::Vertical, Direction::Down) => 1,
            _ => 0,
        }
    }

    /// Tag accepted by [`FromStr`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Axis::Horizontal => "horizontal",
            Axis::Vertical => "vertical",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Axis {
    type Err = NavError;

    /// Exact, case-sensitive match on `"horizontal"` or `"vertical"`.
    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "horizontal" => Ok(Axis::Horizontal),
            "vertical" => Ok(Axis::Vertical),
            other => Err(NavError::InvalidWaypointTag {
                tag: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_table_matches_axis() {
        assert_eq!(Axis::Horizontal.offset(Direction::Left), -1);
        assert_eq!(Axis::Horizontal.offset(Direction::Right), 1);
        assert_eq!(Axis::Horizontal.offset(Direction::Up), 0);
        assert_eq!(Axis::Horizontal.offset(Direction::Down), 0);
        assert_eq!(Axis::Vertical.offset(Direction::Up), -1);
        assert_eq!(Axis::Vertical.offset(Direction::Down), 1);
        assert_eq!(Axis::Vertical.offset(Direction::Left), 0);
        assert_eq!(Axis::Vertical.offset(Direction::Right), 0);
        assert_eq!(Axis::Vertical.offset(Direction::None), 0);
    }

    #[test]
    fn parse_axis_tags() {
        assert_eq!("horizontal".parse::<Axis>().unwrap(), Axis::Horizontal);
        assert_eq!("vertical".parse::<Axis>().unwrap(), Axis::Vertical);
    }

    #[test]
    fn parse_rejects_unknown_tag_by_name() {
        let err = "diagonal".parse::<Axis>().unwrap_err();
        assert!(matches!(err, NavError::InvalidWaypointTag { ref tag } if tag == "diagonal"));
        assert!(err.to_string().contains("\"diagonal\""));
        assert!("Horizontal".parse::<Axis>().is_err());
    }

    #[test]
    fn opposite_round_trips() {
        for dir in Direction::ALL {
            assert_eq!(dir.opposite().opposite(), dir);
            assert_ne!(dir.opposite(), dir);
        }
        assert_eq!(Direction::None.opposite(), Direction::None);
    }

    #[test]
    fn arrow_keys_map_to_directions() {
        let config = NavConfig::default();
        let map = |code| Direction::from_key(&KeyEvent::new(code), &config);
        assert_eq!(map(KeyCode::Left), Direction::Left);
        assert_eq!(map(KeyCode::Right), Direction::Right);
        assert_eq!(map(KeyCode::Up), Direction::Up);
        assert_eq!(map(KeyCode::Down), Direction::Down);
        assert_eq!(map(KeyCode::Enter), Direction::None);
        assert_eq!(map(KeyCode::Char('l')), Direction::None);
    }

    #[test]
    fn vim_keys_only_when_enabled() {
        let config = NavConfig::default().with_vim_keys(true);
        let map = |c| Direction::from_key(&KeyEvent::new(KeyCode::Char(c)), &config);
        assert_eq!(map('h'), Direction::Left);
        assert_eq!(map('j'), Direction::Down);
        assert_eq!(map('k'), Direction::Up);
        assert_eq!(map('l'), Direction::Right);
        assert_eq!(map('x'), Direction::None);
    }

    #[test]
    fn modified_and_released_keys_do_not_navigate() {
        let config = NavConfig::default();
        let ctrl = KeyEvent::new(KeyCode::Right).with_modifiers(Modifiers::CTRL);
        assert_eq!(Direction::from_key(&ctrl, &config), Direction::None);

        let shift = KeyEvent::new(KeyCode::Right).with_modifiers(Modifiers::SHIFT);
        assert_eq!(Direction::from_key(&shift, &config), Direction::Right);

        let released = KeyEvent::new(KeyCode::Right).with_kind(KeyEventKind::Release);
        assert_eq!(Direction::from_key(&released, &config), Direction::None);

        let lenient = NavConfig::default().with_ignore_modified(false);
        assert_eq!(Direction::from_key(&ctrl, &lenient), Direction::Right);
    }
}
