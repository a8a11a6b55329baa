//! Throw results entered from the physical stick-dice.
//!
//! The engine never rolls anything: a throw is read off the four sticks by
//! the players and entered through the UI. Each result is either a step count
//! (negative for `BackDo`) or a `Miss` that ends the turn.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Outcome of one throw of the sticks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThrowResult {
    /// One flat side up: 1 step.
    Do,
    /// Two flat sides up: 2 steps.
    Gae,
    /// Three flat sides up: 3 steps.
    Geol,
    /// Four flat sides up: 4 steps and a bonus throw.
    Yut,
    /// Four round sides up: 5 steps and a bonus throw.
    Mo,
    /// The marked stick alone: 1 step back.
    BackDo,
    /// A stick left the mat: the turn ends.
    Miss,
}

impl ThrowResult {
    /// Every result, in the order the UI lists them.
    pub const ALL: [ThrowResult; 7] = [
        ThrowResult::Do,
        ThrowResult::Gae,
        ThrowResult::Geol,
        ThrowResult::Yut,
        ThrowResult::Mo,
        ThrowResult::BackDo,
        ThrowResult::Miss,
    ];

    /// Steps to advance (negative = retreat). `None` for a miss.
    #[must_use]
    pub const fn steps(self) -> Option<i8> {
        match self {
            ThrowResult::Do => Some(1),
            ThrowResult::Gae => Some(2),
            ThrowResult::Geol => Some(3),
            ThrowResult::Yut => Some(4),
            ThrowResult::Mo => Some(5),
            ThrowResult::BackDo => Some(-1),
            ThrowResult::Miss => None,
        }
    }

    /// Yut and Mo earn a bonus throw (subject to the per-turn limit).
    #[must_use]
    pub const fn is_big_throw(self) -> bool {
        matches!(self, ThrowResult::Yut | ThrowResult::Mo)
    }

    #[must_use]
    pub const fn is_retreat(self) -> bool {
        matches!(self, ThrowResult::BackDo)
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ThrowResult::Do => "Do",
            ThrowResult::Gae => "Gae",
            ThrowResult::Geol => "Geol",
            ThrowResult::Yut => "Yut",
            ThrowResult::Mo => "Mo",
            ThrowResult::BackDo => "BackDo",
            ThrowResult::Miss => "Miss",
        }
    }
}

impl std::fmt::Display for ThrowResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown throw name.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown throw result `{0}`")]
pub struct ParseThrowError(pub String);

impl FromStr for ThrowResult {
    type Err = ParseThrowError;

    /// Case-insensitive; accepts `back-do`/`backdo` and `nak` for a miss.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "do" => Ok(ThrowResult::Do),
            "gae" => Ok(ThrowResult::Gae),
            "geol" => Ok(ThrowResult::Geol),
            "yut" => Ok(ThrowResult::Yut),
            "mo" => Ok(ThrowResult::Mo),
            "backdo" | "back-do" | "back_do" => Ok(ThrowResult::BackDo),
            "miss" | "nak" => Ok(ThrowResult::Miss),
            _ => Err(ParseThrowError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steps() {
        assert_eq!(ThrowResult::Do.steps(), Some(1));
        assert_eq!(ThrowResult::Mo.steps(), Some(5));
        assert_eq!(ThrowResult::BackDo.steps(), Some(-1));
        assert_eq!(ThrowResult::Miss.steps(), None);
    }

    #[test]
    fn test_big_throws() {
        let big: Vec<_> = ThrowResult::ALL.iter().filter(|t| t.is_big_throw()).collect();
        assert_eq!(big, vec![&ThrowResult::Yut, &ThrowResult::Mo]);
    }

    #[test]
    fn test_parse() {
        assert_eq!("GEOL".parse::<ThrowResult>(), Ok(ThrowResult::Geol));
        assert_eq!("back-do".parse::<ThrowResult>(), Ok(ThrowResult::BackDo));
        assert_eq!("nak".parse::<ThrowResult>(), Ok(ThrowResult::Miss));
        assert!("six".parse::<ThrowResult>().is_err());

        for t in ThrowResult::ALL {
            assert_eq!(t.name().parse::<ThrowResult>(), Ok(t));
        }
    }
}
