use super::error::{GeneticsError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Transient mood shown by a hatched pet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Emotion {
    Calm,
    Happy,
    Curious,
    Fierce,
}

impl Emotion {
    pub const ALL: [Emotion; 4] = [
        Emotion::Calm,
        Emotion::Happy,
        Emotion::Curious,
        Emotion::Fierce,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Emotion::Calm => "Calm",
            Emotion::Happy => "Happy",
            Emotion::Curious => "Curious",
            Emotion::Fierce => "Fierce",
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Emotion {
    type Err = GeneticsError;

    fn from_str(s: &str) -> Result<Self> {
        Emotion::ALL
            .into_iter()
            .find(|emotion| emotion.name() == s)
            .ok_or_else(|| GeneticsError::UnknownEmotion(s.to_string()))
    }
}
