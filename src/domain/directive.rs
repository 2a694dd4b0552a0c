use std::fmt;

/// A formatting rule derived from free-form user instructions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    MaxSentences(u32),
    BulletPointsOnly,
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MaxSentences(count) => write!(f, "Maximal {} vollständige Sätze.", count),
            Self::BulletPointsOnly => write!(f, "Nur Bulletpoints."),
        }
    }
}
