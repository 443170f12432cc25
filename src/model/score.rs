use serde::{Deserialize, Serialize};

/// Banding of a single hole result against its par. Birdie and bogey are
/// single-stroke bands; the outer bands absorb everything beyond.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum ScoreClass {
    EagleOrBetter,
    Birdie,
    Par,
    Bogey,
    DoubleBogeyOrWorse,
}

impl ScoreClass {
    #[must_use]
    pub fn from_diff(diff: i32) -> Self {
        match diff {
            i32::MIN..=-2 => Self::EagleOrBetter,
            -1 => Self::Birdie,
            0 => Self::Par,
            1 => Self::Bogey,
            _ => Self::DoubleBogeyOrWorse,
        }
    }

    /// Css class for scorecards that only highlight deviations from par.
    #[must_use]
    pub fn highlight_class(self) -> Option<&'static str> {
        match self {
            Self::EagleOrBetter => Some("eagle"),
            Self::Birdie => Some("birdie"),
            Self::Par => None,
            Self::Bogey => Some("bogey"),
            Self::DoubleBogeyOrWorse => Some("double-bogey"),
        }
    }
}

impl From<i32> for ScoreClass {
    fn from(value: i32) -> Self {
        Self::from_diff(value)
    }
}

/// Three-way banding of a relative-to-par value for coloring.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum ToParTone {
    UnderPar,
    Even,
    OverPar,
}

impl ToParTone {
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::UnderPar => "to-par-under",
            Self::Even => "to-par-even",
            Self::OverPar => "to-par-over",
        }
    }
}
