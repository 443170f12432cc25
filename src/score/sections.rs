use serde::{Deserialize, Serialize};

const ORDINALS: [&str; 10] = [
    "First", "Second", "Third", "Fourth", "Fifth", "Sixth", "Seventh", "Eighth", "Ninth", "Tenth",
];

/// How many holes go on one scorecard row.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Compact,
    #[default]
    Full,
}

impl Granularity {
    #[must_use]
    pub fn chunk_size(self) -> i32 {
        match self {
            Self::Compact => 6,
            Self::Full => 9,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Section {
    pub label: String,
    pub holes: Vec<i32>,
}

/// Splits holes `1..=hole_count` into labeled chunks of the granularity's
/// size. Any remainder is folded into the last chunk.
#[must_use]
pub fn sections_for(hole_count: i32, granularity: Granularity) -> Vec<Section> {
    if hole_count <= 0 {
        return Vec::new();
    }
    let chunk = granularity.chunk_size();
    let count = (hole_count / chunk).max(1);

    (0..count)
        .map(|i| {
            let start = i * chunk + 1;
            let end = if i == count - 1 {
                hole_count
            } else {
                (i + 1) * chunk
            };
            Section {
                label: section_label(granularity, count, i, start, end),
                holes: (start..=end).collect(),
            }
        })
        .collect()
}

fn section_label(granularity: Granularity, count: i32, index: i32, start: i32, end: i32) -> String {
    if count == 1 {
        return "Holes".to_string();
    }
    let len = end - start + 1;
    match granularity {
        Granularity::Full if count == 2 => {
            let side = if index == 0 { "Front" } else { "Back" };
            format!("{side} {len}")
        }
        Granularity::Full => match usize::try_from(index).ok().and_then(|i| ORDINALS.get(i)) {
            Some(ordinal) => format!("{ordinal} {len}"),
            None => format!("Holes {start}-{end}"),
        },
        Granularity::Compact => format!("Holes {start}-{end}"),
    }
}
