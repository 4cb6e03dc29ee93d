use serde::{Deserialize, Serialize};

/// Strand of an annotated feature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strand {
    Forward,
    Reverse,
    Unknown,
}

impl Strand {
    /// Parse a strand token as written in annotation files.
    ///
    /// Accepts `+`/`1` and `-`/`-1`; anything else (including `.`) is unknown.
    pub fn from_token(token: &str) -> Self {
        match token.trim() {
            "+" | "1" | "+1" => Strand::Forward,
            "-" | "-1" => Strand::Reverse,
            _ => Strand::Unknown,
        }
    }
}

/// Which named coordinate of an anchor the window is centered on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnchorChoice {
    #[default]
    UseStart,
    UseEnd,
}

/// Whether a heatmap's bins must be flipped to line up with the others
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Directionality {
    Forward,
    Reversed,
    None,
}

/// Annotated interval used as the center of a query window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnchorFeature {
    pub start: i64,
    pub end: i64,
    pub strand: Strand,
}

impl AnchorFeature {
    pub fn new(start: i64, end: i64, strand: Strand) -> Self {
        Self { start, end, strand }
    }
}

/// The reference sequence a run is scoped to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefSequence {
    pub name: String,
    /// Exclusive upper bound of valid coordinates
    pub length: i64,
}

impl RefSequence {
    pub fn new(name: impl Into<String>, length: i64) -> Self {
        Self {
            name: name.into(),
            length,
        }
    }
}

/// Half-open interval `[start, end)` queried to build one heatmap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryInterval {
    pub start: i64,
    pub end: i64,
    pub directionality: Directionality,
}

impl QueryInterval {
    pub fn new(start: i64, end: i64, directionality: Directionality) -> Self {
        Self {
            start,
            end,
            directionality,
        }
    }

    /// Length in base pairs
    pub fn len(&self) -> i64 {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Coordinates shown at the left and right edge of the rendered heatmap.
    ///
    /// Reversed heatmaps have their bins flipped, so their left edge is `end`.
    pub fn display_span(&self) -> (i64, i64) {
        match self.directionality {
            Directionality::Reversed => (self.end, self.start),
            Directionality::Forward | Directionality::None => (self.start, self.end),
        }
    }
}
