use super::types::{AnchorChoice, AnchorFeature, Directionality, QueryInterval, RefSequence, Strand};
use thiserror::Error;

/// Anchor skipped because its strand is not usable
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Anchor {start}..{end} has no usable strand")]
pub struct OrientationUnknown {
    pub start: i64,
    pub end: i64,
}

/// Derives fixed-length query windows around anchor features
#[derive(Debug, Clone)]
pub struct WindowBuilder {
    query_length: i64,
    anchor_choice: AnchorChoice,
    sequence_length: i64,
}

impl WindowBuilder {
    pub fn new(query_length: i64, anchor_choice: AnchorChoice, sequence: &RefSequence) -> Self {
        Self {
            query_length,
            anchor_choice,
            sequence_length: sequence.length,
        }
    }

    pub fn query_length(&self) -> i64 {
        self.query_length
    }

    /// Build the query window for one anchor.
    ///
    /// Forward-strand anchors are tagged `Reversed` and centered on `end` for
    /// `UseStart`; reverse-strand anchors are tagged `Forward` and centered on
    /// `end` for `UseEnd`. Either way the other choice centers on `start`.
    pub fn build(&self, anchor: &AnchorFeature) -> Result<QueryInterval, OrientationUnknown> {
        let (center, directionality) = match anchor.strand {
            Strand::Forward => {
                let center = match self.anchor_choice {
                    AnchorChoice::UseStart => anchor.end,
                    AnchorChoice::UseEnd => anchor.start,
                };
                (center, Directionality::Reversed)
            }
            Strand::Reverse => {
                let center = match self.anchor_choice {
                    AnchorChoice::UseEnd => anchor.end,
                    AnchorChoice::UseStart => anchor.start,
                };
                (center, Directionality::Forward)
            }
            Strand::Unknown => {
                return Err(OrientationUnknown {
                    start: anchor.start,
                    end: anchor.end,
                });
            }
        };

        let start = center - self.query_length / 2;
        let end = start + self.query_length;
        let (start, end) = clamp_to_sequence(start, end, self.sequence_length);

        Ok(QueryInterval::new(start, end, directionality))
    }
}

/// Shift a window back inside `[0, sequence_length)` without shrinking it.
///
/// Sequences shorter than the window are not handled; the result can still
/// overhang on the left.
fn clamp_to_sequence(mut start: i64, mut end: i64, sequence_length: i64) -> (i64, i64) {
    if start < 0 {
        end -= start;
        start = 0;
    }
    if end > sequence_length {
        start -= end - sequence_length;
        end = sequence_length;
    }
    (start, end)
}
