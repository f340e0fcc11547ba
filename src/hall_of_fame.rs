//! The accumulator of the best (or all significant) rectangles observed across a
//! search, plus its self-describing on-disk artifact.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::rectangle::HyperRectangle;
use crate::types::Scalar;

/// In-memory Hall of Fame. Threshold mode keeps every distinct rectangle whose
/// volume exceeds a caller-supplied threshold; top mode keeps an ordered,
/// strictly volume-increasing sequence of record-setting rectangles.
pub enum HallOfFame {
    Threshold {
        threshold: Scalar,
        entries: HashMap<HyperRectangle, Scalar>,
    },
    Top {
        entries: Vec<HyperRectangle>,
        max_found: Scalar,
    },
}

impl HallOfFame {
    pub fn threshold(threshold: Scalar) -> Self {
        HallOfFame::Threshold {
            threshold,
            entries: HashMap::new(),
        }
    }

    pub fn top() -> Self {
        HallOfFame::Top {
            entries: Vec::new(),
            max_found: 0.0,
        }
    }

    /// Number of rectangles currently held.
    pub fn len(&self) -> usize {
        match self {
            HallOfFame::Threshold { entries, .. } => entries.len(),
            HallOfFame::Top { entries, .. } => entries.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Offer a candidate rectangle for admission. Returns `true` if it was accepted
    /// (a new distinct rectangle over threshold, or a strict new best), `false`
    /// otherwise (duplicate, or not an improvement) — the caller drives its
    /// convergence counter off this.
    pub fn offer(&mut self, rect: HyperRectangle, volume: Scalar) -> bool {
        match self {
            HallOfFame::Threshold { threshold, entries } => {
                if volume > *threshold {
                    if entries.contains_key(&rect) {
                        false
                    } else {
                        entries.insert(rect, volume);
                        true
                    }
                } else {
                    false
                }
            }
            HallOfFame::Top { entries, max_found } => {
                if volume > *max_found {
                    *max_found = volume;
                    entries.push(rect);
                    true
                } else {
                    false
                }
            }
        }
    }

    /// Snapshot this Hall of Fame into its self-describing, serializable form.
    pub fn to_artifact(&self) -> HallOfFameArtifact {
        match self {
            HallOfFame::Threshold { threshold, entries } => HallOfFameArtifact::Threshold {
                threshold: *threshold,
                entries: entries
                    .iter()
                    .map(|(rect, volume)| RectangleRecord {
                        lower: rect.lower().to_vec(),
                        upper: rect.upper().to_vec(),
                        volume: Some(*volume),
                    })
                    .collect(),
            },
            HallOfFame::Top { entries, .. } => HallOfFameArtifact::Top {
                entries: entries
                    .iter()
                    .map(|rect| RectangleRecord {
                        lower: rect.lower().to_vec(),
                        upper: rect.upper().to_vec(),
                        volume: None,
                    })
                    .collect(),
            },
        }
    }
}

/// The self-describing on-disk schema: for every rectangle, its lower and upper
/// bound vectors, plus (threshold mode only) its volume. Tagged by mode so a
/// reader can reconstruct the full Hall of Fame from the artifact alone.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "mode")]
pub enum HallOfFameArtifact {
    #[serde(rename = "threshold")]
    Threshold {
        threshold: Scalar,
        entries: Vec<RectangleRecord>,
    },
    #[serde(rename = "top")]
    Top { entries: Vec<RectangleRecord> },
}

impl HallOfFameArtifact {
    /// Rebuild an in-memory [`HallOfFame`] from a loaded artifact.
    pub fn into_hall_of_fame(self) -> HallOfFame {
        match self {
            HallOfFameArtifact::Threshold { threshold, entries } => {
                let mut map = HashMap::with_capacity(entries.len());
                for record in entries {
                    let volume = record.volume.unwrap_or_default();
                    map.insert(HyperRectangle::new(record.lower, record.upper), volume);
                }
                HallOfFame::Threshold { threshold, entries: map }
            }
            HallOfFameArtifact::Top { entries } => {
                let max_found = entries
                    .iter()
                    .map(|r| {
                        r.lower
                            .iter()
                            .zip(&r.upper)
                            .map(|(lo, hi)| hi - lo)
                            .product::<Scalar>()
                    })
                    .fold(0.0, Scalar::max);
                let rectangles = entries
                    .into_iter()
                    .map(|r| HyperRectangle::new(r.lower, r.upper))
                    .collect();
                HallOfFame::Top {
                    entries: rectangles,
                    max_found,
                }
            }
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RectangleRecord {
    pub lower: Vec<Scalar>,
    pub upper: Vec<Scalar>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<Scalar>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_mode_keeps_strictly_increasing_volumes() {
        let mut hof = HallOfFame::top();
        assert!(hof.offer(HyperRectangle::new(vec![0.0], vec![1.0]), 1.0));
        assert!(!hof.offer(HyperRectangle::new(vec![0.0], vec![1.0]), 1.0)); // equal volume: not an improvement
        assert!(hof.offer(HyperRectangle::new(vec![0.0], vec![2.0]), 2.0));
        assert_eq!(hof.len(), 2);

        if let HallOfFame::Top { entries, .. } = &hof {
            let volumes: Vec<Scalar> = entries.iter().map(|r| r.volume()).collect();
            assert!(volumes.windows(2).all(|w| w[1] > w[0]));
        } else {
            panic!("expected top mode");
        }
    }

    #[test]
    fn threshold_mode_deduplicates_and_enforces_threshold() {
        let mut hof = HallOfFame::threshold(1.0);
        assert!(!hof.offer(HyperRectangle::new(vec![0.0], vec![0.5]), 0.5)); // below threshold
        assert!(hof.offer(HyperRectangle::new(vec![0.0], vec![2.0]), 2.0));
        assert!(!hof.offer(HyperRectangle::new(vec![0.0], vec![2.0]), 2.0)); // duplicate
        assert_eq!(hof.len(), 1);
    }

    #[test]
    fn artifact_round_trips() {
        let mut hof = HallOfFame::threshold(0.5);
        hof.offer(HyperRectangle::new(vec![0.0, 0.0], vec![1.0, 2.0]), 2.0);
        let artifact = hof.to_artifact();
        let json = serde_json::to_string(&artifact).unwrap();
        let reloaded: HallOfFameArtifact = serde_json::from_str(&json).unwrap();
        let rebuilt = reloaded.into_hall_of_fame();
        assert_eq!(rebuilt.len(), 1);
    }
}
