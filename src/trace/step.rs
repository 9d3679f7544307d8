use serde::{Deserialize, Serialize};

/// What a single trace step represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    /// The untouched input, before any comparison.
    Init,
    /// Two adjacent positions are being compared.
    Compare,
    /// The compared pair was out of order and has been exchanged.
    Swap,
    /// A trailing suffix of the array is now in its final position.
    #[serde(rename = "sorted")]
    SortedBoundary,
    /// Every position is final.
    Complete,
}

impl StepKind {
    pub fn label(&self) -> &'static str {
        match self {
            StepKind::Init => "init",
            StepKind::Compare => "compare",
            StepKind::Swap => "swap",
            StepKind::SortedBoundary => "sorted",
            StepKind::Complete => "complete",
        }
    }
}

impl std::fmt::Display for StepKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One immutable snapshot of the sort in progress.
///
/// `array` is always a full copy of the working array at this point, never a
/// view into it. Steps are only produced by [`generate`](super::generate).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub array: Vec<i32>,
    pub indices: Vec<usize>,
    pub kind: StepKind,
    pub narrative: String,
    /// Line in [`BUBBLE_SORT_LISTING`](super::BUBBLE_SORT_LISTING) to highlight.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlight_line: Option<usize>,
}

/// Returned when a step is requested before any trace exists.
static PLACEHOLDER: Step = Step::placeholder();

impl Step {
    /// An empty step: no array, no indices, no narrative.
    pub const fn placeholder() -> Self {
        Self {
            array: Vec::new(),
            indices: Vec::new(),
            kind: StepKind::Init,
            narrative: String::new(),
            highlight_line: None,
        }
    }

    /// Shared instance of [`Step::placeholder`].
    pub fn placeholder_ref() -> &'static Step {
        &PLACEHOLDER
    }

    pub fn is_placeholder(&self) -> bool {
        self.array.is_empty() && self.narrative.is_empty() && self.highlight_line.is_none()
    }

    /// Whether `index` is one of the positions this step is about.
    pub fn touches(&self, index: usize) -> bool {
        self.indices.contains(&index)
    }

    /// The compared or swapped pair, if this step has one.
    pub fn pair(&self) -> Option<(usize, usize)> {
        match (self.kind, self.indices.as_slice()) {
            (StepKind::Compare | StepKind::Swap, [a, b]) => Some((*a, *b)),
            _ => None,
        }
    }
}
