//! Responsive staircase layout engine
//!
//! All geometry lives in logical pixel space and is recomputed wholesale
//! from the container width on every resize. Step sizes come from a coarse
//! three-tier breakpoint scheme (no interpolation); margins scale with the
//! width but never drop below fixed floors, so a zero-width container still
//! yields well-formed, non-negative rectangles.
//!
//! [`StairLayout::step_rect`] is the single source of step geometry: the
//! renderer draws exactly the rectangles the hit-tester checks.

use crate::geometry::{PointF, RectF};
use crate::levels::{LEVELS, LEVEL_COUNT};

/// Container width below which abbreviated labels are used
const ABBREVIATE_BELOW: f64 = 500.0;

/// Fixed height of the description text box
const DESCRIPTION_BOX_HEIGHT: f64 = 200.0;

/// Discrete width tier selecting step sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Breakpoint {
    Small,
    Medium,
    Large,
}

impl Breakpoint {
    /// Tier for a container width; boundaries are exclusive upper bounds
    pub fn from_width(width: f64) -> Self {
        if width < 400.0 {
            Breakpoint::Small
        } else if width < 600.0 {
            Breakpoint::Medium
        } else {
            Breakpoint::Large
        }
    }

    /// Horizontal indent added per step
    pub fn stagger(self) -> f64 {
        match self {
            Breakpoint::Small => 30.0,
            Breakpoint::Medium => 40.0,
            Breakpoint::Large => 60.0,
        }
    }

    /// Height of each step
    pub fn step_height(self) -> f64 {
        match self {
            Breakpoint::Small => 50.0,
            Breakpoint::Medium => 55.0,
            Breakpoint::Large => 60.0,
        }
    }
}

/// Per-width staircase geometry
///
/// Computed from the logical container width, immutable until the next
/// resize. Steps stack bottom-to-top: step 0 sits lowest and leftmost, each
/// higher step is indented one stagger further right, and all steps extend
/// to a common right-aligned edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StairLayout {
    width: f64,
    margin: f64,
    top_margin: f64,
    right_margin: f64,
    breakpoint: Breakpoint,
    abbreviated: bool,
}

impl StairLayout {
    /// Compute the layout for a logical container width
    pub fn compute(width: f64) -> Self {
        let width = width.max(0.0);
        tracing::debug!(width, "recomputing stair layout");
        Self {
            width,
            margin: (width * 0.03).max(10.0),
            top_margin: (width * 0.08).max(40.0),
            right_margin: (width * 0.08).max(30.0),
            breakpoint: Breakpoint::from_width(width),
            abbreviated: width < ABBREVIATE_BELOW,
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn breakpoint(&self) -> Breakpoint {
        self.breakpoint
    }

    /// Whether labels are abbreviated at this width
    pub fn abbreviated(&self) -> bool {
        self.abbreviated
    }

    pub fn margin(&self) -> f64 {
        self.margin
    }

    pub fn top_margin(&self) -> f64 {
        self.top_margin
    }

    pub fn right_margin(&self) -> f64 {
        self.right_margin
    }

    /// Rectangle of step `index`, 0 = bottom of the staircase
    ///
    /// The rendered width runs from the step's staggered origin to the
    /// common right edge and is floored at zero for degenerate containers.
    pub fn step_rect(&self, index: usize) -> RectF {
        debug_assert!(index < LEVEL_COUNT);
        let stagger = self.breakpoint.stagger();
        let height = self.breakpoint.step_height();
        let x = index as f64 * stagger + self.margin;
        let y = height * (LEVEL_COUNT - 1 - index) as f64 + self.top_margin;
        RectF::new(x, y, (self.width - x - self.right_margin).max(0.0), height)
    }

    /// Label for step `index`, abbreviated when the container is narrow
    pub fn label(&self, index: usize) -> &'static str {
        let level = &LEVELS[index];
        if self.abbreviated {
            level.short_name
        } else {
            level.name
        }
    }

    /// Hovered step for a pointer position, if any
    ///
    /// Scans index-ascending and stops at the first containing rectangle,
    /// so shared boundary points resolve to the lower index.
    pub fn hit_test(&self, point: PointF) -> Option<usize> {
        (0..LEVEL_COUNT).find(|&index| self.step_rect(index).contains(point))
    }

    /// Centered anchor for the diagram title
    pub fn title_anchor(&self) -> PointF {
        PointF::new(self.width / 2.0, 10.0)
    }

    fn description_top(&self) -> f64 {
        self.breakpoint.step_height() * LEVEL_COUNT as f64 + self.top_margin + 30.0
    }

    /// Text box for the hovered level's description, below the staircase
    pub fn description_box(&self) -> RectF {
        RectF::new(
            20.0,
            self.description_top(),
            (self.width - 40.0).max(0.0),
            DESCRIPTION_BOX_HEIGHT,
        )
    }

    /// Centered anchor for the "hover to see details" prompt
    pub fn prompt_anchor(&self) -> PointF {
        PointF::new(self.width / 2.0, self.description_top() + 30.0)
    }
}

/// Width-proportional text sizes, clamped to readable bounds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextScale {
    pub title: f64,
    pub step_label: f64,
    pub description: f64,
    pub prompt: f64,
}

impl TextScale {
    pub const TITLE_MAX: f64 = 22.0;

    pub fn for_width(width: f64) -> Self {
        Self {
            title: (width * 0.035).clamp(16.0, Self::TITLE_MAX),
            step_label: (width * 0.03).clamp(12.0, 18.0),
            description: (width * 0.025).clamp(11.0, 16.0),
            prompt: (width * 0.03).clamp(14.0, 18.0),
        }
    }
}
