//! Board template catalog.
//!
//! A template fixes the grid side length N and, for circular boards, an
//! inclusion mask over the underlying square grid. The catalog mirrors the
//! physical pegboards the patterns are ironed on, so each entry also
//! carries display metadata (human name, physical size in millimeters).

use std::fmt;

/// A physical pegboard variant.
///
/// All templates use a square underlying grid; the circular board applies
/// a rendering/painting mask on top of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardTemplate {
    /// 29×29 square board (145 mm).
    SquareLarge,
    /// 14×14 square board (80 mm).
    SquareSmall,
    /// 29×29 board with a circular mask (155 mm).
    CircleLarge,
}

impl BoardTemplate {
    /// All templates in catalog order.
    pub const ALL: [Self; 3] = [Self::SquareLarge, Self::SquareSmall, Self::CircleLarge];

    /// Stable identifier used in config files and CLI arguments.
    #[must_use]
    pub const fn id(&self) -> &'static str {
        match self {
            Self::SquareLarge => "square-large",
            Self::SquareSmall => "square-small",
            Self::CircleLarge => "circle-large",
        }
    }

    /// Human-readable template name.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::SquareLarge => "Large square",
            Self::SquareSmall => "Small square",
            Self::CircleLarge => "Large circle",
        }
    }

    /// Grid side length N.
    #[must_use]
    pub const fn size(&self) -> usize {
        match self {
            Self::SquareLarge | Self::CircleLarge => 29,
            Self::SquareSmall => 14,
        }
    }

    /// Physical board edge/diameter in millimeters.
    #[must_use]
    pub const fn physical_mm(&self) -> u32 {
        match self {
            Self::SquareLarge => 145,
            Self::SquareSmall => 80,
            Self::CircleLarge => 155,
        }
    }

    /// Returns true when the template masks the square grid to a circle.
    #[must_use]
    pub const fn is_circular(&self) -> bool {
        matches!(self, Self::CircleLarge)
    }

    /// Returns true when `(row, col)` is a usable peg on this board.
    ///
    /// Square boards include every in-bounds cell. The circular board
    /// includes a cell iff its distance from the grid center ((N-1)/2,
    /// (N-1)/2) is at most N/2. Painting and rendering outside the mask
    /// is a no-op.
    #[must_use]
    pub fn contains(&self, row: usize, col: usize) -> bool {
        let n = self.size();
        if row >= n || col >= n {
            return false;
        }
        if !self.is_circular() {
            return true;
        }

        let center = (n as f64 - 1.0) / 2.0;
        let radius = n as f64 / 2.0;
        let dr = row as f64 - center;
        let dc = col as f64 - center;
        (dr * dr + dc * dc).sqrt() <= radius
    }

    /// Number of usable pegs on the board.
    #[must_use]
    pub fn peg_count(&self) -> usize {
        let n = self.size();
        if !self.is_circular() {
            return n * n;
        }
        (0..n)
            .flat_map(|r| (0..n).map(move |c| (r, c)))
            .filter(|&(r, c)| self.contains(r, c))
            .count()
    }

    /// Guesses a template from a grid side length.
    ///
    /// Pattern files store only the grid, so when no template is given the
    /// square board of matching size is assumed (29 and 14 both have square
    /// variants; the circular board must be requested explicitly).
    #[must_use]
    pub const fn from_size(size: usize) -> Option<Self> {
        match size {
            29 => Some(Self::SquareLarge),
            14 => Some(Self::SquareSmall),
            _ => None,
        }
    }

    /// Looks up a template by its stable identifier.
    ///
    /// # Errors
    ///
    /// Returns an error naming the valid identifiers when `id` is unknown.
    pub fn from_id(id: &str) -> anyhow::Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.id() == id)
            .ok_or_else(|| {
                let valid: Vec<&str> = Self::ALL.iter().map(Self::id).collect();
                anyhow::anyhow!(
                    "unknown board template '{}'. Valid templates: {}",
                    id,
                    valid.join(", ")
                )
            })
    }
}

impl Default for BoardTemplate {
    /// The large square board is the default workspace.
    fn default() -> Self {
        Self::SquareLarge
    }
}

impl fmt::Display for BoardTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}
