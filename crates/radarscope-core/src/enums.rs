//! Enumeration types used throughout the radar pipeline.

use serde::{Deserialize, Serialize};

/// Allegiance of a tracked entity.
///
/// Discovery is queried once per category per frame, in the order of
/// [`Category::SCAN_ORDER`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[default]
    Friendly,
    Hostile,
}

impl Category {
    /// Order in which a scan pass visits categories.
    pub const SCAN_ORDER: [Category; 2] = [Category::Friendly, Category::Hostile];

    pub fn is_hostile(self) -> bool {
        matches!(self, Category::Hostile)
    }

    pub fn from_hostile(hostile: bool) -> Self {
        if hostile {
            Category::Hostile
        } else {
            Category::Friendly
        }
    }

    /// The other allegiance.
    pub fn flipped(self) -> Self {
        match self {
            Category::Friendly => Category::Hostile,
            Category::Hostile => Category::Friendly,
        }
    }
}
