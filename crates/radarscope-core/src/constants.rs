//! Default configuration values and pool tuning parameters.

use crate::types::Rgba;

// --- Radar ---

/// Default radar range in scan-plane units.
pub const DEFAULT_RADAR_RANGE: f32 = 100.0;

/// Default marker inset from the border of the radar display.
pub const DEFAULT_BORDER_OFFSET: f32 = 10.0;

/// Default half-size of the radar display area (display units).
pub const DEFAULT_DISPLAY_HALF_EXTENT: [f32; 2] = [100.0, 100.0];

// --- Colors ---

pub const DEFAULT_FRIENDLY_COLOR: Rgba = Rgba::rgb(0.2, 0.9, 0.3);
pub const DEFAULT_HOSTILE_COLOR: Rgba = Rgba::rgb(0.95, 0.2, 0.15);

// --- Pool ---

/// Initial capacity reserved by the target registry for its arena,
/// identity map, and active/free lists.
pub const REGISTRY_INITIAL_CAPACITY: usize = 100;
