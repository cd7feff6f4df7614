//! Radar configuration, supplied at construction and static afterwards.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::Category;
use crate::error::ConfigError;
use crate::types::Rgba;

/// Static configuration of a radar scanner.
///
/// Missing fields in a JSON document fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RadarConfig {
    /// Maximum planar distance from the scan-plane origin that is displayed.
    pub radar_range: f32,
    /// Half-size of the display area the radar maps onto.
    pub display_half_extent: Vec2,
    /// Marker inset from the display border.
    pub border_offset: f32,
    pub friendly_color: Rgba,
    pub hostile_color: Rgba,
}

impl Default for RadarConfig {
    fn default() -> Self {
        Self {
            radar_range: DEFAULT_RADAR_RANGE,
            display_half_extent: Vec2::from_array(DEFAULT_DISPLAY_HALF_EXTENT),
            border_offset: DEFAULT_BORDER_OFFSET,
            friendly_color: DEFAULT_FRIENDLY_COLOR,
            hostile_color: DEFAULT_HOSTILE_COLOR,
        }
    }
}

impl RadarConfig {
    /// Parse a JSON document and validate the result.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: RadarConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations that would make the scan meaningless.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.radar_range.is_finite() || self.radar_range <= 0.0 {
            return Err(ConfigError::NonPositiveRange(self.radar_range));
        }

        let Vec2 { x, y } = self.display_half_extent;
        if !self.display_half_extent.is_finite() || x <= 0.0 || y <= 0.0 {
            return Err(ConfigError::NonPositiveExtent { x, y });
        }

        if !self.border_offset.is_finite() || self.border_offset < 0.0 {
            return Err(ConfigError::NegativeBorder(self.border_offset));
        }

        if self.border_offset >= x || self.border_offset >= y {
            return Err(ConfigError::BorderExceedsExtent {
                border: self.border_offset,
                x,
                y,
            });
        }

        Ok(())
    }

    /// Squared radar range, compared against squared planar distance.
    pub fn range_sq(&self) -> f32 {
        self.radar_range * self.radar_range
    }

    /// Factor mapping scan-plane distance into the bordered display area.
    pub fn display_scale(&self) -> Vec2 {
        (self.display_half_extent - Vec2::splat(self.border_offset)) / self.radar_range
    }

    /// Marker color for a category.
    pub fn color_for(&self, category: Category) -> Rgba {
        match category {
            Category::Friendly => self.friendly_color,
            Category::Hostile => self.hostile_color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(RadarConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_non_positive_range() {
        for range in [0.0, -5.0, f32::NAN, f32::INFINITY] {
            let config = RadarConfig {
                radar_range: range,
                ..Default::default()
            };
            assert!(
                matches!(config.validate(), Err(ConfigError::NonPositiveRange(_))),
                "range {range} should be rejected"
            );
        }
    }

    #[test]
    fn test_rejects_border_exceeding_extent() {
        let config = RadarConfig {
            display_half_extent: Vec2::new(50.0, 20.0),
            border_offset: 20.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::BorderExceedsExtent { .. })
        ));
    }

    #[test]
    fn test_rejects_negative_border_and_extent() {
        let config = RadarConfig {
            border_offset: -1.0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::NegativeBorder(_))));

        let config = RadarConfig {
            display_half_extent: Vec2::new(0.0, 100.0),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositiveExtent { .. })
        ));
    }

    #[test]
    fn test_display_scale() {
        let config = RadarConfig {
            radar_range: 10.0,
            display_half_extent: Vec2::new(60.0, 110.0),
            border_offset: 10.0,
            ..Default::default()
        };
        let scale = config.display_scale();
        assert!((scale.x - 5.0).abs() < 1e-6);
        assert!((scale.y - 10.0).abs() < 1e-6);
    }
}
