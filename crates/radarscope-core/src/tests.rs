use glam::{Vec2, Vec3};

use crate::config::RadarConfig;
use crate::enums::Category;
use crate::error::ConfigError;
use crate::state::{RadarSnapshot, ScanReport, TargetView};
use crate::types::{EntityId, MarkerId, Rgba};

#[test]
fn test_category_helpers() {
    assert!(Category::Hostile.is_hostile());
    assert!(!Category::Friendly.is_hostile());
    assert_eq!(Category::from_hostile(true), Category::Hostile);
    assert_eq!(Category::from_hostile(false), Category::Friendly);
    assert_eq!(Category::Friendly.flipped(), Category::Hostile);
    assert_eq!(
        Category::SCAN_ORDER,
        [Category::Friendly, Category::Hostile]
    );
}

#[test]
fn test_config_from_partial_json() {
    let config = RadarConfig::from_json(r#"{ "radar_range": 250.0, "border_offset": 4.0 }"#)
        .expect("partial document should parse");
    assert_eq!(config.radar_range, 250.0);
    assert_eq!(config.border_offset, 4.0);
    assert_eq!(
        config.display_half_extent,
        RadarConfig::default().display_half_extent
    );
}

#[test]
fn test_config_from_json_full_document() {
    let json = r#"{
        "radar_range": 10.0,
        "display_half_extent": [60.0, 60.0],
        "border_offset": 10.0,
        "friendly_color": { "r": 0.0, "g": 1.0, "b": 0.0, "a": 1.0 },
        "hostile_color": { "r": 1.0, "g": 0.0, "b": 0.0, "a": 0.5 }
    }"#;
    let config = RadarConfig::from_json(json).unwrap();
    assert_eq!(config.display_half_extent, Vec2::new(60.0, 60.0));
    assert_eq!(config.hostile_color, Rgba::new(1.0, 0.0, 0.0, 0.5));
    assert_eq!(config.color_for(Category::Friendly), Rgba::rgb(0.0, 1.0, 0.0));
}

#[test]
fn test_config_from_json_rejects_invalid_values() {
    let err = RadarConfig::from_json(r#"{ "radar_range": -1.0 }"#).unwrap_err();
    assert!(matches!(err, ConfigError::NonPositiveRange(_)));

    let err = RadarConfig::from_json("{ not json").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
    assert!(err.to_string().contains("invalid radar configuration"));
}

#[test]
fn test_snapshot_counts() {
    let view = |id: u64, category| TargetView {
        entity_id: EntityId(id),
        category,
        projected: Vec3::ZERO,
        display_position: Vec2::ZERO,
        marker: Some(MarkerId(id as u32)),
    };
    let snapshot = RadarSnapshot {
        frame: 3,
        radar_range: 10.0,
        targets: vec![
            view(1, Category::Friendly),
            view(2, Category::Hostile),
            view(3, Category::Hostile),
        ],
    };
    assert_eq!(snapshot.hostile_count(), 2);
    assert_eq!(snapshot.friendly_count(), 1);
}

/// Snapshots and reports go to hosts as JSON.
#[test]
fn test_snapshot_serde() {
    let snapshot = RadarSnapshot {
        frame: 7,
        radar_range: 100.0,
        targets: vec![TargetView {
            entity_id: EntityId(42),
            category: Category::Hostile,
            projected: Vec3::new(3.0, -4.0, 0.0),
            display_position: Vec2::new(2.7, -3.6),
            marker: None,
        }],
    };
    let json = serde_json::to_string(&snapshot).unwrap();
    let back: RadarSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(snapshot, back);

    let report = ScanReport {
        frame: 7,
        acquired: 1,
        active: 1,
        pool_size: 1,
        ..Default::default()
    };
    let json = serde_json::to_string(&report).unwrap();
    assert!(json.contains("\"pool_size\":1"));
}

#[test]
fn test_entity_id_display() {
    assert_eq!(EntityId::new(17).to_string(), "E17");
    assert_eq!(EntityId::new(17).raw(), 17);
}
