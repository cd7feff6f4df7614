//! Radar scanner: one scan pass per frame.
//!
//! `RadarScanner` owns the target registry and drives its lifecycle:
//! discover candidates per category, project them onto the scan plane,
//! drop the ones beyond radar range, touch the rest, reclaim whatever was
//! not touched, and finally place the markers of the surviving targets.

use glam::Vec3;

use radarscope_core::config::RadarConfig;
use radarscope_core::enums::Category;
use radarscope_core::error::ConfigError;
use radarscope_core::state::{RadarSnapshot, ScanReport};

use crate::interfaces::{Candidate, EntityDiscovery, MarkerRenderer, SpatialTransform};
use crate::plane::ScanPlane;
use crate::registry::TargetRegistry;
use crate::snapshot;

/// The radar pipeline. Hosts own exactly one per radar display.
///
/// Generic over the scan-plane transform; `ScanPlane` covers affine
/// placements, hosts with their own frame math plug in a `SpatialTransform`.
#[derive(Debug)]
pub struct RadarScanner<T = ScanPlane> {
    config: RadarConfig,
    plane: T,
    registry: TargetRegistry,
    /// Discovery output, reused across categories and frames.
    candidates: Vec<Candidate>,
    frame: u64,
}

impl<T: SpatialTransform> RadarScanner<T> {
    /// Create a scanner. Fails if the configuration is invalid.
    pub fn new(config: RadarConfig, plane: T) -> Result<Self, ConfigError> {
        config.validate()?;
        log::info!(
            "radar scanner ready: range {}, display half extent {}, border {}",
            config.radar_range,
            config.display_half_extent,
            config.border_offset
        );
        Ok(Self {
            config,
            plane,
            registry: TargetRegistry::new(),
            candidates: Vec::new(),
            frame: 0,
        })
    }

    pub fn config(&self) -> &RadarConfig {
        &self.config
    }

    pub fn registry(&self) -> &TargetRegistry {
        &self.registry
    }

    pub fn scan_plane(&self) -> &T {
        &self.plane
    }

    /// Move the scan plane. Takes effect on the next scan.
    pub fn set_scan_plane(&mut self, plane: T) {
        self.plane = plane;
    }

    /// Number of scans run so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Project a world position onto the scan plane.
    ///
    /// Returns `None` when the projected point lies beyond the radar range
    /// or the transform produced a non-finite point. A point exactly at the
    /// range is still inside.
    pub fn project(&self, world: Vec3) -> Option<Vec3> {
        let mut local = self.plane.world_to_local(world);
        local.z = 0.0;

        let d2 = local.length_squared();
        if d2.is_finite() && d2 <= self.config.range_sq() {
            Some(local)
        } else {
            None
        }
    }

    /// Run one full scan pass.
    pub fn scan<D, R>(&mut self, discovery: &D, renderer: &mut R) -> ScanReport
    where
        D: EntityDiscovery + ?Sized,
        R: MarkerRenderer + ?Sized,
    {
        self.frame += 1;
        let mut report = ScanReport {
            frame: self.frame,
            ..Default::default()
        };

        for category in Category::SCAN_ORDER {
            self.handle_incoming(category, discovery, renderer, &mut report);
        }

        // Reclaim before placing markers: released targets get no update.
        report.released = self.registry.release_stale(renderer);
        self.update_active_targets(renderer);

        report.active = self.registry.active_len() as u32;
        report.pool_size = self.registry.pool_size() as u32;

        log::debug!(
            "frame {}: {} active, +{} ({} reused), -{} released, {} out of range, {} stale, pool {}",
            report.frame,
            report.active,
            report.acquired,
            report.reused,
            report.released,
            report.out_of_range,
            report.stale,
            report.pool_size
        );
        report
    }

    /// Discover, project, filter and touch every candidate of one category.
    fn handle_incoming<D, R>(
        &mut self,
        category: Category,
        discovery: &D,
        renderer: &mut R,
        report: &mut ScanReport,
    ) where
        D: EntityDiscovery + ?Sized,
        R: MarkerRenderer + ?Sized,
    {
        let mut candidates = std::mem::take(&mut self.candidates);
        candidates.clear();
        discovery.find_entities(category, &mut candidates);

        for candidate in &candidates {
            let Some(world) = candidate.resolved_position() else {
                log::debug!("skipping stale entity {}", candidate.entity_id);
                report.stale += 1;
                continue;
            };

            let Some(projected) = self.project(world) else {
                report.out_of_range += 1;
                continue;
            };

            let recycling = self.registry.free_len() > 0;
            let (target, is_new) = self.registry.acquire_or_reuse(candidate.entity_id, category);

            if is_new {
                report.acquired += 1;
                if recycling {
                    report.reused += 1;
                }

                let marker = match target.marker() {
                    Some(marker) => marker,
                    None => {
                        let marker = renderer.create_marker();
                        target.attach_marker(marker);
                        marker
                    }
                };
                renderer.set_marker_color(marker, self.config.color_for(category));
                renderer.set_marker_active(marker, true);
            }

            if target.category() != category {
                log::trace!(
                    "{} reclassified {:?} -> {:?}",
                    candidate.entity_id,
                    target.category(),
                    category
                );
                target.set_category(category);
                report.reclassified += 1;
                if let Some(marker) = target.marker() {
                    renderer.set_marker_color(marker, self.config.color_for(category));
                }
            }

            target.touch(projected);
        }

        self.candidates = candidates;
    }

    /// Place every active marker on the display and arm the next frame's
    /// staleness check.
    fn update_active_targets<R>(&mut self, renderer: &mut R)
    where
        R: MarkerRenderer + ?Sized,
    {
        let scale = self.config.display_scale();
        self.registry.for_each_active_mut(|target| {
            if let Some(marker) = target.marker() {
                renderer.set_marker_screen_position(marker, target.projected().truncate() * scale);
            }
            target.mark_untouched();
        });
    }

    /// Deactivate every known marker and empty the registry.
    ///
    /// Used when the host's scene was reset underneath the scanner. The
    /// registry keeps the deactivated markers and hands them to the next
    /// targets it allocates, so a reset never strands renderer markers.
    pub fn reset<R>(&mut self, renderer: &mut R)
    where
        R: MarkerRenderer + ?Sized,
    {
        let pool_size = self.registry.pool_size();
        if pool_size > 0 {
            log::warn!(
                "resetting radar with {} tracked targets ({} pooled records)",
                self.registry.active_len(),
                pool_size
            );
        }

        for marker in self.registry.markers() {
            renderer.set_marker_active(marker, false);
        }
        self.registry.init();
        log::info!("radar registry reset at frame {}", self.frame);
    }

    /// Display state of all active targets.
    pub fn snapshot(&self) -> RadarSnapshot {
        snapshot::build_snapshot(&self.registry, &self.config, self.frame)
    }
}
