//! Headless marker renderer: keeps marker state in memory instead of drawing.
//!
//! Used by tests and the replay tool to observe exactly what a scan asked
//! the display to do.

use glam::Vec2;

use radarscope_core::types::{MarkerId, Rgba};

use crate::interfaces::MarkerRenderer;

/// Last state the scanner pushed to a marker.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MarkerState {
    pub active: bool,
    pub color: Rgba,
    pub screen_position: Vec2,
}

#[derive(Debug, Default)]
pub struct HeadlessRenderer {
    markers: Vec<MarkerState>,
    color_changes: u32,
}

impl HeadlessRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn marker(&self, marker: MarkerId) -> Option<&MarkerState> {
        self.markers.get(marker.0 as usize)
    }

    /// Number of markers ever created.
    pub fn created(&self) -> usize {
        self.markers.len()
    }

    pub fn active_count(&self) -> usize {
        self.markers.iter().filter(|m| m.active).count()
    }

    /// Number of color assignments, including the initial one per marker.
    pub fn color_changes(&self) -> u32 {
        self.color_changes
    }

    fn marker_mut(&mut self, marker: MarkerId) -> Option<&mut MarkerState> {
        let state = self.markers.get_mut(marker.0 as usize);
        if state.is_none() {
            log::warn!("unknown marker {:?}", marker);
        }
        state
    }
}

impl MarkerRenderer for HeadlessRenderer {
    fn create_marker(&mut self) -> MarkerId {
        let id = MarkerId(self.markers.len() as u32);
        self.markers.push(MarkerState::default());
        id
    }

    fn set_marker_active(&mut self, marker: MarkerId, active: bool) {
        if let Some(state) = self.marker_mut(marker) {
            state.active = active;
        }
    }

    fn set_marker_color(&mut self, marker: MarkerId, color: Rgba) {
        let Some(state) = self.marker_mut(marker) else {
            return;
        };
        state.color = color;
        self.color_changes += 1;
    }

    fn set_marker_screen_position(&mut self, marker: MarkerId, position: Vec2) {
        if let Some(state) = self.marker_mut(marker) {
            state.screen_position = position;
        }
    }
}
