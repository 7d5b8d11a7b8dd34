//! Room model.
//!
//! Rooms are the spatial resource pool for a run: read-only records with a
//! type, a seat capacity, and a set of capability tags (projector, AC, lab
//! equipment). The engine matches sessions to rooms by type and capacity.

use serde::{Deserialize, Serialize};

/// Room classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoomType {
    /// Regular lecture room for theory and tutorial sessions.
    Classroom,
    /// Equipped laboratory for lab sessions.
    Laboratory,
}

/// A room available to the scheduling run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    /// Unique room identifier.
    pub id: String,
    /// Display number or name (e.g., "A-204").
    pub name: String,
    /// Building the room is in.
    pub building: String,
    /// Floor number, if known.
    pub floor: Option<i32>,
    /// Seat capacity.
    pub capacity: u32,
    /// Room classification.
    pub room_type: RoomType,
    /// Capability tags (e.g., "projector", "ac", "lab-equipment").
    pub features: Vec<String>,
}

impl Room {
    /// Creates a new room of the given type.
    pub fn new(id: impl Into<String>, room_type: RoomType) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            building: String::new(),
            floor: None,
            capacity: 0,
            room_type,
            features: Vec::new(),
        }
    }

    /// Creates a classroom.
    pub fn classroom(id: impl Into<String>) -> Self {
        Self::new(id, RoomType::Classroom)
    }

    /// Creates a laboratory.
    pub fn laboratory(id: impl Into<String>) -> Self {
        Self::new(id, RoomType::Laboratory)
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the building.
    pub fn with_building(mut self, building: impl Into<String>) -> Self {
        self.building = building.into();
        self
    }

    /// Sets the floor.
    pub fn with_floor(mut self, floor: i32) -> Self {
        self.floor = Some(floor);
        self
    }

    /// Sets the seat capacity.
    pub fn with_capacity(mut self, capacity: u32) -> Self {
        self.capacity = capacity;
        self
    }

    /// Adds a capability tag.
    pub fn with_feature(mut self, feature: impl Into<String>) -> Self {
        self.features.push(feature.into());
        self
    }

    /// Whether this room has a given capability tag.
    pub fn has_feature(&self, feature: &str) -> bool {
        self.features.iter().any(|f| f == feature)
    }
}
