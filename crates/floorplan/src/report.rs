use crate::{
    constants::TOTAL_LABEL,
    room::{FurnitureCounts, Room},
};
use std::fmt;

/// Apartment totals plus the rooms sorted by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApartmentReport {
    totals: FurnitureCounts,
    rooms: Vec<Room>,
}

impl ApartmentReport {
    pub fn new(mut rooms: Vec<Room>) -> Self {
        // stable: rooms sharing a name keep their scan order
        rooms.sort_by(|a, b| a.name().cmp(b.name()));
        let totals = rooms.iter().map(Room::furniture).sum();
        Self { totals, rooms }
    }

    pub fn totals(&self) -> &FurnitureCounts {
        &self.totals
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}

impl From<Vec<Room>> for ApartmentReport {
    fn from(rooms: Vec<Room>) -> Self {
        Self::new(rooms)
    }
}

impl fmt::Display for ApartmentReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{TOTAL_LABEL}:\n{}", self.totals)?;
        for room in &self.rooms {
            write!(f, "\n{room}")?;
        }
        Ok(())
    }
}
