use crate::{
    constants::{FIRST_SCANNED_ROW, is_horizontal_wall, is_vertical_wall},
    error::{FloorPlanError, Result},
    room::{Furniture, Room},
};
use log::{debug, trace};
use std::{collections::HashMap, path::Path};

type RoomId = usize;

/// Reads a plan file into memory.
pub fn read_plan<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    std::fs::read_to_string(path).map_err(|e| FloorPlanError::ReadPlan {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Splits `plan` into rooms with a fresh [`RoomSegmenter`].
pub fn segment_rooms(plan: &str) -> Vec<Room> {
    RoomSegmenter::new().segment(plan)
}

/// Room being built on the current row
#[derive(Debug, Clone, Copy)]
enum Current {
    /// A vertical wall was crossed but no cell has been attributed yet
    Pending,
    Open(RoomId),
}

#[derive(Debug, Default)]
struct Slot {
    room: Room,
    committed: bool,
}

/// Single-pass, row-by-row room segmentation.
///
/// A room starts at every vertical wall and is committed when the next
/// vertical wall on the same row is reached. A content cell whose upper
/// neighbour is not a horizontal wall continues the committed room owning
/// that neighbour. Only committed rooms are returned.
#[derive(Debug, Default)]
pub struct RoomSegmenter {
    slots: Vec<Slot>,
    /// commit order
    order: Vec<RoomId>,
    /// column -> committed room owning that cell on the previous row
    above: HashMap<usize, RoomId>,
}

impl RoomSegmenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consumes the segmenter and returns the committed rooms in commit order.
    pub fn segment(mut self, plan: &str) -> Vec<Room> {
        let rows: Vec<Vec<char>> = plan.lines().map(|line| line.chars().collect()).collect();

        for (row_idx, pair) in rows.windows(2).enumerate() {
            self.scan_row(row_idx + FIRST_SCANNED_ROW, &pair[0], &pair[1]);
        }

        debug!(
            "Segmented {} rooms from {} rows ({} rooms discarded)",
            self.order.len(),
            rows.len(),
            self.slots.len() - self.order.len()
        );
        self.into_rooms()
    }

    fn scan_row(&mut self, row_idx: usize, prev: &[char], row: &[char]) {
        let mut current: Option<Current> = None;
        let mut attributed: Vec<(usize, RoomId)> = Vec::with_capacity(row.len());

        for (idx, &c) in row.iter().enumerate() {
            if is_horizontal_wall(c) {
                continue;
            }

            if is_vertical_wall(c) {
                if let Some(open) = current {
                    self.commit(open);
                }
                current = Some(Current::Pending);
                continue;
            }

            // A shorter row above has nothing to continue from.
            if prev.get(idx).is_some_and(|&up| !is_horizontal_wall(up))
                && let Some(&id) = self.above.get(&idx)
            {
                current = Some(Current::Open(id));
            }

            let id = match current {
                Some(Current::Open(id)) => id,
                Some(Current::Pending) => {
                    let id = self.open_room();
                    current = Some(Current::Open(id));
                    id
                }
                None => {
                    trace!("Dropped unattributed cell ({row_idx}, {idx}) {c:?}");
                    continue;
                }
            };

            let room = &mut self.slots[id].room;
            room.occupy(row_idx, idx);
            room.process_name(c);
            if Furniture::from_symbol(c).is_some() {
                room.add_furniture(c);
            }
            attributed.push((idx, id));
        }

        self.above = attributed
            .into_iter()
            .filter(|&(_, id)| self.slots[id].committed)
            .collect();
    }

    fn open_room(&mut self) -> RoomId {
        self.slots.push(Slot::default());
        self.slots.len() - 1
    }

    fn commit(&mut self, current: Current) {
        // A wall right after a wall still commits an (empty) room.
        let id = match current {
            Current::Open(id) => id,
            Current::Pending => self.open_room(),
        };
        let slot = &mut self.slots[id];
        if !slot.committed {
            slot.committed = true;
            self.order.push(id);
        }
    }

    fn into_rooms(mut self) -> Vec<Room> {
        self.order
            .iter()
            .map(|&id| std::mem::take(&mut self.slots[id].room))
            .collect()
    }
}
