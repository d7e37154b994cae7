pub mod constants;
pub mod error;
pub mod export;
pub mod report;
pub mod room;
pub mod segment;

pub use constants::{DEFAULT_PLAN_FILE, HORIZONTAL_WALLS, NAME_CLOSE, NAME_OPEN, VERTICAL_WALLS};
pub use error::{FloorPlanError, Result};
pub use export::export_report_csv;
pub use report::ApartmentReport;
pub use room::{Furniture, FurnitureCounts, Room};
pub use segment::{RoomSegmenter, read_plan, segment_rooms};
