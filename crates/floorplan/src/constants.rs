/// Wall symbols
pub const HORIZONTAL_WALLS: [char; 2] = ['+', '-']; // top / bottom borders
pub const VERTICAL_WALLS: [char; 3] = ['|', '/', '\\']; // diagonals count as vertical

/// Room name delimiters
pub const NAME_OPEN: char = '(';
pub const NAME_CLOSE: char = ')';

/// Row 0 is the top border and never scanned
pub const FIRST_SCANNED_ROW: usize = 1;

/// Default plan file read by the CLI
pub const DEFAULT_PLAN_FILE: &str = "rooms.txt";

/// Label of the apartment-wide row in reports
pub const TOTAL_LABEL: &str = "total";

/// Expected headers in exported CSV files
pub const CSV_ROOM_HEADER: &str = "Room";
pub const CSV_TOTAL_HEADER: &str = "Total";

#[inline]
pub fn is_horizontal_wall(c: char) -> bool {
    HORIZONTAL_WALLS.contains(&c)
}

#[inline]
pub fn is_vertical_wall(c: char) -> bool {
    VERTICAL_WALLS.contains(&c)
}
