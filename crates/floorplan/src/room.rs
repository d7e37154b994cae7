use crate::constants::{NAME_CLOSE, NAME_OPEN};
use std::{fmt, ops::AddAssign};

/// Furniture categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Furniture {
    W, // wooden chair
    P, // plastic chair
    S, // sofa
    C, // china chair
}

impl Furniture {
    /// Fixed report order
    pub const ALL: [Furniture; 4] = [Furniture::W, Furniture::P, Furniture::S, Furniture::C];

    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            'W' => Some(Furniture::W),
            'P' => Some(Furniture::P),
            'S' => Some(Furniture::S),
            'C' => Some(Furniture::C),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Furniture::W => 'W',
            Furniture::P => 'P',
            Furniture::S => 'S',
            Furniture::C => 'C',
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Furniture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Per-category furniture tally.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FurnitureCounts {
    counts: [u64; 4],
}

impl FurnitureCounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, kind: Furniture) {
        self.counts[kind.index()] += 1;
    }

    pub fn get(&self, kind: Furniture) -> u64 {
        self.counts[kind.index()]
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Iterates `(category, count)` in report order
    pub fn iter(&self) -> impl Iterator<Item = (Furniture, u64)> + '_ {
        Furniture::ALL.into_iter().map(move |kind| (kind, self.get(kind)))
    }
}

impl AddAssign<&FurnitureCounts> for FurnitureCounts {
    fn add_assign(&mut self, rhs: &FurnitureCounts) {
        for (lhs, rhs) in self.counts.iter_mut().zip(rhs.counts) {
            *lhs += rhs;
        }
    }
}

impl<'a> std::iter::Sum<&'a FurnitureCounts> for FurnitureCounts {
    fn sum<I: Iterator<Item = &'a FurnitureCounts>>(iter: I) -> Self {
        iter.fold(FurnitureCounts::new(), |mut acc, counts| {
            acc += counts;
            acc
        })
    }
}

impl fmt::Display for FurnitureCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (kind, count)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{kind}: {count}")?;
        }
        Ok(())
    }
}

/// One room of the apartment, filled in while the plan is scanned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Room {
    name: String,
    /// true between a `(` and the matching `)`
    naming: bool,
    /// `(row, col)` in scan order
    cells: Vec<(usize, usize)>,
    furniture: FurnitureCounts,
}

impl Room {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cells(&self) -> &[(usize, usize)] {
        &self.cells
    }

    pub fn furniture(&self) -> &FurnitureCounts {
        &self.furniture
    }

    pub fn count(&self, kind: Furniture) -> u64 {
        self.furniture.get(kind)
    }

    pub(crate) fn occupy(&mut self, row: usize, col: usize) {
        self.cells.push((row, col));
    }

    /// Feeds one interior symbol to the name capture.
    ///
    /// Delimiters toggle the capture and are never part of the name.
    pub fn process_name(&mut self, symbol: char) {
        match symbol {
            NAME_OPEN => self.naming = true,
            NAME_CLOSE => self.naming = false,
            _ if self.naming => self.name.push(symbol),
            _ => {}
        }
    }

    /// Counts `symbol` if it is furniture outside of a name.
    pub fn add_furniture(&mut self, symbol: char) {
        if self.naming {
            return;
        }
        if let Some(kind) = Furniture::from_symbol(symbol) {
            self.furniture.increment(kind);
        }
    }

    pub fn total_furniture(&self) -> u64 {
        self.furniture.total()
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:\n{}", self.name, self.furniture)
    }
}
