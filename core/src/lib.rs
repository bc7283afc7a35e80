#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use board::*;
pub use error::*;
pub use sample::*;
pub use types::*;

mod board;
mod error;
mod sample;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub categories: Slot,
    pub clues_per_category: Slot,
}

impl BoardConfig {
    /// The classic board shape: six columns of five clues.
    pub const DEFAULT: Self = Self::new_unchecked(6, 5);

    /// How many candidate categories to request before sampling columns.
    pub const CATEGORY_POOL_SIZE: usize = 100;

    pub const fn new_unchecked(categories: Slot, clues_per_category: Slot) -> Self {
        Self {
            categories,
            clues_per_category,
        }
    }

    pub fn new(categories: Slot, clues_per_category: Slot) -> Self {
        Self::new_unchecked(categories.max(1), clues_per_category.max(1))
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.categories, self.clues_per_category)
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
