/// Index type for both board axes: category columns and clue rows.
pub type Slot = u8;

/// Count type used for total-cell counts.
pub type CellCount = u16;

/// Cell address as `(category, clue)`.
pub type CellAddr = (Slot, Slot);

pub const fn mult(a: Slot, b: Slot) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}
