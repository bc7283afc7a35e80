use alloc::vec::Vec;
use rand::Rng;
use rand::RngExt;

use crate::*;

/// Uniform sample without replacement, preserving the random selection order.
///
/// Errors when the pool holds fewer items than requested; the caller gets no
/// partial draw.
pub fn draw<T, R: Rng + ?Sized>(rng: &mut R, mut pool: Vec<T>, count: usize) -> Result<Vec<T>> {
    if pool.len() < count {
        log::warn!(
            "sample pool too small, requested {} from {}",
            count,
            pool.len()
        );
        return Err(BoardError::PoolTooSmall);
    }

    let mut picked = Vec::with_capacity(count);
    for _ in 0..count {
        let index = rng.random_range(0..pool.len());
        picked.push(pool.swap_remove(index));
    }
    Ok(picked)
}
