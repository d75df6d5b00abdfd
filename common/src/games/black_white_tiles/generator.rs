use crate::games::SessionRng;

use super::board::Move;
use super::error::TileError;

/// Draws `count` presses uniformly over a `length` x `width` board, with replacement.
pub fn generate_scramble(
    count: i64,
    length: usize,
    width: usize,
    rng: &mut SessionRng,
) -> Result<Vec<Move>, TileError> {
    let count = usize::try_from(count).map_err(|_| TileError::InvalidCount(count))?;
    if length == 0 || width == 0 {
        return Err(TileError::InvalidDimension {
            length: length as i64,
            width: width as i64,
        });
    }

    Ok((0..count)
        .map(|_| Move::new(rng.random_range(0..length), rng.random_range(0..width)))
        .collect())
}
