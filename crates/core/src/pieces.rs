//! Piece catalog - rotation states for the five piece kinds
//!
//! Every rotation state is four flat offsets from the piece's reference
//! position. With `W` the board width, `W` is "one row down" and `W + 1` is
//! "one row down, one column right". Kinds have different numbers of states:
//! O has one, I has two, the rest have four. Rotating cycles modulo that
//! count.

use crate::types::{PieceKind, BOARD_WIDTH};

/// Offsets of the four cells of one rotation state
pub type Shape = [i32; 4];

const W: i32 = BOARD_WIDTH as i32;

const L_STATES: [Shape; 4] = [
    [1, W + 1, W * 2 + 1, 2],
    [W, W + 1, W + 2, W * 2 + 2],
    [1, W + 1, W * 2 + 1, W * 2],
    [W, W * 2, W * 2 + 1, W * 2 + 2],
];

// Two distinct states, listed twice so Z cycles in four steps like L and T.
const Z_STATES: [Shape; 4] = [
    [0, 1, W + 1, W + 2],
    [2, W + 1, W + 2, W * 2 + 1],
    [0, 1, W + 1, W + 2],
    [2, W + 1, W + 2, W * 2 + 1],
];

const T_STATES: [Shape; 4] = [
    [1, W, W + 1, W + 2],
    [1, W + 1, W + 2, W * 2 + 1],
    [W, W + 1, W + 2, W * 2 + 1],
    [1, W, W + 1, W * 2 + 1],
];

const O_STATES: [Shape; 1] = [[0, 1, W, W + 1]];

const I_STATES: [Shape; 2] = [
    [1, W + 1, W * 2 + 1, W * 3 + 1],
    [W, W + 1, W + 2, W + 3],
];

/// All rotation states of `kind`, in rotation order
pub fn rotation_states(kind: PieceKind) -> &'static [Shape] {
    match kind {
        PieceKind::L => &L_STATES,
        PieceKind::Z => &Z_STATES,
        PieceKind::T => &T_STATES,
        PieceKind::O => &O_STATES,
        PieceKind::I => &I_STATES,
    }
}

/// Number of rotation states for `kind`
pub fn rotation_count(kind: PieceKind) -> usize {
    rotation_states(kind).len()
}

/// Offsets for `kind` at `rotation`; the index wraps around the state count.
pub fn get_shape(kind: PieceKind, rotation: usize) -> Shape {
    let states = rotation_states(kind);
    states[rotation % states.len()]
}

/// Rotation index that follows `rotation` for `kind`
pub fn next_rotation(kind: PieceKind, rotation: usize) -> usize {
    (rotation + 1) % rotation_count(kind)
}
