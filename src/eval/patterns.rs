//! Line scores for tic-tac-toe evaluation
//!
//! Each of the eight winning lines contributes independently. The weights
//! rise by a factor of ten per mark so that a completed line outweighs any
//! combination of lesser threats within the depth-2 horizon.

/// Line scores for evaluation, from the computer's perspective
pub struct LineScore;

impl LineScore {
    /// One mark on an otherwise open line
    pub const ONE: i32 = 1;
    /// Two marks with the third cell open - an immediate threat
    pub const TWO: i32 = 10;
    /// Completed line - a win
    pub const WIN: i32 = 100;
}

/// Score a single line from its mark counts.
///
/// `ours`/`theirs` are the computer's and the human's mark counts on the
/// line. A line holding both symbols is dead for either side and scores
/// zero; otherwise the holder scores `1`, `10`, or `100` (negated for the
/// opponent). Two separate two-in-a-row threats both score 10 - the
/// heuristic deliberately does not distinguish them.
pub fn line_score(ours: u8, theirs: u8) -> i32 {
    debug_assert!(ours + theirs <= 3);

    match (ours, theirs) {
        (1, 0) => LineScore::ONE,
        (2, 0) => LineScore::TWO,
        (3, 0) => LineScore::WIN,
        (0, 1) => -LineScore::ONE,
        (0, 2) => -LineScore::TWO,
        (0, 3) => -LineScore::WIN,
        // Empty line, or a blocked line with both symbols present
        _ => 0,
    }
}
