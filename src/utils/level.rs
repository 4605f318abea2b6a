// src/utils/level.rs

//! Level formulas.
//!
//! A freshly created user and an existing user are levelled differently:
//! creation uses `max(1, score / 100)` while every later update uses
//! `total_score / 100 + 1`. Both are kept as-is; a user created with 150
//! points sits at level 1, and the same total reached by an update would be
//! level 2.

/// Level assigned to a user created by their first submission.
pub fn initial_level(score: i32) -> i32 {
    score.div_euclid(100).max(1)
}

/// Level of an existing user after their total has been updated.
pub fn level_for_total(total_score: i32) -> i32 {
    total_score.div_euclid(100) + 1
}
