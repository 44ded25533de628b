/// Core evaluation logic.
///
/// Contains the program, statement, and expression walks and the shared
/// result alias.
pub mod core;

/// Binary operator evaluation.
///
/// Implements evaluation for the five arithmetic operators, including the
/// null-absorption rule and the division-by-zero diagnostic.
pub mod binary;
