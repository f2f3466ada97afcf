//! Wordle Filter
//!
//! A constraint-based word filter: given a fixed-length word list and clues about
//! absent, misplaced and pinned letters, it lists every word consistent with them.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_filter::solver::Solver;
//!
//! let mut solver = Solver::new(["crate", "crane", "grape", "trace"]).unwrap();
//! solver
//!     .add_excluded_char('g')
//!     .add_negative_char_pos('n', 0)
//!     .add_positive_char_pos('c', 0)
//!     .unwrap();
//!
//! assert_eq!(solver.possible_answers(), vec!["crane"]);
//! ```

// Core domain types
pub mod core;

// Constraint solving
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Logger setup
pub mod logging;
