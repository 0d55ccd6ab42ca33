//! Pure game logic for Blood Code, a forensic-analysis puzzle.
//!
//! This crate contains all game logic that is independent of any
//! engine, UI, or runtime. Types are plain serde-derived data and
//! functions take state in and hand state out, making everything
//! unit-testable and portable across the session controller, the
//! headless harness, and any future frontend.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`analysis`] | Pattern-identification phase state and feedback |
//! | [`case`] | Case data model and structural validation |
//! | [`casebook`] | Built-in crime-scene case tables |
//! | [`deduction`] | Question sheet, answers, results review |
//! | [`patterns`] | The eight bloodstain pattern kinds and metadata |
//! | [`phase`] | The five-stage playthrough state machine shape |
//! | [`scoring`] | Rank table and mistake tallying |
//! | [`timeline`] | Sequence reconstruction board and verdicts |

pub mod analysis;
pub mod case;
pub mod casebook;
pub mod deduction;
pub mod patterns;
pub mod phase;
pub mod scoring;
pub mod timeline;
