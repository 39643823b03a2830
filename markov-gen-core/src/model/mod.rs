//! Top-level module for the Markov chain engine.
//!
//! This module provides:
//! - The chainable engine (`MarkovChain`)
//! - The trained transition table and its starters (`NGramModel`)
//! - Order configuration (`Order`)
//! - Internal per-key state with weighted sampling (`State`)

/// Chainable engine: accumulate sources, train, generate.
pub mod markov_chain;

/// Fixed-order n-gram transition table with its starter windows.
///
/// Handles source ingestion, continuation recording and
/// frequency-weighted prediction of the next token.
pub mod ngram_model;

/// Order (n) configuration and its default.
pub mod order;

/// Internal representation of a single key and its observed continuations.
///
/// This module is not exposed publicly.
mod state;
