//! Integration tests for Layer 0: Foundation
//!
//! Tests for the line buffer and the error taxonomy.

mod errors;
