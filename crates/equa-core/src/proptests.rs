//! Property-based tests for the solver.
