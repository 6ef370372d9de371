//! Single test binary entry point.
//!
//! All integration tests live in one binary so the crate is linked once
//! rather than per test file.
//!
//! Structure:
//! - helpers: builders and assertion helpers shared across tests
//! - integration: multi-component workflow tests (editor, gestures, history)
//! - unit: single-component tests (store, export, project, serialization)
