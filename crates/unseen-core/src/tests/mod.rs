//! Unit tests for `unseen_core`.

mod classifier_tests;
