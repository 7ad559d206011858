//! Unit test modules.

mod classifier_test;
mod schedule_test;
