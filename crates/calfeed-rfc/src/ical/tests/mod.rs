//! End-to-end feed parsing tests.

mod scenarios;
