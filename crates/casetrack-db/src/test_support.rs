//! Shared test utilities for casetrack-db unit tests.
