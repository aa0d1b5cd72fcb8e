//! Scenario tests for the character controller against small scenes
