//! Integration tests for the StoryGraph client
//!
//! These tests use wiremock to stand in for the site and drive every public
//! operation end to end.

mod client_tests;
