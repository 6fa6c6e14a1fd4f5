//! Integration tests for Thread-Trawl
//!
//! These tests use wiremock to stand in for the forum API and the linked pages.

mod fetch_tests;
mod forum_tests;
mod trawl_tests;
