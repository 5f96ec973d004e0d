//! Tests for recommendation service
