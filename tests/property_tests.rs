// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests Entry Point
//!
//! This test suite uses proptest to verify properties of canonicalization
//! and the ensure lifecycle that must hold for all inputs.

mod property;
