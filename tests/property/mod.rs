// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests Module

mod ensure_lifecycle;
mod mac_canonicalization;
