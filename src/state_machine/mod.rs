// Copyright (c) 2025 - Cowboy AI, Inc.
//! Finite State Machine Abstractions
//!
//! State machines here are pure: a transition is a deterministic function
//! of the current state and an input, and its output describes the work
//! an external executor must perform. Nothing in this module performs I/O.
//!
//! # Mealy Machine
//!
//! ```text
//! (State, Input) → (State, Output)
//! ```
//!
//! The ensure lifecycle is a Mealy machine: the change the provider must
//! apply depends on both the observed state and the desired state.

pub mod ensure_lifecycle;

pub use ensure_lifecycle::{Change, VarpState};

/// Trait for finite state machines
///
/// Implement this trait to define a state machine with typed states,
/// inputs, and outputs. Machines whose every `(state, input)` pair is
/// legal return the next state directly.
pub trait StateMachine: Sized + Clone {
    /// Input type that triggers transitions
    type Input;

    /// Output type produced by transitions (use () if none)
    type Output;

    /// Compute the next state and the output for `input`
    fn transition(&self, input: &Self::Input) -> (Self, Self::Output);

    /// Apply a sequence of inputs, collecting every output
    fn run<'a, I>(&self, inputs: I) -> (Self, Vec<Self::Output>)
    where
        I: IntoIterator<Item = &'a Self::Input>,
        Self::Input: 'a,
    {
        inputs
            .into_iter()
            .fold((self.clone(), Vec::new()), |(state, mut outputs), input| {
                let (next, output) = state.transition(input);
                outputs.push(output);
                (next, outputs)
            })
    }
}
