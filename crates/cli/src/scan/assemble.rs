// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Result assembly over a scanner's step stream.

use super::{Classifier, Scanner, Step};

/// Accumulates scanner steps into a final result.
///
/// Steps arrive strictly in input order and end with
/// [`Boundary::End`](super::Boundary::End).
pub trait Assembler {
    type Output;

    fn push(&mut self, step: Step);

    fn finish(self) -> Self::Output;
}

/// Scan `input` once with a fresh state and feed every step to `assembler`.
pub fn assemble<C, A>(input: &str, classifier: C, mut assembler: A) -> A::Output
where
    C: Classifier,
    A: Assembler,
{
    for step in Scanner::new(input, classifier) {
        assembler.push(step);
    }
    assembler.finish()
}
