// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fixed-capacity sequences and the sandbox built on them.

mod sandbox;
mod seq;

pub use sandbox::FixedArraySandbox;
pub use seq::FixedSeq;
