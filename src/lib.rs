//! Container sandboxes: fixed arrays, dynamic sequences and a reversal-keyed map.
//!
//! Three independent components share one operation vocabulary (append,
//! positional insert/delete, value delete, bulk reset, normalization, sort,
//! counting, comparison, random regeneration) but differ in how they pay for
//! resizing and in their ordering rules.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐   ┌──────────────────┐   ┌──────────────────┐
//! │ fixed/           │   │ dynamic.rs       │   │ reversal_map.rs  │
//! │ (FixedSeq,       │   │ (DynamicSandbox) │   │ (ReversalMap)    │
//! │ FixedArraySandbox│   │                  │   │                  │
//! └──────────────────┘   └──────────────────┘   └──────────────────┘
//!          │                      │                      │
//!          ▼                      ▼                      ▼
//! ┌──────────────────────────────────────────────────────────────────┐
//! │ utils.rs (histogram, range, positions, sorts, case folding)      │
//! │ contracts.rs (debug-mode invariant checks)                       │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Differences between the sandboxes
//!
//! | Behaviour          | `FixedArraySandbox`     | `DynamicSandbox`    |
//! |--------------------|-------------------------|---------------------|
//! | Append cost        | O(n), always reallocates| amortized O(1)      |
//! | `sort_integers`    | ascending               | **descending**      |
//! | Copy accessor type | `FixedSeq<T>`           | `Vec<T>`            |
//!
//! # Usage
//!
//! ```
//! use container_sandbox::{FixedArraySandbox, IntRange, ReversalMap};
//!
//! let mut sandbox = FixedArraySandbox::with_seed(1);
//! for value in [5, 1, 9, 3] {
//!     sandbox.append_integer(value);
//! }
//! assert_eq!(sandbox.integer_range(), Some(IntRange { min: 1, max: 9 }));
//!
//! let mut map = ReversalMap::new();
//! map.insert("cat");
//! assert!(map.contains_key("tac"));
//! ```

// Module declarations
pub mod contracts;
mod dynamic;
mod error;
mod fixed;
mod reversal_map;
pub mod testing;
mod types;
mod utils;

// Re-exports for public API
pub use dynamic::DynamicSandbox;
pub use error::SandboxError;
pub use fixed::{FixedArraySandbox, FixedSeq};
pub use reversal_map::ReversalMap;
pub use types::{Histogram, IntRange};
pub use utils::{reverse_chars, truncate_toward_zero};
