// SPDX-License-Identifier: Apache-2.0

mod document;
mod session;

pub use document::{EditOp, TextDocument};
pub use session::{EditorInfo, EditorSession};
