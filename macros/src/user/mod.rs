//! User-facing derive implementations
//!
//! | Macro | Usage | Purpose |
//! |-------|-------|---------|
//! | `#[derive(Capability)]` | on unit struct | Define capability marker |
//! | `#[derive(ViewOperand)]` | on view struct | Operand / SetCapable impls |

pub mod capability;
pub mod view_operand;

pub use capability::expand_derive_capability;
pub use view_operand::expand_derive_view_operand;
