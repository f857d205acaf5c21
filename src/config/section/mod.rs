//! Configuration section definitions.
//!
//! | Module   | TOML Section | Purpose                               |
//! |----------|--------------|---------------------------------------|
//! | `build`  | `[build]`    | Input/output dirs, generation options |
//! | `naming` | `[naming]`   | Component name prefix                 |

mod build;
mod naming;

pub use build::BuildConfig;
pub use naming::NamingConfig;
