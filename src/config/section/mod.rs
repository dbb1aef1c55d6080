//! Configuration section definitions.
//!
//! Each module corresponds to a section in `blogdex.toml`:
//!
//! | Module     | TOML Section   | Purpose                               |
//! |------------|----------------|---------------------------------------|
//! | `index`    | `[index]`      | Content root, collections, output     |
//! | `new`      | `[new]`        | Post scaffolding                      |
//! | `validate` | `[validate]`   | Description thresholds, image checks  |

mod index;
mod new;
mod validate;

pub use index::IndexConfig;
pub use new::NewConfig;
pub use validate::ValidateConfig;
