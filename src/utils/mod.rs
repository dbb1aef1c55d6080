//! Shared helpers.
//!
//! | Module   | Purpose                                        |
//! |----------|------------------------------------------------|
//! | `date`   | UTC timestamps without timezone dependencies   |
//! | `path`   | Filesystem path normalization                  |
//! | `plural` | Count formatting for log lines                 |
//! | `slug`   | Title → URL slug conversion                    |

pub mod date;
pub mod path;
mod plural;
pub mod slug;

pub use plural::{plural_count, plural_s};
