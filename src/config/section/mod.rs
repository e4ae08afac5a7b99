//! Configuration section definitions.
//!
//! Each module corresponds to a section in `vita.toml`:
//!
//! | Module    | TOML Section          | Purpose                          |
//! |-----------|-----------------------|----------------------------------|
//! | `paths`   | `[input]`, `[output]` | Data file and artifact paths     |
//! | `render`  | `[render]`            | Extra stylesheet                 |
//! | `convert` | `[convert]`           | PDF engine selection             |
//! | `watch`   | `[watch]`             | Debounce and freshness settings  |
//! | `viewer`  | `[viewer]`            | Viewer launched by `--open`      |

mod convert;
mod paths;
mod render;
mod viewer;
mod watch;

pub use convert::{ConvertConfig, Engine};
pub use paths::{InputConfig, OutputConfig};
pub use render::RenderConfig;
pub use viewer::ViewerConfig;
pub use watch::WatchConfig;
