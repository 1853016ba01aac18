//! Section renderers for the landing site.

mod benefits;
mod close_webview;
mod footer;
mod get_started;
mod header;
mod hero;
mod logo;
mod not_found;
mod stack;
mod stats;

pub use benefits::*;
pub use close_webview::*;
pub use footer::*;
pub use get_started::*;
pub use header::*;
pub use hero::*;
pub use logo::*;
pub use not_found::*;
pub use stack::*;
pub use stats::*;
