//! Browser helpers used by the components.
//!
//! Each module keeps its `web-sys`/`js-sys` calls behind the `hydrate`
//! feature so SSR and native tests see inert fallbacks.

pub mod dark_mode;
pub mod key_host;
pub mod scroll;
