//! Optional key-selection capability offered by a managed host page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Some embedding environments let the visitor pick their own model API key.
//! That capability is injected as a `KeyHost` through `KeyHostHandle`
//! context; when nothing is injected the app falls back to the server's
//! configuration and never blocks the page.

#[cfg(test)]
#[path = "key_host_test.rs"]
mod key_host_test;

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::state::ui::KeyStatus;

pub type HostFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Key-selection bridge exposed by a containing runtime.
pub trait KeyHost: Send + Sync {
    /// Whether the visitor has already picked a key.
    fn has_selected_key(&self) -> HostFuture<'_, bool>;
    /// Open the host's key picker. Resolves when the picker closes.
    fn open_select_key(&self) -> HostFuture<'_, ()>;
}

/// Context wrapper so the capability can be absent.
#[derive(Clone, Default)]
pub struct KeyHostHandle(Option<Arc<dyn KeyHost>>);

impl KeyHostHandle {
    #[must_use]
    pub fn new(host: Arc<dyn KeyHost>) -> Self {
        Self(Some(host))
    }

    #[must_use]
    pub fn absent() -> Self {
        Self(None)
    }

    #[must_use]
    pub fn is_present(&self) -> bool {
        self.0.is_some()
    }

    #[must_use]
    pub fn host(&self) -> Option<Arc<dyn KeyHost>> {
        self.0.clone()
    }

    /// Look in the browser for a managed host bridge. Absent during SSR.
    #[must_use]
    pub fn detect() -> Self {
        #[cfg(feature = "hydrate")]
        {
            if let Some(host) = browser::AiStudioHost::detect() {
                return Self::new(Arc::new(host));
            }
        }
        Self::absent()
    }
}

/// Resolve the key status once: ask the host if there is one, otherwise
/// await the server-side fallback.
pub async fn resolve_status<F>(host: Option<&dyn KeyHost>, fallback: F) -> KeyStatus
where
    F: Future<Output = bool>,
{
    match host {
        Some(host) => KeyStatus::from(host.has_selected_key().await),
        None => KeyStatus::from(fallback.await),
    }
}

/// Open the host picker and re-query the real status afterwards.
///
/// Returns `None` when there is no host to activate through.
pub async fn activate(host: Option<&dyn KeyHost>) -> Option<KeyStatus> {
    let host = host?;
    host.open_select_key().await;
    Some(KeyStatus::from(host.has_selected_key().await))
}

#[cfg(feature = "hydrate")]
mod browser {
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;

    use super::{HostFuture, KeyHost};

    const BRIDGE: &str = "aistudio";

    /// Bridge to the `window.aistudio` object some hosts inject.
    pub struct AiStudioHost;

    impl AiStudioHost {
        pub fn detect() -> Option<Self> {
            bridge().map(|_| Self)
        }
    }

    fn bridge() -> Option<JsValue> {
        let window: JsValue = web_sys::window()?.into();
        js_sys::Reflect::get(&window, &JsValue::from_str(BRIDGE))
            .ok()
            .filter(|v| !v.is_undefined() && !v.is_null())
    }

    async fn call(method: &str) -> Result<JsValue, JsValue> {
        let bridge = bridge().ok_or(JsValue::NULL)?;
        let func: js_sys::Function = js_sys::Reflect::get(&bridge, &JsValue::from_str(method))?.dyn_into()?;
        let ret = func.call0(&bridge)?;
        match ret.dyn_into::<js_sys::Promise>() {
            Ok(promise) => JsFuture::from(promise).await,
            Err(value) => Ok(value),
        }
    }

    impl KeyHost for AiStudioHost {
        fn has_selected_key(&self) -> HostFuture<'_, bool> {
            Box::pin(async {
                match call("hasSelectedApiKey").await {
                    Ok(value) => value.as_bool().unwrap_or(false),
                    Err(e) => {
                        log::warn!("hasSelectedApiKey failed: {e:?}");
                        false
                    }
                }
            })
        }

        fn open_select_key(&self) -> HostFuture<'_, ()> {
            Box::pin(async {
                if let Err(e) = call("openSelectKey").await {
                    log::warn!("openSelectKey failed: {e:?}");
                }
            })
        }
    }
}
