//! Clipboard and share-sheet glue for the receive flow.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both calls are fire-and-forget browser affordances. Native builds no-op
//! so components stay renderable on the server.

/// Copy `text` to the clipboard. Returns whether a clipboard was available.
pub fn copy_text(text: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Some(clipboard) = window.navigator().clipboard() {
                let _ = clipboard.write_text(text);
                return true;
            }
        }
        false
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = text;
        false
    }
}

/// Open the native share sheet when the browser exposes `navigator.share`.
pub fn share(title: &str, text: &str, url: &str) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let Some(window) = web_sys::window() else {
            return;
        };
        let navigator: wasm_bindgen::JsValue = window.navigator().into();
        let Ok(share_fn) = js_sys::Reflect::get(&navigator, &"share".into()) else {
            return;
        };
        let Some(share_fn) = share_fn.dyn_ref::<js_sys::Function>() else {
            log::debug!("navigator.share unavailable");
            return;
        };
        let data = js_sys::Object::new();
        let _ = js_sys::Reflect::set(&data, &"title".into(), &title.into());
        let _ = js_sys::Reflect::set(&data, &"text".into(), &text.into());
        let _ = js_sys::Reflect::set(&data, &"url".into(), &url.into());
        // The returned promise rejects when the user dismisses the sheet.
        let _ = share_fn.call1(&navigator, &data);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (title, text, url);
    }
}
