use leptos::logging::error;
use leptos::prelude::*;

/// Keeps a piece of state synced with one `window.localStorage` key, so a
/// logged-in user stays logged in across reloads.
///
/// The initial value is whatever the key currently holds. From then on an
/// effect mirrors every change back: `Some(value)` is written through, `None`
/// removes the key outright rather than storing a placeholder. Values are
/// plain strings; storage failures (quota, disabled storage) are logged and
/// otherwise ignored.
pub fn use_local_storage(
    key: &'static str,
) -> (ReadSignal<Option<String>>, WriteSignal<Option<String>>) {
    let (value, set_value) = signal(read_key(key));

    Effect::new(move |_| {
        let current = value.get();
        let Some(storage) = local_storage() else {
            return;
        };
        let result = match &current {
            Some(v) => storage.set_item(key, v),
            None => storage.remove_item(key),
        };
        if let Err(err) = result {
            error!("localStorage update for {key} failed: {err:?}");
        }
    });

    (value, set_value)
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|window| window.local_storage().ok().flatten())
}

fn read_key(key: &str) -> Option<String> {
    local_storage().and_then(|storage| storage.get_item(key).ok().flatten())
}
