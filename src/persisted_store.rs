use std::cell::RefCell;

use rkyv::api::high::{HighDeserializer, HighSerializer, HighValidator};
use rkyv::bytecheck::CheckBytes;
use rkyv::rancor::Error;
use rkyv::ser::allocator::ArenaHandle;
use rkyv::util::AlignedVec;
use rkyv::{Archive, Deserialize, Serialize};
use wasm_bindgen_futures::spawn_local;

use crate::idb;
use crate::persisted::{UiSettings, UI_SETTINGS_KEY, UI_SETTINGS_VERSION};

thread_local! {
    static UI_SETTINGS_CACHE: RefCell<Option<UiSettings>> = RefCell::new(None);
}

/// Loads persisted UI settings into the in-memory cache. Called once
/// before the first render; readers after that never touch IndexedDB.
pub(crate) async fn bootstrap() -> Result<(), String> {
    let db = idb::open_db().await.map_err(idb::js_err)?;
    let settings = load_ui_settings(&db).await.unwrap_or_default();
    UI_SETTINGS_CACHE.with(|slot| {
        *slot.borrow_mut() = Some(settings);
    });
    Ok(())
}

pub(crate) fn ui_settings() -> UiSettings {
    UI_SETTINGS_CACHE
        .with(|slot| slot.borrow().clone())
        .unwrap_or_default()
}

pub(crate) fn update_ui_settings<F>(update: F)
where
    F: FnOnce(&mut UiSettings),
{
    let settings = UI_SETTINGS_CACHE.with(|slot| {
        let mut settings = slot.borrow().clone().unwrap_or_default();
        update(&mut settings);
        *slot.borrow_mut() = Some(settings.clone());
        settings
    });
    spawn_local(async move {
        let _ = save_ui_settings(settings).await;
    });
}

async fn load_ui_settings(db: &web_sys::IdbDatabase) -> Option<UiSettings> {
    let bytes = idb::idb_get_bytes(db, idb::IDB_STORE_SETTINGS, UI_SETTINGS_KEY)
        .await
        .ok()
        .flatten()?;
    let settings = decode::<UiSettings>(&bytes)?;
    if settings.version != UI_SETTINGS_VERSION {
        return None;
    }
    Some(settings)
}

async fn save_ui_settings(settings: UiSettings) -> Result<(), String> {
    let Some(bytes) = encode(&settings) else {
        return Ok(());
    };
    let db = idb::open_db().await.map_err(idb::js_err)?;
    idb::idb_put_bytes(&db, idb::IDB_STORE_SETTINGS, UI_SETTINGS_KEY, &bytes)
        .await
        .map_err(idb::js_err)?;
    Ok(())
}

fn encode<T>(value: &T) -> Option<Vec<u8>>
where
    T: for<'a> Serialize<HighSerializer<AlignedVec, ArenaHandle<'a>, Error>>,
{
    rkyv::to_bytes::<Error>(value).ok().map(|bytes| bytes.into_vec())
}

fn decode<T>(bytes: &[u8]) -> Option<T>
where
    T: Archive,
    T::Archived:
        for<'a> CheckBytes<HighValidator<'a, Error>> + Deserialize<T, HighDeserializer<Error>>,
{
    rkyv::from_bytes::<T, Error>(bytes).ok()
}
