//! One-shot GPS lookup for the log form.

use futures::channel::oneshot;
use js_sys::{Function, Reflect};
use std::{cell::RefCell, rc::Rc};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};

/// How the form's GPS badge reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationStatus {
    Locating,
    Ready,
    Off,
}

impl LocationStatus {
    pub fn from_lookup(pending: bool, location: Option<&str>) -> Self {
        match (pending, location) {
            (true, _) => LocationStatus::Locating,
            (false, Some(loc)) if !loc.trim().is_empty() => LocationStatus::Ready,
            _ => LocationStatus::Off,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LocationStatus::Locating => "Locating...",
            LocationStatus::Ready => "Location Ready",
            LocationStatus::Off => "GPS Off",
        }
    }
}

pub fn format_coordinates(latitude: f64, longitude: f64) -> String {
    format!("{latitude}, {longitude}")
}

fn coordinates_of(position: &JsValue) -> Option<String> {
    let coords = Reflect::get(position, &JsValue::from_str("coords")).ok()?;
    let latitude = Reflect::get(&coords, &JsValue::from_str("latitude"))
        .ok()?
        .as_f64()?;
    let longitude = Reflect::get(&coords, &JsValue::from_str("longitude"))
        .ok()?
        .as_f64()?;
    Some(format_coordinates(latitude, longitude))
}

type Reply = Rc<RefCell<Option<oneshot::Sender<Option<String>>>>>;

fn reply(sender: &Reply, value: Option<String>) {
    if let Some(tx) = sender.borrow_mut().take() {
        let _ = tx.send(value);
    }
}

/// Asks the browser for the current position as `"lat, lng"`. Resolves to
/// `None` when geolocation is missing or the user declines.
pub async fn current_location() -> Option<String> {
    let geolocation = match web_sys::window()?.navigator().geolocation() {
        Ok(geo) => geo,
        Err(err) => {
            log::warn!("Geolocation unavailable: {:?}", err);
            return None;
        }
    };

    let (tx, rx) = oneshot::channel();
    let sender: Reply = Rc::new(RefCell::new(Some(tx)));

    let on_success = {
        let sender = sender.clone();
        Closure::once_into_js(move |position: JsValue| reply(&sender, coordinates_of(&position)))
    };
    let on_error = {
        let sender = sender.clone();
        Closure::once_into_js(move |err: JsValue| {
            log::warn!("Location access denied or unavailable: {:?}", err);
            reply(&sender, None);
        })
    };

    if let Err(err) = geolocation.get_current_position_with_error_callback(
        on_success.unchecked_ref::<Function>(),
        Some(on_error.unchecked_ref::<Function>()),
    ) {
        log::warn!("Failed to request position: {:?}", err);
        return None;
    }

    rx.await.ok().flatten()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badge_follows_lookup_state() {
        assert_eq!(LocationStatus::from_lookup(true, None), LocationStatus::Locating);
        assert_eq!(
            LocationStatus::from_lookup(false, Some("17.3, 78.4")),
            LocationStatus::Ready
        );
        assert_eq!(LocationStatus::from_lookup(false, Some(" ")), LocationStatus::Off);
        assert_eq!(LocationStatus::from_lookup(false, None).label(), "GPS Off");
    }

    #[test]
    fn coordinates_are_comma_separated() {
        assert_eq!(format_coordinates(17.3123, 78.25), "17.3123, 78.25");
    }
}
