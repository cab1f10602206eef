//! BLE device address helpers.
//!
//! Boards advertise their MAC address with colons (`F4:65:0B:4A:8A:C6`)
//! while the backend stores it without (`F4650B4A8AC6`).

use regex::Regex;
use std::sync::LazyLock;

static MAC_WITH_COLONS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^([0-9A-F]{2}:){5}[0-9A-F]{2}$").expect("colon MAC pattern is valid")
});

static MAC_WITHOUT_COLONS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^[0-9A-F]{12}$").expect("bare MAC pattern is valid"));

/// Strips colons and uppercases, e.g. `f4:65:0b` becomes `F4650B`.
pub fn normalize_mac_address(mac_address: &str) -> String {
    mac_address.replace(':', "").to_uppercase()
}

/// Normalizes, then joins two-character groups with colons.
pub fn format_mac_address(mac_address: &str) -> String {
    let normalized: Vec<char> = normalize_mac_address(mac_address).chars().collect();
    normalized
        .chunks(2)
        .map(|pair| pair.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(":")
}

pub fn is_valid_mac_address(address: &str) -> bool {
    MAC_WITH_COLONS_RE.is_match(address) || MAC_WITHOUT_COLONS_RE.is_match(address)
}

/// Converts a device id reported by the BLE manager to the stored form.
pub fn convert_ble_device_id(ble_device_id: &str) -> String {
    if ble_device_id.is_empty() {
        return String::new();
    }

    let normalized = normalize_mac_address(ble_device_id);

    #[cfg(feature = "tracing")]
    tracing::debug!(original = ble_device_id, normalized = %normalized, "BLE device id conversion");

    normalized
}

/// Colon-separated form for display, or `"Unknown"` for an empty address.
pub fn display_mac_address(mac_address: &str) -> String {
    if mac_address.is_empty() {
        return "Unknown".to_string();
    }
    format_mac_address(mac_address)
}

/// Compares two addresses regardless of colons and case.
/// An empty address never matches.
pub fn mac_addresses_equal(mac1: &str, mac2: &str) -> bool {
    if mac1.is_empty() || mac2.is_empty() {
        return false;
    }
    normalize_mac_address(mac1) == normalize_mac_address(mac2)
}
