//! # Settings Module
//!
//! Key-value preference storage as seen by the core. The actual persistence
//! lives outside this crate; the core only talks to the [`SettingsStore`]
//! trait and ships an in-memory implementation for hosts and tests.
//!
//! Persisted enums are stored as raw strings. Decoding goes through
//! [`decode_or_default`] so the fallback for an unknown or missing value is
//! applied in one place instead of at every read site.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Setting keys used by the app.
pub mod keys {
    pub const THEME_ID: &str = "tenney.theme.id";
    pub const COLOR_MIX_BASIS: &str = "tenney.theme.mixBasis";
    pub const COLOR_MIX_MODE: &str = "tenney.theme.mixMode";
    pub const SCOPE_COLOR_MODE: &str = "tenney.scope.colorMode";
    pub const MONOCHROME_TINT: &str = "tenney.theme.monochromeTint";
    pub const SURFACE_TINT_STRENGTH: &str = "tenney.theme.tintStrength";
    pub const GRID_STRENGTH: &str = "tenney.lattice.gridStrength";
    pub const LABEL_DENSITY: &str = "tenney.lattice.labelDensity";
    pub const OUTPUT_HEADROOM: &str = "tenney.audio.headroom";

    // Split per-appearance keys written by older versions.
    pub const LEGACY_THEME_ID_LIGHT: &str = "tenney.theme.id.light";
    pub const LEGACY_THEME_ID_DARK: &str = "tenney.theme.id.dark";
    pub const LEGACY_SURFACE_TINT_STRENGTH_LIGHT: &str = "tenney.theme.tintStrength.light";
    pub const LEGACY_SURFACE_TINT_STRENGTH_DARK: &str = "tenney.theme.tintStrength.dark";
    pub const LEGACY_GRID_STRENGTH_LIGHT: &str = "tenney.lattice.gridStrength.light";
    pub const LEGACY_GRID_STRENGTH_DARK: &str = "tenney.lattice.gridStrength.dark";
    pub const LEGACY_LABEL_DENSITY_LIGHT: &str = "tenney.lattice.labelDensity.light";
    pub const LEGACY_LABEL_DENSITY_DARK: &str = "tenney.lattice.labelDensity.dark";
}

/// A single persisted preference value.
// Variant order matters for untagged deserialization: integers must be
// tried before doubles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
    Bool(bool),
    Int(i64),
    Double(f64),
    String(String),
}

impl SettingValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            SettingValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Numeric value; integers widen to `f64`.
    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            SettingValue::Double(v) => Some(v),
            SettingValue::Int(v) => Some(v as f64),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            SettingValue::Int(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match *self {
            SettingValue::Bool(v) => Some(v),
            _ => None,
        }
    }
}

impl From<&str> for SettingValue {
    fn from(value: &str) -> Self {
        SettingValue::String(value.to_owned())
    }
}

impl From<String> for SettingValue {
    fn from(value: String) -> Self {
        SettingValue::String(value)
    }
}

impl From<f64> for SettingValue {
    fn from(value: f64) -> Self {
        SettingValue::Double(value)
    }
}

impl From<i64> for SettingValue {
    fn from(value: i64) -> Self {
        SettingValue::Int(value)
    }
}

impl From<bool> for SettingValue {
    fn from(value: bool) -> Self {
        SettingValue::Bool(value)
    }
}

/// Persistent key-value preference storage.
pub trait SettingsStore {
    fn get(&self, key: &str) -> Option<SettingValue>;

    fn set(&mut self, key: &str, value: SettingValue);

    fn remove(&mut self, key: &str) -> Option<SettingValue>;

    fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    fn get_string(&self, key: &str) -> Option<String> {
        match self.get(key)? {
            SettingValue::String(s) => Some(s),
            _ => None,
        }
    }

    fn get_f64(&self, key: &str) -> Option<f64> {
        self.get(key)?.as_f64()
    }

    fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key)?.as_bool()
    }

    fn get_i64(&self, key: &str) -> Option<i64> {
        self.get(key)?.as_i64()
    }
}

/// Settings store held entirely in memory.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemorySettingsStore {
    values: BTreeMap<String, SettingValue>,
}

impl MemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// All stored values, sorted by key.
    pub fn values(&self) -> &BTreeMap<String, SettingValue> {
        &self.values
    }
}

impl<K: Into<String>, V: Into<SettingValue>> FromIterator<(K, V)> for MemorySettingsStore {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl SettingsStore for MemorySettingsStore {
    fn get(&self, key: &str) -> Option<SettingValue> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: SettingValue) {
        self.values.insert(key.to_owned(), value);
    }

    fn remove(&mut self, key: &str) -> Option<SettingValue> {
        self.values.remove(key)
    }

    fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }
}

/// A fieldless enum persisted by its raw string value.
pub trait RawEnum: Sized + Copy {
    /// Value used when nothing (or something unrecognized) is stored.
    const DEFAULT: Self;

    fn from_raw(raw: &str) -> Option<Self>;

    fn raw(self) -> &'static str;
}

/// Decodes a stored raw string, falling back to [`RawEnum::DEFAULT`].
pub fn decode_or_default<T: RawEnum>(raw: Option<&str>) -> T {
    raw.and_then(T::from_raw).unwrap_or(T::DEFAULT)
}

/// Reads and decodes an enum setting from `store`.
pub fn read_enum<T: RawEnum, S: SettingsStore + ?Sized>(store: &S, key: &str) -> T {
    decode_or_default(store.get_string(key).as_deref())
}

/// Writes an enum setting as its raw string.
pub fn write_enum<T: RawEnum, S: SettingsStore + ?Sized>(store: &mut S, key: &str, value: T) {
    store.set(key, SettingValue::from(value.raw()));
}
