use serde::{Deserialize, Serialize};

use crate::labels::{Labels, EN, ZH_CN};

/// Default visibility window of a toast notification
pub const TOAST_MILLIS: u64 = 3_000;

/// Delay between a successful control submission and the status re-pull
pub const REFETCH_DELAY_MILLIS: u64 = 1_000;

/// How long the refresh control stays busy after a refresh round-trip
pub const REFRESH_COOLDOWN_MILLIS: u64 = 1_000;

/// Display language of the panel
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Locale {
    #[default]
    ZhCn,
    En,
}

impl Locale {
    pub fn labels(self) -> &'static Labels {
        match self {
            Self::ZhCn => &ZH_CN,
            Self::En => &EN,
        }
    }
}

/// Client configuration handed over by the shell on startup
///
/// Every field has a default, so the shell only needs to send the values it
/// wants to override (or nothing at all).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct ClientConfig {
    pub locale: Locale,
    pub toast_millis: u64,
    pub refetch_delay_millis: u64,
    pub refresh_cooldown_millis: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            toast_millis: TOAST_MILLIS,
            refetch_delay_millis: REFETCH_DELAY_MILLIS,
            refresh_cooldown_millis: REFRESH_COOLDOWN_MILLIS,
        }
    }
}
