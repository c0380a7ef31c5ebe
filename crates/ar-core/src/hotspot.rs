//! Hotspot lookup and the popup/contact requests it produces.
//!
//! Unknown keys are inert: no popup, no error, and whatever contact action was
//! armed before stays armed.

use crate::constants::{CONTACT_RECIPIENT, CONTACT_SUBJECT_PREFIX};
use fnv::FnvHashMap;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HotspotEntry {
    pub key: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const PROPERTY_HOTSPOTS: [HotspotEntry; 3] = [
    HotspotEntry {
        key: "livingroom",
        title: "Ruang Tamu",
        description: "Ruang tamu luas dengan pencahayaan alami\u{2014}cocok untuk bersosialisasi dan menerima tamu. Finishing modern dan lantai keramik premium.",
    },
    HotspotEntry {
        key: "kitchen",
        title: "Dapur Terbuka",
        description: "Dapur konsep terbuka, dilengkapi area kerja ergonomis dan koneksi ke ruang makan. Ideal untuk keluarga modern.",
    },
    HotspotEntry {
        key: "exterior",
        title: "Area Luar",
        description: "Halaman depan dan belakang menyediakan ruang hijau dan potensi perluasan. Keamanan dan akses kendaraan mudah.",
    },
];

#[derive(Clone, Debug, Default)]
pub struct HotspotCatalog {
    entries: FnvHashMap<&'static str, HotspotEntry>,
}

impl HotspotCatalog {
    pub fn new(entries: impl IntoIterator<Item = HotspotEntry>) -> Self {
        Self {
            entries: entries.into_iter().map(|e| (e.key, e)).collect(),
        }
    }

    /// The three rooms of the demo property.
    pub fn property() -> Self {
        Self::new(PROPERTY_HOTSPOTS)
    }

    #[inline]
    pub fn get(&self, key: &str) -> Option<&HotspotEntry> {
        self.entries.get(key)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Popup text for a matched hotspot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PopupContent {
    pub title: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PopupRequest {
    Show(PopupContent),
    Close,
}

/// Pre-filled enquiry sent when the user confirms interest in a hotspot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactMessage {
    pub recipient: String,
    pub subject: String,
}

impl ContactMessage {
    pub fn for_title(recipient: &str, title: &str) -> Self {
        Self {
            recipient: recipient.to_string(),
            subject: format!("{CONTACT_SUBJECT_PREFIX}{title}"),
        }
    }

    pub fn mailto_url(&self) -> String {
        format!(
            "mailto:{}?subject={}",
            self.recipient,
            urlencoding::encode(&self.subject)
        )
    }
}

#[derive(Debug)]
pub struct HotspotDispatcher {
    catalog: HotspotCatalog,
    recipient: String,
    armed: Option<ContactMessage>,
}

impl HotspotDispatcher {
    pub fn new(catalog: HotspotCatalog, recipient: impl Into<String>) -> Self {
        Self {
            catalog,
            recipient: recipient.into(),
            armed: None,
        }
    }

    pub fn on_hotspot_click(&mut self, key: &str) -> Option<PopupRequest> {
        let Some(entry) = self.catalog.get(key) else {
            log::debug!("[hotspot] no entry for {key:?}");
            return None;
        };
        log::info!("[hotspot] show {key}");
        self.armed = Some(ContactMessage::for_title(&self.recipient, entry.title));
        Some(PopupRequest::Show(PopupContent {
            title: entry.title.to_string(),
            description: entry.description.to_string(),
        }))
    }

    /// The contact message for the last shown hotspot. Stays armed after use
    /// and after the popup closes; the next shown hotspot replaces it.
    pub fn confirm_contact(&self) -> Option<&ContactMessage> {
        self.armed.as_ref()
    }

    #[inline]
    pub fn catalog(&self) -> &HotspotCatalog {
        &self.catalog
    }
}

impl Default for HotspotDispatcher {
    fn default() -> Self {
        Self::new(HotspotCatalog::property(), CONTACT_RECIPIENT)
    }
}
