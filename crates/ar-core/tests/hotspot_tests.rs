// Hotspot lookup, popup requests and the armed contact action.

use ar_core::*;

fn shown_title(req: Option<PopupRequest>) -> Option<String> {
    match req {
        Some(PopupRequest::Show(content)) => Some(content.title),
        _ => None,
    }
}

#[test]
fn property_catalog_has_three_rooms() {
    let catalog = HotspotCatalog::property();
    assert_eq!(catalog.len(), 3);
    assert_eq!(catalog.get("livingroom").map(|e| e.title), Some("Ruang Tamu"));
    assert_eq!(catalog.get("exterior").map(|e| e.title), Some("Area Luar"));
}

#[test]
fn kitchen_click_shows_title_and_description() {
    let mut d = HotspotDispatcher::default();
    match d.on_hotspot_click("kitchen") {
        Some(PopupRequest::Show(content)) => {
            assert_eq!(content.title, "Dapur Terbuka");
            assert!(content.description.starts_with("Dapur konsep terbuka"));
        }
        other => panic!("expected show request, got {:?}", other),
    }
}

#[test]
fn unknown_key_is_inert() {
    let mut d = HotspotDispatcher::default();
    assert_eq!(d.on_hotspot_click("garage"), None);
    assert!(d.confirm_contact().is_none());
}

#[test]
fn keys_are_case_sensitive() {
    let mut d = HotspotDispatcher::default();
    assert_eq!(d.on_hotspot_click("Kitchen"), None);
}

#[test]
fn click_arms_contact_for_title() {
    let mut d = HotspotDispatcher::default();
    d.on_hotspot_click("kitchen");
    let msg = d.confirm_contact().cloned();
    assert_eq!(
        msg,
        Some(ContactMessage {
            recipient: "info@agenproperti.example".to_string(),
            subject: "Ketertarikan pada properti: Dapur Terbuka".to_string(),
        })
    );
}

#[test]
fn unknown_key_keeps_previous_contact_armed() {
    let mut d = HotspotDispatcher::default();
    d.on_hotspot_click("exterior");
    d.on_hotspot_click("garage");
    assert_eq!(
        d.confirm_contact().map(|m| m.subject.as_str()),
        Some("Ketertarikan pada properti: Area Luar")
    );
}

#[test]
fn later_click_replaces_armed_contact() {
    let mut d = HotspotDispatcher::default();
    assert_eq!(shown_title(d.on_hotspot_click("kitchen")), Some("Dapur Terbuka".into()));
    assert_eq!(shown_title(d.on_hotspot_click("livingroom")), Some("Ruang Tamu".into()));
    assert!(d
        .confirm_contact()
        .map(|m| m.subject.ends_with("Ruang Tamu"))
        .unwrap_or(false));
}

#[test]
fn mailto_url_encodes_subject() {
    let msg = ContactMessage::for_title("info@agenproperti.example", "Dapur Terbuka");
    assert_eq!(
        msg.mailto_url(),
        "mailto:info@agenproperti.example?subject=Ketertarikan%20pada%20properti%3A%20Dapur%20Terbuka"
    );
}

#[test]
fn custom_catalog_and_recipient() {
    let catalog = HotspotCatalog::new([HotspotEntry {
        key: "garage",
        title: "Garasi",
        description: "Muat dua mobil.",
    }]);
    let mut d = HotspotDispatcher::new(catalog, "sales@example.test");
    assert_eq!(shown_title(d.on_hotspot_click("garage")), Some("Garasi".into()));
    assert_eq!(d.on_hotspot_click("kitchen"), None);
    assert!(d
        .confirm_contact()
        .map(|m| m.mailto_url().starts_with("mailto:sales@example.test?subject="))
        .unwrap_or(false));
}
