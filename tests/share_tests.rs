use std::fs;
use std::time::Duration;

use anyhow::{anyhow, Result};

use ramadan_timetable::calendar::calendar;
use ramadan_timetable::i18n::{strings, Language};
use ramadan_timetable::share::{
    day_request, find_card, greeting_request, share, share_message, ClipboardOnly, MosqueProfile, ShareOutcome,
    ShareRequest, ShareTarget, COPIED_INDICATOR,
};

struct NativeSheet {
    result: Option<bool>,
    shared: Vec<ShareRequest>,
}

impl ShareTarget for NativeSheet {
    fn native_share(&mut self, request: &ShareRequest) -> Option<Result<()>> {
        let ok = self.result?;
        self.shared.push(request.clone());
        Some(if ok { Ok(()) } else { Err(anyhow!("user dismissed")) })
    }
}

#[test]
fn english_share_message_for_first_day() {
    let text = share_message(Language::En, &calendar()[0]);
    assert_eq!(
        text,
        "Date: February 18\n1st Ramadan\nSuhoor: 5:53\nIftar: 6:16\nMesquita Hazrat Hamza (R.A)"
    );
}

#[test]
fn bengali_share_message_uses_bengali_digits() {
    let text = share_message(Language::Bn, &calendar()[0]);
    assert!(text.contains("৫:৫৩"));
    assert!(text.contains("৬:১৬"));
    assert!(!text.contains('{'));
}

#[test]
fn clipboard_payload_appends_url_when_present() {
    let with_url = day_request(Language::En, &calendar()[0], "https://example.org");
    assert!(with_url.clipboard_payload().ends_with("\nhttps://example.org"));
    assert_eq!(with_url.title, strings(Language::En).title);

    let without_url = day_request(Language::En, &calendar()[0], "");
    assert_eq!(without_url.clipboard_payload(), without_url.text);
}

#[test]
fn desktop_share_falls_back_to_clipboard() {
    let request = day_request(Language::Pt, &calendar()[3], "");
    assert_eq!(share(&mut ClipboardOnly, &request), ShareOutcome::Copy(request.text.clone()));

    let mut absent = NativeSheet {
        result: None,
        shared: Vec::new(),
    };
    assert!(matches!(share(&mut absent, &request), ShareOutcome::Copy(_)));
}

#[test]
fn native_share_reports_success_and_failure() {
    let request = day_request(Language::En, &calendar()[0], "");
    let mut sheet = NativeSheet {
        result: Some(true),
        shared: Vec::new(),
    };
    assert_eq!(share(&mut sheet, &request), ShareOutcome::Shared);
    assert_eq!(sheet.shared.len(), 1);

    sheet.result = Some(false);
    assert_eq!(share(&mut sheet, &request), ShareOutcome::Failed);
}

#[test]
fn greeting_uses_custom_text_unless_blank() {
    let card = find_card("1").unwrap();
    let blank = greeting_request(Language::En, card, Some("   "), "");
    assert_eq!(blank.text, card.message(Language::En));

    let none = greeting_request(Language::En, card, None, "");
    assert_eq!(none.text, card.message(Language::En));

    let custom = greeting_request(Language::En, card, Some("  Eid is near  "), "");
    assert_eq!(custom.text, "Eid is near");
}

#[test]
fn unknown_card_is_not_found() {
    assert!(find_card("10").is_some());
    assert!(find_card("99").is_none());
}

#[test]
fn copied_indicator_lasts_two_seconds() {
    assert_eq!(COPIED_INDICATOR, Duration::from_secs(2));
}

#[test]
fn missing_or_invalid_profile_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    assert_eq!(MosqueProfile::load(dir.path()), MosqueProfile::default());

    fs::write(dir.path().join("mosque.json"), "[1, 2").unwrap();
    assert_eq!(MosqueProfile::load(dir.path()), MosqueProfile::default());
}

#[test]
fn donation_fields_skip_empty_values() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("mosque.json"),
        r#"{"share_url":"https://example.org","donation":{"bank_name":"Banco","iban":"PT50 0000"}}"#,
    )
    .unwrap();

    let profile = MosqueProfile::load(dir.path());
    assert_eq!(profile.share_url, "https://example.org");
    let donation = profile.donation.unwrap();
    let t = strings(Language::En);
    assert_eq!(
        donation.fields(Language::En),
        vec![(t.bank_name.as_str(), "Banco"), (t.iban.as_str(), "PT50 0000")]
    );
}
