use chrono::{Duration, TimeZone, Utc};
use contacts::model::*;

fn jack() -> PersonName {
    let mut name = PersonName::new("Jack".into(), "Hoff".into());
    name.job_title = Some("Generic Employee".into());
    name
}

fn office() -> UsAddress {
    let mut addr = UsAddress::new(
        "123 Main St".into(),
        "Putnam".into(),
        "CT".into(),
        "06260".into(),
    );
    addr.name = Some("office".into());
    addr
}

// ==========================================================================
// CONTACT TESTS
// ==========================================================================

#[test]
fn contact_create_stamps_both_sides() {
    let actor = Id::<User>::generate();
    let now = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
    let contact = Contact::create(jack(), actor, now);

    assert_eq!(contact.audit.created_on, now);
    assert_eq!(contact.audit.updated_on, now);
    assert_eq!(contact.audit.created_by, Some(actor));
    assert_eq!(contact.audit.updated_by, Some(actor));
}

#[test]
fn contact_names() {
    let contact = Contact::create(jack(), Id::generate(), Utc::now());
    assert_eq!(contact.full_name(), "Jack Hoff");
    assert_eq!(contact.short_name().as_deref(), Some("J. Hoff"));
    assert_eq!(contact.to_string(), "Jack Hoff");
}

#[test]
fn touch_keeps_creation_stamp() {
    let creator = Id::<User>::generate();
    let editor = Id::<User>::generate();
    let created = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
    let mut contact = Contact::create(jack(), creator, created);

    let later = created + Duration::hours(2);
    contact.audit.touch(editor, later);

    assert_eq!(contact.audit.created_on, created);
    assert_eq!(contact.audit.created_by, Some(creator));
    assert_eq!(contact.audit.updated_on, later);
    assert_eq!(contact.audit.updated_by, Some(editor));
}

#[test]
fn contact_serializes_flat() {
    let contact = Contact::create(jack(), Id::generate(), Utc::now());
    let value = serde_json::to_value(&contact).unwrap();
    assert_eq!(value["first_name"], "Jack");
    assert_eq!(value["last_name"], "Hoff");
    assert_eq!(value["job_title"], "Generic Employee");
    assert!(value.get("created_on").is_some());
    assert!(value.get("name").is_none());
}

// ==========================================================================
// ADDRESS TESTS
// ==========================================================================

#[test]
fn address_without_unit() {
    let addr = office();
    assert_eq!(addr.single_line_address(false), "123 Main St, Putnam, CT 06260");
    assert_eq!(addr.single_line_address(true), "office: 123 Main St, Putnam, CT 06260");
    assert_eq!(addr.multi_line_address(false), "123 Main St\nPutnam, CT 06260");
    assert_eq!(addr.multi_line_address(true), "office\n123 Main St\nPutnam, CT 06260");
}

#[test]
fn address_with_unit() {
    let mut addr = office();
    addr.unit_type = "Suite".into();
    addr.unit_number = Some("200".into());

    assert!(addr.has_unit());
    assert_eq!(
        addr.full_address_lines(),
        vec!["123 Main St", "Suite 200", "Putnam, CT 06260"]
    );
    assert_eq!(
        addr.single_line_address(false),
        "123 Main St, Suite 200, Putnam, CT 06260"
    );
}

#[test]
fn short_address_leaves_out_unit_and_zip() {
    let mut addr = office();
    addr.unit_number = Some("4".into());
    assert_eq!(addr.short_address(false), "123 Main St, Putnam, CT");
    assert_eq!(addr.short_address(true), "office: 123 Main St, Putnam, CT");
    assert_eq!(addr.to_string(), "123 Main St, Putnam, CT");
}

#[test]
fn named_render_without_label_has_no_prefix() {
    let mut addr = office();
    addr.name = None;
    assert_eq!(addr.single_line_address(true), addr.single_line_address(false));
}

#[test]
fn contact_address_display_is_short_form() {
    let entry = ContactAddress::create(Id::generate(), office(), Id::generate(), Utc::now());
    assert_eq!(entry.to_string(), "123 Main St, Putnam, CT");
}

// ==========================================================================
// PHONE NUMBER TESTS
// ==========================================================================

#[test]
fn phone_number_written_forms_agree() {
    let forms = ["(201) 555-0123", "201.555.0123", "1-201-555-0123", "+1 201 555 0123"];
    for f in forms {
        let n = PhoneNumber::parse(f).unwrap();
        assert_eq!(n.as_e164(), "+12015550123", "input {}", f);
    }
}

#[test]
fn phone_number_national_form() {
    let n = PhoneNumber::parse("2015550123").unwrap();
    assert!(n.is_nanp());
    assert_eq!(n.as_national(), "(201) 555-0123");
    assert_eq!(n.to_string(), "(201) 555-0123");
}

#[test]
fn phone_number_international_kept_as_e164() {
    let n = PhoneNumber::parse("+44 20 7946 0958").unwrap();
    assert!(!n.is_nanp());
    assert_eq!(n.as_national(), "+442079460958");
}

#[test]
fn phone_number_rejects_bad_input() {
    assert!(PhoneNumber::parse("555-0123").is_none());
    assert!(PhoneNumber::parse("(101) 555-0123").is_none());
    assert!(PhoneNumber::parse("call me maybe").is_none());
}

#[test]
fn contact_phone_display_uses_national_form() {
    let entry = ContactPhoneNumber::create(
        Id::generate(),
        PhoneNumber::parse("201-555-0123").unwrap(),
        Some("mobile".into()),
        Id::generate(),
        Utc::now(),
    );
    assert_eq!(entry.to_string(), "(201) 555-0123");
}
