use contacts::db::*;
use contacts::error::ContactsError;
use contacts::forms::*;
use contacts::model::*;
use contacts::ops::*;

fn setup() -> (rusqlite::Connection, User) {
    let conn = schema::test_connection();
    let user = user_ops::register_user(&conn, "admin", Some("admin@example.com")).unwrap();
    (conn, user)
}

fn jack_form() -> ContactForm {
    ContactForm {
        first_name: "Jack".into(),
        last_name: "Hoff".into(),
        job_title: "generic employee".into(),
        description: "".into(),
    }
}

fn details_form() -> ContactWithDetailsForm {
    ContactWithDetailsForm {
        first_name: "Jack".into(),
        last_name: "Hoff".into(),
        job_title: "generic employee".into(),
        description: "Met at the trade show".into(),
        email_address: " Jack.Hoff@Example.com ".into(),
        email_label: "work".into(),
        phone_number: "(201) 555-0123".into(),
        phone_label: "mobile".into(),
        address_label: "office".into(),
        building_number: "123".into(),
        street_name: "Main St".into(),
        unit_type: "Suite".into(),
        unit_number: "105".into(),
        city: "Putnam".into(),
        state: "ct".into(),
        zipcode: "06260".into(),
    }
}

fn address_form(contact: &Contact) -> ContactAddressForm {
    ContactAddressForm {
        contact: contact.id.to_string(),
        name: "home".into(),
        building_number: "9".into(),
        street_name: "Elm St".into(),
        city: "Hartford".into(),
        state: "Connecticut".into(),
        zipcode: "06103".into(),
        ..Default::default()
    }
}

fn email_form(contact: &Contact, address: &str) -> ContactEmailForm {
    ContactEmailForm {
        contact: contact.id.to_string(),
        email_address: address.into(),
        label: "personal".into(),
    }
}

fn phone_form(contact: &Contact, number: &str) -> ContactPhoneNumberForm {
    ContactPhoneNumberForm {
        contact: contact.id.to_string(),
        phone_number: number.into(),
        label: "home".into(),
    }
}

// ==========================================================================
// USER OPS TESTS
// ==========================================================================

#[test]
fn register_user_rejects_duplicate_username() {
    let (conn, _) = setup();
    let result = user_ops::register_user(&conn, "admin", None);
    assert!(matches!(result, Err(ContactsError::AlreadyExists { .. })));
}

#[test]
fn find_or_register_reuses_existing_user() {
    let (conn, user) = setup();
    let again = user_ops::find_or_register(&conn, "admin").unwrap();
    assert_eq!(again.id, user.id);

    let other = user_ops::find_or_register(&conn, "  editor ").unwrap();
    assert_eq!(other.username, "editor");
    assert_eq!(user_repo::find_all(&conn).unwrap().len(), 2);
}

// ==========================================================================
// CONTACT OPS TESTS
// ==========================================================================

#[test]
fn add_contact_title_cases_job_title() {
    let (conn, user) = setup();
    let contact = contact_ops::add_contact(&conn, user.id, &jack_form()).unwrap();

    assert_eq!(contact.full_name(), "Jack Hoff");
    assert_eq!(contact.name.job_title.as_deref(), Some("Generic Employee"));
    assert_eq!(contact.name.description, None);
    assert_eq!(contact.audit.created_by, Some(user.id));

    let stored = contact_repo::find_by_id(&conn, contact.id).unwrap().unwrap();
    assert_eq!(stored, contact);
}

#[test]
fn add_contact_trims_names() {
    let (conn, user) = setup();
    let form = ContactForm {
        first_name: "  Jack ".into(),
        last_name: " Hoff".into(),
        ..Default::default()
    };
    let contact = contact_ops::add_contact(&conn, user.id, &form).unwrap();
    assert_eq!(contact.full_name(), "Jack Hoff");
    assert_eq!(contact.name.job_title, None);
}

#[test]
fn add_contact_reports_every_bad_field() {
    let (conn, user) = setup();
    let form = ContactForm {
        first_name: "   ".into(),
        last_name: "".into(),
        job_title: "x".repeat(51),
        ..Default::default()
    };
    match contact_ops::add_contact(&conn, user.id, &form) {
        Err(ContactsError::Invalid(errors)) => {
            assert!(errors.has_error("first_name"));
            assert!(errors.has_error("last_name"));
            assert!(errors.has_error("job_title"));
        }
        other => panic!("expected form errors, got {:?}", other),
    }
    assert_eq!(contact_repo::count(&conn).unwrap(), 0);
}

#[test]
fn update_contact_restamps_update_only() {
    let (conn, user) = setup();
    let editor = user_ops::register_user(&conn, "editor", None).unwrap();
    let contact = contact_ops::add_contact(&conn, user.id, &jack_form()).unwrap();

    let mut form = jack_form();
    form.job_title = "senior generic employee".into();
    let updated = contact_ops::update_contact(&conn, editor.id, contact.id, &form).unwrap();

    assert_eq!(updated.name.job_title.as_deref(), Some("Senior Generic Employee"));
    assert_eq!(updated.audit.created_by, Some(user.id));
    assert_eq!(updated.audit.created_on, contact.audit.created_on);
    assert_eq!(updated.audit.updated_by, Some(editor.id));
    assert!(updated.audit.updated_on >= contact.audit.updated_on);
}

#[test]
fn update_missing_contact_is_not_found() {
    let (conn, user) = setup();
    let result = contact_ops::update_contact(&conn, user.id, Id::generate(), &jack_form());
    assert!(matches!(result, Err(ContactsError::NotFound { .. })));
}

#[test]
fn delete_contact_removes_children() {
    let (conn, user) = setup();
    let detail = contact_ops::add_contact_with_details(&conn, user.id, &details_form()).unwrap();

    contact_ops::delete_contact(&conn, detail.contact.id).unwrap();

    assert_eq!(contact_repo::count(&conn).unwrap(), 0);
    assert_eq!(address_repo::count(&conn).unwrap(), 0);
    assert_eq!(email_repo::count(&conn).unwrap(), 0);
    assert_eq!(phone_repo::count(&conn).unwrap(), 0);

    let again = contact_ops::delete_contact(&conn, detail.contact.id);
    assert!(matches!(again, Err(ContactsError::NotFound { .. })));
}

// ==========================================================================
// CONTACT WITH DETAILS TESTS
// ==========================================================================

#[test]
fn add_contact_with_details_creates_everything() {
    let (conn, user) = setup();
    let detail = contact_ops::add_contact_with_details(&conn, user.id, &details_form()).unwrap();

    assert_eq!(detail.contact.name.job_title.as_deref(), Some("Generic Employee"));
    assert_eq!(detail.emails[0].email_address, "jack.hoff@example.com");
    assert_eq!(detail.emails[0].label.as_deref(), Some("work"));
    assert_eq!(detail.phone_numbers[0].phone_number.as_e164(), "+12015550123");
    assert_eq!(detail.phone_numbers[0].label.as_deref(), Some("mobile"));

    let addr = &detail.addresses[0].address;
    assert_eq!(addr.name.as_deref(), Some("office"));
    assert_eq!(addr.street, "123 Main St");
    assert_eq!(addr.state, "CT");
    assert_eq!(
        addr.single_line_address(true),
        "office: 123 Main St, Suite 105, Putnam, CT 06260"
    );

    let stored = contacts::views::contact_detail(&conn, detail.contact.id).unwrap();
    assert_eq!(stored, detail);
}

#[test]
fn add_contact_with_details_rejects_used_email() {
    let (conn, user) = setup();
    contact_ops::add_contact_with_details(&conn, user.id, &details_form()).unwrap();

    let mut form = details_form();
    form.first_name = "Jill".into();
    form.email_address = "JACK.HOFF@example.com".into();
    let result = contact_ops::add_contact_with_details(&conn, user.id, &form);

    assert!(matches!(result, Err(ContactsError::AlreadyExists { .. })));
    assert_eq!(contact_repo::count(&conn).unwrap(), 1);
}

#[test]
fn add_contact_with_details_requires_labels() {
    let (conn, user) = setup();
    let mut form = details_form();
    form.email_label = " ".into();
    form.phone_label = "".into();
    form.address_label = "".into();

    match contact_ops::add_contact_with_details(&conn, user.id, &form) {
        Err(ContactsError::Invalid(errors)) => {
            assert!(errors.has_error("email_label"));
            assert!(errors.has_error("phone_label"));
            assert!(errors.has_error("address_label"));
        }
        other => panic!("expected form errors, got {:?}", other),
    }
    assert_eq!(contact_repo::count(&conn).unwrap(), 0);
}

#[test]
fn add_contact_with_details_keeps_nothing_on_storage_failure() {
    let (conn, user) = setup();
    // A trigger that only fires on phone inserts makes the last write fail.
    conn.execute_batch(
        "CREATE TRIGGER fail_phone BEFORE INSERT ON contact_phone_numbers
         BEGIN SELECT RAISE(ABORT, 'phone insert refused'); END;",
    )
    .unwrap();

    let result = contact_ops::add_contact_with_details(&conn, user.id, &details_form());
    assert!(result.is_err());

    assert_eq!(contact_repo::count(&conn).unwrap(), 0);
    assert_eq!(address_repo::count(&conn).unwrap(), 0);
    assert_eq!(email_repo::count(&conn).unwrap(), 0);
}

// ==========================================================================
// ADDRESS / EMAIL / PHONE OPS TESTS
// ==========================================================================

#[test]
fn add_address_normalizes_state_and_default_unit_type() {
    let (conn, user) = setup();
    let contact = contact_ops::add_contact(&conn, user.id, &jack_form()).unwrap();

    let entry = address_ops::add_address(&conn, user.id, &address_form(&contact)).unwrap();
    assert_eq!(entry.address.street, "9 Elm St");
    assert_eq!(entry.address.state, "CT");
    assert_eq!(entry.address.unit_type, DEFAULT_UNIT_TYPE);
    assert!(!entry.address.has_unit());
}

#[test]
fn add_address_rejects_bad_zip_and_state() {
    let (conn, user) = setup();
    let contact = contact_ops::add_contact(&conn, user.id, &jack_form()).unwrap();
    let mut form = address_form(&contact);
    form.zipcode = "6103".into();
    form.state = "Ontario".into();

    match address_ops::add_address(&conn, user.id, &form) {
        Err(ContactsError::Invalid(errors)) => {
            assert!(errors.has_error("zipcode"));
            assert!(errors.has_error("state"));
        }
        other => panic!("expected form errors, got {:?}", other),
    }
}

#[test]
fn add_address_for_unknown_contact_is_not_found() {
    let (conn, user) = setup();
    let ghost = Contact::create(PersonName::new("No".into(), "One".into()), user.id, chrono::Utc::now());
    let result = address_ops::add_address(&conn, user.id, &address_form(&ghost));
    assert!(matches!(result, Err(ContactsError::NotFound { .. })));
}

#[test]
fn update_address_keeps_owner() {
    let (conn, user) = setup();
    let jack = contact_ops::add_contact(&conn, user.id, &jack_form()).unwrap();
    let mut jill_form = jack_form();
    jill_form.first_name = "Jill".into();
    let jill = contact_ops::add_contact(&conn, user.id, &jill_form).unwrap();

    let entry = address_ops::add_address(&conn, user.id, &address_form(&jack)).unwrap();
    let mut form = address_form(&jill);
    form.unit_number = "2B".into();
    form.unit_type = "Apt".into();
    let updated = address_ops::update_address(&conn, user.id, entry.id, &form).unwrap();

    assert_eq!(updated.contact_id, jack.id);
    assert_eq!(updated.address.unit_line().as_deref(), Some("Apt 2B"));
}

#[test]
fn remove_address_twice_is_not_found() {
    let (conn, user) = setup();
    let contact = contact_ops::add_contact(&conn, user.id, &jack_form()).unwrap();
    let entry = address_ops::add_address(&conn, user.id, &address_form(&contact)).unwrap();

    address_ops::remove_address(&conn, entry.id).unwrap();
    assert!(matches!(
        address_ops::remove_address(&conn, entry.id),
        Err(ContactsError::NotFound { .. })
    ));
}

#[test]
fn add_email_is_globally_unique() {
    let (conn, user) = setup();
    let jack = contact_ops::add_contact(&conn, user.id, &jack_form()).unwrap();
    let mut jill_form = jack_form();
    jill_form.first_name = "Jill".into();
    let jill = contact_ops::add_contact(&conn, user.id, &jill_form).unwrap();

    let first = email_ops::add_email(&conn, user.id, &email_form(&jack, "A@B.com")).unwrap();
    assert_eq!(first.email_address, "a@b.com");

    let dup = email_ops::add_email(&conn, user.id, &email_form(&jill, "a@b.com"));
    assert!(matches!(dup, Err(ContactsError::AlreadyExists { .. })));
}

#[test]
fn update_email_may_keep_its_own_address() {
    let (conn, user) = setup();
    let jack = contact_ops::add_contact(&conn, user.id, &jack_form()).unwrap();
    let entry = email_ops::add_email(&conn, user.id, &email_form(&jack, "jack@example.com")).unwrap();

    let mut form = email_form(&jack, "JACK@example.com");
    form.label = "work".into();
    let updated = email_ops::update_email(&conn, user.id, entry.id, &form).unwrap();
    assert_eq!(updated.email_address, "jack@example.com");
    assert_eq!(updated.label.as_deref(), Some("work"));
}

#[test]
fn add_email_rejects_malformed_address() {
    let (conn, user) = setup();
    let jack = contact_ops::add_contact(&conn, user.id, &jack_form()).unwrap();
    let result = email_ops::add_email(&conn, user.id, &email_form(&jack, "not an email"));
    assert!(matches!(result, Err(ContactsError::Invalid(_))));
}

#[test]
fn phone_add_update_remove() {
    let (conn, user) = setup();
    let jack = contact_ops::add_contact(&conn, user.id, &jack_form()).unwrap();

    let entry = phone_ops::add_phone(&conn, user.id, &phone_form(&jack, "201.555.0123")).unwrap();
    assert_eq!(entry.phone_number.as_national(), "(201) 555-0123");

    let updated =
        phone_ops::update_phone(&conn, user.id, entry.id, &phone_form(&jack, "+44 20 7946 0958")).unwrap();
    assert_eq!(updated.phone_number.as_e164(), "+442079460958");

    phone_ops::remove_phone(&conn, entry.id).unwrap();
    assert!(phone_repo::find_by_contact(&conn, jack.id).unwrap().is_empty());
}

#[test]
fn add_phone_rejects_garbage() {
    let (conn, user) = setup();
    let jack = contact_ops::add_contact(&conn, user.id, &jack_form()).unwrap();
    match phone_ops::add_phone(&conn, user.id, &phone_form(&jack, "555")) {
        Err(ContactsError::Invalid(errors)) => assert!(errors.has_error("phone_number")),
        other => panic!("expected form errors, got {:?}", other),
    }
}

#[test]
fn updates_do_not_need_a_contact_reference() {
    let (conn, user) = setup();
    let jack = contact_ops::add_contact(&conn, user.id, &jack_form()).unwrap();
    let address = address_ops::add_address(&conn, user.id, &address_form(&jack)).unwrap();
    let email = email_ops::add_email(&conn, user.id, &email_form(&jack, "jack@example.com")).unwrap();
    let phone = phone_ops::add_phone(&conn, user.id, &phone_form(&jack, "201.555.0123")).unwrap();

    let mut new_address = address_form(&jack);
    new_address.contact = String::new();
    new_address.city = "New Haven".into();
    let updated = address_ops::update_address(&conn, user.id, address.id, &new_address).unwrap();
    assert_eq!(updated.address.city, "New Haven");
    assert_eq!(updated.contact_id, jack.id);

    let mut new_email = email_form(&jack, "hoff@example.com");
    new_email.contact = "not-an-id".into();
    let updated = email_ops::update_email(&conn, user.id, email.id, &new_email).unwrap();
    assert_eq!(updated.email_address, "hoff@example.com");
    assert_eq!(updated.contact_id, jack.id);

    let mut new_phone = phone_form(&jack, "860-555-0199");
    new_phone.contact = String::new();
    let updated = phone_ops::update_phone(&conn, user.id, phone.id, &new_phone).unwrap();
    assert_eq!(updated.phone_number.as_e164(), "+18605550199");
    assert_eq!(updated.contact_id, jack.id);
}

#[test]
fn update_still_rejects_bad_fields() {
    let (conn, user) = setup();
    let jack = contact_ops::add_contact(&conn, user.id, &jack_form()).unwrap();
    let email = email_ops::add_email(&conn, user.id, &email_form(&jack, "jack@example.com")).unwrap();

    let form = ContactEmailForm {
        email_address: "broken".into(),
        ..Default::default()
    };
    match email_ops::update_email(&conn, user.id, email.id, &form) {
        Err(ContactsError::Invalid(errors)) => {
            assert!(errors.has_error("email_address"));
            assert!(!errors.has_error("contact"));
        }
        other => panic!("expected form errors, got {:?}", other),
    }
}
