use super::*;

fn customer(name: &str, email: &str, fav: &str, active: bool) -> Customer {
    Customer::new(name, email, fav, active)
}

#[test]
fn decodes_integer_fav_number_from_service() {
    let customer: Customer =
        serde_json::from_str(r#"{"name":"Ann","email":"ann@x.com","fav_number":42}"#)
            .expect("decode");
    assert_eq!(customer.fav_number, "42");
    assert!(customer.active, "missing active flag defaults to true");
}

#[test]
fn keeps_integers_beyond_i64_exact() {
    let customer: Customer = serde_json::from_str(
        r#"{"name":"Ann","email":"ann@x.com","fav_number":18446744073709551615}"#,
    )
    .expect("decode");
    assert_eq!(customer.fav_number, "18446744073709551615");

    let negative: Customer =
        serde_json::from_str(r#"{"name":"Ann","email":"ann@x.com","fav_number":-12}"#)
            .expect("decode");
    assert_eq!(negative.fav_number, "-12");
}

#[test]
fn decodes_text_fav_number_and_explicit_active() {
    let customer: Customer = serde_json::from_str(
        r#"{"name":"Bob","email":"bob@x.com","fav_number":"7","active":false}"#,
    )
    .expect("decode");
    assert_eq!(customer, self::customer("Bob", "bob@x.com", "7", false));
}

#[test]
fn default_draft_is_empty_and_active() {
    let draft = CustomerDraft::default();
    assert!(draft.name.is_empty());
    assert!(draft.email.is_empty());
    assert!(draft.fav_number.is_empty());
    assert!(draft.active);
}

#[test]
fn draft_copies_customer_fields() {
    let source = customer("Ann", "ann@x.com", "3", false);
    let draft = CustomerDraft::from(&source);
    assert_eq!(draft.name, "Ann");
    assert_eq!(draft.email, "ann@x.com");
    assert_eq!(draft.fav_number, "3");
    assert!(!draft.active);
}

#[test]
fn draft_edit_sets_single_field() {
    let mut draft = CustomerDraft::default();
    draft.set(DraftEdit::FavNumber("9".into()));
    draft.set(DraftEdit::Active(false));
    assert_eq!(draft.fav_number, "9");
    assert!(!draft.active);
    assert!(draft.name.is_empty());
}

#[test]
fn same_field_click_is_two_state() {
    let first = SortSpec::ascending(SortField::Email).clicked(SortField::Name);
    assert_eq!(first, SortSpec::ascending(SortField::Name));
    let second = first.clicked(SortField::Name);
    assert_eq!(second, SortSpec::descending(SortField::Name));
    let third = second.clicked(SortField::Name);
    assert_eq!(third, SortSpec::descending(SortField::Name));
    assert_eq!(third.clicked(SortField::Active), SortSpec::ascending(SortField::Active));
}

#[test]
fn booleans_sort_false_first_when_ascending() {
    let off = customer("A", "a@x.com", "1", false);
    let on = customer("B", "b@x.com", "2", true);
    let spec = SortSpec::ascending(SortField::Active);
    assert_eq!(spec.compare(&off, &on), Ordering::Less);
    assert_eq!(SortSpec::descending(SortField::Active).compare(&off, &on), Ordering::Greater);
}

#[test]
fn fav_number_compares_as_text() {
    let ten = customer("A", "a@x.com", "10", true);
    let nine = customer("B", "b@x.com", "9", true);
    assert_eq!(SortField::FavNumber.compare(&ten, &nine), Ordering::Less);
}

#[test]
fn parses_sort_fields_leniently() {
    assert_eq!("fav-number".parse::<SortField>(), Ok(SortField::FavNumber));
    assert_eq!(" Email ".parse::<SortField>(), Ok(SortField::Email));
    assert!("age".parse::<SortField>().is_err());
}
