use super::*;
use shared::domain::{SortDirection, SortField};

fn roster() -> Vec<Customer> {
    vec![
        Customer::new("Cara", "cara@corp.io", "12", false),
        Customer::new("ann", "Ann.Lee@x.com", "7", true),
        Customer::new("Bob", "bob@x.com", "70", true),
        Customer::new("Dee", "dee@corp.io", "3", false),
    ]
}

fn names(customers: &[Customer]) -> Vec<&str> {
    customers.iter().map(|c| c.name.as_str()).collect()
}

#[test]
fn search_matches_each_field_case_insensitively() {
    let customers = roster();
    assert!(matches_search(&customers[0], "CARA"));
    assert!(matches_search(&customers[1], "ann.lee"));
    assert!(matches_search(&customers[2], "70"));
    assert!(!matches_search(&customers[3], "bob"));
}

#[test]
fn filtered_list_is_exact_subset_in_authoritative_order() {
    let customers = roster();
    for term in ["", "x.com", "CORP", "7", "zzz", "a"] {
        let expected: Vec<Customer> = customers
            .iter()
            .filter(|c| {
                let t = term.to_lowercase();
                c.name.to_lowercase().contains(&t)
                    || c.email.to_lowercase().contains(&t)
                    || c.fav_number.to_lowercase().contains(&t)
            })
            .cloned()
            .collect();
        assert_eq!(filter_customers(&customers, term), expected, "term {term:?}");
    }
}

#[test]
fn unfiltered_derivation_keeps_authoritative_order() {
    let customers = roster();
    assert_eq!(ViewDerivation::unfiltered().derive(&customers), customers);
}

#[test]
fn strings_sort_lexicographically() {
    let mut customers = roster();
    sort_customers(&mut customers, SortSpec::ascending(SortField::Name));
    // Uppercase sorts before lowercase by code point.
    assert_eq!(names(&customers), vec!["Bob", "Cara", "Dee", "ann"]);

    sort_customers(&mut customers, SortSpec::ascending(SortField::FavNumber));
    assert_eq!(names(&customers), vec!["Cara", "Dee", "ann", "Bob"]);
}

#[test]
fn boolean_sort_is_stable_with_false_first() {
    let mut customers = roster();
    sort_customers(&mut customers, SortSpec::ascending(SortField::Active));
    assert_eq!(names(&customers), vec!["Cara", "Dee", "ann", "Bob"]);

    let mut customers = roster();
    sort_customers(
        &mut customers,
        SortSpec {
            field: SortField::Active,
            direction: SortDirection::Descending,
        },
    );
    assert_eq!(names(&customers), vec!["ann", "Bob", "Cara", "Dee"]);
}

#[test]
fn sort_chain_matches_sequential_sorting() {
    let customers = roster();
    let derivation = ViewDerivation::filtered("o")
        .then_sorted(SortSpec::descending(SortField::Name))
        .then_sorted(SortSpec::ascending(SortField::Active));

    let mut expected = filter_customers(&customers, "o");
    sort_customers(&mut expected, SortSpec::descending(SortField::Name));
    sort_customers(&mut expected, SortSpec::ascending(SortField::Active));

    assert_eq!(derivation.derive(&customers), expected);
    assert_eq!(derivation.filter(), Some("o"));
}

#[test]
fn resorting_a_field_replaces_its_earlier_pass() {
    let customers = roster();
    let derivation = ViewDerivation::unfiltered()
        .then_sorted(SortSpec::ascending(SortField::Name))
        .then_sorted(SortSpec::ascending(SortField::Active))
        .then_sorted(SortSpec::descending(SortField::Name));
    assert_eq!(
        derivation.sorts(),
        &[
            SortSpec::ascending(SortField::Active),
            SortSpec::descending(SortField::Name)
        ]
    );

    let mut expected = customers.clone();
    sort_customers(&mut expected, SortSpec::ascending(SortField::Name));
    sort_customers(&mut expected, SortSpec::ascending(SortField::Active));
    sort_customers(&mut expected, SortSpec::descending(SortField::Name));
    assert_eq!(derivation.derive(&customers), expected);
}
