use crate::outcome::ErrorKind;
use crate::workflows::career::catalog::values::{
    Country, DegreeTitle, Description, Language, Name, TextPolicy, WorkerCount,
};

#[test]
fn name_rejects_absent_and_blank_input() {
    for raw in [None, Some(""), Some("   ")] {
        let errors = Name::create(raw).expect_err("blank name rejected");
        assert_eq!(errors.primary().kind, ErrorKind::Validation);
        assert_eq!(errors.primary().code, "Validation.Required");
    }
}

#[test]
fn name_rejects_oversized_input() {
    let oversized = "x".repeat(101);
    let errors = Name::create(Some(&oversized)).expect_err("101 characters rejected");
    assert_eq!(errors.primary().kind, ErrorKind::Validation);
    assert_eq!(errors.primary().code, "Validation.MaxLength");

    let at_limit = "x".repeat(100);
    assert!(Name::create(Some(&at_limit)).is_ok());
}

#[test]
fn name_accepts_and_trims_ordinary_input() {
    let name = Name::create(Some(" Acme ")).expect("valid name");
    assert_eq!(name.value(), "Acme");
}

#[test]
fn equal_names_compare_structurally() {
    let left = Name::create(Some("Acme")).expect("valid");
    let right = Name::create(Some("Acme")).expect("valid");
    assert_eq!(left, right);
}

#[test]
fn language_matches_allow_list_case_insensitively() {
    let language = Language::create(Some("english")).expect("recognized language");
    assert_eq!(language.value(), "English");

    let shouting = Language::create(Some("SPANISH")).expect("recognized language");
    assert_eq!(shouting.value(), "Spanish");
}

#[test]
fn language_rejects_unrecognized_entries() {
    let errors = Language::create(Some("Klingon")).expect_err("not on the allow-list");
    assert_eq!(errors.primary().kind, ErrorKind::Validation);
    assert_eq!(errors.primary().code, "Validation.InvalidInformation");
}

#[test]
fn degree_title_matches_allow_list_case_insensitively() {
    let title = DegreeTitle::create(Some("bachelor")).expect("recognized title");
    assert_eq!(title.value(), "Bachelor");

    let errors = DegreeTitle::create(Some("Alchemy")).expect_err("unknown title");
    assert_eq!(errors.primary().code, "Validation.InvalidInformation");
}

#[test]
fn worker_count_rejects_negative_values() {
    let errors = WorkerCount::create(Some(-5)).expect_err("negative count rejected");
    assert_eq!(errors.primary().kind, ErrorKind::Validation);
    assert_eq!(errors.primary().code, "Validation.InvalidNumber");
}

#[test]
fn worker_count_accepts_zero() {
    let count = WorkerCount::create(Some(0)).expect("zero is a valid count");
    assert_eq!(count.value(), 0);
}

#[test]
fn worker_count_requires_a_value() {
    let errors = WorkerCount::create(None).expect_err("absent count rejected");
    assert_eq!(errors.primary().code, "Validation.Required");
}

#[test]
fn description_honors_the_policy_bound() {
    let oversized = "d".repeat(501);
    let errors = Description::create(Some(&oversized)).expect_err("over default bound");
    assert_eq!(errors.primary().code, "Validation.MaxLength");

    let bounded = Description::create_bounded(Some(&oversized), 1000);
    assert!(bounded.is_ok());
}

#[test]
fn country_requires_non_empty_text() {
    let errors = Country::create(Some("  ")).expect_err("blank country rejected");
    assert_eq!(errors.primary().code, "Validation.Required");

    let country = Country::create(Some("Costa Rica")).expect("valid country");
    assert_eq!(country.value(), "Costa Rica");
}

#[test]
fn text_policy_sanitizes_zero_bounds() {
    let policy = TextPolicy::new(0, 0);
    assert_eq!(policy.description_max(), 500);
    assert_eq!(policy.country_max(), 100);
}

#[test]
#[should_panic(expected = "trusted value violates catalog invariants")]
fn trusted_path_aborts_on_invalid_input() {
    let _ = Name::from_trusted("");
}

#[test]
#[should_panic(expected = "trusted value violates catalog invariants")]
fn trusted_language_aborts_on_unrecognized_input() {
    let _ = Language::from_trusted("Klingon");
}

#[test]
fn trusted_path_applies_the_same_rule_as_create() {
    let trusted = Language::from_trusted("english");
    let created = Language::create(Some("English")).expect("valid");
    assert_eq!(trusted, created);
}
