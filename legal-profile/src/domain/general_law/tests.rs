//! Tests for the general-law sub-record.

use chrono::NaiveDate;
use rstest::rstest;

use super::*;

fn complete_attributes() -> GeneralLawAttributes {
    GeneralLawAttributes {
        date_of_birth: NaiveDate::from_ymd_opt(1985, 4, 12),
        marital_status: Some(MaritalStatus::Single),
        occupation: Some("programmer".to_owned()),
        domicile: Some("Managua".to_owned()),
    }
}

#[test]
fn complete_record_passes_validation() {
    let record = GeneralLaw::from_attributes(complete_attributes());
    let mut errors = ValidationErrors::new();
    record.validate_into(&mut errors, &MessageCatalog::new());
    assert!(errors.is_empty(), "unexpected errors: {errors}");
}

#[test]
fn empty_record_reports_every_missing_field() {
    let record = GeneralLaw::default();
    let mut errors = ValidationErrors::new();
    record.validate_into(&mut errors, &MessageCatalog::new());

    assert_eq!(errors.len(), 4);
    assert_eq!(errors.on(Field::DateOfBirth).len(), 1);
    assert_eq!(errors.on(Field::MaritalStatus).len(), 1);
    assert_eq!(errors.on(Field::Occupation).len(), 1);
    assert_eq!(errors.on(Field::Domicile).len(), 1);
}

#[test]
fn whitespace_only_strings_count_as_missing() {
    let mut record = GeneralLaw::from_attributes(complete_attributes());
    record.occupation = "   ".to_owned();

    let mut errors = ValidationErrors::new();
    record.validate_into(&mut errors, &MessageCatalog::new());
    assert_eq!(
        errors.on(Field::Occupation),
        vec!["Please enter your occupation"]
    );
}

#[test]
fn apply_attributes_merges_only_provided_fields() {
    let mut record = GeneralLaw::from_attributes(complete_attributes());
    record.apply_attributes(GeneralLawAttributes {
        domicile: Some("Nicaragua".to_owned()),
        ..GeneralLawAttributes::default()
    });

    assert_eq!(record.domicile, "Nicaragua");
    assert_eq!(record.occupation, "programmer");
    assert_eq!(record.marital_status, Some(MaritalStatus::Single));
}

#[rstest]
#[case("single", MaritalStatus::Single)]
#[case("married", MaritalStatus::Married)]
#[case("divorced", MaritalStatus::Divorced)]
#[case("widowed", MaritalStatus::Widowed)]
#[case("domestic_partnership", MaritalStatus::DomesticPartnership)]
fn marital_status_parses_form_values(#[case] raw: &str, #[case] expected: MaritalStatus) {
    assert_eq!(raw.parse::<MaritalStatus>(), Ok(expected));
    assert_eq!(expected.to_string(), raw);
}

#[test]
fn marital_status_rejects_unknown_values() {
    let err = "engaged"
        .parse::<MaritalStatus>()
        .expect_err("unknown status must fail");
    assert_eq!(err.to_string(), "unrecognised marital status 'engaged'");
}

#[test]
fn attributes_deserialize_from_form_json() {
    let attrs: GeneralLawAttributes = serde_json::from_str(
        r#"{
            "date_of_birth": "1985-04-12",
            "marital_status": "single",
            "occupation": "programmer",
            "domicile": "Nicaragua"
        }"#,
    )
    .expect("attributes deserialize");

    assert_eq!(attrs.marital_status, Some(MaritalStatus::Single));
    assert_eq!(attrs.domicile.as_deref(), Some("Nicaragua"));
}
