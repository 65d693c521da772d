//! End-to-end checks of record validation against typed, positional and keyed records

use std::collections::HashMap;
use std::sync::Arc;

use fieldcheck::prelude::*;
use fieldcheck::predicate::{len_eq, Predicate};
use fieldcheck::{assert_failure, assert_field_errors, assert_success, NonEmptyVec};

#[derive(Debug, Clone, PartialEq)]
enum Value {
    Str(String),
    Int(i64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Invalid {
    MissingName,
    MissingCode,
    NotString,
    WrongLength,
}

fn is_string(value: &Value) -> bool {
    matches!(value, Value::Str(_))
}

fn length_equals(len: usize) -> impl Fn(&Value) -> bool + Send + Sync {
    move |value: &Value| match value {
        Value::Str(s) => len_eq(len).check(s.as_str()),
        Value::Int(_) => false,
    }
}

type Row = HashMap<&'static str, Option<Value>>;

fn row(fields: &[(&'static str, Option<Value>)]) -> Row {
    fields.iter().cloned().collect()
}

fn str_value(s: &str) -> Option<Value> {
    Some(Value::Str(s.to_string()))
}

fn money_specs() -> Vec<FieldSpec<Row, Invalid>> {
    vec![
        required_field(
            "code",
            key("code"),
            Invalid::MissingCode,
            vec![
                constraint(is_string, Invalid::NotString),
                constraint(length_equals(2), Invalid::WrongLength),
            ],
        ),
        optional_field(
            "currency",
            key("currency"),
            vec![
                constraint(is_string, Invalid::NotString),
                constraint(length_equals(3), Invalid::WrongLength),
            ],
        ),
    ]
}

#[test]
fn required_absent_reports_missing_error() {
    let specs: Vec<FieldSpec<Row, Invalid>> =
        vec![required_field("name", key("name"), Invalid::MissingName, vec![])];
    let record = row(&[("name", None)]);

    let outcome = validate(&record, &specs).unwrap();
    assert_eq!(
        outcome,
        Validation::Failure(ValidationReport::new(NonEmptyVec::singleton(
            FieldErrors::new("name", NonEmptyVec::singleton(Invalid::MissingName))
        )))
    );
}

#[test]
fn wrong_currency_length_is_the_only_bucket() {
    let record = row(&[("code", str_value("NL")), ("currency", str_value("EURO"))]);

    let report = validate(&record, &money_specs())
        .unwrap()
        .into_failure()
        .unwrap();
    assert_eq!(report.len(), 1);
    assert_field_errors!(
        Validation::<(), _>::failure(report),
        "currency",
        [Invalid::WrongLength]
    );
}

#[test]
fn valid_code_and_currency_succeed() {
    let record = row(&[("code", str_value("NL")), ("currency", str_value("EUR"))]);
    assert_success!(validate(&record, &money_specs()).unwrap());
}

#[test]
fn optional_absent_skips_constraints() {
    let record = row(&[("code", str_value("NL")), ("currency", None)]);
    assert_success!(validate(&record, &money_specs()).unwrap());
}

#[test]
fn non_string_value_breaks_both_constraints() {
    let record = row(&[("code", Some(Value::Int(31))), ("currency", None)]);
    assert_field_errors!(
        validate(&record, &money_specs()).unwrap(),
        "code",
        [Invalid::NotString, Invalid::WrongLength]
    );
}

#[test]
fn missing_key_is_a_spec_error_not_a_bucket() {
    let record = row(&[("code", str_value("NL"))]);

    let err = validate(&record, &money_specs()).unwrap_err();
    assert_eq!(err.field(), "\"currency\"");
    assert_eq!(
        err.access_error(),
        &AccessError::MissingKey {
            key: "currency".to_string()
        }
    );
}

#[test]
fn positional_record() {
    let specs: Vec<FieldSpec<Vec<Option<Value>>, Invalid>> = vec![
        required_field(
            "code",
            Index(0),
            Invalid::MissingCode,
            vec![constraint(length_equals(2), Invalid::WrongLength)],
        ),
        optional_field(
            "currency",
            Index(1),
            vec![constraint(length_equals(3), Invalid::WrongLength)],
        ),
    ];

    assert_success!(validate(&vec![str_value("NL"), str_value("EUR")], &specs).unwrap());
    assert_field_errors!(
        validate(&vec![None, str_value("EURO")], &specs).unwrap(),
        "code",
        [Invalid::MissingCode]
    );
    assert!(validate(&vec![str_value("NL")], &specs).is_err());
}

#[test]
fn repeated_validation_is_identical() {
    let specs = money_specs();
    let record = row(&[("code", str_value("N")), ("currency", str_value("EURO"))]);

    let first = validate(&record, &specs);
    let second = validate(&record, &specs);
    assert_eq!(first, second);
    assert_failure!(first.unwrap());
}

#[test]
fn declaration_and_reversed_orders() {
    let specs = money_specs();
    let record = row(&[("code", Some(Value::Int(1))), ("currency", str_value("EURO"))]);

    let declared = validate(&record, &specs).unwrap().into_failure().unwrap();
    assert_eq!(declared.names().copied().collect::<Vec<_>>(), ["code", "currency"]);
    assert_eq!(
        declared.get(&"code").unwrap().clone().into_vec(),
        vec![Invalid::NotString, Invalid::WrongLength]
    );

    let reversed = validate_with_order(&record, &specs, ReportOrder::Reversed)
        .unwrap()
        .into_failure()
        .unwrap();
    assert_eq!(reversed.names().copied().collect::<Vec<_>>(), ["currency", "code"]);
    assert_eq!(
        reversed.get(&"code").unwrap().clone().into_vec(),
        vec![Invalid::WrongLength, Invalid::NotString]
    );
}

#[test]
fn two_specifications_combine_through_and() {
    let presence: Specification<Row, Invalid> = Specification::new(vec![required_field(
        "code",
        key("code"),
        Invalid::MissingCode,
        vec![],
    )]);
    let shape: Specification<Row, Invalid> = Specification::new(money_specs());
    let record = row(&[("code", None), ("currency", str_value("EURO"))]);

    let combined = presence
        .validate(&record)
        .unwrap()
        .and(shape.validate(&record).unwrap());
    let report = combined.into_failure().unwrap();

    // "code" is reported by both specifications but lands in one bucket.
    assert_eq!(report.len(), 2);
    assert_eq!(
        report.get(&"code").unwrap().clone().into_vec(),
        vec![Invalid::MissingCode, Invalid::MissingCode]
    );
}

#[test]
fn several_specifications_fold_through_all() {
    let code: Specification<Row, Invalid> = Specification::new(vec![required_field(
        "code",
        key("code"),
        Invalid::MissingCode,
        vec![constraint(length_equals(2), Invalid::WrongLength)],
    )]);
    let currency: Specification<Row, Invalid> = Specification::new(vec![optional_field(
        "currency",
        key("currency"),
        vec![constraint(length_equals(3), Invalid::WrongLength)],
    )]);
    let typed: Specification<Row, Invalid> = Specification::new(money_specs());
    let specs = [code, currency, typed];

    let record = row(&[("code", Some(Value::Int(7))), ("currency", str_value("EURO"))]);
    let outcomes = specs
        .iter()
        .map(|spec| spec.validate(&record))
        .collect::<Result<Vec<_>, _>>()
        .unwrap();
    let report = Validation::all(outcomes).into_failure().unwrap();

    assert_eq!(report.names().copied().collect::<Vec<_>>(), ["code", "currency"]);
    assert_eq!(
        report.get(&"code").unwrap().clone().into_vec(),
        vec![Invalid::WrongLength, Invalid::NotString, Invalid::WrongLength]
    );
    assert_eq!(
        report.get(&"currency").unwrap().clone().into_vec(),
        vec![Invalid::WrongLength, Invalid::WrongLength]
    );

    let valid = row(&[("code", str_value("NL")), ("currency", None)]);
    let outcomes = specs
        .iter()
        .map(|spec| spec.validate(&valid).unwrap())
        .collect::<Vec<_>>();
    assert_eq!(Validation::all(outcomes), Validation::Success(vec![(), (), ()]));
}

#[test]
fn one_specification_shared_across_threads() {
    let spec: Arc<Specification<Row, Invalid>> = Arc::new(Specification::new(money_specs()));
    let records = vec![
        row(&[("code", str_value("NL")), ("currency", str_value("EUR"))]),
        row(&[("code", str_value("NLD")), ("currency", None)]),
        row(&[("code", None), ("currency", str_value("US"))]),
    ];

    let results: Vec<bool> = std::thread::scope(|scope| {
        let handles: Vec<_> = records
            .iter()
            .map(|record| {
                let spec = Arc::clone(&spec);
                scope.spawn(move || spec.is_valid(record).unwrap())
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(results, vec![true, false, false]);
}
