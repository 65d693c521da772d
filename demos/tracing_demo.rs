//! Tracing example
//!
//! Shows the spans and events emitted while validating. Run with
//! `cargo run --example tracing_demo --features tracing`.

use fieldcheck::predicate::len_eq;
use fieldcheck::{
    constraint, key, optional_field, required_field, validate, FieldSpec, Validation,
};
use std::collections::HashMap;

type Row = HashMap<String, Option<String>>;

fn show(label: &str, row: &Row, specs: &[FieldSpec<Row, &'static str>]) {
    match validate(row, specs) {
        Ok(Validation::Success(())) => println!("{}: valid\n", label),
        Ok(Validation::Failure(report)) => println!("{}: invalid\n{}\n", label, report),
        Err(err) => {
            tracing::error!(%err, "validation aborted");
            println!("{}: specification error: {}\n", label, err);
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_target(false)
        .init();

    let specs: Vec<FieldSpec<Row, &str>> = vec![
        required_field(
            "code",
            key("code"),
            "missing_code",
            vec![constraint(len_eq(2), "code_length")],
        ),
        optional_field(
            "currency",
            key("currency"),
            vec![constraint(len_eq(3), "currency_length")],
        ),
    ];

    let mut row = Row::new();
    row.insert("code".to_string(), Some("NL".to_string()));
    row.insert("currency".to_string(), Some("EURO".to_string()));
    show("four-letter currency", &row, &specs);

    row.insert("currency".to_string(), Some("EUR".to_string()));
    show("three-letter currency", &row, &specs);

    // A row without the "currency" column is a specification error.
    row.remove("currency");
    show("no currency column", &row, &specs);
}
