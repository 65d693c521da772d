//! Order form example
//!
//! Checks a web-shop order against one specification and prints every broken rule,
//! grouped by field. Run with `cargo run --example order_form`.

use std::fmt;
use std::sync::LazyLock;

use fieldcheck::predicate::{all_chars, between, len_between, len_eq, PredicateExt};
use fieldcheck::{
    constraint, getter, optional_field, required_field, ReportOrder, Specification, Validation,
};

#[derive(Debug, Default)]
struct OrderForm {
    sku: Option<String>,
    quantity: Option<u32>,
    country: Option<String>,
    coupon: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OrderError {
    MissingSku,
    SkuFormat,
    MissingQuantity,
    QuantityRange,
    MissingCountry,
    CountryCode,
    CouponLength,
    CouponCharset,
}

impl fmt::Display for OrderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            OrderError::MissingSku => "sku is required",
            OrderError::SkuFormat => "sku must be 4 to 12 alphanumeric characters",
            OrderError::MissingQuantity => "quantity is required",
            OrderError::QuantityRange => "quantity must be between 1 and 99",
            OrderError::MissingCountry => "country is required",
            OrderError::CountryCode => "country must be a two-letter ISO code",
            OrderError::CouponLength => "coupon must be 8 characters",
            OrderError::CouponCharset => "coupon must be upper case letters and digits",
        };
        f.write_str(text)
    }
}

static ORDER_SPEC: LazyLock<Specification<OrderForm, OrderError>> = LazyLock::new(|| {
    Specification::new(vec![
        required_field(
            "sku",
            getter(|o: &OrderForm| o.sku.as_deref()),
            OrderError::MissingSku,
            vec![constraint(
                PredicateExt::<str>::and(
                    len_between(4, 12),
                    all_chars(|c| c.is_ascii_alphanumeric()),
                ),
                OrderError::SkuFormat,
            )],
        ),
        required_field(
            "quantity",
            getter(|o: &OrderForm| o.quantity.as_ref()),
            OrderError::MissingQuantity,
            vec![constraint(between(1u32, 99), OrderError::QuantityRange)],
        ),
        required_field(
            "country",
            getter(|o: &OrderForm| o.country.as_deref()),
            OrderError::MissingCountry,
            vec![constraint(
                PredicateExt::<str>::and(len_eq(2), all_chars(|c| c.is_ascii_uppercase())),
                OrderError::CountryCode,
            )],
        ),
        optional_field(
            "coupon",
            getter(|o: &OrderForm| o.coupon.as_deref()),
            vec![
                constraint(len_eq(8), OrderError::CouponLength),
                constraint(
                    all_chars(|c| c.is_ascii_uppercase() || c.is_ascii_digit()),
                    OrderError::CouponCharset,
                ),
            ],
        ),
    ])
});

fn check(label: &str, spec: &Specification<OrderForm, OrderError>, form: &OrderForm) {
    match spec.validate(form) {
        Ok(Validation::Success(())) => println!("{}: accepted", label),
        Ok(Validation::Failure(report)) => {
            println!("{}: rejected ({} fields)", label, report.len());
            for line in report.to_string().lines() {
                println!("  {}", line);
            }
        }
        Err(err) => println!("{}: specification error: {}", label, err),
    }
}

fn main() {
    println!("=== Order Form Validation ===\n");

    let good = OrderForm {
        sku: Some("KB2024".to_string()),
        quantity: Some(2),
        country: Some("NL".to_string()),
        coupon: None,
    };
    check("complete order", &ORDER_SPEC, &good);

    let bad = OrderForm {
        sku: Some("kb-2024".to_string()),
        quantity: Some(0),
        country: None,
        coupon: Some("spring".to_string()),
    };
    check("broken order", &ORDER_SPEC, &bad);

    println!("\n--- Same order, reversed report ---");
    let reversed = ORDER_SPEC.clone().with_order(ReportOrder::Reversed);
    check("broken order", &reversed, &bad);

    println!("\n--- Empty form ---");
    check("empty order", &ORDER_SPEC, &OrderForm::default());
}
