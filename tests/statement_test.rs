// ABOUTME: Construction-time validation tests for ParameterizedStatement
// ABOUTME: Covers placeholder arity, empty templates, and template immutability

use safequery::{ParameterizedStatement, QueryError, SqlParam};

const LOOKUP_TEMPLATE: &str = "SELECT id, email FROM users WHERE email = ?";

#[test]
fn matching_parameter_count_constructs() {
    let statement =
        ParameterizedStatement::new(LOOKUP_TEMPLATE, vec![SqlParam::from("alice@example.com")])
            .expect("one placeholder, one parameter");
    assert_eq!(statement.sql(), LOOKUP_TEMPLATE);
    assert_eq!(statement.parameters().len(), 1);
}

#[test]
fn mismatched_parameter_count_fails_for_all_counts() {
    for count in [0usize, 2, 3, 7] {
        let parameters = vec![SqlParam::from("x"); count];
        let err = ParameterizedStatement::new(LOOKUP_TEMPLATE, parameters)
            .expect_err("count != placeholder count must fail");
        assert!(
            matches!(err, QueryError::MalformedStatement { .. }),
            "expected MalformedStatement for count {count}, got {err:?}"
        );
    }
}

#[test]
fn empty_template_fails() {
    for sql in ["", "   ", "\n\t"] {
        let err = ParameterizedStatement::new(sql, vec![])
            .expect_err("empty template must fail at construction");
        assert!(matches!(err, QueryError::MalformedStatement { .. }));
    }
}

#[test]
fn placeholders_inside_literals_are_not_slots() {
    // the quoted '?' is data, so zero parameters is the correct arity
    ParameterizedStatement::new("SELECT * FROM users WHERE email = '?'", vec![])
        .expect("literal question mark is not a placeholder");

    let err = ParameterizedStatement::new(
        "SELECT * FROM users WHERE email = '?'",
        vec![SqlParam::from("x")],
    )
    .expect_err("no real placeholder to bind to");
    assert!(matches!(err, QueryError::MalformedStatement { .. }));
}

#[test]
fn placeholders_inside_comments_are_not_slots() {
    ParameterizedStatement::new(
        "SELECT id FROM users -- match on ?\nWHERE email = ?",
        vec![SqlParam::from("alice@example.com")],
    )
    .expect("commented question mark is not a placeholder");

    ParameterizedStatement::new(
        "SELECT /* ? */ id FROM users WHERE email = ?",
        vec![SqlParam::from("alice@example.com")],
    )
    .expect("block-commented question mark is not a placeholder");
}

#[test]
fn template_is_invariant_under_adversarial_parameters() {
    // whatever the value, the SQL text handed to the driver is byte-identical
    for input in [
        "alice@example.com",
        "' OR '1'='1",
        "x'; DROP TABLE users; --",
        "\" OR 1=1",
        "alice; --",
    ] {
        let statement =
            ParameterizedStatement::new(LOOKUP_TEMPLATE, vec![SqlParam::from(input)])
                .expect("construction never inspects parameter content");
        assert_eq!(statement.sql(), LOOKUP_TEMPLATE);
        assert_eq!(
            statement.parameters(),
            &[SqlParam::Text(input.to_owned())],
            "bound parameter must equal the input exactly"
        );
    }
}

#[test]
fn typed_parameters_convert_losslessly() {
    assert_eq!(SqlParam::from(42i64), SqlParam::Integer(42));
    assert_eq!(SqlParam::from(true), SqlParam::Boolean(true));
    assert_eq!(SqlParam::from(1.5f64), SqlParam::Real(1.5));
    assert_eq!(SqlParam::from(vec![1u8, 2]), SqlParam::Blob(vec![1, 2]));
    assert_eq!(SqlParam::from(Option::<&str>::None), SqlParam::Null);
    assert_eq!(
        SqlParam::from(Some("a@b.c")),
        SqlParam::Text("a@b.c".to_owned())
    );
}
