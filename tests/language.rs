use pitchlang::{
    ast::{BinaryOperator, Expr},
    error::{EncodeError, LexError, ParseError, RuntimeError},
    interpreter::{
        encoder::encode,
        env::Env,
        lexer::{Lexer, Token},
        parser::core::Parser,
        value::Value,
    },
    notation::{Pitch, PitchClass},
    run_pitches, run_source,
};

fn eval_source(source: &str) -> Result<Value, Box<dyn std::error::Error>> {
    run_source(source, &Env::new())
}

fn assert_number(source: &str, expected: i64) {
    match eval_source(source) {
        Ok(Value::Number(n)) => assert_eq!(n, expected, "wrong result for: {source}"),
        other => panic!("'{source}' did not evaluate to a number: {other:?}"),
    }
}

fn assert_boolean(source: &str, expected: bool) {
    match eval_source(source) {
        Ok(Value::Boolean(b)) => assert_eq!(b, expected, "wrong result for: {source}"),
        other => panic!("'{source}' did not evaluate to a boolean: {other:?}"),
    }
}

fn runtime_error(source: &str) -> RuntimeError {
    let err = eval_source(source).expect_err("expected evaluation to fail");
    *err.downcast::<RuntimeError>()
        .unwrap_or_else(|e| panic!("'{source}' failed, but not at runtime: {e}"))
}

fn tokens_of(source: &str) -> Vec<Token> {
    let codes = encode(source).expect("encoding failed");
    Lexer::new(&codes).tokens().expect("lexing the encoder's output failed")
}

fn pitches_of(names: &[&str]) -> Vec<Pitch> {
    names.iter()
         .map(|name| name.parse().expect("bad pitch name in test"))
         .collect()
}

#[test]
fn round_trip_reproduces_token_streams() {
    assert_eq!(tokens_of("2 + 3 * 4"),
               vec![Token::NumberLit(2),
                    Token::Plus,
                    Token::NumberLit(3),
                    Token::Mul,
                    Token::NumberLit(4)]);

    assert_eq!(tokens_of("\\AB => AB == 105"),
               vec![Token::Backslash,
                    Token::Ident("AB".to_string()),
                    Token::Arrow,
                    Token::Ident("AB".to_string()),
                    Token::DoubleEquals,
                    Token::NumberLit(105)]);

    assert_eq!(tokens_of("let GA = true in if GA then ( 1 ) else 2"),
               vec![Token::Let,
                    Token::Ident("GA".to_string()),
                    Token::Equals,
                    Token::BooleanLit(true),
                    Token::In,
                    Token::If,
                    Token::Ident("GA".to_string()),
                    Token::Then,
                    Token::LParen,
                    Token::NumberLit(1),
                    Token::RParen,
                    Token::Else,
                    Token::NumberLit(2)]);

    assert_eq!(tokens_of(": E = false ; loop 3 E { ! E }"),
               vec![Token::Colon,
                    Token::Ident("E".to_string()),
                    Token::Equals,
                    Token::BooleanLit(false),
                    Token::Semicolon,
                    Token::Loop,
                    Token::NumberLit(3),
                    Token::Ident("E".to_string()),
                    Token::LCurly,
                    Token::Not,
                    Token::Ident("E".to_string()),
                    Token::RCurly]);
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    let codes = encode("2 + 3 * 4").unwrap();
    let expr = Parser::new(Lexer::new(&codes)).parse_expr().unwrap();

    let product = Expr::Binary { op: BinaryOperator::Multiply,
                                 x:  Box::new(Expr::Number { n: 3 }),
                                 y:  Box::new(Expr::Number { n: 4 }), };
    assert_eq!(expr,
               Expr::Binary { op: BinaryOperator::Plus,
                              x:  Box::new(Expr::Number { n: 2 }),
                              y:  Box::new(product), });

    assert_number("2 + 3 * 4", 14);
    assert_number("( 2 + 3 ) * 4", 20);
}

#[test]
fn same_tier_operators_fold_to_the_left() {
    assert_number("10 - 3 - 4", 3);
    assert_number("2 * 3 * 4", 24);
}

#[test]
fn conditionals_and_comparisons() {
    assert_number("if 10 > 5 then 1 else 2", 1);
    assert_number("if 2 < 1 then 1 else 2", 2);
    assert_boolean("3 > 2", true);
    assert_boolean("3 < 2", false);
}

#[test]
fn equality_compares_like_typed_payloads() {
    assert_boolean("2 == 2", true);
    assert_boolean("2 == 3", false);
    assert_boolean("true == true", true);
    assert_boolean("true == false", false);

    // A number never equals a boolean; the comparison is an error, not false.
    assert!(matches!(runtime_error("2 == true"), RuntimeError::TypeMismatch { .. }));
}

#[test]
fn sequential_binds_feed_the_loop() {
    // 5 + 19, then twice more 19 on top of the rebound accumulator.
    assert_number(": AB = 5 ; : BA = 19 ; : DA = 4 ; : E = true ; \
                   loop 3 AB { if E then AB + BA else AB + DA }",
                  62);
}

#[test]
fn loop_counts_below_three_still_evaluate_twice() {
    let env = Env::new().put("AB", Value::Number(0));

    let mut results = Vec::new();
    for count in ["0", "1", "2", "3", "4"] {
        let codes = encode(&format!("loop {count} AB {{ AB + 1 }}")).unwrap();
        results.push(run_pitches(&codes, &env).unwrap());
    }

    // Two evaluations for every requested count below three, then one per
    // count: the floor is part of the construct's contract.
    assert_eq!(results,
               vec![Value::Number(2),
                    Value::Number(2),
                    Value::Number(2),
                    Value::Number(3),
                    Value::Number(4)]);
}

#[test]
fn loop_accumulator_is_unbound_on_the_first_pass() {
    assert!(matches!(runtime_error("loop 3 AB { AB + 1 }"),
                     RuntimeError::UndefinedVariable { name } if name == "AB"));
}

#[test]
fn application_and_currying() {
    assert_number("( \\A => A + 1 ) 10", 11);

    // Two parameters means two nested lambdas; each application binds one.
    assert_number("( \\A => \\B => A + B ) 2 3", 5);
}

#[test]
fn closures_capture_lexically() {
    // F sees the AB it closed over, not the caller's shadowing binding.
    assert_number("let AB = 1 in let F = \\B => AB + B in let AB = 100 in F 1",
                  2);
}

#[test]
fn negation() {
    assert_boolean("! true", false);
    assert_boolean("! false", true);
    assert_boolean("! ( 1 > 2 )", true);
}

#[test]
fn evaluation_errors() {
    assert!(matches!(runtime_error("AB"),
                     RuntimeError::UndefinedVariable { name } if name == "AB"));
    assert!(matches!(runtime_error("2 3"), RuntimeError::NotAFunction { .. }));
    assert!(matches!(runtime_error("if 1 then 2 else 3"),
                     RuntimeError::TypeMismatch { .. }));
    assert!(matches!(runtime_error("true + 1"), RuntimeError::TypeMismatch { .. }));
    assert!(matches!(runtime_error("999999 * 999999 * 999999 * 999999"),
                     RuntimeError::Overflow { .. }));
}

#[test]
fn zero_digits_are_invisible_in_number_runs() {
    let spelled: Vec<String> = encode("105").unwrap().iter().map(ToString::to_string).collect();

    // One hundreds-weight code, five ones-weight codes, nothing for the
    // empty tens position.
    assert_eq!(spelled, ["C4", "G4", "B4", "B4", "B4", "B4", "B4", "C4"]);
    assert_number("105", 105);
    assert_number("0", 0);
}

#[test]
fn encoding_rejects_what_the_alphabet_cannot_spell() {
    assert!(matches!(encode("1000000"), Err(EncodeError::NumberTooLarge { .. })));
    assert!(matches!(encode("CAB"), Err(EncodeError::UnencodableIdentifier { .. })));
    assert!(matches!(encode("x + 1"), Err(EncodeError::UnknownToken { .. })));
}

#[test]
fn equals_codes_resolve_by_lookahead() {
    let eq = Pitch::new(PitchClass::A, 1);
    let tail = Pitch::new(PitchClass::B, 1);

    let doubled = [eq, eq];
    let mut lexer = Lexer::new(&doubled);
    assert_eq!(lexer.next().unwrap(), Token::DoubleEquals);
    assert_eq!(lexer.next().unwrap(), Token::Eof);

    let arrow = [eq, tail];
    let mut lexer = Lexer::new(&arrow);
    assert_eq!(lexer.next().unwrap(), Token::Arrow);

    let plain = [eq];
    let mut lexer = Lexer::new(&plain);
    assert_eq!(lexer.peek().unwrap(), Token::Equals);
    assert_eq!(lexer.next().unwrap(), Token::Equals);

    // peek reports the arrow tail, but it cannot start a token on its own.
    let bare_tail = [tail];
    let mut lexer = Lexer::new(&bare_tail);
    assert_eq!(lexer.peek().unwrap(), Token::Arrow);
    assert!(matches!(lexer.next(), Err(LexError::UnknownCode { .. })));
}

#[test]
fn end_of_input_is_idempotent() {
    let mut lexer = Lexer::new(&[]);
    assert_eq!(lexer.peek().unwrap(), Token::Eof);
    assert_eq!(lexer.next().unwrap(), Token::Eof);
    assert_eq!(lexer.next().unwrap(), Token::Eof);
}

#[test]
fn sharps_and_unterminated_runs_fail_to_lex() {
    let sharp = [Pitch::new(PitchClass::CSharp, 4)];
    assert!(matches!(Lexer::new(&sharp).next(),
                     Err(LexError::UnknownCode { position: 0, .. })));

    // A number run that never reaches its closing sentinel.
    let codes = pitches_of(&["C4", "B4", "B4"]);
    assert!(matches!(Lexer::new(&codes).next(),
                     Err(LexError::UnterminatedLiteral { position: 0 })));
}

#[test]
fn parse_errors_name_the_offending_token() {
    // The condition swallows `1 2` as an application, so `then` is missing.
    let codes = encode("if 1 2").unwrap();
    let err = Parser::new(Lexer::new(&codes)).parse_expr().unwrap_err();
    assert!(matches!(err, ParseError::ExpectedToken { .. }));

    let codes = encode(") 1").unwrap();
    let err = Parser::new(Lexer::new(&codes)).parse_expr().unwrap_err();
    assert!(matches!(err, ParseError::UnexpectedToken { .. }));

    let err = Parser::new(Lexer::new(&[])).parse_expr().unwrap_err();
    assert!(matches!(err, ParseError::UnexpectedToken { .. }));
}

#[test]
fn pitch_names_are_programs() {
    // "1 + 2", spelled note by note.
    let codes = pitches_of(&["C4", "B4", "C4", "E1", "C4", "B4", "B4", "C4"]);
    assert_eq!(run_pitches(&codes, &Env::new()).unwrap(), Value::Number(3));
}

#[test]
fn codes_after_the_expression_are_ignored() {
    let mut codes = encode("1 + 2").unwrap();
    codes.extend(encode("then 5").unwrap());

    assert_eq!(run_pitches(&codes, &Env::new()).unwrap(), Value::Number(3));
}

#[test]
fn prelude_values_are_ordinary_bindings() {
    // The driver evaluates a prelude, seeds it under a name, and the main
    // program sees nothing but an ordinary variable.
    let prelude = eval_source("\\A => A * A").unwrap();
    let env = Env::new().put("G", prelude);

    let codes = encode("G 9").unwrap();
    assert_eq!(run_pitches(&codes, &env).unwrap(), Value::Number(81));
}
