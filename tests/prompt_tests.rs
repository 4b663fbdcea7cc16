use bikeshare::errors::AppError;
use bikeshare::ui::prompt::{Answer, Console, RETRY_TEXT, Validation, validate};
use std::io::Cursor;

const CITIES: [&str; 3] = ["chicago", "new york city", "washington"];

fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
    Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

fn output(c: Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
    String::from_utf8(c.into_output()).expect("utf8 output")
}

#[test]
fn test_single_value_is_normalized() {
    assert_eq!(
        validate("  ChIcAgO \n", &CITIES),
        Validation::Accepted(Answer::Single("chicago".into()))
    );
    assert_eq!(
        validate("New York City", &CITIES),
        Validation::Accepted(Answer::Single("new york city".into()))
    );
}

#[test]
fn test_every_domain_value_is_accepted_as_is() {
    for city in CITIES {
        assert_eq!(
            validate(city, &CITIES),
            Validation::Accepted(Answer::Single(city.to_string()))
        );
    }
}

#[test]
fn test_comma_list_accepted_only_when_all_tokens_valid() {
    assert_eq!(
        validate("chicago, Washington", &CITIES),
        Validation::Accepted(Answer::Many(vec!["chicago".into(), "washington".into()]))
    );
    assert_eq!(validate("chicago, paris", &CITIES), Validation::Rejected);
    assert_eq!(validate("chicago,", &CITIES), Validation::Rejected);
}

#[test]
fn test_unknown_value_rejected() {
    assert_eq!(validate("paris", &CITIES), Validation::Rejected);
    assert_eq!(validate("", &CITIES), Validation::Rejected);
}

#[test]
fn test_empty_answer_allowed_when_in_domain() {
    let allowed = ["", "1", "2"];
    assert_eq!(
        validate("   ", &allowed),
        Validation::Accepted(Answer::Single(String::new()))
    );
}

#[test]
fn test_sentinel_in_any_case() {
    assert_eq!(validate("end", &CITIES), Validation::Sentinel);
    assert_eq!(validate("  END ", &CITIES), Validation::Sentinel);
    assert_eq!(validate("End", &["1", "2"]), Validation::Sentinel);
}

#[test]
fn test_ask_reprompts_until_valid() {
    let mut c = console("paris\nchicago, rome\nwashington\n");
    let answer = c.ask(">", &CITIES).expect("answer");
    assert_eq!(answer, Answer::Single("washington".into()));

    let out = output(c);
    assert_eq!(out.matches(RETRY_TEXT).count(), 2);
}

#[test]
fn test_ask_returns_list() {
    let mut c = console("washington,chicago\n");
    let answer = c.ask(">", &CITIES).expect("answer");
    assert_eq!(
        answer.into_values(),
        vec!["washington".to_string(), "chicago".to_string()]
    );
}

#[test]
fn test_sentinel_aborts() {
    let mut c = console("paris\nend\nchicago\n");
    let err = c.ask(">", &CITIES).unwrap_err();
    assert!(matches!(err, AppError::Aborted));
    assert!(err.is_user_exit());
}

#[test]
fn test_end_of_input_closes() {
    let mut c = console("paris\n");
    let err = c.ask(">", &CITIES).unwrap_err();
    assert!(matches!(err, AppError::InputClosed));
}

#[test]
fn test_max_attempts() {
    let mut c = console("a\nb\nchicago\n").with_max_attempts(Some(2));
    let err = c.ask(">", &CITIES).unwrap_err();
    assert!(matches!(err, AppError::TooManyAttempts(2)));
    assert!(!err.is_user_exit());
}

#[test]
fn test_ask_one_rejects_lists() {
    let mut c = console("1,2\n2\n");
    let answer = c.ask_one(">", &["1", "2"]).expect("answer");
    assert_eq!(answer, "2");
}

#[test]
fn test_confirm() {
    let mut c = console("maybe\nY\nno\n");
    assert!(c.confirm("?").expect("first"));
    assert!(!c.confirm("?").expect("second"));
}
