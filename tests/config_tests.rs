use stmx_grader::config::{self, parse_level};
use tracing::Level;

#[test]
fn level_names_are_case_insensitive() {
    assert_eq!(parse_level("debug"), Level::DEBUG);
    assert_eq!(parse_level(" INFO "), Level::INFO);
    assert_eq!(parse_level("Trace"), Level::TRACE);
    assert_eq!(parse_level("error"), Level::ERROR);
}

#[test]
fn unknown_level_falls_back_to_warn() {
    assert_eq!(parse_level("chatty"), Level::WARN);
    assert_eq!(parse_level(""), Level::WARN);
}

#[test]
fn global_configuration_is_shared() {
    let first = config::ensure_initialized().expect("config");
    let second = config::get();

    assert!(std::sync::Arc::ptr_eq(&first, &second));
    assert_eq!(config::pass_threshold(), first.pass_threshold());
    assert!(!first.extension().starts_with('.'));
}
