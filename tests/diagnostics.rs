//! Diagnostic trail contents and fatal configuration errors
//!
//! Ordinary mismatches feed the trail and stay recoverable; dangling
//! rule references, unknown character classes and runaway recursion
//! abort the parse instead.

use ebnf::{AstNode, Diagnostic, Grammar, ParseError, Parser};

fn parse(grammar: &str, input: &str) -> Result<AstNode, ParseError> {
    let grammar = Grammar::load(grammar).expect("grammar failed to compile");
    Parser::new(&grammar).parse(input)
}

fn rejection_trail(grammar: &str, input: &str) -> Vec<Diagnostic> {
    match parse(grammar, input) {
        Err(ParseError::Rejected { diagnostics }) => diagnostics,
        other => panic!("expected rejection, got {:?}", other),
    }
}

#[test]
fn undefined_reference_aborts_instead_of_backtracking() {
    // `foo` is undefined; even though the second alternative would
    // match, the parse must abort rather than treat the reference as a
    // recoverable mismatch
    let grammar = "program = foo | 'x' ;";
    let err = parse(grammar, "x").unwrap_err();
    assert_eq!(
        err,
        ParseError::UnknownRule {
            rule: "foo".to_string(),
            caller: Some("program".to_string()),
        }
    );
}

#[test]
fn undefined_start_rule_aborts() {
    let err = parse("other = 'x' ;", "x").unwrap_err();
    assert_eq!(
        err,
        ParseError::UnknownRule { rule: "program".to_string(), caller: None }
    );
}

#[test]
fn unknown_character_class_aborts() {
    let err = parse("program = ?small caps? ;", "x").unwrap_err();
    assert!(matches!(err, ParseError::UnknownClass { .. }));
}

#[test]
fn recursion_ceiling_aborts_with_a_named_error() {
    let grammar = Grammar::load("program = loop ;\nloop = [ loop ] , 'x' ;").unwrap();
    let parser = Parser::with_max_depth(&grammar, 24);
    let err = parser.parse("x").unwrap_err();
    match err {
        ParseError::DepthLimit { rule, limit } => {
            assert_eq!(rule, "loop");
            assert_eq!(limit, 24);
        }
        other => panic!("expected depth limit, got {:?}", other),
    }
}

#[test]
fn trail_walks_the_failing_caller_chain_outermost_first() {
    let grammar = "program = 'a' , part ;\npart = 'b' ;";
    let trail = rejection_trail(grammar, "ax");
    assert_eq!(trail.len(), 2);
    assert!(matches!(
        &trail[0],
        Diagnostic::RuleMismatch { rule, caller: None, .. } if rule == "program"
    ));
    assert!(matches!(
        &trail[1],
        Diagnostic::RuleMismatch { rule, caller: Some(caller), found: Some('x'), .. }
            if rule == "part" && caller == "program"
    ));
}

#[test]
fn trail_resets_on_every_successful_rule_match() {
    // `x` fails on this input before `y` succeeds; the rejection that
    // follows must not report the dead `x` branch
    let grammar = "program = ( x | y ) , '!' ;\nx = 'a' ;\ny = 'b' ;";
    let trail = rejection_trail(grammar, "b?");
    assert!(trail
        .iter()
        .all(|d| !matches!(d, Diagnostic::RuleMismatch { rule, .. } if rule == "x")));
}

#[test]
fn end_of_input_failures_carry_no_character() {
    let grammar = "program = 'a' , part ;\npart = 'b' ;";
    let trail = rejection_trail(grammar, "a");
    assert!(matches!(
        &trail[1],
        Diagnostic::RuleMismatch { rule, found: None, .. } if rule == "part"
    ));
}

#[test]
fn mismatch_lines_point_into_the_input() {
    let grammar = "program = 'one' , ?white space characters? , part ;\npart = 'two' ;";
    let trail = rejection_trail(grammar, "one\nthree");
    assert!(matches!(
        &trail[1],
        Diagnostic::RuleMismatch { rule, line: 2, found: Some('t'), .. } if rule == "part"
    ));
}

#[test]
fn trailing_input_is_reported_with_its_line() {
    let trail = rejection_trail("program = 'ab' , [ '\\n' ] ;", "ab\ncd");
    assert_eq!(
        trail.first(),
        Some(&Diagnostic::TrailingInput { line: 2, found: 'c' })
    );
}

#[test]
fn diagnostics_render_as_printable_lines() {
    let grammar = "program = 'a' , part ;\npart = 'b' ;";
    let trail = rejection_trail(grammar, "ax");
    let lines: Vec<String> = trail.iter().map(|d| d.to_string()).collect();
    assert_eq!(lines[0], "line 1: rule 'program' failed at 'a'");
    assert_eq!(
        lines[1],
        "line 1: rule 'part' (called from 'program') failed at 'x'"
    );
}
