//! Property-based tests for the parse engine
//!
//! These pin the repetition/totality interaction and determinism of the
//! evaluator over generated inputs.

use ebnf::{Grammar, Parser};
use proptest::prelude::*;

proptest! {
    #[test]
    fn repetition_accepts_exact_pair_runs(n in 0usize..64) {
        let grammar = Grammar::load("program = { 'ab' } ;").unwrap();
        let input = "ab".repeat(n);
        let tree = Parser::new(&grammar).parse(&input).unwrap();
        prop_assert_eq!(tree.text, input);
    }

    #[test]
    fn repetition_rejects_a_dangling_prefix(n in 0usize..64) {
        let grammar = Grammar::load("program = { 'ab' } ;").unwrap();
        let input = format!("{}a", "ab".repeat(n));
        prop_assert!(Parser::new(&grammar).parse(&input).is_err());
    }

    #[test]
    fn parsing_is_deterministic(input in "[a-z][a-z0-9]{0,24}") {
        let source = "program = ?lowercase letters? , { ?lowercase letters? | ?digits? } ;";
        let first_grammar = Grammar::load(source).unwrap();
        let second_grammar = Grammar::load(source).unwrap();
        let first = Parser::new(&first_grammar).parse(&input).unwrap();
        let second = Parser::new(&second_grammar).parse(&input).unwrap();
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.text.as_str(), input.as_str());
    }

    #[test]
    fn every_word_becomes_a_node(words in prop::collection::vec("[ab]{1,6}", 1..8)) {
        let grammar = Grammar::load(
            "program = word , { ' ' , word } ;\nword = { 'a' | 'b' } ;"
        ).unwrap();
        let input = words.join(" ");
        let tree = Parser::new(&grammar).parse(&input).unwrap();
        prop_assert_eq!(tree.text.as_str(), input.as_str());
        prop_assert_eq!(tree.find_all("word").len(), words.len());
    }
}
