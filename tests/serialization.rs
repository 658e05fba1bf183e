//! Match tree export: JSON, YAML and treeviz forms

use ebnf::{to_treeviz_str, AstNode, Grammar, Parser};

fn parse(grammar: &str, input: &str) -> AstNode {
    let grammar = Grammar::load(grammar).expect("grammar failed to compile");
    Parser::new(&grammar).parse(input).expect("parse failed")
}

#[test]
fn json_export_shape() {
    let tree = parse("program = 'ab' ;", "ab");
    let json = serde_json::to_string_pretty(&tree).expect("serialize failed");
    insta::assert_snapshot!(json, @r#"
    {
      "rule": "program",
      "line": 1,
      "text": "ab",
      "children": []
    }
    "#);
}

#[test]
fn yaml_export_shape() {
    let tree = parse("program = 'ab' ;", "ab");
    let yaml = serde_yaml::to_string(&tree).expect("serialize failed");
    insta::assert_snapshot!(yaml.trim_end(), @r"
    rule: program
    line: 1
    text: ab
    children: []
    ");
}

#[test]
fn treeviz_renders_the_match_order() {
    let tree = parse("program = word , word ;\nword = 'a' | 'b' ;", "ab");
    let viz = to_treeviz_str(&tree);
    insta::assert_snapshot!(viz.trim_end(), @r"
    program: 'ab' (line 1)
    ├─ word: 'a' (line 1)
    └─ word: 'b' (line 1)
    ");
}

#[test]
fn json_round_trip_preserves_the_tree() {
    let grammar = "program = { line } ;\n\
                   line = word , '\\n' ;\n\
                   word = ?lowercase letters? , { ?lowercase letters? } ;";
    let tree = parse(grammar, "alpha\nbeta\n");
    let json = serde_json::to_string(&tree).expect("serialize failed");
    let back: AstNode = serde_json::from_str(&json).expect("deserialize failed");
    assert_eq!(back, tree);
}

#[test]
fn node_lines_follow_the_input() {
    let grammar = "program = { line } ;\n\
                   line = word , '\\n' ;\n\
                   word = ?lowercase letters? , { ?lowercase letters? } ;";
    let tree = parse(grammar, "alpha\nbeta\n");
    let lines: Vec<AstNode> = tree.children.clone();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].line, 1);
    assert_eq!(lines[1].line, 2);
    assert_eq!(lines[1].children[0].text, "beta");
}
