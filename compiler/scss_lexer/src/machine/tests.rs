use pretty_assertions::assert_eq;

use super::*;

fn machine(source: &str) -> Machine<'_, Vec<Token>> {
    Machine::new(source, LexerConfig::default(), Vec::new())
}

fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
    tokens.iter().map(|t| t.kind).collect()
}

#[test]
fn rule_shape_block_vs_declaration() {
    assert_eq!(rule_shape(".foo { color: red; }"), RuleShape::Block);
    assert_eq!(rule_shape("a:hover { }"), RuleShape::Block);
    assert_eq!(rule_shape("color: red; }"), RuleShape::Declaration);
    assert_eq!(rule_shape("color: red }"), RuleShape::Declaration);
    assert_eq!(rule_shape("color: red"), RuleShape::Declaration);
}

#[test]
fn rule_shape_skips_strings_and_interpolation() {
    assert_eq!(rule_shape("content: \"{\"; }"), RuleShape::Declaration);
    assert_eq!(rule_shape("content: ';' { }"), RuleShape::Block);
    assert_eq!(rule_shape("width: #{$w}; }"), RuleShape::Declaration);
    assert_eq!(rule_shape(".a-#{$n} { }"), RuleShape::Block);
}

#[test]
fn rule_shape_unclosed_spans_are_declarations() {
    assert_eq!(rule_shape("content: \"open {"), RuleShape::Declaration);
    assert_eq!(rule_shape("w: #{$x {"), RuleShape::Declaration);
}

#[test]
fn name_classes() {
    assert!(is_name_start('a'));
    assert!(is_name_start('_'));
    assert!(is_name_start('é'));
    assert!(!is_name_start('-'));
    assert!(!is_name_start('1'));
    assert!(is_name_char('-'));
    assert!(is_name_char('1'));
    assert!(!is_name_char('.'));
    assert!(!is_name_char(' '));
}

#[test]
fn step_reports_done() {
    let mut m = machine("");
    assert!(matches!(m.step(), Ok(false)));
    assert!(matches!(m.step(), Ok(false)));
}

#[test]
fn step_by_step_selector() {
    let mut m = machine("a {}");
    // Statement -> Selector
    assert!(matches!(m.step(), Ok(true)));
    assert_eq!(m.depth(), 1);
    assert!(m.sink_mut().is_empty());
    // tag
    assert!(matches!(m.step(), Ok(true)));
    assert_eq!(kinds(m.sink_mut()), vec![TokenKind::TagSelector]);
    // `{` swaps the selector for a block
    assert!(matches!(m.step(), Ok(true)));
    assert_eq!(m.depth(), 1);
    // `}`
    assert!(matches!(m.step(), Ok(true)));
    assert_eq!(m.depth(), 0);
    assert!(matches!(m.step(), Ok(false)));
    assert_eq!(
        kinds(&m.into_sink()),
        vec![
            TokenKind::TagSelector,
            TokenKind::BraceStart,
            TokenKind::BraceEnd
        ]
    );
}

#[test]
fn halt_finishes_the_machine() {
    let mut m = machine("}");
    match m.step() {
        Err(Halt::Lex(err)) => assert_eq!(err.kind, crate::LexErrorKind::UnbalancedCloseBrace),
        other => panic!("expected a lex error, got {other:?}"),
    }
    assert!(matches!(m.step(), Ok(false)));
}

#[test]
fn run_collects_in_order() {
    let mut m = machine("$a: 1px;");
    assert!(m.run().is_ok());
    assert_eq!(m.offset(), 8);
    let tokens = m.into_sink();
    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::Variable,
            TokenKind::Colon,
            TokenKind::Integer,
            TokenKind::Unit(crate::Unit::Px),
            TokenKind::Semicolon,
        ]
    );
    let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, vec!["$a", ":", "1", "px", ";"]);
}

#[test]
fn at_number_lookahead() {
    for (source, expected) in [
        ("1", true),
        (".5", true),
        ("-2", true),
        ("-.5", true),
        ("-x", false),
        (".x", false),
        ("-", false),
        ("a1", false),
    ] {
        assert_eq!(machine(source).at_number(), expected, "{source:?}");
    }
}

struct Refusing;

impl TokenSink for Refusing {
    type Error = &'static str;

    fn accept(&mut self, _token: Token) -> Result<(), &'static str> {
        Err("full")
    }
}

#[test]
fn sink_refusal_halts_the_run() {
    let mut m = Machine::new(".a {}", LexerConfig::default(), Refusing);
    assert!(matches!(m.run(), Err(Halt::Sink("full"))));
    assert!(matches!(m.step(), Ok(false)));
}
