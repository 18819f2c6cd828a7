use super::*;

#[test]
fn new_stack_is_top_level() {
    let stack = ModeStack::new();
    assert_eq!(stack.top(), Mode::TopLevel);
    assert_eq!(stack.depth(), 0);
}

#[test]
fn top_level_is_never_popped() {
    let mut stack = ModeStack::new();
    assert_eq!(stack.pop(), None);
    assert_eq!(stack.top(), Mode::TopLevel);
}

#[test]
fn push_pop_restores_depth() {
    let mut stack = ModeStack::new();
    stack.push(Mode::Block, 5, 1);
    stack.push(Mode::Value, 12, 2);
    assert_eq!(stack.depth(), 2);
    assert_eq!(
        stack.top_frame(),
        Frame {
            mode: Mode::Value,
            offset: 12,
            line: 2
        }
    );
    assert_eq!(stack.pop().map(|f| f.mode), Some(Mode::Value));
    assert_eq!(stack.top(), Mode::Block);
    assert_eq!(stack.pop().map(|f| f.offset), Some(5));
    assert_eq!(stack.depth(), 0);
}

#[test]
fn deep_nesting_spills_past_inline_capacity() {
    let mut stack = ModeStack::new();
    for i in 0..32 {
        stack.push(Mode::Block, i, 1);
    }
    assert_eq!(stack.depth(), 32);
    for _ in 0..32 {
        assert!(stack.pop().is_some());
    }
    assert_eq!(stack.pop(), None);
}

#[test]
fn closers_match_openers() {
    assert_eq!(Mode::Block.closer(), Some('}'));
    assert_eq!(Mode::Interpolation.closer(), Some('}'));
    assert_eq!(Mode::Attribute.closer(), Some(']'));
    assert_eq!(Mode::PseudoArguments.closer(), Some(')'));
    assert_eq!(Mode::FunctionArguments.closer(), Some(')'));
    assert_eq!(Mode::Value.closer(), None);
}
