use lispty::{
    ast::{Node, NodeKind},
    error::{ErrorKind, LispError},
    interpreter::{
        evaluator::core::Evaluator,
        reader::read,
        value::{cells::Cells, core::Value},
    },
};
use pretty_assertions::assert_eq;

fn numbers(values: &[i64]) -> Cells {
    values.iter().copied().map(Value::Number).collect()
}

#[test]
fn pop_detaches_and_shifts() {
    let mut cells = numbers(&[1, 2, 3]);

    assert_eq!(cells.pop(1), Value::Number(2));
    assert_eq!(cells, numbers(&[1, 3]));
    assert_eq!(cells.pop(0), Value::Number(1));
    assert_eq!(cells.len(), 1);
}

#[test]
fn take_keeps_one_child() {
    let cells = Cells::from(vec![Value::Number(1), Value::qexpr([Value::Number(2)]), Value::symbol("x")]);

    assert_eq!(cells.take(1), Value::qexpr([Value::Number(2)]));
}

#[test]
fn join_moves_children_in_order() {
    let joined = numbers(&[1, 2]).join(numbers(&[])).join(numbers(&[3, 4]));

    assert_eq!(joined, numbers(&[1, 2, 3, 4]));
}

#[test]
#[should_panic(expected = "index")]
fn pop_out_of_bounds_panics() {
    let mut cells = numbers(&[1]);
    let _ = cells.pop(3);
}

#[test]
fn printer_renders_every_variant() {
    let value = Value::sexpr([Value::symbol("join"),
                              Value::qexpr([Value::Number(-1), Value::qexpr([])]),
                              Value::sexpr([]),
                              Value::Error(LispError::new(ErrorKind::DivisionByZero))]);

    assert_eq!(value.to_string(), "(join {-1 {}} () Division By Zero)");
}

#[test]
fn error_message_prefers_detail() {
    let plain = Value::from(ErrorKind::UnknownFunction);
    let detailed = Value::from(LispError::with_detail(ErrorKind::ArgumentCount,
                                                      "Function 'eval' passed 2 arguments, expected 1"));

    assert_eq!(plain.to_string(), "Unknown Function");
    assert_eq!(detailed.to_string(), "Function 'eval' passed 2 arguments, expected 1");
    assert_eq!(detailed.as_error().map(|e| e.kind), Some(ErrorKind::ArgumentCount));
}

#[test]
fn type_names_describe_variants() {
    assert_eq!(Value::Number(1).type_name(), "Number");
    assert_eq!(Value::symbol("+").type_name(), "Symbol");
    assert_eq!(Value::sexpr([]).type_name(), "S-Expression");
    assert_eq!(Value::qexpr([]).type_name(), "Q-Expression");
    assert_eq!(Value::from(ErrorKind::Overflow).type_name(), "Error");
    assert!(Value::sexpr([]).cells().is_some_and(Cells::is_empty));
    assert!(Value::Number(1).cells().is_none());
}

/// Builds the tree a tag based grammar produces for `+ 1 {2 3}`.
fn tagged_tree() -> Node {
    Node::from_tagged(">",
                      "",
                      vec![Node::from_tagged("regex", "", vec![]),
                           Node::from_tagged("expr|symbol|char", "+", vec![]),
                           Node::from_tagged("expr|number|regex", "1", vec![]),
                           Node::from_tagged("expr|qexpr|>",
                                             "",
                                             vec![Node::from_tagged("char", "{", vec![]),
                                                  Node::from_tagged("expr|number|regex", "2", vec![]),
                                                  Node::from_tagged("expr|number|regex", "3", vec![]),
                                                  Node::from_tagged("char", "}", vec![])]),
                           Node::from_tagged("regex", "", vec![])])
}

#[test]
fn reader_skips_delimiters_and_anchors() {
    let value = read(&tagged_tree());

    assert_eq!(value,
               Value::sexpr([Value::symbol("+"),
                             Value::Number(1),
                             Value::qexpr([Value::Number(2), Value::Number(3)])]));
}

#[test]
fn tagged_tree_evaluates_like_source() {
    let result = Evaluator::default().eval(read(&tagged_tree()));

    assert_eq!(result.as_error().map(|e| e.kind), Some(ErrorKind::TypeMismatch));
}

#[test]
fn reader_rejects_oversized_numbers() {
    let node = Node::leaf(NodeKind::Number, "9223372036854775808", 1);

    assert_eq!(read(&node), Value::from(ErrorKind::BadNumber));
    assert_eq!(read(&node).to_string(), "Invalid number");
    assert_eq!(read(&Node::leaf(NodeKind::Number, "-9223372036854775808", 1)),
               Value::Number(i64::MIN));
}
