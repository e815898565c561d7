//! tests/session.rs
//! Evaluator semantics observed through the session context.

use qlang::core::diagnostics::Event;
use qlang::core::state::State;
use qlang::core::{Context, Token, TokenKind, Value};

fn run(lines: &[&str]) -> (Context, Vec<Event>) {
    let mut context = Context::new();
    let mut events = Vec::new();
    for line in lines {
        let scanned = context.parse(line);
        events.extend(scanned.events);
        context = scanned.context;
    }
    (context, events)
}

fn scalar(kind: TokenKind, text: &str) -> Value {
    Token::new(kind, text).into()
}

fn num(text: &str) -> Value {
    scalar(TokenKind::Number, text)
}

#[test]
fn assign_then_dereference_restores_the_value() {
    let (ctx, _) = run(&["5 x = x *"]);
    assert_eq!(ctx.queue(), &[num("5")]);
    assert_eq!(ctx.symbols().lookup("x"), Some(&num("5")));
}

#[test]
fn quote_then_explode_is_a_no_op_on_contents() {
    let (ctx, events) = run(&["1 2 3 @ *"]);
    assert_eq!(ctx.queue(), &[num("1"), num("2"), num("3")]);
    assert_eq!(events, vec![Event::Quoted { len: 3 }, Event::Exploded { len: 3 }]);
}

#[test]
fn quote_round_trip_holds_for_many_queues() {
    let setups = [
        "",
        "1",
        "\"t\" sym -4.5",
        "1 @ 2 @",
        "a b c @ d",
        "x ~ ~",
        "!",
    ];
    for setup in setups {
        let (before, _) = run(&[setup]);
        let after = before.parse("@ *").context;
        assert_eq!(after.queue(), before.queue(), "round trip changed {setup:?}");
    }
}

#[test]
fn undefined_symbol_becomes_error_entry() {
    let (ctx, events) = run(&["y *"]);
    assert_eq!(ctx.queue(), &[Value::from(Token::error())]);
    assert_eq!(events, vec![Event::SymbolUndefined { name: "y".into() }]);
}

#[test]
fn delete_shrinks_by_one_and_never_grows_an_empty_queue() {
    let (ctx, events) = run(&["1 2 3 ~"]);
    assert_eq!(ctx.queue(), &[num("1"), num("2")]);
    assert_eq!(events, vec![Event::Deleted { value: num("3") }]);

    let (ctx, events) = run(&["~"]);
    assert!(ctx.queue().is_empty());
    assert!(matches!(events.as_slice(), [Event::Meaningless { .. }]));
}

#[test]
fn binding_survives_later_work_and_ignores_case() {
    let (ctx, _) = run(&["\"hi\" Greeting =", "1 2 @ ~", "greeting *"]);
    assert_eq!(ctx.queue(), &[scalar(TokenKind::Text, "\"hi\"")]);

    let (ctx, _) = run(&["7 Foo =", "FOO *"]);
    assert_eq!(ctx.queue(), &[num("7")]);
}

#[test]
fn rebinding_overwrites_silently() {
    let (ctx, events) = run(&["1 x =", "2 X =", "x *"]);
    assert_eq!(ctx.queue(), &[num("2")]);
    assert_eq!(ctx.symbols().len(), 1);
    assert!(events.iter().all(|e| !e.is_warning()));
}

#[test]
fn quoted_queue_can_be_bound_and_exploded() {
    let (ctx, _) = run(&["1 2 @ pair =", "0 pair * *"]);
    assert_eq!(ctx.queue(), &[num("0"), num("1"), num("2")]);
}

#[test]
fn quotes_nest() {
    let (ctx, _) = run(&["1 @ 2 @"]);
    assert_eq!(ctx.queue(), &[Value::Queue(vec![Value::Queue(vec![num("1")]), num("2")])]);
}

#[test]
fn operators_without_preconditions_are_appended() {
    let (ctx, events) = run(&["* = ! 5 ="]);
    let kinds: String = ctx.queue().iter().map(|v| v.kind().chr()).collect();
    assert_eq!(kinds, "XXXNX");
    assert_eq!(events.len(), 4);
    assert!(events.iter().all(Event::is_warning));
}

#[test]
fn multi_line_text_is_one_token() {
    let first = Context::new().parse("\"abc");
    assert!(first.context.in_text());
    assert_eq!(first.context.state(), State::Text);
    assert_eq!(first.context.pending_token(), "\"abc\n");
    assert_eq!(first.context.pending_kind(), None);
    assert!(first.context.queue().is_empty());

    let second = first.context.parse("def\"");
    assert_eq!(second.context.state(), State::None);
    assert_eq!(second.context.queue(), &[scalar(TokenKind::Text, "\"abc\ndef\"")]);
}

#[test]
fn parse_never_touches_its_input() {
    let start = Context::new().parse("1 \"open").context;
    let snapshot = start.clone();
    let next = start.parse("close\" 2 @");
    assert_eq!(start, snapshot);
    assert_eq!(next.context.queue().len(), 1);
    assert_ne!(next.context, start);
}

#[test]
fn every_parse_returns_idle_or_text() {
    for line in ["abc def", "12", "-", "1.5e", "x \"y", "'quoted", "a ~ @ *"] {
        let ctx = Context::new().parse(line).context;
        assert!(ctx.state().is_resumable(), "{line:?} left {}", ctx.state());
    }
}

#[test]
fn finish_forces_text_termination() {
    let open = Context::new().parse("\"never closed").context;
    let done = open.finish();
    assert_eq!(done.events, vec![Event::ForcedTextTermination]);
    assert_eq!(
        done.context.queue(),
        &[scalar(TokenKind::Text, "\"never closed\n\"")]
    );
    assert!(!done.context.in_text());

    let idle = Context::new().parse("1").context.finish();
    assert!(idle.events.is_empty());
    assert_eq!(idle.context.queue(), &[num("1")]);
}

#[test]
fn interrupt_discards_partial_token_only() {
    let open = Context::new().parse("1 \"half").context;
    let cleared = open.interrupt();
    assert_eq!(cleared.state(), State::None);
    assert_eq!(cleared.pending_token(), "");
    assert_eq!(cleared.queue(), &[num("1")]);
    assert!(open.in_text());
}

#[test]
fn bare_decimal_marker_is_not_a_name() {
    let (ctx, events) = run(&["1 .x ="]);
    let kinds: String = ctx.queue().iter().map(|v| v.kind().chr()).collect();
    assert_eq!(kinds, "NNXX");
    assert!(ctx.symbols().is_empty());
    assert_eq!(events.len(), 2);
}
