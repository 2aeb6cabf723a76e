use std::cell::Cell;
use std::io;

use error_trail::{CompositeError, FixedCapture, FrameVec, StackFrame};

fn frames_for(site: &str) -> FrameVec {
    (0..5)
        .map(|i| StackFrame::new(format!("{site}::f{i}"), format!("{site}.rs"), 100 + i))
        .collect()
}

fn named(description: &str) -> CompositeError {
    CompositeError::from_frames(description, frames_for(description))
}

#[test]
fn combine_joins_descriptions_with_colon_space() {
    let combined = named("one").combine(named("two"));
    assert_eq!(combined.to_string(), "one: two");
}

#[test]
fn combine_preserves_each_operands_first_frames() {
    let one = named("one");
    let two = named("two");
    let combined = one.combine(two.clone());

    assert_eq!(combined.frames(), one.frames());
    assert_eq!(combined.child_frames().next().unwrap(), two.frames());
}

#[test]
fn combine_leaves_the_receiver_untouched() {
    let one = named("one");
    let combined = one.combine(named("two"));

    assert_eq!(one.to_string(), "one");
    assert_eq!(one.children().count(), 0);
    assert_eq!(combined.children().count(), 1);
}

#[test]
fn combine_keeps_the_description_unrewritten() {
    let combined = named("one").combine(named("two"));
    assert_eq!(combined.description(), "one");
    assert_eq!(combined.to_string(), "one: two");
}

#[test]
fn combining_an_absent_error_is_a_noop() {
    let one = named("one");
    let combined = one.combine_opt(None::<CompositeError>);
    assert_eq!(combined, one);

    let some = one.combine_opt(Some(named("two")));
    assert_eq!(some.to_string(), "one: two");
}

#[test]
fn combine_accepts_foreign_errors() {
    let combined = named("one").combine(io::Error::other("my error"));
    assert_eq!(combined.to_string(), "one: my error");
}

#[test]
fn foreign_errors_get_frames_captured_at_the_combination_point() {
    let capture = FixedCapture::new(frames_for("here"));
    let combined = named("one").combine_with(io::Error::other("my error"), &capture);

    let child_frames: Vec<_> = combined.child_frames().collect();
    assert_eq!(child_frames.len(), 1);
    assert_eq!(child_frames[0], frames_for("here").as_slice());
}

#[test]
fn combined_value_contains_both_operands() {
    let one = named("one");
    let two = named("two");
    let combined = one.combine(two.clone());

    assert!(combined.contains(&one));
    assert!(combined.contains(&two));
    assert!(combined.contains(&combined));
}

#[test]
fn contains_matches_foreign_errors_by_message() {
    let combined = named("one").combine(io::Error::other("my error"));
    assert!(combined.contains(&io::Error::other("my error")));
    assert!(!combined.contains(&io::Error::other("other error")));
}

#[test]
fn contains_rejects_unrelated_values() {
    let combined = named("one").combine(named("two"));
    assert!(!combined.contains(&named("three")));
}

#[test]
fn contains_distinguishes_native_from_foreign() {
    // A native value whose description matches a foreign child is not the
    // same constituent.
    let combined = named("one").combine(io::Error::other("two"));
    assert!(!combined.contains(&named("two")));
}

#[test]
fn contains_func_sees_the_receiver_first() {
    let one = named("one").combine_opt(None::<CompositeError>);
    assert!(one.contains_func(|err| err.to_string() == "one"));
}

#[test]
fn contains_func_reaches_children_in_order() {
    let combined = named("one").combine(named("two"));
    assert!(combined.contains_func(|err| err.to_string() == "two"));
    assert!(!combined.contains_func(|err| err.to_string() == "three"));
}

#[test]
fn contains_func_short_circuits() {
    let calls = Cell::new(0);
    let combined = named("one").combine(named("two"));

    assert!(combined.contains_func(|_| {
        calls.set(calls.get() + 1);
        true
    }));
    assert_eq!(calls.get(), 1);
}

#[test]
fn chained_combination_keeps_children_and_frames_aligned() {
    let combined = named("foo")
        .combine(io::Error::other("foobar"))
        .combine(named("bar"));

    assert_eq!(combined.children().count(), combined.child_frames().count());
    assert_eq!(combined.children().count(), 2);
    assert_eq!(combined.to_string(), "foo: foobar: bar");
}

#[test]
fn combining_a_combined_value_flattens_its_children() {
    let inner = named("one").combine(named("two"));
    let outer = named("zero").combine(inner.clone());

    assert_eq!(outer.to_string(), "zero: one: two");
    assert_eq!(outer.children().count(), 2);
    assert_eq!(outer.children().count(), outer.child_frames().count());
    assert!(outer.contains(&inner));
    assert!(outer.contains(&named("two")));
}

#[test]
fn source_exposes_the_first_child() {
    use std::error::Error;

    let combined = named("one").combine(io::Error::other("my error"));
    let source = combined.source().expect("combined value has a source");
    assert_eq!(source.to_string(), "my error");

    assert!(named("one").source().is_none());
}

#[test]
fn combined_values_share_flags_with_the_receiver() {
    let mut one = named("one");
    one.set_debug(true);
    let combined = one.combine(named("two"));
    assert_eq!(
        combined.to_string(),
        "one: two [one::f0 one.rs 100]"
    );
}
