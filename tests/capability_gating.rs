use nominal::prelude::*;

// An underlying type with no capabilities at all
struct Opaque;

// Equality and ordering but no arithmetic
strong_typedef!(Label: &'static str);

// The full set: comparison and arithmetic
strong_typedef!(Score: i32);

strong_typedef!(Handle: Opaque);

#[test]
fn capability_less_type_still_wraps() {
    // Construction and unwrapping never require any capability
    let h = Handle::new(Opaque);
    let Opaque = h.into_inner();

    // Nothing else is available. None of these compile:
    //
    // let _ = Handle::new(Opaque) == Handle::new(Opaque);
    // let _ = Handle::new(Opaque) < Handle::new(Opaque);
    // let _ = Handle::new(Opaque) + Handle::new(Opaque);
    // let _ = Handle::new(Opaque).clone();
}

#[test]
fn comparison_without_arithmetic() {
    assert!(Label::new("alpha") == Label::new("alpha"));
    assert!(Label::new("alpha") < Label::new("beta"));

    // &str has no +, so neither does Label:
    // let _ = Label::new("a") + Label::new("b");
}

#[test]
fn full_capability_set() {
    let a = Score::new(2);
    let b = Score::new(5);

    assert!(a != b);
    assert!(a < b);
    assert!((a + b).value() == 7);
    assert!((a - b).value() == -3);
}

#[test]
fn works_in_generic_algorithms() {
    use std::collections::BTreeMap;

    // Full PartialOrd/Ord impls, so wrappers sort like their contents
    let mut scores = vec![Score::new(3), Score::new(1), Score::new(2)];
    scores.sort();
    assert!(scores == vec![Score::new(1), Score::new(2), Score::new(3)]);

    let mut by_score: BTreeMap<Score, &str> = BTreeMap::new();
    by_score.insert(Score::new(2), "two");
    by_score.insert(Score::new(1), "one");
    assert!(by_score.first_key_value() == Some((&Score::new(1), &"one")));
}
