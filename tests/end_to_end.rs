use rematch::{PatternError, Verdict, is_match};
use rematch::report::evaluate;
use rematch::suite::Suite;
use rematch::Matcher;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn suite_of_three_pairs() {
    let suite = Suite::new(
        strings(&["a*", "(ab)*c", "a|b"]),
        strings(&["aaa", "ababc", "c"]),
        None,
    )
    .unwrap();
    let results: Vec<bool> = evaluate(&suite, &Matcher::default())
        .into_iter()
        .map(|v| v == Verdict::Yes)
        .collect();
    assert_eq!(results, vec![true, true, false]);
}

#[test]
fn malformed_pattern_is_not_a_plain_false() {
    assert_eq!(
        is_match("(a", "a"),
        Err(PatternError::UnclosedGroup { position: 0 })
    );
}

#[test]
fn malformed_entry_does_not_abort_the_suite() {
    let suite = Suite::new(
        strings(&["(a", "a"]),
        strings(&["a", "a"]),
        None,
    )
    .unwrap();
    assert_eq!(
        evaluate(&suite, &Matcher::default()),
        vec![Verdict::SyntaxError, Verdict::Yes]
    );
}

#[test]
fn documented_properties() {
    assert_eq!(is_match(".", "x"), Ok(true));
    assert_eq!(is_match(".", ""), Ok(false));
    assert_eq!(is_match("a*", ""), Ok(true));
    assert_eq!(is_match("a*b", "aaab"), Ok(true));
    assert_eq!(is_match("(ab)*c", "ababac"), Ok(false));
    assert_eq!(is_match("(a|b)c", "ac"), Ok(true));
}

#[test]
fn parallel_evaluation_agrees_with_sequential() {
    let patterns = strings(&["a*b", "(a|b)*c", ".*", "(ab)*", "a|b|c", "(a*)"]);
    let targets = strings(&["aab", "abac", "xyz", "abab", "c", "a"]);
    let sequential: Vec<Verdict> = patterns
        .iter()
        .zip(&targets)
        .map(|(p, t)| Verdict::evaluate(&Matcher::default(), p, t))
        .collect();
    let suite = Suite::new(patterns, targets, None).unwrap();
    assert_eq!(evaluate(&suite, &Matcher::default()), sequential);
}

#[test]
fn long_targets_finish_on_a_default_thread() {
    let suite = Suite::new(
        strings(&["(a|b)*c", "(ab)*c", "a*"]),
        vec!["a".repeat(1500) + "c", "ab".repeat(1000) + "c", "a".repeat(3000)],
        None,
    )
    .unwrap();
    assert_eq!(
        evaluate(&suite, &Matcher::default()),
        vec![Verdict::Yes, Verdict::Yes, Verdict::Yes]
    );
    assert_eq!(is_match("(a|b)*c", &("ab".repeat(1000) + "c")), Ok(true));
}
