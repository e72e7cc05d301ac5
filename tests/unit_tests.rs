// Unit tests for Tandem Match

use tandem_match::core::{count_candidates, full_match, pair_all, partial_match, MessageRenderer, MessageTemplates};
use tandem_match::models::{MatchKind, Participant};

fn participant(
    name: &str,
    practice: &[&str],
    native: &[&str],
    advanced: &[&str],
    only_native: bool,
) -> Participant {
    Participant {
        name: name.to_string(),
        practice: practice.iter().map(|s| s.to_string()).collect(),
        native: native.iter().map(|s| s.to_string()).collect(),
        advanced: advanced.iter().map(|s| s.to_string()).collect(),
        only_native,
        email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        facebook: String::new(),
    }
}

#[test]
fn test_full_match_iff_both_intersections_nonempty() {
    let a = participant("A A", &["French", "Italian"], &["English"], &[], false);
    let b = participant("B B", &["English"], &["French"], &[], false);
    let c = participant("C C", &["English"], &["Spanish"], &[], false);

    // Both intersections non-empty.
    assert!(full_match(&a, &b).is_some());
    // a wants nothing c natively offers.
    assert!(full_match(&a, &c).is_none());
}

#[test]
fn test_partial_match_iff_rule_holds() {
    let carol = participant("Carol S", &["French"], &["English"], &["German"], false);
    let dan = participant("Dan W", &["German"], &["French"], &[], false);

    assert!(partial_match(&carol, &dan).is_some());
    // Reverse direction needs Dan to offer an advanced language.
    assert!(partial_match(&dan, &carol).is_none());

    let dan_restricted = participant("Dan W", &["German"], &["French"], &[], true);
    assert!(partial_match(&carol, &dan_restricted).is_none());
}

#[test]
fn test_counts_unchanged_under_permutation() {
    let roster = vec![
        participant("Alice M", &["French"], &["English"], &[], false),
        participant("Bob D", &["English"], &["French"], &[], false),
        participant("Carol S", &["French"], &["English"], &["German"], false),
        participant("Dan W", &["German"], &["French"], &[], false),
        participant("Eve T", &["Korean"], &["Japanese"], &[], false),
    ];
    let baseline = count_candidates(&roster);

    // Rotate and reverse; individual counts must not move.
    let mut rotated = roster.clone();
    rotated.rotate_left(2);
    let mut reversed = roster.clone();
    reversed.reverse();

    for permuted in [rotated, reversed] {
        let counts = count_candidates(&permuted);
        for person in &roster {
            assert_eq!(counts.get(&person.name), baseline.get(&person.name));
        }
    }
}

#[test]
fn test_matcher_records_are_symmetric() {
    let roster = vec![
        participant("Alice M", &["French"], &["English"], &[], false),
        participant("Bob D", &["English"], &["French"], &[], false),
        participant("Carol S", &["French"], &["English"], &["German"], false),
        participant("Dan W", &["German"], &["French"], &[], false),
    ];
    let counts = count_candidates(&roster);
    let book = pair_all(&roster, &counts);

    for person in &roster {
        let record = book.get(&person.name).expect("everyone pairs here");
        let partner = book.get(&record.partner_name).expect("mirrored record");
        assert_eq!(partner.partner_name, person.name);
        assert_eq!(partner.speak, record.learn);
        assert_eq!(partner.learn, record.speak);
    }
}

#[test]
fn test_matcher_idempotent() {
    let roster = vec![
        participant("Alice M", &["French"], &["English"], &[], false),
        participant("Bob D", &["English"], &["French"], &[], false),
        participant("Chris D", &["English"], &["French"], &[], false),
        participant("Eve T", &["Korean"], &["Japanese"], &[], false),
    ];
    let counts = count_candidates(&roster);

    let first = pair_all(&roster, &counts);
    let second = pair_all(&roster, &counts);

    for person in &roster {
        assert_eq!(first.get(&person.name), second.get(&person.name));
    }
}

#[test]
fn test_full_match_scenario_message() {
    let alice = participant("Alice M", &["French"], &["English"], &[], false);
    let bob = participant("Bob D", &["English"], &["French"], &[], false);
    let roster = vec![alice.clone(), bob];

    let counts = count_candidates(&roster);
    let book = pair_all(&roster, &counts);

    let record = book.get("Alice M").expect("full match");
    assert_eq!(record.kind, MatchKind::Full);
    assert_eq!(record.speak, ["French".to_string()].into_iter().collect());
    assert_eq!(record.learn, ["English".to_string()].into_iter().collect());

    let renderer = MessageRenderer::new(MessageTemplates {
        full_match: "FULL [name] + [match_name]: speak [match_speak]".to_string(),
        partial_with_advanced: "PA".to_string(),
        partial_with_native: "PN".to_string(),
        no_match: "NONE [name]".to_string(),
    });
    assert_eq!(
        renderer.render(&alice, Some(record)),
        "FULL Alice M + Bob D: speak French"
    );
}

#[test]
fn test_partial_roles_and_no_match_message() {
    let roster = vec![
        participant("Carol S", &["French"], &["English"], &["German"], false),
        participant("Dan W", &["German"], &["French"], &[], false),
        participant("Eve T", &["Korean"], &["Japanese"], &[], false),
    ];
    let counts = count_candidates(&roster);
    let book = pair_all(&roster, &counts);

    assert_eq!(
        book.get("Carol S").unwrap().kind,
        MatchKind::PartialWithAdvanced
    );
    assert_eq!(
        book.get("Dan W").unwrap().kind,
        MatchKind::PartialWithNative
    );
    assert!(book.get("Eve T").is_none());

    let renderer = MessageRenderer::new(MessageTemplates {
        full_match: String::new(),
        partial_with_advanced: String::new(),
        partial_with_native: String::new(),
        no_match: "Sorry [name], no pair found.".to_string(),
    });
    let eve = &roster[2];
    assert_eq!(
        renderer.render(eve, book.get("Eve T")),
        "Sorry Eve T, no pair found."
    );
}

#[test]
fn test_only_native_participant_never_offers_native_in_partial() {
    // Dan's languages intersect Carol's but he is native-only.
    let roster = vec![
        participant("Carol S", &["French"], &["English"], &["German"], false),
        participant("Dan W", &["German"], &["French"], &[], true),
    ];
    let counts = count_candidates(&roster);
    let book = pair_all(&roster, &counts);

    assert!(book.get("Carol S").is_none());
    assert!(book.get("Dan W").is_none());
}
