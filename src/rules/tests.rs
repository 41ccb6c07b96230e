use super::*;
use crate::features::BuzzwordSet;
use crate::profile::ProfileInput;
use std::collections::HashMap;

const BUZZY_HEADLINE: &str =
    "Visionary leader driving exponential growth in cross-functional teams";
const READABLE_BIO: &str = "I write code for a small shop.";
const DENSE_READABLE: &str = "i am a leader and i like growth";
const HARD_TO_READ: &str = "Specialization internationalization institutionalization.";

fn buzzwords() -> BuzzwordSet {
    BuzzwordSet::new([
        "visionary",
        "leader",
        "exponential",
        "growth",
        "synergy",
        "leveraging",
        "disruptive",
    ])
}

fn gibberish_blacklist() -> Blacklist {
    Blacklist::new([r"\b(asdf|qwer|zxcv)\w*", r"[bcdfghjklmnpqrstvwxz]{5,}"]).unwrap()
}

fn engine(blacklist: Blacklist) -> RuleEngine {
    RuleEngine::new(blacklist, ReasonTemplates::default())
}

fn run(engine: &RuleEngine, headline: &str, bio: &str) -> RuleOutcome {
    let input = ProfileInput::new("u1", headline, bio);
    if let fired @ RuleOutcome::Fabricated(_) = engine.check_empty(&input.trimmed()) {
        return fired;
    }
    let features = ProfileFeatures::extract(&input, &buzzwords());
    engine.check_overrides(&RuleInput {
        profile: input.trimmed(),
        features: &features,
    })
}

fn diagnose(engine: &RuleEngine, headline: &str, bio: &str) -> Diagnostics {
    let input = ProfileInput::new("u1", headline, bio);
    engine.diagnose(&ProfileFeatures::extract(&input, &buzzwords()))
}

fn expect_override(outcome: RuleOutcome) -> Override {
    match outcome {
        RuleOutcome::Fabricated(o) => o,
        RuleOutcome::Continue => panic!("expected an override to fire"),
    }
}

mod empty_fields_tests {
    use super::*;

    #[test]
    fn test_both_empty_fires() {
        let o = expect_override(run(&engine(gibberish_blacklist()), "", ""));
        assert_eq!(o.rule, RuleName::EmptyFields);
        assert_eq!(o.reason, "Profile fields are empty");
        assert_eq!(o.flagged_fields, vec![ProfileField::Headline, ProfileField::Bio]);
    }

    #[test]
    fn test_whitespace_only_counts_as_empty() {
        let o = expect_override(run(&engine(Blacklist::default()), "   ", "\n\t "));
        assert_eq!(o.rule, RuleName::EmptyFields);
    }

    #[test]
    fn test_one_field_present_continues() {
        let e = engine(Blacklist::default());
        let input = ProfileInput::new("u1", "", READABLE_BIO);
        assert_eq!(e.check_empty(&input.trimmed()), RuleOutcome::Continue);
    }
}

mod blacklist_tests {
    use super::*;

    #[test]
    fn test_gibberish_headline_flags_headline_only() {
        let o = expect_override(run(
            &engine(gibberish_blacklist()),
            "asdf qwer zxcv",
            "lkjsad pqowie zmxncb qweiru asdfjk",
        ));
        assert_eq!(o.rule, RuleName::Blacklist);
        assert_eq!(o.reason, "Detected gibberish or nonsensical input");
        assert_eq!(o.flagged_fields, vec![ProfileField::Headline]);
    }

    #[test]
    fn test_gibberish_bio_flags_bio_only() {
        let o = expect_override(run(
            &engine(gibberish_blacklist()),
            "Backend developer",
            "zmxncb",
        ));
        assert_eq!(o.flagged_fields, vec![ProfileField::Bio]);
    }

    #[test]
    fn test_patterns_are_case_insensitive() {
        let e = engine(Blacklist::new(["rockstar"]).unwrap());
        let o = expect_override(run(&e, "ROCKSTAR engineer", READABLE_BIO));
        assert_eq!(o.flagged_fields, vec![ProfileField::Headline]);
    }

    #[test]
    fn test_override_sees_case_preserved_text() {
        // inline (?-i) makes the pattern case-sensitive, exposing which text it saw
        let e = engine(Blacklist::new(["(?-i)NINJA"]).unwrap());
        let o = expect_override(run(&e, "NINJA coder", READABLE_BIO));
        assert_eq!(o.rule, RuleName::Blacklist);

        let diagnostics = diagnose(&e, "NINJA coder", READABLE_BIO);
        assert!(!diagnostics.raw_reasons().contains(&"Contains overused phrases".to_string()));
    }

    #[test]
    fn test_diagnostics_see_lowercased_text() {
        let e = engine(Blacklist::new(["(?-i)ninja"]).unwrap());
        assert_eq!(run(&e, "NINJA coder", READABLE_BIO), RuleOutcome::Continue);

        let diagnostics = diagnose(&e, "NINJA coder", READABLE_BIO);
        assert_eq!(diagnostics.flagged_fields(), vec![ProfileField::Headline]);
        assert_eq!(
            diagnostics.joined_reason().as_deref(),
            Some("Contains overused phrases")
        );
    }

    #[test]
    fn test_blacklist_takes_priority_over_combo() {
        let o = expect_override(run(&engine(gibberish_blacklist()), BUZZY_HEADLINE, "zmxncb"));
        assert_eq!(o.rule, RuleName::Blacklist);
        assert_eq!(o.flagged_fields, vec![ProfileField::Bio]);
    }

    #[test]
    fn test_invalid_pattern_is_rejected() {
        let err = Blacklist::new(["ok", "(unclosed"]).unwrap_err();
        assert!(err.to_string().contains("(unclosed"));
    }

    #[test]
    fn test_first_match_reports_pattern_order() {
        let b = Blacklist::new(["zzz", "abc", "a"]).unwrap();
        assert_eq!(b.first_match("xabcx"), Some(1));
        assert_eq!(b.pattern(1), Some("abc"));
        assert_eq!(b.first_match("none"), None);
        assert_eq!(b.len(), 3);
    }
}

mod combo_tests {
    use super::*;

    #[test]
    fn test_buzzy_unreadable_headline_fires() {
        let o = expect_override(run(&engine(Blacklist::default()), BUZZY_HEADLINE, READABLE_BIO));
        assert_eq!(o.rule, RuleName::BuzzwordReadability);
        assert_eq!(o.reason, "Overused buzzwords and poor readability");
        assert_eq!(o.flagged_fields, vec![ProfileField::Headline, ProfileField::Bio]);
    }

    #[test]
    fn test_conditions_may_come_from_different_fields() {
        let o = expect_override(run(&engine(Blacklist::default()), DENSE_READABLE, HARD_TO_READ));
        assert_eq!(o.rule, RuleName::BuzzwordReadability);
        assert_eq!(o.flagged_fields, vec![ProfileField::Headline, ProfileField::Bio]);
    }

    #[test]
    fn test_dense_but_readable_continues() {
        let outcome = run(&engine(Blacklist::default()), DENSE_READABLE, READABLE_BIO);
        assert_eq!(outcome, RuleOutcome::Continue);
    }

    #[test]
    fn test_unreadable_without_buzzwords_continues() {
        let outcome = run(&engine(Blacklist::default()), "Backend developer", HARD_TO_READ);
        assert_eq!(outcome, RuleOutcome::Continue);
    }

    #[test]
    fn test_custom_template_is_used() {
        let templates = HashMap::from([(
            reasons::REASON_BUZZWORD_DENSITY.to_string(),
            "Too much jargon".to_string(),
        )]);
        let e = RuleEngine::new(Blacklist::default(), ReasonTemplates::new(templates));
        let o = expect_override(run(&e, BUZZY_HEADLINE, READABLE_BIO));
        assert_eq!(o.reason, "Too much jargon");
    }
}

mod diagnostics_tests {
    use super::*;

    #[test]
    fn test_clean_profile_has_no_findings() {
        let d = diagnose(
            &engine(gibberish_blacklist()),
            "i like to code and build web apps.",
            "we make good food for our town.",
        );
        assert!(d.is_empty());
        assert!(d.flagged_fields().is_empty());
        assert_eq!(d.joined_reason(), None);
    }

    #[test]
    fn test_soft_buzzword_density_flags_field() {
        let d = diagnose(
            &engine(Blacklist::default()),
            "i am a leader who likes to cook",
            "we make good food for our town.",
        );
        assert_eq!(d.flagged_fields(), vec![ProfileField::Headline]);
        assert_eq!(d.joined_reason().as_deref(), Some("Overused buzzwords detected"));
    }

    #[test]
    fn test_field_flagged_once_for_multiple_findings() {
        let d = diagnose(&engine(Blacklist::default()), BUZZY_HEADLINE, READABLE_BIO);
        assert_eq!(d.flagged_fields(), vec![ProfileField::Headline]);
        assert_eq!(d.raw_reasons().len(), 2);
        assert_eq!(
            d.joined_reason().as_deref(),
            Some("Overused buzzwords detected; Low readability suggests fabricated content")
        );
    }

    #[test]
    fn test_identical_reasons_joined_once() {
        let d = diagnose(&engine(Blacklist::default()), HARD_TO_READ, HARD_TO_READ);
        assert_eq!(d.raw_reasons().len(), 2);
        assert_eq!(
            d.joined_reason().as_deref(),
            Some("Low readability suggests fabricated content")
        );
        assert_eq!(d.flagged_fields(), vec![ProfileField::Headline, ProfileField::Bio]);
    }

    #[test]
    fn test_fields_reported_in_first_seen_order() {
        // bio is flagged first (buzzwords), headline later (readability)
        let d = diagnose(&engine(Blacklist::default()), HARD_TO_READ, DENSE_READABLE);
        assert_eq!(d.flagged_fields(), vec![ProfileField::Bio, ProfileField::Headline]);
    }

    #[test]
    fn test_regex_finding_on_bio_precedes_headline_readability() {
        let blacklist = Blacklist::new([r"overused"]).unwrap();
        let d = diagnose(
            &engine(blacklist),
            HARD_TO_READ,
            "I write overused code for a small shop.",
        );
        assert_eq!(
            d.raw_reasons(),
            [
                "Contains overused phrases".to_string(),
                "Low readability suggests fabricated content".to_string()
            ]
        );
        assert_eq!(d.flagged_fields(), vec![ProfileField::Bio, ProfileField::Headline]);
    }
}

mod diagnostics_collector_tests {
    use super::*;

    #[test]
    fn test_joined_reason_keeps_first_seen_order() {
        let mut d = Diagnostics::new();
        d.flag(ProfileField::Bio, "b".to_string());
        d.flag(ProfileField::Headline, "a".to_string());
        d.flag(ProfileField::Bio, "b".to_string());
        assert_eq!(d.joined_reason().as_deref(), Some("b; a"));
        assert_eq!(d.flagged_fields(), vec![ProfileField::Bio, ProfileField::Headline]);
    }
}
