//! Property-based invariants for rule parsing, budgeting and the history window.

use proptest::prelude::*;
use voxlife::rule::{build_masks, parse_life_rule};
use voxlife::{apply_instance_budget, ConfigUpdate, Engine, RuleFamily, SimConfig};

proptest! {
    #[test]
    fn parse_is_idempotent(text in ".{0,24}") {
        let once = parse_life_rule(&text).normalized;
        let twice = parse_life_rule(&once).normalized;
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn parse_from_rule_alphabet_is_idempotent(text in "[bBsS0-9/ x]{0,16}") {
        let once = parse_life_rule(&text).normalized;
        prop_assert_eq!(parse_life_rule(&once).normalized, once.clone());
        prop_assert!(once.starts_with('B'));
        prop_assert!(once.contains("/S"));
    }

    #[test]
    fn masks_match_digits(birth in "[0-8]{0,9}", survive in "[0-8]{0,9}") {
        let masks = build_masks(&birth, &survive);
        for n in 0..9u32 {
            let digit = char::from_digit(n, 10).unwrap();
            prop_assert_eq!(masks.birth[n as usize], birth.contains(digit));
            prop_assert_eq!(masks.survive[n as usize], survive.contains(digit));
        }
    }

    #[test]
    fn budget_respects_ceiling_or_floor(
        width in 1usize..600,
        depth in 1usize..600,
        requested in 1usize..3000,
    ) {
        let effective = apply_instance_budget(width, depth, requested, 350_000);
        prop_assert!(effective <= requested || effective == 4);
        if width * depth * requested <= 350_000 {
            prop_assert_eq!(effective, requested);
        } else {
            prop_assert!(effective >= 4);
            prop_assert!(width * depth * effective <= 350_000 || effective == 4);
        }
    }

    #[test]
    fn history_never_exceeds_depth(
        generations in 1usize..12,
        steps in 0usize..30,
        elementary in any::<bool>(),
        seed in any::<u32>(),
    ) {
        let mut engine = Engine::new(SimConfig {
            width: 9,
            depth: 7,
            generations,
            seed,
            ..SimConfig::default()
        });
        if elementary {
            engine.apply(ConfigUpdate::Family(RuleFamily::Elementary));
        } else {
            engine.reset();
        }
        for _ in 0..steps {
            engine.step();
            prop_assert!(engine.history_snapshot().len() <= engine.effective_generation_depth());
        }
        prop_assert_eq!(engine.history_snapshot().len(), (steps + 1).min(generations));
        prop_assert_eq!(engine.current_grid().dimensions(), (9, 7));
    }
}
