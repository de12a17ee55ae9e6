//! Body wash questionnaire

use super::condition::Condition;
use super::config::*;
use super::key::CategoryKey;

static SLOTS: [SlotDef; 5] = [
    SlotDef {
        key: "q1",
        prompt: "What is your climate like most of the year?",
        note: "Where you shower matters as much as your skin.",
        choices: &[
            ChoiceDef {
                value: "A",
                label: "Hot and humid",
                hint: "Sweaty most days",
                reason: "You live somewhere hot and humid, so the wash has to rinse clean and feel fresh.",
            },
            ChoiceDef {
                value: "B",
                label: "Dry or cold",
                hint: "Heating, wind, low humidity",
                reason: "Your climate is dry or cold, so keeping moisture after the shower matters.",
            },
            ChoiceDef {
                value: "C",
                label: "Mild or air-conditioned",
                hint: "Mostly indoors",
                reason: "Your environment is mild, so a balanced wash is enough.",
            },
        ],
    },
    SlotDef {
        key: "q2",
        prompt: "How does your skin react to new products?",
        note: "Be honest; this one can end the questionnaire early.",
        choices: &[
            ChoiceDef {
                value: "A",
                label: "Extremely sensitive",
                hint: "Itch or redness from most washes",
                reason: "Your skin reacts to most washes, so calming it takes priority over everything else.",
            },
            ChoiceDef {
                value: "B",
                label: "Sometimes reacts",
                hint: "Certain products sting",
                reason: "Your skin occasionally reacts, so strong actives are kept in check.",
            },
            ChoiceDef {
                value: "C",
                label: "Rarely reacts",
                hint: "Most products are fine",
                reason: "Your skin tolerates most products, so function can lead.",
            },
        ],
    },
    SlotDef {
        key: "q3",
        prompt: "How oily or sweaty is your body skin?",
        note: "Think back, chest and shoulders.",
        choices: &[
            ChoiceDef {
                value: "A",
                label: "Oily, with breakouts",
                hint: "Spots on back or chest",
                reason: "Oil and breakouts on your back or chest call for a clarifying wash.",
            },
            ChoiceDef {
                value: "B",
                label: "Average",
                hint: "Nothing special",
                reason: "Your body skin is average in oil, so cleansing strength can stay moderate.",
            },
            ChoiceDef {
                value: "C",
                label: "Dry, little sweat",
                hint: "Tight after showering",
                reason: "Your skin is dry with little sweat, so the wash must not strip what little oil there is.",
            },
        ],
    },
    SlotDef {
        key: "q4",
        prompt: "How does your skin texture feel?",
        note: "Run a hand over your upper arms.",
        choices: &[
            ChoiceDef {
                value: "A",
                label: "Rough bumps",
                hint: "Chicken skin on arms or thighs",
                reason: "Rough bumps point at buildup that a gentle renewing wash can smooth.",
            },
            ChoiceDef {
                value: "B",
                label: "Smooth",
                hint: "No texture issues",
                reason: "Your texture is smooth, so no exfoliation is needed.",
            },
            ChoiceDef {
                value: "C",
                label: "Dull",
                hint: "Lacks softness",
                reason: "Your skin feels dull, so softness after the shower is the goal.",
            },
        ],
    },
    SlotDef {
        key: "q5",
        prompt: "What should your skin feel like after the shower?",
        note: "The feeling you want when you towel off.",
        choices: &[
            ChoiceDef {
                value: "A",
                label: "Fresh and clean",
                hint: "Nothing left on the skin",
                reason: "You want a fresh, clean finish, so nothing film-forming.",
            },
            ChoiceDef {
                value: "B",
                label: "Soft and moisturized",
                hint: "A light cushion stays",
                reason: "You want skin to feel soft afterwards, so the wash should leave moisture behind.",
            },
            ChoiceDef {
                value: "C",
                label: "No preference",
                hint: "Either is fine",
                reason: "You have no after-feel preference, so the other answers decide.",
            },
        ],
    },
];

static GUARDS: [Guard; 6] = [
    Guard {
        route: "fast-rescue",
        when: Condition::Is("q2", "A"),
        outcome: "rescue-soothing",
    },
    Guard {
        route: "oily-clear",
        when: Condition::Is("q3", "A"),
        outcome: "clear-skin",
    },
    Guard {
        route: "rough-renew",
        when: Condition::Is("q4", "A"),
        outcome: "smooth-renewal",
    },
    Guard {
        route: "dry-barrier",
        when: Condition::Any(&[Condition::Is("q3", "C"), Condition::Is("q1", "B")]),
        outcome: "barrier-moisture",
    },
    Guard {
        route: "soft-finish",
        when: Condition::Is("q5", "B"),
        outcome: "barrier-moisture",
    },
    Guard {
        route: "daily-fresh",
        when: Condition::Always,
        outcome: "daily-fresh",
    },
];

static FAST_PATHS: [FastPathRule; 1] = [FastPathRule {
    name: "extreme-sensitivity",
    requires: &["q1", "q2"],
    when: Condition::Is("q2", "A"),
}];

static ROLLBACKS: [RollbackRule; 1] = [RollbackRule {
    name: "reactive-exfoliation",
    when: Condition::All(&[Condition::Is("q2", "B"), Condition::Is("q4", "A")]),
    fallback: "rescue-soothing",
    line: "Your skin reacts at times and your texture answer would normally pull in exfoliating acids, so we rolled back to the soothing line first.",
    narrative: "Smoothing rough bumps is worth doing only once your skin tolerates it. Calm it for two to three weeks with a minimal wash, then revisit renewal.",
    counterfactual: "Tolerance comes first for you, so we deliberately rolled back to the soothing line and offer no exfoliating alternative.",
    product: None,
}];

static OUTCOMES: [OutcomeBundle; 5] = [
    OutcomeBundle {
        key: "rescue-soothing",
        title: "Rescue soothing: the minimal wash for reactive skin",
        category_label: "Rescue soothing",
        marketing: "Fewer ingredients, fewer surprises.",
        fit_rule: "For skin that itches or reddens from most washes.",
        why_recommend: "Your skin is reacting to ordinary washes, so the only goal right now is a fragrance-free, minimal formula that cleans without adding load.",
        why_not_others: "Clarifying or renewing washes add acids and surfactant strength that reactive skin cannot take yet.",
        not_for: &[
            "Visible rash or broken skin: see a doctor before trying anything new.",
        ],
        usage: "Lukewarm water, a small amount, no scrubbing tools.",
        ingredients: &[
            Ingredient {
                name: "Ceramides",
                mechanism: "Replenish barrier lipids lost in the shower.",
            },
            Ingredient {
                name: "Glycerin",
                mechanism: "Holds water in the outer skin layer.",
            },
            Ingredient {
                name: "Mild non-ionic surfactants",
                mechanism: "Clean with minimal protein and lipid disruption.",
            },
        ],
    },
    OutcomeBundle {
        key: "clear-skin",
        title: "Clear skin: a clarifying wash for back and chest",
        category_label: "Clear skin",
        marketing: "Fewer spots where you can't reach.",
        fit_rule: "For oily body skin with breakouts on back or chest.",
        why_recommend: "Oil and breakouts on the torso respond to a wash that keeps pores clear. Salicylic acid works in the few minutes it sits on the skin.",
        why_not_others: "Rich moisturizing washes leave a film that clogs already busy pores.",
        not_for: &[
            "Very dry skin: acids can tighten further.",
        ],
        usage: "Let the lather sit on breakout areas for a minute before rinsing.",
        ingredients: &[
            Ingredient {
                name: "Salicylic acid",
                mechanism: "Oil-soluble exfoliant that clears pores.",
            },
            Ingredient {
                name: "Niacinamide",
                mechanism: "Balances oil and calms post-breakout marks.",
            },
        ],
    },
    OutcomeBundle {
        key: "smooth-renewal",
        title: "Smooth renewal: gentle resurfacing for rough bumps",
        category_label: "Smooth renewal",
        marketing: "Softer arms without a scrub.",
        fit_rule: "For rough bumps on arms or thighs in skin that tolerates acids.",
        why_recommend: "Rough bumps are trapped keratin. A lactic acid or urea wash loosens it a little every shower instead of scrubbing it off.",
        why_not_others: "Physical scrubs irritate and plain moisturizing washes do not move the buildup.",
        not_for: &[
            "Reactive skin: start with a soothing wash first.",
        ],
        usage: "Use daily on rough areas and follow with a plain moisturizer.",
        ingredients: &[
            Ingredient {
                name: "Lactic acid",
                mechanism: "Loosens keratin buildup while hydrating.",
            },
            Ingredient {
                name: "Urea",
                mechanism: "Softens rough patches and binds water.",
            },
        ],
    },
    OutcomeBundle {
        key: "barrier-moisture",
        title: "Barrier moisture: cleans without the tight feeling",
        category_label: "Barrier moisture",
        marketing: "Clean, then comfortable.",
        fit_rule: "For dry skin, dry climates, or anyone who wants a soft finish.",
        why_recommend: "Your answers point at moisture loss. A lipid-replenishing wash leaves enough behind that skin stays comfortable after towelling off.",
        why_not_others: "Fresh, squeaky washes strip the lipids you are short on.",
        not_for: &[
            "Very oily or breakout-prone torsos: may feel heavy.",
        ],
        usage: "Short, warm (not hot) showers and pat dry.",
        ingredients: &[
            Ingredient {
                name: "Ceramides / cholesterol",
                mechanism: "Restore the lipid barrier.",
            },
            Ingredient {
                name: "Shea butter",
                mechanism: "Leaves a light occlusive layer.",
            },
        ],
    },
    OutcomeBundle {
        key: "daily-fresh",
        title: "Daily fresh: the easy everyday wash",
        category_label: "Daily fresh",
        marketing: "Quick rinse, clean feel, nothing to think about.",
        fit_rule: "For tolerant, balanced skin without a specific goal.",
        why_recommend: "Nothing in your answers calls for a functional wash, so a clean-rinsing, low-fragrance everyday wash is the safest single pick.",
        why_not_others: "Functional washes solve problems you do not have.",
        not_for: &[
            "Persistent dryness or breakouts: pick a targeted wash instead.",
        ],
        usage: "One pump, lather, rinse.",
        ingredients: &[
            Ingredient {
                name: "Amino acid surfactants",
                mechanism: "Clean rinse with low irritation.",
            },
            Ingredient {
                name: "Glycerin",
                mechanism: "Keeps skin from feeling tight.",
            },
        ],
    },
];

static EXCLUSIONS: [Exclusion; 3] = [
    Exclusion {
        slot: "q2",
        value: "B",
        line: "If a new product ever causes a rash that spreads, stop and see a doctor.",
        outcomes: &[],
    },
    Exclusion {
        slot: "q3",
        value: "A",
        line: "If you want a rich, cushioning wash, this answer is not for you.",
        outcomes: &["rescue-soothing", "clear-skin", "smooth-renewal", "daily-fresh"],
    },
    Exclusion {
        slot: "q5",
        value: "A",
        line: "If you expect a film-like moisturized finish, this answer is not for you.",
        outcomes: &["rescue-soothing", "clear-skin", "smooth-renewal", "daily-fresh"],
    },
];

pub(super) static CONFIG: CategoryConfig = CategoryConfig {
    key: CategoryKey::BodyWash,
    label: "Body wash",
    slots: &SLOTS,
    guards: &GUARDS,
    fast_paths: &FAST_PATHS,
    rollbacks: &ROLLBACKS,
    outcomes: &OUTCOMES,
    exclusions: &EXCLUSIONS,
    usage: UsageModifier {
        slot: "q1",
        clauses: &[
            (
                "A",
                "In hot weather focus on sweaty areas and rinse within thirty seconds.",
            ),
            (
                "B",
                "In dry or cold weather keep showers short and moisturize within three minutes.",
            ),
        ],
        default_clause: "Keep the same amount every day and avoid switching products for one to two weeks.",
    },
    counterfactual: Counterfactual {
        template: "Your answers point at one clean, comfortable, low-effort direction, so we did not give you {alt}, and there is no runner-up.",
        alternatives: &[
            (Condition::OneOf("q2", &["A", "B"]), "a heavily fragranced, active-loaded line"),
            (Condition::Is("q5", "A"), "a film-forming moisturizing line"),
        ],
        default_alternative: "a stripping deep-cleansing line",
    },
    featured_product: None,
    fallback_product: Some(StaticProduct {
        brand: "CeraVe",
        name: "Gentle Moisturizing Body Wash",
        image: "",
    }),
};
