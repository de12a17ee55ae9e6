//! Facial cleanser questionnaire

use super::condition::Condition;
use super::config::*;
use super::key::CategoryKey;

static SLOTS: [SlotDef; 4] = [
    SlotDef {
        key: "skin",
        prompt: "Which group describes your skin?",
        note: "Pick the one that fits most days.",
        choices: &[
            ChoiceDef {
                value: "oily-acne",
                label: "Oily, breakout-prone",
                hint: "Shine and clogged pores",
                reason: "You have oily, breakout-prone skin: fresh, but never by stripping oil away.",
            },
            ChoiceDef {
                value: "combo",
                label: "Combination",
                hint: "Oily T-zone, normal cheeks",
                reason: "You have combination skin: clean the T-zone without drying the cheeks.",
            },
            ChoiceDef {
                value: "dry-sensitive",
                label: "Dry or sensitive",
                hint: "Easily tight or red",
                reason: "You have dry, fragile skin: tolerance and comfort come first.",
            },
            ChoiceDef {
                value: "stable",
                label: "Stable",
                hint: "Rarely any trouble",
                reason: "Your skin is stable: low variation and easy to keep up.",
            },
        ],
    },
    SlotDef {
        key: "issue",
        prompt: "What bothers you most after cleansing?",
        note: "The single thing you would change.",
        choices: &[
            ChoiceDef {
                value: "oil-shine",
                label: "Shine comes back fast",
                hint: "Oily again by noon",
                reason: "Shine is your main concern, so a clean finish has to be balanced against oil rebound.",
            },
            ChoiceDef {
                value: "tight-after",
                label: "Tight after washing",
                hint: "Needs cream straight away",
                reason: "Tightness after washing is your concern, so skin has to stay comfortable once clean.",
            },
            ChoiceDef {
                value: "sting-red",
                label: "Stinging or redness",
                hint: "Reacts to most cleansers",
                reason: "Stinging and redness are your concern, so every irritant variable gets cut.",
            },
            ChoiceDef {
                value: "residue",
                label: "Sunscreen residue",
                hint: "Light makeup or SPF left behind",
                reason: "Residue is your concern, so cleansing efficiency and a clean rinse matter.",
            },
        ],
    },
    SlotDef {
        key: "scene",
        prompt: "When do you use it most?",
        note: "This tunes the usage advice.",
        choices: &[
            ChoiceDef {
                value: "morning-quick",
                label: "Quick morning wash",
                hint: "Under a minute",
                reason: "You mostly wash quickly in the morning: gentle, fast and predictable.",
            },
            ChoiceDef {
                value: "night-clean",
                label: "Evening cleanse",
                hint: "The thorough one",
                reason: "You mostly cleanse at night: complete but not excessive.",
            },
            ChoiceDef {
                value: "post-workout",
                label: "After a workout",
                hint: "Sweat and oil",
                reason: "You often wash after workouts: remove sweat fast without drying out.",
            },
            ChoiceDef {
                value: "after-sunscreen",
                label: "After sunscreen",
                hint: "Daily SPF wearer",
                reason: "You wash off sunscreen daily: remove residue and keep skin balanced.",
            },
        ],
    },
    SlotDef {
        key: "avoid",
        prompt: "What is a deal breaker?",
        note: "The one thing you will not accept.",
        choices: &[
            ChoiceDef {
                value: "over-clean",
                label: "Over-cleansing",
                hint: "Squeaky, stripped skin",
                reason: "You ruled out over-cleansing, so strong degreasing routes are off the table.",
            },
            ChoiceDef {
                value: "strong-fragrance",
                label: "Strong fragrance",
                hint: "Perfumed cleansers",
                reason: "You ruled out strong fragrance, so low-scent formulas come first.",
            },
            ChoiceDef {
                value: "low-foam",
                label: "No foam at all",
                hint: "Feels like it does nothing",
                reason: "You ruled out foamless cleansers, so some cleansing feedback stays.",
            },
            ChoiceDef {
                value: "complex-formula",
                label: "Complicated formulas",
                hint: "Long ingredient lists",
                reason: "You ruled out complicated formulas, so short, stable formulas come first.",
            },
        ],
    },
];

static GUARDS: [Guard; 6] = [
    Guard {
        route: "oily-shine-balance",
        when: Condition::All(&[
            Condition::Is("skin", "oily-acne"),
            Condition::Is("issue", "oil-shine"),
        ]),
        outcome: "oil-balance-foam",
    },
    Guard {
        route: "sting-barrier",
        when: Condition::Is("issue", "sting-red"),
        outcome: "barrier-minimal",
    },
    Guard {
        route: "residue-clean",
        when: Condition::Any(&[
            Condition::Is("issue", "residue"),
            Condition::Is("scene", "after-sunscreen"),
        ]),
        outcome: "sunscreen-residue",
    },
    Guard {
        route: "tight-gentle",
        when: Condition::Any(&[
            Condition::Is("issue", "tight-after"),
            Condition::Is("skin", "dry-sensitive"),
        ]),
        outcome: "amino-gentle",
    },
    Guard {
        route: "oily-foam",
        when: Condition::Is("skin", "oily-acne"),
        outcome: "oil-balance-foam",
    },
    Guard {
        route: "daily-mild",
        when: Condition::Always,
        outcome: "daily-mild",
    },
];

static ROLLBACKS: [RollbackRule; 1] = [RollbackRule {
    name: "tolerance-first",
    when: Condition::All(&[
        Condition::Is("skin", "dry-sensitive"),
        Condition::Any(&[
            Condition::Is("issue", "sting-red"),
            Condition::Is("avoid", "over-clean"),
        ]),
    ]),
    fallback: "barrier-minimal",
    line: "Your answers say tolerance comes first, so we rolled back to a gentle minimal cleanser instead of adding more cleansing stress.",
    narrative: "Fragile skin needs the fewest possible variables until it settles. A minimal, soap-free cleanser keeps the barrier intact while you find your footing.",
    counterfactual: "Your signals point at stabilizing tolerance first, so we deliberately rolled back to a gentle cleanser and offer no stronger alternative.",
    product: Some(StaticProduct {
        brand: "Avène",
        name: "Soothing Cleanser (minimal gentle line)",
        image: "",
    }),
}];

static OUTCOMES: [OutcomeBundle; 5] = [
    OutcomeBundle {
        key: "oil-balance-foam",
        title: "Oil-balance foam: fresh without stripping",
        category_label: "Oil-balance foam",
        marketing: "Clean skin that doesn't rebound into shine.",
        fit_rule: "For oily, breakout-prone skin that wants a fresh finish.",
        why_recommend: "A balanced foaming cleanser removes excess oil at a pace your skin does not fight back against, so shine returns more slowly.",
        why_not_others: "Creamy or oil cleansers leave residue on already oily skin; harsh gels trigger rebound oil.",
        not_for: &["Very dry or reactive skin."],
        usage: "Lather in the hands first and massage for twenty to thirty seconds.",
        ingredients: &[
            Ingredient {
                name: "Glutamate surfactants",
                mechanism: "Rich foam with a mild pH.",
            },
            Ingredient {
                name: "Zinc PCA",
                mechanism: "Helps regulate oil.",
            },
        ],
    },
    OutcomeBundle {
        key: "amino-gentle",
        title: "Amino gentle: cleanses and stays comfortable",
        category_label: "Amino gentle",
        marketing: "No tight feeling afterwards.",
        fit_rule: "For dry or tight-feeling skin that still wants a real cleanse.",
        why_recommend: "Amino acid surfactants clean at a skin-like pH and leave lipids in place, so you skip the post-wash tightness.",
        why_not_others: "Foaming oil-control cleansers remove the lipids your skin is short on.",
        not_for: &["Heavy makeup: pair with a dedicated remover."],
        usage: "Use a small amount and rinse with lukewarm water.",
        ingredients: &[
            Ingredient {
                name: "Sodium cocoyl glycinate",
                mechanism: "Gentle amino acid cleansing.",
            },
            Ingredient {
                name: "Glycerin",
                mechanism: "Keeps water in the skin after rinsing.",
            },
        ],
    },
    OutcomeBundle {
        key: "barrier-minimal",
        title: "Barrier minimal: the fewest-variables cleanser",
        category_label: "Barrier minimal",
        marketing: "Gentle enough for skin that reacts to everything.",
        fit_rule: "For stinging or reddened skin that needs to settle.",
        why_recommend: "When skin stings, every extra ingredient is a risk. A short, soap-free formula cleans without adding irritation.",
        why_not_others: "Any active or fragranced cleanser adds a variable your skin cannot handle right now.",
        not_for: &["Oily skin after a thorough clean: may feel too light."],
        usage: "Once a day is enough while skin is reactive.",
        ingredients: &[
            Ingredient {
                name: "Thermal spring water",
                mechanism: "Soothes on contact.",
            },
            Ingredient {
                name: "Mild non-ionic surfactants",
                mechanism: "Lift dirt with minimal barrier disruption.",
            },
        ],
    },
    OutcomeBundle {
        key: "sunscreen-residue",
        title: "Residue clean: takes sunscreen off in one pass",
        category_label: "Residue clean",
        marketing: "SPF off, skin comfortable.",
        fit_rule: "For daily sunscreen wearers and light makeup.",
        why_recommend: "A creamy cleanser with emollient esters dissolves filters and film-formers that a plain foam leaves behind.",
        why_not_others: "Gentle foams miss water-resistant sunscreen; double cleansing every day over-cleanses.",
        not_for: &["Full makeup: use a dedicated remover first."],
        usage: "Massage on dry skin for thirty seconds, then emulsify with water and rinse.",
        ingredients: &[
            Ingredient {
                name: "Emollient esters",
                mechanism: "Dissolve sunscreen filters.",
            },
            Ingredient {
                name: "Polyglyceryl emulsifiers",
                mechanism: "Help the cleanser rinse off completely.",
            },
        ],
    },
    OutcomeBundle {
        key: "daily-mild",
        title: "Daily mild: the dependable everyday cleanser",
        category_label: "Daily mild",
        marketing: "Nothing dramatic, nothing to worry about.",
        fit_rule: "For stable skin without a specific complaint.",
        why_recommend: "Your skin is steady, so a mild, well-balanced cleanser you can use morning and night is the safest single pick.",
        why_not_others: "Targeted cleansers solve problems you do not have.",
        not_for: &["Persistent breakouts: choose a targeted line."],
        usage: "Morning and night, one pump each time.",
        ingredients: &[Ingredient {
            name: "Mild mixed surfactants",
            mechanism: "Balanced everyday cleansing.",
        }],
    },
];

static EXCLUSIONS: [Exclusion; 8] = [
    Exclusion {
        slot: "issue",
        value: "oil-shine",
        line: "If you want a squeaky degreased feeling, this answer is not for you.",
        outcomes: &[],
    },
    Exclusion {
        slot: "issue",
        value: "tight-after",
        line: "If you want very strong cleansing power, this answer is not for you.",
        outcomes: &["oil-balance-foam", "amino-gentle", "barrier-minimal", "daily-mild"],
    },
    Exclusion {
        slot: "issue",
        value: "sting-red",
        line: "If stinging and redness keep getting worse, stop trying new products and see a doctor.",
        outcomes: &[],
    },
    Exclusion {
        slot: "issue",
        value: "residue",
        line: "If you wear heavy makeup, add a dedicated makeup remover step.",
        outcomes: &[],
    },
    Exclusion {
        slot: "avoid",
        value: "over-clean",
        line: "If you prefer a strong, intense clean, this answer is not for you.",
        outcomes: &[],
    },
    Exclusion {
        slot: "avoid",
        value: "strong-fragrance",
        line: "If you want a noticeably scented cleanser, this answer is not for you.",
        outcomes: &[],
    },
    Exclusion {
        slot: "avoid",
        value: "low-foam",
        line: "If you only accept an almost foamless, mild wash, this answer is not for you.",
        outcomes: &["oil-balance-foam", "sunscreen-residue", "daily-mild"],
    },
    Exclusion {
        slot: "avoid",
        value: "complex-formula",
        line: "If you want several stacked benefits, this answer is not for you.",
        outcomes: &[],
    },
];

pub(super) static CONFIG: CategoryConfig = CategoryConfig {
    key: CategoryKey::Cleanser,
    label: "Facial cleanser",
    slots: &SLOTS,
    guards: &GUARDS,
    fast_paths: &[],
    rollbacks: &ROLLBACKS,
    outcomes: &OUTCOMES,
    exclusions: &EXCLUSIONS,
    usage: UsageModifier {
        slot: "scene",
        clauses: &[
            (
                "morning-quick",
                "In the morning one gentle cleanse is enough; keep it to twenty or thirty seconds and rinse well.",
            ),
            (
                "after-sunscreen",
                "After sunscreen remove it properly first, then finish with the cleanser; do not cleanse twice.",
            ),
            (
                "post-workout",
                "After a workout cleanse sweat and oil promptly with a normal amount and do not scrub repeatedly.",
            ),
        ],
        default_clause: "At night cleanse once and thoroughly; a fixed product and rhythm stabilize skin fastest.",
    },
    counterfactual: Counterfactual {
        template: "Your four answers converge on enough cleansing, lasting comfort and a steady routine, so we did not give you {alt}, and there is no runner-up.",
        alternatives: &[
            (Condition::Is("issue", "oil-shine"), "a stripping degreasing line"),
            (Condition::Is("issue", "residue"), "a complicated multi-step cleansing routine"),
        ],
        default_alternative: "a fragranced, irritating line",
    },
    featured_product: None,
    fallback_product: Some(StaticProduct {
        brand: "Freeplus",
        name: "Purifying Cleansing Cream",
        image: "",
    }),
};
