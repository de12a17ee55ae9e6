//! Hair wash questionnaire

use super::condition::Condition;
use super::config::*;
use super::key::CategoryKey;

static SLOTS: [SlotDef; 4] = [
    SlotDef {
        key: "scalp",
        prompt: "How does your scalp behave?",
        note: "Think of the day after washing, not right after the shower.",
        choices: &[
            ChoiceDef {
                value: "very-oily",
                label: "Oily within a day",
                hint: "Flat and greasy if you skip a single wash",
                reason: "Your scalp turns oily within a day, so the base has to clean oil off reliably.",
            },
            ChoiceDef {
                value: "oily",
                label: "Oily by day two",
                hint: "Washing every other day just about works",
                reason: "Your scalp is on the oily side, so the base stays fresh without stripping.",
            },
            ChoiceDef {
                value: "normal",
                label: "Balanced",
                hint: "Two or three days between washes is fine",
                reason: "Your scalp is balanced, so nothing needs to be pushed hard.",
            },
            ChoiceDef {
                value: "dry-sensitive",
                label: "Dry or sensitive",
                hint: "Tight, red or stinging after washing",
                reason: "Your scalp is dry or sensitive, so tolerance comes before any extra function.",
            },
        ],
    },
    SlotDef {
        key: "issue",
        prompt: "What bothers you most right now?",
        note: "Pick the one you would fix first.",
        choices: &[
            ChoiceDef {
                value: "flat-oily",
                label: "Flat and greasy roots",
                hint: "Volume is gone by the afternoon",
                reason: "Flat, greasy roots are your main pain point, so lift and a clean finish matter most.",
            },
            ChoiceDef {
                value: "itch-dandruff",
                label: "Itch and flakes",
                hint: "Visible flakes that keep coming back",
                reason: "Itch with flakes points at a fungal imbalance, which needs an active, not just a wash.",
            },
            ChoiceDef {
                value: "dry-frizz",
                label: "Dry, frizzy lengths",
                hint: "Colored, permed or breaking ends",
                reason: "Dry, frizzy lengths mean the hair fiber itself needs repair.",
            },
            ChoiceDef {
                value: "none",
                label: "Nothing in particular",
                hint: "Just want a reliable daily wash",
                reason: "No specific complaint, so a steady daily routine is the goal.",
            },
        ],
    },
    SlotDef {
        key: "scene",
        prompt: "When do you usually wash?",
        note: "This only changes how to use the product, not which one.",
        choices: &[
            ChoiceDef {
                value: "rush-morning",
                label: "Rushed mornings",
                hint: "Wash and go",
                reason: "You wash on rushed mornings, so it has to work in a single quick pass.",
            },
            ChoiceDef {
                value: "daily-commute",
                label: "Evenings after the commute",
                hint: "Regular evening routine",
                reason: "You wash in a regular evening routine, so consistency matters more than speed.",
            },
            ChoiceDef {
                value: "post-workout",
                label: "After a workout",
                hint: "Sweat and frequent washing",
                reason: "You often wash after workouts, so frequent washing must stay gentle on the scalp.",
            },
        ],
    },
    SlotDef {
        key: "avoid",
        prompt: "What would you rather avoid?",
        note: "Pick none if nothing is a deal breaker.",
        choices: &[
            ChoiceDef {
                value: "strong-fragrance",
                label: "Strong fragrance",
                hint: "Scent that lingers all day",
                reason: "You ruled out strong fragrance, so low-scent formulas come first.",
            },
            ChoiceDef {
                value: "high-cleansing",
                label: "Harsh cleansing",
                hint: "Squeaky, stripped feeling",
                reason: "You ruled out harsh cleansing, so the wash must stay comfortable even when it cleans well.",
            },
            ChoiceDef {
                value: "none",
                label: "Nothing",
                hint: "Open to any direction",
                reason: "No deal breakers, so the decision follows your other answers directly.",
            },
        ],
    },
];

static GUARDS: [Guard; 6] = [
    Guard {
        route: "fast-anti-dandruff",
        when: Condition::Is("issue", "itch-dandruff"),
        outcome: "anti-dandruff",
    },
    Guard {
        route: "sensitive-soothe",
        when: Condition::Is("scalp", "dry-sensitive"),
        outcome: "gentle-soothing",
    },
    Guard {
        route: "oil-flat-volume",
        when: Condition::All(&[
            Condition::OneOf("scalp", &["very-oily", "oily"]),
            Condition::Is("issue", "flat-oily"),
        ]),
        outcome: "clarifying-volume",
    },
    Guard {
        route: "dry-frizz-repair",
        when: Condition::Is("issue", "dry-frizz"),
        outcome: "deep-repair",
    },
    Guard {
        route: "heavy-oil-clarify",
        when: Condition::Is("scalp", "very-oily"),
        outcome: "clarifying-volume",
    },
    Guard {
        route: "daily-balance",
        when: Condition::Always,
        outcome: "daily-balance",
    },
];

static FAST_PATHS: [FastPathRule; 1] = [FastPathRule {
    name: "dandruff-itch",
    requires: &["scalp", "issue"],
    when: Condition::Is("issue", "itch-dandruff"),
}];

static OUTCOMES: [OutcomeBundle; 5] = [
    OutcomeBundle {
        key: "clarifying-volume",
        title: "Clarifying volume: blotting paper for your scalp",
        category_label: "Clarifying volume",
        marketing: "Clean roots that stay lifted until evening.",
        fit_rule: "For oily scalps with flat roots, or anyone whose first priority is controlling oil.",
        why_recommend: "Excess sebum is what flattens your roots. This line cleans stubborn oil with a stronger base, then zinc salts and salicylic acid slow oil production so volume lasts longer.",
        why_not_others: "Moisturizing or purely gentle washes barely touch a heavy oil load; roots feel greasy again within hours.",
        not_for: &[
            "Dry scalps: may leave flaking or tightness.",
            "Open or eczema-prone scalp: strong cleansing adds irritation.",
        ],
        usage: "Wash twice: the first lather lifts surface oil, the second stays on the scalp for about a minute. Condition the ends.",
        ingredients: &[
            Ingredient {
                name: "Zinc PCA / zinc gluconate",
                mechanism: "Core oil control; dampens the signal that drives sebum production.",
            },
            Ingredient {
                name: "Sodium C14-16 olefin sulfonate",
                mechanism: "Efficient surfactant that removes stubborn oil.",
            },
            Ingredient {
                name: "Salicylic acid",
                mechanism: "Clears follicle openings and reduces oil plugs.",
            },
        ],
    },
    OutcomeBundle {
        key: "anti-dandruff",
        title: "Anti-dandruff: a targeted fix for the fungus",
        category_label: "Anti-dandruff",
        marketing: "Treat the cause of flakes, not just the flakes.",
        fit_rule: "For itch with flakes, whatever the oil level.",
        why_recommend: "Most dandruff tracks back to a yeast imbalance on the scalp. This line puts an antifungal active first instead of only washing visible flakes away.",
        why_not_others: "Ordinary shampoos rinse off visible flakes but leave the yeast load untouched, so flakes return within a day.",
        not_for: &[
            "Flake-free scalps: long-term frequent use can disturb the scalp flora.",
            "Open wounds on the scalp: treat the injury first.",
        ],
        usage: "Contact time is the point: leave it on the scalp for three to five minutes before rinsing.",
        ingredients: &[
            Ingredient {
                name: "Piroctone olamine",
                mechanism: "Broad antifungal that suppresses dandruff-related yeast.",
            },
            Ingredient {
                name: "Zinc pyrithione",
                mechanism: "Disrupts fungal membrane transport.",
            },
            Ingredient {
                name: "Salicylic acid / menthol",
                mechanism: "Softens scale and gives quick itch relief.",
            },
        ],
    },
    OutcomeBundle {
        key: "gentle-soothing",
        title: "Gentle soothing: a barrier for a stressed scalp",
        category_label: "Gentle soothing",
        marketing: "Calm first, then everything else.",
        fit_rule: "For red, stinging or reactive scalps, or anyone who wants low-irritation cleansing long term.",
        why_recommend: "When the scalp is already red or stinging, the first job is restoring tolerance, not cleaning harder. This line uses mild surfactants plus soothing actives.",
        why_not_others: "Oil-control and anti-dandruff lines raise the irritation threshold and keep pulling on a fragile barrier.",
        not_for: &[
            "Very oily hair: may not feel clean enough.",
            "Heavy styling product users: may not remove every residue.",
        ],
        usage: "Use lukewarm water around 37°C and a light touch. Stabilize comfort before adding any function.",
        ingredients: &[
            Ingredient {
                name: "APG / amino acid surfactants",
                mechanism: "Low-irritation cleansing that spares the natural lipid film.",
            },
            Ingredient {
                name: "Bisabolol / centella extract",
                mechanism: "Eases redness and stinging.",
            },
            Ingredient {
                name: "Panthenol / ceramides",
                mechanism: "Hydrates and supports barrier repair.",
            },
        ],
    },
    OutcomeBundle {
        key: "deep-repair",
        title: "Deep repair: filler for damaged strands",
        category_label: "Deep repair",
        marketing: "Stronger lengths that stop snapping.",
        fit_rule: "For dry or chemically treated lengths, including oily roots with damaged ends.",
        why_recommend: "Color and perm damage is broken cuticle structure. This line replenishes protein and lipids to seal gaps and lower breakage.",
        why_not_others: "Clarifying lines raise cleansing strength for volume, which dries damaged lengths further.",
        not_for: &[
            "Fine, flat hair: may weigh the roots down.",
            "Oily scalps when applied to the roots.",
        ],
        usage: "Focus on mid-lengths and ends; with oily roots, wash the scalp and the lengths separately.",
        ingredients: &[
            Ingredient {
                name: "Hydrolyzed keratin / silk protein",
                mechanism: "Fills protein gaps and improves strength.",
            },
            Ingredient {
                name: "18-MEA / plant lipids",
                mechanism: "Rebuilds the water-repellent layer for shine and slip.",
            },
            Ingredient {
                name: "Polyquaternium-10",
                mechanism: "Neutralizes charge, reducing static and tangles.",
            },
        ],
    },
    OutcomeBundle {
        key: "daily-balance",
        title: "Daily balance: the steady everyday wash",
        category_label: "Daily balance",
        marketing: "Clean enough, comfortable, easy to stick with.",
        fit_rule: "For balanced scalps without a pressing complaint.",
        why_recommend: "Nothing in your answers calls for a functional line, so a mild, well-rounded wash you can use every day is the most reliable choice.",
        why_not_others: "Functional lines solve problems you do not have and add irritation you do not need.",
        not_for: &[
            "Persistent dandruff or scalp inflammation: use a targeted line.",
        ],
        usage: "One lather, massage the scalp for thirty seconds, rinse well.",
        ingredients: &[
            Ingredient {
                name: "Amino acid surfactants",
                mechanism: "Mild everyday cleansing.",
            },
            Ingredient {
                name: "Panthenol",
                mechanism: "Keeps scalp and hair hydrated.",
            },
        ],
    },
];

static EXCLUSIONS: [Exclusion; 3] = [
    Exclusion {
        slot: "avoid",
        value: "high-cleansing",
        line: "If even a double wash feels too stripping, alternate with a gentle wash instead.",
        outcomes: &["clarifying-volume", "anti-dandruff", "daily-balance"],
    },
    Exclusion {
        slot: "avoid",
        value: "strong-fragrance",
        line: "If you want a scent that lingers all day, this answer is not for you.",
        outcomes: &[],
    },
    Exclusion {
        slot: "scalp",
        value: "dry-sensitive",
        line: "If redness keeps getting worse, stop trying new products and see a dermatologist.",
        outcomes: &[],
    },
];

pub(super) static CONFIG: CategoryConfig = CategoryConfig {
    key: CategoryKey::HairWash,
    label: "Hair wash",
    slots: &SLOTS,
    guards: &GUARDS,
    fast_paths: &FAST_PATHS,
    rollbacks: &[],
    outcomes: &OUTCOMES,
    exclusions: &EXCLUSIONS,
    usage: UsageModifier {
        slot: "scene",
        clauses: &[
            (
                "rush-morning",
                "On rushed mornings one focused lather is enough: thirty seconds on the scalp, then rinse thoroughly.",
            ),
            (
                "post-workout",
                "After workouts rinse sweat off first and keep the lather short so frequent washing stays gentle.",
            ),
        ],
        default_clause: "Keep the same product and rhythm for two weeks before judging the result.",
    },
    counterfactual: Counterfactual {
        template: "Your answers converge on one direction, so we did not give you {alt}, and there is no runner-up.",
        alternatives: &[
            (Condition::OneOf("scalp", &["very-oily", "oily"]), "a rich moisturizing line"),
            (Condition::Is("issue", "dry-frizz"), "a stripping oil-control line"),
            (Condition::Is("scalp", "dry-sensitive"), "a high-strength functional line"),
        ],
        default_alternative: "a heavily fragranced line",
    },
    featured_product: Some("db1422ec-6263-45cc-966e-0ee9292fd8f1"),
    fallback_product: Some(StaticProduct {
        brand: "Dove",
        name: "Airy Volume Moisture Shampoo (Japan edition)",
        image: "",
    }),
};
