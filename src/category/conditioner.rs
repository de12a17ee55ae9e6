//! Conditioner questionnaire

use super::condition::Condition;
use super::config::*;
use super::key::CategoryKey;

static SLOTS: [SlotDef; 4] = [
    SlotDef {
        key: "target",
        prompt: "What do you want to fix first?",
        note: "One goal; the rest follows.",
        choices: &[
            ChoiceDef {
                value: "tangle",
                label: "Tangles",
                hint: "Hard to comb through",
                reason: "Tangles are your first problem, so slip and easy combing matter most.",
            },
            ChoiceDef {
                value: "frizz",
                label: "Frizz",
                hint: "Puffs up and flies away",
                reason: "Frizz is your first problem, so taming and smoothness matter most.",
            },
            ChoiceDef {
                value: "dry-ends",
                label: "Dry, split ends",
                hint: "Straw-like lengths",
                reason: "Dry, split ends are your first problem, so the lengths need repair.",
            },
            ChoiceDef {
                value: "flat-roots",
                label: "Flat roots",
                hint: "Hair clings to the scalp",
                reason: "Flat roots are your first problem, so nothing may weigh the hair down.",
            },
        ],
    },
    SlotDef {
        key: "hair",
        prompt: "What is your hair like?",
        note: "Length and condition.",
        choices: &[
            ChoiceDef {
                value: "short",
                label: "Short to chin length",
                hint: "Quick in, quick out",
                reason: "Your hair is short, so a light, fast-rinsing formula is enough.",
            },
            ChoiceDef {
                value: "mid-long",
                label: "Mid to long",
                hint: "Shoulder length or longer",
                reason: "Your hair is mid to long, so lasting smoothness matters.",
            },
            ChoiceDef {
                value: "long-damaged",
                label: "Long or treated",
                hint: "Colored, permed, bleached",
                reason: "Your hair is long or chemically treated, so repair and frizz control have to be balanced.",
            },
            ChoiceDef {
                value: "fine-flat",
                label: "Fine and flat",
                hint: "Goes limp easily",
                reason: "Your hair is fine and falls flat, so the formula has to stay light.",
            },
        ],
    },
    SlotDef {
        key: "use",
        prompt: "How do you apply it?",
        note: "Your real habit, not the ideal one.",
        choices: &[
            ChoiceDef {
                value: "tips-quick",
                label: "Ends only, rinse fast",
                hint: "Under a minute",
                reason: "You apply to the ends and rinse quickly, so it must work with short contact.",
            },
            ChoiceDef {
                value: "hold-1-3",
                label: "Leave 1-3 minutes",
                hint: "A short wait",
                reason: "You leave it on for one to three minutes, so it can release smoothness steadily.",
            },
            ChoiceDef {
                value: "more-for-smooth",
                label: "Lots, for extra slip",
                hint: "More is better",
                reason: "You use a lot for extra slip, so buildup has to be avoided.",
            },
            ChoiceDef {
                value: "touch-scalp",
                label: "It reaches the scalp",
                hint: "Hard to avoid",
                reason: "It tends to touch your scalp, so heavy residue has to be kept low.",
            },
        ],
    },
    SlotDef {
        key: "avoid",
        prompt: "What can't you stand?",
        note: "The deal breaker after rinsing.",
        choices: &[
            ChoiceDef {
                value: "still-rough",
                label: "Still rough after rinsing",
                hint: "Feels like nothing happened",
                reason: "You cannot stand hair that still feels rough, so real slip comes first.",
            },
            ChoiceDef {
                value: "next-day-flat",
                label: "Flat the next day",
                hint: "Volume gone overnight",
                reason: "You cannot stand flat hair the next day, so the light route comes first.",
            },
            ChoiceDef {
                value: "strong-fragrance",
                label: "Strong fragrance",
                hint: "Lingering perfume",
                reason: "You cannot stand strong fragrance, so scent is kept restrained.",
            },
            ChoiceDef {
                value: "residue-film",
                label: "Coated feeling",
                hint: "A film that won't rinse off",
                reason: "You cannot stand a coated feeling, so a clean rinse and light load come first.",
            },
        ],
    },
];

static GUARDS: [Guard; 5] = [
    Guard {
        route: "flat-lightweight",
        when: Condition::Any(&[
            Condition::Is("target", "flat-roots"),
            Condition::Is("hair", "fine-flat"),
        ]),
        outcome: "lightweight-volume",
    },
    Guard {
        route: "next-day-lightweight",
        when: Condition::Is("avoid", "next-day-flat"),
        outcome: "lightweight-volume",
    },
    Guard {
        route: "damage-repair",
        when: Condition::Any(&[
            Condition::Is("hair", "long-damaged"),
            Condition::Is("target", "dry-ends"),
        ]),
        outcome: "repair-mask",
    },
    Guard {
        route: "frizz-smooth",
        when: Condition::Is("target", "frizz"),
        outcome: "smoothing-frizz",
    },
    Guard {
        route: "detangling-daily",
        when: Condition::Always,
        outcome: "detangling-daily",
    },
];

static OUTCOMES: [OutcomeBundle; 4] = [
    OutcomeBundle {
        key: "lightweight-volume",
        title: "Lightweight volume: slip without the weight",
        category_label: "Lightweight volume",
        marketing: "Smooth ends, roots that stay up.",
        fit_rule: "For fine or flat hair that still needs detangling.",
        why_recommend: "A silicone-light conditioner with low-deposit conditioning agents detangles the lengths without collapsing the roots.",
        why_not_others: "Rich masks and heavy smoothing creams are exactly what makes fine hair go limp.",
        not_for: &["Very coarse or heavily damaged hair: may not feel nourishing enough."],
        usage: "Mid-lengths to ends only, rinse thoroughly.",
        ingredients: &[
            Ingredient {
                name: "Behentrimonium chloride (low dose)",
                mechanism: "Detangles with minimal deposit.",
            },
            Ingredient {
                name: "Hydrolyzed wheat protein",
                mechanism: "Adds body to each strand.",
            },
        ],
    },
    OutcomeBundle {
        key: "smoothing-frizz",
        title: "Smoothing frizz: calm, sleek lengths",
        category_label: "Smoothing frizz",
        marketing: "Frizz under control, movement intact.",
        fit_rule: "For frizz-prone hair without major damage.",
        why_recommend: "Frizz is water imbalance in the strand. Humectants plus a light smoothing film keep moisture steady so hair lies flat.",
        why_not_others: "Ultra-light rinses cannot hold frizz down; heavy repair masks are more than you need.",
        not_for: &["Very fine hair: may feel heavy."],
        usage: "Comb through while in the hair, then rinse with cool water.",
        ingredients: &[
            Ingredient {
                name: "Amodimethicone",
                mechanism: "Targets damaged spots and smooths the cuticle.",
            },
            Ingredient {
                name: "Glycerin",
                mechanism: "Keeps moisture balanced inside the strand.",
            },
        ],
    },
    OutcomeBundle {
        key: "repair-mask",
        title: "Repair: rebuild treated lengths",
        category_label: "Repair",
        marketing: "Stronger ends, fewer splits.",
        fit_rule: "For long, colored, permed or dry-ended hair.",
        why_recommend: "Chemical treatments lift the cuticle and strip lipids. Proteins and lipids fill those gaps so lengths break less and feel softer.",
        why_not_others: "Light rinses do not stay long enough to repair anything.",
        not_for: &["Fine, flat hair: will weigh it down."],
        usage: "Leave on for two to three minutes on the lengths.",
        ingredients: &[
            Ingredient {
                name: "Hydrolyzed keratin",
                mechanism: "Fills protein gaps.",
            },
            Ingredient {
                name: "Plant oils / 18-MEA",
                mechanism: "Restore the protective lipid layer.",
            },
        ],
    },
    OutcomeBundle {
        key: "detangling-daily",
        title: "Daily detangling: the easy everyday conditioner",
        category_label: "Daily detangling",
        marketing: "Combs through, rinses clean.",
        fit_rule: "For healthy hair whose main need is easy combing.",
        why_recommend: "Your hair is in good shape, so a balanced conditioner that detangles and rinses clean is the most reliable single pick.",
        why_not_others: "Repair and smoothing lines are heavier than your hair needs.",
        not_for: &["Heavily damaged hair: choose a repair line."],
        usage: "A small amount on the lengths, rinse after thirty seconds.",
        ingredients: &[Ingredient {
            name: "Cetearyl alcohol / mild conditioning agents",
            mechanism: "Slip and softness without buildup.",
        }],
    },
];

static EXCLUSIONS: [Exclusion; 8] = [
    Exclusion {
        slot: "hair",
        value: "short",
        line: "If you want mask-level deep repair, this answer is not for you.",
        outcomes: &["lightweight-volume", "smoothing-frizz", "detangling-daily"],
    },
    Exclusion {
        slot: "hair",
        value: "mid-long",
        line: "If you want something so light you can barely feel it, this answer is not for you.",
        outcomes: &["smoothing-frizz", "repair-mask", "detangling-daily"],
    },
    Exclusion {
        slot: "hair",
        value: "long-damaged",
        line: "If your hair is damaged enough to need intensive treatment, this answer is not for you.",
        outcomes: &["lightweight-volume", "smoothing-frizz", "detangling-daily"],
    },
    Exclusion {
        slot: "hair",
        value: "fine-flat",
        line: "If you only want a thick, oily, coating feel, this answer is not for you.",
        outcomes: &[],
    },
    Exclusion {
        slot: "avoid",
        value: "still-rough",
        line: "If you expect one use to change your hair quality, this answer is not for you.",
        outcomes: &[],
    },
    Exclusion {
        slot: "avoid",
        value: "next-day-flat",
        line: "If you would trade volume for extremely heavy slip, this answer is not for you.",
        outcomes: &[],
    },
    Exclusion {
        slot: "avoid",
        value: "strong-fragrance",
        line: "If you love a lingering scent, this answer is not for you.",
        outcomes: &[],
    },
    Exclusion {
        slot: "avoid",
        value: "residue-film",
        line: "If you like a strong coating feel, this answer is not for you.",
        outcomes: &[],
    },
];

pub(super) static CONFIG: CategoryConfig = CategoryConfig {
    key: CategoryKey::Conditioner,
    label: "Conditioner",
    slots: &SLOTS,
    guards: &GUARDS,
    fast_paths: &[],
    rollbacks: &[],
    outcomes: &OUTCOMES,
    exclusions: &EXCLUSIONS,
    usage: UsageModifier {
        slot: "use",
        clauses: &[
            (
                "tips-quick",
                "Apply only from mid-lengths to ends, leave thirty to sixty seconds, rinse, and keep it off the scalp.",
            ),
            (
                "hold-1-3",
                "Leaving it one to three minutes is steadier; rinse until the slippery film is gone.",
            ),
        ],
        default_clause: "Start with a small amount and add more only if needed; clean rinsing and lightness come before extra slip.",
    },
    counterfactual: Counterfactual {
        template: "Your four answers point at effective slip, no flattening and easy routine use, so we did not give you {alt}, and there is no runner-up.",
        alternatives: &[
            (Condition::Is("hair", "fine-flat"), "a heavy repair line"),
            (Condition::Is("target", "frizz"), "an ultra-light quick-rinse line"),
        ],
        default_alternative: "a heavily scented, film-forming line",
    },
    featured_product: None,
    fallback_product: None,
};
