//! Body lotion questionnaire

use super::condition::Condition;
use super::config::*;
use super::key::CategoryKey;

const DRY_WEATHER_OR_SKIN: Condition = Condition::Any(&[
    Condition::Is("group", "dry-tight"),
    Condition::Is("scene", "dry-cold"),
]);

const AVOIDS_STICKY: Condition = Condition::Is("avoid", "sticky-greasy");

static SLOTS: [SlotDef; 4] = [
    SlotDef {
        key: "group",
        prompt: "Which group describes your body skin?",
        note: "The state it is in most weeks.",
        choices: &[
            ChoiceDef {
                value: "dry-tight",
                label: "Dry and tight",
                hint: "Pulls after showering",
                reason: "Your skin runs dry and tight, so comfort and stability come back first.",
            },
            ChoiceDef {
                value: "rough-dull",
                label: "Rough and dull",
                hint: "Uneven texture",
                reason: "Your skin feels rough and dull, so smoother, finer texture is the goal.",
            },
            ChoiceDef {
                value: "sensitive-red",
                label: "Sensitive",
                hint: "Reddens easily",
                reason: "Your skin is sensitive, so low irritation, few variables and a steady barrier come first.",
            },
            ChoiceDef {
                value: "stable-maintain",
                label: "Stable",
                hint: "Just maintaining",
                reason: "Your skin is stable, so long-term, low-effort upkeep is the goal.",
            },
        ],
    },
    SlotDef {
        key: "issue",
        prompt: "Any specific trouble right now?",
        note: "Pick none if nothing stands out.",
        choices: &[
            ChoiceDef {
                value: "itch-flake",
                label: "Itching or flaking",
                hint: "Dry patches that scale",
                reason: "You have itch or flaking, which makes barrier stability the priority.",
            },
            ChoiceDef {
                value: "rough-patch",
                label: "Rough patches",
                hint: "Elbows, knees, shins",
                reason: "You have rough patches on elbows or knees, which need steady emollient cover.",
            },
            ChoiceDef {
                value: "dull-no-soft",
                label: "Not soft enough",
                hint: "Feels plain, not smooth",
                reason: "Your skin is simply not soft enough, so feel matters more than stacked actives.",
            },
            ChoiceDef {
                value: "none",
                label: "Nothing in particular",
                hint: "Just upkeep",
                reason: "No particular trouble, so one steady routine maintains your skin.",
            },
        ],
    },
    SlotDef {
        key: "scene",
        prompt: "When do you usually apply it?",
        note: "This tunes the usage advice.",
        choices: &[
            ChoiceDef {
                value: "after-shower",
                label: "After the shower",
                hint: "Skin still damp",
                reason: "You apply after showering, so the aim is to seal in water while skin is damp.",
            },
            ChoiceDef {
                value: "dry-cold",
                label: "Dry, cold season",
                hint: "Heating on",
                reason: "You mostly need it in dry, cold weather, so moisture has to last.",
            },
            ChoiceDef {
                value: "ac-room",
                label: "Air-conditioned rooms",
                hint: "Daytime top-ups",
                reason: "You sit in air-conditioning, so top-ups during the day must not feel sticky.",
            },
            ChoiceDef {
                value: "night-repair",
                label: "At night",
                hint: "Before bed",
                reason: "You apply at night, so skin should still feel good the next morning.",
            },
        ],
    },
    SlotDef {
        key: "avoid",
        prompt: "What do you want to avoid?",
        note: "Pick none if nothing is a deal breaker.",
        choices: &[
            ChoiceDef {
                value: "sticky-greasy",
                label: "Sticky or greasy",
                hint: "Clings to clothes",
                reason: "You ruled out sticky, greasy textures, so a clean, non-tacky finish comes first.",
            },
            ChoiceDef {
                value: "strong-fragrance",
                label: "Strong fragrance",
                hint: "Heavy perfume",
                reason: "You ruled out strong fragrance, so scent stays restrained.",
            },
            ChoiceDef {
                value: "active-too-much",
                label: "Too many actives",
                hint: "Acids, retinoids, stacks",
                reason: "You ruled out stacked actives, so a minimal, stable formula comes first.",
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

static GUARDS: [Guard; 4] = [
    Guard {
        route: "itch-barrier",
        when: Condition::Is("issue", "itch-flake"),
        outcome: "ceramide-barrier",
    },
    Guard {
        route: "rough-smooth",
        when: Condition::Any(&[
            Condition::Is("issue", "rough-patch"),
            Condition::Is("group", "rough-dull"),
        ]),
        outcome: "urea-smoothing",
    },
    Guard {
        route: "dry-rich",
        when: Condition::All(&[DRY_WEATHER_OR_SKIN, Condition::Not(&AVOIDS_STICKY)]),
        outcome: "rich-moisture",
    },
    Guard {
        route: "light-daily",
        when: Condition::Always,
        outcome: "light-daily",
    },
];

static ROLLBACKS: [RollbackRule; 1] = [RollbackRule {
    name: "barrier-first",
    when: Condition::All(&[
        Condition::Is("group", "sensitive-red"),
        Condition::Any(&[
            Condition::Is("issue", "itch-flake"),
            Condition::Is("avoid", "active-too-much"),
        ]),
    ]),
    fallback: "ceramide-barrier",
    line: "Your answers show barrier stability comes first, so we rolled back to a minimal repair lotion; steady beats functional here.",
    narrative: "Sensitive skin that itches or dislikes actives needs a short, ceramide-based formula before anything else. Stabilize first, upgrade later.",
    counterfactual: "Your skin group and deal breakers both say stabilize before upgrading, so we deliberately rolled back to minimal repair and offer no functional alternative.",
    product: None,
}];

static OUTCOMES: [OutcomeBundle; 4] = [
    OutcomeBundle {
        key: "ceramide-barrier",
        title: "Ceramide barrier: the minimal repair lotion",
        category_label: "Ceramide barrier",
        marketing: "Calm, comfortable, nothing extra.",
        fit_rule: "For itchy, flaking or sensitive body skin.",
        why_recommend: "Itch and flaking are signs of a leaky barrier. Ceramides, cholesterol and fatty acids in a short formula rebuild it without adding irritants.",
        why_not_others: "Urea and acid lotions can sting a compromised barrier; rich perfumed creams add variables.",
        not_for: &["Anyone chasing fast visible smoothing: this line is about stability."],
        usage: "Apply twice a day to dry areas.",
        ingredients: &[
            Ingredient {
                name: "Ceramides NP / AP / EOP",
                mechanism: "Restore barrier lipids.",
            },
            Ingredient {
                name: "Cholesterol",
                mechanism: "Completes the lipid ratio the barrier needs.",
            },
        ],
    },
    OutcomeBundle {
        key: "urea-smoothing",
        title: "Urea smoothing: softer rough patches",
        category_label: "Urea smoothing",
        marketing: "Elbows and knees you can forget about.",
        fit_rule: "For rough, dull or patchy body skin that tolerates actives.",
        why_recommend: "Urea softens built-up keratin and binds water at the same time, so rough patches smooth out within a couple of weeks.",
        why_not_others: "Plain moisturizers sit on top of roughness without changing it.",
        not_for: &["Broken or very sensitive skin: urea can sting."],
        usage: "Focus on rough areas once a day.",
        ingredients: &[
            Ingredient {
                name: "Urea 5-10%",
                mechanism: "Softens keratin and binds water.",
            },
            Ingredient {
                name: "Lactic acid",
                mechanism: "Gently loosens dull surface cells.",
            },
        ],
    },
    OutcomeBundle {
        key: "rich-moisture",
        title: "Rich moisture: long-lasting comfort",
        category_label: "Rich moisture",
        marketing: "Still comfortable the next morning.",
        fit_rule: "For dry, tight skin or dry, cold weather.",
        why_recommend: "Dry skin loses water fast. Butters and occlusives slow that loss so comfort lasts all day.",
        why_not_others: "Light gel lotions evaporate before dry skin gets any benefit.",
        not_for: &["Humid climates: may feel heavy."],
        usage: "Apply generously on damp skin.",
        ingredients: &[
            Ingredient {
                name: "Shea butter",
                mechanism: "Rich emollient that softens.",
            },
            Ingredient {
                name: "Petrolatum (low %)",
                mechanism: "Occlusive that slows water loss.",
            },
        ],
    },
    OutcomeBundle {
        key: "light-daily",
        title: "Light daily: the easy everyday lotion",
        category_label: "Light daily",
        marketing: "Absorbs fast, never sticky.",
        fit_rule: "For stable skin, humid settings, or anyone who hates a greasy feel.",
        why_recommend: "Your skin needs upkeep, not rescue. A fast-absorbing lotion you actually want to use daily does more than a richer one you skip.",
        why_not_others: "Rich creams and active lotions solve problems you do not have.",
        not_for: &["Very dry or flaking skin: choose a barrier line."],
        usage: "A thin layer once a day.",
        ingredients: &[
            Ingredient {
                name: "Glycerin / hyaluronic acid",
                mechanism: "Light hydration without stickiness.",
            },
            Ingredient {
                name: "Squalane",
                mechanism: "Non-greasy emollient.",
            },
        ],
    },
];

static EXCLUSIONS: [Exclusion; 8] = [
    Exclusion {
        slot: "issue",
        value: "itch-flake",
        line: "If a red rash persists, stop trying new products and see a doctor.",
        outcomes: &[],
    },
    Exclusion {
        slot: "issue",
        value: "rough-patch",
        line: "If you want a strong, fast exfoliating route, this answer is not for you.",
        outcomes: &[],
    },
    Exclusion {
        slot: "issue",
        value: "dull-no-soft",
        line: "If you want a high-function, high-sensation experience, this answer is not for you.",
        outcomes: &[],
    },
    Exclusion {
        slot: "issue",
        value: "none",
        line: "If you want dramatic short-term results, this answer is not for you.",
        outcomes: &[],
    },
    Exclusion {
        slot: "avoid",
        value: "sticky-greasy",
        line: "If you love a heavy, oily, coating feel, this answer is not for you.",
        outcomes: &[],
    },
    Exclusion {
        slot: "avoid",
        value: "strong-fragrance",
        line: "If you want a noticeably scented lotion, this answer is not for you.",
        outcomes: &[],
    },
    Exclusion {
        slot: "avoid",
        value: "active-too-much",
        line: "If you want several stacked actives, this answer is not for you.",
        outcomes: &[],
    },
    Exclusion {
        slot: "avoid",
        value: "none",
        line: "If you only accept an almost weightless texture, this answer is not for you.",
        outcomes: &["ceramide-barrier", "urea-smoothing", "rich-moisture"],
    },
];

pub(super) static CONFIG: CategoryConfig = CategoryConfig {
    key: CategoryKey::Lotion,
    label: "Body lotion",
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
                "after-shower",
                "Apply within three minutes of showering, limbs and rough areas first, then a little everywhere else.",
            ),
            (
                "ac-room",
                "In the daytime one thin layer is enough; top up only where skin feels tight.",
            ),
            (
                "dry-cold",
                "In dry, cold weather apply morning and night, elbows, knees and shins first; consistency beats switching.",
            ),
        ],
        default_clause: "At night you can use a little more than in the day; use it steadily for one to two weeks before judging.",
    },
    counterfactual: Counterfactual {
        template: "Your four answers converge on steady moisture, low load and easy upkeep, so we did not give you {alt}, and there is no runner-up.",
        alternatives: &[
            (AVOIDS_STICKY, "a heavy, oily line"),
            (Condition::Is("avoid", "active-too-much"), "a multi-active functional line"),
        ],
        default_alternative: "a heavily fragranced line",
    },
    featured_product: None,
    fallback_product: None,
};
