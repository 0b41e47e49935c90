//! English pluralization rule set
//!
//! A fixed, deterministic rule table: uncountable words, irregular pairs,
//! then suffix rules. Only the last word of a camelCase identifier is
//! inflected (`orderItem` → `orderItems`, `salesPerson` → `salesPeople`).

/// Words with no distinct plural form
const UNCOUNTABLE: &[&str] = &[
    "advice",
    "aircraft",
    "equipment",
    "feedback",
    "fish",
    "furniture",
    "hardware",
    "information",
    "knowledge",
    "luggage",
    "metadata",
    "money",
    "moose",
    "music",
    "news",
    "police",
    "research",
    "rice",
    "series",
    "sheep",
    "software",
    "species",
    "staff",
    "traffic",
    "weather",
    "deer",
];

/// Singular → plural pairs that no suffix rule covers
///
/// `f`/`fe` → `ves` only happens through this table.
const IRREGULAR: &[(&str, &str)] = &[
    ("alias", "aliases"),
    ("alumnus", "alumni"),
    ("appendix", "appendices"),
    ("atlas", "atlases"),
    ("bacterium", "bacteria"),
    ("bias", "biases"),
    ("buffalo", "buffaloes"),
    ("cactus", "cacti"),
    ("calf", "calves"),
    ("canvas", "canvases"),
    ("child", "children"),
    ("codex", "codices"),
    ("criterion", "criteria"),
    ("curriculum", "curricula"),
    ("datum", "data"),
    ("die", "dice"),
    ("dwarf", "dwarves"),
    ("echo", "echoes"),
    ("elf", "elves"),
    ("fez", "fezzes"),
    ("focus", "foci"),
    ("foot", "feet"),
    ("fungus", "fungi"),
    ("gas", "gases"),
    ("goose", "geese"),
    ("half", "halves"),
    ("hero", "heroes"),
    ("index", "indices"),
    ("iris", "irises"),
    ("knife", "knives"),
    ("leaf", "leaves"),
    ("lens", "lenses"),
    ("life", "lives"),
    ("loaf", "loaves"),
    ("louse", "lice"),
    ("man", "men"),
    ("matrix", "matrices"),
    ("medium", "media"),
    ("mouse", "mice"),
    ("nucleus", "nuclei"),
    ("ox", "oxen"),
    ("person", "people"),
    ("phenomenon", "phenomena"),
    ("potato", "potatoes"),
    ("quiz", "quizzes"),
    ("radius", "radii"),
    ("scarf", "scarves"),
    ("self", "selves"),
    ("shelf", "shelves"),
    ("stimulus", "stimuli"),
    ("syllabus", "syllabi"),
    ("thief", "thieves"),
    ("tomato", "tomatoes"),
    ("tooth", "teeth"),
    ("torpedo", "torpedoes"),
    ("vertex", "vertices"),
    ("veto", "vetoes"),
    ("volcano", "volcanoes"),
    ("wife", "wives"),
    ("wolf", "wolves"),
    ("woman", "women"),
];

/// Pluralize an identifier, inflecting only its last camelCase word
pub fn pluralize(word: &str) -> String {
    if word.is_empty() {
        return String::new();
    }

    let (head, tail) = word.split_at(last_word_start(word));
    let plural = pluralize_word(&tail.to_ascii_lowercase());
    format!("{}{}", head, restore_case(tail, &plural))
}

/// Byte index where the last camelCase word begins
fn last_word_start(word: &str) -> usize {
    let mut start = 0;
    let mut prev: Option<char> = None;
    for (idx, c) in word.char_indices() {
        if let Some(p) = prev {
            if c.is_ascii_uppercase() && (p.is_ascii_lowercase() || p.is_ascii_digit()) {
                start = idx;
            }
        }
        prev = Some(c);
    }
    start
}

fn restore_case(original: &str, plural: &str) -> String {
    let mut chars = original.chars();
    let Some(first) = chars.next() else {
        return plural.to_string();
    };

    if original.len() > 1 && original.chars().all(|c| !c.is_ascii_lowercase()) {
        return plural.to_ascii_uppercase();
    }

    if first.is_ascii_uppercase() {
        let mut out = String::with_capacity(plural.len());
        let mut plural_chars = plural.chars();
        if let Some(p) = plural_chars.next() {
            out.push(p.to_ascii_uppercase());
        }
        out.extend(plural_chars);
        return out;
    }

    plural.to_string()
}

/// Pluralize a single lowercase word
fn pluralize_word(word: &str) -> String {
    if UNCOUNTABLE.contains(&word) {
        return word.to_string();
    }

    for (singular, plural) in IRREGULAR {
        if word == *singular || word == *plural {
            return (*plural).to_string();
        }
    }

    if ["ss", "x", "z", "ch", "sh", "us"]
        .iter()
        .any(|suffix| word.ends_with(suffix))
    {
        return format!("{word}es");
    }

    // analysis → analyses, axis → axes
    if word.ends_with("sis") || word.ends_with("xis") {
        return format!("{}es", &word[..word.len() - 2]);
    }

    // Any other trailing `s` is taken as already plural
    if word.ends_with('s') {
        return word.to_string();
    }

    if let Some(stem) = word.strip_suffix('y') {
        let consonant_before = stem
            .chars()
            .last()
            .is_some_and(|c| !matches!(c, 'a' | 'e' | 'i' | 'o' | 'u'));
        if consonant_before || stem.ends_with("qu") {
            return format!("{stem}ies");
        }
    }

    format!("{word}s")
}
