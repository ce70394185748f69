//! Built-in keyword lists.

pub const CHARACTERISTICS: &[&str] = &[
    "feel",
    "sound",
    "pressure",
    "speed",
    "weight",
    "tactile",
    "clicky",
    "linear",
    "force",
    "actuation",
    "smooth",
    "gritty",
    "scratchy",
    "consistent",
    "wobble",
    "mushy",
    "firm",
    "crisp",
    "grainy",
    "responsive",
    "stiff",
    "bouncy",
    "stable",
    "thocky",
    "clacky",
    "ping",
    "muted",
    "hollow",
    "loud",
    "quiet",
    "dampened",
    "high-pitched",
    "deep",
    "rattly",
    "satisfying",
    "resistance",
    "light",
    "heavy",
    "balanced",
    "soft",
    "bottom-out",
    "preload",
    "fast",
    "slow",
    "snappy",
    "sluggish",
    "quick actuation",
    "laggy",
    "delay",
    "lightweight",
    "hefty",
    "medium-weight",
    "balanced-weight",
    "feather-light",
    "heavy-handed",
    "bump",
    "pronounced bump",
    "subtle",
    "sharp",
    "feedback",
    "gradual",
    "sharp click",
    "audible",
    "noticeable click",
    "loud click",
    "smooth travel",
    "effortless",
    "fluid",
    "actuation force",
    "bottom-out force",
    "low-force",
    "high-force",
    "short actuation",
    "high actuation",
    "actuation distance",
    "actuation point",
    "force curve",
    "low actuation",
];

pub const SENTIMENT_WORDS: &[&str] = &[
    "good",
    "great",
    "bad",
    "excellent",
    "poor",
    "amazing",
    "terrible",
    "awesome",
    "disappointing",
    "okay",
    "meh",
    "fantastic",
    "satisfying",
    "premium",
    "buttery",
    "smooth",
    "flawless",
    "responsive",
    "top-notch",
    "impressive",
    "comfortable",
    "durable",
    "refined",
    "precise",
    "pleasing",
    "well-made",
    "perfect",
    "high-quality",
    "decent",
    "average",
    "not bad",
    "standard",
    "usable",
    "passable",
    "okayish",
    "so-so",
    "fine",
    "mediocre",
    "underwhelming",
    "lackluster",
    "frustrating",
    "inconsistent",
    "subpar",
    "uncomfortable",
    "weak",
    "annoying",
    "sluggish",
    "unsatisfying",
    "noisy",
    "disappointing",
];

pub const SWITCH_RELATED: &[&str] = &[
    "switch",
    "keyboard",
    "key",
    "typing",
    "mechanical",
    "keycaps",
    "stem",
    "spring",
    "housing",
    "plate",
    "stabilizer",
    "hotswap",
    "PCB",
    "travel distance",
    "debounce",
    "pre-travel",
    "post-travel",
    "ergonomics",
    "accuracy",
    "input",
    "keystroke",
    "typing experience",
    "typing feel",
    "keypress",
    "input lag",
    "rollover",
    "ghosting",
    "membrane",
    "optical switch",
    "hall effect",
    "MX-style",
    "Alps",
    "Topre",
    "Cherry MX",
    "Gateron",
    "Kailh",
    "Outemu",
    "Romer-G",
    "Zealios",
    "Box switches",
    "Holy Panda",
    "Speed switches",
    "Silent switches",
];
