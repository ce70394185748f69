//! Sample reviews with their expected scores at a neutral base score of 5.0 (logit 0).

pub struct SampleReview {
    pub text: &'static str,
    pub expected: f64,
}

pub const NEUTRAL_LOGIT: f32 = 0.0;

pub const SAMPLE_REVIEWS: &[SampleReview] = &[
    SampleReview {
        text: "This is a great feeling switch! I like how fast and responsive it is. Love the sound of it.",
        expected: 9.0,
    },
    SampleReview {
        text: "These switches feel great! Nice tactile bump and not too loud. Perfect for office use.",
        expected: 9.0,
    },
    SampleReview {
        text: "Clicky and satisfying. The actuation force is just right for me. Highly recommend!",
        expected: 3.0,
    },
    SampleReview {
        text: "Meh, they're okay I guess.",
        expected: 4.0,
    },
    SampleReview {
        text: "I bought a new keyboard.",
        expected: 4.0,
    },
    SampleReview {
        text: "The weather is nice today.",
        expected: 1.0,
    },
    SampleReview {
        text: "I love pizza!",
        expected: 1.0,
    },
    SampleReview {
        text: "This switch is terrible. It's too loud and feels mushy. The actuation point is inconsistent and it's just not pleasant to type on at all.",
        expected: 9.0,
    },
    SampleReview {
        text: "Smooth linear feel with a slight bump at the bottom. Great for gaming and typing. The sound is a bit louder than I expected, but still acceptable for office use.",
        expected: 9.0,
    },
    SampleReview {
        text: "These switches feel amazing. The tactile bump is smooth but pronounced, giving excellent feedback while typing. The sound is a deep, satisfying thock without being too loud, and the weight feels just right for extended typing sessions.",
        expected: 9.0,
    },
    SampleReview {
        text: "The weather was really nice today. I went for a walk and enjoyed the sunshine. Highly recommend walking in good weather!",
        expected: 3.2,
    },
    SampleReview {
        text: "The Gateron Browns offer a great balance between tactility and smoothness. They\u{2019}re perfect for both typing and gaming, and the subtle bump is ideal if you prefer something quieter than clicky switches.",
        expected: 9.0,
    },
];
