//! Built-in MBI-SS question wording for both variants

pub(super) const STANDARD_EMOTIONAL_EXHAUSTION: &[&str] = &[
    "I feel emotionally drained by my studies.",
    "I feel used up at the end of a day at university.",
    "I feel tired when I get up in the morning and have to face another day at university.",
    "Studying or attending class is a strain for me.",
    "I feel burned out from my studies.",
];

pub(super) const STANDARD_CYNICISM: &[&str] = &[
    "I have become less interested in my studies since my enrollment at university.",
    "I have become more cynical about the potential usefulness of my studies.",
    "I doubt the significance of my studies.",
    "I just want to get my degree and get out.",
];

pub(super) const STANDARD_ACADEMIC_EFFICACY: &[&str] = &[
    "I can effectively solve the problems that arise in my studies.",
    "I believe that I make an effective contribution to the classes that I attend.",
    "In my opinion, I am a good student.",
    "I feel stimulated when I achieve my study goals.",
    "During class I feel confident that I am effective in getting things done.",
    "I am proud of my academic accomplishments.",
];

pub(super) const EXTENDED_EMOTIONAL_EXHAUSTION: &[&str] = &[
    "My coursework leaves me feeling emotionally drained.",
    "By the end of a university day I feel completely used up.",
    "I already feel tired in the morning when I think about another day of classes.",
    "Attending lectures and studying feels like a strain.",
    "I feel burned out by my degree program.",
];

pub(super) const EXTENDED_CYNICISM: &[&str] = &[
    "Since starting university I have lost interest in my studies.",
    "I have grown cynical about whether my studies will be useful.",
    "I question whether my studies mean anything.",
    "All I want is to finish my degree and leave.",
];

pub(super) const EXTENDED_ACADEMIC_EFFICACY: &[&str] = &[
    "I handle the problems that come up in my studies effectively.",
    "I contribute effectively in the classes I attend.",
    "I consider myself a good student.",
    "Reaching my study goals motivates me.",
    "In class I feel confident I can get things done.",
    "I take pride in what I have achieved academically.",
];
