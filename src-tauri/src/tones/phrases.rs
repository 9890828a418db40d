//! Canned decline phrases per tone
//!
//! Used when remote generation is unavailable or fails. Custom tones have no
//! list of their own and borrow the default tone's phrases.

use crate::config::DEFAULT_TONE_ID;

const SARCASTIC: &[&str] = &[
    "I plan on staring at a blank wall that day. Sounds more fun.",
    "My horoscope said to avoid bad ideas today.",
    "I would, but I don't want to.",
    "Let me check my schedule... Yep, says 'No' all day.",
];

const PETTY: &[&str] = &[
    "I love that confidence for you, but absolutely not.",
    "Oh, honey. No.",
    "Funny how you thought I'd say yes.",
    "I'd love to help, but I don't want to lie to you.",
    "Bless your heart for asking.",
];

const GENZ: &[&str] = &[
    "Bestie, absolutely not. 💀",
    "It's giving rejection.",
    "Naur.",
    "I fear that is a flop. Left on read.",
    "Respectfully? No.",
];

const DRAMATIC: &[&str] = &[
    "You ask this of me? On the day of my cat's half-birthday?!",
    "My spirit weeps at the very thought!",
    "Heavens no! The stars have aligned against us!",
    "I would rather walk on Legos in the dark!",
];

const OLD_ENGLISH: &[&str] = &[
    "I bid thee a firm farewell on this matter.",
    "Nay, sir! A thousand times, nay!",
    "I find myself disinclined to acquiesce.",
    "Good day. I said, GOOD DAY.",
];

// Not offered in the catalog right now, kept so it can be re-enabled.
const GHOST: &[&str] = &[
    "...",
    "*Read 12:45 PM*",
    "who is this?",
    "Error 404: Interest not found.",
];

/// Phrases dedicated to `tone_id`, if it has any
pub fn fallback_phrases(tone_id: &str) -> Option<&'static [&'static str]> {
    match tone_id {
        "sarcastic" => Some(SARCASTIC),
        "petty" => Some(PETTY),
        "genz" => Some(GENZ),
        "dramatic" => Some(DRAMATIC),
        "oldenglish" => Some(OLD_ENGLISH),
        "ghost" => Some(GHOST),
        _ => None,
    }
}

/// Phrases for `tone_id`, degrading to the default tone's list
pub fn phrases_or_default(tone_id: &str) -> &'static [&'static str] {
    fallback_phrases(tone_id)
        .or_else(|| fallback_phrases(DEFAULT_TONE_ID))
        .unwrap_or(SARCASTIC)
}
