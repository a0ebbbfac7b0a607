//! Supportive message catalog and selection.

use rand::prelude::*;
use rand_pcg::Mcg128Xsl64;

/// Built-in supportive messages shown on the care page.
pub const SUPPORT_MESSAGES: &[&str] = &[
    "You are stronger than you think. This will pass. 💜",
    "It's okay to rest. Your body needs care right now.",
    "You deserve compassion, especially from yourself.",
    "Every day gets a little easier. Hang in there! 💪",
    "Your pain is valid. You're doing amazing.",
    "This is temporary. You've got this! ✨",
    "Be as kind to yourself as you are to others.",
    "You are more than your period. You are incredible.",
    "Reach out if you need support. You're not alone.",
    "Rest is productive. Rest is healing. Rest is right.",
    "Your body is working so hard for you. Thank it.",
    "Tomorrow will feel better. I promise. 💙",
    "You are brave. You are beautiful. You are enough.",
    "This moment is hard, but you are harder.",
    "Take a break. You've earned it. 💕",
    "Your feelings matter. Your needs matter. You matter.",
    "Be patient with yourself. Healing takes time.",
    "You are doing better than you think you are.",
    "This discomfort doesn't define you.",
    "You have overcome challenges before. You'll overcome this too.",
];

/// The full message catalog: built-ins plus any user additions from config.
pub fn catalog(extra: &[String]) -> Vec<String> {
    SUPPORT_MESSAGES
        .iter()
        .map(|m| (*m).to_string())
        .chain(extra.iter().cloned())
        .collect()
}

/// Pick one message uniformly at random.
///
/// A seed gives a reproducible pick; `None` seeds from entropy. Returns
/// `None` only for an empty catalog.
pub fn pick(messages: &[String], seed: Option<u64>) -> Option<&str> {
    if messages.is_empty() {
        return None;
    }
    let mut rng = match seed {
        Some(seed) => Mcg128Xsl64::seed_from_u64(seed),
        None => Mcg128Xsl64::from_entropy(),
    };
    let index = rng.gen_range(0..messages.len());
    Some(messages[index].as_str())
}
