//! Journal writing prompts.

use rand::Rng;

/// Built-in prompts offered above the editor.
pub const PROMPTS: [&str; 10] = [
    "What made you smile today?",
    "What's one thing you're grateful for today?",
    "How are you really feeling right now?",
    "What's something you're looking forward to?",
    "What's one small win you had today?",
    "What would make tomorrow great?",
    "What's something you learned today?",
    "What's a challenge you're facing right now?",
    "What's something kind you did for yourself today?",
    "What's something you want to remember about today?",
];

/// Picks a prompt uniformly from `catalog` using the caller's random source.
///
/// Returns `None` for an empty catalog.
pub fn pick_prompt<'a, R: Rng + ?Sized>(rng: &mut R, catalog: &[&'a str]) -> Option<&'a str> {
    if catalog.is_empty() {
        return None;
    }
    Some(catalog[rng.gen_range(0..catalog.len())])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn picks_from_catalog() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let prompt = pick_prompt(&mut rng, &PROMPTS).unwrap();
            assert!(PROMPTS.contains(&prompt));
        }
    }

    #[test]
    fn same_seed_same_prompt() {
        let a = pick_prompt(&mut StdRng::seed_from_u64(42), &PROMPTS);
        let b = pick_prompt(&mut StdRng::seed_from_u64(42), &PROMPTS);
        assert_eq!(a, b);
    }

    #[test]
    fn single_entry_catalog_always_returns_it() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(pick_prompt(&mut rng, &["only"]), Some("only"));
    }

    #[test]
    fn empty_catalog_returns_none() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(pick_prompt(&mut rng, &[]), None);
    }
}
