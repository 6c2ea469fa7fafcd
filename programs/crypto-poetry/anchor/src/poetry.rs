use anchor_lang::prelude::*;
use solana_keccak_hasher::hash;

// Refrigerator-magnet word lists
const NOUNS: &[&str] = &[
    "sun", "moon", "earth", "star", "shadow", "dream", "love",
    "time", "life", "heart", "magic", "mystery", "whisper",
    "breeze", "embrace", "spark", "kiss", "laugh", "smile",
    "song", "dance", "light", "darkness", "ocean", "wind", "fire",
    "silence", "voice", "sky", "night", "day", "flower", "river",
    "storm", "forest", "block", "chain", "satellite", "meme",
    "crypto", "defi", "depin", "lambo", "hodler", "miner",
    "whale", "doge", "numbers", "shill", "bitcoin", "ethereum", "solana",
    "dao", "nft", "metaverse", "web3", "contract", "dapp", "wallet",
];

const VERBS: &[&str] = &[
    "shine", "glow", "dance", "sing", "whisper", "laugh",
    "embrace", "dream", "kiss", "smile", "spark", "breeze",
    "radiate", "soften", "tender", "burn", "shiver",
    "cradle", "echo", "blossom", "flutter", "soar", "rush", "hodl",
    "mine", "trade", "pump", "dump", "moon", "shill", "launch",
];

const ADJECTIVES: &[&str] = &[
    "radiant", "soft", "gentle", "eternal", "sweet", "golden",
    "beautiful", "mystical", "serene", "bright", "dark", "tender",
    "silent", "luminous", "wild", "calm", "enchanted", "majestic",
    "glorious", "peaceful", "vivid", "melancholic", "brilliant",
    "vibrant", "decentralized", "hyper", "blockchained", "moonlit",
    "crypto", "stellar",
];

const PREPOSITIONS: &[&str] = &["under", "through", "with", "in", "at", "where"];

const TEMPLATES: &[&str] = &[
    "The {noun} {verb} {adjective}",
    "{verb} like a {adjective} {noun}",
    "{preposition} the {noun}, we {verb}",
    "A {adjective} {noun} to {verb}",
    "{noun}, {noun}, and {adjective} {noun}",
    "{preposition} the {adjective} {noun}, {verb}",
    "{preposition} the {noun}, {verb} {adjective} {noun}",
    "{adjective} {noun} with {noun}",
    "{adjective} {noun} {verb}, {verb}",
    "{verb} at the {noun}, {adjective} {noun}",
];

const MIN_LINES: usize = 2;
const LINE_SPREAD: usize = 4;

/// Deterministic index source seeded from what the runtime exposes.
///
/// Every draw rehashes the seed, so the sequence depends only on the
/// inputs given to [`SeedStream::new`].
pub struct SeedStream {
    seed: [u8; 32],
}

impl SeedStream {
    pub fn new(slot: u64, unix_timestamp: i64, account: &Pubkey) -> Self {
        let mut seed = [0u8; 32];

        let slot_bytes = slot.to_le_bytes();
        let timestamp_bytes = unix_timestamp.to_le_bytes();
        for (byte, (s, t)) in seed.iter_mut().zip(slot_bytes.iter().zip(timestamp_bytes.iter())) {
            *byte = s ^ t;
        }

        let account_bytes = account.to_bytes();
        let mixed = timestamp_bytes.len();
        seed[mixed..].copy_from_slice(&account_bytes[mixed..]);

        Self {
            seed: hash(&seed).to_bytes(),
        }
    }

    /// Next index in `0..upper_bound`. `upper_bound` must be non-zero.
    pub fn next_index(&mut self, upper_bound: usize) -> usize {
        self.seed = hash(&self.seed).to_bytes();
        let draw = u32::from_le_bytes([self.seed[0], self.seed[1], self.seed[2], self.seed[3]]);
        draw as usize % upper_bound
    }

    fn pick<'a>(&mut self, words: &[&'a str]) -> &'a str {
        words[self.next_index(words.len())]
    }
}

/// Composes a poem of two to five lines, each ending in a newline.
pub fn generate_poem(rng: &mut SeedStream) -> String {
    let num_lines = rng.next_index(LINE_SPREAD) + MIN_LINES;

    let mut poem = String::new();
    for _ in 0..num_lines {
        let template = rng.pick(TEMPLATES);
        poem.push_str(&fill_template(template, rng));
        poem.push('\n');
    }
    poem
}

fn fill_template(template: &str, rng: &mut SeedStream) -> String {
    let mut line = template.to_string();

    for (placeholder, words) in [
        ("{noun}", NOUNS),
        ("{verb}", VERBS),
        ("{adjective}", ADJECTIVES),
        ("{preposition}", PREPOSITIONS),
    ] {
        while let Some(start) = line.find(placeholder) {
            let word = rng.pick(words);
            line.replace_range(start..start + placeholder.len(), word);
        }
    }

    capitalize(&fix_articles(&line))
}

/// Turns "a" into "an" ahead of a vowel-initial word.
fn fix_articles(line: &str) -> String {
    let mut words = line.split_whitespace().peekable();
    let mut out: Vec<&str> = Vec::new();

    while let Some(word) = words.next() {
        let before_vowel = words.peek().is_some_and(|next| starts_with_vowel(next));
        if word.eq_ignore_ascii_case("a") && before_vowel {
            out.push("an");
        } else {
            out.push(word);
        }
    }
    out.join(" ")
}

fn starts_with_vowel(word: &str) -> bool {
    matches!(word.chars().next(), Some(c) if "aeiouAEIOU".contains(c))
}

fn capitalize(line: &str) -> String {
    let mut chars = line.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}
