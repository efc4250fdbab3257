//! Text heuristics: tokenization, word sets, and phrase matching.

use std::collections::HashSet;

/// Headline words that tend to lift attention.
pub const POWER_WORDS: &[&str] = &[
  "exclusive",
  "proven",
  "instant",
  "ultimate",
  "guaranteed",
  "free",
  "new",
  "limited",
  "premium",
  "revolutionary",
  "essential",
  "bonus",
  "breakthrough",
  "effortless",
  "powerful",
  "official",
];

/// Call-to-action verbs and phrases.
pub const CTA_PHRASES: &[&str] = &[
  "buy",
  "shop",
  "order",
  "get",
  "try",
  "start",
  "sign up",
  "join",
  "learn more",
  "discover",
  "download",
  "book",
  "call",
  "subscribe",
  "register",
  "claim",
  "apply",
  "contact",
  "visit",
];

pub const EMOTIONAL_WORDS: &[&str] = &[
  "amazing",
  "love",
  "incredible",
  "stunning",
  "exciting",
  "happy",
  "joy",
  "dream",
  "fear",
  "hurry",
  "imagine",
  "beautiful",
  "delight",
  "inspiring",
  "thrilling",
  "unforgettable",
  "worry",
  "passion",
  "proud",
];

/// Lowercase alphanumeric words; every other character separates.
pub fn words(s: &str) -> Vec<String> {
  s.split(|c: char| !c.is_alphanumeric())
    .filter(|w| !w.is_empty())
    .map(|w| w.to_lowercase())
    .collect()
}

/// Length in characters, untrimmed.
pub fn char_len(s: &str) -> usize {
  s.chars().count()
}

/// Number of words (with repeats) that belong to `set`.
pub fn count_members(words: &[String], set: &[&str]) -> usize {
  words.iter().filter(|w| set.contains(&w.as_str())).count()
}

/// Whether `phrase` occurs as consecutive whole words. Underscores in the
/// phrase act as spaces.
pub fn contains_phrase(words: &[String], phrase: &str) -> bool {
  let needle = self::words(&phrase.replace('_', " "));
  if needle.is_empty() || needle.len() > words.len() {
    return false;
  }
  words.windows(needle.len()).any(|w| w == &needle[..])
}

/// Number of distinct phrases from `phrases` that occur in `words`.
pub fn count_phrases(words: &[String], phrases: &[&str]) -> usize {
  phrases.iter().filter(|p| contains_phrase(words, p)).count()
}

pub fn contains_any(words: &[String], phrases: &[&str]) -> bool {
  phrases.iter().any(|p| contains_phrase(words, p))
}

/// Distinct words / total words; 0.0 for no words.
pub fn uniqueness_ratio(words: &[String]) -> f64 {
  if words.is_empty() {
    return 0.0;
  }
  let distinct: HashSet<&str> = words.iter().map(|w| w.as_str()).collect();
  distinct.len() as f64 / words.len() as f64
}

/// Tokenized views of a submission's copy, computed once per evaluation.
#[derive(Debug, Clone)]
pub struct AdCopy {
  pub title: Vec<String>,
  pub description: Vec<String>,
  /// Title followed by description.
  pub all: Vec<String>,
}

impl AdCopy {
  pub fn new(title: &str, description: &str) -> Self {
    let title = words(title);
    let description = words(description);
    let all = title.iter().chain(description.iter()).cloned().collect();
    Self {
      title,
      description,
      all,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn words_split_on_punctuation_and_lowercase() {
    assert_eq!(
      words("Try it FREE! (No card)"),
      vec!["try", "it", "free", "no", "card"]
    );
    assert!(words("  ...  ").is_empty());
  }

  #[test]
  fn phrases_match_whole_words_only() {
    let w = words("Serving every country and industry");
    assert!(!contains_phrase(&w, "try"));
    let w = words("Start your free trial today");
    assert!(contains_phrase(&w, "free trial"));
    assert!(contains_phrase(&w, "free_trial"));
    assert!(!contains_phrase(&w, "trial free"));
    assert!(!contains_phrase(&w, ""));
  }

  #[test]
  fn count_members_counts_repeats() {
    let w = words("new new proven thing");
    assert_eq!(count_members(&w, POWER_WORDS), 3);
  }

  #[test]
  fn uniqueness_of_empty_and_repeated_text() {
    assert_eq!(uniqueness_ratio(&[]), 0.0);
    let w = words("buy buy buy buy");
    assert_eq!(uniqueness_ratio(&w), 0.25);
  }

  #[test]
  fn char_len_counts_scalars_not_bytes() {
    assert_eq!(char_len("café"), 4);
    assert_eq!(char_len(" a "), 3);
  }
}
