//! # Settings Search
//!
//! Fuzzy filtering of the settings screen. A query matches an entry when
//! its characters appear in order (case-insensitively) in the entry's title
//! or one of its keywords.
//!
//! Scoring follows the usual fzy-style heuristics:
//! - +1 per matched character
//! - +10 when a match directly follows the previous one
//! - +5 when a match starts a word
//! - -1 per skipped character between matches, capped at 10 per gap

/// A successful fuzzy match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuzzyMatch {
    /// Higher is better.
    pub score: i32,
    /// Char indices in the target that matched, ascending.
    pub positions: Vec<usize>,
}

const MATCH_SCORE: i32 = 1;
const CONSECUTIVE_BONUS: i32 = 10;
const WORD_START_BONUS: i32 = 5;
const MAX_GAP_PENALTY: usize = 10;

/// Matches `query` as a subsequence of `target`.
///
/// Characters are matched greedily left to right. An empty query never
/// matches.
pub fn fuzzy_match(query: &str, target: &str) -> Option<FuzzyMatch> {
    let query: Vec<char> = query.to_lowercase().chars().collect();
    if query.is_empty() {
        return None;
    }
    // Folded per char so positions index the title as displayed.
    let target: Vec<char> = target.chars().collect();

    let mut positions = Vec::with_capacity(query.len());
    let mut score = 0;
    let mut previous: Option<usize> = None;

    for (i, &c) in target.iter().enumerate() {
        if positions.len() == query.len() {
            break;
        }
        if c.to_lowercase().next() != Some(query[positions.len()]) {
            continue;
        }
        match previous {
            Some(p) if i == p + 1 => score += CONSECUTIVE_BONUS,
            Some(p) => score -= (i - p - 1).min(MAX_GAP_PENALTY) as i32,
            None => {}
        }
        if i == 0 || !target[i - 1].is_alphanumeric() {
            score += WORD_START_BONUS;
        }
        score += MATCH_SCORE;
        positions.push(i);
        previous = Some(i);
    }

    (positions.len() == query.len()).then_some(FuzzyMatch { score, positions })
}

/// A searchable row on the settings screen.
#[derive(Debug, Clone, PartialEq)]
pub struct SettingsEntry {
    pub title: String,
    pub section: String,
    pub keywords: Vec<String>,
}

impl SettingsEntry {
    pub fn new(title: &str, section: &str, keywords: &[&str]) -> Self {
        Self {
            title: title.to_owned(),
            section: section.to_owned(),
            keywords: keywords.iter().map(|k| (*k).to_owned()).collect(),
        }
    }
}

/// One search result.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit {
    /// Index into [`SettingsIndex::entries`].
    pub entry: usize,
    pub score: i32,
    /// Matched positions in the title; empty when a keyword matched better.
    pub title_positions: Vec<usize>,
}

/// The list of settings that can be searched.
#[derive(Debug, Clone, Default)]
pub struct SettingsIndex {
    entries: Vec<SettingsEntry>,
}

impl SettingsIndex {
    pub fn new(entries: Vec<SettingsEntry>) -> Self {
        Self { entries }
    }

    /// Index of the settings screen as shipped.
    pub fn builtin() -> Self {
        Self::new(vec![
            SettingsEntry::new("Theme", "Appearance", &["color", "palette", "style"]),
            SettingsEntry::new("Custom Themes", "Appearance", &["editor", "create", "palette"]),
            SettingsEntry::new("Monochrome Tint", "Appearance", &["color", "tint", "gray"]),
            SettingsEntry::new("Surface Tint Strength", "Appearance", &["background", "glass"]),
            SettingsEntry::new("Color Mix Basis", "Lattice", &["complexity", "weight", "blend"]),
            SettingsEntry::new("Color Mix Mode", "Lattice", &["blend", "dominant"]),
            SettingsEntry::new("Grid Strength", "Lattice", &["lines", "grid", "opacity"]),
            SettingsEntry::new("Label Density", "Lattice", &["labels", "ratios", "text"]),
            SettingsEntry::new("Tenney Distance", "Lattice", &["height", "harmonic", "complexity"]),
            SettingsEntry::new("Scope Color", "Scope", &["lissajous", "trace", "oscilloscope"]),
            SettingsEntry::new("Output Headroom", "Audio", &["volume", "gain", "limiter"]),
            SettingsEntry::new("Tuner Needle", "Tuner", &["pitch", "cents", "meter"]),
        ])
    }

    pub fn entries(&self) -> &[SettingsEntry] {
        &self.entries
    }

    /// Entries matching `query`, best first. Ties are ordered by title.
    pub fn search(&self, query: &str) -> Vec<SearchHit> {
        let mut hits: Vec<SearchHit> = self
            .entries
            .iter()
            .enumerate()
            .filter_map(|(index, entry)| {
                let title = fuzzy_match(query, &entry.title);
                let keyword_score = entry
                    .keywords
                    .iter()
                    .filter_map(|k| fuzzy_match(query, k))
                    .map(|m| m.score)
                    .max();
                match (title, keyword_score) {
                    (Some(t), Some(k)) if k > t.score => Some(SearchHit {
                        entry: index,
                        score: k,
                        title_positions: Vec::new(),
                    }),
                    (Some(t), _) => Some(SearchHit {
                        entry: index,
                        score: t.score,
                        title_positions: t.positions,
                    }),
                    (None, Some(k)) => Some(SearchHit {
                        entry: index,
                        score: k,
                        title_positions: Vec::new(),
                    }),
                    (None, None) => None,
                }
            })
            .collect();
        hits.sort_by(|a, b| {
            b.score
                .cmp(&a.score)
                .then_with(|| self.entries[a.entry].title.cmp(&self.entries[b.entry].title))
        });
        hits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_never_matches() {
        assert_eq!(fuzzy_match("", "Theme"), None);
        assert!(SettingsIndex::builtin().search("").is_empty());
    }

    #[test]
    fn subsequence_matches_case_insensitively() {
        let m = fuzzy_match("GS", "grid strength").unwrap();
        assert_eq!(m.positions, vec![0, 5]);
    }

    #[test]
    fn positions_index_original_chars_after_expanding_lowercase() {
        // 'İ' lowercases to two chars; the match must still point at 's'.
        let m = fuzzy_match("s", "İs").unwrap();
        assert_eq!(m.positions, vec![1]);

        let title = "İ Tint";
        let m = fuzzy_match("tint", title).unwrap();
        let chars: Vec<char> = title.chars().collect();
        let matched: String = m.positions.iter().map(|&i| chars[i]).collect();
        assert_eq!(matched, "Tint");
        assert_eq!(m.positions, vec![2, 3, 4, 5]);
    }

    #[test]
    fn out_of_order_characters_do_not_match() {
        assert_eq!(fuzzy_match("ht", "theme"), None);
    }

    #[test]
    fn contiguous_match_outscores_scattered_match() {
        let contiguous = fuzzy_match("tint", "monochrome tint").unwrap();
        let scattered = fuzzy_match("tint", "tuner in output").unwrap();
        assert!(contiguous.score > scattered.score);
    }

    #[test]
    fn word_start_bonus_and_gap_penalty() {
        // Both letters start a word; one skipped char between them.
        let m = fuzzy_match("tm", "t m").unwrap();
        assert_eq!(m.score, (WORD_START_BONUS + MATCH_SCORE) * 2 - 1);
    }

    #[test]
    fn search_ranks_title_hits_first_and_finds_keywords() {
        let index = SettingsIndex::builtin();
        let hits = index.search("theme");
        assert_eq!(index.entries()[hits[0].entry].title, "Theme");

        let hits = index.search("lissajous");
        assert_eq!(hits.len(), 1);
        assert_eq!(index.entries()[hits[0].entry].title, "Scope Color");
        assert!(hits[0].title_positions.is_empty());
    }

    #[test]
    fn equal_scores_sort_by_title() {
        let index = SettingsIndex::new(vec![
            SettingsEntry::new("Beta", "S", &[]),
            SettingsEntry::new("Alpha", "S", &["beta"]),
        ]);
        let hits = index.search("beta");
        let titles: Vec<&str> = hits
            .iter()
            .map(|h| index.entries()[h.entry].title.as_str())
            .collect();
        assert_eq!(titles, vec!["Alpha", "Beta"]);
    }
}
