//! Filename scoring for ranking page images by logo likelihood

/// Keyword weights applied to an image filename. Matches are
/// case-insensitive substrings and the deltas are additive.
const KEYWORD_WEIGHTS: &[(&str, i32)] = &[
    ("logo", 20),
    ("badge", 20),
    ("crest", 20),
    (".svg", 10),
    (".png", 5),
    ("stadium", -50),
    ("arena", -50),
    ("map", -50),
    ("photo", -20),
    ("squad", -20),
    ("team", -10),
    ("jersey", -10),
    ("kit", -10),
    ("flag", -5),
];

/// Score an image filename for how likely it is to be a team logo
pub fn score_filename(filename: &str) -> i32 {
    let lower = filename.to_lowercase();

    KEYWORD_WEIGHTS
        .iter()
        .copied()
        .filter(|(keyword, _)| lower.contains(keyword))
        .map(|(_, weight)| weight)
        .sum()
}

/// Pick the best logo candidate from a page's image titles
///
/// Candidates with a non-positive score are discarded. The sort is stable,
/// so equal scores keep the original listing order.
pub fn select_best_image<'a, I>(titles: I) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut ranked: Vec<(&str, i32)> = titles
        .into_iter()
        .map(|title| (title, score_filename(title)))
        .filter(|(_, score)| *score > 0)
        .collect();

    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.first().map(|(title, _)| *title)
}
