pub mod pptx;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone)]
pub struct SlideDeck {
    pub theme: String,
    pub slides: Vec<Slide>,
}

/// Partitions `text` into `num_slides` contiguous chunks of roughly equal
/// character count and emits one slide per chunk. Purely positional —
/// sentence and paragraph boundaries are deliberately not respected.
/// A non-positive slide count behaves as a single slide.
pub fn build_deck(text: &str, theme: &str, num_slides: i64) -> SlideDeck {
    let num_slides = if num_slides < 1 { 1 } else { num_slides as usize };
    let slides = partition_chars(text, num_slides)
        .into_iter()
        .enumerate()
        .map(|(i, chunk)| Slide {
            title: format!("Slide {}", i + 1),
            body: chunk.trim().to_string(),
        })
        .collect();

    SlideDeck {
        theme: theme.to_string(),
        slides,
    }
}

/// Splits `text` into exactly `n` chunks: `chunk_size = chars / n`, the
/// last chunk absorbs the integer-truncation remainder. Character-based so
/// multi-byte text never splits inside a code point.
fn partition_chars(text: &str, n: usize) -> Vec<String> {
    debug_assert!(n >= 1);
    let chars: Vec<char> = text.chars().collect();
    let chunk_size = chars.len() / n;

    (0..n)
        .map(|i| {
            let start = i * chunk_size;
            let end = if i < n - 1 { (i + 1) * chunk_size } else { chars.len() };
            chars[start..end].iter().collect()
        })
        .collect()
}
