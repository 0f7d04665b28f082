//! Message chunking
//!
//! Splits rendered markup into transport-sized chunks, preferring paragraph
//! boundaries, then line boundaries, then hard character slices for lines
//! that cannot fit on their own.

use once_cell::sync::Lazy;
use regex::Regex;

/// Default per-message size limit
pub const DEFAULT_LIMIT: usize = 4096;

/// Runs of blank lines collapse to a single blank line before splitting
static BLANK_LINES: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").expect("valid pattern"));

/// Split rendered markup into chunks of at most `limit` characters.
///
/// Chunks come out in document order. Accumulated chunks are trimmed; hard
/// slices are emitted at exactly `limit` characters. Hard slicing is blind
/// to tag pairs: a single overlong line wrapped in an inline tag can end up
/// split across two chunks.
///
/// # Example
///
/// ```rust
/// use chatdown_core::split_message;
///
/// let chunks = split_message("first\n\nsecond", 8);
/// assert_eq!(chunks, vec!["first", "second"]);
/// ```
pub fn split_message(markup: &str, limit: usize) -> Vec<String> {
    let limit = limit.max(1);
    let text = BLANK_LINES.replace_all(markup.trim(), "\n\n");
    if text.is_empty() {
        return Vec::new();
    }

    let mut chunks = Vec::new();
    let mut current = String::new();
    pack(&text, &["\n\n", "\n"], limit, &mut chunks, &mut current);
    flush(&mut chunks, &mut current);
    chunks
}

/// Greedy accumulation of separated parts into `current`, flushing to
/// `chunks` whenever the next part would not fit. Oversized parts descend to
/// the next separator level, and to hard slicing below the last one.
fn pack(text: &str, seps: &[&str], limit: usize, chunks: &mut Vec<String>, current: &mut String) {
    let sep = seps[0];

    for part in text.split(sep) {
        if part.len() > limit {
            flush(chunks, current);
            if seps.len() > 1 {
                pack(part, &seps[1..], limit, chunks, current);
            } else {
                hard_slice(part, limit, chunks, current);
            }
            continue;
        }

        if !current.is_empty() && current.len() + sep.len() + part.len() > limit {
            flush(chunks, current);
        }
        if !current.is_empty() {
            current.push_str(sep);
        }
        current.push_str(part);
    }
}

/// Slice an overlong line into segments of exactly `limit` characters; the
/// final partial segment seeds continued accumulation
fn hard_slice(line: &str, limit: usize, chunks: &mut Vec<String>, current: &mut String) {
    let mut rest = line;
    while let Some((index, _)) = rest.char_indices().nth(limit) {
        chunks.push(rest[..index].to_string());
        rest = &rest[index..];
    }
    current.push_str(rest);
}

fn flush(chunks: &mut Vec<String>, current: &mut String) {
    let trimmed = current.trim();
    if !trimmed.is_empty() {
        chunks.push(trimmed.to_string());
    }
    current.clear();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert!(split_message("", DEFAULT_LIMIT).is_empty());
    }

    #[test]
    fn test_whitespace_only_input() {
        assert!(split_message("  \n\n \t ", DEFAULT_LIMIT).is_empty());
    }

    #[test]
    fn test_short_input_is_one_chunk() {
        let chunks = split_message("  hello world  ", DEFAULT_LIMIT);
        assert_eq!(chunks, vec!["hello world"]);
    }

    #[test]
    fn test_blank_lines_collapse_before_splitting() {
        let chunks = split_message("a\n\n\n\n\nb", DEFAULT_LIMIT);
        assert_eq!(chunks, vec!["a\n\nb"]);
    }

    #[test]
    fn test_splits_at_paragraph_boundaries() {
        let chunks = split_message("aaaa\n\nbbbb\n\ncccc", 6);
        assert_eq!(chunks, vec!["aaaa", "bbbb", "cccc"]);
    }

    #[test]
    fn test_packs_paragraphs_that_fit() {
        let chunks = split_message("aaaa\n\nbbbb", 10);
        assert_eq!(chunks, vec!["aaaa\n\nbbbb"]);
    }

    #[test]
    fn test_splits_oversized_paragraph_at_lines() {
        let chunks = split_message("aaaa\nbbbb\ncccc", 9);
        assert_eq!(chunks, vec!["aaaa\nbbbb", "cccc"]);
    }

    #[test]
    fn test_hard_slices_oversized_line() {
        let input = "a".repeat(4500);
        let chunks = split_message(&input, DEFAULT_LIMIT);
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].len(), 4096);
        assert_eq!(chunks[1].len(), 404);
        assert!(chunks[0].chars().all(|c| c == 'a'));
        assert!(chunks[1].chars().all(|c| c == 'a'));
    }

    #[test]
    fn test_hard_slice_exact_multiple() {
        let input = "a".repeat(8192);
        let chunks = split_message(&input, 4096);
        assert_eq!(chunks.len(), 2);
        assert!(chunks.iter().all(|c| c.len() == 4096));
    }

    #[test]
    fn test_hard_slice_respects_char_boundaries() {
        let input = "é".repeat(5000);
        let chunks = split_message(&input, 4096);
        assert_eq!(chunks[0].chars().count(), 4096);
        assert_eq!(chunks[1].chars().count(), 904);
    }

    #[test]
    fn test_hard_slice_tail_seeds_next_line() {
        // 10-char line hard-sliced at 4, remainder packs with the next line
        let chunks = split_message("xxxxxxxxxx\nab", 4);
        assert_eq!(chunks, vec!["xxxx", "xxxx", "xx", "ab"]);
    }

    #[test]
    fn test_every_chunk_within_limit() {
        let input = format!(
            "{}\n\n{}\n{}\n\n{}",
            "a".repeat(30),
            "b".repeat(120),
            "c".repeat(45),
            "d".repeat(10)
        );
        for chunk in split_message(&input, 50) {
            assert!(chunk.len() <= 50, "chunk too long: {}", chunk.len());
        }
    }

    #[test]
    fn test_order_is_stable() {
        let input = "one\n\ntwo\n\nthree\n\nfour";
        let chunks = split_message(input, 8);
        assert_eq!(chunks, vec!["one\n\ntwo", "three", "four"]);
    }

    #[test]
    fn test_paragraph_chunks_reconstruct_input() {
        let input = "par one\n\npar two\n\npar three";
        let chunks = split_message(input, 10);
        assert_eq!(chunks.join("\n\n"), input);
    }
}
