//! Query highlighting.
//!
//! Pure text segmentation: given a rendered field and the active search
//! query, split the field into plain and emphasized runs. Matching is
//! ASCII-case-insensitive, which is also how the upstream filter matches,
//! so the two agree on what lights up. Called per visible card per field,
//! so it allocates nothing beyond the output segments.

use std::rc::Rc;

/// One run of a highlighted field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HighlightSegment {
    pub text: String,
    pub emphasized: bool,
}

/// A field split into plain and emphasized runs.
///
/// Concatenating the runs always reproduces the input text verbatim.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Highlighted {
    pub segments: Vec<HighlightSegment>,
}

impl Highlighted {
    /// A single unemphasized run; what an empty or unmatched query yields.
    pub fn plain(text: impl Into<String>) -> Self {
        let text = text.into();
        if text.is_empty() {
            return Self::default();
        }
        Self {
            segments: vec![HighlightSegment {
                text,
                emphasized: false,
            }],
        }
    }

    pub fn to_plain_text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }

    pub fn has_emphasis(&self) -> bool {
        self.segments.iter().any(|s| s.emphasized)
    }
}

/// Shared highlight function, supplied by the caller to the grid and
/// invoked per visible card per highlighted field.
pub type Highlighter = Rc<dyn Fn(&str, &str) -> Highlighted>;

/// The stock [`Highlighter`] backed by [`highlight`].
pub fn default_highlighter() -> Highlighter {
    Rc::new(|text, query| highlight(text, query))
}

/// Splits `text` into runs, emphasizing every occurrence of `query`.
///
/// An empty query returns the input as one plain run, visually identical to
/// the unmarked text. Emphasized runs carry the matched slice of the
/// original input verbatim, not the query's casing.
pub fn highlight(text: &str, query: &str) -> Highlighted {
    if query.is_empty() || text.is_empty() {
        return Highlighted::plain(text);
    }

    let haystack = text.as_bytes();
    let needle = query.as_bytes();
    let mut segments = Vec::new();
    let mut cursor = 0;
    let mut probe = 0;

    // Byte-wise ASCII-insensitive scan; matches of valid UTF-8 against valid
    // UTF-8 always land on char boundaries, so the slicing below is safe.
    while probe + needle.len() <= haystack.len() {
        if haystack[probe..probe + needle.len()].eq_ignore_ascii_case(needle) {
            if probe > cursor {
                segments.push(HighlightSegment {
                    text: text[cursor..probe].to_owned(),
                    emphasized: false,
                });
            }
            segments.push(HighlightSegment {
                text: text[probe..probe + needle.len()].to_owned(),
                emphasized: true,
            });
            cursor = probe + needle.len();
            probe = cursor;
        } else {
            probe += 1;
        }
    }

    if cursor == 0 {
        return Highlighted::plain(text);
    }
    if cursor < text.len() {
        segments.push(HighlightSegment {
            text: text[cursor..].to_owned(),
            emphasized: false,
        });
    }
    Highlighted { segments }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marks_the_matched_substring() {
        let result = highlight("Rishikesh STP", "STP");

        assert_eq!(result.segments.len(), 2);
        assert_eq!(result.segments[0].text, "Rishikesh ");
        assert!(!result.segments[0].emphasized);
        assert_eq!(result.segments[1].text, "STP");
        assert!(result.segments[1].emphasized);
    }

    #[test]
    fn empty_query_is_identical_to_plain_input() {
        let result = highlight("Rishikesh STP", "");
        assert_eq!(result, Highlighted::plain("Rishikesh STP"));
        assert!(!result.has_emphasis());
    }

    #[test]
    fn matching_is_case_insensitive_and_keeps_source_casing() {
        let result = highlight("Rishikesh STP", "stp");
        assert!(result.has_emphasis());
        assert_eq!(result.segments[1].text, "STP");
    }

    #[test]
    fn all_occurrences_are_marked() {
        let result = highlight("pump to pump", "pump");
        let emphasized = result.segments.iter().filter(|s| s.emphasized).count();
        assert_eq!(emphasized, 2);
    }

    #[test]
    fn segments_concatenate_back_to_the_input() {
        for query in ["", "a", "water", "zzz", "WaTeR"] {
            let text = "Clearwater intake and raw water main";
            assert_eq!(highlight(text, query).to_plain_text(), text);
        }
    }

    #[test]
    fn unmatched_query_yields_one_plain_run() {
        let result = highlight("Rishikesh STP", "lagoon");
        assert_eq!(result.segments.len(), 1);
        assert!(!result.has_emphasis());
    }

    #[test]
    fn non_ascii_text_survives_segmentation() {
        let result = highlight("Gomtī river intake", "river");
        assert_eq!(result.to_plain_text(), "Gomtī river intake");
        assert!(result.has_emphasis());
    }
}
