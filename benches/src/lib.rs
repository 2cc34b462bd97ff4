//! Benchmark utilities for readtime.

/// Words cycled through when generating documents.
const VOCABULARY: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "chicken", "enchilada", "sauce", "don't",
    "well-known", "tortilla", "oven",
];

/// Shape of a generated benchmark document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchmarkConfig {
    /// Name used as the benchmark id.
    pub name: &'static str,
    /// Number of paragraphs.
    pub paragraphs: usize,
    /// Words per paragraph.
    pub words_per_paragraph: usize,
}

impl BenchmarkConfig {
    /// Total number of words in the generated document.
    #[must_use]
    pub const fn total_words(&self) -> usize {
        self.paragraphs * self.words_per_paragraph
    }
}

/// Benchmark configurations for different document sizes.
#[must_use]
pub fn benchmark_configs() -> Vec<BenchmarkConfig> {
    vec![
        BenchmarkConfig {
            name: "article",
            paragraphs: 10,
            words_per_paragraph: 80,
        },
        BenchmarkConfig {
            name: "chapter",
            paragraphs: 200,
            words_per_paragraph: 100,
        },
        BenchmarkConfig {
            name: "book",
            paragraphs: 4_000,
            words_per_paragraph: 120,
        },
    ]
}

/// Generates an HTML document with the configured number of words.
#[must_use]
pub fn generate_html(config: &BenchmarkConfig) -> String {
    let mut html = String::from("<article>\n");
    let mut words = VOCABULARY.iter().cycle();

    for index in 0..config.paragraphs {
        html.push_str(&format!("  <p class=\"p-{index}\">"));
        for position in 0..config.words_per_paragraph {
            if position > 0 {
                html.push(' ');
            }
            if position % 17 == 0 {
                html.push_str("<strong>");
                html.push_str(words.next().unwrap_or(&"word"));
                html.push_str("</strong>");
            } else {
                html.push_str(words.next().unwrap_or(&"word"));
            }
        }
        html.push_str(".</p>\n");
    }

    html.push_str("</article>\n");
    html
}

/// Generates the same document split into one piece per paragraph.
#[must_use]
pub fn generate_pieces(config: &BenchmarkConfig) -> Vec<String> {
    generate_html(config)
        .lines()
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use readtime_lib::ReadTime;

    #[test]
    fn test_generated_word_count() {
        for config in benchmark_configs().into_iter().take(2) {
            let html = generate_html(&config);
            assert_eq!(ReadTime::new(html).word_count(), config.total_words());
        }
    }

    #[test]
    fn test_pieces_match_document() {
        let config = &benchmark_configs()[0];
        let pieces = generate_pieces(config);
        assert_eq!(ReadTime::new(pieces).word_count(), config.total_words());
    }
}
