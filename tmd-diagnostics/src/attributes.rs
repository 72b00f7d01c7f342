use serde::{Deserialize, Serialize};

/// Per-topic attributes of a diagnostics document, in catalog order.
///
/// Catalog order is what the axis dropdowns display. The XML names are what
/// the parser reads off each `topic` element; two of them are hyphenated in
/// the file format rather than underscored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TopicAttr {
    Id,
    Tokens,
    DocumentEntropy,
    WordLength,
    Coherence,
    UniformDist,
    CorpusDist,
    EffNumWords,
    TokenDocDiff,
    Rank1Docs,
    AllocationRatio,
    AllocationCount,
    Exclusivity,
}

impl TopicAttr {
    pub const ALL: [TopicAttr; 13] = [
        TopicAttr::Id,
        TopicAttr::Tokens,
        TopicAttr::DocumentEntropy,
        TopicAttr::WordLength,
        TopicAttr::Coherence,
        TopicAttr::UniformDist,
        TopicAttr::CorpusDist,
        TopicAttr::EffNumWords,
        TopicAttr::TokenDocDiff,
        TopicAttr::Rank1Docs,
        TopicAttr::AllocationRatio,
        TopicAttr::AllocationCount,
        TopicAttr::Exclusivity,
    ];

    /// Attribute name as it appears on a `topic` element.
    pub fn xml_name(self) -> &'static str {
        match self {
            TopicAttr::Id => "id",
            TopicAttr::Tokens => "tokens",
            TopicAttr::DocumentEntropy => "document_entropy",
            TopicAttr::WordLength => "word-length",
            TopicAttr::Coherence => "coherence",
            TopicAttr::UniformDist => "uniform_dist",
            TopicAttr::CorpusDist => "corpus_dist",
            TopicAttr::EffNumWords => "eff_num_words",
            TopicAttr::TokenDocDiff => "token-doc-diff",
            TopicAttr::Rank1Docs => "rank_1_docs",
            TopicAttr::AllocationRatio => "allocation_ratio",
            TopicAttr::AllocationCount => "allocation_count",
            TopicAttr::Exclusivity => "exclusivity",
        }
    }

    /// Dropdown label: the XML name with underscores replaced by spaces.
    pub fn label(self) -> String {
        self.xml_name().replace('_', " ")
    }

    /// Reverse lookup used by the axis dropdown change handlers.
    pub fn from_xml_name(name: &str) -> Option<TopicAttr> {
        TopicAttr::ALL.iter().copied().find(|a| a.xml_name() == name)
    }
}

/// Per-word attributes of a diagnostics document, in catalog order.
///
/// Not user-selectable; this catalog drives parsing and the coherence
/// coloring of the word table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WordAttr {
    Rank,
    Count,
    Prob,
    Cumulative,
    Coherence,
    Docs,
    WordLength,
    UniformDist,
    CorpusDist,
    TokenDocDiff,
    Exclusivity,
}

impl WordAttr {
    pub const ALL: [WordAttr; 11] = [
        WordAttr::Rank,
        WordAttr::Count,
        WordAttr::Prob,
        WordAttr::Cumulative,
        WordAttr::Coherence,
        WordAttr::Docs,
        WordAttr::WordLength,
        WordAttr::UniformDist,
        WordAttr::CorpusDist,
        WordAttr::TokenDocDiff,
        WordAttr::Exclusivity,
    ];

    /// Attribute name as it appears on a `word` element.
    pub fn xml_name(self) -> &'static str {
        match self {
            WordAttr::Rank => "rank",
            WordAttr::Count => "count",
            WordAttr::Prob => "prob",
            WordAttr::Cumulative => "cumulative",
            WordAttr::Coherence => "coherence",
            WordAttr::Docs => "docs",
            WordAttr::WordLength => "word-length",
            WordAttr::UniformDist => "uniform_dist",
            WordAttr::CorpusDist => "corpus_dist",
            WordAttr::TokenDocDiff => "token-doc-diff",
            WordAttr::Exclusivity => "exclusivity",
        }
    }

    /// Display label, same underscore-to-space rule as topic attributes.
    pub fn label(self) -> String {
        self.xml_name().replace('_', " ")
    }
}

#[cfg(test)]
mod tests {
    use super::{TopicAttr, WordAttr};

    #[test]
    fn topic_catalog_starts_with_default_axes() {
        assert_eq!(TopicAttr::ALL[0], TopicAttr::Id);
        assert_eq!(TopicAttr::ALL[1], TopicAttr::Tokens);
        assert_eq!(TopicAttr::ALL.len(), 13);
    }

    #[test]
    fn labels_replace_underscores_only() {
        assert_eq!(TopicAttr::DocumentEntropy.label(), "document entropy");
        assert_eq!(TopicAttr::Rank1Docs.label(), "rank 1 docs");
        // Hyphenated names stay hyphenated
        assert_eq!(TopicAttr::WordLength.label(), "word-length");
        assert_eq!(WordAttr::TokenDocDiff.label(), "token-doc-diff");
    }

    #[test]
    fn xml_names_round_trip() {
        for attr in TopicAttr::ALL {
            assert_eq!(TopicAttr::from_xml_name(attr.xml_name()), Some(attr));
        }
        assert_eq!(TopicAttr::from_xml_name("nope"), None);
    }

    #[test]
    fn word_catalog_is_complete() {
        assert_eq!(WordAttr::ALL.len(), 11);
        assert_eq!(WordAttr::ALL[0], WordAttr::Rank);
    }
}
