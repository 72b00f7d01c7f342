use serde::{Deserialize, Serialize};

use crate::attributes::{TopicAttr, WordAttr};

/// One topic's diagnostic record.
///
/// `id` is the stable 0-based index matching document order; the parser
/// validates it and it never changes after load. `words` preserves document
/// order, which the diagnostics format uses as rank order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Topic {
    pub id: usize,
    pub tokens: f64,
    pub document_entropy: f64,
    pub word_length: f64,
    pub coherence: f64,
    pub uniform_dist: f64,
    pub corpus_dist: f64,
    pub eff_num_words: f64,
    pub token_doc_diff: f64,
    pub rank_1_docs: f64,
    pub allocation_ratio: f64,
    pub allocation_count: f64,
    pub exclusivity: f64,
    pub words: Vec<Word>,
}

impl Topic {
    /// Uniform numeric access for extent and scale computation.
    pub fn attr(&self, attr: TopicAttr) -> f64 {
        match attr {
            TopicAttr::Id => self.id as f64,
            TopicAttr::Tokens => self.tokens,
            TopicAttr::DocumentEntropy => self.document_entropy,
            TopicAttr::WordLength => self.word_length,
            TopicAttr::Coherence => self.coherence,
            TopicAttr::UniformDist => self.uniform_dist,
            TopicAttr::CorpusDist => self.corpus_dist,
            TopicAttr::EffNumWords => self.eff_num_words,
            TopicAttr::TokenDocDiff => self.token_doc_diff,
            TopicAttr::Rank1Docs => self.rank_1_docs,
            TopicAttr::AllocationRatio => self.allocation_ratio,
            TopicAttr::AllocationCount => self.allocation_count,
            TopicAttr::Exclusivity => self.exclusivity,
        }
    }
}

/// One of a topic's top words, owned exclusively by its parent topic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Word {
    pub rank: f64,
    pub count: f64,
    pub prob: f64,
    pub cumulative: f64,
    pub coherence: f64,
    pub docs: f64,
    pub word_length: f64,
    pub uniform_dist: f64,
    pub corpus_dist: f64,
    pub token_doc_diff: f64,
    pub exclusivity: f64,
    /// The literal word, from the element's text content.
    pub text: String,
}

impl Word {
    pub fn attr(&self, attr: WordAttr) -> f64 {
        match attr {
            WordAttr::Rank => self.rank,
            WordAttr::Count => self.count,
            WordAttr::Prob => self.prob,
            WordAttr::Cumulative => self.cumulative,
            WordAttr::Coherence => self.coherence,
            WordAttr::Docs => self.docs,
            WordAttr::WordLength => self.word_length,
            WordAttr::UniformDist => self.uniform_dist,
            WordAttr::CorpusDist => self.corpus_dist,
            WordAttr::TokenDocDiff => self.token_doc_diff,
            WordAttr::Exclusivity => self.exclusivity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Topic, Word};
    use crate::attributes::{TopicAttr, WordAttr};

    fn sample_topic() -> Topic {
        Topic {
            id: 4,
            tokens: 9770.0,
            document_entropy: 8.12,
            word_length: 5.2,
            coherence: -1.65,
            uniform_dist: 2.58,
            corpus_dist: 1.54,
            eff_num_words: 426.35,
            token_doc_diff: 0.016,
            rank_1_docs: 12.0,
            allocation_ratio: 1.05,
            allocation_count: 0.58,
            exclusivity: 0.44,
            words: Vec::new(),
        }
    }

    #[test]
    fn topic_attr_access_matches_fields() {
        let topic = sample_topic();
        assert_eq!(topic.attr(TopicAttr::Id), 4.0);
        assert_eq!(topic.attr(TopicAttr::Tokens), 9770.0);
        assert_eq!(topic.attr(TopicAttr::Coherence), -1.65);
        assert_eq!(topic.attr(TopicAttr::Exclusivity), 0.44);
    }

    #[test]
    fn word_attr_access_matches_fields() {
        let word = Word {
            rank: 1.0,
            count: 333.0,
            prob: 0.034,
            cumulative: 0.034,
            coherence: -1.24,
            docs: 287.0,
            word_length: 7.0,
            uniform_dist: 0.18,
            corpus_dist: 0.07,
            token_doc_diff: 0.003,
            exclusivity: 0.34,
            text: "network".to_string(),
        };
        assert_eq!(word.attr(WordAttr::Rank), 1.0);
        assert_eq!(word.attr(WordAttr::Docs), 287.0);
        assert_eq!(word.attr(WordAttr::Coherence), -1.24);
    }
}
