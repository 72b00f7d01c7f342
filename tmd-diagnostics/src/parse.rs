use anyhow::{bail, Context};
use roxmltree::{Document, Node};

use crate::attributes::{TopicAttr, WordAttr};
use crate::topic::{Topic, Word};

/// Parse a MALLET-style diagnostics document into topic records.
///
/// Every `topic` element contributes one record, in document order; its
/// `word` children are kept in document order, which the format uses as the
/// word ranking. A missing or non-numeric attribute fails the parse, as does
/// a topic whose `id` disagrees with its document position, so nothing
/// downstream has to cope with NaN or misnumbered topics.
pub fn parse_diagnostics(xml: &str) -> anyhow::Result<Vec<Topic>> {
    let doc =
        Document::parse(xml).context("diagnostics document is not well-formed XML")?;
    let mut topics: Vec<Topic> = Vec::new();
    for node in doc.descendants().filter(|n| n.has_tag_name("topic")) {
        let position = topics.len();
        let topic =
            parse_topic(node, position).with_context(|| format!("topic #{position}"))?;
        topics.push(topic);
    }
    log::info!("loaded {} topics from diagnostics document", topics.len());
    Ok(topics)
}

fn numeric_attr(node: Node<'_, '_>, name: &str) -> anyhow::Result<f64> {
    let raw = node
        .attribute(name)
        .with_context(|| format!("missing attribute `{name}`"))?;
    raw.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .with_context(|| format!("attribute `{name}` is not numeric: {raw:?}"))
}

fn parse_topic(node: Node<'_, '_>, position: usize) -> anyhow::Result<Topic> {
    let id = numeric_attr(node, TopicAttr::Id.xml_name())?;
    if id != position as f64 {
        bail!("topic id {id} does not match document position {position}");
    }

    let mut words = Vec::new();
    for child in node.children().filter(|n| n.has_tag_name("word")) {
        let word =
            parse_word(child).with_context(|| format!("word #{}", words.len()))?;
        words.push(word);
    }

    Ok(Topic {
        id: position,
        tokens: numeric_attr(node, TopicAttr::Tokens.xml_name())?,
        document_entropy: numeric_attr(node, TopicAttr::DocumentEntropy.xml_name())?,
        word_length: numeric_attr(node, TopicAttr::WordLength.xml_name())?,
        coherence: numeric_attr(node, TopicAttr::Coherence.xml_name())?,
        uniform_dist: numeric_attr(node, TopicAttr::UniformDist.xml_name())?,
        corpus_dist: numeric_attr(node, TopicAttr::CorpusDist.xml_name())?,
        eff_num_words: numeric_attr(node, TopicAttr::EffNumWords.xml_name())?,
        token_doc_diff: numeric_attr(node, TopicAttr::TokenDocDiff.xml_name())?,
        rank_1_docs: numeric_attr(node, TopicAttr::Rank1Docs.xml_name())?,
        allocation_ratio: numeric_attr(node, TopicAttr::AllocationRatio.xml_name())?,
        allocation_count: numeric_attr(node, TopicAttr::AllocationCount.xml_name())?,
        exclusivity: numeric_attr(node, TopicAttr::Exclusivity.xml_name())?,
        words,
    })
}

fn parse_word(node: Node<'_, '_>) -> anyhow::Result<Word> {
    Ok(Word {
        rank: numeric_attr(node, WordAttr::Rank.xml_name())?,
        count: numeric_attr(node, WordAttr::Count.xml_name())?,
        prob: numeric_attr(node, WordAttr::Prob.xml_name())?,
        cumulative: numeric_attr(node, WordAttr::Cumulative.xml_name())?,
        coherence: numeric_attr(node, WordAttr::Coherence.xml_name())?,
        docs: numeric_attr(node, WordAttr::Docs.xml_name())?,
        word_length: numeric_attr(node, WordAttr::WordLength.xml_name())?,
        uniform_dist: numeric_attr(node, WordAttr::UniformDist.xml_name())?,
        corpus_dist: numeric_attr(node, WordAttr::CorpusDist.xml_name())?,
        token_doc_diff: numeric_attr(node, WordAttr::TokenDocDiff.xml_name())?,
        exclusivity: numeric_attr(node, WordAttr::Exclusivity.xml_name())?,
        text: node.text().unwrap_or_default().trim().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::parse_diagnostics;

    static SAMPLE_XML: &str = include_str!("../../fixtures/diagnostics-sample.xml");

    fn topic_xml(id: &str, tokens: &str, words: &str) -> String {
        format!(
            "<topic id=\"{id}\" tokens=\"{tokens}\" document_entropy=\"1.5\" \
             word-length=\"4.8\" coherence=\"-2.0\" uniform_dist=\"1.1\" \
             corpus_dist=\"0.9\" eff_num_words=\"120\" token-doc-diff=\"0.02\" \
             rank_1_docs=\"12\" allocation_ratio=\"0.8\" allocation_count=\"0.4\" \
             exclusivity=\"0.3\">{words}</topic>"
        )
    }

    fn word_xml(rank: usize, text: &str) -> String {
        format!(
            "<word rank=\"{rank}\" count=\"40\" prob=\"0.01\" cumulative=\"0.04\" \
             coherence=\"-1.5\" docs=\"33\" word-length=\"6\" uniform_dist=\"0.2\" \
             corpus_dist=\"0.1\" token-doc-diff=\"0.003\" \
             exclusivity=\"0.25\">{text}</word>"
        )
    }

    #[test]
    fn sample_document_loads() {
        let topics = parse_diagnostics(SAMPLE_XML).unwrap();
        assert_eq!(topics.len(), 3);
        for (position, topic) in topics.iter().enumerate() {
            assert_eq!(topic.id, position);
            assert_eq!(topic.words.len(), 5);
        }
        assert_eq!(topics[0].tokens, 9770.0);
        assert_eq!(topics[2].coherence, -1.4126);
    }

    #[test]
    fn words_keep_document_order() {
        let topics = parse_diagnostics(SAMPLE_XML).unwrap();
        let ranks: Vec<f64> = topics[0].words.iter().map(|w| w.rank).collect();
        assert_eq!(ranks, vec![1.0, 2.0, 3.0, 4.0, 5.0]);
        let texts: Vec<&str> =
            topics[0].words.iter().map(|w| w.text.as_str()).collect();
        assert_eq!(texts, vec!["network", "signal", "node", "protocol", "layer"]);
    }

    #[test]
    fn two_topics_two_words_round_trip() {
        let words_a = format!("{}{}", word_xml(1, "alpha"), word_xml(2, "beta"));
        let words_b = format!("{}{}", word_xml(1, "gamma"), word_xml(2, "delta"));
        let xml = format!(
            "<model>{}{}</model>",
            topic_xml("0", "5", &words_a),
            topic_xml("1", "9", &words_b)
        );

        let topics = parse_diagnostics(&xml).unwrap();
        assert_eq!(topics.len(), 2);
        assert_eq!(topics[0].tokens, 5.0);
        assert_eq!(topics[1].tokens, 9.0);
        assert_eq!(topics[0].words[0].text, "alpha");
        assert_eq!(topics[1].words[1].text, "delta");
    }

    #[test]
    fn id_must_match_document_position() {
        let xml = format!("<model>{}</model>", topic_xml("3", "5", ""));
        let err = parse_diagnostics(&xml).unwrap_err();
        assert!(format!("{err:#}").contains("does not match document position"));
    }

    #[test]
    fn missing_attribute_is_reported_by_name() {
        let xml = "<model><topic id=\"0\" tokens=\"5\"></topic></model>";
        let err = parse_diagnostics(xml).unwrap_err();
        assert!(format!("{err:#}").contains("document_entropy"));
    }

    #[test]
    fn non_numeric_attribute_is_rejected() {
        let xml = format!("<model>{}</model>", topic_xml("0", "lots", ""));
        let err = parse_diagnostics(&xml).unwrap_err();
        assert!(format!("{err:#}").contains("tokens"));
    }

    #[test]
    fn nan_attribute_is_rejected() {
        let xml = format!("<model>{}</model>", topic_xml("0", "NaN", ""));
        assert!(parse_diagnostics(&xml).is_err());
    }

    #[test]
    fn malformed_word_names_the_topic_and_word() {
        let bad_word = "<word rank=\"1\">orphan</word>";
        let xml = format!("<model>{}</model>", topic_xml("0", "5", bad_word));
        let err = parse_diagnostics(&xml).unwrap_err();
        let chain = format!("{err:#}");
        assert!(chain.contains("topic #0"));
        assert!(chain.contains("word #0"));
    }

    #[test]
    fn empty_document_yields_no_topics() {
        let topics = parse_diagnostics("<model></model>").unwrap();
        assert!(topics.is_empty());
    }

    #[test]
    fn not_xml_is_an_error() {
        assert!(parse_diagnostics("tokens,5\n").is_err());
    }
}
