use std::io::Write;

use super::lexicon::{Lexicon, LexiconAnnotator, LexiconConfig, LexiconEntry};
use super::mock::MockAnnotator;
use super::types::{AnnotatedToken, PosTag};
use super::{AnnotateError, Annotator};

fn entry(form: &str, lemma: &str, pos: PosTag, vector: Option<Vec<f32>>) -> LexiconEntry {
    LexiconEntry {
        form: form.to_string(),
        lemma: lemma.to_string(),
        pos,
        vector,
    }
}

fn clinical_lexicon() -> Lexicon {
    Lexicon {
        embedding_dim: 3,
        entries: vec![
            entry(
                "diabetes",
                "diabetes",
                PosTag::Noun,
                Some(vec![1.0, 0.0, 0.0]),
            ),
            entry(
                "monitoring",
                "monitor",
                PosTag::Verb,
                Some(vec![0.0, 1.0, 0.0]),
            ),
            entry("the", "the", PosTag::Determiner, None),
        ],
    }
}

#[test]
fn test_in_lexicon_word_gets_recorded_annotation() {
    let annotator = LexiconAnnotator::from_lexicon(clinical_lexicon()).unwrap();

    let tokens = annotator.annotate("diabetes");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].lemma, "diabetes");
    assert_eq!(tokens[0].pos, PosTag::Noun);
    assert_eq!(tokens[0].embedding, Some(vec![1.0, 0.0, 0.0]));
}

#[test]
fn test_lookup_is_case_insensitive() {
    let annotator = LexiconAnnotator::from_lexicon(clinical_lexicon()).unwrap();

    let tokens = annotator.annotate("Monitoring");
    assert_eq!(tokens[0].lemma, "monitor");
    assert_eq!(tokens[0].pos, PosTag::Verb);
}

#[test]
fn test_unknown_word_defaults_to_noun_without_embedding() {
    let annotator = LexiconAnnotator::from_lexicon(clinical_lexicon()).unwrap();

    let tokens = annotator.annotate("Hypertension");
    assert_eq!(tokens[0].lemma, "hypertension");
    assert_eq!(tokens[0].pos, PosTag::Noun);
    assert!(!tokens[0].has_embedding());
}

#[test]
fn test_numeric_form_is_tagged_numeral() {
    let annotator = LexiconAnnotator::from_lexicon(clinical_lexicon()).unwrap();

    let tokens = annotator.annotate("2");
    assert_eq!(tokens[0].pos, PosTag::Numeral);
    assert_eq!(tokens[0].lemma, "2");
}

#[test]
fn test_whitespace_runs_collapse_to_one_token() {
    let annotator = LexiconAnnotator::stub();

    let tokens = annotator.annotate("type   2");
    let whitespace: Vec<_> = tokens.iter().filter(|t| t.is_whitespace).collect();
    assert_eq!(whitespace.len(), 1);
    assert_eq!(whitespace[0].pos, PosTag::Space);
}

#[test]
fn test_punctuation_is_single_char_tokens() {
    let annotator = LexiconAnnotator::stub();

    let tokens = annotator.annotate("asthma, copd");
    assert_eq!(tokens[1].pos, PosTag::Punctuation);
    assert_eq!(tokens[1].lemma, ",");
}

#[test]
fn test_empty_input_yields_no_tokens() {
    let annotator = LexiconAnnotator::stub();
    assert!(annotator.annotate("").is_empty());
}

#[test]
fn test_stub_mode_produces_no_embeddings() {
    let annotator = LexiconAnnotator::stub();
    assert!(!annotator.is_lexicon_loaded());
    assert_eq!(annotator.embedding_dim(), 0);

    let tokens = annotator.annotate("diabetes monitoring");
    assert!(tokens.iter().all(|t| !t.has_embedding()));
}

#[test]
fn test_dimension_mismatch_names_the_form() {
    let lexicon = Lexicon {
        embedding_dim: 3,
        entries: vec![entry("short", "short", PosTag::Adjective, Some(vec![1.0]))],
    };

    let err = LexiconAnnotator::from_lexicon(lexicon).unwrap_err();
    match err {
        AnnotateError::DimensionMismatch {
            form,
            expected,
            actual,
        } => {
            assert_eq!(form, "short");
            assert_eq!(expected, 3);
            assert_eq!(actual, 1);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_zero_declared_dimension_with_vector_is_rejected() {
    let lexicon = Lexicon {
        embedding_dim: 0,
        entries: vec![entry("x", "x", PosTag::Noun, Some(vec![1.0]))],
    };

    assert!(matches!(
        LexiconAnnotator::from_lexicon(lexicon),
        Err(AnnotateError::ZeroDimension)
    ));
}

#[test]
fn test_load_from_file() {
    let lexicon = clinical_lexicon();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{}", serde_json::to_string(&lexicon).unwrap()).unwrap();

    let annotator = LexiconAnnotator::load(LexiconConfig::new(file.path())).unwrap();
    assert!(annotator.is_lexicon_loaded());
    assert_eq!(annotator.embedding_dim(), 3);
    assert_eq!(annotator.annotate("diabetes")[0].lemma, "diabetes");
}

#[test]
fn test_load_missing_file_is_io_error() {
    let config = LexiconConfig::new("/nonexistent/lexicon.json");
    assert!(matches!(
        LexiconAnnotator::load(config),
        Err(AnnotateError::Io { .. })
    ));
}

#[test]
fn test_mock_annotator_returns_canned_tokens() {
    let annotator = MockAnnotator::new().with_document(
        "asthma",
        vec![AnnotatedToken::new("asthma", PosTag::Noun).with_embedding(vec![0.5, 0.5])],
    );

    let tokens = annotator.annotate("asthma");
    assert_eq!(tokens.len(), 1);
    assert!(tokens[0].has_embedding());

    assert!(annotator.annotate("unregistered").is_empty());
}

#[test]
fn test_pos_tag_whitelists() {
    assert!(PosTag::Noun.is_content());
    assert!(PosTag::Other.is_content());
    assert!(!PosTag::Determiner.is_content());
    assert!(!PosTag::Space.is_content());

    assert!(PosTag::Noun.is_key());
    assert!(PosTag::ProperNoun.is_key());
    assert!(!PosTag::Verb.is_key());
    assert!(!PosTag::Adjective.is_key());
}
