use serde::{Deserialize, Serialize};

/// Part-of-speech tag over the fixed Universal Dependencies tag set.
///
/// Serialized with the conventional upper-case codes (`"NOUN"`, `"PROPN"`,
/// ...), which is also the representation used in lexicon artifacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PosTag {
    #[serde(rename = "ADJ")]
    Adjective,
    #[serde(rename = "ADP")]
    Adposition,
    #[serde(rename = "ADV")]
    Adverb,
    #[serde(rename = "AUX")]
    Auxiliary,
    #[serde(rename = "CCONJ")]
    CoordinatingConjunction,
    #[serde(rename = "DET")]
    Determiner,
    #[serde(rename = "INTJ")]
    Interjection,
    #[serde(rename = "NOUN")]
    Noun,
    #[serde(rename = "NUM")]
    Numeral,
    #[serde(rename = "PART")]
    Particle,
    #[serde(rename = "PRON")]
    Pronoun,
    #[serde(rename = "PROPN")]
    ProperNoun,
    #[serde(rename = "PUNCT")]
    Punctuation,
    #[serde(rename = "SCONJ")]
    SubordinatingConjunction,
    #[serde(rename = "SYM")]
    Symbol,
    #[serde(rename = "VERB")]
    Verb,
    #[serde(rename = "X")]
    Other,
    #[serde(rename = "SPACE")]
    Space,
}

impl PosTag {
    /// Returns `true` for tags in the content whitelist: the categories
    /// that count toward lexical and semantic matching. Function words
    /// (determiners, adpositions, punctuation, whitespace, ...) are out.
    pub fn is_content(self) -> bool {
        matches!(
            self,
            PosTag::Adjective
                | PosTag::Adverb
                | PosTag::Noun
                | PosTag::Pronoun
                | PosTag::ProperNoun
                | PosTag::Verb
                | PosTag::Other
        )
    }

    /// Returns `true` for the key subset {NOUN, PROPN}. Lexical overlap
    /// must include at least one key-POS lemma to count.
    pub fn is_key(self) -> bool {
        matches!(self, PosTag::Noun | PosTag::ProperNoun)
    }
}

/// A single annotated token.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotatedToken {
    /// Canonical dictionary form of the token. Deterministic for a given
    /// word form across calls.
    pub lemma: String,
    /// Part-of-speech tag.
    pub pos: PosTag,
    /// Dense embedding vector, when the annotator's model covers this form.
    pub embedding: Option<Vec<f32>>,
    /// `true` for whitespace-only tokens.
    pub is_whitespace: bool,
}

impl AnnotatedToken {
    /// Creates a non-whitespace token without an embedding.
    pub fn new(lemma: impl Into<String>, pos: PosTag) -> Self {
        Self {
            lemma: lemma.into(),
            pos,
            embedding: None,
            is_whitespace: false,
        }
    }

    /// Attaches an embedding vector.
    pub fn with_embedding(mut self, embedding: Vec<f32>) -> Self {
        self.embedding = Some(embedding);
        self
    }

    /// Creates a whitespace token.
    pub fn whitespace() -> Self {
        Self {
            lemma: String::new(),
            pos: PosTag::Space,
            embedding: None,
            is_whitespace: true,
        }
    }

    /// Returns `true` when the token carries an embedding vector.
    pub fn has_embedding(&self) -> bool {
        self.embedding.is_some()
    }
}
