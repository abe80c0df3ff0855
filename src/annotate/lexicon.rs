//! Lexicon-backed annotator.
//!
//! A lexicon is a JSON artifact mapping word forms to (lemma, POS, optional
//! embedding). This is deliberately model-free: the heavy lifting of
//! producing the artifact happens offline, and the annotator only performs
//! segmentation plus lookup, so annotation stays deterministic and cheap.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::Annotator;
use super::error::AnnotateError;
use super::types::{AnnotatedToken, PosTag};

/// Configuration for [`LexiconAnnotator`].
#[derive(Debug, Clone, Default)]
pub struct LexiconConfig {
    /// Path to the lexicon JSON artifact. `None` runs the annotator in
    /// stub mode (empty lexicon).
    pub lexicon_path: Option<PathBuf>,
}

impl LexiconConfig {
    /// Configuration backed by a lexicon artifact on disk.
    pub fn new(lexicon_path: impl Into<PathBuf>) -> Self {
        Self {
            lexicon_path: Some(lexicon_path.into()),
        }
    }

    /// Stub configuration: no artifact, every word form is out-of-lexicon.
    pub fn stub() -> Self {
        Self { lexicon_path: None }
    }
}

/// A single lexicon record for one word form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LexiconEntry {
    /// Surface form this entry annotates (matched case-insensitively).
    pub form: String,
    /// Canonical dictionary form.
    pub lemma: String,
    /// Part-of-speech tag.
    pub pos: PosTag,
    /// Embedding vector; length must equal the lexicon's declared dimension.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vector: Option<Vec<f32>>,
}

/// On-disk lexicon artifact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lexicon {
    /// Dimension every entry embedding must have.
    pub embedding_dim: usize,
    /// Word-form records. Later duplicates of a form override earlier ones.
    pub entries: Vec<LexiconEntry>,
}

/// Deterministic annotator backed by a word-form lexicon.
///
/// Segmentation is rule-based: alphanumeric runs become word tokens,
/// whitespace runs become whitespace tokens, anything else is a single
/// punctuation token. In-lexicon forms annotate to their recorded lemma,
/// tag, and embedding; unknown numeric forms are tagged `NUM`; other
/// unknown forms default to `NOUN` with the lower-cased surface form as
/// lemma and no embedding.
pub struct LexiconAnnotator {
    entries: HashMap<String, LexiconEntry>,
    embedding_dim: usize,
    lexicon_loaded: bool,
}

impl std::fmt::Debug for LexiconAnnotator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LexiconAnnotator")
            .field("entries", &self.entries.len())
            .field("embedding_dim", &self.embedding_dim)
            .field("lexicon_loaded", &self.lexicon_loaded)
            .finish()
    }
}

impl LexiconAnnotator {
    /// Loads the annotator from `config`, falling back to stub mode when no
    /// lexicon path is configured.
    pub fn load(config: LexiconConfig) -> Result<Self, AnnotateError> {
        let Some(path) = config.lexicon_path else {
            return Ok(Self::stub());
        };

        let raw = fs::read_to_string(&path).map_err(|source| AnnotateError::Io {
            path: path.clone(),
            source,
        })?;
        let lexicon: Lexicon =
            serde_json::from_str(&raw).map_err(|source| AnnotateError::Parse {
                path: path.clone(),
                source,
            })?;

        let annotator = Self::from_lexicon(lexicon)?;
        debug!(
            path = %path.display(),
            entries = annotator.entries.len(),
            embedding_dim = annotator.embedding_dim,
            "Lexicon loaded"
        );
        Ok(annotator)
    }

    /// Builds the annotator from an in-memory lexicon, validating embedding
    /// dimensions against the declared `embedding_dim`.
    pub fn from_lexicon(lexicon: Lexicon) -> Result<Self, AnnotateError> {
        let mut entries = HashMap::with_capacity(lexicon.entries.len());
        for entry in lexicon.entries {
            if let Some(vector) = &entry.vector {
                if lexicon.embedding_dim == 0 {
                    return Err(AnnotateError::ZeroDimension);
                }
                if vector.len() != lexicon.embedding_dim {
                    return Err(AnnotateError::DimensionMismatch {
                        form: entry.form,
                        expected: lexicon.embedding_dim,
                        actual: vector.len(),
                    });
                }
            }
            entries.insert(entry.form.to_lowercase(), entry);
        }

        Ok(Self {
            entries,
            embedding_dim: lexicon.embedding_dim,
            lexicon_loaded: true,
        })
    }

    /// Creates a stub annotator with an empty lexicon. Every word form is
    /// treated as out-of-lexicon, so lexical matching degrades to surface
    /// word overlap and no document gets a vector.
    pub fn stub() -> Self {
        warn!("LexiconAnnotator running in stub mode; no embeddings will be produced");
        Self {
            entries: HashMap::new(),
            embedding_dim: 0,
            lexicon_loaded: false,
        }
    }

    /// Returns `true` when a lexicon artifact is backing this annotator.
    pub fn is_lexicon_loaded(&self) -> bool {
        self.lexicon_loaded
    }

    /// Declared embedding dimension (0 in stub mode).
    pub fn embedding_dim(&self) -> usize {
        self.embedding_dim
    }

    fn annotate_word(&self, word: &str) -> AnnotatedToken {
        let lowered = word.to_lowercase();

        if let Some(entry) = self.entries.get(&lowered) {
            return AnnotatedToken {
                lemma: entry.lemma.clone(),
                pos: entry.pos,
                embedding: entry.vector.clone(),
                is_whitespace: false,
            };
        }

        if lowered.chars().all(|c| c.is_ascii_digit()) {
            return AnnotatedToken::new(lowered, PosTag::Numeral);
        }

        // Out-of-lexicon content words are most often domain nouns.
        AnnotatedToken::new(lowered, PosTag::Noun)
    }
}

impl Annotator for LexiconAnnotator {
    fn annotate(&self, text: &str) -> Vec<AnnotatedToken> {
        let mut tokens = Vec::new();
        let mut chars = text.chars().peekable();

        while let Some(&c) = chars.peek() {
            if c.is_whitespace() {
                while chars.peek().is_some_and(|c| c.is_whitespace()) {
                    chars.next();
                }
                tokens.push(AnnotatedToken::whitespace());
            } else if c.is_alphanumeric() {
                let mut word = String::new();
                while let Some(&c) = chars.peek() {
                    if c.is_alphanumeric() {
                        word.push(c);
                        chars.next();
                    } else {
                        break;
                    }
                }
                tokens.push(self.annotate_word(&word));
            } else {
                chars.next();
                tokens.push(AnnotatedToken::new(c.to_string(), PosTag::Punctuation));
            }
        }

        tokens
    }
}
