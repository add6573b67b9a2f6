//! # Configuração
//!
//! Tudo é opcional: sem arquivo de configuração o programa se comporta exatamente
//! como o script de preparação clássico (lê `rt-polarity.neg` e `slang.txt`,
//! escreve em `test`). Um `sentiment-prep.json` no diretório atual sobrescreve
//! apenas os campos que declarar:
//!
//! ```json
//! {
//!   "corpus": "data/rt-polarity.neg",
//!   "lexicon": { "kind": "wordnet", "path": "/usr/share/wordnet/dict" },
//!   "noise_mode": "full",
//!   "transliterate": true
//! }
//! ```

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{PrepError, Result};
use crate::lexicon::{LexicalResource, MemoryLexicon, NoLexicon};
use crate::pipeline::PipelineOptions;
use crate::wordnet::WordNetLexicon;

/// Nome do arquivo de configuração procurado no diretório atual.
pub const CONFIG_FILE: &str = "sentiment-prep.json";

/// De onde vêm os antônimos.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "path", rename_all = "snake_case")]
pub enum LexiconSource {
    /// Diretório `dict/` do WordNet 3.x.
    #[serde(rename = "wordnet")]
    WordNet(PathBuf),
    /// Arquivo `palavra<TAB>antônimo`.
    Tsv(PathBuf),
}

impl LexiconSource {
    pub fn load(&self) -> Result<Box<dyn LexicalResource>> {
        match self {
            LexiconSource::WordNet(dir) => Ok(Box::new(WordNetLexicon::open(dir)?)),
            LexiconSource::Tsv(path) => Ok(Box::new(MemoryLexicon::load_tsv(path)?)),
        }
    }
}

/// Configuração completa de uma execução.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrepConfig {
    /// Corpus de entrada (uma resenha por linha).
    pub corpus: PathBuf,
    /// Mapa de gírias (`forma<TAB>expansão`).
    pub slang: PathBuf,
    /// Arquivo de saída.
    pub output: PathBuf,
    /// Recurso de antônimos; `None` desliga a resolução de negações.
    pub lexicon: Option<LexiconSource>,
    /// Relatório JSON opcional com os contadores da execução.
    pub report: Option<PathBuf>,
    #[serde(flatten)]
    pub pipeline: PipelineOptions,
}

impl Default for PrepConfig {
    fn default() -> Self {
        Self {
            corpus: PathBuf::from("rt-polarity.neg"),
            slang: PathBuf::from("slang.txt"),
            output: PathBuf::from("test"),
            lexicon: None,
            report: None,
            pipeline: PipelineOptions::default(),
        }
    }
}

impl PrepConfig {
    /// Lê e valida um arquivo de configuração.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|e| PrepError::io(path, e))?;
        Self::from_json(&raw).map_err(|source| PrepError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Como [`PrepConfig::load`], mas arquivo inexistente resulta na configuração padrão.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        match fs::metadata(path) {
            Ok(_) => {
                let config = Self::load(path)?;
                info!("Configuração lida de {}", path.display());
                Ok(config)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(PrepError::io(path, e)),
        }
    }

    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw)
    }

    /// Carrega o recurso léxico configurado, ou o recurso nulo.
    pub fn load_lexicon(&self) -> Result<Box<dyn LexicalResource>> {
        match &self.lexicon {
            Some(source) => source.load(),
            None => Ok(Box::new(NoLexicon)),
        }
    }
}
