//! # prep-core — Pré-processamento de Corpora para Análise de Sentimento
//!
//! Este crate transforma resenhas cruas (uma por linha) em sequências de tokens limpas,
//! prontas para alimentar um classificador de sentimento.
//!
//! ## Arquitetura do Sistema
//!
//! Pipeline linear de transformações sem estado, aplicadas a cada linha:
//!
//! 1.  **Contrações** ([`contractions`]): "can't" → "cannot", antes que a pontuação suma.
//! 2.  **Ruído** ([`noise`]): letras soltas, números, pontuação, espaços repetidos (e HTML, opcionalmente).
//! 3.  **Gírias** ([`slang`]): "lol" → "laughing out loud", chave mais longa primeiro.
//! 4.  **Tokenização** ([`tokenizer`]): fronteiras de palavra Unicode.
//! 5.  **Negações** ([`negation`]): "not good" → "bad", via um [`lexicon::LexicalResource`] injetado.
//! 6.  **Saída**: tokens unidos por espaço, uma linha por resenha.
//!
//! ## Exemplo de Uso
//!
//! ```rust
//! use prep_core::{MemoryLexicon, PipelineOptions, PrepPipeline, PrepResources, SlangMap};
//!
//! // 1. Recursos imutáveis (normalmente carregados de arquivos na inicialização)
//! let lexicon = MemoryLexicon::from_pairs([("good", "bad")]);
//! let resources = PrepResources::new(SlangMap::empty(), Box::new(lexicon));
//!
//! // 2. Pipeline com as opções padrão
//! let pipeline = PrepPipeline::new(resources, PipelineOptions::default());
//!
//! // 3. Processa uma resenha
//! assert_eq!(pipeline.process_line("This isn't good, it's bad!!"), "This is bad it is bad\n");
//! ```
//!
//! ## Módulos Principais
//!
//! - [`pipeline`]: Orquestrador que conecta todos os estágios.
//! - [`wordnet`]: Backend de antônimos lendo os arquivos do WordNet.
//! - [`config`]: Configuração da execução (JSON opcional).
//! - [`corpus`]: Leitura e escrita dos arquivos de linhas.

pub mod config;
pub mod contractions;
pub mod corpus;
pub mod error;
pub mod filters;
pub mod lexicon;
pub mod negation;
pub mod noise;
pub mod phrase_table;
pub mod pipeline;
pub mod slang;
pub mod tokenizer;
pub mod wordnet;

pub use config::{LexiconSource, PrepConfig};
pub use error::{PrepError, Result};
pub use lexicon::{LexicalResource, MemoryLexicon, NoLexicon, PartOfSpeech};
pub use negation::AntonymChoice;
pub use noise::NoiseMode;
pub use pipeline::{PipelineEvent, PipelineOptions, PrepPipeline, PrepReport, PrepResources};
pub use slang::SlangMap;
