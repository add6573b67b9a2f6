//! # Erros do Pipeline de Pré-processamento
//!
//! Apenas falhas de inicialização sobem como erro: arquivo de gírias ausente,
//! corpus ilegível, configuração inválida ou dicionário léxico inacessível.
//! Tudo o que acontece *durante* o processamento de uma linha (HTML malformado,
//! antônimo inexistente, caracteres não-ASCII) é absorvido no próprio módulo.

use std::path::PathBuf;

/// Erros fatais de carregamento de recursos.
#[derive(Debug, thiserror::Error)]
pub enum PrepError {
    /// Falha de leitura/escrita em um dos arquivos planos (corpus, gírias, saída).
    #[error("erro de E/S em {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Arquivo de configuração existe mas não é um JSON válido.
    #[error("configuração inválida em {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Recurso léxico estruturalmente inutilizável (ex: diretório sem nenhum índice).
    #[error("recurso léxico inválido em {path} (linha {line}): {reason}")]
    Lexicon {
        path: PathBuf,
        line: usize,
        reason: String,
    },
}

impl PrepError {
    /// Atalho para embrulhar um `io::Error` com o caminho que o causou.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PrepError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, PrepError>;
