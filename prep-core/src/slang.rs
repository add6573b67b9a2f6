//! # Substituição de Gírias e Abreviações
//!
//! O mapa de gírias é carregado uma única vez de um arquivo de texto com um registro
//! por linha, no formato `forma<TAB>expansão`:
//!
//! ```text
//! lol	laughing out loud
//! brb	be right back
//! ```
//!
//! Linhas vazias, sem tabulação ou com forma vazia são ignoradas. Ambos os lados
//! são aparados. A substituição casa palavras inteiras, prefere a chave mais longa
//! em cada posição e faz uma única passada (o texto expandido não é reexaminado).

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use tracing::{debug, info};

use crate::error::{PrepError, Result};
use crate::phrase_table::PhraseTable;

/// Mapa imutável de gírias → expansões canônicas.
#[derive(Debug, Clone, Default)]
pub struct SlangMap {
    table: PhraseTable,
}

impl SlangMap {
    /// Mapa vazio: a substituição vira identidade.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            table: PhraseTable::from_pairs(pairs),
        }
    }

    /// Carrega o mapa de um arquivo. Arquivo ausente ou ilegível é erro fatal.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| PrepError::io(path, e))?;
        let map = Self::from_reader(file).map_err(|e| PrepError::io(path, e))?;
        info!("Mapa de gírias carregado de {}: {} entradas", path.display(), map.len());
        Ok(map)
    }

    /// Lê registros `forma<TAB>expansão` de qualquer leitor.
    pub fn from_reader<R: Read>(reader: R) -> std::io::Result<Self> {
        let mut table = PhraseTable::new();
        let mut skipped = 0usize;

        for line in BufReader::new(reader).lines() {
            let line = line?;
            match parse_record(&line) {
                Some((surface, expansion)) => table.insert(surface, expansion),
                None if line.trim().is_empty() => {}
                None => skipped += 1,
            }
        }

        if skipped > 0 {
            debug!("{} linhas do mapa de gírias ignoradas (sem tabulação ou forma vazia)", skipped);
        }
        Ok(Self { table })
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn get(&self, surface: &str) -> Option<&str> {
        self.table.get(surface)
    }

    pub fn substitute(&self, text: &str) -> String {
        self.substitute_counted(text).0
    }

    /// Substitui e devolve quantas gírias foram expandidas.
    pub fn substitute_counted(&self, text: &str) -> (String, usize) {
        self.table.replace_all(text)
    }

    /// Tokens que são gírias conhecidas (sem substituir), na ordem em que aparecem.
    pub fn detect<'a>(&self, tokens: &'a [String]) -> Vec<&'a str> {
        tokens
            .iter()
            .filter(|t| self.table.get(t).is_some())
            .map(String::as_str)
            .collect()
    }
}

/// Uma linha `forma<TAB>expansão` → par aparado. `None` para linhas inválidas.
fn parse_record(line: &str) -> Option<(&str, &str)> {
    let (surface, expansion) = line.split_once('\t')?;
    let surface = surface.trim();
    if surface.is_empty() {
        return None;
    }
    Some((surface, expansion.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_substitute_basic() {
        let map = SlangMap::from_pairs([("lol", "laughing out loud")]);
        assert_eq!(
            map.substitute("that was lol funny"),
            "that was laughing out loud funny"
        );
    }

    #[test]
    fn test_longer_key_wins() {
        let map = SlangMap::from_pairs([("lol", "laughing out loud"), ("lol funny", "hilarious")]);
        assert_eq!(map.substitute("that was lol funny"), "that was hilarious");
        assert_eq!(map.substitute("lol"), "laughing out loud");
    }

    #[test]
    fn test_whole_words_only() {
        let map = SlangMap::from_pairs([("gr8", "great"), ("u", "you")]);
        assert_eq!(map.substitute("u r gr8 but gr8er"), "you r great but gr8er");
        assert_eq!(map.substitute("fun"), "fun");
    }

    #[test]
    fn test_expansion_not_rescanned() {
        let map = SlangMap::from_pairs([("idk", "i do not know"), ("know", "KNOW")]);
        assert_eq!(map.substitute("idk"), "i do not know");
    }

    #[test]
    fn test_from_reader_skips_invalid_lines() {
        let data = "lol\tlaughing out loud\n\nno tab here\n  brb \t be right back \n\tempty surface\n";
        let map = SlangMap::from_reader(data.as_bytes()).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("brb"), Some("be right back"));
        assert_eq!(map.get("no tab here"), None);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "omg\toh my god").unwrap();
        writeln!(file, "imo\tin my opinion").unwrap();
        let map = SlangMap::load(file.path()).unwrap();
        assert_eq!(map.substitute("omg imo"), "oh my god in my opinion");
    }

    #[test]
    fn test_missing_file_is_error() {
        let err = SlangMap::load("/nao/existe/slang.txt").unwrap_err();
        assert!(matches!(err, PrepError::Io { .. }));
    }

    #[test]
    fn test_detect() {
        let map = SlangMap::from_pairs([("lol", "laughing out loud")]);
        let tokens: Vec<String> = ["so", "lol", "ok", "lol"].iter().map(|s| s.to_string()).collect();
        assert_eq!(map.detect(&tokens), vec!["lol", "lol"]);
    }
}
