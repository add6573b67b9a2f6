//! # Adaptador de Recurso Léxico
//!
//! O resolvedor de negações precisa de uma única pergunta: "quais são os antônimos
//! desta palavra?". Essa pergunta é modelada como o trait [`LexicalResource`], para que
//! o dicionário real (ex: [`crate::wordnet::WordNetLexicon`]) possa ser trocado por uma
//! tabela fixa em memória nos testes.
//!
//! Todos os backends são somente-leitura depois de construídos, portanto podem ser
//! compartilhados sem trava.

use std::collections::{BTreeSet, HashMap};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{PrepError, Result};

/// Classe gramatical opcional usada para restringir a consulta.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartOfSpeech {
    Noun,
    Verb,
    Adjective,
    /// Adjetivo satélite (agrupado em torno de um adjetivo "cabeça" no WordNet).
    AdjectiveSatellite,
    Adverb,
}

impl PartOfSpeech {
    pub const ALL: [PartOfSpeech; 5] = [
        PartOfSpeech::Noun,
        PartOfSpeech::Verb,
        PartOfSpeech::Adjective,
        PartOfSpeech::AdjectiveSatellite,
        PartOfSpeech::Adverb,
    ];

    /// Letra usada pelo WordNet (`n`, `v`, `a`, `s`, `r`).
    pub fn code(&self) -> char {
        match self {
            PartOfSpeech::Noun => 'n',
            PartOfSpeech::Verb => 'v',
            PartOfSpeech::Adjective => 'a',
            PartOfSpeech::AdjectiveSatellite => 's',
            PartOfSpeech::Adverb => 'r',
        }
    }

    pub fn from_code(c: char) -> Option<Self> {
        match c {
            'n' => Some(PartOfSpeech::Noun),
            'v' => Some(PartOfSpeech::Verb),
            'a' => Some(PartOfSpeech::Adjective),
            's' => Some(PartOfSpeech::AdjectiveSatellite),
            'r' => Some(PartOfSpeech::Adverb),
            _ => None,
        }
    }
}

/// Serviço de relações lexicais consumido pelo resolvedor de negações.
pub trait LexicalResource: Send + Sync {
    /// Antônimos de `word`, opcionalmente restritos a uma classe gramatical.
    ///
    /// Conjunto vazio quando a palavra é desconhecida ou não tem antônimos;
    /// falhas de consulta também devem virar conjunto vazio.
    fn antonyms_of(&self, word: &str, pos: Option<PartOfSpeech>) -> BTreeSet<String>;
}

impl<T: LexicalResource + ?Sized> LexicalResource for Box<T> {
    fn antonyms_of(&self, word: &str, pos: Option<PartOfSpeech>) -> BTreeSet<String> {
        (**self).antonyms_of(word, pos)
    }
}

/// Recurso nulo: nunca conhece antônimos. Desliga a reescrita de negações.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLexicon;

impl LexicalResource for NoLexicon {
    fn antonyms_of(&self, _word: &str, _pos: Option<PartOfSpeech>) -> BTreeSet<String> {
        BTreeSet::new()
    }
}

/// Tabela de antônimos em memória.
///
/// Útil como fixture de testes e para listas curadas à mão. As entradas podem ter
/// classe gramatical; uma consulta sem classe enxerga todas.
#[derive(Debug, Clone, Default)]
pub struct MemoryLexicon {
    entries: HashMap<String, Vec<(Option<PartOfSpeech>, String)>>,
}

impl MemoryLexicon {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registra `antonym` como antônimo de `word` (apenas nessa direção).
    pub fn insert(&mut self, word: &str, antonym: &str, pos: Option<PartOfSpeech>) {
        let list = self.entries.entry(word.to_string()).or_default();
        let entry = (pos, antonym.to_string());
        if !list.contains(&entry) {
            list.push(entry);
        }
    }

    /// Registra o par nas duas direções (`good` ↔ `bad`).
    pub fn insert_pair(&mut self, a: &str, b: &str, pos: Option<PartOfSpeech>) {
        self.insert(a, b, pos);
        self.insert(b, a, pos);
    }

    /// Constrói a partir de pares simétricos sem classe gramatical.
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut lexicon = Self::new();
        for (a, b) in pairs {
            lexicon.insert_pair(a, b, None);
        }
        lexicon
    }

    /// Carrega pares `palavra<TAB>antônimo` (um por linha, inseridos nas duas direções).
    ///
    /// Linhas sem tabulação são ignoradas com aviso.
    pub fn load_tsv(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| PrepError::io(path, e))?;
        let mut lexicon = Self::new();

        for (n, line) in BufReader::new(file).lines().enumerate() {
            let line = line.map_err(|e| PrepError::io(path, e))?;
            if line.trim().is_empty() {
                continue;
            }
            match line.split_once('\t') {
                Some((a, b)) if !a.trim().is_empty() && !b.trim().is_empty() => {
                    lexicon.insert_pair(a.trim(), b.trim(), None);
                }
                _ => warn!("{}:{}: linha de antônimos ignorada", path.display(), n + 1),
            }
        }

        info!("Léxico de antônimos carregado de {}: {} palavras", path.display(), lexicon.len());
        Ok(lexicon)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl LexicalResource for MemoryLexicon {
    fn antonyms_of(&self, word: &str, pos: Option<PartOfSpeech>) -> BTreeSet<String> {
        let Some(list) = self.entries.get(word) else {
            return BTreeSet::new();
        };
        list.iter()
            .filter(|(entry_pos, _)| pos.is_none() || entry_pos.is_none() || *entry_pos == pos)
            .map(|(_, antonym)| antonym.clone())
            .collect()
    }
}
