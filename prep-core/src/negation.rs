//! # Resolução de Negações por Antônimos
//!
//! Para classificadores de sentimento baseados em bag-of-words, "not good" é um problema:
//! o token "good" puxa a polaridade para o lado errado. Este módulo troca o par
//! `"not" X` por um único antônimo de X, quando o recurso léxico conhece algum.
//!
//! ## Algoritmo (guloso, passada única, sem retrocesso)
//!
//! ```text
//! i = 0
//! enquanto i < n:
//!     se tokens[i] == "not" e existe tokens[i+1]:
//!         A = antônimos(tokens[i+1])
//!         se A não vazio: emite escolha(A); i += 2; continua
//!     emite tokens[i]; i += 1
//! ```
//!
//! Um par é colapsado por inteiro ou deixado intacto, nunca reescrito pela metade.
//! A escolha entre vários antônimos é explícita ([`AntonymChoice`]) para que o
//! resultado seja reprodutível.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::lexicon::LexicalResource;

/// O token de negação reconhecido.
pub const NEGATION_TOKEN: &str = "not";

/// Política de escolha quando há mais de um antônimo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AntonymChoice {
    /// O menor na ordem lexicográfica.
    First,
    /// O maior na ordem lexicográfica.
    Last,
}

impl Default for AntonymChoice {
    fn default() -> Self {
        AntonymChoice::First
    }
}

impl AntonymChoice {
    pub fn pick(&self, antonyms: &BTreeSet<String>) -> Option<String> {
        match self {
            AntonymChoice::First => antonyms.iter().next().cloned(),
            AntonymChoice::Last => antonyms.iter().next_back().cloned(),
        }
    }
}

/// Contadores de uma chamada ao resolvedor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NegationStats {
    /// Pares "not X" colapsados em um antônimo.
    pub resolved: usize,
    /// "not" seguido de palavra sem antônimo conhecido (ou "not" final).
    pub unresolved: usize,
}

/// Resolve negações consultando um recurso léxico injetado.
pub struct NegationResolver<'a> {
    lexicon: &'a dyn LexicalResource,
    choice: AntonymChoice,
}

impl<'a> NegationResolver<'a> {
    pub fn new(lexicon: &'a dyn LexicalResource, choice: AntonymChoice) -> Self {
        Self { lexicon, choice }
    }

    pub fn resolve(&self, tokens: &[String]) -> Vec<String> {
        self.resolve_counted(tokens).0
    }

    pub fn resolve_counted(&self, tokens: &[String]) -> (Vec<String>, NegationStats) {
        let mut out = Vec::with_capacity(tokens.len());
        let mut stats = NegationStats::default();
        let mut i = 0;

        while i < tokens.len() {
            let token = &tokens[i];
            if token == NEGATION_TOKEN {
                if let Some(next) = tokens.get(i + 1) {
                    let antonyms = self.lexicon.antonyms_of(next, None);
                    if let Some(antonym) = self.choice.pick(&antonyms) {
                        out.push(antonym);
                        stats.resolved += 1;
                        i += 2;
                        continue;
                    }
                }
                stats.unresolved += 1;
            }
            out.push(token.clone());
            i += 1;
        }

        (out, stats)
    }
}
