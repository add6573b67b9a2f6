//! # Tabela de Frases com Casamento Mais Longo
//!
//! Estrutura compartilhada pelo expansor de contrações e pelo substituidor de gírias.
//! Em vez de compilar uma alternação regex gigante (`\b(lol funny|lol|...)\b`), as chaves
//! são agrupadas pelo primeiro caractere e, dentro de cada grupo, ordenadas da mais longa
//! para a mais curta. A varredura anda da esquerda para a direita e, em cada posição
//! alinhada a uma fronteira de palavra, tenta apenas as chaves daquele grupo.
//!
//! ## Garantias
//!
//! - **Mais longo primeiro**: em uma mesma posição, `"lol funny"` vence `"lol"`.
//! - **Passada única**: o texto substituído nunca é reexaminado.
//! - **Alinhamento**: uma chave só casa se o caractere anterior e o posterior
//!   (quando existem) não forem caracteres de palavra. `"he's"` não casa dentro de `"she's"`.
//!
//! ```rust
//! use prep_core::phrase_table::PhraseTable;
//!
//! let table = PhraseTable::from_pairs([("lol", "laughing out loud"), ("lol funny", "hilarious")]);
//! assert_eq!(table.replace_all("so lol funny").0, "so hilarious");
//! ```

use std::collections::HashMap;

/// Uma entrada da tabela: forma de superfície → substituição.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry {
    key: String,
    value: String,
}

/// Tabela imutável (após construída) de substituições por casamento mais longo.
#[derive(Debug, Clone, Default)]
pub struct PhraseTable {
    /// Chaves agrupadas pelo primeiro caractere, cada grupo ordenado por tamanho decrescente.
    buckets: HashMap<char, Vec<Entry>>,
    len: usize,
}

impl PhraseTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Constrói a tabela a partir de pares (chave, valor). Chaves repetidas: vale a última.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut table = Self::new();
        for (k, v) in pairs {
            table.insert(k, v);
        }
        table
    }

    /// Insere (ou sobrescreve) uma chave. Chaves vazias são ignoradas.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        let Some(first) = key.chars().next() else {
            return;
        };

        let bucket = self.buckets.entry(first).or_default();
        if let Some(existing) = bucket.iter_mut().find(|e| e.key == key) {
            existing.value = value;
            return;
        }
        bucket.push(Entry { key, value });
        // Mais longa primeiro; empate resolvido pela ordem lexicográfica para ser determinístico
        bucket.sort_by(|a, b| b.key.len().cmp(&a.key.len()).then_with(|| a.key.cmp(&b.key)));
        self.len += 1;
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Consulta exata de uma chave.
    pub fn get(&self, key: &str) -> Option<&str> {
        let first = key.chars().next()?;
        self.buckets
            .get(&first)?
            .iter()
            .find(|e| e.key == key)
            .map(|e| e.value.as_str())
    }

    /// Substitui todas as ocorrências alinhadas, em uma única passada.
    ///
    /// Retorna o texto resultante e o número de substituições feitas.
    pub fn replace_all(&self, text: &str) -> (String, usize) {
        if self.is_empty() {
            return (text.to_string(), 0);
        }

        let mut out = String::with_capacity(text.len());
        let mut count = 0;
        let mut prev: Option<char> = None;
        let mut i = 0;

        while i < text.len() {
            let rest = &text[i..];
            let Some(ch) = rest.chars().next() else {
                break;
            };

            if !prev.is_some_and(is_word_char) {
                if let Some(entry) = self.longest_at(rest, ch) {
                    out.push_str(&entry.value);
                    count += 1;
                    prev = entry.key.chars().last();
                    i += entry.key.len();
                    continue;
                }
            }

            out.push(ch);
            prev = Some(ch);
            i += ch.len_utf8();
        }

        (out, count)
    }

    /// Maior chave que começa exatamente em `rest` e termina numa fronteira de palavra.
    fn longest_at(&self, rest: &str, first: char) -> Option<&Entry> {
        self.buckets.get(&first)?.iter().find(|e| {
            rest.starts_with(e.key.as_str())
                && !rest[e.key.len()..].chars().next().is_some_and(is_word_char)
        })
    }
}

/// Caractere de palavra no sentido de `\w`: alfanumérico ou sublinhado.
pub(crate) fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_longest_key_wins() {
        let table = PhraseTable::from_pairs([("lol", "laughing out loud"), ("lol funny", "hilarious")]);
        let (out, n) = table.replace_all("that was lol funny");
        assert_eq!(out, "that was hilarious");
        assert_eq!(n, 1);
    }

    #[test]
    fn test_no_partial_word_hits() {
        let table = PhraseTable::from_pairs([("he's", "he is"), ("lol", "laughing out loud")]);
        assert_eq!(table.replace_all("she's lolling").0, "she's lolling");
        assert_eq!(table.replace_all("he's here").0, "he is here");
    }

    #[test]
    fn test_single_pass_never_rescans() {
        // "a" → "b b" e "b" → "c": o "b" gerado não pode virar "c"
        let table = PhraseTable::from_pairs([("a", "b b"), ("b", "c")]);
        let (out, n) = table.replace_all("a b");
        assert_eq!(out, "b b c");
        assert_eq!(n, 2);
    }

    #[test]
    fn test_duplicate_key_keeps_last_value() {
        let mut table = PhraseTable::new();
        table.insert("brb", "be right back");
        table.insert("brb", "be back soon");
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("brb"), Some("be back soon"));
    }

    #[test]
    fn test_empty_table_is_identity() {
        let table = PhraseTable::new();
        assert_eq!(table.replace_all("nada muda"), ("nada muda".to_string(), 0));
    }

    #[test]
    fn test_key_starting_with_apostrophe() {
        let table = PhraseTable::from_pairs([("'cause", "because")]);
        assert_eq!(table.replace_all("just 'cause").0, "just because");
    }
}
