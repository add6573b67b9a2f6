//! # Expansão de Contrações do Inglês
//!
//! Reescreve formas contraídas ("can't", "it's") para suas formas expandidas
//! ("cannot", "it is") **antes** da remoção de pontuação. Sem esse passo, o apóstrofo
//! viraria espaço e "isn't" se tornaria "isn t", perdendo o "not" que o resolvedor
//! de negações precisa enxergar.
//!
//! ## Regras de casamento
//!
//! - Sensível a maiúsculas: só as formas minúsculas da tabela casam ("Isn't" fica intacto).
//! - Alinhado a palavras: "he's" não casa dentro de "she's".
//! - Mais longa primeiro: "can't've" vira "cannot have", não "cannot've".

use once_cell::sync::Lazy;

use crate::phrase_table::PhraseTable;

/// Tabela estática de contrações (forma contraída, expansão).
pub const CONTRACTIONS: &[(&str, &str)] = &[
    ("ain't", "am not"),
    ("aren't", "are not"),
    ("can't", "cannot"),
    ("can't've", "cannot have"),
    ("'cause", "because"),
    ("could've", "could have"),
    ("couldn't", "could not"),
    ("couldn't've", "could not have"),
    ("didn't", "did not"),
    ("doesn't", "does not"),
    ("don't", "do not"),
    ("hadn't", "had not"),
    ("hadn't've", "had not have"),
    ("hasn't", "has not"),
    ("haven't", "have not"),
    ("he'd", "he would"),
    ("he'd've", "he would have"),
    ("he'll", "he will"),
    ("he'll've", "he will have"),
    ("he's", "he is"),
    ("how'd", "how did"),
    ("how'd'y", "how do you"),
    ("how'll", "how will"),
    ("how's", "how is"),
    ("i'd", "i would"),
    ("i'd've", "i would have"),
    ("i'll", "i will"),
    ("i'll've", "i will have"),
    ("i'm", "i am"),
    ("i've", "i have"),
    ("isn't", "is not"),
    ("it'd", "it had"),
    ("it'd've", "it would have"),
    ("it'll", "it will"),
    ("it'll've", "it will have"),
    ("it's", "it is"),
    ("let's", "let us"),
    ("ma'am", "madam"),
    ("mayn't", "may not"),
    ("might've", "might have"),
    ("mightn't", "might not"),
    ("mightn't've", "might not have"),
    ("must've", "must have"),
    ("mustn't", "must not"),
    ("mustn't've", "must not have"),
    ("needn't", "need not"),
    ("needn't've", "need not have"),
    ("o'clock", "of the clock"),
    ("oughtn't", "ought not"),
    ("oughtn't've", "ought not have"),
    ("shan't", "shall not"),
    ("sha'n't", "shall not"),
    ("shan't've", "shall not have"),
    ("she'd", "she would"),
    ("she'd've", "she would have"),
    ("she'll", "she will"),
    ("she'll've", "she will have"),
    ("she's", "she is"),
    ("should've", "should have"),
    ("shouldn't", "should not"),
    ("shouldn't've", "should not have"),
    ("so've", "so have"),
    ("so's", "so is"),
    ("that'd", "that would"),
    ("that'd've", "that would have"),
    ("that's", "that is"),
    ("there'd", "there had"),
    ("there'd've", "there would have"),
    ("there's", "there is"),
    ("they'd", "they would"),
    ("they'd've", "they would have"),
    ("they'll", "they will"),
    ("they'll've", "they will have"),
    ("they're", "they are"),
    ("they've", "they have"),
    ("to've", "to have"),
    ("wasn't", "was not"),
    ("we'd", "we had"),
    ("we'd've", "we would have"),
    ("we'll", "we will"),
    ("we'll've", "we will have"),
    ("we're", "we are"),
    ("we've", "we have"),
    ("weren't", "were not"),
    ("what'll", "what will"),
    ("what'll've", "what will have"),
    ("what're", "what are"),
    ("what's", "what is"),
    ("what've", "what have"),
    ("when's", "when is"),
    ("when've", "when have"),
    ("where'd", "where did"),
    ("where's", "where is"),
    ("where've", "where have"),
    ("who'll", "who will"),
    ("who'll've", "who will have"),
    ("who's", "who is"),
    ("who've", "who have"),
    ("why's", "why is"),
    ("why've", "why have"),
    ("will've", "will have"),
    ("won't", "will not"),
    ("won't've", "will not have"),
    ("would've", "would have"),
    ("wouldn't", "would not"),
    ("wouldn't've", "would not have"),
    ("y'all", "you all"),
    ("y'alls", "you alls"),
    ("y'all'd", "you all would"),
    ("y'all'd've", "you all would have"),
    ("y'all're", "you all are"),
    ("y'all've", "you all have"),
    ("you'd", "you had"),
    ("you'd've", "you would have"),
    ("you'll", "you will"),
    ("you'll've", "you will have"),
    ("you're", "you are"),
    ("you've", "you have"),
];

static DEFAULT_TABLE: Lazy<PhraseTable> =
    Lazy::new(|| PhraseTable::from_pairs(CONTRACTIONS.iter().copied()));

/// Expansor de contrações sobre uma tabela imutável.
///
/// Usa a tabela estática [`CONTRACTIONS`], construída uma única vez.
#[derive(Debug, Clone)]
pub struct ContractionExpander {
    table: PhraseTable,
}

impl ContractionExpander {
    pub fn new() -> Self {
        Self {
            table: DEFAULT_TABLE.clone(),
        }
    }

    pub fn expand(&self, text: &str) -> String {
        self.expand_counted(text).0
    }

    /// Expande e devolve quantas contrações foram substituídas.
    pub fn expand_counted(&self, text: &str) -> (String, usize) {
        self.table.replace_all(text)
    }

    pub fn table(&self) -> &PhraseTable {
        &self.table
    }
}

impl Default for ContractionExpander {
    fn default() -> Self {
        Self::new()
    }
}

/// Expande contrações usando a tabela padrão.
pub fn expand_contractions(text: &str) -> String {
    DEFAULT_TABLE.replace_all(text).0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_basic() {
        assert_eq!(
            expand_contractions("This isn't good, it's bad!!"),
            "This is not good, it is bad!!"
        );
    }

    #[test]
    fn test_every_key_is_replaced() {
        let expander = ContractionExpander::new();
        for (key, value) in CONTRACTIONS {
            let out = expander.expand(&format!("well {} then", key));
            assert_eq!(out, format!("well {} then", value), "chave: {}", key);
        }
    }

    #[test]
    fn test_keys_are_unique() {
        let expander = ContractionExpander::new();
        assert_eq!(expander.table().len(), CONTRACTIONS.len());
    }

    #[test]
    fn test_case_sensitive() {
        assert_eq!(expand_contractions("Isn't it"), "Isn't it");
    }

    #[test]
    fn test_longest_form_wins() {
        assert_eq!(expand_contractions("you can't've"), "you cannot have");
        assert_eq!(expand_contractions("y'all'd've done it"), "you all would have done it");
    }

    #[test]
    fn test_not_inside_longer_word() {
        // "he's" não pode casar dentro de "she's"
        assert_eq!(expand_contractions("she's here"), "she is here");
        assert_eq!(expand_contractions("ashe's"), "ashe's");
    }

    #[test]
    fn test_counted() {
        let (out, n) = ContractionExpander::new().expand_counted("don't, won't");
        assert_eq!(out, "do not, will not");
        assert_eq!(n, 2);
    }
}
