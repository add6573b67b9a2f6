//! # Filtros Opcionais
//!
//! Passos extras desligados por padrão: minúsculas, remoção de stopwords e
//! deduplicação de linhas do corpus. Rodam depois da resolução de negações, já que
//! "not" é uma stopword e precisa ser visto pelo resolvedor antes de sumir.

use std::collections::HashSet;

use once_cell::sync::Lazy;

/// Stopwords do inglês (lista do NLTK).
pub const ENGLISH_STOPWORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan", "shan't",
    "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't", "wouldn",
    "wouldn't",
];

static STOPWORD_SET: Lazy<HashSet<&'static str>> = Lazy::new(|| ENGLISH_STOPWORDS.iter().copied().collect());

pub fn is_stopword(token: &str) -> bool {
    STOPWORD_SET.contains(token)
}

/// Converte todos os tokens para minúsculas.
pub fn to_lowercase(tokens: Vec<String>) -> Vec<String> {
    tokens.into_iter().map(|t| t.to_lowercase()).collect()
}

/// Remove stopwords (comparação exata, sensível a maiúsculas como a lista original).
pub fn remove_stopwords(tokens: Vec<String>) -> Vec<String> {
    tokens.into_iter().filter(|t| !is_stopword(t)).collect()
}

/// Remove linhas repetidas mantendo a primeira ocorrência e a ordem original.
///
/// Retorna as linhas únicas e quantas foram descartadas.
pub fn deduplicate_lines(lines: &[String]) -> (Vec<&str>, usize) {
    let mut seen = HashSet::new();
    let mut unique = Vec::with_capacity(lines.len());
    for line in lines {
        if seen.insert(line.as_str()) {
            unique.push(line.as_str());
        }
    }
    let dropped = lines.len() - unique.len();
    (unique, dropped)
}
