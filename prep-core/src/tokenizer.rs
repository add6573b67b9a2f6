//! # Tokenização
//!
//! Depois da limpeza o texto contém basicamente letras e espaços, mas as expansões de
//! gírias podem reintroduzir pontuação ("w/" → "with/"), então a segmentação segue as
//! fronteiras de palavra do Unicode (UAX #29): palavras viram tokens, pontuação vira
//! token próprio e espaços são descartados.
//!
//! Diferente dos tokenizadores no estilo Penn Treebank, o UAX #29 não separa clíticos:
//! um apóstrofo entre letras fica dentro da palavra, então uma expansão como `i'm`
//! continua sendo um único token (e não `i` + `'m`).
//!
//! ```rust
//! use prep_core::tokenizer::{detokenize, tokenize};
//!
//! let tokens = tokenize("This is not good");
//! assert_eq!(tokens, vec!["This", "is", "not", "good"]);
//! assert_eq!(detokenize(&tokens), "This is not good");
//! ```

use unicode_segmentation::UnicodeSegmentation;

/// Divide o texto em tokens nas fronteiras de palavra, ignorando espaços.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_word_bounds()
        .filter(|segment| !segment.trim().is_empty())
        .map(str::to_string)
        .collect()
}

/// Junta tokens com um único espaço.
pub fn detokenize<S: AsRef<str>>(tokens: &[S]) -> String {
    let mut out = String::new();
    for (i, token) in tokens.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(token.as_ref());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_clean_text() {
        assert_eq!(tokenize("  it is   bad "), vec!["it", "is", "bad"]);
    }

    #[test]
    fn test_tokenize_empty() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   ").is_empty());
    }

    #[test]
    fn test_punctuation_is_own_token() {
        assert_eq!(tokenize("good, bad!"), vec!["good", ",", "bad", "!"]);
    }

    #[test]
    fn test_apostrophe_inside_word_is_kept() {
        assert_eq!(tokenize("i'm here"), vec!["i'm", "here"]);
    }

    #[test]
    fn test_detokenize() {
        assert_eq!(detokenize(&["a", "b", "c"]), "a b c");
        assert_eq!(detokenize::<&str>(&[]), "");
    }
}
