//! # Remoção de Ruído
//!
//! Sequência fixa de passadas sobre uma string. A ordem importa:
//!
//! 1. [`strip_markup`] — remove tags HTML, preservando o texto embutido.
//! 2. [`strip_bracketed`] — remove trechos entre `[` e `]` (inclusive).
//! 3. [`strip_single_letters`] — palavras de uma única letra viram espaço.
//! 4. [`strip_non_letters`] — tudo que não é letra ASCII ou espaço vira espaço.
//! 5. [`collapse_spaces`] — sequências de espaços viram um único espaço.
//!
//! O pipeline padrão aplica apenas os passos 3–5 ([`NoiseMode::Standard`]); o modo
//! [`NoiseMode::Full`] inclui a limpeza de marcação. No pipeline os passos 1–2
//! ([`NoiseStripper::strip_structure`]) rodam antes da expansão de contrações, que
//! por sua vez precisa vir antes dos passos 3–5 (o passo 4 destrói apóstrofos).
//! A substituição de gírias vem depois de tudo.
//!
//! ```rust
//! use prep_core::noise::{NoiseMode, NoiseStripper};
//!
//! let stripper = NoiseStripper::new(NoiseMode::Standard);
//! assert_eq!(stripper.strip("This is not good, it is bad!!"), "This is not good it is bad");
//! ```

use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData, RcDom};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

static BRACKETED: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[[^\]]*\]").expect("regex válida"));
static SINGLE_LETTER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b[a-zA-Z]\b").expect("regex válida"));
static MULTI_SPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r" {2,}").expect("regex válida"));

/// Tags cujo conteúdo não é texto legível.
const RAW_TEXT_TAGS: &[&str] = &["script", "style", "template"];

/// Tags de bloco: ao removê-las inserimos um espaço para não colar palavras vizinhas.
const BLOCK_TAGS: &[&str] = &["br", "p", "div", "li", "tr", "td", "h1", "h2", "h3", "h4", "h5", "h6"];

/// Quais passadas aplicar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoiseMode {
    /// Passos 3–5: letras soltas, não-letras e espaços (o que o pipeline usa por padrão).
    Standard,
    /// Passos 1–5: inclui remoção de HTML e de trechos entre colchetes.
    Full,
}

impl Default for NoiseMode {
    fn default() -> Self {
        NoiseMode::Standard
    }
}

/// Aplica as passadas de limpeza na ordem fixa do modo configurado.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoiseStripper {
    mode: NoiseMode,
}

impl NoiseStripper {
    pub fn new(mode: NoiseMode) -> Self {
        Self { mode }
    }

    /// Todas as passadas do modo, em ordem.
    pub fn strip(&self, text: &str) -> String {
        self.strip_characters(&self.strip_structure(text))
    }

    /// Passos 1–2 (só no modo [`NoiseMode::Full`]); identidade no modo padrão.
    ///
    /// O pipeline chama esta etapa antes das contrações, porque entidades como
    /// `&#39;` só viram apóstrofo depois de decodificadas.
    pub fn strip_structure(&self, text: &str) -> String {
        match self.mode {
            NoiseMode::Full => strip_bracketed(&strip_markup(text)),
            NoiseMode::Standard => text.to_string(),
        }
    }

    /// Passos 3–5.
    pub fn strip_characters(&self, text: &str) -> String {
        let text = strip_single_letters(text);
        let text = strip_non_letters(&text);
        collapse_spaces(&text)
    }
}

/// Remove marcação HTML, mantendo apenas o texto.
///
/// O texto é interpretado como documento HTML pelo `html5ever` (que nunca falha e
/// decodifica todas as entidades nomeadas e numéricas) e os nós de texto são
/// concatenados em ordem. Comentários e o conteúdo de `<script>`/`<style>` somem.
pub fn strip_markup(text: &str) -> String {
    let dom = parse_document(RcDom::default(), Default::default()).one(text);
    let mut out = String::with_capacity(text.len());
    collect_text(&dom.document, &mut out);
    out
}

fn collect_text(handle: &Handle, out: &mut String) {
    match &handle.data {
        NodeData::Text { contents } => out.push_str(&contents.borrow()),
        NodeData::Element { name, .. } => {
            let tag: &str = &name.local;
            if RAW_TEXT_TAGS.contains(&tag) {
                return;
            }
            let block = BLOCK_TAGS.contains(&tag);
            if block {
                separate(out);
            }
            for child in handle.children.borrow().iter() {
                collect_text(child, out);
            }
            if block {
                separate(out);
            }
        }
        NodeData::Document => {
            for child in handle.children.borrow().iter() {
                collect_text(child, out);
            }
        }
        _ => {}
    }
}

fn separate(out: &mut String) {
    if !out.is_empty() && !out.ends_with(char::is_whitespace) {
        out.push(' ');
    }
}

/// Remove `[` ... `]` e o conteúdo. Colchete não fechado permanece.
pub fn strip_bracketed(text: &str) -> String {
    BRACKETED.replace_all(text, "").into_owned()
}

/// Substitui cada palavra de uma letra só (`\b[a-zA-Z]\b`) por espaço.
pub fn strip_single_letters(text: &str) -> String {
    SINGLE_LETTER.replace_all(text, " ").into_owned()
}

/// Substitui todo caractere que não é letra ASCII nem espaço por espaço.
pub fn strip_non_letters(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_ascii_alphabetic() || c == ' ' { c } else { ' ' })
        .collect()
}

/// Colapsa sequências de espaços em um único espaço e apara as bordas.
pub fn collapse_spaces(text: &str) -> String {
    MULTI_SPACE.replace_all(text, " ").trim_matches(' ').to_string()
}

/// Translitera para ASCII: decomposição NFKD e descarte do que sobrar fora do ASCII.
///
/// `"café"` → `"cafe"`, `"isn’t"` → `"isn't"`. Caracteres sem representação são
/// simplesmente descartados, sem marcador de substituição.
pub fn transliterate(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.nfkd() {
        if c.is_ascii() {
            out.push(c);
            continue;
        }
        if let Some(replacement) = ascii_fallback(c) {
            out.push_str(replacement);
        }
    }
    out
}

/// Letras e pontuação que a decomposição NFKD não reduz a ASCII.
fn ascii_fallback(c: char) -> Option<&'static str> {
    let s = match c {
        'ß' => "ss",
        'æ' => "ae",
        'Æ' => "AE",
        'œ' => "oe",
        'Œ' => "OE",
        'ø' => "o",
        'Ø' => "O",
        'ł' => "l",
        'Ł' => "L",
        'đ' => "d",
        'Đ' => "D",
        'þ' => "th",
        'Þ' => "Th",
        '\u{2018}' | '\u{2019}' | '\u{02BC}' => "'",
        '\u{201C}' | '\u{201D}' => "\"",
        '\u{2013}' | '\u{2014}' => "-",
        '\u{00A0}' => " ",
        _ => return None,
    };
    Some(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_strip() {
        let stripper = NoiseStripper::new(NoiseMode::Standard);
        assert_eq!(
            stripper.strip("This is not good, it is bad!!"),
            "This is not good it is bad"
        );
    }

    #[test]
    fn test_single_letters_removed() {
        let stripper = NoiseStripper::default();
        assert_eq!(stripper.strip("I think a movie is ok"), "think movie is ok");
    }

    #[test]
    fn test_numbers_and_punctuation() {
        let stripper = NoiseStripper::default();
        assert_eq!(stripper.strip("rated 10/10 -- wow!!!"), "rated wow");
    }

    #[test]
    fn test_idempotent() {
        let stripper = NoiseStripper::new(NoiseMode::Full);
        let inputs = [
            "This is not good, it is bad!!",
            "  <p>a <b>great</b> film</p> [spoiler] ...  ",
            "simplesmente   clean text",
            "U.S. audiences -- don't care?",
            "",
        ];
        for input in inputs {
            let once = stripper.strip(input);
            assert_eq!(stripper.strip(&once), once, "entrada: {:?}", input);
        }
    }

    #[test]
    fn test_not_idempotent_with_digits_glued_to_letters() {
        // O passo 3 roda antes do 4: letras separadas por dígito só ficam soltas na segunda passada
        let stripper = NoiseStripper::default();
        let once = stripper.strip("x1y b4");
        assert_eq!(once, "x y b");
        assert_eq!(stripper.strip(&once), "");
    }

    #[test]
    fn test_strip_markup_keeps_text() {
        assert_eq!(strip_markup("<b>great</b> film"), "great film");
        assert_eq!(strip_markup("fish &amp; chips"), "fish & chips");
        assert_eq!(strip_markup("a<br/>b"), "a b");
        assert_eq!(strip_markup("x<script>var a = 1;</script>y"), "xy");
        assert_eq!(strip_markup("ok<!-- hidden -->go"), "okgo");
    }

    #[test]
    fn test_strip_markup_decodes_all_entities() {
        assert_eq!(
            strip_markup("caf&eacute; &hellip; isn&rsquo;t"),
            "caf\u{e9} \u{2026} isn\u{2019}t"
        );
        assert_eq!(strip_markup("isn&#39;t &#x41;&#66;"), "isn't AB");
    }

    #[test]
    fn test_strip_markup_malformed() {
        // "<" sem nome de tag é texto; entidade desconhecida fica como está
        assert_eq!(strip_markup("3 < 5 and"), "3 < 5 and");
        assert_eq!(strip_markup("&bogus; &#65;"), "&bogus; A");
        // Tag não fechada no fim do texto é descartada
        assert_eq!(strip_markup("broken <b tag"), "broken ");
    }

    #[test]
    fn test_strip_bracketed() {
        assert_eq!(strip_bracketed("good [citation needed] movie"), "good  movie");
        assert_eq!(strip_bracketed("open [ never closed"), "open [ never closed");
    }

    #[test]
    fn test_full_mode_removes_markup() {
        let stripper = NoiseStripper::new(NoiseMode::Full);
        assert_eq!(stripper.strip("<i>really</i> boring [sic]"), "really boring");
        assert_eq!(stripper.strip("The caf&eacute; was great"), "The caf was great");
    }

    #[test]
    fn test_structure_stage_only_in_full_mode() {
        let full = NoiseStripper::new(NoiseMode::Full);
        let standard = NoiseStripper::new(NoiseMode::Standard);
        assert_eq!(full.strip_structure("<p>isn&#39;t [x]</p>"), "isn't  ");
        assert_eq!(standard.strip_structure("<p>isn&#39;t</p>"), "<p>isn&#39;t</p>");
    }

    #[test]
    fn test_transliterate() {
        assert_eq!(transliterate("café crème"), "cafe creme");
        assert_eq!(transliterate("isn\u{2019}t"), "isn't");
        assert_eq!(transliterate("straße"), "strasse");
        assert_eq!(transliterate("日本 ok"), " ok");
    }
}
