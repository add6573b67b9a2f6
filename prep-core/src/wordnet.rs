//! # Backend WordNet
//!
//! Lê um diretório `dict/` do WordNet 3.x (o mesmo usado pelo NLTK) e responde
//! consultas de antônimos a partir dos ponteiros lexicais `!`.
//!
//! ## Arquivos usados
//!
//! | Arquivo            | Conteúdo                                              |
//! |--------------------|-------------------------------------------------------|
//! | `index.{pos}`      | lema → offsets dos synsets onde ele aparece           |
//! | `data.{pos}`       | um synset por linha, endereçado pelo offset em bytes  |
//! | `{pos}.exc`        | formas irregulares (opcional: "better good")          |
//!
//! `pos` ∈ {`noun`, `verb`, `adj`, `adv`}. Adjetivos satélites (`s`) moram em `data.adj`.
//!
//! ## Resolução de uma consulta
//!
//! 1. A palavra é normalizada (minúsculas, espaço → `_`).
//! 2. Formas base candidatas: a própria palavra, as exceções e as regras de remoção de
//!    sufixo do WordNet ("movies" → "movie"), filtradas pelo que existe no índice.
//! 3. Para cada synset da forma base, os ponteiros `!` cuja palavra de origem é a forma
//!    consultada levam à palavra de destino em outro synset.
//!
//! Linhas malformadas são ignoradas com aviso; só a ausência de arquivos é fatal.

use std::collections::{BTreeSet, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::error::{PrepError, Result};
use crate::lexicon::{LexicalResource, PartOfSpeech};

/// Classes gramaticais que têm arquivos próprios (satélites ficam em `adj`).
const FILE_POS: [PartOfSpeech; 4] = [
    PartOfSpeech::Noun,
    PartOfSpeech::Verb,
    PartOfSpeech::Adjective,
    PartOfSpeech::Adverb,
];

/// Regras de destacamento de sufixo (sufixo, substituição) por classe gramatical.
const NOUN_RULES: &[(&str, &str)] = &[
    ("s", ""),
    ("ses", "s"),
    ("ves", "f"),
    ("xes", "x"),
    ("zes", "z"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("men", "man"),
    ("ies", "y"),
];
const VERB_RULES: &[(&str, &str)] = &[
    ("s", ""),
    ("ies", "y"),
    ("es", "e"),
    ("es", ""),
    ("ed", "e"),
    ("ed", ""),
    ("ing", "e"),
    ("ing", ""),
];
const ADJ_RULES: &[(&str, &str)] = &[("er", ""), ("est", ""), ("er", "e"), ("est", "e")];

const ANTONYM_POINTER: &str = "!";

/// Um ponteiro de um synset para outro.
#[derive(Debug, Clone, PartialEq)]
struct Pointer {
    symbol: String,
    offset: usize,
    pos: PartOfSpeech,
    /// Número (1-based) da palavra de origem; 0 para ponteiros semânticos.
    source: usize,
    /// Número (1-based) da palavra de destino; 0 para ponteiros semânticos.
    target: usize,
}

/// Linha de `data.{pos}` já decodificada.
#[derive(Debug, Clone, PartialEq)]
struct Synset {
    ss_type: PartOfSpeech,
    words: Vec<String>,
    pointers: Vec<Pointer>,
}

/// Dicionário WordNet carregado em memória, somente-leitura.
pub struct WordNetLexicon {
    /// (classe do arquivo, lema) → offsets em `data.{pos}`.
    index: HashMap<(PartOfSpeech, String), Vec<usize>>,
    /// Conteúdo bruto de cada `data.{pos}`.
    data: HashMap<PartOfSpeech, String>,
    /// (classe do arquivo, forma flexionada) → formas base.
    exceptions: HashMap<(PartOfSpeech, String), Vec<String>>,
}

impl WordNetLexicon {
    /// Abre um diretório `dict/` do WordNet. Arquivos de índice e dados são obrigatórios.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        let mut index = HashMap::new();
        let mut data = HashMap::new();
        let mut exceptions = HashMap::new();

        for pos in FILE_POS {
            let name = file_name(pos);

            let index_path = dir.join(format!("index.{}", name));
            let raw = fs::read_to_string(&index_path).map_err(|e| PrepError::io(&index_path, e))?;
            parse_index(&raw, pos, &index_path, &mut index);

            let data_path = dir.join(format!("data.{}", name));
            let raw = fs::read_to_string(&data_path).map_err(|e| PrepError::io(&data_path, e))?;
            data.insert(pos, raw);

            // Exceções são opcionais: sem elas só as regras de sufixo se aplicam
            let exc_path = dir.join(format!("{}.exc", name));
            if let Ok(raw) = fs::read_to_string(&exc_path) {
                parse_exceptions(&raw, pos, &mut exceptions);
            }
        }

        if index.is_empty() {
            return Err(PrepError::Lexicon {
                path: dir,
                line: 0,
                reason: "nenhum lema encontrado nos arquivos index.*".to_string(),
            });
        }

        info!("WordNet carregado de {}: {} lemas indexados", dir.display(), index.len());
        Ok(Self {
            index,
            data,
            exceptions,
        })
    }

    /// Formas base de `form` presentes no índice, no estilo `morphy` do WordNet.
    pub fn base_forms(&self, form: &str, pos: PartOfSpeech) -> Vec<String> {
        let file_pos = file_pos(pos);
        let mut candidates = vec![form.to_string()];

        match self.exceptions.get(&(file_pos, form.to_string())) {
            Some(bases) => candidates.extend(bases.iter().cloned()),
            None => candidates.extend(apply_rules(form, rules_for(file_pos))),
        }

        let mut seen = Vec::new();
        for candidate in candidates {
            if self.index.contains_key(&(file_pos, candidate.clone())) && !seen.contains(&candidate) {
                seen.push(candidate);
            }
        }
        seen
    }

    /// Decodifica o synset no `offset` de `data.{pos}`.
    fn synset_at(&self, pos: PartOfSpeech, offset: usize) -> Option<Synset> {
        let raw = self.data.get(&file_pos(pos))?;
        let line = raw.get(offset..)?.lines().next()?;
        match parse_synset(line) {
            Some(synset) => Some(synset),
            None => {
                warn!("synset malformado em data.{} offset {}", file_name(pos), offset);
                None
            }
        }
    }

    fn collect_antonyms(&self, lemma: &str, pos: PartOfSpeech, out: &mut BTreeSet<String>) {
        let file_pos = file_pos(pos);
        for base in self.base_forms(lemma, pos) {
            let Some(offsets) = self.index.get(&(file_pos, base.clone())) else {
                continue;
            };
            for &offset in offsets {
                let Some(synset) = self.synset_at(file_pos, offset) else {
                    continue;
                };
                // Consulta restrita a satélites só aceita synsets do tipo `s`
                if pos == PartOfSpeech::AdjectiveSatellite && synset.ss_type != pos {
                    continue;
                }
                let Some(word_number) = synset.words.iter().position(|w| lemma_key(w) == base) else {
                    continue;
                };
                for pointer in &synset.pointers {
                    if pointer.symbol != ANTONYM_POINTER || pointer.source != word_number + 1 {
                        continue;
                    }
                    let Some(target) = self.synset_at(pointer.pos, pointer.offset) else {
                        continue;
                    };
                    if let Some(word) = pointer.target.checked_sub(1).and_then(|i| target.words.get(i)) {
                        out.insert(strip_marker(word).to_string());
                    }
                }
            }
        }
    }
}

impl LexicalResource for WordNetLexicon {
    fn antonyms_of(&self, word: &str, pos: Option<PartOfSpeech>) -> BTreeSet<String> {
        let lemma = word.trim().to_lowercase().replace(' ', "_");
        let mut out = BTreeSet::new();
        if lemma.is_empty() {
            return out;
        }

        match pos {
            Some(pos) => self.collect_antonyms(&lemma, pos, &mut out),
            None => {
                for pos in FILE_POS {
                    self.collect_antonyms(&lemma, pos, &mut out);
                }
            }
        }
        out
    }
}

fn file_pos(pos: PartOfSpeech) -> PartOfSpeech {
    match pos {
        PartOfSpeech::AdjectiveSatellite => PartOfSpeech::Adjective,
        other => other,
    }
}

fn file_name(pos: PartOfSpeech) -> &'static str {
    match file_pos(pos) {
        PartOfSpeech::Noun => "noun",
        PartOfSpeech::Verb => "verb",
        PartOfSpeech::Adverb => "adv",
        _ => "adj",
    }
}

fn rules_for(pos: PartOfSpeech) -> &'static [(&'static str, &'static str)] {
    match pos {
        PartOfSpeech::Noun => NOUN_RULES,
        PartOfSpeech::Verb => VERB_RULES,
        PartOfSpeech::Adjective | PartOfSpeech::AdjectiveSatellite => ADJ_RULES,
        PartOfSpeech::Adverb => &[],
    }
}

fn apply_rules(form: &str, rules: &[(&str, &str)]) -> Vec<String> {
    rules
        .iter()
        .filter_map(|(suffix, replacement)| {
            form.strip_suffix(suffix)
                .filter(|stem| !stem.is_empty())
                .map(|stem| format!("{}{}", stem, replacement))
        })
        .collect()
}

/// Remove o marcador sintático de adjetivos: "galore(ip)" → "galore".
fn strip_marker(word: &str) -> &str {
    match word.find('(') {
        Some(i) if word.ends_with(')') => &word[..i],
        _ => word,
    }
}

/// Forma comparável com as chaves do índice.
fn lemma_key(word: &str) -> String {
    strip_marker(word).to_lowercase()
}

/// Linhas de licença começam com dois espaços.
fn is_header(line: &str) -> bool {
    line.starts_with("  ") || line.trim().is_empty()
}

fn parse_index(
    raw: &str,
    pos: PartOfSpeech,
    path: &Path,
    index: &mut HashMap<(PartOfSpeech, String), Vec<usize>>,
) {
    for (n, line) in raw.lines().enumerate() {
        if is_header(line) {
            continue;
        }
        match parse_index_line(line) {
            Some((lemma, offsets)) => {
                index.insert((pos, lemma), offsets);
            }
            None => warn!("{}:{}: linha de índice ignorada", path.display(), n + 1),
        }
    }
}

/// `lemma pos synset_cnt p_cnt [ptr...] sense_cnt tagsense_cnt offset...`
fn parse_index_line(line: &str) -> Option<(String, Vec<usize>)> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let lemma = fields.first()?.to_string();
    let synset_cnt: usize = fields.get(2)?.parse().ok()?;
    let p_cnt: usize = fields.get(3)?.parse().ok()?;
    // Contagens vêm do arquivo: overflow é linha malformada
    let first_offset = p_cnt.checked_add(6)?;
    let offsets = fields
        .get(first_offset..first_offset.checked_add(synset_cnt)?)?
        .iter()
        .map(|f| f.parse().ok())
        .collect::<Option<Vec<usize>>>()?;
    Some((lemma, offsets))
}

fn parse_exceptions(raw: &str, pos: PartOfSpeech, exceptions: &mut HashMap<(PartOfSpeech, String), Vec<String>>) {
    for line in raw.lines() {
        let mut fields = line.split_whitespace();
        if let Some(inflected) = fields.next() {
            let bases: Vec<String> = fields.map(str::to_string).collect();
            if !bases.is_empty() {
                exceptions.insert((pos, inflected.to_string()), bases);
            }
        }
    }
}

/// `offset lex_filenum ss_type w_cnt word lex_id ... p_cnt [symbol offset pos src_tgt]... | gloss`
fn parse_synset(line: &str) -> Option<Synset> {
    let body = line.split('|').next()?;
    let fields: Vec<&str> = body.split_whitespace().collect();

    let ss_type = PartOfSpeech::from_code(fields.get(2)?.chars().next()?)?;
    let w_cnt = usize::from_str_radix(fields.get(3)?, 16).ok()?;
    let p_start = w_cnt.checked_mul(2)?.checked_add(4)?;
    let p_cnt: usize = fields.get(p_start)?.parse().ok()?;
    if p_cnt.checked_mul(4)?.checked_add(p_start + 1)? > fields.len() {
        return None;
    }

    let words: Vec<String> = (0..w_cnt)
        .map(|i| fields.get(4 + i * 2).map(|w| w.to_string()))
        .collect::<Option<_>>()?;
    let pointers = (0..p_cnt)
        .map(|i| {
            let base = p_start + 1 + i * 4;
            let symbol = fields.get(base)?.to_string();
            let offset = fields.get(base + 1)?.parse().ok()?;
            let pos = PartOfSpeech::from_code(fields.get(base + 2)?.chars().next()?)?;
            let src_tgt = fields.get(base + 3)?;
            let source = usize::from_str_radix(src_tgt.get(0..2)?, 16).ok()?;
            let target = usize::from_str_radix(src_tgt.get(2..4)?, 16).ok()?;
            Some(Pointer {
                symbol,
                offset,
                pos,
                source,
                target,
            })
        })
        .collect::<Option<Vec<_>>>()?;

    Some(Synset {
        ss_type,
        words,
        pointers,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "  1 This software and database is being provided\n";

    /// Monta um `dict/` mínimo: good ↔ bad (adj), happy(a) sem antônimo, empty nos demais.
    fn fixture_dir() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();

        let good_off = HEADER.len();
        // Comprimento da linha não depende dos valores (offsets têm 8 dígitos)
        let good_line = |bad_off: usize| {
            format!("{:08} 00 a 02 good 0 full(a) 0 001 ! {:08} a 0101 | having desirable qualities", good_off, bad_off)
        };
        let bad_off = good_off + good_line(0).len() + 1;
        let bad_line = format!("{:08} 00 a 01 bad 0 001 ! {:08} a 0101 | having undesirable qualities", bad_off, good_off);
        let happy_off = bad_off + bad_line.len() + 1;
        let happy_line = format!("{:08} 00 s 01 happy(a) 0 000 | enjoying well-being", happy_off);

        let data_adj = format!("{}{}\n{}\n{}\n", HEADER, good_line(bad_off), bad_line, happy_line);
        let index_adj = format!(
            "{}bad a 1 1 ! 1 1 {:08}\nfull a 1 0 1 0 {:08}\ngood a 1 1 ! 1 1 {:08}\nhappy a 1 0 1 0 {:08}\n",
            HEADER, bad_off, good_off, good_off, happy_off
        );

        fs::write(dir.path().join("data.adj"), data_adj).unwrap();
        fs::write(dir.path().join("index.adj"), index_adj).unwrap();
        fs::write(dir.path().join("adj.exc"), "better good\n").unwrap();
        for name in ["noun", "verb", "adv"] {
            fs::write(dir.path().join(format!("data.{}", name)), HEADER).unwrap();
            fs::write(dir.path().join(format!("index.{}", name)), HEADER).unwrap();
        }
        dir
    }

    #[test]
    fn test_antonyms_from_lexical_pointer() {
        let dir = fixture_dir();
        let wn = WordNetLexicon::open(dir.path()).unwrap();
        assert_eq!(wn.antonyms_of("good", None), BTreeSet::from(["bad".to_string()]));
        assert_eq!(wn.antonyms_of("Bad", None), BTreeSet::from(["good".to_string()]));
    }

    #[test]
    fn test_pointer_source_must_match_word() {
        // "full" está no mesmo synset de "good", mas o ponteiro parte da palavra 1
        let dir = fixture_dir();
        let wn = WordNetLexicon::open(dir.path()).unwrap();
        assert!(wn.antonyms_of("full", None).is_empty());
    }

    #[test]
    fn test_unknown_word_and_pos_filter() {
        let dir = fixture_dir();
        let wn = WordNetLexicon::open(dir.path()).unwrap();
        assert!(wn.antonyms_of("movie", None).is_empty());
        assert!(wn.antonyms_of("good", Some(PartOfSpeech::Noun)).is_empty());
        assert!(wn.antonyms_of("good", Some(PartOfSpeech::AdjectiveSatellite)).is_empty());
        assert!(wn.antonyms_of("happy", None).is_empty());
    }

    #[test]
    fn test_exception_base_form() {
        let dir = fixture_dir();
        let wn = WordNetLexicon::open(dir.path()).unwrap();
        assert_eq!(wn.base_forms("better", PartOfSpeech::Adjective), vec!["good".to_string()]);
        assert!(wn.antonyms_of("better", None).contains("bad"));
    }

    #[test]
    fn test_missing_dir_is_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            WordNetLexicon::open(dir.path()),
            Err(PrepError::Io { .. })
        ));
    }

    #[test]
    fn test_parse_synset_and_marker() {
        let synset = parse_synset("00001740 00 a 01 galore(ip) 0 000 | in abundance").unwrap();
        assert_eq!(synset.ss_type, PartOfSpeech::Adjective);
        assert_eq!(strip_marker(&synset.words[0]), "galore");
        assert!(synset.pointers.is_empty());
        assert!(parse_synset("lixo").is_none());
    }

    #[test]
    fn test_malformed_lines_are_skipped() {
        let dir = fixture_dir();
        let data_path = dir.path().join("data.adj");
        let mut data_adj = fs::read_to_string(&data_path).unwrap();
        let garbage_off = data_adj.len();
        data_adj.push_str("lixo sem formato de synset\n");
        data_adj.push_str(&format!("{:08} 00 a ff only 0 999999999999999999 | sem campos\n", garbage_off + 27));
        fs::write(&data_path, data_adj).unwrap();

        let index_path = dir.path().join("index.adj");
        let mut index_adj = fs::read_to_string(&index_path).unwrap();
        index_adj.push_str("lixo\n");
        index_adj.push_str("huge a 1 18446744073709551615 1 1 00000001\n");
        index_adj.push_str("wide a 18446744073709551615 0 1 0 00000001\n");
        index_adj.push_str(&format!("broken a 1 0 1 0 {:08}\n", garbage_off));
        index_adj.push_str(&format!("only a 1 0 1 0 {:08}\n", garbage_off + 27));
        fs::write(&index_path, index_adj).unwrap();

        let wn = WordNetLexicon::open(dir.path()).unwrap();
        assert_eq!(wn.antonyms_of("good", None), BTreeSet::from(["bad".to_string()]));
        assert!(wn.antonyms_of("huge", None).is_empty());
        assert!(wn.antonyms_of("broken", None).is_empty());
        assert!(wn.antonyms_of("only", None).is_empty());
    }

    #[test]
    fn test_overflowing_counts_are_rejected() {
        assert!(parse_index_line("good a 1 18446744073709551615 1 1 00000001").is_none());
        assert!(parse_index_line("good a 18446744073709551615 0 1 0 00000001").is_none());
        assert!(parse_synset("00000001 00 a ffffffffffffffff good 0 000 | x").is_none());
        assert!(parse_synset("00000001 00 a 01 good 0 4611686018427387904 | x").is_none());
        assert_eq!(
            parse_index_line("good a 1 1 ! 1 1 00000042"),
            Some(("good".to_string(), vec![42]))
        );
    }

    #[test]
    fn test_suffix_rules() {
        assert_eq!(apply_rules("movies", NOUN_RULES), vec!["movie", "movy"]);
        assert!(apply_rules("s", NOUN_RULES).is_empty());
    }
}
