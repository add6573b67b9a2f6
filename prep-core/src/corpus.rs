//! # E/S do Corpus
//!
//! Entrada: arquivo de texto com uma resenha por linha, sem cabeçalho.
//! Saída: uma resenha processada por linha, já terminada em `\n`, na ordem de entrada.
//!
//! Corpora clássicos de sentimento (ex: `rt-polarity.neg`) são distribuídos em
//! Latin-1; se o arquivo não for UTF-8 válido, cada byte é lido como Latin-1 em vez
//! de virar caractere de substituição.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::{info, warn};

use crate::error::{PrepError, Result};

/// Lê o corpus, removendo os terminadores de linha (`\n` ou `\r\n`).
pub fn read_lines(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|e| PrepError::io(path, e))?;
    let text = match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => {
            warn!("{} não é UTF-8 válido; lendo como Latin-1", path.display());
            decode_latin1(err.as_bytes())
        }
    };
    let lines = split_lines(&text);
    info!("Corpus carregado de {}: {} linhas", path.display(), lines.len());
    Ok(lines)
}

/// Divide um texto em linhas sem os terminadores.
pub fn split_lines(text: &str) -> Vec<String> {
    text.lines().map(str::to_string).collect()
}

/// Escreve as linhas exatamente como recebidas (cada uma já traz seu `\n`).
pub fn write_lines<S: AsRef<str>>(path: impl AsRef<Path>, lines: &[S]) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| PrepError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    for line in lines {
        writer
            .write_all(line.as_ref().as_bytes())
            .map_err(|e| PrepError::io(path, e))?;
    }
    writer.flush().map_err(|e| PrepError::io(path, e))?;
    info!("{} linhas escritas em {}", lines.len(), path.display());
    Ok(())
}

fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}
