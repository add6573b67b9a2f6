//! # Pipeline de Pré-processamento — Orquestrador com Eventos Observáveis
//!
//! Aplica, linha a linha e em ordem fixa, todas as transformações:
//!
//! ```text
//! linha → [marcação] → [transliteração] → contrações → ruído → gírias → tokens → negações → [filtros] → junção + "\n"
//! ```
//!
//! Assim como os demais estágios, o pipeline não guarda estado mutável: os recursos
//! (mapa de gírias, tabela de contrações, léxico) são construídos uma vez e passados
//! explicitamente em [`PrepResources`]. Cada estágio pode ser observado por um canal
//! (`mpsc`) de [`PipelineEvent`], útil para depurar por que uma linha saiu como saiu.

use std::sync::mpsc;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::contractions::ContractionExpander;
use crate::filters::{deduplicate_lines, remove_stopwords, to_lowercase};
use crate::lexicon::{LexicalResource, NoLexicon};
use crate::negation::{AntonymChoice, NegationResolver};
use crate::noise::{transliterate, NoiseMode, NoiseStripper};
use crate::slang::SlangMap;
use crate::tokenizer::{detokenize, tokenize};

/// Opções de comportamento do pipeline. Os padrões reproduzem o script clássico.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineOptions {
    /// Passadas de limpeza de ruído (padrão: passos 3–5).
    pub noise_mode: NoiseMode,
    /// Translitera acentos e aspas tipográficas para ASCII antes de tudo.
    pub transliterate: bool,
    /// Remove linhas duplicadas do corpus antes de processar.
    pub deduplicate: bool,
    /// Converte os tokens finais para minúsculas.
    pub lowercase: bool,
    /// Remove stopwords dos tokens finais.
    pub remove_stopwords: bool,
    /// Qual antônimo escolher quando há vários.
    pub antonym_choice: AntonymChoice,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            noise_mode: NoiseMode::Standard,
            transliterate: false,
            deduplicate: false,
            lowercase: false,
            remove_stopwords: false,
            antonym_choice: AntonymChoice::First,
        }
    }
}

/// Recursos imutáveis construídos na inicialização.
pub struct PrepResources {
    pub contractions: ContractionExpander,
    pub slang: SlangMap,
    pub lexicon: Box<dyn LexicalResource>,
}

impl PrepResources {
    pub fn new(slang: SlangMap, lexicon: Box<dyn LexicalResource>) -> Self {
        Self {
            contractions: ContractionExpander::new(),
            slang,
            lexicon,
        }
    }
}

impl Default for PrepResources {
    /// Contrações padrão, sem gírias e sem léxico.
    fn default() -> Self {
        Self::new(SlangMap::empty(), Box::new(NoLexicon))
    }
}

/// Contadores agregados de uma execução.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrepReport {
    pub lines_in: usize,
    pub lines_out: usize,
    pub duplicates_dropped: usize,
    pub contractions_expanded: usize,
    pub slang_replaced: usize,
    pub negations_resolved: usize,
    pub negations_unresolved: usize,
}

/// Eventos emitidos a cada estágio de cada linha.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum PipelineEvent {
    /// Linha de entrada (após marcação e transliteração, se ligadas).
    LineStarted { line_index: usize, text: String },
    ContractionsExpanded {
        line_index: usize,
        text: String,
        count: usize,
    },
    NoiseStripped { line_index: usize, text: String },
    SlangReplaced {
        line_index: usize,
        text: String,
        count: usize,
    },
    Tokenized {
        line_index: usize,
        tokens: Vec<String>,
    },
    NegationsResolved {
        line_index: usize,
        tokens: Vec<String>,
        resolved: usize,
        unresolved: usize,
    },
    /// Linha final, já com o terminador.
    LineDone { line_index: usize, output: String },
    /// Fim do corpus.
    Done {
        report: PrepReport,
        processing_ms: u64,
    },
}

/// O pipeline principal.
///
/// - **Linha única**: [`PrepPipeline::process_line`].
/// - **Lote**: [`PrepPipeline::process`], devolve as linhas e o relatório.
/// - **Streaming**: [`PrepPipeline::process_streaming`], envia um evento por estágio.
pub struct PrepPipeline {
    resources: PrepResources,
    options: PipelineOptions,
    noise: NoiseStripper,
}

impl PrepPipeline {
    pub fn new(resources: PrepResources, options: PipelineOptions) -> Self {
        Self {
            noise: NoiseStripper::new(options.noise_mode),
            resources,
            options,
        }
    }

    /// Processa uma linha isolada. A saída termina em `\n`.
    pub fn process_line(&self, line: &str) -> String {
        let mut report = PrepReport::default();
        self.run_line(0, line, &mut report, &mut |_: PipelineEvent| {})
    }

    /// Processa o corpus inteiro, preservando a ordem de entrada.
    pub fn process(&self, lines: &[String]) -> (Vec<String>, PrepReport) {
        self.run(lines, |_| {})
    }

    /// Processa o corpus enviando eventos de progresso pelo canal `tx`.
    ///
    /// # Fluxo de Eventos (por linha)
    /// 1. `LineStarted`
    /// 2. `ContractionsExpanded`
    /// 3. `NoiseStripped`
    /// 4. `SlangReplaced`
    /// 5. `Tokenized`
    /// 6. `NegationsResolved`
    /// 7. `LineDone`
    ///
    /// E ao final, `Done` com o relatório consolidado.
    pub fn process_streaming(&self, lines: &[String], tx: mpsc::Sender<PipelineEvent>) -> (Vec<String>, PrepReport) {
        self.run(lines, |event| {
            let _ = tx.send(event);
        })
    }

    fn run<F: FnMut(PipelineEvent)>(&self, lines: &[String], mut emit: F) -> (Vec<String>, PrepReport) {
        let start = Instant::now();
        let mut report = PrepReport {
            lines_in: lines.len(),
            ..PrepReport::default()
        };

        let inputs: Vec<&str> = if self.options.deduplicate {
            let (unique, dropped) = deduplicate_lines(lines);
            report.duplicates_dropped = dropped;
            unique
        } else {
            lines.iter().map(String::as_str).collect()
        };

        let mut outputs = Vec::with_capacity(inputs.len());
        for (i, line) in inputs.iter().enumerate() {
            outputs.push(self.run_line(i, line, &mut report, &mut emit));
        }
        report.lines_out = outputs.len();

        debug!(
            "Corpus processado: {} → {} linhas, {} contrações, {} gírias, {} negações resolvidas",
            report.lines_in,
            report.lines_out,
            report.contractions_expanded,
            report.slang_replaced,
            report.negations_resolved
        );

        emit(PipelineEvent::Done {
            report,
            processing_ms: start.elapsed().as_millis() as u64,
        });
        (outputs, report)
    }

    fn run_line<F: FnMut(PipelineEvent)>(
        &self,
        line_index: usize,
        line: &str,
        report: &mut PrepReport,
        emit: &mut F,
    ) -> String {
        // Marcação e colchetes (modo completo) saem antes das contrações: "isn&#39;t" → "isn't"
        let text = self.noise.strip_structure(line);
        let text = if self.options.transliterate {
            transliterate(&text)
        } else {
            text
        };
        emit(PipelineEvent::LineStarted {
            line_index,
            text: text.clone(),
        });

        // === Passo 1: Contrações (antes que o apóstrofo seja destruído) ===
        let (text, count) = self.resources.contractions.expand_counted(&text);
        report.contractions_expanded += count;
        emit(PipelineEvent::ContractionsExpanded {
            line_index,
            text: text.clone(),
            count,
        });

        // === Passo 2: Ruído ===
        let text = self.noise.strip_characters(&text);
        emit(PipelineEvent::NoiseStripped {
            line_index,
            text: text.clone(),
        });

        // === Passo 3: Gírias (sobre texto já limpo) ===
        let (text, count) = self.resources.slang.substitute_counted(&text);
        report.slang_replaced += count;
        emit(PipelineEvent::SlangReplaced {
            line_index,
            text: text.clone(),
            count,
        });

        // === Passo 4: Tokenização ===
        let tokens = tokenize(&text);
        emit(PipelineEvent::Tokenized {
            line_index,
            tokens: tokens.clone(),
        });

        // === Passo 5: Negações ===
        let resolver = NegationResolver::new(self.resources.lexicon.as_ref(), self.options.antonym_choice);
        let (mut tokens, stats) = resolver.resolve_counted(&tokens);
        report.negations_resolved += stats.resolved;
        report.negations_unresolved += stats.unresolved;
        emit(PipelineEvent::NegationsResolved {
            line_index,
            tokens: tokens.clone(),
            resolved: stats.resolved,
            unresolved: stats.unresolved,
        });

        // === Passo 6: Filtros opcionais ===
        if self.options.lowercase {
            tokens = to_lowercase(tokens);
        }
        if self.options.remove_stopwords {
            tokens = remove_stopwords(tokens);
        }

        let mut output = detokenize(&tokens);
        output.push('\n');
        trace!("linha {}: {:?}", line_index, output);
        emit(PipelineEvent::LineDone {
            line_index,
            output: output.clone(),
        });
        output
    }
}

impl Default for PrepPipeline {
    fn default() -> Self {
        Self::new(PrepResources::default(), PipelineOptions::default())
    }
}
