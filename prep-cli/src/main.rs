//! Executável que aplica o pipeline de normalização a um corpus de resenhas.
//!
//! Sem flags: lê `sentiment-prep.json` do diretório atual, se existir, e caso
//! contrário usa os caminhos padrão (`rt-polarity.neg`, `slang.txt` → `test`).

use std::fs;

use anyhow::{Context, Result};
use prep_core::{
    config::{PrepConfig, CONFIG_FILE},
    corpus, PrepPipeline, PrepResources, SlangMap,
};
use tracing::{info, warn};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("info")
        .init();

    let config = PrepConfig::load_or_default(CONFIG_FILE).context("falha ao ler a configuração")?;

    // Recursos obrigatórios: qualquer falha aqui aborta antes de processar uma linha sequer
    let slang = SlangMap::load(&config.slang).context("falha ao carregar o mapa de gírias")?;
    let lexicon = config.load_lexicon().context("falha ao carregar o recurso léxico")?;
    if config.lexicon.is_none() {
        warn!("Nenhum recurso léxico configurado: negações não serão substituídas por antônimos");
    }
    let lines = corpus::read_lines(&config.corpus).context("falha ao ler o corpus")?;

    let pipeline = PrepPipeline::new(PrepResources::new(slang, lexicon), config.pipeline);
    let (outputs, report) = pipeline.process(&lines);

    corpus::write_lines(&config.output, &outputs).context("falha ao escrever a saída")?;

    info!(
        "✅ {} linhas → {} ({} contrações, {} gírias, {} negações resolvidas, {} sem antônimo, {} duplicadas)",
        report.lines_in,
        config.output.display(),
        report.contractions_expanded,
        report.slang_replaced,
        report.negations_resolved,
        report.negations_unresolved,
        report.duplicates_dropped
    );

    if let Some(path) = &config.report {
        let json = serde_json::to_string_pretty(&report)?;
        fs::write(path, json).with_context(|| format!("falha ao escrever o relatório em {}", path.display()))?;
        info!("Relatório salvo em {}", path.display());
    }

    Ok(())
}
