use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::Utc;
use engine_logging::{engine_info, engine_warn};
use story_core::extract_chapter;
use story_engine::{
    load_story, run_batch, AtomicFileWriter, CharacterExtractor, LoadError, OllamaGenerator,
    StoryAnalyzer,
};

use crate::config::AppConfig;

fn build_analyzer(config: &AppConfig) -> Result<StoryAnalyzer> {
    let analyzer = StoryAnalyzer::new(config.analysis_settings());
    if !config.extract_characters {
        return Ok(analyzer);
    }
    let generator = OllamaGenerator::new(config.generate_settings())
        .context("invalid Ollama settings")?;
    engine_info!(
        "Character extraction via {} at {}",
        config.ollama_model,
        generator.endpoint()
    );
    Ok(analyzer.with_extractor(CharacterExtractor::with_chunk_words(
        Arc::new(generator),
        config.chunk_words,
    )))
}

pub async fn analyze(config: &AppConfig, file_path: &Path) -> Result<ExitCode> {
    let analyzer = build_analyzer(config)?;
    match analyzer.analyze_file(file_path).await {
        Ok(report) => {
            print!("{report}");
            Ok(ExitCode::SUCCESS)
        }
        Err(err @ LoadError::NotFound(_)) => {
            println!("Error: {err}");
            Ok(ExitCode::FAILURE)
        }
        Err(err) => Err(err.into()),
    }
}

pub fn chapter(input: &Path, output: &Path, number: u32) -> Result<ExitCode> {
    let story = load_story(input)?;
    let chapter = extract_chapter(&story.text, number)
        .with_context(|| format!("chapter {number} not found in {}", input.display()))?;

    let filename = output
        .file_name()
        .with_context(|| format!("output path {} has no file name", output.display()))?
        .to_string_lossy();
    let dir = output
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let written = AtomicFileWriter::new(dir).write(&filename, &chapter)?;

    println!("Chapter {number} written to {}", written.display());
    Ok(ExitCode::SUCCESS)
}

pub async fn batch(config: &AppConfig) -> Result<ExitCode> {
    let analyzer = build_analyzer(config)?;
    let generated_utc = Utc::now().to_rfc3339();
    let summary = run_batch(
        &config.input_dir,
        &config.output_dir,
        &analyzer,
        &generated_utc,
    )
    .await?;

    if summary.entries.is_empty() {
        println!(
            "No raw story files found in {} to analyze.",
            config.input_dir.display()
        );
        return Ok(ExitCode::SUCCESS);
    }

    for entry in &summary.entries {
        match (&entry.report, &entry.error) {
            (Some(report), _) => println!("{} -> {}", entry.input, report),
            (None, Some(error)) => {
                engine_warn!("{} failed: {}", entry.input, error);
                println!("Error running analysis for {}: {}", entry.input, error);
            }
            (None, None) => {}
        }
    }
    println!(
        "--- Analysis complete: {} succeeded, {} failed. Reports in {} ---",
        summary.succeeded(),
        summary.failed(),
        config.output_dir.display()
    );
    Ok(ExitCode::SUCCESS)
}
