use csvdroid::{Converter, CsvTable, Language, RenderedFile, traits::Parser};

use crate::{config::TableArgs, validation::validate_options};

/// Runs `convert`: reads the table and writes one resource file per language.
pub fn run_convert_command(args: &TableArgs) -> Result<(), String> {
    let options = args.to_options()?;
    validate_options(&args.input, &options)?;
    tracing::debug!(?options, "effective options");

    let converter = Converter::new(options);
    let files = converter
        .convert_file(&args.input)
        .map_err(|e| format!("Conversion failed: {}", e))?;

    for file in &files {
        if file.is_empty() {
            println!("⚠️  {}: no strings, skipped", file.language);
        } else {
            println!("✅ {}: {}", file.language, file.path.display());
        }
    }

    let written = files.iter().filter(|f| !f.is_empty()).count();
    println!("Wrote {} of {} language file(s)", written, files.len());
    Ok(())
}

/// Runs `preview`: renders every language and prints the documents instead of writing them.
pub fn run_preview_command(args: &TableArgs, show: Option<&Language>) -> Result<(), String> {
    let files = render_preview(args)?;

    let selected: Vec<&RenderedFile> = files
        .iter()
        .filter(|f| show.is_none_or(|lang| &f.language == lang))
        .collect();

    if selected.is_empty() {
        return Err(match show {
            Some(lang) => format!("Language {} is not configured", lang),
            None => "No languages configured".to_string(),
        });
    }

    for file in selected {
        println!("=== {} ({}) ===", file.language, file.path.display());
        if file.is_empty() {
            println!("(no strings)");
        } else {
            print!("{}", file.contents);
        }
    }
    Ok(())
}

/// Renders without touching the output directory.
pub fn render_preview(args: &TableArgs) -> Result<Vec<RenderedFile>, String> {
    let options = args.to_options()?;
    validate_options(&args.input, &options)?;

    let table = CsvTable::read_from(&args.input)
        .and_then(|table| table.to_localization_table(&options.layout))
        .map_err(|e| format!("Failed to read {}: {}", args.input.display(), e))?;

    Ok(Converter::new(options).render(&table))
}
