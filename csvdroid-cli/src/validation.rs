use std::path::Path;

use csvdroid::{ConvertOptions, Language};

/// Validate file path exists and is readable
pub fn validate_file_path(path: &Path) -> Result<(), String> {
    if !path.exists() {
        return Err(format!("File does not exist: {}", path.display()));
    }

    if !path.is_file() {
        return Err(format!("Path is not a file: {}", path.display()));
    }

    Ok(())
}

/// Validate that the output root is a directory or can become one
pub fn validate_output_dir(path: &Path) -> Result<(), String> {
    if path.exists() && !path.is_dir() {
        return Err(format!(
            "Output path exists and is not a directory: {}",
            path.display()
        ));
    }
    Ok(())
}

/// Validate a language code the way the library parses it
pub fn validate_language_code(lang: &str) -> Result<Language, String> {
    if lang.trim().is_empty() {
        return Err("Language code cannot be empty".to_string());
    }
    lang.parse::<Language>().map_err(|_| {
        format!(
            "Invalid language code: {}. Expected `default`, `xx` or `xx-YY`",
            lang
        )
    })
}

/// Validate complete options before anything is read or written
pub fn validate_options(input: &Path, options: &ConvertOptions) -> Result<(), String> {
    validate_file_path(input).map_err(|e| format!("Input validation failed: {}", e))?;
    validate_output_dir(&options.output_dir)
        .map_err(|e| format!("Output validation failed: {}", e))?;
    options
        .validate()
        .map_err(|e| format!("Configuration validation failed: {}", e))
}
