use std::path::Path;

use csvdroid::{AndroidStrings, traits::Parser};

use crate::validation::validate_file_path;

/// Prints the string resources of a generated `strings.xml`.
pub fn run_inspect_command(input: &Path) -> Result<(), String> {
    validate_file_path(input)?;
    let strings = AndroidStrings::read_from(input)
        .map_err(|e| format!("Failed to read {}: {}", input.display(), e))?;

    for string in &strings.strings {
        match string.translatable {
            Some(false) => println!("{} = {} (not translatable)", string.name, string.value),
            _ => println!("{} = {}", string.name, string.value),
        }
    }
    println!("{} string(s)", strings.strings.len());
    Ok(())
}
