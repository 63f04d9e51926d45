use std::path::Path;

use tracing::{debug, info};

use crate::error::GenerateError;
use crate::header_layout::HeaderLayout;
use crate::setting_value::{ConfigDocument, parse_document};

const BANNER: [&str; 5] = [
    "/* ==========================================================*/",
    "/* ========== auto-generated file - do not modify! ==========*/",
    "/* ==========================================================*/",
    "/* ==== edit system_config.json and rebuild the target! =====*/",
    "/* ==========================================================*/",
];

/// Builds the header text for `document`.
///
/// ```text
/// #ifndef _SETTINGS_CONFIG_H
/// #define _SETTINGS_CONFIG_H
///
/// /* ... banner ... */
///
///
/// #define SETTING_GROUPS\
///    DEF_SETTING_GROUP(Logger_socketPort, uint32_t, 14261) \
///
///
/// #endif
/// ```
/// There is no newline after `#endif`.
pub fn render_header(document: &ConfigDocument, layout: &HeaderLayout) -> String {
    let mut out = String::new();

    out.push_str(&format!("#ifndef {}\n", layout.guard));
    out.push_str(&format!("#define {}\n\n", layout.guard));

    for line in BANNER {
        out.push_str(line);
        out.push('\n');
    }
    out.push_str("\n\n");

    out.push_str(&format!("#define {}\\\n", layout.group_macro));
    for entry in document.entries() {
        out.push_str(&entry.render_line(&layout.entry_macro));
        out.push('\n');
    }

    out.push_str("\n\n#endif");
    out
}

/// Generates the header at `output_path` from the JSON document at `input_path`
/// using the default layout.
pub fn generate(input_path: &Path, output_path: &Path) -> Result<(), GenerateError> {
    generate_with_layout(input_path, output_path, &HeaderLayout::default())
}

/// The input is parsed completely before the output file is created, so a
/// bad document leaves any existing header untouched.
pub fn generate_with_layout(
    input_path: &Path,
    output_path: &Path,
    layout: &HeaderLayout,
) -> Result<(), GenerateError> {
    println!("Starting header generator");
    println!("INPUT FILE: {}", input_path.display());
    println!("OUTPUT FILE: {}", output_path.display());

    let json = std::fs::read_to_string(input_path)
        .map_err(|source| GenerateError::from_input_io(input_path.to_path_buf(), source))?;
    let document = parse_document(&json)?;
    debug!(settings = document.len(), "parsed settings document");

    let header = render_header(&document, layout);

    std::fs::write(output_path, header.as_bytes()).map_err(|source| {
        GenerateError::OutputWrite {
            path: output_path.to_path_buf(),
            source,
        }
    })?;

    info!(
        settings = document.len(),
        output = %output_path.display(),
        bytes = header.len(),
        "header written"
    );
    println!("Header generator finished work!");

    Ok(())
}
