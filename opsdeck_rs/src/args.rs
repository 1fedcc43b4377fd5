use std::path::PathBuf;

use crate::colors::ColorMode;

/// Output file used when `-o/--out` is not given.
pub const DEFAULT_OUT: &str = "dashboard.html";

pub struct ParsedArgs {
    pub input: Option<PathBuf>,
    pub demo: bool,
    pub out: Option<PathBuf>,
    pub to_stdout: bool,
    pub summary: bool,
    pub color: ColorMode,
    pub verbose: bool,
    pub show_help: bool,
    pub show_version: bool,
}

impl Default for ParsedArgs {
    fn default() -> Self {
        Self {
            input: None,
            demo: false,
            out: None,
            to_stdout: false,
            summary: false,
            color: ColorMode::Auto,
            verbose: false,
            show_help: false,
            show_version: false,
        }
    }
}

fn parse_color_mode(raw: &str) -> Result<ColorMode, String> {
    match raw {
        "auto" => Ok(ColorMode::Auto),
        "always" => Ok(ColorMode::Always),
        "never" => Ok(ColorMode::Never),
        _ => Err("--color expects auto|always|never".to_string()),
    }
}

pub fn parse_args() -> Result<ParsedArgs, String> {
    let args: Vec<String> = std::env::args_os()
        .skip(1)
        .map(|s| s.to_string_lossy().into_owned())
        .collect();
    let mut parsed = ParsedArgs::default();

    let mut i = 0;
    while i < args.len() {
        let arg = &args[i];
        match arg.as_str() {
            "--help" | "-h" => {
                parsed.show_help = true;
                i += 1;
            }
            "--version" | "-V" => {
                parsed.show_version = true;
                i += 1;
            }
            "--demo" => {
                parsed.demo = true;
                i += 1;
            }
            "--stdout" => {
                parsed.to_stdout = true;
                i += 1;
            }
            "--summary" => {
                parsed.summary = true;
                i += 1;
            }
            "--verbose" | "-v" => {
                parsed.verbose = true;
                i += 1;
            }
            "--color" | "-c" => {
                if let Some(next) = args.get(i + 1) {
                    if !next.starts_with('-') {
                        parsed.color = parse_color_mode(next)?;
                        i += 2;
                        continue;
                    }
                }
                parsed.color = ColorMode::Always;
                i += 1;
            }
            _ if arg.starts_with("--color=") => {
                let value = arg.trim_start_matches("--color=");
                parsed.color = parse_color_mode(value)?;
                i += 1;
            }
            "-o" | "--out" => {
                let next = args
                    .get(i + 1)
                    .ok_or_else(|| "-o/--out requires a file path".to_string())?;
                parsed.out = Some(PathBuf::from(next));
                i += 2;
            }
            _ if arg.starts_with("--out=") => {
                let value = arg.trim_start_matches("--out=");
                parsed.out = Some(PathBuf::from(value));
                i += 1;
            }
            _ if arg.starts_with('-') => {
                eprintln!("Ignoring unknown flag {}", arg);
                i += 1;
            }
            _ => {
                let trimmed = arg.trim();
                if !trimmed.is_empty() {
                    if let Some(existing) = &parsed.input {
                        return Err(format!(
                            "Multiple dataset files given: '{}' and '{}'",
                            existing.display(),
                            trimmed
                        ));
                    }
                    parsed.input = Some(PathBuf::from(trimmed));
                }
                i += 1;
            }
        }
    }

    // Help and version short-circuit the dataset checks
    if parsed.show_help || parsed.show_version {
        return Ok(parsed);
    }

    if parsed.demo && parsed.input.is_some() {
        return Err("--demo and a dataset file are mutually exclusive".to_string());
    }
    if !parsed.demo && parsed.input.is_none() {
        return Err("No dataset given. Pass a JSON file or use --demo.".to_string());
    }
    if parsed.to_stdout && parsed.out.is_some() {
        return Err("--stdout and -o/--out are mutually exclusive".to_string());
    }

    if let Some(path) = &parsed.input {
        if !path.exists() {
            return Err(format!(
                "Dataset '{}' does not exist. Provide a valid JSON file.",
                path.display()
            ));
        }
        if path.is_dir() {
            return Err(format!(
                "Dataset '{}' is a directory; expected a JSON file.",
                path.display()
            ));
        }
    }

    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color_mode() {
        assert_eq!(
            parse_color_mode("always").expect("color always"),
            ColorMode::Always
        );
        assert_eq!(
            parse_color_mode("never").expect("color never"),
            ColorMode::Never
        );
        assert!(parse_color_mode("invalid").is_err());
    }

    #[test]
    fn test_defaults() {
        let parsed = ParsedArgs::default();
        assert!(parsed.input.is_none());
        assert!(parsed.out.is_none());
        assert_eq!(parsed.color, ColorMode::Auto);
        assert!(!parsed.demo);
    }
}
