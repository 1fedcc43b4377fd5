mod args;
mod colors;
mod dataset;
mod summary;

use std::panic;
use std::path::PathBuf;

use anyhow::Context;
use dashboard_leptos::render_dashboard;

use args::{parse_args, ParsedArgs, DEFAULT_OUT};
use colors::Painter;

fn install_broken_pipe_handler() {
    let default_hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let payload = info.payload();
        let is_broken = payload
            .downcast_ref::<&str>()
            .is_some_and(|s| s.contains("Broken pipe"))
            || payload
                .downcast_ref::<String>()
                .is_some_and(|s| s.contains("Broken pipe"));

        if is_broken {
            // Quietly exit when downstream closes the pipe (e.g. piping to `head`).
            std::process::exit(0);
        }

        default_hook(info);
    }));
}

fn format_usage() -> &'static str {
    "opsdeck - static operations dashboard generator\n\n\
Quick start:\n  \
  opsdeck --demo                  Render the built-in sample dataset to dashboard.html\n  \
  opsdeck data.json               Render a dataset file to dashboard.html\n  \
  opsdeck data.json --stdout      Print the HTML to stdout (pipe-safe)\n\n\
Usage: opsdeck [data.json] [options]\n\n\
Input:\n  \
  <data.json>               Dashboard dataset (see the dashboard crate README for the schema)\n  \
  --demo                    Use the built-in sample payload instead of a file\n\n\
Output:\n  \
  -o, --out <file>          Output path (default: dashboard.html)\n  \
  --stdout                  Write the HTML to stdout instead of a file\n  \
  --summary                 Print a terminal rollup of tiers and totals\n\n\
Common:\n  \
  --color, -c [mode]        auto|always|never (bare -c means always)\n  \
  --verbose, -v             Show dataset notes and consistency warnings\n  \
  --help, -h                Show this message\n  \
  --version, -V             Show version\n\n\
Examples:\n  \
  opsdeck --demo --summary                   # Sample dashboard plus terminal rollup\n  \
  opsdeck ops.json -o reports/ops.html       # Render to a custom path\n  \
  opsdeck ops.json --stdout | gzip > ops.gz  # Pipe the document downstream\n"
}

fn main() {
    install_broken_pipe_handler();

    let parsed = match parse_args() {
        Ok(args) => args,
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(1);
        }
    };

    if parsed.show_help {
        println!("{}", format_usage());
        return;
    }

    if parsed.show_version {
        println!("opsdeck {}", env!("CARGO_PKG_VERSION"));
        return;
    }

    let painter = Painter::new(parsed.color);
    if let Err(err) = run(&parsed, &painter) {
        eprintln!("{}", painter.status_error(&format!("{err:#}")));
        std::process::exit(1);
    }
}

fn run(parsed: &ParsedArgs, painter: &Painter) -> anyhow::Result<()> {
    // parse_args guarantees either an input path or --demo
    let mut data = match &parsed.input {
        Some(path) => dataset::load_dataset(path)?,
        None => dataset::demo_data(),
    };
    if data.generated_at.is_empty() {
        data.generated_at = dataset::current_timestamp();
    }

    if parsed.verbose {
        for warning in dataset::dataset_warnings(&data) {
            eprintln!("{}", painter.status_warn(&warning));
        }
        eprintln!(
            "{}",
            painter.status_info(&format!(
                "{} headline metrics, {} departments, {} priorities, {} risks",
                data.headline.len(),
                data.departments.len(),
                data.priorities.len(),
                data.risks.len()
            ))
        );
    }

    let html = render_dashboard(&data);

    if parsed.to_stdout {
        println!("{html}");
    } else {
        let out = parsed
            .out
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUT));
        std::fs::write(&out, &html)
            .with_context(|| format!("failed to write {}", out.display()))?;
        println!(
            "{}",
            painter.status_ok(&format!(
                "Wrote {} ({} KB)",
                out.display(),
                html.len() / 1024
            ))
        );
    }

    if parsed.summary {
        let text = summary::render_summary(&data, painter);
        if parsed.to_stdout {
            // keep stdout clean for the document
            eprint!("{text}");
        } else {
            print!("{text}");
        }
    }

    Ok(())
}
