use anyhow::{anyhow, Result};
use clap::Parser;
use lettr_tabs::highlight::{self, supports_true_color};
use lettr_tabs::samples::{self, CodeSample, CODE_SAMPLES};
use lettr_tabs::utils;

#[derive(Parser, Debug)]
#[command(name = "lettr-tabs")]
#[command(author = "wen")]
#[command(version = "0.2.0")]
#[command(about = "Render the lettr docs code sample tabs in the terminal.")]
#[command(long_about = "
lettr-tabs - code sample tabs for the lettr docs

Renders the documentation code samples with the lettr theme.
Without arguments every tab is rendered in order; pass a tab label
to render just that tab.

  lettr-tabs              render all tabs
  lettr-tabs Python       render one tab (label is case-insensitive)
  lettr-tabs --list       list tab labels and languages
  lettr-tabs --json       export theme + samples for the web renderer
")]
struct Args {
    /// Tab label to render (default: all tabs)
    tab: Option<String>,

    /// List tab labels and languages
    #[arg(long)]
    list: bool,

    /// Export theme and samples as JSON
    #[arg(long)]
    json: bool,

    /// Disable ANSI colors
    #[arg(long)]
    plain: bool,

    /// Enable debug mode
    #[arg(long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // 初始化日誌
    utils::init_logger(args.debug);

    if args.list {
        for sample in CODE_SAMPLES {
            println!("{}\t{}", sample.label, sample.lang);
        }
        return Ok(());
    }

    if args.json {
        return export_json();
    }

    match &args.tab {
        Some(label) => {
            let sample = samples::find(label).ok_or_else(|| {
                let labels: Vec<&str> = CODE_SAMPLES.iter().map(|s| s.label).collect();
                anyhow!("Unknown tab '{}' (expected one of: {})", label, labels.join(", "))
            })?;
            render_sample(sample, args.plain)?;
        }
        None => {
            for (idx, sample) in CODE_SAMPLES.iter().enumerate() {
                if idx > 0 {
                    println!();
                }
                render_sample(sample, args.plain)?;
            }
        }
    }

    Ok(())
}

/// 渲染單一分頁：標籤列 + 高亮後的程式碼
fn render_sample(sample: &CodeSample, plain: bool) -> Result<()> {
    println!("{}", tab_bar(sample.label));

    if plain {
        println!("{}", sample.code);
        return Ok(());
    }

    let highlighter = highlight::acquire()?;
    let rendered = highlighter.highlight(sample.lang, sample.code, supports_true_color())?;
    println!("{}", rendered);

    Ok(())
}

/// 組出分頁標籤列，當前分頁以 [] 標示，下方補一條等寬分隔線
fn tab_bar(active: &str) -> String {
    let mut bar = String::new();
    for sample in CODE_SAMPLES {
        if !bar.is_empty() {
            bar.push_str("  ");
        }
        if sample.label == active {
            bar.push('[');
            bar.push_str(sample.label);
            bar.push(']');
        } else {
            bar.push_str(sample.label);
        }
    }

    let width = utils::visual_width(&bar);
    format!("{}\n{}", bar, "─".repeat(width))
}

/// 匯出主題與範例，供網頁端渲染層使用
fn export_json() -> Result<()> {
    let payload = serde_json::json!({
        "theme": highlight::LETTR_THEME,
        "samples": CODE_SAMPLES,
    });
    println!("{}", serde_json::to_string_pretty(&payload)?);

    Ok(())
}
