use anyhow::{Context, Result, bail};
use clap::Parser;
use daily_report_parser::{LayoutConfig, ReportParser, convert_file};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

/// 把按月分节的每日计数报表转换为 CSV 表格
#[derive(Parser, Debug)]
#[command(name = "daily-report")]
#[command(version, about, long_about = None)]
struct Cli {
    /// 输入的报表文本文件
    input: PathBuf,

    /// 输出的 CSV 文件
    #[arg(default_value = "nytdata_converted.csv")]
    output: PathBuf,

    /// 分节头中的三个年份标记，如 `--years Y2015 Y2016 'Y2017*'`
    #[arg(long, num_args = 3, value_names = ["Y1", "Y2", "Y3"])]
    years: Option<Vec<String>>,

    /// 输出分隔符（单个 ASCII 字符）
    #[arg(short, long, default_value_t = ',')]
    delimiter: char,

    /// 按分节并行提取
    #[arg(long)]
    parallel: bool,
}

impl Cli {
    fn layout(&self) -> Result<LayoutConfig> {
        if !self.delimiter.is_ascii() {
            bail!("delimiter must be a single ASCII character, got {:?}", self.delimiter);
        }
        let mut layout = LayoutConfig::nyt_default().with_delimiter(self.delimiter as u8);

        if let Some(years) = &self.years {
            let markers: [String; 3] = years
                .clone()
                .try_into()
                .map_err(|v: Vec<String>| anyhow::anyhow!("expected 3 year markers, got {}", v.len()))?;
            layout = layout.with_year_markers(markers);
        }

        Ok(layout)
    }
}

fn main() -> Result<()> {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let parser = ReportParser::new(cli.layout()?).context("invalid report layout")?;
    info!(input = %cli.input.display(), parallel = cli.parallel, "converting report");

    let summary = convert_file(&cli.input, &cli.output, &parser, cli.parallel)
        .with_context(|| format!("failed to convert {}", cli.input.display()))?;

    info!(
        sections = summary.sections,
        records = summary.records,
        "wrote {}",
        summary.output.display()
    );
    Ok(())
}
