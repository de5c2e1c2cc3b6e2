use anyhow::{anyhow, bail, Context};
use clap::Parser;
use std::path::{Path, PathBuf};

use ftl_rebuild::io::{
    DefaultEntryReader, DefaultEntryWriter, DefaultReconstructedUnitWriter,
    DefaultTranslationUnitReader, EntryReader, EntryWriter, ReconstructedUnitWriter,
    TranslationUnitReader,
};
use ftl_rebuild::reconstruct::EntryShape;
use ftl_rebuild::utils::{create_backup, decode_source, has_supported_extension};
use ftl_rebuild::{
    parse_entry, reconstruct_batch, reconstruct_detailed, serialize_entry, BatchSummary, Entry,
    FtlError, SUPPORTED_EXTENSIONS,
};
use ftl_rebuild::syntax::EntrySummary;

#[derive(Parser)]
#[command(name = "ftl_rebuild")]
#[command(about = "用译文重建 Fluent (FTL) 消息或术语")]
#[command(version = "0.1.0")]
struct Cli {
    /// 输入的 FTL 条目文件路径
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// 输出文件路径（默认输出到标准输出）
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// 译文：直接从命令行参数读取
    #[arg(short, long)]
    translation: Option<String>,

    /// 译文：从文本文件读取（避免命令行长度限制）
    #[arg(long)]
    translation_file: Option<PathBuf>,

    /// 译文：从标准输入读取
    #[arg(long)]
    translation_stdin: bool,

    /// 批量模式：从 JSON 文件读取译文条目数组
    #[arg(long)]
    batch: Option<PathBuf>,

    /// 测试模式：解析后直接序列化，检查输入是否已是规范格式
    #[arg(long)]
    test_rebuild: bool,

    /// 显示条目结构信息
    #[arg(long)]
    stats: bool,

    /// 与 --stats 一起使用：以 JSON 输出条目结构
    #[arg(long, requires = "stats")]
    json: bool,

    /// 静默模式(仅输出错误)
    #[arg(long)]
    quiet: bool,

    /// 显示拼接出的中间源文本
    #[arg(long)]
    verbose: bool,
}

/// 翻译来源
enum TranslationSource<'a> {
    Text(&'a str),
    File(&'a Path),
    Stdin,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    validate_translation_options(&cli)?;

    if let Some(batch_file) = &cli.batch {
        return handle_batch(&cli, batch_file);
    }

    let input = cli
        .input
        .as_deref()
        .ok_or_else(|| anyhow!("缺少输入文件：请使用 --input 指定 FTL 条目文件"))?;
    validate_input(input)?;

    if cli.test_rebuild {
        return handle_test_rebuild(&cli, input);
    }

    if cli.stats {
        return handle_stats(&cli, input);
    }

    handle_reconstruct(&cli, input)
}

/// 验证输入文件
fn validate_input(input: &Path) -> anyhow::Result<()> {
    if !input.exists() {
        bail!("输入文件不存在: {:?}", input);
    }

    if !has_supported_extension(input) {
        bail!(
            "输入文件必须是 {} 文件",
            SUPPORTED_EXTENSIONS.join("、").to_uppercase()
        );
    }

    Ok(())
}

/// 验证译文来源（确保只使用一种方式）
fn validate_translation_options(cli: &Cli) -> anyhow::Result<()> {
    let source_count = [
        cli.translation.is_some(),
        cli.translation_file.is_some(),
        cli.translation_stdin,
    ]
    .iter()
    .filter(|&&x| x)
    .count();

    if source_count > 1 {
        bail!("只能使用一种译文来源：--translation、--translation-file 或 --translation-stdin");
    }

    if cli.batch.is_some() && (source_count > 0 || cli.input.is_some()) {
        bail!("--batch 模式从 JSON 文件读取原文和译文，不能与 --input 或译文参数同时使用");
    }

    if cli.batch.is_some() && (cli.stats || cli.test_rebuild) {
        bail!("--batch 不能与 --stats 或 --test-rebuild 同时使用");
    }

    if source_count > 0 && (cli.stats || cli.test_rebuild) {
        bail!("--stats 和 --test-rebuild 只检查输入条目，不接受译文参数");
    }

    if cli.stats && cli.test_rebuild {
        bail!("--stats 和 --test-rebuild 不能同时使用");
    }

    Ok(())
}

fn translation_source(cli: &Cli) -> Option<TranslationSource<'_>> {
    if let Some(text) = &cli.translation {
        return Some(TranslationSource::Text(text));
    }
    if let Some(path) = &cli.translation_file {
        return Some(TranslationSource::File(path));
    }
    cli.translation_stdin.then_some(TranslationSource::Stdin)
}

/// 读取译文
fn read_translation(cli: &Cli, source: TranslationSource<'_>) -> anyhow::Result<String> {
    match source {
        TranslationSource::Text(text) => Ok(text.to_string()),
        TranslationSource::File(path) => {
            if !path.exists() {
                bail!("译文文件不存在: {:?}", path);
            }
            let bytes = std::fs::read(path)
                .with_context(|| format!("读取译文文件失败: {:?}", path))?;
            Ok(decode_source(&bytes, &path.display().to_string())?)
        }
        TranslationSource::Stdin => {
            if !cli.quiet {
                eprintln!("等待从标准输入读取译文... (Ctrl+D结束输入)");
            }

            use std::io::Read;
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("从标准输入读取失败")?;
            Ok(buffer)
        }
    }
}

/// 读取并解析输入条目
fn load_entry(input: &Path) -> anyhow::Result<Entry> {
    let source = DefaultEntryReader.read(input)?;
    parse_entry(&source).map_err(|e| anyhow!("解析条目失败 {:?}: {}", input, e))
}

/// 处理单条重建
fn handle_reconstruct(cli: &Cli, input: &Path) -> anyhow::Result<()> {
    let source = translation_source(cli).ok_or_else(|| {
        anyhow!("缺少译文：请使用 --translation、--translation-file 或 --translation-stdin")
    })?;

    let original = DefaultEntryReader.read(input)?;
    let translation = read_translation(cli, source)?;

    let result = reconstruct_detailed(&original, &translation)
        .map_err(|e| anyhow!("重建失败: {}", e))?;

    if cli.verbose && !cli.quiet {
        eprintln!("条目: {} {} ({}, {:?})", result.kind, result.key, result.shape, result.layout);
        eprintln!("中间源文本:\n{}", result.source);
    }

    write_output(cli, &result.output)
}

/// 处理批量重建
fn handle_batch(cli: &Cli, batch_file: &Path) -> anyhow::Result<()> {
    if !batch_file.exists() {
        bail!("批量译文文件不存在: {:?}", batch_file);
    }

    let units = DefaultTranslationUnitReader
        .read_units(batch_file)
        .map_err(|e| anyhow!("读取批量译文失败: {}", e))?;

    if units.is_empty() {
        return Err(FtlError::EmptyBatch.into());
    }

    if !cli.quiet {
        eprintln!("准备重建 {} 个条目", units.len());
    }

    let results = reconstruct_batch(units);
    let summary = BatchSummary::of(&results);

    match &cli.output {
        Some(path) => {
            backup_existing(cli, path)?;
            DefaultReconstructedUnitWriter.write_units(&results, path)?;
            if !cli.quiet {
                eprintln!("结果已写入: {:?}", path);
            }
        }
        None => println!("{}", serde_json::to_string_pretty(&results)?),
    }

    if !cli.quiet {
        eprintln!("批量重建完成：{}", summary);
        for failed in results.iter().filter(|unit| !unit.is_success()).take(3) {
            eprintln!(
                "  失败 [{}]: {}",
                failed.id.as_deref().unwrap_or("-"),
                failed.error.as_deref().unwrap_or_default()
            );
        }
        if summary.failed > 3 {
            eprintln!("  ... 还有 {} 个失败条目", summary.failed - 3);
        }
    }

    Ok(())
}

/// 处理测试重建模式
fn handle_test_rebuild(cli: &Cli, input: &Path) -> anyhow::Result<()> {
    if !cli.quiet {
        eprintln!("测试模式：解析并重建条目 {:?}", input);
    }

    let original = DefaultEntryReader.read(input)?;
    let entry = parse_entry(&original).map_err(|e| anyhow!("解析条目失败: {}", e))?;
    let canonical = serialize_entry(&entry);

    if !cli.quiet {
        if canonical == original {
            eprintln!("✓ 输入已是规范格式");
        } else {
            eprintln!("⚠ 输入与规范格式不一致，规范格式如下");
        }
    }

    write_output(cli, &canonical)
}

/// 处理统计信息
fn handle_stats(cli: &Cli, input: &Path) -> anyhow::Result<()> {
    let entry = load_entry(input)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&EntrySummary::from(&entry))?);
        return Ok(());
    }

    let attributes = entry.attribute_names();

    println!("类型: {}", entry.kind);
    println!("键: {}", entry.key());
    println!("值: {}", if entry.value.is_some() { "有" } else { "无" });
    println!(
        "属性: {}",
        if attributes.is_empty() {
            "无".to_string()
        } else {
            attributes.join(", ")
        }
    );
    println!("重建形状: {}", EntryShape::of(&entry));
    if let Some(comment) = entry.comment_text() {
        println!("注释: {}", comment);
    }

    Ok(())
}

/// 写入结果：指定了输出文件则写文件（已存在时先备份），否则打印到标准输出
fn write_output(cli: &Cli, content: &str) -> anyhow::Result<()> {
    match &cli.output {
        Some(path) => {
            backup_existing(cli, path)?;
            DefaultEntryWriter.write(content, path)?;
            if !cli.quiet {
                eprintln!("结果已写入: {:?}", path);
            }
        }
        None => print!("{}", content),
    }
    Ok(())
}

fn backup_existing(cli: &Cli, path: &Path) -> anyhow::Result<()> {
    if path.exists() {
        let backup = create_backup(path).with_context(|| format!("备份失败: {:?}", path))?;
        if !cli.quiet {
            eprintln!("已备份原文件到: {:?}", backup);
        }
    }
    Ok(())
}
