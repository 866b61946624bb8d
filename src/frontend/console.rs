use std::io::{self, BufRead, Write};

use crate::domain::RecommendationEntry;
use crate::processing::RecommendError;
use crate::processing::embedding::EmbeddingProvider;
use crate::processing::recommender::Recommender;

const SEPARATOR_WIDTH: usize = 50;

/// Interactive loop: ask for a major and an optional category, print results.
///
/// Ends on `q`/`Q` or end of input.
pub fn run<P, R, W>(recommender: &Recommender<P>, mut input: R, output: &mut W) -> io::Result<()>
where
    P: EmbeddingProvider,
    R: BufRead,
    W: Write,
{
    let stats = recommender.catalog().stats();
    writeln!(output, "\n=== 智能岗位推荐系统 ===")?;
    writeln!(output, "已加载数据量：{}条", stats.records)?;
    writeln!(output, "支持专业数量：{}个", stats.majors)?;
    writeln!(output, "支持岗位数量：{}种\n", stats.jobs)?;

    let categories = recommender.catalog().categories().join("/");

    loop {
        write!(output, "请输入查询的专业名称（输入q退出）: ")?;
        output.flush()?;
        let Some(major) = read_trimmed(&mut input)? else {
            break;
        };
        if major.eq_ignore_ascii_case("q") {
            break;
        }

        write!(
            output,
            "请选择院校类型筛选（可选：{categories}，直接回车跳过）: "
        )?;
        output.flush()?;
        let category = read_trimmed(&mut input)?.unwrap_or_default();
        let filter = (!category.is_empty()).then_some(category.as_str());

        writeln!(output, "\n推荐结果：")?;
        match recommender.recommend(&major, filter) {
            Ok(entries) if entries.is_empty() => {
                writeln!(output, "⚠️ 未找到相关岗位推荐")?;
            }
            Ok(entries) => {
                print_entries(output, &entries)?;
            }
            Err(RecommendError::InvalidInput) => {
                writeln!(output, "专业名称不能为空")?;
            }
            Err(error) => {
                log::error!("Recommendation for {major} failed: {error}");
                writeln!(output, "推荐失败：{error}")?;
            }
        }
    }

    Ok(())
}

fn read_trimmed<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn print_entries<W: Write>(output: &mut W, entries: &[RecommendationEntry]) -> io::Result<()> {
    for (i, entry) in entries.iter().enumerate() {
        writeln!(
            output,
            "{}. [{}] {} ({})",
            i + 1,
            entry.match_kind.label(),
            entry.job_text,
            entry.confidence
        )?;
    }
    writeln!(output, "{}", "-".repeat(SEPARATOR_WIDTH))
}
