// ==========================================
// 金属生产LCA评估仪表盘 - 评估报告实体
// ==========================================
// 职责: 报告请求选项与生成结果(模拟)
// 报告内容为固定的八节目录(共22页/8图), 不随方案数据变化
// ==========================================

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

// ==========================================
// ReportOptions - 报告生成选项
// ==========================================

/// 报告生成选项(POST至报告接口的请求体)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportOptions {
    /// 输出格式
    pub format: String,

    /// 是否包含图表
    pub include_charts: bool,

    /// 是否包含双方案对比
    pub include_comparison: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            format: "PDF".to_string(),
            include_charts: true,
            include_comparison: true,
        }
    }
}

// ==========================================
// ReportSection - 报告章节
// ==========================================

/// 报告章节(固定目录条目)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSection {
    /// 章节标题
    pub title: String,

    /// 页数
    pub pages: u32,

    /// 图表数
    pub charts: u32,
}

impl ReportSection {
    fn new(title: &str, pages: u32, charts: u32) -> Self {
        Self {
            title: title.to_string(),
            pages,
            charts,
        }
    }

    /// 标准报告目录: 八个章节, 合计22页/8图
    pub fn standard_sections() -> Vec<ReportSection> {
        vec![
            ReportSection::new("执行摘要", 2, 0),
            ReportSection::new("评估范围与方法", 3, 0),
            ReportSection::new("清单分析", 4, 0),
            ReportSection::new("KPI对比分析", 3, 3),
            ReportSection::new("物料流分析", 3, 2),
            ReportSection::new("碳足迹明细", 3, 2),
            ReportSection::new("循环性评价", 2, 1),
            ReportSection::new("结论与建议", 2, 0),
        ]
    }
}

// ==========================================
// GeneratedReport - 生成的报告
// ==========================================

/// 生成的报告(模拟)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedReport {
    /// 报告ID
    pub report_id: String,

    /// 生成时间
    pub generated_at: NaiveDateTime,

    /// 输出格式
    pub format: String,

    /// 是否包含图表
    pub include_charts: bool,

    /// 是否包含双方案对比
    pub include_comparison: bool,

    /// 总页数
    pub total_pages: u32,

    /// 总图表数
    pub total_charts: u32,

    /// 章节目录
    pub sections: Vec<ReportSection>,

    /// 报告接口是否送达
    pub backend_delivered: bool,

    /// 报告接口错误(送达失败时)
    pub backend_error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_sections_totals() {
        let sections = ReportSection::standard_sections();
        assert_eq!(sections.len(), 8);

        let total_pages: u32 = sections.iter().map(|s| s.pages).sum();
        let total_charts: u32 = sections.iter().map(|s| s.charts).sum();
        assert_eq!(total_pages, 22);
        assert_eq!(total_charts, 8);
    }
}
