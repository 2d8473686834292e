use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::wrap::wrap_text;

/// Column budget for record body text, sized for the kiosk's record pane
/// (28 CJK characters per line).
pub const RECORD_WRAP_WIDTH: usize = 56;

const PLACEHOLDER_PENDING: &str = "等待输入...";
const PLACEHOLDER_PENDING_ADVICE: &str = "等待AI医生建议...";
const FALLBACK_PATIENT_INFO: &str = "未提供患者信息";
const FALLBACK_COMPLAINT: &str = "未提供主诉";
const FALLBACK_ADVICE: &str = "未提供诊断信息";

/// One consultation's electronic record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MedicalRecord {
    pub visit_date: NaiveDate,
    /// Recognized registration info (OCR of the patient's document).
    pub patient_info: String,
    /// The transcribed question the patient asked.
    pub chief_complaint: String,
    /// The consultation answer, reference links stripped.
    pub advice: String,
}

impl MedicalRecord {
    /// The blank record shown before any consultation has happened.
    pub fn template(visit_date: NaiveDate) -> Self {
        Self {
            visit_date,
            patient_info: PLACEHOLDER_PENDING.to_string(),
            chief_complaint: PLACEHOLDER_PENDING.to_string(),
            advice: PLACEHOLDER_PENDING_ADVICE.to_string(),
        }
    }

    /// Build a record from consultation output.
    ///
    /// Blank sections fall back to fixed notices rather than rendering
    /// empty; reference links the consultation layer may have appended to
    /// the advice are dropped, the record only carries the advice itself.
    pub fn filled(visit_date: NaiveDate, info: &str, complaint: &str, advice: &str) -> Self {
        let advice = strip_references(advice);

        Self {
            visit_date,
            patient_info: section_or(info, FALLBACK_PATIENT_INFO),
            chief_complaint: section_or(complaint, FALLBACK_COMPLAINT),
            advice: section_or(&advice, FALLBACK_ADVICE),
        }
    }

    /// Render the record document as text.
    pub fn render(&self) -> String {
        format!(
            "电子病历\n\
             ==================\n\
             就诊日期：{date}\n\
             \n\
             患者信息：\n\
             {info}\n\
             \n\
             主诉：\n\
             {complaint}\n\
             \n\
             医生建议：\n\
             {advice}\n\
             \n\
             请遵医嘱用药，保持良好作息。\n\
             如有不适请及时就医。\n\
             \n\
             ==================\n\
             注：本病历由AI辅助生成，仅供参考。\n",
            date = self.visit_date.format("%Y-%m-%d"),
            info = self.patient_info,
            complaint = self.chief_complaint,
            advice = self.advice,
        )
    }
}

fn section_or(text: &str, fallback: &str) -> String {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        fallback.to_string()
    } else {
        wrap_text(trimmed, RECORD_WRAP_WIDTH)
    }
}

/// Drop a trailing reference-links block from advice text.
fn strip_references(advice: &str) -> String {
    let cut = advice
        .find("参考来源：")
        .or_else(|| advice.find("参考："))
        .unwrap_or(advice.len());
    advice[..cut].trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()
    }

    #[test]
    fn template_carries_placeholders_and_date() {
        let rendered = MedicalRecord::template(date()).render();

        assert!(rendered.contains("就诊日期：2025-03-14"));
        assert!(rendered.contains("等待输入..."));
        assert!(rendered.contains("等待AI医生建议..."));
        assert!(rendered.contains("注：本病历由AI辅助生成，仅供参考。"));
    }

    #[test]
    fn filled_record_renders_sections_in_order() {
        let record = MedicalRecord::filled(
            date(),
            "姓名：张三 科室：内科",
            "最近总是头晕。",
            "建议清淡饮食，保证睡眠。",
        );
        let rendered = record.render();

        let info_at = rendered.find("姓名：张三").unwrap();
        let complaint_at = rendered.find("最近总是头晕。").unwrap();
        let advice_at = rendered.find("建议清淡饮食").unwrap();
        assert!(info_at < complaint_at && complaint_at < advice_at);
    }

    #[test]
    fn blank_sections_fall_back_to_notices() {
        let record = MedicalRecord::filled(date(), "", "   ", "");

        assert_eq!(record.patient_info, "未提供患者信息");
        assert_eq!(record.chief_complaint, "未提供主诉");
        assert_eq!(record.advice, "未提供诊断信息");
    }

    #[test]
    fn reference_links_are_stripped_from_advice() {
        let advice = "多饮水，注意休息。\n\n参考来源：\n1. https://example.com/flu";
        let record = MedicalRecord::filled(date(), "info", "complaint", advice);

        assert_eq!(record.advice, "多饮水，注意休息。");
        assert!(!record.render().contains("example.com"));
    }

    #[test]
    fn long_advice_wraps_to_record_width() {
        let advice = "保持规律作息，".repeat(12);
        let record = MedicalRecord::filled(date(), "info", "complaint", &advice);

        for line in record.advice.lines() {
            assert!(crate::wrap::display_width(line) <= RECORD_WRAP_WIDTH);
        }
    }
}
