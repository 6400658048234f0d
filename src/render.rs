//! Plain-text rendering of resolved content, shaped by delivery method.

use crate::entity::{ApologyVariant, Method};

/// Render the copyable text for `method`.
///
/// Email lists the subject candidates before the body, chat is the body
/// alone, and a phone script is laid out as numbered steps. Absent fields are
/// left out.
pub fn render_text(variant: &ApologyVariant, method: Method) -> String {
    let content = &variant.content;
    let mut out = String::new();

    match method {
        Method::Email => {
            if let Some(subjects) = &content.subjects {
                if !subjects.is_empty() {
                    out.push_str("## 件名\n\n");
                    for (i, subject) in subjects.iter().enumerate() {
                        out.push_str(&format!("{}. {}\n", i + 1, subject));
                    }
                    out.push_str("\n## 本文\n\n");
                }
            }
            out.push_str(&content.body);
            out.push('\n');
        }
        Method::Chat => {
            out.push_str(&content.body);
            out.push('\n');
        }
        Method::Phone => {
            if let Some(opening) = &content.opening {
                out.push_str("[1] 冒頭\n");
                out.push_str(opening);
                out.push_str("\n\n");
            }
            out.push_str("[2] 本題\n");
            out.push_str(&content.body);
            out.push('\n');
            if let Some(closing) = &content.closing {
                out.push_str("\n[3] 締め\n");
                out.push_str(closing);
                out.push('\n');
            }
        }
    }

    out
}

/// One subject candidate, 1-based as displayed.
pub fn subject(variant: &ApologyVariant, number: usize) -> Option<&str> {
    let index = number.checked_sub(1)?;
    variant
        .content
        .subjects
        .as_ref()?
        .get(index)
        .map(String::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{ContentBody, Recipient};

    fn email() -> ApologyVariant {
        ApologyVariant::new(
            Recipient::Client,
            Method::Email,
            ContentBody {
                subjects: Some(vec!["お詫び".to_string(), "ご報告".to_string()]),
                body: "本文です".to_string(),
                opening: None,
                closing: None,
            },
        )
    }

    #[test]
    fn test_render_email() {
        let text = render_text(&email(), Method::Email);
        assert!(text.starts_with("## 件名\n\n1. お詫び\n2. ご報告\n"));
        assert!(text.ends_with("## 本文\n\n本文です\n"));
    }

    #[test]
    fn test_render_email_without_subjects() {
        let variant = ApologyVariant::new(
            Recipient::Friend,
            Method::Email,
            ContentBody::new("ごめん"),
        );
        assert_eq!(render_text(&variant, Method::Email), "ごめん\n");
    }

    #[test]
    fn test_render_chat_ignores_subjects() {
        assert_eq!(render_text(&email(), Method::Chat), "本文です\n");
    }

    #[test]
    fn test_render_phone() {
        let variant = ApologyVariant::new(
            Recipient::Boss,
            Method::Phone,
            ContentBody {
                subjects: None,
                body: "申し訳ありません".to_string(),
                opening: Some("お疲れ様です".to_string()),
                closing: Some("失礼いたします".to_string()),
            },
        );
        let text = render_text(&variant, Method::Phone);
        assert_eq!(
            text,
            "[1] 冒頭\nお疲れ様です\n\n[2] 本題\n申し訳ありません\n\n[3] 締め\n失礼いたします\n"
        );
    }

    #[test]
    fn test_render_phone_omits_absent_parts() {
        let variant = ApologyVariant::new(
            Recipient::Boss,
            Method::Phone,
            ContentBody::new("申し訳ありません"),
        );
        let text = render_text(&variant, Method::Phone);
        assert_eq!(text, "[2] 本題\n申し訳ありません\n");
    }

    #[test]
    fn test_subject_lookup() {
        let variant = email();
        assert_eq!(subject(&variant, 1), Some("お詫び"));
        assert_eq!(subject(&variant, 2), Some("ご報告"));
        assert_eq!(subject(&variant, 0), None);
        assert_eq!(subject(&variant, 3), None);
    }
}
