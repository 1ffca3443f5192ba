//! グローバルEnterキーの判定

/// フォーカス中の要素
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FocusTarget {
    /// タグ名（"INPUT", "TEXTAREA" など。大文字小文字は問わない）
    pub tag: String,
    /// INPUT要素のtype属性
    pub input_type: Option<String>,
    pub content_editable: bool,
}

/// 文字入力を受け付けないINPUTのtype
const NON_TEXT_INPUT_TYPES: &[&str] = &[
    "file", "button", "submit", "reset", "checkbox", "radio", "range", "color", "image",
];

impl FocusTarget {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    pub fn input(input_type: impl Into<String>) -> Self {
        Self {
            tag: "INPUT".to_string(),
            input_type: Some(input_type.into()),
            content_editable: false,
        }
    }

    /// 文字入力中の要素か（Enterをアップロードに横取りしない）
    pub fn is_text_entry(&self) -> bool {
        if self.content_editable {
            return true;
        }
        match self.tag.to_ascii_uppercase().as_str() {
            "TEXTAREA" | "SELECT" => true,
            "INPUT" => {
                let input_type = self
                    .input_type
                    .as_deref()
                    .map(|t| t.trim().to_ascii_lowercase())
                    .unwrap_or_else(|| "text".to_string());
                !NON_TEXT_INPUT_TYPES.contains(&input_type.as_str())
            }
            _ => false,
        }
    }
}

/// アップロードを起動するキーか
pub fn is_submit_key(key: &str) -> bool {
    key == "Enter"
}
