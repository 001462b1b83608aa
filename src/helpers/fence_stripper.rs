const JSON_FENCE: &str = "```json";
const FENCE: &str = "```";

/// Removes every markdown code-fence marker ("```json" and bare "```") from
/// model output and trims the remainder.
pub fn strip_code_fences(text: &str) -> String {
    text.replace(JSON_FENCE, "")
        .replace(FENCE, "")
        .trim()
        .to_string()
}

/// Wraps JSON text the way models usually answer: a fenced block tagged json.
pub fn fence_json(json: &str) -> String {
    format!("{}\n{}\n{}", JSON_FENCE, json, FENCE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn strips_tagged_fence() {
        let text = "```json\n{\"risk_status\": \"Healthy\"}\n```";
        assert_eq!(strip_code_fences(text), "{\"risk_status\": \"Healthy\"}");
    }

    #[test]
    fn strips_bare_fence_and_surrounding_whitespace() {
        assert_eq!(strip_code_fences("  \n```\n[1, 2]\n```  \n"), "[1, 2]");
    }

    #[test]
    fn leaves_unfenced_text_alone() {
        assert_eq!(strip_code_fences("{\"a\": 1}"), "{\"a\": 1}");
    }

    #[test]
    fn removes_markers_in_the_middle_too() {
        assert_eq!(strip_code_fences("```json{}```json"), "{}");
    }

    proptest! {
        #[test]
        fn strip_inverts_fence(key in "[a-z_]{1,12}", value in -1000i64..1000) {
            let json = serde_json::json!({ key.clone(): value, "items": [value, value] }).to_string();
            let stripped = strip_code_fences(&fence_json(&json));
            prop_assert_eq!(&stripped, &json);

            let parsed: serde_json::Value = serde_json::from_str(&stripped).unwrap();
            let original: serde_json::Value = serde_json::from_str(&json).unwrap();
            prop_assert_eq!(parsed, original);
        }
    }
}
