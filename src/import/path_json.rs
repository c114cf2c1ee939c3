use crate::error::{VisualizeError, VisualizeResult};
use crate::models::PathResult;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct PathRecord {
    path: Option<Vec<String>>,
    #[serde(default)]
    cost: Option<f64>,
}

/// Parse one of the engine's path result files.
///
/// # Errors
///
/// - [`VisualizeError::Parse`] if the text is not a path record or the path is empty
/// - [`VisualizeError::MissingField`] if `path` is absent
pub fn parse_path_result(file: &str, text: &str) -> VisualizeResult<PathResult> {
    let record: PathRecord = serde_json::from_str(text).map_err(|e| VisualizeError::parse(file, e))?;

    let path = record
        .path
        .ok_or_else(|| VisualizeError::missing_field(file, "path"))?;
    if path.is_empty() {
        return Err(VisualizeError::parse(file, "path contains no stations"));
    }

    Ok(PathResult::new(path, record.cost))
}

#[cfg(test)]
mod tests {
    use super::*;

    const FILE: &str = "result.json";

    #[test]
    fn test_parse_path_with_cost() {
        let result = parse_path_result(FILE, r#"{"path": ["A", "B", "C"], "cost": 30}"#)
            .expect("valid result");

        assert_eq!(result.path, vec!["A", "B", "C"]);
        assert_eq!(result.cost, Some(30.0));
    }

    #[test]
    fn test_cost_is_optional() {
        let result = parse_path_result(FILE, r#"{"path": ["X"]}"#).expect("valid result");
        assert_eq!(result.path, vec!["X"]);
        assert_eq!(result.cost, None);

        let result = parse_path_result(FILE, r#"{"path": ["X"], "cost": null}"#).expect("valid result");
        assert_eq!(result.cost, None);
    }

    #[test]
    fn test_missing_path_field() {
        let error = parse_path_result(FILE, r#"{"cost": 12}"#).expect_err("no path");
        assert_eq!(error, VisualizeError::missing_field(FILE, "path"));
        assert!(error.to_string().contains("path"));
    }

    #[test]
    fn test_null_path_field() {
        let error = parse_path_result(FILE, r#"{"path": null, "cost": 12}"#).expect_err("null path");
        assert_eq!(error, VisualizeError::missing_field(FILE, "path"));
    }

    #[test]
    fn test_empty_path_is_rejected() {
        let error = parse_path_result(FILE, r#"{"path": []}"#).expect_err("empty path");
        assert!(matches!(error, VisualizeError::Parse { .. }));
    }

    #[test]
    fn test_malformed_result() {
        let error = parse_path_result(FILE, r#"{"path": "A,B"}"#).expect_err("path is not a list");
        assert!(matches!(error, VisualizeError::Parse { .. }));

        let error = parse_path_result(FILE, "").expect_err("empty file");
        assert!(matches!(error, VisualizeError::Parse { .. }));
    }
}
