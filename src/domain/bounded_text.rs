//! 文本字段长度校验
//!
//! 长度按字符计数（Unicode scalar value），不按字节

use std::ops::RangeInclusive;

use super::DomainError;

/// 校验 `value` 的字符数落在 `range` 内
pub(crate) fn bounded(
    field: &'static str,
    value: String,
    range: RangeInclusive<usize>,
) -> Result<String, DomainError> {
    let len = value.chars().count();
    if range.contains(&len) {
        return Ok(value);
    }

    let reason = if *range.end() == usize::MAX {
        format!("长度至少为 {} 个字符, 实际 {}", range.start(), len)
    } else {
        format!(
            "长度必须在 {} 到 {} 个字符之间, 实际 {}",
            range.start(),
            range.end(),
            len
        )
    };
    Err(DomainError::validation(field, reason))
}

/// 非空文本
pub(crate) fn non_empty(field: &'static str, value: String) -> Result<String, DomainError> {
    bounded(field, value, 1..=usize::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_characters_not_bytes() {
        // 5 个字符, 15 个字节
        let value = "五个汉字啊".to_string();
        assert!(bounded("title", value, 5..=5).is_ok());
    }

    #[test]
    fn test_bounds_are_inclusive() {
        assert!(bounded("name", "ab".into(), 2..=16).is_ok());
        assert!(bounded("name", "a".repeat(16), 2..=16).is_ok());
        assert!(bounded("name", "a".into(), 2..=16).is_err());
        assert!(bounded("name", "a".repeat(17), 2..=16).is_err());
    }

    #[test]
    fn test_non_empty() {
        assert!(non_empty("name", String::new()).unwrap_err().is_validation());
        assert_eq!(non_empty("name", "x".into()).unwrap(), "x");
    }
}
