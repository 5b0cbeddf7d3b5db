/*
 * Responsibility
 * - `Authorization` 系ヘッダのパース結果の型 (scheme + param)
 * - param は token68 か auth-param リストのどちらか (閉じた enum)
 */
use std::fmt;

/// Parsed `credentials` production: `auth-scheme [ 1*SP ( token68 / #auth-param ) ]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorizationValue {
    /// Kept verbatim; scheme comparison is left to the caller.
    pub auth_scheme: String,
    pub auth_param: AuthParam,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthParam {
    Token68(Token68),
    /// Empty when the scheme carries no credentials at all.
    ParamList(Vec<AuthParamPair>),
}

/// A single opaque credential blob.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token68 {
    pub value: String,
}

/// `name=value`. `name` is lower-cased, `value` is unescaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthParamPair {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("missing auth-scheme")]
    MissingScheme,
    #[error("unexpected character at offset {offset}")]
    UnexpectedChar { offset: usize },
    #[error("unterminated quoted-string starting at offset {offset}")]
    UnterminatedQuotedString { offset: usize },
    #[error("missing or invalid auth-param value at offset {offset}")]
    InvalidParamValue { offset: usize },
}

impl fmt::Display for AuthorizationValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.auth_scheme)?;
        match &self.auth_param {
            AuthParam::Token68(t) => write!(f, " {}", t.value),
            AuthParam::ParamList(list) => {
                for (i, p) in list.iter().enumerate() {
                    f.write_str(if i == 0 { " " } else { ", " })?;
                    write!(f, "{p}")?;
                }
                Ok(())
            }
        }
    }
}

impl fmt::Display for AuthParamPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.value.is_empty() && self.value.bytes().all(super::core::is_tchar) {
            return write!(f, "{}={}", self.name, self.value);
        }

        write!(f, "{}=\"", self.name)?;
        for c in self.value.chars() {
            if c == '"' || c == '\\' {
                write!(f, "\\")?;
            }
            write!(f, "{c}")?;
        }
        write!(f, "\"")
    }
}
