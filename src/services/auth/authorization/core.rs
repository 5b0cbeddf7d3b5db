//! `Authorization` / `Proxy-Authorization` value parser (RFC 7235 §2.1).
//!
//! Only the `credentials` production is handled here:
//!
//! ```text
//! credentials = auth-scheme [ 1*SP ( token68 / #auth-param ) ]
//! auth-param  = token BWS "=" BWS ( token / quoted-string )
//! token68     = 1*( ALPHA / DIGIT / "-" / "." / "_" / "~" / "+" / "/" ) *"="
//! ```
//!
//! The scheme is returned verbatim. Deciding which schemes are acceptable is
//! the caller's job.

use std::str::FromStr;

use super::types::{AuthParam, AuthParamPair, AuthorizationValue, ParseError, Token68};

pub(crate) fn is_tchar(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b"!#$%&'*+-.^_`|~".contains(&b)
}

fn is_token68_char(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b"-._~+/".contains(&b)
}

fn is_ows(b: u8) -> bool {
    b == b' ' || b == b'\t'
}

impl AuthorizationValue {
    pub fn try_parse(input: &str) -> Result<Self, ParseError> {
        let mut cur = Cursor::new(input);

        cur.skip_ows();
        let auth_scheme = cur.token().ok_or(ParseError::MissingScheme)?;

        if cur.rest_is_ows() {
            return Ok(Self {
                auth_scheme: auth_scheme.to_owned(),
                auth_param: AuthParam::ParamList(Vec::new()),
            });
        }

        // 1*SP between scheme and credentials
        if cur.peek() != Some(b' ') {
            return Err(ParseError::UnexpectedChar { offset: cur.pos });
        }
        while cur.peek() == Some(b' ') {
            cur.pos += 1;
        }

        let auth_param = match cur.token68() {
            Some(value) => AuthParam::Token68(Token68 {
                value: value.to_owned(),
            }),
            None => AuthParam::ParamList(cur.auth_param_list()?),
        };

        Ok(Self {
            auth_scheme: auth_scheme.to_owned(),
            auth_param,
        })
    }
}

impl FromStr for AuthorizationValue {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_parse(s)
    }
}

struct Cursor<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    fn bytes(&self) -> &'a [u8] {
        self.src.as_bytes()
    }

    fn peek(&self) -> Option<u8> {
        self.bytes().get(self.pos).copied()
    }

    fn skip_ows(&mut self) {
        while self.peek().is_some_and(is_ows) {
            self.pos += 1;
        }
    }

    fn rest_is_ows(&self) -> bool {
        self.bytes()[self.pos..].iter().copied().all(is_ows)
    }

    fn take_while(&mut self, pred: impl Fn(u8) -> bool) -> &'a str {
        let start = self.pos;
        while self.peek().is_some_and(&pred) {
            self.pos += 1;
        }
        // predicates only accept ASCII, so both ends are char boundaries
        &self.src[start..self.pos]
    }

    fn token(&mut self) -> Option<&'a str> {
        let t = self.take_while(is_tchar);
        (!t.is_empty()).then_some(t)
    }

    /// token68 is only accepted when nothing but OWS follows it. On failure
    /// the cursor is left untouched.
    fn token68(&mut self) -> Option<&'a str> {
        let start = self.pos;
        let body = self.take_while(is_token68_char);
        if body.is_empty() {
            self.pos = start;
            return None;
        }
        self.take_while(|b| b == b'=');
        let end = self.pos;

        if !self.rest_is_ows() {
            self.pos = start;
            return None;
        }
        self.pos = self.src.len();
        Some(&self.src[start..end])
    }

    fn auth_param_list(&mut self) -> Result<Vec<AuthParamPair>, ParseError> {
        let mut list = Vec::new();

        loop {
            self.skip_ows();
            match self.peek() {
                None => break,
                // empty list element
                Some(b',') => {
                    self.pos += 1;
                    continue;
                }
                Some(_) => {}
            }

            list.push(self.auth_param()?);

            self.skip_ows();
            match self.peek() {
                None => break,
                Some(b',') => self.pos += 1,
                Some(_) => return Err(ParseError::UnexpectedChar { offset: self.pos }),
            }
        }

        Ok(list)
    }

    fn auth_param(&mut self) -> Result<AuthParamPair, ParseError> {
        let name = self
            .token()
            .ok_or(ParseError::UnexpectedChar { offset: self.pos })?
            .to_ascii_lowercase();

        self.skip_ows();
        if self.peek() != Some(b'=') {
            return Err(ParseError::UnexpectedChar { offset: self.pos });
        }
        self.pos += 1;
        self.skip_ows();

        let value = match self.peek() {
            Some(b'"') => self.quoted_string()?,
            _ => self
                .token()
                .ok_or(ParseError::InvalidParamValue { offset: self.pos })?
                .to_owned(),
        };

        Ok(AuthParamPair { name, value })
    }

    fn quoted_string(&mut self) -> Result<String, ParseError> {
        let open = self.pos;
        self.pos += 1;

        let mut out = Vec::new();
        loop {
            match self.peek() {
                None => return Err(ParseError::UnterminatedQuotedString { offset: open }),
                Some(b'"') => {
                    self.pos += 1;
                    break;
                }
                Some(b'\\') => {
                    self.pos += 1;
                    match self.peek() {
                        Some(b) if b == b'\t' || (b >= 0x20 && b != 0x7f) => {
                            out.push(b);
                            self.pos += 1;
                        }
                        None => {
                            return Err(ParseError::UnterminatedQuotedString { offset: open });
                        }
                        Some(_) => return Err(ParseError::UnexpectedChar { offset: self.pos }),
                    }
                }
                Some(b) if b == b'\t' || (b >= 0x20 && b != 0x7f) => {
                    out.push(b);
                    self.pos += 1;
                }
                Some(_) => return Err(ParseError::UnexpectedChar { offset: self.pos }),
            }
        }

        // bytes are copied whole from a &str, so multi-byte sequences survive
        String::from_utf8(out).map_err(|_| ParseError::InvalidParamValue { offset: open })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token68(v: &AuthorizationValue) -> Option<&str> {
        match &v.auth_param {
            AuthParam::Token68(t) => Some(&t.value),
            AuthParam::ParamList(_) => None,
        }
    }

    fn params(v: &AuthorizationValue) -> Vec<(&str, &str)> {
        match &v.auth_param {
            AuthParam::ParamList(list) => list
                .iter()
                .map(|p| (p.name.as_str(), p.value.as_str()))
                .collect(),
            AuthParam::Token68(_) => panic!("expected param list, got token68"),
        }
    }

    #[test]
    fn test_empty_value_is_error() {
        assert_eq!(AuthorizationValue::try_parse(""), Err(ParseError::MissingScheme));
        assert_eq!(AuthorizationValue::try_parse("   "), Err(ParseError::MissingScheme));
    }

    #[test]
    fn test_token68() {
        let v = AuthorizationValue::try_parse("Bearer dXNlcjoxMjM0").unwrap();
        assert_eq!(v.auth_scheme, "Bearer");
        assert_eq!(token68(&v), Some("dXNlcjoxMjM0"));
    }

    #[test]
    fn test_token68_with_padding_and_extra_chars() {
        let v = AuthorizationValue::try_parse("Bearer a-b.c_d~e+f/g==").unwrap();
        assert_eq!(token68(&v), Some("a-b.c_d~e+f/g=="));

        // single `=` padding must not be mistaken for an empty auth-param
        let v = AuthorizationValue::try_parse("Bearer dXNlcjo=").unwrap();
        assert_eq!(token68(&v), Some("dXNlcjo="));
    }

    #[test]
    fn test_surrounding_whitespace_ignored() {
        let v = AuthorizationValue::try_parse(" \tBearer   abc \t").unwrap();
        assert_eq!(v.auth_scheme, "Bearer");
        assert_eq!(token68(&v), Some("abc"));
    }

    #[test]
    fn test_scheme_kept_verbatim() {
        let v = AuthorizationValue::try_parse("bEaReR abc").unwrap();
        assert_eq!(v.auth_scheme, "bEaReR");
    }

    #[test]
    fn test_scheme_only() {
        for input in ["Bearer", "Bearer ", "Bearer \t "] {
            let v = AuthorizationValue::try_parse(input).unwrap();
            assert_eq!(v.auth_param, AuthParam::ParamList(Vec::new()), "{input:?}");
        }
    }

    #[test]
    fn test_param_list() {
        let v = AuthorizationValue::try_parse("MyScheme param=value, anotherparam=anothervalue")
            .unwrap();
        assert_eq!(v.auth_scheme, "MyScheme");
        assert_eq!(
            params(&v),
            vec![("param", "value"), ("anotherparam", "anothervalue")]
        );
    }

    #[test]
    fn test_param_names_lowercased_and_bws_allowed() {
        let v = AuthorizationValue::try_parse("Digest Realm = \"a b\" ,NONCE=x").unwrap();
        assert_eq!(params(&v), vec![("realm", "a b"), ("nonce", "x")]);
    }

    #[test]
    fn test_quoted_string_escapes() {
        let v = AuthorizationValue::try_parse(r#"X a="q\"uo\\te""#).unwrap();
        assert_eq!(params(&v), vec![("a", r#"q"uo\te"#)]);
    }

    #[test]
    fn test_empty_list_elements_tolerated() {
        let v = AuthorizationValue::try_parse("X , a=b,, ,c=d ,").unwrap();
        assert_eq!(params(&v), vec![("a", "b"), ("c", "d")]);
    }

    #[test]
    fn test_malformed_values() {
        assert!(matches!(
            AuthorizationValue::try_parse("X a=\"open"),
            Err(ParseError::UnterminatedQuotedString { .. })
        ));
        assert!(matches!(
            AuthorizationValue::try_parse("X a=, b=c"),
            Err(ParseError::InvalidParamValue { .. })
        ));
        assert!(matches!(
            AuthorizationValue::try_parse("X a b"),
            Err(ParseError::UnexpectedChar { .. })
        ));
        assert!(matches!(
            AuthorizationValue::try_parse("X abc def"),
            Err(ParseError::UnexpectedChar { .. })
        ));
        // tab is not a valid separator after the scheme
        assert!(matches!(
            AuthorizationValue::try_parse("Bearer\tabc"),
            Err(ParseError::UnexpectedChar { offset: 6 })
        ));
        assert_eq!(
            AuthorizationValue::try_parse("=abc"),
            Err(ParseError::MissingScheme)
        );
    }

    #[test]
    fn test_from_str_and_display() {
        let v: AuthorizationValue = "Digest  realm=\"a b\",qop=auth".parse().unwrap();
        assert_eq!(v.to_string(), "Digest realm=\"a b\", qop=auth");

        let v: AuthorizationValue = "Bearer abc==".parse().unwrap();
        assert_eq!(v.to_string(), "Bearer abc==");
    }
}
