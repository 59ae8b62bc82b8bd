use super::value::Value;

/// Builds the most fitting value for a literal token.
///
/// Tried in order: signed integer, boolean, double-quoted string. Anything
/// else becomes an `illegal literal` error value. The empty token (end of
/// input) is illegal as well.
pub fn parse_literal(token: &str) -> Value {
    if let Ok(x) = token.parse::<i64>() {
        return Value::Integer(x);
    }
    if let Some(b) = parse_bool(token) {
        return Value::Boolean(b);
    }
    if let Some(s) = unquote(token) {
        return Value::String(s);
    }
    Value::Error(format!("illegal literal '{}'", token))
}

pub fn parse_bool(token: &str) -> Option<bool> {
    match token {
        "true" | "True" | "TRUE" | "t" | "T" => Some(true),
        "false" | "False" | "FALSE" | "f" | "F" => Some(false),
        _ => None,
    }
}

/// Strips the surrounding double quotes of `token` and resolves its escape
/// sequences. Returns `None` when the token is not a well-formed literal.
pub fn unquote(token: &str) -> Option<String> {
    let body = token.strip_prefix('"')?.strip_suffix('"')?;

    let mut result = String::with_capacity(body.len());
    let mut chars = body.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => return None,
            '\\' => {
                let escaped = match chars.next()? {
                    'n' => '\n',
                    't' => '\t',
                    'r' => '\r',
                    '0' => '\0',
                    '\\' => '\\',
                    '"' => '"',
                    '\'' => '\'',
                    'x' => {
                        let hex: String = [chars.next()?, chars.next()?].iter().collect();
                        scalar(&hex).filter(char::is_ascii)?
                    }
                    'u' if chars.peek() == Some(&'{') => {
                        chars.next();
                        let mut hex = String::new();
                        loop {
                            match chars.next()? {
                                '}' => break,
                                c if c.is_ascii_hexdigit() && hex.len() < 6 => hex.push(c),
                                _ => return None,
                            }
                        }
                        scalar(&hex)?
                    }
                    'u' => {
                        let hex: String = (0..4).map(|_| chars.next()).collect::<Option<_>>()?;
                        scalar(&hex)?
                    }
                    _ => return None,
                };
                result.push(escaped);
            }
            _ => result.push(ch),
        }
    }

    Some(result)
}

fn scalar(hex: &str) -> Option<char> {
    if hex.is_empty() || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(hex, 16).ok().and_then(char::from_u32)
}
