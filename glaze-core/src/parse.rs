// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Text-to-node parsing: a small recursive-descent reader over a byte
//! cursor. Integers without fraction or exponent parse as `Int`/`UInt`;
//! everything else numeric parses as `Float`.

use crate::error::Error;
use crate::node::{JsonNode, JsonObject, JsonPrimitive};

pub(crate) fn parse(text: &str) -> Result<JsonNode, Error> {
    let mut parser = Parser {
        bytes: text.as_bytes(),
        pos: 0,
    };
    parser.skip_whitespace();
    let node = parser.value()?;
    parser.skip_whitespace();
    if parser.pos != parser.bytes.len() {
        return Err(Error::syntax(parser.pos, "trailing characters after document"));
    }
    Ok(node)
}

struct Parser<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Parser<'a> {
    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.pos += 1;
        Some(b)
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(b' ' | b'\t' | b'\n' | b'\r')) {
            self.pos += 1;
        }
    }

    fn expect(&mut self, byte: u8) -> Result<(), Error> {
        match self.bump() {
            Some(b) if b == byte => Ok(()),
            _ => Err(Error::syntax(
                self.pos.saturating_sub(1),
                format!("expected '{}'", byte as char),
            )),
        }
    }

    fn literal(&mut self, word: &str, node: JsonNode) -> Result<JsonNode, Error> {
        if self.bytes[self.pos..].starts_with(word.as_bytes()) {
            self.pos += word.len();
            Ok(node)
        } else {
            Err(Error::syntax(self.pos, format!("expected '{}'", word)))
        }
    }

    fn value(&mut self) -> Result<JsonNode, Error> {
        match self.peek() {
            Some(b'{') => self.object(),
            Some(b'[') => self.array(),
            Some(b'"') => Ok(JsonNode::Primitive(JsonPrimitive::Str(self.string()?))),
            Some(b't') => self.literal("true", JsonNode::bool(true)),
            Some(b'f') => self.literal("false", JsonNode::bool(false)),
            Some(b'n') => self.literal("null", JsonNode::Null),
            Some(b'-' | b'0'..=b'9') => self.number(),
            Some(other) => Err(Error::syntax(
                self.pos,
                format!("unexpected character '{}'", other as char),
            )),
            None => Err(Error::syntax(self.pos, "unexpected end of input")),
        }
    }

    fn object(&mut self) -> Result<JsonNode, Error> {
        self.expect(b'{')?;
        let mut obj = JsonObject::new();
        self.skip_whitespace();
        if self.peek() == Some(b'}') {
            self.pos += 1;
            return Ok(JsonNode::Object(obj));
        }
        loop {
            self.skip_whitespace();
            let key = self.string()?;
            self.skip_whitespace();
            self.expect(b':')?;
            self.skip_whitespace();
            let value = self.value()?;
            obj.insert(key, value);
            self.skip_whitespace();
            match self.bump() {
                Some(b',') => continue,
                Some(b'}') => return Ok(JsonNode::Object(obj)),
                _ => {
                    return Err(Error::syntax(
                        self.pos.saturating_sub(1),
                        "expected ',' or '}' in object",
                    ))
                }
            }
        }
    }

    fn array(&mut self) -> Result<JsonNode, Error> {
        self.expect(b'[')?;
        let mut items = Vec::new();
        self.skip_whitespace();
        if self.peek() == Some(b']') {
            self.pos += 1;
            return Ok(JsonNode::Array(items));
        }
        loop {
            self.skip_whitespace();
            items.push(self.value()?);
            self.skip_whitespace();
            match self.bump() {
                Some(b',') => continue,
                Some(b']') => return Ok(JsonNode::Array(items)),
                _ => {
                    return Err(Error::syntax(
                        self.pos.saturating_sub(1),
                        "expected ',' or ']' in array",
                    ))
                }
            }
        }
    }

    fn string(&mut self) -> Result<String, Error> {
        self.expect(b'"')?;
        let mut out = String::new();
        loop {
            match self.bump() {
                None => return Err(Error::syntax(self.pos, "unterminated string")),
                Some(b'"') => return Ok(out),
                Some(b'\\') => match self.bump() {
                    Some(b'"') => out.push('"'),
                    Some(b'\\') => out.push('\\'),
                    Some(b'/') => out.push('/'),
                    Some(b'b') => out.push('\u{0008}'),
                    Some(b'f') => out.push('\u{000C}'),
                    Some(b'n') => out.push('\n'),
                    Some(b'r') => out.push('\r'),
                    Some(b't') => out.push('\t'),
                    Some(b'u') => out.push(self.unicode_escape()?),
                    _ => {
                        return Err(Error::syntax(
                            self.pos.saturating_sub(1),
                            "invalid escape sequence",
                        ))
                    }
                },
                Some(b) if b < 0x20 => {
                    return Err(Error::syntax(
                        self.pos.saturating_sub(1),
                        "unescaped control character in string",
                    ))
                }
                Some(b) if b < 0x80 => out.push(b as char),
                Some(first) => {
                    // Multi-byte UTF-8: the input is a &str, so the sequence
                    // is known valid; re-decode it from the source slice.
                    let start = self.pos - 1;
                    let len = utf8_len(first);
                    self.pos = start + len;
                    let chunk = std::str::from_utf8(&self.bytes[start..self.pos])
                        .map_err(|_| Error::syntax(start, "invalid UTF-8"))?;
                    out.push_str(chunk);
                }
            }
        }
    }

    fn unicode_escape(&mut self) -> Result<char, Error> {
        let high = self.hex4()?;
        if (0xD800..0xDC00).contains(&high) {
            // Surrogate pair: a second \uXXXX must follow.
            if self.bump() != Some(b'\\') || self.bump() != Some(b'u') {
                return Err(Error::syntax(self.pos, "unpaired surrogate escape"));
            }
            let low = self.hex4()?;
            if !(0xDC00..0xE000).contains(&low) {
                return Err(Error::syntax(self.pos, "invalid low surrogate"));
            }
            let code = 0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00);
            char::from_u32(code).ok_or_else(|| Error::syntax(self.pos, "invalid surrogate pair"))
        } else {
            char::from_u32(high).ok_or_else(|| Error::syntax(self.pos, "invalid unicode escape"))
        }
    }

    fn hex4(&mut self) -> Result<u32, Error> {
        let mut value = 0u32;
        for _ in 0..4 {
            let digit = match self.bump() {
                Some(b @ b'0'..=b'9') => (b - b'0') as u32,
                Some(b @ b'a'..=b'f') => (b - b'a' + 10) as u32,
                Some(b @ b'A'..=b'F') => (b - b'A' + 10) as u32,
                _ => {
                    return Err(Error::syntax(
                        self.pos.saturating_sub(1),
                        "expected four hex digits",
                    ))
                }
            };
            value = (value << 4) | digit;
        }
        Ok(value)
    }

    fn number(&mut self) -> Result<JsonNode, Error> {
        let start = self.pos;
        if self.peek() == Some(b'-') {
            self.pos += 1;
        }
        while matches!(self.peek(), Some(b'0'..=b'9')) {
            self.pos += 1;
        }
        let mut is_float = false;
        if self.peek() == Some(b'.') {
            is_float = true;
            self.pos += 1;
            while matches!(self.peek(), Some(b'0'..=b'9')) {
                self.pos += 1;
            }
        }
        if matches!(self.peek(), Some(b'e' | b'E')) {
            is_float = true;
            self.pos += 1;
            if matches!(self.peek(), Some(b'+' | b'-')) {
                self.pos += 1;
            }
            while matches!(self.peek(), Some(b'0'..=b'9')) {
                self.pos += 1;
            }
        }
        let text = std::str::from_utf8(&self.bytes[start..self.pos])
            .map_err(|_| Error::syntax(start, "invalid number"))?;
        if !is_float {
            if let Ok(n) = text.parse::<i64>() {
                return Ok(JsonNode::int(n));
            }
            if let Ok(n) = text.parse::<u64>() {
                return Ok(JsonNode::Primitive(JsonPrimitive::UInt(n)));
            }
        }
        text.parse::<f64>()
            .map(JsonNode::float)
            .map_err(|_| Error::syntax(start, format!("invalid number '{}'", text)))
    }
}

fn utf8_len(first: u8) -> usize {
    match first {
        b if b >= 0xF0 => 4,
        b if b >= 0xE0 => 3,
        _ => 2,
    }
}
