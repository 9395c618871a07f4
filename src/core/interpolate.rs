//! Positional `%`-style message interpolation
//!
//! A format string is compiled once into a [`Pattern`] of literal text and
//! verbs. Rendering fills each verb with the next argument's `Display`
//! output, whatever the verb letter is (`%s`, `%d` and `%v` all behave the
//! same). A verb may carry flags, a width and a precision between the `%`
//! and its letter:
//!
//! | directive | effect                                               |
//! |-----------|------------------------------------------------------|
//! | `%5d`     | right-align in 5 columns                             |
//! | `%-4s`    | left-align in 4 columns                              |
//! | `%05d`    | pad with zeros after any sign                        |
//! | `%+d`     | always print the sign of a number                    |
//! | `%.2f`    | precision: decimals for floats, truncation for text  |
//!
//! The ` ` and `#` flags are accepted and ignored. Mismatches never fail;
//! they leave a visible marker in the output:
//!
//! | input                 | output                  |
//! |-----------------------|-------------------------|
//! | `%%`                  | `%`                     |
//! | verb with no argument | `%!s(MISSING)`          |
//! | lone trailing `%`     | `%!(NOVERB)`            |
//! | `%` then non-letter   | `%!!(BADVERB)`          |
//! | unused arguments      | `%!(EXTRA a, b)`        |
//!
//! # Examples
//!
//! ```
//! use logorithm::core::interpolate;
//!
//! assert_eq!(interpolate("%s took %dms", &[&"query", &42]), "query took 42ms");
//! assert_eq!(interpolate("%5d|%-4s|%.2f", &[&3, &"ab", &3.14159]), "    3|ab  |3.14");
//! assert_eq!(interpolate("100%%", &[]), "100%");
//! ```

use std::fmt::{self, Write};
use std::iter::Peekable;
use std::str::Chars;

/// Flags, width and precision of one verb
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Directive {
    left: bool,
    zero: bool,
    plus: bool,
    width: Option<usize>,
    precision: Option<usize>,
}

impl Directive {
    fn parse(chars: &mut Peekable<Chars<'_>>) -> Self {
        let mut directive = Directive::default();

        while let Some(&flag) = chars.peek() {
            match flag {
                '-' => directive.left = true,
                '0' => directive.zero = true,
                '+' => directive.plus = true,
                ' ' | '#' => {}
                _ => break,
            }
            chars.next();
        }

        directive.width = parse_number(chars);
        if chars.peek() == Some(&'.') {
            chars.next();
            directive.precision = Some(parse_number(chars).unwrap_or(0));
        }

        directive
    }

    fn write(&self, out: &mut String, arg: &dyn fmt::Display) {
        let body = match (self.plus, self.precision) {
            (false, None) => arg.to_string(),
            (false, Some(p)) => format!("{:.p$}", arg, p = p),
            (true, None) => format!("{:+}", arg),
            (true, Some(p)) => format!("{:+.p$}", arg, p = p),
        };

        let width = self.width.unwrap_or(0);
        let len = body.chars().count();
        if len >= width {
            out.push_str(&body);
            return;
        }

        let padding = width - len;
        if self.left {
            out.push_str(&body);
            out.extend(std::iter::repeat(' ').take(padding));
        } else if self.zero {
            let sign_len = match body.chars().next() {
                Some('+') | Some('-') => 1,
                _ => 0,
            };
            let (sign, digits) = body.split_at(sign_len);
            out.push_str(sign);
            out.extend(std::iter::repeat('0').take(padding));
            out.push_str(digits);
        } else {
            out.extend(std::iter::repeat(' ').take(padding));
            out.push_str(&body);
        }
    }
}

fn parse_number(chars: &mut Peekable<Chars<'_>>) -> Option<usize> {
    let mut value: Option<usize> = None;
    while let Some(digit) = chars.peek().and_then(|c| c.to_digit(10)) {
        value = Some(value.unwrap_or(0).saturating_mul(10).saturating_add(digit as usize));
        chars.next();
    }
    value
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Verb(char, Directive),
    BadVerb(char),
    NoVerb,
}

/// A pre-parsed format string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    segments: Vec<Segment>,
}

impl Pattern {
    pub fn parse(format: &str) -> Self {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = format.chars().peekable();

        while let Some(c) = chars.next() {
            if c != '%' {
                literal.push(c);
                continue;
            }

            if chars.peek() == Some(&'%') {
                chars.next();
                literal.push('%');
                continue;
            }

            if !literal.is_empty() {
                segments.push(Segment::Literal(std::mem::take(&mut literal)));
            }
            let directive = Directive::parse(&mut chars);
            segments.push(match chars.next() {
                Some(verb) if verb.is_ascii_alphabetic() => Segment::Verb(verb, directive),
                Some(other) => Segment::BadVerb(other),
                None => Segment::NoVerb,
            });
        }

        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Self { segments }
    }

    /// Number of argument-consuming verbs
    pub fn verb_count(&self) -> usize {
        self.segments
            .iter()
            .filter(|s| matches!(s, Segment::Verb(..)))
            .count()
    }

    pub fn render(&self, args: &[&dyn fmt::Display]) -> String {
        let mut out = String::new();
        let mut remaining = args.iter();

        // Writing into a String cannot fail, so the fmt::Result is dropped.
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Verb(verb, directive) => match remaining.next() {
                    Some(arg) => directive.write(&mut out, *arg),
                    None => {
                        let _ = write!(out, "%!{}(MISSING)", verb);
                    }
                },
                Segment::BadVerb(c) => {
                    let _ = write!(out, "%!{}(BADVERB)", c);
                }
                Segment::NoVerb => out.push_str("%!(NOVERB)"),
            }
        }

        let extra: Vec<String> = remaining.map(|arg| arg.to_string()).collect();
        if !extra.is_empty() {
            let _ = write!(out, "%!(EXTRA {})", extra.join(", "));
        }

        out
    }
}

/// Interpolate `args` into `format` in one step
pub fn interpolate(format: &str, args: &[&dyn fmt::Display]) -> String {
    if args.is_empty() && !format.contains('%') {
        return format.to_string();
    }
    Pattern::parse(format).render(args)
}

/// Double every `%` so `value` survives interpolation unchanged
pub fn escape(value: &str) -> String {
    value.replace('%', "%%")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_message_passes_through() {
        assert_eq!(interpolate("MSG", &[]), "MSG");
        assert_eq!(interpolate("", &[]), "");
    }

    #[test]
    fn test_positional_verbs() {
        assert_eq!(interpolate("%s", &[&"MSG"]), "MSG");
        assert_eq!(
            interpolate("user %s retried %d times (%v)", &[&"ada", &3, &true]),
            "user ada retried 3 times (true)"
        );
    }

    #[test]
    fn test_percent_literal() {
        assert_eq!(interpolate("disk at 95%%", &[]), "disk at 95%");
    }

    #[test]
    fn test_missing_argument_marker() {
        assert_eq!(interpolate("%s and %d", &[&"one"]), "one and %!d(MISSING)");
    }

    #[test]
    fn test_extra_argument_marker() {
        assert_eq!(interpolate("MSG", &[&1, &"two"]), "MSG%!(EXTRA 1, two)");
    }

    #[test]
    fn test_bad_and_missing_verbs() {
        assert_eq!(interpolate("100%", &[]), "100%!(NOVERB)");
        assert_eq!(interpolate("%3", &[]), "%!(NOVERB)");
        assert_eq!(interpolate("%!", &[]), "%!!(BADVERB)");
    }

    #[test]
    fn test_width_align_and_precision() {
        assert_eq!(
            interpolate("%5d|%-4s|%.2f", &[&3, &"ab", &3.14159]),
            "    3|ab  |3.14"
        );
    }

    #[test]
    fn test_width() {
        assert_eq!(interpolate("[%6s]", &[&"pump"]), "[  pump]");
        assert_eq!(interpolate("[%2s]", &[&"overflow"]), "[overflow]");
    }

    #[test]
    fn test_left_align() {
        assert_eq!(interpolate("[%-6s]", &[&"pump"]), "[pump  ]");
        assert_eq!(interpolate("[%-05d]", &[&42]), "[42   ]");
    }

    #[test]
    fn test_precision() {
        assert_eq!(interpolate("%.3f", &[&2.0_f64]), "2.000");
        assert_eq!(interpolate("%.2s", &[&"energy"]), "en");
        assert_eq!(interpolate("%8.3f|", &[&-1.5_f64]), "  -1.500|");
    }

    #[test]
    fn test_zero_pad_and_sign() {
        assert_eq!(interpolate("%05d", &[&42]), "00042");
        assert_eq!(interpolate("%05d", &[&-42]), "-0042");
        assert_eq!(interpolate("%+d %+d", &[&7, &-7]), "+7 -7");
        assert_eq!(interpolate("%+06.1f", &[&2.5_f64]), "+002.5");
    }

    #[test]
    fn test_ignored_flags() {
        assert_eq!(interpolate("% d|%#v", &[&5, &"x"]), "5|x");
    }

    #[test]
    fn test_arguments_are_not_reinterpreted() {
        assert_eq!(interpolate("%s", &[&"50%s off"]), "50%s off");
    }

    #[test]
    fn test_escape_round_trip() {
        let raw = "rate=100%";
        assert_eq!(interpolate(&escape(raw), &[]), raw);
    }

    #[test]
    fn test_pattern_reuse() {
        let pattern = Pattern::parse("[%s] %s");
        assert_eq!(pattern.verb_count(), 2);
        assert_eq!(pattern.render(&[&"a", &"b"]), "[a] b");
        assert_eq!(pattern.render(&[&"c", &"d"]), "[c] d");
    }
}
