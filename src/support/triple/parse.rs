//! Text input for triples.
//!
//! The text form is the one written by [`Display`](std::fmt::Display):
//! three whitespace-separated values, optionally enclosed in parentheses.

use std::{fmt::Display, str::FromStr};

use super::{ParseTripleError, Triple};

impl<T> Triple<T>
where
    T: FromStr,
    T::Err: Display,
{
    /// Reads three consecutive values from a token stream.
    ///
    /// Only three tokens are consumed, so the caller can keep reading
    /// whatever follows.
    ///
    /// ```
    /// use pans_models::support::triple::Triple;
    ///
    /// let mut tokens = "4 5 6 7".split_whitespace();
    /// let triple: Triple<u32> = Triple::from_tokens(&mut tokens).unwrap();
    /// assert_eq!(triple, Triple::new(4, 5, 6));
    /// assert_eq!(tokens.next(), Some("7"));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`ParseTripleError`] if the stream ends early or a token is not
    /// a valid `T`.
    pub fn from_tokens<'s, I>(tokens: &mut I) -> Result<Self, ParseTripleError>
    where
        I: Iterator<Item = &'s str>,
    {
        let first = next_value(tokens, 0)?;
        let second = next_value(tokens, 1)?;
        let third = next_value(tokens, 2)?;

        Ok(Self::new(first, second, third))
    }
}

fn next_value<'s, T, I>(tokens: &mut I, position: usize) -> Result<T, ParseTripleError>
where
    T: FromStr,
    T::Err: Display,
    I: Iterator<Item = &'s str>,
{
    let token = tokens
        .next()
        .ok_or(ParseTripleError::TooFewValues { found: position })?;

    token
        .parse()
        .map_err(|err: T::Err| ParseTripleError::InvalidValue {
            token: token.to_owned(),
            position,
            reason: err.to_string(),
        })
}

/// Parses `(a b c)` or `a b c`.
impl<T> FromStr for Triple<T>
where
    T: FromStr,
    T::Err: Display,
{
    type Err = ParseTripleError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();

        let body = match (trimmed.strip_prefix('('), trimmed.ends_with(')')) {
            (Some(rest), true) => rest.strip_suffix(')').unwrap_or(rest),
            (None, false) => trimmed,
            _ => {
                return Err(ParseTripleError::UnbalancedParentheses {
                    input: input.to_owned(),
                });
            }
        };

        let mut tokens = body.split_whitespace();
        let triple = Self::from_tokens(&mut tokens)?;

        match tokens.count() {
            0 => Ok(triple),
            extra => Err(ParseTripleError::TooManyValues { found: 3 + extra }),
        }
    }
}
