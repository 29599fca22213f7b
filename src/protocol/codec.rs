//! Text codec for the engine protocol.
//!
//! Input lines look like `P <x> <y> <owner> <ships> <growth>`, with fields
//! separated by single spaces. Everything after a `#` is a comment and blank
//! lines are ignored. Planet ids are not
//! on the wire; the n-th accepted `P` line becomes planet `n`.
//!
//! Output is an order line `<source> <destination>` or a diagnostic line made
//! of space-joined values.

use std::fmt;
use std::str::FromStr;

use smallvec::SmallVec;

use crate::core::{GameState, Order, Planet, PlayerId};

use super::error::ParseError;

const PLANET_TAG: &str = "P";
const PLANET_TOKENS: usize = 6;

/// Parse a game-state block.
///
/// The whole block is rejected on the first bad line; no partial state is
/// ever returned.
pub fn parse(text: &str) -> Result<GameState, ParseError> {
    let mut state = GameState::new();

    for (index, raw) in text.lines().enumerate() {
        let line_number = index + 1;
        let line = strip_comment(raw);
        if line.trim().is_empty() {
            continue;
        }

        let tokens = tokenize(line);
        if tokens[0] != PLANET_TAG {
            return Err(ParseError::UnknownTag {
                line: line_number,
                tag: tokens[0].to_string(),
            });
        }
        if tokens.len() != PLANET_TOKENS {
            return Err(ParseError::WrongTokenCount {
                line: line_number,
                found: tokens.len(),
            });
        }

        let x: f64 = field(line_number, "x", tokens[1])?;
        let y: f64 = field(line_number, "y", tokens[2])?;
        let owner: u32 = field(line_number, "owner", tokens[3])?;
        let ship_count: u32 = field(line_number, "ship count", tokens[4])?;
        let growth_rate: u32 = field(line_number, "growth rate", tokens[5])?;

        state.push_planet(PlayerId::new(owner), ship_count, growth_rate, x, y);
    }

    Ok(state)
}

/// Split on single spaces. Repeated or leading spaces yield empty tokens;
/// only trailing empty tokens are dropped.
fn tokenize(line: &str) -> SmallVec<[&str; PLANET_TOKENS]> {
    let mut tokens: SmallVec<[&str; PLANET_TOKENS]> = line.split(' ').collect();
    while tokens.last().is_some_and(|t| t.is_empty()) {
        tokens.pop();
    }
    tokens
}

fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(start) => &line[..start],
        None => line,
    }
}

fn field<T: FromStr>(line: usize, name: &'static str, token: &str) -> Result<T, ParseError> {
    token.parse().map_err(|_| ParseError::InvalidNumber {
        line,
        field: name,
        value: token.to_string(),
    })
}

/// Serialize a planet as a `P` line, without the trailing newline.
///
/// Positions use six fixed decimals regardless of locale.
#[must_use]
pub fn serialize_planet(planet: &Planet) -> String {
    format!(
        "{PLANET_TAG} {:.6} {:.6} {} {} {}",
        planet.x(),
        planet.y(),
        planet.owner(),
        planet.ship_count(),
        planet.growth_rate()
    )
}

/// Serialize a whole state as newline-terminated `P` lines.
#[must_use]
pub fn serialize_state(state: &GameState) -> String {
    let mut out = String::new();
    for planet in state.planets() {
        out.push_str(&serialize_planet(planet));
        out.push('\n');
    }
    out
}

/// Serialize an order as `<source> <destination>`.
#[must_use]
pub fn serialize_order(order: &Order) -> String {
    format!("{} {}", order.source, order.destination)
}

/// Join the display forms of `values` with single spaces.
#[must_use]
pub fn serialize_log(values: &[&dyn fmt::Display]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
