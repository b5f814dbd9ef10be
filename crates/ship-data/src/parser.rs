//! Reader and writer for the `ships.dat` store.
//!
//! One ship per line:
//!
//! ```text
//! id::name::planet::shipType::prodDateMillis::isUsed::speed::crewSize::rating
//! 1::Orion III::Mars::MERCHANT::32157363600000::true::0.82::617::1.31
//! ```
//!
//! Blank lines and lines starting with `#` are skipped. Name and planet are
//! free text, so `%`, `:`, `\n` and `\r` inside them are percent-encoded on
//! write.
//!
//! Ids must be positive, unique within the file and below `u64::MAX` (the
//! store always needs room for the next id).

use chrono::DateTime;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::{Result, ShipError};
use crate::types::{Ship, ShipType};

const FIELD_SEPARATOR: &str = "::";
const FIELD_COUNT: usize = 9;

/// Parse the ships file at `path`
pub fn parse_ships(path: &Path) -> Result<Vec<Ship>> {
    let content = fs::read_to_string(path)?;
    let file = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    parse_ships_str(&content, &file)
}

/// Parse ships from already-loaded text; `file` is only used in error messages
pub fn parse_ships_str(content: &str, file: &str) -> Result<Vec<Ship>> {
    let mut ships = Vec::new();
    // id -> line it was first seen on
    let mut seen: HashMap<u64, usize> = HashMap::new();

    for (idx, line) in content.lines().enumerate() {
        let line_no = idx + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        // Names and planets may carry edge whitespace, so parse the raw line
        let ship = parse_ship_line(line, file, line_no)?;
        if let Some(id) = ship.id {
            if let Some(first) = seen.insert(id, line_no) {
                return Err(ShipError::ParseError {
                    file: file.to_string(),
                    line: line_no,
                    reason: format!("duplicate id {} (first used on line {})", id, first),
                });
            }
        }
        ships.push(ship);
    }

    Ok(ships)
}

fn parse_ship_line(line: &str, file: &str, line_no: usize) -> Result<Ship> {
    let parse_error = |reason: String| ShipError::ParseError {
        file: file.to_string(),
        line: line_no,
        reason,
    };

    let parts: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    if parts.len() != FIELD_COUNT {
        return Err(parse_error(format!(
            "expected {} fields but found {}",
            FIELD_COUNT,
            parts.len()
        )));
    }

    let id: u64 = parts[0]
        .parse()
        .map_err(|e| parse_error(format!("Invalid id: {}", e)))?;
    if id == 0 || id == u64::MAX {
        return Err(parse_error(format!("id {} is out of range", id)));
    }
    let ship_type: ShipType = parts[3]
        .parse()
        .map_err(|_| parse_error(format!("Invalid ship type: {}", parts[3])))?;
    let millis: i64 = parts[4]
        .parse()
        .map_err(|e| parse_error(format!("Invalid prodDate: {}", e)))?;
    let prod_date = DateTime::from_timestamp_millis(millis)
        .ok_or_else(|| parse_error(format!("prodDate out of range: {}", millis)))?;
    let is_used = parts[5]
        .parse()
        .map_err(|e| parse_error(format!("Invalid isUsed: {}", e)))?;
    let speed = parts[6]
        .parse()
        .map_err(|e| parse_error(format!("Invalid speed: {}", e)))?;
    let crew_size = parts[7]
        .parse()
        .map_err(|e| parse_error(format!("Invalid crewSize: {}", e)))?;
    let rating = parts[8]
        .parse()
        .map_err(|e| parse_error(format!("Invalid rating: {}", e)))?;

    Ok(Ship {
        id: Some(id),
        name: decode_text(parts[1]),
        planet: decode_text(parts[2]),
        ship_type,
        prod_date,
        is_used,
        speed,
        crew_size,
        rating,
    })
}

/// Render ships in `ships.dat` format. Ships without an id are skipped.
pub fn render_ships(ships: &[Ship]) -> String {
    let mut out = String::new();
    for ship in ships {
        let Some(id) = ship.id else {
            continue;
        };
        let fields = [
            id.to_string(),
            encode_text(&ship.name),
            encode_text(&ship.planet),
            ship.ship_type.to_string(),
            ship.prod_date.timestamp_millis().to_string(),
            ship.is_used.to_string(),
            ship.speed.to_string(),
            ship.crew_size.to_string(),
            ship.rating.to_string(),
        ];
        out.push_str(&fields.join(FIELD_SEPARATOR));
        out.push('\n');
    }
    out
}

/// Write ships to `path`, replacing the file atomically
pub fn write_ships(path: &Path, ships: &[Ship]) -> Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }
    let tmp = path.with_extension("dat.tmp");
    fs::write(&tmp, render_ships(ships))?;
    fs::rename(&tmp, path)?;
    Ok(())
}

fn encode_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '%' => out.push_str("%25"),
            ':' => out.push_str("%3A"),
            '\n' => out.push_str("%0A"),
            '\r' => out.push_str("%0D"),
            _ => out.push(c),
        }
    }
    out
}

/// Single left-to-right pass, so an encoded `%` is never decoded twice
fn decode_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(pos) = rest.find('%') {
        out.push_str(&rest[..pos]);
        let escape = rest.get(pos..pos + 3);
        let decoded = match escape {
            Some("%25") => Some('%'),
            Some("%3A") => Some(':'),
            Some("%0A") => Some('\n'),
            Some("%0D") => Some('\r'),
            _ => None,
        };
        match decoded {
            Some(c) => {
                out.push(c);
                rest = &rest[pos + 3..];
            }
            None => {
                out.push('%');
                rest = &rest[pos + 1..];
            }
        }
    }
    out.push_str(rest);
    out
}
