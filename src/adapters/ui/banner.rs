//! Startup banner: "PH-BROWSE" in figlet's standard font with a blue gradient.

use crossterm::ExecutableCommand;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use figlet_rs::FIGfont;
use std::io::{Write, stdout};

/// Header blue (#3498db).
const HEADER_BLUE: (u8, u8, u8) = (0x34, 0x98, 0xdb);
/// Slate (#2c3e50).
const SLATE: (u8, u8, u8) = (0x2c, 0x3e, 0x50);

/// Linear interpolation between two RGB colors. `t` in [0.0, 1.0].
fn lerp_rgb(a: (u8, u8, u8), b: (u8, u8, u8), t: f64) -> (u8, u8, u8) {
    let r = (f64::from(a.0) * (1.0 - t) + f64::from(b.0) * t).round() as u8;
    let g = (f64::from(a.1) * (1.0 - t) + f64::from(b.1) * t).round() as u8;
    let bl = (f64::from(a.2) * (1.0 - t) + f64::from(b.2) * t).round() as u8;
    (r, g, bl)
}

/// Prints the welcome banner followed by the version and the API in use.
/// Falls back to plain text if the figlet font cannot be loaded.
pub fn print_welcome(api: &str) {
    let mut out = stdout();
    let art = FIGfont::standard()
        .ok()
        .and_then(|font| font.convert("PH-BROWSE").map(|f| f.to_string()))
        .unwrap_or_else(|| "PH-BROWSE\n".to_string());
    let lines: Vec<&str> = art.lines().collect();
    let total = lines.len().max(1);

    for (i, line) in lines.iter().enumerate() {
        let t = if total <= 1 {
            1.0
        } else {
            i as f64 / (total - 1) as f64
        };
        let (r, g, b) = lerp_rgb(HEADER_BLUE, SLATE, t);
        let _ = out.execute(SetForegroundColor(Color::Rgb { r, g, b }));
        let _ = out.execute(Print(line));
        let _ = out.execute(Print("\r\n"));
        let _ = out.execute(ResetColor);
    }

    let _ = out.execute(SetForegroundColor(Color::Rgb {
        r: HEADER_BLUE.0,
        g: HEADER_BLUE.1,
        b: HEADER_BLUE.2,
    }));
    let _ = out.execute(Print(format!("v{}  {}\r\n", env!("CARGO_PKG_VERSION"), api)));
    let _ = out.execute(ResetColor);
    let _ = out.flush();
}
