//! Styling tokens. Declared once here and handed to Tailwind as CSS custom
//! properties, see `tailwind.config.js`.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub name: &'static str,
    pub hex: &'static str,
}

impl Color {
    /// Space separated `r g b` channels, the form Tailwind needs to apply
    /// opacity modifiers to a CSS variable.
    pub fn rgb_channels(&self) -> Option<String> {
        let hex = self.hex.strip_prefix('#')?;
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(format!("{} {} {}", channel(0)?, channel(2)?, channel(4)?))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontFamily {
    pub name: &'static str,
    pub face: &'static str,
}

impl FontFamily {
    pub fn stack(&self) -> String {
        format!("\"{}\", system-ui, sans-serif", self.face)
    }
}

pub const SURFACE: Color = Color {
    name: "surface",
    hex: "#0c0c0e",
};

pub const PALETTE: &[Color] = &[
    SURFACE,
    Color {
        name: "surface-elevated",
        hex: "#141416",
    },
    Color {
        name: "surface-card",
        hex: "#1a1a1e",
    },
    Color {
        name: "border",
        hex: "#2a2a2e",
    },
    Color {
        name: "muted",
        hex: "#71717a",
    },
    Color {
        name: "accent",
        hex: "#22d3ee",
    },
    Color {
        name: "text-muted",
        hex: "#a1a1aa",
    },
];

pub const FONTS: &[FontFamily] = &[
    FontFamily {
        name: "heading",
        face: "Syne",
    },
    FontFamily {
        name: "body",
        face: "DM Sans",
    },
];

pub const FONT_STYLESHEET: &str = "https://fonts.googleapis.com/css2?family=DM+Sans:wght@400;500;600;700&family=Syne:wght@600;700&display=swap";

/// The `:root` block declaring every token.
pub fn css_variables() -> String {
    let colors = PALETTE.iter().filter_map(|c| {
        c.rgb_channels()
            .map(|rgb| format!("--color-{}: {rgb};", c.name))
    });
    let fonts = FONTS
        .iter()
        .map(|f| format!("--font-{}: {};", f.name, f.stack()));
    let decls = colors.chain(fonts).collect::<Vec<_>>().join(" ");
    format!(":root {{ {decls} }}")
}
