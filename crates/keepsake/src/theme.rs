use eframe::egui::Color32;

#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub background: Color32,
    pub foreground: Color32,
    pub heading_color: Color32,
    pub accent: Color32,
    pub chrome_background: Color32,
    pub h1_size: f32,
    pub h2_size: f32,
    pub h3_size: f32,
    pub body_size: f32,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark".to_string(),
            background: Color32::from_rgb(0x2B, 0x1B, 0x2E),
            foreground: Color32::from_rgb(0xE8, 0xD5, 0xDE),
            heading_color: Color32::from_rgb(0xFF, 0xC2, 0xD4),
            accent: Color32::from_rgb(0xE8, 0x5D, 0x8A),
            chrome_background: Color32::from_rgb(0x40, 0x2A, 0x42),
            h1_size: 96.0,
            h2_size: 72.0,
            h3_size: 52.0,
            body_size: 40.0,
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light".to_string(),
            background: Color32::from_rgb(0xFF, 0xF0, 0xF4),
            foreground: Color32::from_rgb(0x4A, 0x2B, 0x38),
            heading_color: Color32::from_rgb(0xC2, 0x1E, 0x56),
            accent: Color32::from_rgb(0xE8, 0x5D, 0x8A),
            chrome_background: Color32::from_rgb(0xFF, 0xDD, 0xE7),
            h1_size: 96.0,
            h2_size: 72.0,
            h3_size: 52.0,
            body_size: 40.0,
        }
    }

    pub fn from_name(name: &str) -> Self {
        match name {
            "dark" => Self::dark(),
            _ => Self::light(),
        }
    }

    pub fn toggled(&self) -> Self {
        if self.name == "dark" {
            Self::light()
        } else {
            Self::dark()
        }
    }

    /// Apply opacity to a color
    pub fn with_opacity(color: Color32, opacity: f32) -> Color32 {
        Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), (opacity * 255.0) as u8)
    }

    pub fn heading_size(&self, level: u8) -> f32 {
        match level {
            1 => self.h1_size,
            2 => self.h2_size,
            3 => self.h3_size,
            _ => self.body_size,
        }
    }
}
