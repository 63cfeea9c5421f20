//! Form Input - what the builder form hands to the core

use serde::{Deserialize, Serialize};

pub const DEFAULT_PRIMARY_COLOR: &str = "#6E59A5";
pub const DEFAULT_SECONDARY_COLOR: &str = "#33C3F0";

const DOWNLOAD_SUFFIX: &str = "-landing-page.html";

/// The goal a landing page is built for. Selects the copy template set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PageGoal {
    #[default]
    Sales,
    LeadGeneration,
    Booking,
    Information,
}

impl PageGoal {
    pub const ALL: [PageGoal; 4] = [
        PageGoal::Sales,
        PageGoal::LeadGeneration,
        PageGoal::Booking,
        PageGoal::Information,
    ];

    /// Wire name, as used in JSON payloads
    pub fn as_str(&self) -> &'static str {
        match self {
            PageGoal::Sales => "sales",
            PageGoal::LeadGeneration => "leadGeneration",
            PageGoal::Booking => "booking",
            PageGoal::Information => "information",
        }
    }

    /// Human readable label for goal pickers
    pub fn label(&self) -> &'static str {
        match self {
            PageGoal::Sales => "Sales",
            PageGoal::LeadGeneration => "Lead Generation",
            PageGoal::Booking => "Booking",
            PageGoal::Information => "Information",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormInput {
    pub product_name: String,
    pub target_audience: String,
    /// Comma or newline separated
    pub key_features: String,
    pub brand_color_primary: String,
    pub brand_color_secondary: String,
    pub page_goal: PageGoal,
}

impl Default for FormInput {
    fn default() -> Self {
        Self {
            product_name: String::new(),
            target_audience: String::new(),
            key_features: String::new(),
            brand_color_primary: DEFAULT_PRIMARY_COLOR.to_string(),
            brand_color_secondary: DEFAULT_SECONDARY_COLOR.to_string(),
            page_goal: PageGoal::default(),
        }
    }
}

impl FormInput {
    /// File name offered when the exported page is downloaded.
    ///
    /// Every run of whitespace or path-unsafe characters becomes a single
    /// `-`, the whole name is lower-cased and leading dots are dropped:
    /// `"FitTrack Pro"` -> `fittrack-pro-landing-page.html`,
    /// `"A/B Tester"` -> `a-b-tester-landing-page.html`.
    pub fn download_filename(&self) -> String {
        let mut stem = String::with_capacity(self.product_name.len());
        let mut in_separator = false;
        for c in self.product_name.chars() {
            if c.is_whitespace() || is_path_unsafe(c) {
                if !in_separator {
                    stem.push('-');
                }
                in_separator = true;
            } else {
                stem.extend(c.to_lowercase());
                in_separator = false;
            }
        }
        let stem = stem.trim_start_matches('.');
        format!("{}{}", stem, DOWNLOAD_SUFFIX)
    }
}

/// Characters that are separators or reserved in file names on common platforms
fn is_path_unsafe(c: char) -> bool {
    c.is_control() || matches!(c, '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|')
}
