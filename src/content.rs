//! Content Derivation - form input to marketing copy
//!
//! Pure and total: any `FormInput` derives, even one with empty fields.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::form::FormInput;
use crate::templates::{
    interpolate, GoalTemplate, TemplateVars, FEATURE_TEMPLATE, FILLER_FEATURE_TEMPLATE,
    MIN_FEATURES, TESTIMONIAL_TEMPLATES,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedContent {
    pub hero_headline: String,
    pub hero_subtext: String,
    pub cta_text: String,
    /// Never fewer than three entries
    pub features_content: Vec<String>,
    /// Always exactly two entries
    pub testimonial_placeholders: Vec<String>,
}

/// Split free-text features on commas and newlines.
///
/// Tokens are trimmed, empty tokens dropped, order kept.
pub fn parse_features(raw: &str) -> Vec<&str> {
    raw.split([',', '\n'])
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .collect()
}

/// First space-delimited token of the audience, as used in testimonials.
///
/// Splits on U+0020 only; a string without spaces is returned whole and an
/// empty audience gives an empty token.
pub fn audience_first_token(audience: &str) -> &str {
    audience.split(' ').next().unwrap_or_default()
}

/// Derive the full content block for a form.
pub fn derive_content(input: &FormInput) -> DerivedContent {
    let template = GoalTemplate::for_goal(input.page_goal);
    let vars = TemplateVars {
        product: &input.product_name,
        audience: &input.target_audience,
        audience_first: audience_first_token(&input.target_audience),
        feature: "",
    };

    let features = parse_features(&input.key_features);
    let parsed_count = features.len();

    let mut features_content: Vec<String> = features
        .into_iter()
        .map(|feature| interpolate(FEATURE_TEMPLATE, &TemplateVars { feature, ..vars }))
        .collect();

    while features_content.len() < MIN_FEATURES {
        features_content.push(interpolate(FILLER_FEATURE_TEMPLATE, &vars));
    }

    let testimonial_placeholders = TESTIMONIAL_TEMPLATES
        .iter()
        .map(|t| interpolate(t, &vars))
        .collect();

    debug!(
        "derived content for goal {} ({} parsed features, {} blurbs)",
        input.page_goal.as_str(),
        parsed_count,
        features_content.len()
    );

    DerivedContent {
        hero_headline: template.render_headline(&vars),
        hero_subtext: template.render_subtext(&vars),
        cta_text: template.cta.to_string(),
        features_content,
        testimonial_placeholders,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::PageGoal;

    fn input(goal: PageGoal) -> FormInput {
        FormInput {
            product_name: "FitTrack Pro".to_string(),
            target_audience: "busy professionals".to_string(),
            key_features: "tracks steps, monitors sleep".to_string(),
            page_goal: goal,
            ..Default::default()
        }
    }

    #[test]
    fn test_parse_features_commas_and_newlines() {
        assert_eq!(
            parse_features(" a ,b\n\nc ,, \n d"),
            vec!["a", "b", "c", "d"]
        );
        assert!(parse_features("  , \n ").is_empty());
    }

    #[test]
    fn test_parse_features_keeps_duplicates_in_order() {
        assert_eq!(parse_features("b, a, b"), vec!["b", "a", "b"]);
    }

    #[test]
    fn test_feature_blurb_suffix() {
        let content = derive_content(&input(PageGoal::Sales));
        assert_eq!(
            content.features_content[0],
            "tracks steps - designed to enhance your experience and deliver exceptional results."
        );
        assert_eq!(
            content.features_content[2],
            "Premium support and regular updates to ensure you always have the best experience with FitTrack Pro."
        );
    }

    #[test]
    fn test_more_than_three_features_kept() {
        let mut form = input(PageGoal::Sales);
        form.key_features = "a\nb\nc\nd\ne".to_string();
        assert_eq!(derive_content(&form).features_content.len(), 5);
    }

    #[test]
    fn test_goal_headlines() {
        let sales = derive_content(&input(PageGoal::Sales));
        assert_eq!(
            sales.hero_headline,
            "Introducing FitTrack Pro: The Ultimate Solution for busy professionals"
        );

        let leads = derive_content(&input(PageGoal::LeadGeneration));
        assert_eq!(leads.hero_headline, "FitTrack Pro: Empowering busy professionals to Succeed");
        assert_eq!(leads.cta_text, "Get Started Free");

        let booking = derive_content(&input(PageGoal::Booking));
        assert_eq!(booking.hero_headline, "Book Your FitTrack Pro Experience Today");
        assert_eq!(
            booking.hero_subtext,
            "Don't miss out on the opportunity to transform your experience as busy professionals. Limited spots available."
        );

        let info = derive_content(&input(PageGoal::Information));
        assert_eq!(
            info.hero_subtext,
            "Learn more about our innovative approach and why busy professionals are choosing FitTrack Pro over alternatives."
        );
    }

    #[test]
    fn test_testimonials() {
        let content = derive_content(&input(PageGoal::Sales));
        assert_eq!(content.testimonial_placeholders.len(), 2);
        assert!(content.testimonial_placeholders[0].starts_with("FitTrack Pro completely transformed"));
        assert!(content.testimonial_placeholders[1].starts_with("As a busy, I was skeptical"));
    }

    #[test]
    fn test_audience_first_token_edges() {
        assert_eq!(audience_first_token("developers"), "developers");
        assert_eq!(audience_first_token(""), "");
        assert_eq!(audience_first_token(" leading space"), "");
        assert_eq!(audience_first_token("tab\tseparated words"), "tab\tseparated");
    }

    #[test]
    fn test_empty_form_still_derives() {
        let content = derive_content(&FormInput::default());
        assert_eq!(content.hero_headline, "Introducing : The Ultimate Solution for ");
        assert_eq!(content.features_content.len(), 3);
        assert!(content.testimonial_placeholders[1].starts_with("As a , I was"));
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(derive_content(&input(PageGoal::Sales))).unwrap();
        assert_eq!(json["ctaText"], "Buy Now");
        assert!(json["featuresContent"].is_array());
        assert!(json["testimonialPlaceholders"].is_array());
    }
}
